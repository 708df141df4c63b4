#![allow(clippy::indexing_slicing)] // Fixed-size register files + round tables

use traits::Digest;

use super::{round_fn, step5, IDX_LEFT, IDX_RIGHT, K_LEFT, K_RIGHT, SHIFT_LEFT, SHIFT_RIGHT};
use crate::engine::{BlockDigest, Engine};
use crate::util::{le_block_words, le_state_bytes, write_len_le64};

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 40;

// Two independent 5-word halves; the second is the first with nibbles mirrored.
const H0: [u32; 10] = [
  0x6745_2301,
  0xefcd_ab89,
  0x98ba_dcfe,
  0x1032_5476,
  0xc3d2_e1f0,
  0x7654_3210,
  0xfedc_ba98,
  0x89ab_cdef,
  0x0123_4567,
  0x3c2d_1e0f,
];

// Which register crosses between the lines after each round group.
const SWAP: [usize; 5] = [1, 3, 0, 2, 4];

fn compress_block(state: &mut [u32; 10], block: &[u8; BLOCK_LEN]) {
  let x = le_block_words(block);

  let mut left = [state[0], state[1], state[2], state[3], state[4]];
  let mut right = [state[5], state[6], state[7], state[8], state[9]];

  for group in 0..5 {
    for i in 0..16 {
      let fl = round_fn(group, left[1], left[2], left[3]);
      step5(&mut left, fl, x[IDX_LEFT[group][i]], K_LEFT[group], SHIFT_LEFT[group][i]);

      let fr = round_fn(4 - group, right[1], right[2], right[3]);
      step5(&mut right, fr, x[IDX_RIGHT[group][i]], K_RIGHT[group], SHIFT_RIGHT[group][i]);
    }

    core::mem::swap(&mut left[SWAP[group]], &mut right[SWAP[group]]);
  }

  for i in 0..5 {
    state[i] = state[i].wrapping_add(left[i]);
    state[5 + i] = state[5 + i].wrapping_add(right[i]);
  }
}

pub(crate) struct Ripemd320Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Ripemd320Core {
  type State = [u32; 10];
  const IV: [u32; 10] = H0;
  const LENGTH_LEN: usize = 8;

  #[inline(always)]
  fn compress(state: &mut [u32; 10], block: &[u8; BLOCK_LEN]) {
    compress_block(state, block);
  }

  #[inline(always)]
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
    write_len_le64(block, bit_len);
  }

  #[inline(always)]
  fn serialize(state: &[u32; 10]) -> [u8; OUT_LEN] {
    le_state_bytes(state)
  }
}

#[derive(Clone, Default)]
pub struct Ripemd320 {
  engine: Engine<Ripemd320Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Ripemd320 {
  const OUTPUT_SIZE: usize = OUT_LEN;
  type Output = [u8; OUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn update_repeated(&mut self, byte: u8, count: u64) {
    self.engine.update_repeated(byte, count);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.engine.finalize()
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}
