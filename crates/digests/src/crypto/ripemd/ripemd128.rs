#![allow(clippy::indexing_slicing)] // Fixed-size register files + round tables

use traits::Digest;

use super::{round_fn, step4, IDX_LEFT, IDX_RIGHT, K_LEFT, K_RIGHT_NARROW, SHIFT_LEFT, SHIFT_RIGHT};
use crate::engine::{BlockDigest, Engine};
use crate::util::{le_block_words, le_state_bytes, write_len_le64};

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 16;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
  let x = le_block_words(block);

  let mut left = *state;
  let mut right = *state;

  for group in 0..4 {
    for i in 0..16 {
      let fl = round_fn(group, left[1], left[2], left[3]);
      step4(&mut left, fl, x[IDX_LEFT[group][i]], K_LEFT[group], SHIFT_LEFT[group][i]);

      let fr = round_fn(3 - group, right[1], right[2], right[3]);
      step4(&mut right, fr, x[IDX_RIGHT[group][i]], K_RIGHT_NARROW[group], SHIFT_RIGHT[group][i]);
    }
  }

  let t = state[1].wrapping_add(left[2]).wrapping_add(right[3]);
  state[1] = state[2].wrapping_add(left[3]).wrapping_add(right[0]);
  state[2] = state[3].wrapping_add(left[0]).wrapping_add(right[1]);
  state[3] = state[0].wrapping_add(left[1]).wrapping_add(right[2]);
  state[0] = t;
}

pub(crate) struct Ripemd128Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Ripemd128Core {
  type State = [u32; 4];
  const IV: [u32; 4] = H0;
  const LENGTH_LEN: usize = 8;

  #[inline(always)]
  fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    compress_block(state, block);
  }

  #[inline(always)]
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
    write_len_le64(block, bit_len);
  }

  #[inline(always)]
  fn serialize(state: &[u32; 4]) -> [u8; OUT_LEN] {
    le_state_bytes(state)
  }
}

#[derive(Clone, Default)]
pub struct Ripemd128 {
  engine: Engine<Ripemd128Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Ripemd128 {
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
