#![allow(clippy::indexing_slicing)] // Fixed-size arrays + message schedule

use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes, rotl32, write_len_be64};

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 20;

// FIPS 180-4 initial hash value.
const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

// One constant per 20-round group.
const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u32; 80];
  let (chunks, _) = block.as_chunks::<4>();
  for (i, c) in chunks.iter().enumerate() {
    w[i] = u32::from_be_bytes(*c);
  }
  for i in 16..80 {
    w[i] = rotl32(w[i - 16] ^ w[i - 14] ^ w[i - 8] ^ w[i - 3], 1);
  }

  let [mut a, mut b, mut c, mut d, mut e] = *state;

  macro_rules! round {
    ($f:expr, $k:expr, $wi:expr) => {{
      let t = rotl32(a, 5)
        .wrapping_add($f)
        .wrapping_add(e)
        .wrapping_add($k)
        .wrapping_add($wi);
      e = d;
      d = c;
      c = rotl32(b, 30);
      b = a;
      a = t;
    }};
  }

  for &wi in &w[..20] {
    round!(ch(b, c, d), K[0], wi);
  }
  for &wi in &w[20..40] {
    round!(parity(b, c, d), K[1], wi);
  }
  for &wi in &w[40..60] {
    round!(maj(b, c, d), K[2], wi);
  }
  for &wi in &w[60..] {
    round!(parity(b, c, d), K[3], wi);
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
}

pub(crate) struct Sha1Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha1Core {
  type State = [u32; 5];
  const IV: [u32; 5] = H0;
  const LENGTH_LEN: usize = 8;

  #[inline(always)]
  fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    compress_block(state, block);
  }

  #[inline(always)]
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
    write_len_be64(block, bit_len);
  }

  #[inline(always)]
  fn serialize(state: &[u32; 5]) -> [u8; OUT_LEN] {
    be_state_bytes(state)
  }
}

#[derive(Clone, Default)]
pub struct Sha1 {
  engine: Engine<Sha1Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha1 {
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
