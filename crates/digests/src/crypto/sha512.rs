#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes_64, rotr64, write_len_be128};

const BLOCK_LEN: usize = 128;
const OUT_LEN: usize = 64;

// SHA-512 initial hash value (FIPS 180-4).
const H0: [u64; 8] = [
  0x6a09e667f3bcc908,
  0xbb67ae8584caa73b,
  0x3c6ef372fe94f82b,
  0xa54ff53a5f1d36f1,
  0x510e527fade682d1,
  0x9b05688c2b3e6c1f,
  0x1f83d9abfb41bd6b,
  0x5be0cd19137e2179,
];

// Round constants for all 80 rounds of the 64-bit family.
const K: [u64; 80] = [
  0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc, 0x3956c25bf348b538,
  0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118, 0xd807aa98a3030242, 0x12835b0145706fbe,
  0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2, 0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235,
  0xc19bf174cf692694, 0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
  0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5, 0x983e5152ee66dfab,
  0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4, 0xc6e00bf33da88fc2, 0xd5a79147930aa725,
  0x06ca6351e003826f, 0x142929670a0e6e70, 0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed,
  0x53380d139d95b3df, 0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
  0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30, 0xd192e819d6ef5218,
  0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8, 0x19a4c116b8d2d0c8, 0x1e376c085141ab53,
  0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8, 0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373,
  0x682e6ff3d6b2b8a3, 0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
  0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b, 0xca273eceea26619c,
  0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178, 0x06f067aa72176fba, 0x0a637dc5a2c898a6,
  0x113f9804bef90dae, 0x1b710b35131c471b, 0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc,
  0x431d67c49c100d4c, 0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

// 64-bit sibling of the SHA-256 core: same 16-word ring buffer schedule,
// 80 rounds. Shared with SHA-384 and the SHA-512/t variants.
pub(crate) fn compress_block(state: &mut [u64; 8], block: &[u8; 128]) {
  let mut w = [0u64; 16];
  let (chunks, _) = block.as_chunks::<8>();
  for (i, c) in chunks.iter().enumerate() {
    w[i] = u64::from_be_bytes(*c);
  }
  let [
    mut w0,
    mut w1,
    mut w2,
    mut w3,
    mut w4,
    mut w5,
    mut w6,
    mut w7,
    mut w8,
    mut w9,
    mut w10,
    mut w11,
    mut w12,
    mut w13,
    mut w14,
    mut w15,
  ] = w;

  let mut a = state[0];
  let mut b = state[1];
  let mut c = state[2];
  let mut d = state[3];
  let mut e = state[4];
  let mut f = state[5];
  let mut g = state[6];
  let mut h = state[7];

  macro_rules! round {
    ($k:expr, $wi:expr) => {{
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add($k)
        .wrapping_add($wi);
      let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }};
  }

  macro_rules! sched {
    ($w_im2:expr, $w_im7:expr, $w_im15:expr, $w_im16:expr) => {{
      small_sigma1($w_im2)
        .wrapping_add($w_im7)
        .wrapping_add(small_sigma0($w_im15))
        .wrapping_add($w_im16)
    }};
  }

  round!(K[0], w0);
  round!(K[1], w1);
  round!(K[2], w2);
  round!(K[3], w3);
  round!(K[4], w4);
  round!(K[5], w5);
  round!(K[6], w6);
  round!(K[7], w7);
  round!(K[8], w8);
  round!(K[9], w9);
  round!(K[10], w10);
  round!(K[11], w11);
  round!(K[12], w12);
  round!(K[13], w13);
  round!(K[14], w14);
  round!(K[15], w15);

  w0 = sched!(w14, w9, w1, w0);
  round!(K[16], w0);
  w1 = sched!(w15, w10, w2, w1);
  round!(K[17], w1);
  w2 = sched!(w0, w11, w3, w2);
  round!(K[18], w2);
  w3 = sched!(w1, w12, w4, w3);
  round!(K[19], w3);
  w4 = sched!(w2, w13, w5, w4);
  round!(K[20], w4);
  w5 = sched!(w3, w14, w6, w5);
  round!(K[21], w5);
  w6 = sched!(w4, w15, w7, w6);
  round!(K[22], w6);
  w7 = sched!(w5, w0, w8, w7);
  round!(K[23], w7);
  w8 = sched!(w6, w1, w9, w8);
  round!(K[24], w8);
  w9 = sched!(w7, w2, w10, w9);
  round!(K[25], w9);
  w10 = sched!(w8, w3, w11, w10);
  round!(K[26], w10);
  w11 = sched!(w9, w4, w12, w11);
  round!(K[27], w11);
  w12 = sched!(w10, w5, w13, w12);
  round!(K[28], w12);
  w13 = sched!(w11, w6, w14, w13);
  round!(K[29], w13);
  w14 = sched!(w12, w7, w15, w14);
  round!(K[30], w14);
  w15 = sched!(w13, w8, w0, w15);
  round!(K[31], w15);
  w0 = sched!(w14, w9, w1, w0);
  round!(K[32], w0);
  w1 = sched!(w15, w10, w2, w1);
  round!(K[33], w1);
  w2 = sched!(w0, w11, w3, w2);
  round!(K[34], w2);
  w3 = sched!(w1, w12, w4, w3);
  round!(K[35], w3);
  w4 = sched!(w2, w13, w5, w4);
  round!(K[36], w4);
  w5 = sched!(w3, w14, w6, w5);
  round!(K[37], w5);
  w6 = sched!(w4, w15, w7, w6);
  round!(K[38], w6);
  w7 = sched!(w5, w0, w8, w7);
  round!(K[39], w7);
  w8 = sched!(w6, w1, w9, w8);
  round!(K[40], w8);
  w9 = sched!(w7, w2, w10, w9);
  round!(K[41], w9);
  w10 = sched!(w8, w3, w11, w10);
  round!(K[42], w10);
  w11 = sched!(w9, w4, w12, w11);
  round!(K[43], w11);
  w12 = sched!(w10, w5, w13, w12);
  round!(K[44], w12);
  w13 = sched!(w11, w6, w14, w13);
  round!(K[45], w13);
  w14 = sched!(w12, w7, w15, w14);
  round!(K[46], w14);
  w15 = sched!(w13, w8, w0, w15);
  round!(K[47], w15);
  w0 = sched!(w14, w9, w1, w0);
  round!(K[48], w0);
  w1 = sched!(w15, w10, w2, w1);
  round!(K[49], w1);
  w2 = sched!(w0, w11, w3, w2);
  round!(K[50], w2);
  w3 = sched!(w1, w12, w4, w3);
  round!(K[51], w3);
  w4 = sched!(w2, w13, w5, w4);
  round!(K[52], w4);
  w5 = sched!(w3, w14, w6, w5);
  round!(K[53], w5);
  w6 = sched!(w4, w15, w7, w6);
  round!(K[54], w6);
  w7 = sched!(w5, w0, w8, w7);
  round!(K[55], w7);
  w8 = sched!(w6, w1, w9, w8);
  round!(K[56], w8);
  w9 = sched!(w7, w2, w10, w9);
  round!(K[57], w9);
  w10 = sched!(w8, w3, w11, w10);
  round!(K[58], w10);
  w11 = sched!(w9, w4, w12, w11);
  round!(K[59], w11);
  w12 = sched!(w10, w5, w13, w12);
  round!(K[60], w12);
  w13 = sched!(w11, w6, w14, w13);
  round!(K[61], w13);
  w14 = sched!(w12, w7, w15, w14);
  round!(K[62], w14);
  w15 = sched!(w13, w8, w0, w15);
  round!(K[63], w15);
  w0 = sched!(w14, w9, w1, w0);
  round!(K[64], w0);
  w1 = sched!(w15, w10, w2, w1);
  round!(K[65], w1);
  w2 = sched!(w0, w11, w3, w2);
  round!(K[66], w2);
  w3 = sched!(w1, w12, w4, w3);
  round!(K[67], w3);
  w4 = sched!(w2, w13, w5, w4);
  round!(K[68], w4);
  w5 = sched!(w3, w14, w6, w5);
  round!(K[69], w5);
  w6 = sched!(w4, w15, w7, w6);
  round!(K[70], w6);
  w7 = sched!(w5, w0, w8, w7);
  round!(K[71], w7);
  w8 = sched!(w6, w1, w9, w8);
  round!(K[72], w8);
  w9 = sched!(w7, w2, w10, w9);
  round!(K[73], w9);
  w10 = sched!(w8, w3, w11, w10);
  round!(K[74], w10);
  w11 = sched!(w9, w4, w12, w11);
  round!(K[75], w11);
  w12 = sched!(w10, w5, w13, w12);
  round!(K[76], w12);
  w13 = sched!(w11, w6, w14, w13);
  round!(K[77], w13);
  w14 = sched!(w12, w7, w15, w14);
  round!(K[78], w14);
  w15 = sched!(w13, w8, w0, w15);
  round!(K[79], w15);

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
  state[5] = state[5].wrapping_add(f);
  state[6] = state[6].wrapping_add(g);
  state[7] = state[7].wrapping_add(h);
}

pub(crate) struct Sha512Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha512Core {
  type State = [u64; 8];
  const IV: [u64; 8] = H0;
  const LENGTH_LEN: usize = 16;

  #[inline(always)]
  fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    compress_block(state, block);
  }

  #[inline(always)]
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
    write_len_be128(block, bit_len);
  }

  #[inline(always)]
  fn serialize(state: &[u64; 8]) -> [u8; OUT_LEN] {
    be_state_bytes_64(state)
  }
}

#[derive(Clone, Default)]
pub struct Sha512 {
  engine: Engine<Sha512Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha512 {
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
