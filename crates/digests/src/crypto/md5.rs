#![allow(clippy::indexing_slicing)] // Fixed-size arrays + round tables

use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{le_block_words, le_state_bytes, rotl32, write_len_le64};

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 16;

// RFC 1321 initial state.
const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// T[i] = floor(2^32 * |sin(i + 1)|), RFC 1321.
const T: [u32; 64] = [
  0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501, 0x698098d8,
  0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821, 0xf61e2562, 0xc040b340,
  0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8, 0x21e1cde6, 0xc33707d6, 0xf4d50d87,
  0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a, 0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
  0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70, 0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039,
  0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, 0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92,
  0xffeff47d, 0x85845dd1, 0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb,
  0xeb86d391,
];

const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
  (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
  (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn i_fn(x: u32, y: u32, z: u32) -> u32 {
  y ^ (x | !z)
}

fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
  let x = le_block_words(block);

  let [mut a, mut b, mut c, mut d] = *state;

  for i in 0..64 {
    let (func, idx) = match i / 16 {
      0 => (f(b, c, d), i),
      1 => (g(b, c, d), (5 * i + 1) % 16),
      2 => (h(b, c, d), (3 * i + 5) % 16),
      _ => (i_fn(b, c, d), (7 * i) % 16),
    };
    let t = rotl32(
      a.wrapping_add(func).wrapping_add(T[i]).wrapping_add(x[idx]),
      SHIFTS[i / 16][i % 4],
    );
    a = d;
    d = c;
    c = b;
    b = b.wrapping_add(t);
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
}

pub(crate) struct Md5Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Md5Core {
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
pub struct Md5 {
  engine: Engine<Md5Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Md5 {
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

#[cfg(test)]
mod tests {
  use traits::Digest as _;

  use super::Md5;

  fn hex16(bytes: &[u8; 16]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  extern crate alloc;

  #[test]
  fn known_vectors() {
    // RFC 1321 appendix A.5.
    assert_eq!(hex16(&Md5::digest(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex16(&Md5::digest(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
      hex16(&Md5::digest(b"message digest")),
      "f96b697d7cb7938d525a2f31aaf161d0"
    );
  }

  #[test]
  fn wrapped_rotation_on_high_words() {
    // Single block whose words have the high bit set everywhere; exercises
    // the wrapping adds in every round group.
    let block = [0xffu8; 64];
    assert_eq!(hex16(&Md5::digest(&block)), "aabd2b2a451504e119a243d8e775fdad");
  }
}
