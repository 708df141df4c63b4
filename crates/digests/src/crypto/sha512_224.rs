use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes_64, write_len_be128};

const BLOCK_LEN: usize = 128;
const OUT_LEN: usize = 28;

// SHA-512/224 initial hash value (FIPS 180-4 §5.3.6). A distinct IV, not a
// truncation of SHA-512's; the 28-byte digest ends mid-word.
const H0: [u64; 8] = [
  0x8c3d37c819544da2,
  0x73e1996689dcd4d6,
  0x1dfab7ae32ff9c82,
  0x679dd514582f9fcf,
  0x0f6d2b697bd44da8,
  0x77e36f7304c48942,
  0x3f9d85a86a1d36c8,
  0x1112e6ad91d692a1,
];

pub(crate) struct Sha512_224Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha512_224Core {
  type State = [u64; 8];
  const IV: [u64; 8] = H0;
  const LENGTH_LEN: usize = 16;

  #[inline(always)]
  fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    super::sha512::compress_block(state, block);
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
pub struct Sha512_224 {
  engine: Engine<Sha512_224Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha512_224 {
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
