use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes_64, write_len_be128};

const BLOCK_LEN: usize = 128;
const OUT_LEN: usize = 48;

// SHA-384 initial hash value (FIPS 180-4). Compression is SHA-512's; the
// digest is the first six state words.
const H0: [u64; 8] = [
  0xcbbb9d5dc1059ed8,
  0x629a292a367cd507,
  0x9159015a3070dd17,
  0x152fecd8f70e5939,
  0x67332667ffc00b31,
  0x8eb44a8768581511,
  0xdb0c2e0d64f98fa7,
  0x47b5481dbefa4fa4,
];

pub(crate) struct Sha384Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha384Core {
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
pub struct Sha384 {
  engine: Engine<Sha384Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha384 {
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
