use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes_64, write_len_be128};

const BLOCK_LEN: usize = 128;
const OUT_LEN: usize = 32;

// SHA-512/256 initial hash value (FIPS 180-4 §5.3.6). A distinct IV, not a
// truncation of SHA-512's.
const H0: [u64; 8] = [
  0x22312194fc2bf72c,
  0x9f555fa3c84c64c2,
  0x2393b86b6f53b151,
  0x963877195940eabd,
  0x96283ee2a88effe3,
  0xbe5e1e2553863992,
  0x2b0199fc2c85b8aa,
  0x0eb72ddc81c52ca2,
];

pub(crate) struct Sha512_256Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha512_256Core {
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
pub struct Sha512_256 {
  engine: Engine<Sha512_256Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha512_256 {
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
