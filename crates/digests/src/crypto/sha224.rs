use traits::Digest;

use crate::engine::{BlockDigest, Engine};
use crate::util::{be_state_bytes, write_len_be64};

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 28;

// SHA-224 initial hash value (FIPS 180-4). The compression function is
// SHA-256's; only the IV and the seven-word output differ.
const H0: [u32; 8] = [
  0xc105_9ed8,
  0x367c_d507,
  0x3070_dd17,
  0xf70e_5939,
  0xffc0_0b31,
  0x6858_1511,
  0x64f9_8fa7,
  0xbefa_4fa4,
];

pub(crate) struct Sha224Core;

impl BlockDigest<BLOCK_LEN, OUT_LEN> for Sha224Core {
  type State = [u32; 8];
  const IV: [u32; 8] = H0;
  const LENGTH_LEN: usize = 8;

  #[inline(always)]
  fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    super::sha256::compress_block(state, block);
  }

  #[inline(always)]
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
    write_len_be64(block, bit_len);
  }

  #[inline(always)]
  fn serialize(state: &[u32; 8]) -> [u8; OUT_LEN] {
    be_state_bytes(state)
  }
}

#[derive(Clone, Default)]
pub struct Sha224 {
  engine: Engine<Sha224Core, BLOCK_LEN, OUT_LEN>,
}

impl Digest for Sha224 {
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
