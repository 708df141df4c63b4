#![allow(clippy::indexing_slicing)] // Fixed-size block buffer math

//! Shared Merkle–Damgård block accumulator.
//!
//! Every algorithm in this crate is the same machine: stage bytes into a
//! fixed block buffer, run a family-specific compression function once per
//! filled block, and at finalization apply strengthened length-padding to a
//! copy of the state. [`Engine`] owns that machine; [`BlockDigest`] is the
//! per-family strategy it is parameterized over.

use core::marker::PhantomData;

/// Compression strategy for one hash family.
///
/// `BLOCK_LEN` is the compression block size in bytes (64, or 128 for the
/// 64-bit SHA-2 shapes); `OUT_LEN` the digest size. Implementations are pure:
/// `compress` maps (state, one block) to the next state and is the only place
/// family semantics live.
pub(crate) trait BlockDigest<const BLOCK_LEN: usize, const OUT_LEN: usize> {
  /// Running chaining state, a fixed array of words.
  type State: Copy;

  /// Published initialization vector.
  const IV: Self::State;

  /// Width in bytes of the trailing message-length field (8 or 16).
  const LENGTH_LEN: usize;

  /// Compress one full block into `state`.
  fn compress(state: &mut Self::State, block: &[u8; BLOCK_LEN]);

  /// Encode the pre-padding bit length into the tail of the final block.
  fn write_bit_len(block: &mut [u8; BLOCK_LEN], bit_len: u128);

  /// Serialize the state in the family's byte order, truncated to `OUT_LEN`.
  fn serialize(state: &Self::State) -> [u8; OUT_LEN];
}

/// Generic block accumulator.
///
/// `state` reflects compression of exactly all completed blocks;
/// `block[..block_len]` holds the staged remainder; `bytes_hashed` counts
/// compressed bytes only, so the logical stream length is
/// `bytes_hashed + block_len`. Counter overflow on multi-exabyte streams is
/// unguarded.
pub(crate) struct Engine<D, const BLOCK_LEN: usize, const OUT_LEN: usize>
where
  D: BlockDigest<BLOCK_LEN, OUT_LEN>,
{
  state: D::State,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u128,
  family: PhantomData<D>,
}

impl<D, const BLOCK_LEN: usize, const OUT_LEN: usize> Clone for Engine<D, BLOCK_LEN, OUT_LEN>
where
  D: BlockDigest<BLOCK_LEN, OUT_LEN>,
{
  #[inline]
  fn clone(&self) -> Self {
    Self {
      state: self.state,
      block: self.block,
      block_len: self.block_len,
      bytes_hashed: self.bytes_hashed,
      family: PhantomData,
    }
  }
}

impl<D, const BLOCK_LEN: usize, const OUT_LEN: usize> Default for Engine<D, BLOCK_LEN, OUT_LEN>
where
  D: BlockDigest<BLOCK_LEN, OUT_LEN>,
{
  #[inline]
  fn default() -> Self {
    Self {
      state: D::IV,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      family: PhantomData,
    }
  }
}

impl<D, const BLOCK_LEN: usize, const OUT_LEN: usize> Engine<D, BLOCK_LEN, OUT_LEN>
where
  D: BlockDigest<BLOCK_LEN, OUT_LEN>,
{
  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        D::compress(&mut self.state, &block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      for block in blocks {
        D::compress(&mut self.state, block);
      }
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u128);
    }
    data = rest;

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  /// Append `count` copies of `byte` without materializing them.
  pub(crate) fn update_repeated(&mut self, byte: u8, mut count: u64) {
    if count == 0 {
      return;
    }

    let fill = [byte; BLOCK_LEN];

    if self.block_len != 0 {
      let take = core::cmp::min((BLOCK_LEN - self.block_len) as u64, count) as usize;
      self.block[self.block_len..self.block_len + take].copy_from_slice(&fill[..take]);
      self.block_len += take;
      count -= take as u64;

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        D::compress(&mut self.state, &block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        self.block_len = 0;
      }
    }

    while count >= BLOCK_LEN as u64 {
      D::compress(&mut self.state, &fill);
      self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
      count -= BLOCK_LEN as u64;
    }

    if count > 0 {
      let rest = count as usize;
      self.block[..rest].copy_from_slice(&fill[..rest]);
      self.block_len = rest;
    }
  }

  /// Strengthened length-padding and serialization, on copies.
  ///
  /// The engine itself is untouched: further updates continue the stream as
  /// if finalize had never been called.
  pub(crate) fn finalize(&self) -> [u8; OUT_LEN] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u128);

    block[block_len] = 0x80;
    block_len += 1;

    let len_offset = BLOCK_LEN - D::LENGTH_LEN;
    if block_len > len_offset {
      block[block_len..].fill(0);
      D::compress(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..len_offset].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    D::write_bit_len(&mut block, bit_len);
    D::compress(&mut state, &block);

    D::serialize(&state)
  }

  #[inline]
  pub(crate) fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  use super::{BlockDigest, Engine};

  // Toy 8-byte-block family: state is (xor-fold, block count). Enough to
  // observe staging, compression counts, and padding placement.
  struct Fold;

  impl BlockDigest<8, 16> for Fold {
    type State = [u64; 2];
    const IV: [u64; 2] = [0x5555_5555_5555_5555, 0];
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u64; 2], block: &[u8; 8]) {
      state[0] ^= u64::from_le_bytes(*block).rotate_left(state[1] as u32);
      state[1] += 1;
    }

    fn write_bit_len(block: &mut [u8; 8], bit_len: u128) {
      block[0..8].copy_from_slice(&(bit_len as u64).to_le_bytes());
    }

    fn serialize(state: &[u64; 2]) -> [u8; 16] {
      let mut out = [0u8; 16];
      out[..8].copy_from_slice(&state[0].to_le_bytes());
      out[8..].copy_from_slice(&state[1].to_le_bytes());
      out
    }
  }

  fn block_count(out: &[u8; 16]) -> u64 {
    u64::from_le_bytes(out[8..].try_into().unwrap())
  }

  #[test]
  fn chunking_is_invisible() {
    let data: alloc::vec::Vec<u8> = (0..201u8).collect();

    let mut whole = Engine::<Fold, 8, 16>::default();
    whole.update(&data);
    let expected = whole.finalize();

    for split in 0..data.len() {
      let mut h = Engine::<Fold, 8, 16>::default();
      h.update(&data[..split]);
      h.update(&data[split..]);
      assert_eq!(h.finalize(), expected, "split at {split}");
    }
  }

  #[test]
  fn compression_count_matches_padding_rule() {
    // 0 bytes staged: 0x80 + length fit in one block.
    let h = Engine::<Fold, 8, 16>::default();
    assert_eq!(block_count(&h.finalize()), 2);

    // A full block compresses eagerly; padding then adds two more
    // (8 staged bytes would leave no room for 0x80).
    let mut h = Engine::<Fold, 8, 16>::default();
    h.update(&[0u8; 8]);
    assert_eq!(block_count(&h.finalize()), 3);
  }

  #[test]
  fn finalize_leaves_engine_usable() {
    let mut h = Engine::<Fold, 8, 16>::default();
    h.update(b"abc");
    let first = h.finalize();
    assert_eq!(h.finalize(), first);

    h.update(b"def");
    let mut oneshot = Engine::<Fold, 8, 16>::default();
    oneshot.update(b"abcdef");
    assert_eq!(h.finalize(), oneshot.finalize());
  }

  #[test]
  fn repeated_bytes_match_literal_buffer() {
    for count in [0u64, 1, 7, 8, 9, 63, 64, 65, 1000] {
      let mut repeated = Engine::<Fold, 8, 16>::default();
      repeated.update(b"x");
      repeated.update_repeated(0xA5, count);

      let mut literal = Engine::<Fold, 8, 16>::default();
      literal.update(b"x");
      literal.update(&alloc::vec![0xA5u8; count as usize]);

      assert_eq!(repeated.finalize(), literal.finalize(), "count {count}");
    }
  }

  extern crate alloc;
}
