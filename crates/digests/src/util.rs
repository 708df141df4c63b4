#![allow(clippy::indexing_slicing)] // Fixed-size array indexing and block parsing

#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

/// Parse a 64-byte block into sixteen little-endian words.
#[inline(always)]
pub fn le_block_words(block: &[u8; 64]) -> [u32; 16] {
  let mut w = [0u32; 16];
  let (chunks, _) = block.as_chunks::<4>();
  for (i, c) in chunks.iter().enumerate() {
    w[i] = u32::from_le_bytes(*c);
  }
  w
}

/// Serialize 32-bit state words little-endian, truncated to `OUT` bytes.
#[inline]
pub fn le_state_bytes<const OUT: usize>(state: &[u32]) -> [u8; OUT] {
  let mut out = [0u8; OUT];
  for (chunk, word) in out.chunks_mut(4).zip(state) {
    chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
  }
  out
}

/// Serialize 32-bit state words big-endian, truncated to `OUT` bytes.
#[inline]
pub fn be_state_bytes<const OUT: usize>(state: &[u32]) -> [u8; OUT] {
  let mut out = [0u8; OUT];
  for (chunk, word) in out.chunks_mut(4).zip(state) {
    chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
  }
  out
}

/// Serialize 64-bit state words big-endian, truncated to `OUT` bytes.
///
/// A trailing partial word is allowed (SHA-512/224 ends mid-word).
#[inline]
pub fn be_state_bytes_64<const OUT: usize>(state: &[u64]) -> [u8; OUT] {
  let mut out = [0u8; OUT];
  for (chunk, word) in out.chunks_mut(8).zip(state) {
    chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
  }
  out
}

/// Encode the bit length little-endian into the last 8 bytes of the block.
#[inline(always)]
pub fn write_len_le64<const BLOCK_LEN: usize>(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
  block[BLOCK_LEN - 8..].copy_from_slice(&(bit_len as u64).to_le_bytes());
}

/// Encode the bit length big-endian into the last 8 bytes of the block.
#[inline(always)]
pub fn write_len_be64<const BLOCK_LEN: usize>(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
  block[BLOCK_LEN - 8..].copy_from_slice(&(bit_len as u64).to_be_bytes());
}

/// Encode the bit length big-endian into the last 16 bytes of the block.
#[inline(always)]
pub fn write_len_be128<const BLOCK_LEN: usize>(block: &mut [u8; BLOCK_LEN], bit_len: u128) {
  block[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());
}
