use std::io::{Cursor, Read, Write};

use digests::crypto::{Md5, Sha256};
use digests::Digest as _;

#[test]
fn reader_hashes_exactly_the_bytes_read() {
  let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();

  let mut reader = Sha256::reader(Cursor::new(data.clone()));
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();

  assert_eq!(sink, data);
  assert_eq!(reader.digest(), Sha256::digest(&data));
}

#[test]
fn reader_digest_tracks_partial_reads() {
  let data = b"the digest follows the read cursor".to_vec();
  let mut reader = Md5::reader(Cursor::new(data.clone()));

  let mut head = [0u8; 10];
  reader.read_exact(&mut head).unwrap();
  assert_eq!(reader.digest(), Md5::digest(&data[..10]));

  let mut rest = Vec::new();
  reader.read_to_end(&mut rest).unwrap();
  let (inner, digest) = reader.into_parts();
  assert_eq!(inner.into_inner(), data.clone());
  assert_eq!(digest, Md5::digest(&data));
}

#[test]
fn writer_hashes_written_bytes() {
  let mut writer = Sha256::writer(Vec::new());
  writer.write_all(b"hello ").unwrap();
  writer.write_all(b"world").unwrap();
  writer.flush().unwrap();

  let (out, digest) = writer.into_parts();
  assert_eq!(out, b"hello world".to_vec());
  assert_eq!(digest, Sha256::digest(b"hello world"));
}

#[test]
fn writer_vectored_writes_are_hashed_in_order() {
  let bufs = [std::io::IoSlice::new(b"abc"), std::io::IoSlice::new(b"def")];

  let mut writer = Sha256::writer(Vec::new());
  let written = writer.write_vectored(&bufs).unwrap();

  // A Vec writer accepts everything in one call.
  assert_eq!(written, 6);
  let (out, digest) = writer.into_parts();
  assert_eq!(out, b"abcdef".to_vec());
  assert_eq!(digest, Sha256::digest(b"abcdef"));
}
