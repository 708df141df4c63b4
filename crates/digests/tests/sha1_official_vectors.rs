use digests::crypto::Sha1;
use digests::Digest as _;
use hex_literal::hex;

#[test]
fn sha1_official_vectors() {
  // FIPS 180-4 short-message vectors.
  let cases: &[(&[u8], [u8; 20])] = &[
    (b"", hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")),
    (b"a", hex!("86f7e437faa5a7fce15d1ddcb9eaeaea377667b8")),
    (b"abc", hex!("a9993e364706816aba3e25717850c26c9cd0d89d")),
    (
      b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
      hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
    ),
    (
      b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
      hex!("a49b2446a02c645bf419f995b67091253a04a259"),
    ),
  ];
  for (i, (input, expected)) in cases.iter().enumerate() {
    assert_eq!(
      &Sha1::digest(input),
      expected,
      "sha1 vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn sha1_million_a() {
  let mut h = Sha1::new();
  h.update_repeated(b'a', 1_000_000);
  assert_eq!(h.finalize(), hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f"));
}

#[test]
#[ignore = "hashes 1 GiB; run with --ignored"]
fn sha1_extremely_long_message() {
  // NIST extremely-long-message vector: 2^24 repetitions of a 64-byte
  // pattern, exercising padding arithmetic across 2^24 exact blocks.
  let pattern = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno";
  let mut h = Sha1::new();
  for _ in 0..16_777_216u32 {
    h.update(pattern);
  }
  assert_eq!(h.finalize(), hex!("7789f0c9ef7bfc40d93311143dfbe69e2017f592"));
}
