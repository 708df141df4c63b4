use digests::crypto::{Md4, Md5};
use digests::Digest as _;
use hex_literal::hex;

fn run_fixed_vectors<const OUT: usize>(name: &str, cases: &[(&[u8], [u8; OUT])], digest: impl Fn(&[u8]) -> [u8; OUT]) {
  for (i, (input, expected)) in cases.iter().enumerate() {
    let actual = digest(input);
    assert_eq!(
      &actual, expected,
      "{name} vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn md4_official_vectors() {
  // RFC 1320 appendix A.5, plus the two-block NIST-style message.
  let cases: &[(&[u8], [u8; 16])] = &[
    (b"", hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
    (b"a", hex!("bde52cb31de33e46245e05fbdbd6fb24")),
    (b"abc", hex!("a448017aaf21d8525fc10ae87aa6729d")),
    (b"message digest", hex!("d9130a8164549fe818874806e1c7014b")),
    (b"abcdefghijklmnopqrstuvwxyz", hex!("d79e1c308aa5bbcdeea8ed63df412da9")),
    (
      b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
      hex!("4691a9ec81b1a6bd1ab8557240b245c5"),
    ),
    (
      b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
      hex!("043f8582f241db351ce627e153e7f0e4"),
    ),
    (
      b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
      hex!("e33b4ddc9c38f2199c3e7b164fcc0536"),
    ),
  ];
  run_fixed_vectors("md4", cases, Md4::digest);
}

#[test]
fn md5_official_vectors() {
  // RFC 1321 appendix A.5.
  let cases: &[(&[u8], [u8; 16])] = &[
    (b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
    (b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
    (b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
    (b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
    (b"abcdefghijklmnopqrstuvwxyz", hex!("c3fcd3d76192e4007dfb496cca67e13b")),
    (
      b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
      hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
    ),
    (
      b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
      hex!("57edf4a22be3c955ac49da2e2107b67a"),
    ),
  ];
  run_fixed_vectors("md5", cases, Md5::digest);
}

#[test]
fn md4_million_a() {
  let mut h = Md4::new();
  h.update_repeated(b'a', 1_000_000);
  assert_eq!(h.finalize(), hex!("bbce80cc6bb65e5c6745e30d4eeca9a4"));
}

#[test]
fn md5_million_a() {
  let mut h = Md5::new();
  h.update_repeated(b'a', 1_000_000);
  assert_eq!(h.finalize(), hex!("7707d6ae4e027c70eea2a935c2296f21"));
}
