//! Engine-level invariants that must hold for every algorithm: chunking is
//! invisible, finalize is non-destructive, repeated-byte updates match
//! literal buffers, and the truncated SHA-2 variants use their own IVs.

use digests::crypto::{
  Md4, Md5, Ripemd128, Ripemd160, Ripemd256, Ripemd320, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224,
  Sha512_256,
};
use digests::Digest;

macro_rules! for_each_algorithm {
  ($check:ident) => {
    $check::<Md4>("md4");
    $check::<Md5>("md5");
    $check::<Ripemd128>("ripemd128");
    $check::<Ripemd160>("ripemd160");
    $check::<Ripemd256>("ripemd256");
    $check::<Ripemd320>("ripemd320");
    $check::<Sha1>("sha1");
    $check::<Sha224>("sha224");
    $check::<Sha256>("sha256");
    $check::<Sha384>("sha384");
    $check::<Sha512>("sha512");
    $check::<Sha512_224>("sha512/224");
    $check::<Sha512_256>("sha512/256");
  };
}

fn sample_input(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

#[test]
fn chunking_is_invisible() {
  fn check<D: Digest>(name: &str) {
    // Long enough to cross several 128-byte blocks.
    let data = sample_input(531);
    let expected = D::digest(&data);

    for split in (0..data.len()).step_by(13) {
      let mut h = D::new();
      h.update(&data[..split]);
      h.update(&data[split..]);
      assert_eq!(h.finalize(), expected, "{name}: split at {split}");
    }

    // Byte-at-a-time.
    let mut h = D::new();
    for b in &data {
      h.update(core::slice::from_ref(b));
    }
    assert_eq!(h.finalize(), expected, "{name}: byte-at-a-time");

    // Empty updates are no-ops anywhere in the stream.
    let mut h = D::new();
    h.update(&[]);
    h.update(&data);
    h.update(&[]);
    assert_eq!(h.finalize(), expected, "{name}: empty updates");
  }
  for_each_algorithm!(check);
}

#[test]
fn finalize_is_non_destructive() {
  fn check<D: Digest>(name: &str) {
    let data = sample_input(200);
    let (head, tail) = data.split_at(77);

    let mut h = D::new();
    h.update(head);
    let first = h.finalize();
    assert_eq!(h.finalize(), first, "{name}: repeated finalize");

    // The hasher keeps accepting input as if finalize had never happened.
    h.update(tail);
    assert_eq!(h.finalize(), D::digest(&data), "{name}: update after finalize");
  }
  for_each_algorithm!(check);
}

#[test]
fn repeated_bytes_match_literal_buffers() {
  fn check<D: Digest>(name: &str) {
    // Counts straddling the staging buffer, one block, and many blocks.
    for count in [0u64, 1, 55, 63, 64, 65, 111, 127, 128, 129, 1000, 10_007] {
      let mut repeated = D::new();
      repeated.update(b"prefix");
      repeated.update_repeated(0x61, count);

      let mut literal = D::new();
      literal.update(b"prefix");
      literal.update(&vec![0x61u8; count as usize]);

      assert_eq!(repeated.finalize(), literal.finalize(), "{name}: count {count}");
    }
  }
  for_each_algorithm!(check);
}

#[test]
fn vectored_updates_match_contiguous() {
  fn check<D: Digest>(name: &str) {
    let data = sample_input(300);
    let bufs: Vec<&[u8]> = data.chunks(37).collect();
    assert_eq!(D::digest_vectored(&bufs), D::digest(&data), "{name}");
  }
  for_each_algorithm!(check);
}

#[test]
fn typed_updates_match_native_bytes() {
  fn check<D: Digest>(name: &str) {
    let words = [0x0102_0304u32, 0xdead_beef, 0x0000_0001];

    let mut typed = D::new();
    typed.update_values(&words);
    typed.update_value(&0xabcd_ef01_2345_6789u64);

    let mut raw = D::new();
    for w in &words {
      raw.update(&w.to_ne_bytes());
    }
    raw.update(&0xabcd_ef01_2345_6789u64.to_ne_bytes());

    assert_eq!(typed.finalize(), raw.finalize(), "{name}");
  }
  for_each_algorithm!(check);
}

#[test]
fn reset_restores_initial_state() {
  fn check<D: Digest>(name: &str) {
    let mut h = D::new();
    h.update(b"some bytes that must not survive the reset");
    h.reset();
    h.update(b"abc");
    assert_eq!(h.finalize(), D::digest(b"abc"), "{name}");
  }
  for_each_algorithm!(check);
}

#[test]
fn truncated_sha2_variants_use_distinct_ivs() {
  // SHA-224 and the SHA-512/t variants are not prefixes of their wider
  // siblings: each truncated width pairs with its own initialization vector.
  let data = b"independent iv check";

  let wide32 = Sha256::digest(data);
  assert_ne!(Sha224::digest(data).as_slice(), &wide32[..28]);

  let wide64 = Sha512::digest(data);
  assert_ne!(Sha384::digest(data).as_slice(), &wide64[..48]);
  assert_ne!(Sha512_224::digest(data).as_slice(), &wide64[..28]);
  assert_ne!(Sha512_256::digest(data).as_slice(), &wide64[..32]);
}

#[test]
fn parallel_streams_are_independent() {
  // Interleaved updates on separate instances behave as separate streams.
  let a_data = sample_input(400);
  let b_data: Vec<u8> = a_data.iter().map(|b| b ^ 0x55).collect();

  let mut a = Sha256::new();
  let mut b = Sha256::new();
  for (ca, cb) in a_data.chunks(23).zip(b_data.chunks(23)) {
    a.update(ca);
    b.update(cb);
  }

  assert_eq!(a.finalize(), Sha256::digest(&a_data));
  assert_eq!(b.finalize(), Sha256::digest(&b_data));
}
