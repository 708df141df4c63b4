#![no_main]

use digests::crypto::{Md4, Md5};
use digests::Digest as _;
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  {
    let ours = Md4::digest(input);
    let mut h = Md4::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use md4::Digest as _;
    let ref_out = md4::Md4::digest(input);
    let mut expected = [0u8; 16];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let ours = Md5::digest(input);
    let mut h = Md5::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use md5::Digest as _;
    let ref_out = md5::Md5::digest(input);
    let mut expected = [0u8; 16];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }
});
