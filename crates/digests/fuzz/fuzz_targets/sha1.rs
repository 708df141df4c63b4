#![no_main]

use digests::crypto::Sha1;
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

  let ours = Sha1::digest(input);
  let mut h = Sha1::new();
  h.update(a);
  h.update(b);
  assert_eq!(ours, h.finalize());

  use sha1::Digest as _;
  let ref_out = sha1::Sha1::digest(input);
  let mut expected = [0u8; 20];
  expected.copy_from_slice(&ref_out);
  assert_eq!(ours, expected);
});
