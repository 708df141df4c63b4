#![no_main]

use digests::crypto::{Ripemd128, Ripemd160, Ripemd256, Ripemd320};
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
    let ours = Ripemd128::digest(input);
    let mut h = Ripemd128::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use ripemd::Digest as _;
    let ref_out = ripemd::Ripemd128::digest(input);
    let mut expected = [0u8; 16];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let ours = Ripemd160::digest(input);
    let mut h = Ripemd160::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use ripemd::Digest as _;
    let ref_out = ripemd::Ripemd160::digest(input);
    let mut expected = [0u8; 20];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let ours = Ripemd256::digest(input);
    let mut h = Ripemd256::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use ripemd::Digest as _;
    let ref_out = ripemd::Ripemd256::digest(input);
    let mut expected = [0u8; 32];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    let ours = Ripemd320::digest(input);
    let mut h = Ripemd320::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use ripemd::Digest as _;
    let ref_out = ripemd::Ripemd320::digest(input);
    let mut expected = [0u8; 40];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }
});
