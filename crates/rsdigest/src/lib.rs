//! Pure Rust Merkle–Damgård digests: MD4, MD5, RIPEMD, SHA-1, and SHA-2.
//!
//! `rsdigest` provides allocation-free incremental hashers with a shared
//! streaming engine. Every algorithm accepts arbitrary-sized chunks, can be
//! finalized without consuming the hasher, and is `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use rsdigest::{Digest, Sha256};
//!
//! // One-shot computation
//! let digest = Sha256::digest(b"hello world");
//!
//! // Streaming computation
//! let mut hasher = Sha256::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the `DigestReader`/`DigestWriter` I/O adapters |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsdigest = { version = "0.1", default-features = false }
//! ```
//!
//! # Algorithm Notes
//!
//! MD4, MD5, and the RIPEMD family are provided for interoperability with
//! legacy formats; they are broken for collision resistance and must not be
//! used in new designs. Prefer the SHA-2 family.
#![cfg_attr(not(feature = "std"), no_std)]

pub use digests::crypto;
pub use digests::crypto::{
  Md4, Md5, Ripemd128, Ripemd160, Ripemd256, Ripemd320, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224,
  Sha512_256,
};
pub use traits::Digest;
#[cfg(feature = "std")]
pub use traits::io::{DigestReader, DigestWriter};
