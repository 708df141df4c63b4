//! I/O adapters for cryptographic digests.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations to compute digests transparently during
//! I/O operations.
//!
//! # Example
//!
//! ```rust
//! use digests::crypto::Sha256;
//! use digests::Digest as _;
//! use std::io::Read;
//!
//! let mut reader = Sha256::reader(std::io::Cursor::new(b"abc".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.digest(), Sha256::digest(b"abc"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};
