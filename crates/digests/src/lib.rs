//! Merkle–Damgård digest family: MD4, MD5, RIPEMD-128/160/256/320, SHA-1,
//! and SHA-2 (224/256/384/512/512-224/512-256).
//!
//! Every algorithm is an allocation-free incremental hasher built on one
//! shared block-accumulation engine; only the per-family compression
//! function, initialization vector, and output serialization differ.
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the rsdigest workspace. Dev-only dependencies are used for oracle
//! testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The hash functions, one module per algorithm.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
#[cfg(feature = "std")]
pub mod io;

mod engine;
mod util;

pub use traits::Digest;
