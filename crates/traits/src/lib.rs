//! Core traits for the rsdigest workspace.
//!
//! This crate provides the foundational [`Digest`] trait that every rsdigest
//! hasher conforms to, plus `std`-gated I/O adapters. It is `no_std`
//! compatible; the only library dependency is `bytemuck`, used to accept
//! fixed-layout values as hash input.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
