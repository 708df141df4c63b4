//! Cryptographic hash functions.

pub mod md4;
pub mod md5;
pub mod ripemd;
pub mod sha1;
pub mod sha224;
pub mod sha256;
pub mod sha384;
pub mod sha512;
pub mod sha512_224;
pub mod sha512_256;

pub use md4::Md4;
pub use md5::Md5;
pub use ripemd::{Ripemd128, Ripemd160, Ripemd256, Ripemd320};
pub use sha1::Sha1;
pub use sha224::Sha224;
pub use sha256::Sha256;
pub use sha384::Sha384;
pub use sha512::Sha512;
pub use sha512_224::Sha512_224;
pub use sha512_256::Sha512_256;
