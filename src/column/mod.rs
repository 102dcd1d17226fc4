//! Packed bit columns decoded from row images.
//!
//! A [`BitColumn`] owns the bytes sliced out of the stream by the row decoder
//! and gives bit-level access to them.

mod bit_column;
mod error;
mod hex;

pub use bit_column::*;
pub use error::*;
pub use hex::*;
