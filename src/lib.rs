#![forbid(unsafe_code)]
//! A crate for reading and writing BLTE containers.
//! BLTE is a chunked container format wrapping compressed, checksummed blocks of data.

#![allow(clippy::needless_return)]

pub mod codec;
mod md5;
pub mod parser;
pub mod read;
pub mod write;
