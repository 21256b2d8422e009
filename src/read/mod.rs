//! This module implements an interface for decoding BLTE containers.

mod decode;
mod err;
mod simplistic;

pub use decode::*;
pub use err::*;
pub use simplistic::*;
