//! This module contains decoders and encoders
//! for the chunk payload modes defined by the BLTE format.

mod plain;
pub use plain::*;
mod zlib;
pub use zlib::*;

use core::convert::TryFrom;

/// The main interface trait for other code to use.
///
/// All codecs must implement it.
pub trait Codec {
    /// Take the given chunk payload (the bytes after the mode tag) and decode it.
    ///
    /// Any required additional information that the codec can't deduce from the payload
    /// must be passed via the codec-specific constructor.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Take the given data and produce a chunk payload.
    ///
    /// Encoding into an in-memory buffer cannot fail.
    fn encode(&self, data: &[u8]) -> Vec<u8>;
}

/// All currently supported chunk modes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Codecs {
    /// `'N'`: stores the payload byte-for-byte.
    Plain,
    /// `'Z'`: stores the payload as a zlib stream.
    Zlib,
}

impl Codecs {
    /// The mode tag identifying this codec on the wire.
    pub fn tag(&self) -> u8 {
        match self {
            Codecs::Plain => return b'N',
            Codecs::Zlib => return b'Z',
        }
    }
}

impl TryFrom<u8> for Codecs {
    type Error = CodecError;
    /// Parse a mode tag byte.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'N' => return Ok(Codecs::Plain),
            b'Z' => return Ok(Codecs::Zlib),
            // Recursive frames and encrypted chunks are real modes,
            // but this crate does not implement them. They must not be
            // misread as literal data.
            b'F' | b'E' => return Err(CodecError::UnsupportedMode(value)),
            _ => return Err(CodecError::UnknownMode(value)),
        }
    }
}

/// The top-level codec error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The chunk carried a mode tag the format defines but this crate does not implement
    /// (`'F'` recursive frame, `'E'` encrypted).
    UnsupportedMode(u8),
    /// The chunk carried a mode tag that is not part of the format.
    UnknownMode(u8),
    /// The zlib stream inside the chunk was malformed.
    Decompress(String),
}
