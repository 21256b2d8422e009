//! This module provides the top-level error type for this crate.

use crate::codec::CodecError;
use crate::parser::BlteParserError;

/// The top-level error type for decoding.
///
/// The underlying data buffer must live at least as long as the error,
/// because the parser errors contain subslices where a parsing issue occurred.
///
/// All variants describe permanent conditions: the same bytes will fail
/// the same way on every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<'a> {
    /// The container prologue or chunk-info table could not be parsed.
    Parser(BlteParserError<&'a [u8]>),
    /// Fewer bytes remained in the container than the table entry declared.
    // TruncatedChunk(chunk, needed, remaining)
    TruncatedChunk(usize, usize, usize),
    /// Bytes remained past the last declared chunk (strict decoding only).
    // TrailingData(len)
    TrailingData(usize),
    /// A chunk's raw or decoded length disagreed with its table entry.
    // SizeMismatch(chunk, expected, got)
    SizeMismatch(usize, u64, u64),
    /// A chunk's MD5 digest disagreed with its table entry.
    // ChecksumMismatch(chunk, expected, got)
    ChecksumMismatch(usize, [u8; 16], [u8; 16]),
    /// The chunk's mode tag was unknown or unsupported, or its payload failed to decode.
    // Codec(chunk, error)
    Codec(usize, CodecError),
}

impl<'a> From<BlteParserError<&'a [u8]>> for Error<'a> {
    fn from(e: BlteParserError<&'a [u8]>) -> Self {
        return Error::Parser(e);
    }
}
