//! Custom nom parsers for the BLTE container format

use super::err::*;
use super::types::*;

use nom::bytes::complete::take;
use nom::error::context;
use nom::multi::count;
use nom::number::complete::{be_u16, be_u32, u8};

/// Error type that all parsers return.
pub type BlteResult<'a, T> = nom::IResult<&'a [u8], T, BlteParserError<&'a [u8]>>;

fn truncated<'a>(expected: usize, actual: usize) -> nom::Err<BlteParserError<&'a [u8]>> {
    return nom::Err::Failure(BlteParserError::new(BlteParserErrorKind::TruncatedTable(
        expected, actual,
    )));
}

/// Parse and check the container magic.
pub fn magic(input: &[u8]) -> BlteResult<()> {
    let (input, bytes) = context("magic", take(MAGIC.len()))(input)?;
    if bytes != &MAGIC[..] {
        let mut got = [0u8; 4];
        got.copy_from_slice(bytes);
        return Err(nom::Err::Failure(BlteParserError::new(
            BlteParserErrorKind::BadMagic(got),
        )));
    }
    return Ok((input, ()));
}

/// Parse a single 24-byte chunk-info table entry.
pub fn chunk_info_entry(input: &[u8]) -> BlteResult<ChunkInfoEntry> {
    let (input, compressed_size) = context("chunk_info_entry compressed_size", be_u32)(input)?;
    let (input, decompressed_size) = context("chunk_info_entry decompressed_size", be_u32)(input)?;
    let (input, checksum_bytes) = context("chunk_info_entry checksum", take(16usize))(input)?;
    let mut checksum = [0u8; 16];
    checksum.copy_from_slice(checksum_bytes);
    return Ok((
        input,
        ChunkInfoEntry {
            compressed_size,
            decompressed_size,
            checksum,
        },
    ));
}

/// Parse the chunk-info table: the flags/count field followed by the entries.
pub fn chunk_table(input: &[u8]) -> BlteResult<ChunkTable> {
    if input.len() < CHUNK_TABLE_PREFIX_SIZE_BYTES {
        return Err(truncated(CHUNK_TABLE_PREFIX_SIZE_BYTES, input.len()));
    }
    let (input, flags) = context("chunk_table flags", u8)(input)?;
    let (input, _reserved) = context("chunk_table reserved", u8)(input)?;
    // The on-wire count is 16 bits wide. Widen it before any arithmetic so
    // counts past 255 cannot wrap.
    let (input, chunk_count) = context("chunk_table chunk_count", be_u16)(input)?;
    let chunk_count = chunk_count as usize;

    let body_size = chunk_count * CHUNK_INFO_ENTRY_SIZE_BYTES;
    if input.len() < body_size {
        return Err(truncated(body_size, input.len()));
    }
    let (input, entries) = context(
        "chunk_table entries",
        count(chunk_info_entry, chunk_count),
    )(input)?;
    return Ok((input, ChunkTable { flags, entries }));
}

/// Parse the container header: magic, header size and, if present, the chunk-info table.
pub fn header(input: &[u8]) -> BlteResult<Header> {
    if input.len() < PROLOGUE_SIZE_BYTES {
        return Err(truncated(PROLOGUE_SIZE_BYTES, input.len()));
    }
    let (input, _) = magic(input)?;
    let (input, header_size) = context("header header_size", be_u32)(input)?;
    if header_size == 0 {
        // Headerless form: no table, the payload is a single implicit chunk.
        return Ok((
            input,
            Header {
                header_size,
                table: None,
            },
        ));
    }

    let (input, table) = chunk_table(input)?;
    // The declared header size must describe exactly the prologue, the
    // flags/count field and the entries that follow. A disagreement means
    // the table is corrupt and must not be decoded from.
    let expected_size = PROLOGUE_SIZE_BYTES
        + CHUNK_TABLE_PREFIX_SIZE_BYTES
        + table.entries.len() * CHUNK_INFO_ENTRY_SIZE_BYTES;
    if header_size as usize != expected_size {
        return Err(truncated(expected_size, header_size as usize));
    }
    return Ok((
        input,
        Header {
            header_size,
            table: Some(table),
        },
    ));
}
