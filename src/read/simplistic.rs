//! This module provides a "simplistic" API for decoding containers.
//!
//! It trades off precise control for ease of use.

use core::convert::TryFrom;

use super::decode::decode_chunk;
use super::err::Error;
use crate::parser::{parse, PROLOGUE_SIZE_BYTES};

/// Decode an entire container into its original byte stream.
///
/// Bytes trailing the last declared chunk are tolerated, since containers
/// in the wild are sometimes padded. Use [`decode_strict`] to reject them.
pub fn decode(container: &[u8]) -> Result<Vec<u8>, Error> {
    return decode_inner(container, false);
}

/// Like [`decode`], but fails with [`Error::TrailingData`] if any bytes
/// remain past the last declared chunk.
pub fn decode_strict(container: &[u8]) -> Result<Vec<u8>, Error> {
    return decode_inner(container, true);
}

fn decode_inner(container: &[u8], strict: bool) -> Result<Vec<u8>, Error> {
    let header = parse(container)?;
    let table = match header.table {
        // Headerless form: everything past the prologue is one implicit,
        // unchecked chunk.
        None => return decode_chunk(0, &container[PROLOGUE_SIZE_BYTES..], None),
        Some(table) => table,
    };

    // The parser has verified that the header ends exactly where the
    // declared size says, so the cursor starts within bounds.
    let mut cursor = header.header_size as usize;
    let total: u64 = table
        .entries
        .iter()
        .map(|e| u64::from(e.decompressed_size))
        .sum();
    let mut out: Vec<u8> = Vec::with_capacity(usize::try_from(total).unwrap_or(0));

    // Strictly sequential, in table order. The table gives no license to
    // reorder output.
    for (index, entry) in table.entries.iter().enumerate() {
        let needed = entry.compressed_size as usize;
        let remaining = container.len() - cursor;
        if remaining < needed {
            return Err(Error::TruncatedChunk(index, needed, remaining));
        }
        let raw = &container[cursor..cursor + needed];
        let mut output = decode_chunk(index, raw, Some(entry))?;
        out.append(&mut output);
        cursor += needed;
    }

    if strict && cursor != container.len() {
        return Err(Error::TrailingData(container.len() - cursor));
    }
    return Ok(out);
}
