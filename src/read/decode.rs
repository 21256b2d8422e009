//! This module implements dispatching chunk payloads to decoders.

use core::convert::TryFrom;

use super::err::Error;
use crate::codec::{Codec, Codecs, Plain, Zlib};
use crate::md5;
use crate::parser::ChunkInfoEntry;

/// Decode one raw, still-tagged chunk.
///
/// When a table `entry` is present, the chunk's on-wire length and MD5
/// digest are verified against it before the payload is touched, and the
/// decoded length is verified after. Headerless chunks pass `None` and
/// skip all three checks.
///
/// `index` is only used to attribute errors to a chunk.
pub fn decode_chunk<'a>(
    index: usize,
    raw: &[u8],
    entry: Option<&ChunkInfoEntry>,
) -> Result<Vec<u8>, Error<'a>> {
    if let Some(entry) = entry {
        if raw.len() as u64 != u64::from(entry.compressed_size) {
            return Err(Error::SizeMismatch(
                index,
                u64::from(entry.compressed_size),
                raw.len() as u64,
            ));
        }
        // The digest covers the raw bytes including the mode tag, and must
        // be checked before any of them are interpreted.
        let digest = md5::blte_md5(raw);
        if digest != entry.checksum {
            return Err(Error::ChecksumMismatch(index, entry.checksum, digest));
        }
    }

    let (mode, payload) = match raw.split_first() {
        Some((mode, payload)) => (*mode, payload),
        None => return Err(Error::TruncatedChunk(index, 1, 0)),
    };

    let codec_kind = match Codecs::try_from(mode) {
        Ok(kind) => kind,
        Err(e) => return Err(Error::Codec(index, e)),
    };
    let decoded = match codec_kind {
        Codecs::Plain => Plain::new().decode(payload),
        Codecs::Zlib => Zlib::new().decode(payload),
    };
    let output = match decoded {
        Ok(output) => output,
        Err(e) => return Err(Error::Codec(index, e)),
    };

    if let Some(entry) = entry {
        if output.len() as u64 != u64::from(entry.decompressed_size) {
            return Err(Error::SizeMismatch(
                index,
                u64::from(entry.decompressed_size),
                output.len() as u64,
            ));
        }
    }
    return Ok(output);
}
