//! This module implements writing BLTE containers.

#[cfg(test)]
mod test;

use core::convert::TryFrom;

use crate::codec::{Codec, Codecs, Plain, Zlib};
use crate::md5;
use crate::parser::{
    ChunkInfoEntry, CHUNK_INFO_ENTRY_SIZE_BYTES, CHUNK_TABLE_PREFIX_SIZE_BYTES, MAGIC,
    PROLOGUE_SIZE_BYTES,
};

/// The flags byte observed on containers in the wild.
/// Decoders do not interpret it.
const CHUNK_TABLE_FLAGS: u8 = 0x0F;

/// How a byte stream should be cut into chunks when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingPolicy {
    /// Maximum number of input bytes per chunk.
    /// `None` keeps the whole input in one chunk.
    pub chunk_size: Option<usize>,
    /// The codec applied to every chunk.
    pub mode: Codecs,
    /// Emit a chunk-info table even when only one chunk is produced.
    /// Without this, a single chunk is written in the headerless form.
    pub force_table: bool,
}

impl Default for ChunkingPolicy {
    fn default() -> ChunkingPolicy {
        return ChunkingPolicy {
            chunk_size: None,
            mode: Codecs::Zlib,
            force_table: false,
        };
    }
}

/// Encode a byte stream into a well-formed BLTE container.
///
/// An empty input still produces one chunk, so the container always
/// carries a mode tag.
///
/// # Panics
///
/// Panics if `policy.chunk_size` is `Some(0)`, which would produce zero
/// chunks for a non-empty input. That is a contract violation by the
/// caller, not a property of the input. Also panics if a single chunk
/// exceeds `u32::MAX` bytes or the input needs more than 65535 chunks,
/// neither of which the chunk-info table can represent.
pub fn encode(data: &[u8], policy: &ChunkingPolicy) -> Vec<u8> {
    if let Some(chunk_size) = policy.chunk_size {
        assert!(chunk_size > 0, "chunk_size must be non-zero");
    }

    let pieces: Vec<&[u8]> = match policy.chunk_size {
        None => vec![data],
        Some(_) if data.is_empty() => vec![data],
        Some(chunk_size) => data.chunks(chunk_size).collect(),
    };

    let mut entries: Vec<ChunkInfoEntry> = Vec::with_capacity(pieces.len());
    let mut chunks: Vec<Vec<u8>> = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        let payload = match policy.mode {
            Codecs::Plain => Plain::new().encode(piece),
            Codecs::Zlib => Zlib::new().encode(piece),
        };
        let mut chunk = Vec::with_capacity(1 + payload.len());
        chunk.push(policy.mode.tag());
        chunk.extend_from_slice(&payload);

        entries.push(ChunkInfoEntry {
            compressed_size: u32::try_from(chunk.len()).expect("chunk exceeds u32 range"),
            decompressed_size: u32::try_from(piece.len()).expect("chunk exceeds u32 range"),
            checksum: md5::blte_md5(&chunk),
        });
        chunks.push(chunk);
    }

    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);

    if !policy.force_table && chunks.len() == 1 {
        // Headerless form: header_size of zero, then the single chunk.
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&chunks[0]);
        return out;
    }

    let header_size = PROLOGUE_SIZE_BYTES
        + CHUNK_TABLE_PREFIX_SIZE_BYTES
        + entries.len() * CHUNK_INFO_ENTRY_SIZE_BYTES;
    let chunk_count = u16::try_from(entries.len()).expect("more than 65535 chunks");
    out.extend_from_slice(
        &u32::try_from(header_size)
            .expect("header exceeds u32 range")
            .to_be_bytes(),
    );
    out.push(CHUNK_TABLE_FLAGS);
    out.push(0x00);
    out.extend_from_slice(&chunk_count.to_be_bytes());
    for entry in &entries {
        out.extend_from_slice(&entry.compressed_size.to_be_bytes());
        out.extend_from_slice(&entry.decompressed_size.to_be_bytes());
        out.extend_from_slice(&entry.checksum);
    }
    for chunk in &chunks {
        out.extend_from_slice(chunk);
    }
    return out;
}
