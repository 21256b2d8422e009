//! Low-level types describing the BLTE container layout.
//! All multi-byte integers are big-endian on the wire.

/// Container magic bytes
pub const MAGIC: [u8; 4] = [b'B', b'L', b'T', b'E'];

/// Size of the magic + header size prologue.
pub const PROLOGUE_SIZE_BYTES: usize = 4 + 4;

/// Size of the flags + chunk count field that opens the chunk-info table.
pub const CHUNK_TABLE_PREFIX_SIZE_BYTES: usize = 1 + 1 + 2;

/// Size of one chunk-info table entry on the wire.
pub const CHUNK_INFO_ENTRY_SIZE_BYTES: usize = 4 + 4 + 16;

/// One entry of the chunk-info table, describing a single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfoEntry {
    /// Size of the chunk on the wire, including its 1-byte mode tag.
    pub compressed_size: u32,
    /// Size of the chunk once decoded.
    pub decompressed_size: u32,
    /// MD5 of the raw, still-tagged chunk bytes.
    pub checksum: [u8; 16],
}

/// The chunk-info table, present whenever `header_size > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkTable {
    /// Not semantically interpreted; `0x0F` on containers in the wild.
    pub flags: u8,
    pub entries: Vec<ChunkInfoEntry>,
}

/// The parsed container header.
///
/// This is the "top-level" type that the parser emits in the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Total size of the header, counted from the start of the container.
    /// `0` means the headerless single-chunk form.
    pub header_size: u32,
    pub table: Option<ChunkTable>,
}

impl Header {
    /// Offset of the first chunk byte within the container.
    pub fn payload_offset(&self) -> usize {
        match &self.table {
            None => return PROLOGUE_SIZE_BYTES,
            Some(_) => return self.header_size as usize,
        }
    }
}
