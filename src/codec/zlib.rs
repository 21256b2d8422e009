use super::{Codec, CodecError};

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// The zlib codec.
/// Payloads are complete zlib streams, including the 2-byte stream header.
pub struct Zlib {}

impl Zlib {
    /// Creates a new `Zlib` codec.
    pub fn new() -> Zlib {
        return Zlib {};
    }
}

impl Default for Zlib {
    fn default() -> Zlib {
        return Zlib::new();
    }
}

impl Codec for Zlib {
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut decoder = ZlibDecoder::new(data);
        let mut out = Vec::new();
        match decoder.read_to_end(&mut out) {
            Ok(_) => return Ok(out),
            Err(e) => return Err(CodecError::Decompress(e.to_string())),
        }
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        // Writes into a Vec cannot fail.
        encoder
            .write_all(data)
            .expect("write into in-memory buffer failed");
        return encoder
            .finish()
            .expect("write into in-memory buffer failed");
    }
}
