//! Decoding must reject malformed containers with the right error, and
//! must never panic or read out of bounds while doing so.

use blte::codec::{CodecError, Codecs};
use blte::parser::BlteParserErrorKind;
use blte::read::{self, Error};
use blte::write::{encode, ChunkingPolicy};

fn plain_tabled(data: &[u8], chunk_size: usize) -> Vec<u8> {
    return encode(
        data,
        &ChunkingPolicy {
            chunk_size: Some(chunk_size),
            mode: Codecs::Plain,
            force_table: true,
        },
    );
}

#[test]
fn bad_magic() {
    let err = read::decode(b"XLTE\x00\x00\x00\x00boo").unwrap_err();
    match err {
        Error::Parser(e) => assert_eq!(
            e.kind,
            BlteParserErrorKind::BadMagic([b'X', b'L', b'T', b'E'])
        ),
        other => panic!("expected parser error, got {:?}", other),
    }
}

#[test]
fn empty_input() {
    let err = read::decode(b"").unwrap_err();
    assert!(matches!(
        err,
        Error::Parser(ref e) if matches!(e.kind, BlteParserErrorKind::TruncatedTable(_, _))
    ));
}

#[test]
fn unknown_mode() {
    let err = read::decode(b"BLTE\x00\x00\x00\x00Xboo").unwrap_err();
    assert_eq!(err, Error::Codec(0, CodecError::UnknownMode(b'X')));
}

#[test]
fn unsupported_modes_are_distinct_from_unknown() {
    // 'F' (recursive frame) and 'E' (encrypted) are real modes this crate
    // does not implement. They must not decode as literal data.
    for mode in [b'F', b'E'] {
        let mut container = Vec::from(&b"BLTE\x00\x00\x00\x00"[..]);
        container.push(mode);
        container.extend_from_slice(b"opaque");
        let err = read::decode(&container).unwrap_err();
        assert_eq!(err, Error::Codec(0, CodecError::UnsupportedMode(mode)));
    }
}

#[test]
fn corrupt_zlib_stream() {
    let err = read::decode(b"BLTE\x00\x00\x00\x00Znot a zlib stream").unwrap_err();
    assert!(matches!(err, Error::Codec(0, CodecError::Decompress(_))));
}

#[test]
fn flipped_checksum_byte() {
    let mut container = plain_tabled(b"checksummed bytes", 32);
    // First checksum byte of the first (and only) entry.
    container[20] ^= 0xFF;

    let err = read::decode(&container).unwrap_err();

    match err {
        Error::ChecksumMismatch(chunk, expected, got) => {
            assert_eq!(chunk, 0);
            assert_ne!(expected, got);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn corrupted_chunk_body_fails_the_checksum() {
    let mut container = plain_tabled(b"checksummed bytes", 32);
    let last = container.len() - 1;
    container[last] ^= 0xFF;

    let err = read::decode(&container).unwrap_err();

    assert!(matches!(err, Error::ChecksumMismatch(0, _, _)));
}

#[test]
fn wrong_decompressed_size_in_entry() {
    let mut container = plain_tabled(b"seventeen bytes!!", 32);
    // Patch the entry's decompressed size; the checksum covers the chunk
    // bytes, not the entry, so only the size check can catch this.
    container[16..20].copy_from_slice(&9999u32.to_be_bytes());

    let err = read::decode(&container).unwrap_err();

    assert_eq!(err, Error::SizeMismatch(0, 9999, 17));
}

#[test]
fn truncated_mid_table() {
    let container = plain_tabled(b"0123456789", 4);
    // Cut inside the second of three entries.
    let err = read::decode(&container[..12 + 24 + 9]).unwrap_err();
    assert!(matches!(
        err,
        Error::Parser(ref e) if matches!(e.kind, BlteParserErrorKind::TruncatedTable(_, _))
    ));
}

#[test]
fn truncated_mid_chunk() {
    let container = plain_tabled(b"0123456789", 4);
    // Chunks are 5, 5 and 3 bytes on the wire; drop the last byte.
    let err = read::decode(&container[..container.len() - 1]).unwrap_err();
    assert_eq!(err, Error::TruncatedChunk(2, 3, 2));
}

#[test]
fn trailing_bytes_are_tolerated_unless_strict() {
    let data = b"0123456789";
    let mut container = plain_tabled(data, 4);
    container.extend_from_slice(b"\xAA\xBB");

    let res = read::decode(&container).unwrap();
    assert_eq!(res, data);

    let err = read::decode_strict(&container).unwrap_err();
    assert_eq!(err, Error::TrailingData(2));
}

#[test]
fn table_with_zero_chunks_decodes_to_nothing() {
    // A present-but-empty table is legal on the wire.
    let mut container = Vec::new();
    container.extend_from_slice(b"BLTE");
    container.extend_from_slice(&12u32.to_be_bytes());
    container.push(0x0F);
    container.extend_from_slice(&[0x00, 0x00, 0x00]);

    let res = read::decode_strict(&container).unwrap();
    assert!(res.is_empty());
}

#[test]
fn single_chunk_decode_without_an_entry_skips_verification() {
    // The headerless path hands the chunk decoder no table entry, so a
    // bogus length cannot be caught; the bytes must round-trip verbatim.
    let res = read::decode_chunk(0, b"Nraw bytes", None).unwrap();
    assert_eq!(res, b"raw bytes");
}
