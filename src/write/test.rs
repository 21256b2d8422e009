use super::*;

#[test]
fn headerless_plain_layout() {
    let policy = ChunkingPolicy {
        chunk_size: None,
        mode: Codecs::Plain,
        force_table: false,
    };

    let res = encode(b"hi", &policy);

    assert_eq!(res, b"BLTE\x00\x00\x00\x00Nhi");
}

#[test]
fn empty_input_still_carries_a_mode_tag() {
    let policy = ChunkingPolicy {
        chunk_size: Some(4),
        mode: Codecs::Plain,
        force_table: false,
    };

    let res = encode(b"", &policy);

    assert_eq!(res, b"BLTE\x00\x00\x00\x00N");
}

#[test]
fn forced_table_single_chunk() {
    let policy = ChunkingPolicy {
        chunk_size: None,
        mode: Codecs::Plain,
        force_table: true,
    };

    let res = encode(b"hi", &policy);

    assert_eq!(&res[0..4], b"BLTE");
    assert_eq!(res[4..8], 36u32.to_be_bytes());
    assert_eq!(res[8], CHUNK_TABLE_FLAGS);
    assert_eq!(res[9], 0x00);
    assert_eq!(res[10..12], 1u16.to_be_bytes());
    // compressed_size includes the mode tag
    assert_eq!(res[12..16], 3u32.to_be_bytes());
    assert_eq!(res[16..20], 2u32.to_be_bytes());
    assert_eq!(res[20..36], md5::blte_md5(b"Nhi"));
    assert_eq!(&res[36..], b"Nhi");
}

#[test]
fn splits_into_chunks_of_at_most_chunk_size() {
    let policy = ChunkingPolicy {
        chunk_size: Some(4),
        mode: Codecs::Plain,
        force_table: false,
    };

    let res = encode(b"0123456789", &policy);

    // 3 chunks: 4 + 4 + 2 bytes
    assert_eq!(res[10..12], 3u16.to_be_bytes());
    assert_eq!(res[4..8], (12u32 + 3 * 24).to_be_bytes());
    let decompressed_sizes: Vec<u32> = (0..3)
        .map(|i| {
            let off = 12 + i * 24 + 4;
            u32::from_be_bytes([res[off], res[off + 1], res[off + 2], res[off + 3]])
        })
        .collect();
    assert_eq!(decompressed_sizes, vec![4, 4, 2]);
}

#[test]
#[should_panic(expected = "chunk_size must be non-zero")]
fn zero_chunk_size_is_a_contract_violation() {
    let policy = ChunkingPolicy {
        chunk_size: Some(0),
        mode: Codecs::Plain,
        force_table: false,
    };

    encode(b"data", &policy);
}
