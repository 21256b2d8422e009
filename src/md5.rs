//! This module exposes the checksum algorithm used by BLTE.

use md5::{Digest, Md5};

pub fn blte_md5(input: &[u8]) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(input);
    return hasher.finalize().into();
}
