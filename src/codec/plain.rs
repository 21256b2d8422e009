use super::{Codec, CodecError};

/// The trivial codec.
/// Simply shuffles bytes it gets back out.
pub struct Plain {}

impl Plain {
    /// Creates a new `Plain` codec.
    /// Because this codec doesn't really need construction, this ctor is only implemented for the sake of uniformity.
    pub fn new() -> Plain {
        return Plain {};
    }
}

impl Default for Plain {
    fn default() -> Plain {
        return Plain::new();
    }
}

impl Codec for Plain {
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        return Ok(Vec::from(data));
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        return Vec::from(data);
    }
}
