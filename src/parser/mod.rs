//! This module implements parsing of the BLTE container header.

mod err;
mod parsers;
mod types;

pub use err::*;
pub use parsers::*;
pub use types::*;

/// The entry point into the `parser` module.
/// Takes the container bytes, returns the parsed header.
pub fn parse(input: &[u8]) -> Result<Header, BlteParserError<&[u8]>> {
    match parsers::header(input) {
        Ok((_, header)) => return Ok(header),
        Err(e) => match e {
            nom::Err::Incomplete(_) => {
                panic!("Parser reported incomplete. All parsers run on complete input, so this should never happen.")
            }
            nom::Err::Error(e) => return Err(e),
            nom::Err::Failure(e) => return Err(e),
        },
    }
}
