use nom::error::*;

/// The types of errors that may be returned by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlteParserErrorKind<I> {
    Nom(I, nom::error::ErrorKind),
    // BadMagic(got)
    BadMagic([u8; 4]),
    // TruncatedTable(expected, actual)
    TruncatedTable(usize, usize),
}

/// The error type returned by all parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlteParserError<I> {
    /// What kind of error this is
    pub kind: BlteParserErrorKind<I>,
    /// All the context we have accumulated from previous errors.
    pub ctx: Vec<(I, &'static str)>,
}

impl<I> ParseError<I> for BlteParserError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        return BlteParserError::new(BlteParserErrorKind::Nom(input, kind));
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> BlteParserError<I> {
    /// Creates a new error.
    pub fn new(kind: BlteParserErrorKind<I>) -> Self {
        return BlteParserError {
            kind,
            ctx: Vec::new(),
        };
    }
}

impl<I> ContextError<I> for BlteParserError<I> {
    fn add_context(_input: I, _ctx: &'static str, mut other: Self) -> Self {
        other.ctx.push((_input, _ctx));
        return other;
    }
}
