use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::slice`].
#[derive(Clone, Debug)]
pub struct Slice<P> {
    parser: P,
}

impl<P> Slice<P> {
    pub(crate) fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Slice<P> {
    type Output = &'a str;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, &'a str> {
        self.parser.parse(state.with_slicing(true)).to_slice()
    }
}
