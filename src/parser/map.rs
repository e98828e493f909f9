use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::map`].
#[derive(Clone, Debug)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

// The parser is run in whatever slicing mode we were given; the mapping
// doesn't influence what gets parsed next, so there's no need to force a
// value out of it.
impl<'a, P, F, B> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> B,
{
    type Output = B;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, B> {
        self.parser.parse(state).map_value(state, |a| (self.f)(a))
    }
}
