use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::attempt`].
#[derive(Clone, Debug)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub(crate) fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Attempt<P> {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output> {
        self.parser.parse(state).uncommitted()
    }
}
