use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::scope`].
#[derive(Clone, Debug)]
pub struct Scope<P> {
    parser: P,
    message: String,
}

impl<P> Scope<P> {
    pub(crate) fn new(parser: P, message: String) -> Self {
        Self { parser, message }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Scope<P> {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output> {
        self.parser
            .parse(state)
            .map_error(|e| e.push(state.location(), self.message.clone()))
    }
}
