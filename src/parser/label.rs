use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::label`].
#[derive(Clone, Debug)]
pub struct Label<P> {
    parser: P,
    message: String,
}

impl<P> Label<P> {
    pub(crate) fn new(parser: P, message: String) -> Self {
        Self { parser, message }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Label<P> {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output> {
        self.parser
            .parse(state)
            .map_error(|e| e.label(self.message.clone()))
    }
}
