use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::or`].
#[derive(Clone, Debug)]
pub struct Or<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Or<P, Q> {
    pub(crate) fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<'a, P, Q> Parser<'a> for Or<P, Q>
where
    P: Parser<'a>,
    Q: Parser<'a, Output = P::Output>,
{
    type Output = P::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output> {
        match self.first.parse(state) {
            // Only an uncommitted failure lets us backtrack and try again.
            ParseResult::Failure {
                committed: false, ..
            } => self.second.parse(state),
            res => res,
        }
    }
}
