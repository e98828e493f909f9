use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::flat_map`].
#[derive(Clone, Debug)]
pub struct FlatMap<P, F> {
    parser: P,
    f: F,
}

impl<P, F> FlatMap<P, F> {
    pub(crate) fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<'a, P, F, Q> Parser<'a> for FlatMap<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'a>,
{
    type Output = Q::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Q::Output> {
        // We need an actual value to pick the next parser, so never slice here.
        let unsliced = state.with_slicing(false);
        match self.parser.parse(unsliced).materialize(unsliced) {
            Ok((value, consumed)) => (self.f)(value)
                .parse(state.advance_by(consumed))
                .with_commit(consumed != 0)
                .advance_success(consumed),
            Err((error, committed)) => ParseResult::failure(error, committed),
        }
    }
}
