use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::map2`] or [`crate::Parser::product`].
#[derive(Clone, Debug)]
pub struct Map2<P, Q, F> {
    first: P,
    second: Q,
    f: F,
}

impl<P, Q, F> Map2<P, Q, F> {
    pub(crate) fn new(first: P, second: Q, f: F) -> Self {
        Self { first, second, f }
    }
}

// Unlike `flat_map`, the second parser doesn't depend on the first value,
// so both sides run in whatever slicing mode we were given.
impl<'a, P, Q, F, C> Parser<'a> for Map2<P, Q, F>
where
    P: Parser<'a>,
    Q: Parser<'a>,
    F: Fn(P::Output, Q::Output) -> C,
{
    type Output = C;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, C> {
        let (first, n) = match self.first.parse(state).into_success() {
            Ok(success) => success,
            Err(failure) => return failure,
        };
        let next = state.advance_by(n);
        let (second, m) = match self.second.parse(next).into_success() {
            Ok(success) => success,
            Err(failure) => return failure,
        };

        // Only collapse into a slice if our caller asked for one; both sides
        // being slices isn't enough by itself. Under slicing, a side that has
        // no value to give can only be collapsed too.
        if state.is_sliced() {
            let both_sliced = matches!(
                (&first, &second),
                (ParseResult::Slice { .. }, ParseResult::Slice { .. })
            );
            if both_sliced || !first.is_materializable() || !second.is_materializable() {
                return ParseResult::opaque_slice(n + m);
            }
        }

        let (Ok((a, _)), Ok((b, _))) = (first.materialize(state), second.materialize(next)) else {
            unreachable!("both sides succeeded");
        };
        ParseResult::value((self.f)(a, b), n + m)
    }
}
