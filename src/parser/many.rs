use crate::{ParseResult, ParseState, Parser};

/// Produced by running [`crate::Parser::many`], [`crate::Parser::many1`]
/// or [`crate::Parser::list_of_n`].
#[derive(Clone, Debug)]
pub struct Many<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Many<P> {
    pub(crate) fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Self { parser, min, max }
    }

    fn wants_more(&self, count: usize) -> bool {
        self.max.map_or(true, |max| count < max)
    }

    // Without an upper bound, a parser that matches nothing would match
    // nothing forever.
    fn stalled(&self, consumed: usize) -> bool {
        consumed == 0 && self.max.is_none()
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output> {
        if state.is_sliced() {
            self.parse_sliced(state)
        } else {
            self.parse_values(state)
        }
    }
}

impl<P> Many<P> {
    // Only the total length matched is wanted, so nothing is collected.
    fn parse_sliced<'a>(&self, state: ParseState<'a>) -> ParseResult<'a, Vec<P::Output>>
    where
        P: Parser<'a>,
    {
        let mut count = 0;
        let mut offset = 0;
        while self.wants_more(count) {
            let here = state.advance_by(offset).with_slicing(true);
            match self.parser.parse(here).to_slice() {
                ParseResult::Slice { consumed, .. } => {
                    count += 1;
                    offset += consumed;
                    if self.stalled(consumed) {
                        break;
                    }
                }
                ParseResult::Failure { error, committed } => {
                    if committed || count < self.min {
                        return ParseResult::failure(error, committed);
                    }
                    break;
                }
                ParseResult::Value { .. } => {
                    unreachable!("sliced repetition produced a structured value")
                }
            }
        }
        ParseResult::opaque_slice(offset)
    }

    fn parse_values<'a>(&self, state: ParseState<'a>) -> ParseResult<'a, Vec<P::Output>>
    where
        P: Parser<'a>,
    {
        let mut values = Vec::new();
        let mut offset = 0;
        while self.wants_more(values.len()) {
            let here = state.advance_by(offset);
            match self.parser.parse(here).materialize(here) {
                Ok((value, consumed)) => {
                    values.push(value);
                    offset += consumed;
                    if self.stalled(consumed) {
                        break;
                    }
                }
                Err((error, committed)) => {
                    if committed || values.len() < self.min {
                        return ParseResult::failure(error, committed);
                    }
                    break;
                }
            }
        }
        ParseResult::value(values, offset)
    }
}
