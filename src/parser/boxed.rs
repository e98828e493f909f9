use std::fmt;
use std::rc::Rc;

use crate::{ParseResult, ParseState, Parser};

/// A type erased [`Parser`], produced by [`crate::Parser::boxed`]. Cloning
/// one is cheap, and clones share the same underlying parser.
pub struct BoxedParser<'a, A> {
    parser: Rc<dyn Parser<'a, Output = A> + 'a>,
}

impl<'a, A> Clone for BoxedParser<'a, A> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'a, A> BoxedParser<'a, A> {
    /// Box up the parser given.
    pub fn new<P: Parser<'a, Output = A> + 'a>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<'a, A> Parser<'a> for BoxedParser<'a, A> {
    type Output = A;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, A> {
        self.parser.parse(state)
    }
}

impl<'a, A> fmt::Debug for BoxedParser<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}
