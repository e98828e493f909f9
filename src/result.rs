use crate::{ParseError, ParseState};

/// The outcome of running a parser at some [`ParseState`].
///
/// A successful parse either hands back a structured `Value`, or, when the
/// parser was asked to slice (see [`crate::Parser::slice`]), just the number
/// of bytes it matched. A failure is either *committed*, in which case
/// [`crate::Parser::or`] won't try any alternative, or uncommitted.
#[derive(Clone, Debug)]
pub enum ParseResult<'a, A> {
    /// Success with a value, having consumed `consumed` bytes.
    Value {
        /// The parsed value.
        value: A,
        /// How many bytes of input were consumed.
        consumed: usize,
    },
    /// Success whose value, if anybody asks for it, is the consumed text.
    Slice {
        /// How many bytes of input were consumed.
        consumed: usize,
        /// Turns the consumed text into an `A`. Only slices produced from
        /// text-yielding parsers have one of these; slices collapsed under
        /// an enclosing [`crate::Parser::slice`] don't, and are never asked
        /// for their value.
        materialize: Option<fn(&'a str) -> A>,
    },
    /// The parse failed.
    Failure {
        /// Why, and where.
        error: ParseError<'a>,
        /// If true, alternatives should not be attempted.
        committed: bool,
    },
}

fn identity(s: &str) -> &str {
    s
}

impl<'a> ParseResult<'a, &'a str> {
    /// A successful slice of `consumed` bytes.
    pub fn slice(consumed: usize) -> Self {
        ParseResult::Slice {
            consumed,
            materialize: Some(identity as fn(&'a str) -> &'a str),
        }
    }
}

impl<'a, A> ParseResult<'a, A> {
    /// A successful value which consumed `consumed` bytes.
    pub fn value(value: A, consumed: usize) -> Self {
        ParseResult::Value { value, consumed }
    }

    /// A failure.
    pub fn failure(error: ParseError<'a>, committed: bool) -> Self {
        ParseResult::Failure { error, committed }
    }

    // A slice that only an enclosing `slice` will ever look at.
    pub(crate) fn opaque_slice(consumed: usize) -> Self {
        ParseResult::Slice {
            consumed,
            materialize: None,
        }
    }

    /// Demote a committed failure into an uncommitted one.
    pub fn uncommitted(self) -> Self {
        match self {
            ParseResult::Failure { error, .. } => ParseResult::Failure {
                error,
                committed: false,
            },
            success => success,
        }
    }

    /// Mark a failure as committed if `is_committed` is true.
    pub fn with_commit(self, is_committed: bool) -> Self {
        match self {
            ParseResult::Failure { error, committed } => ParseResult::Failure {
                error,
                committed: committed || is_committed,
            },
            success => success,
        }
    }

    /// Transform the error carried by a failure.
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(ParseError<'a>) -> ParseError<'a>,
    {
        match self {
            ParseResult::Failure { error, committed } => ParseResult::Failure {
                error: f(error),
                committed,
            },
            success => success,
        }
    }

    /// Add `n` to the consumed count of a success.
    pub fn advance_success(self, n: usize) -> Self {
        match self {
            ParseResult::Value { value, consumed } => ParseResult::Value {
                value,
                consumed: consumed + n,
            },
            ParseResult::Slice {
                consumed,
                materialize,
            } => ParseResult::Slice {
                consumed: consumed + n,
                materialize,
            },
            failure => failure,
        }
    }

    /// Throw away any structured value, keeping only how much was consumed.
    pub fn to_slice(self) -> ParseResult<'a, &'a str> {
        match self {
            ParseResult::Value { consumed, .. } | ParseResult::Slice { consumed, .. } => {
                ParseResult::slice(consumed)
            }
            ParseResult::Failure { error, committed } => ParseResult::Failure { error, committed },
        }
    }

    /// The number of bytes consumed, if this was a success.
    pub fn consumed(&self) -> Option<usize> {
        match self {
            ParseResult::Value { consumed, .. } | ParseResult::Slice { consumed, .. } => {
                Some(*consumed)
            }
            ParseResult::Failure { .. } => None,
        }
    }

    /// Is this a success of either kind?
    pub fn is_success(&self) -> bool {
        self.consumed().is_some()
    }

    /// Is this a failure that alternatives must not be tried after?
    pub fn is_committed(&self) -> bool {
        matches!(self, ParseResult::Failure { committed: true, .. })
    }

    /// Hand back the final value or error, given the input that the parse
    /// started at the beginning of.
    pub fn extract(self, input: &'a str) -> Result<A, ParseError<'a>> {
        self.materialize(ParseState::new(input))
            .map(|(value, _)| value)
            .map_err(|(error, _)| error)
    }

    /// Can a value be obtained from this without panicking?
    pub(crate) fn is_materializable(&self) -> bool {
        !matches!(
            self,
            ParseResult::Slice {
                materialize: None,
                ..
            }
        )
    }

    // Split off a failure, re-typed so it can be handed straight back.
    pub(crate) fn into_success<B>(self) -> Result<(Self, usize), ParseResult<'a, B>> {
        match self {
            ParseResult::Failure { error, committed } => Err(ParseResult::failure(error, committed)),
            success => {
                let consumed = success.consumed().unwrap_or_default();
                Ok((success, consumed))
            }
        }
    }

    // Produce a concrete value for a success that began at `from`, reading
    // slices back out of the input.
    pub(crate) fn materialize(
        self,
        from: ParseState<'a>,
    ) -> Result<(A, usize), (ParseError<'a>, bool)> {
        match self {
            ParseResult::Value { value, consumed } => Ok((value, consumed)),
            ParseResult::Slice {
                consumed,
                materialize: Some(materialize),
            } => Ok((materialize(from.span(consumed)), consumed)),
            ParseResult::Slice {
                materialize: None, ..
            } => unreachable!("a slice collapsed under slicing mode escaped it"),
            ParseResult::Failure { error, committed } => Err((error, committed)),
        }
    }

    // Apply `f` to the value of a success that began at `from`. Slices
    // with nothing to materialize stay slices.
    pub(crate) fn map_value<B, F>(self, from: ParseState<'a>, f: F) -> ParseResult<'a, B>
    where
        F: FnOnce(A) -> B,
    {
        if !self.is_materializable() {
            return ParseResult::opaque_slice(self.consumed().unwrap_or_default());
        }
        match self.materialize(from) {
            Ok((value, consumed)) => ParseResult::value(f(value), consumed),
            Err((error, committed)) => ParseResult::failure(error, committed),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Location;

    fn failed<'a>(committed: bool) -> ParseResult<'a, &'a str> {
        ParseResult::failure(Location::new("abc").to_error("nope"), committed)
    }

    #[test]
    fn commitment_only_touches_failures() {
        assert!(failed(true).is_committed());
        assert!(!failed(true).uncommitted().is_committed());
        assert!(failed(false).with_commit(true).is_committed());
        assert!(failed(true).with_commit(false).is_committed());
        assert!(!ParseResult::value(1, 0).with_commit(true).is_committed());
    }

    #[test]
    fn advance_success_adds_to_consumed() {
        assert_eq!(ParseResult::value('x', 2).advance_success(3).consumed(), Some(5));
        assert_eq!(ParseResult::slice(1).advance_success(3).consumed(), Some(4));
        assert_eq!(failed(false).advance_success(3).consumed(), None);
    }

    #[test]
    fn to_slice_discards_values() {
        let res = ParseResult::value(vec![1, 2, 3], 2).to_slice();
        assert_eq!(res.extract("abc"), Ok("ab"));
    }

    #[test]
    fn map_error_applies_to_failures() {
        let loc = Location::new("abc");
        let res = failed(false).map_error(|e| e.push(loc, "outer"));
        match res {
            ParseResult::Failure { error, .. } => assert_eq!(error.len(), 2),
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn extract_reads_slices_from_input() {
        assert_eq!(ParseResult::slice(3).extract("abcdef"), Ok("abc"));
        assert_eq!(ParseResult::value(7, 3).extract("abcdef"), Ok(7));
        assert!(failed(true).extract("abc").is_err());
    }

    #[test]
    #[should_panic]
    fn opaque_slices_cannot_be_extracted() {
        let _ = ParseResult::<Vec<char>>::opaque_slice(2).extract("abc");
    }
}
