use crate::Location;

/// The context threaded through a parse: where we are in the input, and
/// whether the caller only wants the matched text back rather than a
/// structured value ("slicing" mode, see [`crate::Parser::slice`]).
///
/// This is a small `Copy` value; combinators hand modified copies to the
/// parsers they wrap rather than mutating anything in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseState<'a> {
    location: Location<'a>,
    is_sliced: bool,
}

impl<'a> ParseState<'a> {
    /// The state a parse starts in: offset 0, slicing off.
    pub fn new(input: &'a str) -> Self {
        ParseState {
            location: Location::new(input),
            is_sliced: false,
        }
    }

    /// Where in the input we are.
    pub fn location(&self) -> Location<'a> {
        self.location
    }

    /// The byte offset into the input.
    pub fn offset(&self) -> usize {
        self.location.offset()
    }

    /// Are we only interested in the matched text?
    pub fn is_sliced(&self) -> bool {
        self.is_sliced
    }

    /// The unparsed remainder of the input.
    pub fn remaining(&self) -> &'a str {
        self.location.remaining()
    }

    /// Move `n` bytes further into the input.
    pub fn advance_by(self, n: usize) -> Self {
        ParseState {
            location: self.location.advance_by(n),
            ..self
        }
    }

    /// Turn slicing mode on or off, leaving the location alone.
    pub fn with_slicing(self, is_sliced: bool) -> Self {
        ParseState { is_sliced, ..self }
    }

    /// Take the slicing mode of `other`, leaving the location alone.
    pub fn with_slicing_from(self, other: ParseState<'_>) -> Self {
        self.with_slicing(other.is_sliced)
    }

    /// The `n` bytes of input starting at this state's location.
    pub(crate) fn span(&self, n: usize) -> &'a str {
        &self.remaining()[..n]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slicing_toggles_leave_location_alone() {
        let state = ParseState::new("abcdef").advance_by(2);
        let sliced = state.with_slicing(true);

        assert!(sliced.is_sliced());
        assert_eq!(sliced.location(), state.location());
        assert!(!sliced.advance_by(1).with_slicing_from(state).is_sliced());
        assert_eq!(sliced.advance_by(1).remaining(), "def");
        assert_eq!(sliced.span(3), "cde");
    }
}
