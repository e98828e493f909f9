//! Positions into the input string.

use crate::ParseError;

/// A position in some input string. The offset is a byte index (not the
/// nth character), and always sits on a char boundary.
///
/// # Example
///
/// ```
/// use sliceable::Location;
///
/// let loc = Location::new("ab\ncd").advance_by(4);
///
/// assert_eq!(loc.offset(), 4);
/// assert_eq!(loc.line(), 2);
/// assert_eq!(loc.column(), 2);
/// assert_eq!(loc.remaining(), "d");
/// assert_eq!(loc.current_line(), "cd");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Location<'a> {
    /// A location pointing at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Location { input, offset: 0 }
    }

    /// Return a new location `n` bytes further into the input.
    pub fn advance_by(self, n: usize) -> Self {
        debug_assert!(
            self.offset + n <= self.input.len(),
            "advanced past the end of the input"
        );
        Location {
            input: self.input,
            offset: self.offset + n,
        }
    }

    /// The whole input string that this location points into.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The byte offset into the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unparsed remainder of the input from this location onwards.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// The 1-based line number of this location.
    pub fn line(&self) -> usize {
        self.consumed().matches('\n').count() + 1
    }

    /// The 1-based column of this location, counted in characters.
    pub fn column(&self) -> usize {
        self.consumed()[self.line_start()..].chars().count() + 1
    }

    /// The text of the line that this location sits on, without its
    /// line ending.
    pub fn current_line(&self) -> &'a str {
        let rest = &self.input[self.line_start()..];
        let line = rest.split('\n').next().unwrap_or_default();
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Build a single frame [`ParseError`] at this location.
    pub fn to_error(self, message: impl Into<String>) -> ParseError<'a> {
        ParseError::new(self, message)
    }

    fn consumed(&self) -> &'a str {
        &self.input[..self.offset]
    }

    fn line_start(&self) -> usize {
        self.consumed().rfind('\n').map_or(0, |idx| idx + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn line_and_column_on_first_line() {
        let loc = Location::new("hello").advance_by(2);
        assert_eq!((loc.line(), loc.column()), (1, 3));
        assert_eq!(loc.current_line(), "hello");
    }

    #[test]
    fn line_and_column_after_newlines() {
        let input = "one\r\ntwo\nthree";
        let loc = Location::new(input).advance_by(input.find("two").unwrap());
        assert_eq!((loc.line(), loc.column()), (2, 1));
        assert_eq!(loc.current_line(), "two");

        let loc = Location::new(input).advance_by(input.len());
        assert_eq!((loc.line(), loc.column()), (3, 6));
        assert_eq!(loc.current_line(), "three");
        assert_eq!(loc.remaining(), "");
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let input = "🗻∈x";
        let loc = Location::new(input).advance_by(input.find('x').unwrap());
        assert_eq!(loc.column(), 3);
    }
}
