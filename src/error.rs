//! The error handed back when parsing fails.

use crate::Location;
use core::fmt;

/// A stack of `(location, message)` frames describing why a parse failed.
///
/// The innermost frame is the one that was produced closest to the point
/// of failure (for instance by a literal that didn't match). Combinators
/// like [`crate::Parser::scope`] push outer frames to add context as the
/// failure unwinds, and [`crate::Parser::label`] renames the innermost one.
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::string};
///
/// let err = string("let")
///     .scope("binding")
///     .run("lex")
///     .unwrap_err();
///
/// let messages: Vec<_> = err.frames().map(|(_, msg)| msg).collect();
/// assert_eq!(messages, vec!["'let'", "binding"]);
/// assert_eq!(err.to_string(), "1.1 binding\n1.3 'let'\n\nlex\n  ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", Report(.stack))]
pub struct ParseError<'a> {
    // Innermost first.
    stack: Vec<(Location<'a>, String)>,
}

impl<'a> ParseError<'a> {
    /// An error with a single frame.
    pub fn new(location: Location<'a>, message: impl Into<String>) -> Self {
        ParseError {
            stack: vec![(location, message.into())],
        }
    }

    /// Add a new outermost frame, keeping every existing frame.
    pub fn push(mut self, location: Location<'a>, message: impl Into<String>) -> Self {
        self.stack.push((location, message.into()));
        self
    }

    /// Replace the message of the innermost frame, keeping its location.
    pub fn label(mut self, message: impl Into<String>) -> Self {
        if let Some((_, msg)) = self.stack.first_mut() {
            *msg = message.into();
        }
        self
    }

    /// The innermost frame, if there is one.
    pub fn latest(&self) -> Option<(Location<'a>, &str)> {
        self.stack.first().map(|(loc, msg)| (*loc, msg.as_str()))
    }

    /// The location of the innermost frame.
    pub fn latest_location(&self) -> Option<Location<'a>> {
        self.latest().map(|(loc, _)| loc)
    }

    /// Iterate over the frames, innermost first.
    pub fn frames(&self) -> impl DoubleEndedIterator<Item = (Location<'a>, &str)> + '_ {
        self.stack.iter().map(|(loc, msg)| (*loc, msg.as_str()))
    }

    /// The number of frames in the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True if there are no frames at all.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

// Renders the outermost frame first, then points at the innermost one.
struct Report<'s, 'a>(&'s [(Location<'a>, String)]);

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((latest, _)) = self.0.first() else {
            return f.write_str("no error message");
        };

        for (loc, msg) in self.0.iter().rev() {
            writeln!(f, "{}.{} {}", loc.line(), loc.column(), msg)?;
        }
        write!(
            f,
            "\n{}\n{:width$}^",
            latest.current_line(),
            "",
            width = latest.column() - 1
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_adds_outer_frames() {
        let start = Location::new("abc");
        let err = start
            .advance_by(2)
            .to_error("inner")
            .push(start.advance_by(1), "middle")
            .push(start, "outer");

        assert_eq!(err.len(), 3);
        assert_eq!(err.latest(), Some((start.advance_by(2), "inner")));
        let outermost = err.frames().last().unwrap();
        assert_eq!(outermost, (start, "outer"));
    }

    #[test]
    fn label_renames_innermost_only() {
        let start = Location::new("abc");
        let err = start
            .advance_by(1)
            .to_error("inner")
            .push(start, "outer")
            .label("renamed");

        let frames: Vec<_> = err.frames().collect();
        assert_eq!(
            frames,
            vec![(start.advance_by(1), "renamed"), (start, "outer")]
        );
    }

    #[test]
    fn display_points_at_innermost_frame() {
        let input = "{\n  \"a\": tru\n}";
        let start = Location::new(input);
        let err = start
            .advance_by(input.find("tru").unwrap())
            .to_error("expected value")
            .push(start, "object");

        assert_eq!(
            err.to_string(),
            "1.1 object\n2.8 expected value\n\n  \"a\": tru\n       ^"
        );
    }

    #[test]
    fn display_of_empty_stack() {
        let mut err = Location::new("").to_error("x");
        err.stack.clear();
        assert_eq!(err.to_string(), "no error message");
    }

    #[test]
    fn display_pads_caret_by_chars() {
        let input = "éé?";
        let err = Location::new(input).advance_by(4).to_error("bad");
        assert_eq!(format!("{err}"), "1.3 bad\n\néé?\n  ^");
    }
}
