//! The parsers that everything else is built from.

use core::fmt;
use core::marker::PhantomData;

use crate::{ParseResult, ParseState, Parser};

/// Produced by [`succeed`].
#[derive(Clone, Debug)]
pub struct Succeed<A> {
    value: A,
}

/// Always succeed with `value`, consuming nothing.
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::succeed};
///
/// assert_eq!(succeed(42).run("anything"), Ok(42));
/// ```
pub fn succeed<A: Clone>(value: A) -> Succeed<A> {
    Succeed { value }
}

impl<'a, A: Clone> Parser<'a> for Succeed<A> {
    type Output = A;

    fn parse(&self, _state: ParseState<'a>) -> ParseResult<'a, A> {
        ParseResult::value(self.value.clone(), 0)
    }
}

/// Produced by [`fail`].
pub struct Fail<A> {
    message: String,
    output: PhantomData<fn() -> A>,
}

/// Always fail with `message`. The failure is committed, so [`Parser::or`]
/// won't try anything else after it (unless it's wrapped in
/// [`Parser::attempt`]).
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::{fail, succeed}};
///
/// let p = fail("not here").attempt().or(succeed(1));
/// assert_eq!(p.run(""), Ok(1));
///
/// let err = fail::<()>("not here").run("").unwrap_err();
/// assert_eq!(err.latest().map(|(_, msg)| msg), Some("not here"));
/// ```
pub fn fail<A>(message: impl Into<String>) -> Fail<A> {
    Fail {
        message: message.into(),
        output: PhantomData,
    }
}

impl<A> Clone for Fail<A> {
    fn clone(&self) -> Self {
        fail(self.message.clone())
    }
}

impl<A> fmt::Debug for Fail<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fail")
            .field("message", &self.message)
            .finish()
    }
}

impl<'a, A> Parser<'a> for Fail<A> {
    type Output = A;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, A> {
        ParseResult::failure(state.location().to_error(self.message.clone()), true)
    }
}

/// Produced by [`string`].
#[derive(Clone, Debug)]
pub struct Literal {
    word: String,
}

/// Match `word` exactly, handing back the matched text.
///
/// If the input differs on the very first character, the failure is
/// uncommitted. If some of `word` matched before the input differed, the
/// failure is committed, and is reported where the input differed.
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::string};
///
/// assert_eq!(string("hello").run("hello world"), Ok("hello"));
///
/// let err = string("hello").run("help").unwrap_err();
/// let (loc, msg) = err.latest().unwrap();
/// assert_eq!((loc.offset(), msg), (3, "'hello'"));
/// ```
pub fn string(word: impl Into<String>) -> Literal {
    Literal { word: word.into() }
}

// The byte index into `word` of the first char that `input` doesn't match,
// or None if `word` is a prefix of `input`. Running out of input counts as
// a mismatch at the end of the input.
fn first_mismatch(word: &str, input: &str) -> Option<usize> {
    let mut actual = input.chars();
    word.char_indices()
        .find(|&(_, expected)| actual.next() != Some(expected))
        .map(|(idx, _)| idx)
}

impl<'a> Parser<'a> for Literal {
    type Output = &'a str;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, &'a str> {
        match first_mismatch(&self.word, state.remaining()) {
            None if state.is_sliced() => ParseResult::slice(self.word.len()),
            None => ParseResult::value(state.span(self.word.len()), self.word.len()),
            Some(idx) => {
                let error = state
                    .location()
                    .advance_by(idx)
                    .to_error(format!("'{}'", self.word));
                ParseResult::failure(error, idx != 0)
            }
        }
    }
}

/// Produced by [`regex`].
#[cfg(feature = "regex")]
#[derive(Clone, Debug)]
pub struct Pattern {
    pattern: String,
    regex: regex::Regex,
}

/// Match the regular expression `pattern` at the current location, handing
/// back the matched text. The pattern is only ever tried at the current
/// location; we never scan ahead for a match. Failures are never committed.
///
/// This hands back an error if `pattern` is not a valid regular expression.
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::regex};
///
/// let digits = regex("[0-9]+").unwrap();
///
/// assert_eq!(digits.run("123abc"), Ok("123"));
/// assert!(digits.run("abc123").is_err());
/// ```
#[cfg(feature = "regex")]
pub fn regex(pattern: &str) -> Result<Pattern, regex::Error> {
    let regex = regex::Regex::new(&format!("^(?:{pattern})"))?;
    Ok(Pattern {
        pattern: pattern.to_owned(),
        regex,
    })
}

#[cfg(feature = "regex")]
impl<'a> Parser<'a> for Pattern {
    type Output = &'a str;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, &'a str> {
        match self.regex.find(state.remaining()) {
            Some(m) if state.is_sliced() => ParseResult::slice(m.end()),
            Some(m) => ParseResult::value(m.as_str(), m.end()),
            None => {
                let error = state
                    .location()
                    .to_error(format!("regex {}", self.pattern));
                ParseResult::failure(error, false)
            }
        }
    }
}

/// Produced by [`eof`].
#[derive(Clone, Copy, Debug)]
pub struct Eof;

/// Succeed, consuming nothing, only if there is no input left.
///
/// # Example
///
/// ```
/// use sliceable::{Parser, primitives::{eof, string}};
///
/// assert_eq!(eof().run(""), Ok(()));
/// assert!(string("a").skip_left(eof()).run("ab").is_err());
/// ```
pub fn eof() -> Eof {
    Eof
}

impl<'a> Parser<'a> for Eof {
    type Output = ();

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, ()> {
        if state.remaining().is_empty() {
            ParseResult::value((), 0)
        } else {
            ParseResult::failure(state.location().to_error("end of input"), false)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mismatch_index() {
        assert_eq!(first_mismatch("abc", "abc"), None);
        assert_eq!(first_mismatch("abc", "abcdef"), None);
        assert_eq!(first_mismatch("abc", "xbc"), Some(0));
        assert_eq!(first_mismatch("abc", "abx"), Some(2));
        assert_eq!(first_mismatch("", "abc"), None);
    }

    #[test]
    fn mismatch_stops_at_end_of_input() {
        assert_eq!(first_mismatch("abcdef", "abc"), Some(3));
        assert_eq!(first_mismatch("abc", ""), Some(0));
        assert_eq!(first_mismatch("🗻∈🌏", "🗻∈"), Some("🗻∈".len()));
    }

    #[test]
    fn literal_failure_location_and_commitment() {
        let res = string("abcdef").parse(ParseState::new("abc"));
        match res {
            ParseResult::Failure { error, committed } => {
                assert!(committed);
                assert_eq!(error.latest_location().map(|l| l.offset()), Some(3));
                assert_eq!(error.latest().map(|(_, msg)| msg), Some("'abcdef'"));
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn literal_slices_when_asked() {
        let state = ParseState::new("abcdef").with_slicing(true);
        let res = string("abc").parse(state);
        assert!(matches!(res, ParseResult::Slice { consumed: 3, .. }));
        assert_eq!(res.extract("abcdef"), Ok("abc"));
    }

    #[test]
    fn literal_matches_part_way_through_input() {
        let state = ParseState::new("xxabc").advance_by(2);
        let res = string("abc").parse(state);
        assert!(matches!(res, ParseResult::Value { value: "abc", consumed: 3 }));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn regex_matches_prefix_only() {
        let p = regex("b+").unwrap();
        let res = p.parse(ParseState::new("abbb"));
        assert!(matches!(res, ParseResult::Failure { committed: false, .. }));
        let res = p.parse(ParseState::new("abbb").advance_by(1));
        assert!(matches!(res, ParseResult::Value { value: "bbb", consumed: 3 }));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn regex_alternation_is_anchored_as_a_whole() {
        let p = regex("x|b").unwrap();
        assert!(p.run("ab").is_err());
        assert_eq!(p.run("ba"), Ok("b"));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn regex_slices_when_asked() {
        let p = regex("[a-z]+").unwrap();
        let res = p.parse(ParseState::new("abc1").with_slicing(true));
        assert!(matches!(res, ParseResult::Slice { consumed: 3, .. }));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn regex_failure_describes_pattern() {
        let err = regex("[0-9]+").unwrap().run("x").unwrap_err();
        assert_eq!(err.latest().map(|(_, msg)| msg), Some("regex [0-9]+"));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn invalid_regex_is_an_error() {
        assert!(regex("(").is_err());
    }

    #[test]
    fn eof_only_at_end() {
        assert!(eof().parse(ParseState::new("abc").advance_by(3)).is_success());
        assert!(!eof().parse(ParseState::new("abc").advance_by(2)).is_success());
    }
}
