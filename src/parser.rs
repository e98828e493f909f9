//! This module contains the core [`Parser`] trait. Every combinator is a
//! provided method on it, handing back one of the small structs defined in
//! this module, which in turn implement [`Parser`].
//!
//! Any `Fn(ParseState<'a>) -> ParseResult<'a, A>` is also a [`Parser`], which
//! is handy for one-off parsers that the combinators don't cover.
mod attempt;
mod boxed;
mod flat_map;
mod label;
mod lazy;
mod many;
mod map;
mod map2;
mod or;
mod scope;
mod slice;

use crate::primitives::{eof, Eof};
use crate::{ParseError, ParseResult, ParseState};

// Re-export the structs handed back from the combinator fns:
pub use attempt::Attempt;
pub use boxed::BoxedParser;
pub use flat_map::FlatMap;
pub use label::Label;
pub use lazy::{lazy, Lazy};
pub use many::Many;
pub use map::Map;
pub use map2::Map2;
pub use or::Or;
pub use scope::Scope;
pub use slice::Slice;

/// Something which, given a [`ParseState`], tries to parse some input and
/// hands back a [`ParseResult`].
///
/// The `'a` lifetime is that of the input string, so that parsers can hand
/// back `&'a str`s pointing into it.
pub trait Parser<'a> {
    /// The type of value produced on success.
    type Output;

    /// Run the parser at the location given by `state`.
    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, Self::Output>;

    /// Parse `input` from the start, handing back the value parsed or the
    /// reason that parsing failed. Input left over after a successful parse is
    /// not an error; see [`Parser::root`] if it should be.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// assert_eq!(string("abc").run("abcdef"), Ok("abc"));
    /// assert!(string("abc").run("xyz").is_err());
    /// ```
    fn run(&self, input: &'a str) -> Result<Self::Output, ParseError<'a>> {
        log::trace!("parsing {} bytes of input", input.len());
        let res = self.parse(ParseState::new(input)).extract(input);
        if let Err(e) = &res {
            if let Some(loc) = e.latest_location() {
                log::debug!("parse failed at {}.{}", loc.line(), loc.column());
            }
        }
        res
    }

    /// Try `self`, and if it fails without committing, try `other` from the
    /// same place instead. A committed failure is handed back as is.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let greeting = string("bye").or(string("hello"));
    /// assert_eq!(greeting.run("hello"), Ok("hello"));
    ///
    /// // "hello" gets as far as "hel" before failing on "help", so it
    /// // commits and "help" is never tried..
    /// let p = string("hello").or(string("help"));
    /// assert!(p.run("help").is_err());
    ///
    /// // ..unless we allow backtracking out of it with `attempt`:
    /// let p = string("hello").attempt().or(string("help"));
    /// assert_eq!(p.run("help"), Ok("help"));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Parser<'a, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Parse a value, and use it to decide which parser to run next.
    ///
    /// Once `self` has consumed some input, any failure of the parser that
    /// follows is committed.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("x").or(string("y")).flat_map(|c| {
    ///     if c == "x" { string("1") } else { string("2") }
    /// });
    ///
    /// assert_eq!(p.run("x1"), Ok("1"));
    /// assert_eq!(p.run("y2"), Ok("2"));
    /// assert!(p.run("x2").is_err());
    /// ```
    fn flat_map<F, Q>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Q,
        Q: Parser<'a>,
    {
        FlatMap::new(self, f)
    }

    /// Transform the value parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("abc").map(|s| s.len());
    /// assert_eq!(p.run("abc"), Ok(3));
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Run `self` and then `other`, combining both values with `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("ab").map2(string("cd"), |a, b| format!("{b}{a}"));
    /// assert_eq!(p.run("abcd"), Ok("cdab".to_string()));
    /// ```
    fn map2<P, F, C>(self, other: P, f: F) -> Map2<Self, P, F>
    where
        Self: Sized,
        P: Parser<'a>,
        F: Fn(Self::Output, P::Output) -> C,
    {
        Map2::new(self, other, f)
    }

    /// Run `self` and then `other`, handing back both values.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("ab").product(string("cd"));
    /// assert_eq!(p.run("abcd"), Ok(("ab", "cd")));
    /// ```
    #[allow(clippy::type_complexity)]
    fn product<P>(
        self,
        other: P,
    ) -> Map2<Self, P, fn(Self::Output, P::Output) -> (Self::Output, P::Output)>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        fn pair<A, B>(a: A, b: B) -> (A, B) {
            (a, b)
        }
        let f: fn(Self::Output, P::Output) -> (Self::Output, P::Output) = pair;
        Map2::new(self, other, f)
    }

    /// Run the parser zero or more times, collecting the values parsed. This
    /// stops at the first uncommitted failure, and fails only if the parser
    /// commits. If the parser succeeds without consuming anything, its value
    /// is collected once and the repetition ends.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("a").many();
    /// assert_eq!(p.run("aaab"), Ok(vec!["a", "a", "a"]));
    /// assert_eq!(p.run("b"), Ok(vec![]));
    /// ```
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many::new(self, 0, None)
    }

    /// Like [`Parser::many`], but the parser must succeed at least once.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("a").many1();
    /// assert_eq!(p.run("aab"), Ok(vec!["a", "a"]));
    /// assert!(p.run("b").is_err());
    /// ```
    fn many1(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many::new(self, 1, None)
    }

    /// Run the parser exactly `n` times.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("ab").list_of_n(2);
    /// assert_eq!(p.run("ababab"), Ok(vec!["ab", "ab"]));
    /// assert!(p.run("abx").is_err());
    /// ```
    fn list_of_n(self, n: usize) -> Many<Self>
    where
        Self: Sized,
    {
        Many::new(self, n, Some(n))
    }

    /// Hand back the text matched rather than the value parsed. While running
    /// under this, parsers avoid building values wherever they can.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("ab").many().slice();
    /// assert_eq!(p.run("ababx"), Ok("abab"));
    /// ```
    fn slice(self) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self)
    }

    /// If the parser fails in a committed way, make the failure uncommitted
    /// so that [`Parser::or`] will try alternatives after it.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("abc").attempt().or(string("abd"));
    /// assert_eq!(p.run("abd"), Ok("abd"));
    /// ```
    fn attempt(self) -> Attempt<Self>
    where
        Self: Sized,
    {
        Attempt::new(self)
    }

    /// On failure, add an outer frame with the given message, located where
    /// this parser started.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let err = string("ab").scope("pair").run("ax").unwrap_err();
    /// assert_eq!(err.len(), 2);
    /// assert_eq!(err.frames().last().map(|(_, msg)| msg), Some("pair"));
    /// ```
    fn scope(self, message: impl Into<String>) -> Scope<Self>
    where
        Self: Sized,
    {
        Scope::new(self, message.into())
    }

    /// On failure, replace the message of the innermost frame.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let err = string("ab").label("expected ab").run("ax").unwrap_err();
    /// assert_eq!(err.len(), 1);
    /// assert_eq!(err.latest().map(|(_, msg)| msg), Some("expected ab"));
    /// ```
    fn label(self, message: impl Into<String>) -> Label<Self>
    where
        Self: Sized,
    {
        Label::new(self, message.into())
    }

    /// Run `self` and then `other`, keeping only the value from `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("x").skip(string(";"));
    /// assert_eq!(p.run("x;"), Ok("x"));
    /// assert!(p.run("x").is_err());
    /// ```
    #[allow(clippy::type_complexity)]
    fn skip<P>(self, other: P) -> Map2<Self, P, fn(Self::Output, P::Output) -> Self::Output>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        fn left<A, B>(a: A, _: B) -> A {
            a
        }
        let f: fn(Self::Output, P::Output) -> Self::Output = left;
        Map2::new(self, other, f)
    }

    /// Run `self` and then `other`, keeping only the value from `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("-").skip_left(string("x")).skip(string(";"));
    /// assert_eq!(p.run("-x;"), Ok("x"));
    /// ```
    #[allow(clippy::type_complexity)]
    fn skip_left<P>(self, other: P) -> Map2<Self, P, fn(Self::Output, P::Output) -> P::Output>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        fn right<A, B>(_: A, b: B) -> B {
            b
        }
        let f: fn(Self::Output, P::Output) -> P::Output = right;
        Map2::new(self, other, f)
    }

    /// Parse `open`, then `self`, then `close`, keeping the value from `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("x").surrounded_by(string("("), string(")"));
    /// assert_eq!(p.run("(x)"), Ok("x"));
    /// ```
    #[allow(clippy::type_complexity)]
    fn surrounded_by<O, C>(
        self,
        open: O,
        close: C,
    ) -> Map2<
        Map2<O, Self, fn(O::Output, Self::Output) -> Self::Output>,
        C,
        fn(Self::Output, C::Output) -> Self::Output,
    >
    where
        Self: Sized,
        O: Parser<'a>,
        C: Parser<'a>,
    {
        open.skip_left(self).skip(close)
    }

    /// Hand back `None` rather than failing, unless the failure commits.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("-").optional();
    /// assert_eq!(p.run("-1"), Ok(Some("-")));
    /// assert_eq!(p.run("1"), Ok(None));
    /// ```
    fn optional(self) -> impl Parser<'a, Output = Option<Self::Output>>
    where
        Self: Sized,
    {
        move |state: ParseState<'a>| match self.parse(state) {
            ParseResult::Failure {
                committed: false, ..
            } => ParseResult::value(None, 0),
            res => res.map_value(state, Some),
        }
    }

    /// One or more of `self`, separated by `separator`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("a").sep_by1(string(","));
    /// assert_eq!(p.run("a,a"), Ok(vec!["a", "a"]));
    /// assert!(p.run("").is_err());
    /// ```
    fn sep_by1<S>(self, separator: S) -> impl Parser<'a, Output = Vec<Self::Output>>
    where
        Self: Sized + Clone,
        S: Parser<'a>,
    {
        self.clone()
            .map2(separator.skip_left(self).many(), |head, tail| {
                let mut all = vec![head];
                all.extend(tail);
                all
            })
    }

    /// Zero or more of `self`, separated by `separator`.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("a").or(string("b")).sep_by(string(","));
    /// assert_eq!(p.run("a,b,a"), Ok(vec!["a", "b", "a"]));
    /// assert_eq!(p.run(""), Ok(vec![]));
    /// ```
    fn sep_by<S>(self, separator: S) -> impl Parser<'a, Output = Vec<Self::Output>>
    where
        Self: Sized + Clone,
        S: Parser<'a>,
    {
        self.sep_by1(separator)
            .optional()
            .map(Option::unwrap_or_default)
    }

    /// Hand back `value` in place of whatever was parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// let p = string("true").to(true).or(string("false").to(false));
    /// assert_eq!(p.run("false"), Ok(false));
    /// ```
    fn to<B>(self, value: B) -> impl Parser<'a, Output = B>
    where
        Self: Sized,
        B: Clone,
    {
        self.slice().map(move |_| value.clone())
    }

    /// Require that the parser consumes all of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use sliceable::{Parser, primitives::string};
    ///
    /// assert_eq!(string("ab").root().run("ab"), Ok("ab"));
    /// assert!(string("ab").root().run("abc").is_err());
    /// ```
    #[allow(clippy::type_complexity)]
    fn root(self) -> Map2<Self, Eof, fn(Self::Output, ()) -> Self::Output>
    where
        Self: Sized,
    {
        self.skip(eof())
    }

    /// Erase the type of this parser, so that it can be named, cloned
    /// cheaply or stored alongside parsers of other types.
    fn boxed(self) -> BoxedParser<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        BoxedParser::new(self)
    }
}

impl<'a, A, F> Parser<'a> for F
where
    F: Fn(ParseState<'a>) -> ParseResult<'a, A>,
{
    type Output = A;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, A> {
        self(state)
    }
}
