use crate::{ParseResult, ParseState, Parser};

/// Produced by [`lazy`].
#[derive(Clone, Debug)]
pub struct Lazy<F> {
    make: F,
}

/// Build the parser only when it's needed, each time it runs. This lets a
/// parser refer to itself, which is how recursive grammars are written.
///
/// # Example
///
/// ```
/// use sliceable::{lazy, BoxedParser, Parser, primitives::string};
///
/// // nested = "(" nested ")" | "x"
/// fn nested<'a>() -> BoxedParser<'a, usize> {
///     lazy(nested)
///         .surrounded_by(string("("), string(")"))
///         .map(|depth| depth + 1)
///         .or(string("x").to(0))
///         .boxed()
/// }
///
/// assert_eq!(nested().run("((x))"), Ok(2));
/// assert_eq!(nested().slice().run("(x)!"), Ok("(x)"));
/// ```
pub fn lazy<F>(make: F) -> Lazy<F> {
    Lazy { make }
}

impl<'a, F, P> Parser<'a> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'a>,
{
    type Output = P::Output;

    fn parse(&self, state: ParseState<'a>) -> ParseResult<'a, P::Output> {
        (self.make)().parse(state)
    }
}
