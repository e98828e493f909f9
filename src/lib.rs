/*!
This small crate helps you to build backtracking, recursive descent parsers for strings by
composing small parsers together, without writing a grammar or running a parser generator.

Parsers are built from a handful of primitives (see [`primitives`]) and combined using the
methods on the [`Parser`] trait. Running a parser on some input hands back either the value
parsed or a [`ParseError`] describing where and why it failed.

**Some specific features/goals:**
- Backtracking is explicit. A parser that fails after consuming some input *commits*, and
  [`Parser::or`] won't try alternatives after a committed failure. [`Parser::attempt`] undoes
  this where backtracking further is wanted.
- Slicing. Wrapping a parser in [`Parser::slice`] hands back the text it matched, and while
  running under it, parsers like [`Parser::many`] and [`Parser::map2`] avoid building
  intermediate values at all.
- Errors accumulate context as they unwind. [`Parser::scope`] adds a frame to the error stack,
  and [`Parser::label`] renames the innermost one.
- Repetition is iterative, so long inputs don't grow the call stack.
- Values borrow from the input where they can; the primitives hand back `&str`s pointing into
  it rather than allocating.

# Example

```rust
use sliceable::{
    // This trait has all of the combinators on it:
    Parser,
    primitives::string,
};

// Step 1: build a parser for some comma separated key/value pairs
// ===============================================================

let key = string("a").or(string("b")).or(string("c")).many1().slice();
let value = string("0")
    .or(string("1"))
    .many1()
    .slice()
    .map(|bits| u32::from_str_radix(bits, 2).unwrap());
let pair = key
    .skip(string("="))
    .product(value)
    .scope("key/value pair");
let pairs = pair.clone().sep_by(string(",")).root();

// Step 2: run it
// ==============

assert_eq!(
    pairs.run("a=1,bc=101"),
    Ok(vec![("a", 1), ("bc", 5)])
);

// Step 3: errors say where things went wrong
// ==========================================

let err = pair.run("bc?101").unwrap_err();
let (loc, msg) = err.latest().unwrap();
assert_eq!((loc.line(), loc.column(), msg), (1, 3, "'='"));

let (loc, msg) = err.frames().last().unwrap();
assert_eq!((loc.column(), msg), (1, "key/value pair"));

// Trailing input that can't be parsed is reported by `root`:
let err = pairs.run("a=1,bc?101").unwrap_err();
assert_eq!(err.latest().map(|(loc, msg)| (loc.column(), msg)), Some((4, "end of input")));
```
*/
#![deny(missing_docs)]

mod error;
mod location;
mod result;
mod state;

pub mod parser;
pub mod primitives;

pub use error::ParseError;
pub use location::Location;
pub use parser::{lazy, BoxedParser, Parser};
pub use result::ParseResult;
pub use state::ParseState;
