//! JavaScript/TypeScript front-end
//!
//!     The pipeline is:
//!         1. Tokenization using logos. See [lexing]. Comments are pulled out of the token
//!            stream into their own list, with their byte ranges preserved.
//!         2. Token tree. See [parsing::tree]. Tokens are grouped by (), [] and {} so that each
//!            bracket level can be inspected in isolation.
//!         3. Call extraction. See [parsing::calls]. Every call expression in the tree is
//!            recovered together with its arguments; function arguments carry their body.
//!
//!     The output is a [Program](parsing::Program): the call expressions in source order plus
//!     the [CommentIndex](ast::CommentIndex) for the whole file.
//!
//!     This is not an ECMAScript parser. Statements, operators and most expressions are never
//!     interpreted; only brackets, commas, arrows and the `function` keyword carry meaning.

pub mod ast;
pub mod lexing;
pub mod parsing;

pub use parsing::{parse, ParseError, Program};
