//! Parser module for the Java subset
//!
//! Parsing is built from character-level combinators: each parser takes
//! an [`Input`] cursor and either returns a value together with the rest
//! of the input, or a [`ParseError`] at the position it gave up. Cursors
//! are `Copy`, so a failed alternative leaves the input untouched.

pub mod error;
pub mod expressions;
pub mod grammar;
pub mod input;
pub mod primitives;
pub mod symbols;

pub use error::ParseError;
pub use expressions::expression;
pub use input::{Input, Location};
pub use primitives::parse;

use crate::ast::CompilationUnit;
use crate::error::Result;

/// Parse a complete Java source file into a [`CompilationUnit`]
pub fn parse_java(source: &str) -> Result<CompilationUnit> {
    CompilationUnit::parse(source)
}
