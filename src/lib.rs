//! Tiny Java Parser (tinyjava)
//!
//! A syntactic front end for a small Java subset: package and import
//! declarations, a single class header with an optional annotation, and
//! a value-expression grammar with Java's operator precedence.
//!
//! ## Architecture
//!
//! - **parser**: Character-level parser combinators and the grammar
//!   built on top of them
//! - **ast**: Immutable syntax-tree nodes; `Display` renders each node
//!   back to canonical source text
//! - **bin**: Command-line interface for parsing files and directories
//!
//! ## Usage
//!
//! ```
//! use tinyjava::parser::parse_java;
//!
//! let unit = parse_java("package demo;\npublic class Demo").unwrap();
//! assert_eq!(unit.class.name.as_str(), "Demo");
//! ```
//!
//! Individual node types also expose their own `parse` entry points:
//!
//! ```
//! use tinyjava::ast::Expression;
//!
//! let expression = Expression::parse("2 + 3 * 4").unwrap();
//! assert_eq!(expression.to_string(), "2 + 3 * 4");
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::parse_java;
