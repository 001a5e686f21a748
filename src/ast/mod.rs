//! Abstract Syntax Tree (AST) representation for the Java subset.
//!
//! All nodes are immutable value objects built by the grammar layer
//! once their constituent text has matched; every composite node
//! exclusively owns its children. `Display` on each node is its
//! canonical re-serialization to source text.

mod nodes;
mod operators;

pub use nodes::*;
pub use operators::*;
