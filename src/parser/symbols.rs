//! Parsing of closed symbol sets (operators, visibility keywords).
//!
//! Candidate spellings are tried longest-first: `>`, `>>` and `>=` all
//! begin with `>`, so an alternation in declaration order would match
//! the short spelling and never reach the longer one. The length-sorted
//! ordering is a correctness requirement of every enumerated-symbol
//! parser here, not a tuning choice.

use once_cell::sync::Lazy;

use super::error::ParseError;
use super::input::Input;
use super::primitives::{found, PResult};
use crate::ast::{InfixOperator, PrefixOperator, SuffixOperator, Symbol, Visibility};

/// All variants of `S`, longest spelling first. The sort is stable, so
/// equal-length spellings keep their declaration order.
fn by_descending_symbol_length<S: Symbol>() -> Vec<S> {
    let mut variants = S::VARIANTS.to_vec();
    variants.sort_by(|a, b| b.symbol().len().cmp(&a.symbol().len()));
    variants
}

fn match_symbol<'a, S: Symbol>(ordered: &[S], input: Input<'a>) -> PResult<'a, S> {
    for &variant in ordered {
        let symbol = variant.symbol();
        if !input.starts_with(symbol) {
            continue;
        }
        let rest = input.consume(symbol);
        // keyword-shaped spellings must not split a longer identifier
        if symbol.ends_with(|c: char| c.is_alphanumeric())
            && matches!(rest.peek(), Some(c) if c.is_alphanumeric() || c == '_')
        {
            continue;
        }
        return Ok((variant, rest));
    }
    if input.is_at_end() {
        Err(ParseError::end_of_input(S::DESCRIPTION, input.location()))
    } else {
        Err(ParseError::unexpected(
            S::DESCRIPTION,
            found(&input),
            input.location(),
        ))
    }
}

static PREFIX_OPERATORS: Lazy<Vec<PrefixOperator>> = Lazy::new(by_descending_symbol_length);
static SUFFIX_OPERATORS: Lazy<Vec<SuffixOperator>> = Lazy::new(by_descending_symbol_length);
static INFIX_OPERATORS: Lazy<Vec<InfixOperator>> = Lazy::new(by_descending_symbol_length);
static VISIBILITIES: Lazy<Vec<Visibility>> = Lazy::new(by_descending_symbol_length);

/// Parse a prefix operator (`++`, `--`)
pub fn prefix_operator(input: Input) -> PResult<PrefixOperator> {
    match_symbol(&PREFIX_OPERATORS, input)
}

/// Parse a suffix operator (`++`, `--`)
pub fn suffix_operator(input: Input) -> PResult<SuffixOperator> {
    match_symbol(&SUFFIX_OPERATORS, input)
}

/// Parse any infix operator
pub fn infix_operator(input: Input) -> PResult<InfixOperator> {
    match_symbol(&INFIX_OPERATORS, input)
}

/// Parse a visibility keyword
pub fn visibility(input: Input) -> PResult<Visibility> {
    match_symbol(&VISIBILITIES, input)
}
