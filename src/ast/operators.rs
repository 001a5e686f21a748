//! Operator and visibility enums with their surface spellings.
//!
//! Each enum is a closed set: the parser derives its alternation from
//! `VARIANTS` instead of hardcoding one branch per spelling, so adding
//! an operator means adding one table entry here.

use std::fmt;

/// A closed set of variants, each with a fixed textual spelling
pub trait Symbol: Copy + Sized + 'static {
    /// What this set is called in error messages
    const DESCRIPTION: &'static str;

    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// The surface-syntax spelling of this variant
    fn symbol(&self) -> &'static str;
}

/// Operators that prefix an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Increment,
    Decrement,
}

impl Symbol for PrefixOperator {
    const DESCRIPTION: &'static str = "prefix operator";
    const VARIANTS: &'static [Self] = &[PrefixOperator::Increment, PrefixOperator::Decrement];

    fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
        }
    }
}

/// Operators that follow an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixOperator {
    Increment,
    Decrement,
}

impl Symbol for SuffixOperator {
    const DESCRIPTION: &'static str = "suffix operator";
    const VARIANTS: &'static [Self] = &[SuffixOperator::Increment, SuffixOperator::Decrement];

    fn symbol(&self) -> &'static str {
        match self {
            SuffixOperator::Increment => "++",
            SuffixOperator::Decrement => "--",
        }
    }
}

/// Operators that appear between two expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    BooleanOr,
    BooleanAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    BooleanEqual,
    BooleanNotEqual,
    LessThan,
    GreaterThan,
    GreaterOrEqualTo,
    BitwiseShiftLeft,
    BitwiseShiftRight,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
}

impl Symbol for InfixOperator {
    const DESCRIPTION: &'static str = "infix operator";
    const VARIANTS: &'static [Self] = &[
        InfixOperator::BooleanOr,
        InfixOperator::BooleanAnd,
        InfixOperator::BitwiseOr,
        InfixOperator::BitwiseXor,
        InfixOperator::BitwiseAnd,
        InfixOperator::BooleanEqual,
        InfixOperator::BooleanNotEqual,
        InfixOperator::LessThan,
        InfixOperator::GreaterThan,
        InfixOperator::GreaterOrEqualTo,
        InfixOperator::BitwiseShiftLeft,
        InfixOperator::BitwiseShiftRight,
        InfixOperator::Addition,
        InfixOperator::Subtraction,
        InfixOperator::Multiplication,
        InfixOperator::Division,
        InfixOperator::Remainder,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::BooleanOr => "||",
            InfixOperator::BooleanAnd => "&&",
            InfixOperator::BitwiseOr => "|",
            InfixOperator::BitwiseXor => "^",
            InfixOperator::BitwiseAnd => "&",
            InfixOperator::BooleanEqual => "==",
            InfixOperator::BooleanNotEqual => "!=",
            InfixOperator::LessThan => "<",
            InfixOperator::GreaterThan => ">",
            InfixOperator::GreaterOrEqualTo => ">=",
            InfixOperator::BitwiseShiftLeft => "<<",
            InfixOperator::BitwiseShiftRight => ">>",
            InfixOperator::Addition => "+",
            InfixOperator::Subtraction => "-",
            InfixOperator::Multiplication => "*",
            InfixOperator::Division => "/",
            InfixOperator::Remainder => "%",
        }
    }
}

impl InfixOperator {
    /// Binding strength, higher binds tighter. All infix operators are
    /// left-associative.
    pub fn precedence(&self) -> u8 {
        match self {
            InfixOperator::BooleanOr => 1,
            InfixOperator::BooleanAnd => 2,
            InfixOperator::BitwiseOr => 3,
            InfixOperator::BitwiseXor => 4,
            InfixOperator::BitwiseAnd => 5,
            InfixOperator::BooleanEqual | InfixOperator::BooleanNotEqual => 6,
            InfixOperator::LessThan
            | InfixOperator::GreaterThan
            | InfixOperator::GreaterOrEqualTo => 7,
            InfixOperator::BitwiseShiftLeft | InfixOperator::BitwiseShiftRight => 8,
            InfixOperator::Addition | InfixOperator::Subtraction => 9,
            InfixOperator::Multiplication
            | InfixOperator::Division
            | InfixOperator::Remainder => 10,
        }
    }
}

/// Visibility of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Symbol for Visibility {
    const DESCRIPTION: &'static str = "visibility";
    const VARIANTS: &'static [Self] = &[
        Visibility::Public,
        Visibility::Protected,
        Visibility::Private,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for SuffixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
