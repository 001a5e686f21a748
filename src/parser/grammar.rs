//! Grammar rules for the declaration subset: identifiers, package and
//! import statements, annotations and class headers.
//!
//! Each rule is a direct sequential composition of the primitives in
//! [`super::primitives`] and is independently invocable through the
//! `parse` constructor on its AST node.

use super::error::ParseError;
use super::input::Input;
use super::primitives::{
    self, at_least_once, ch, keyword, many, optional, satisfy, token, PResult,
};
use super::symbols;
use crate::ast::{
    Annotation, ClassDefinition, ComposedIdentifier, CompilationUnit, Identifier, ImportStatement,
    Literal, PackageName, PackageStatement,
};
use crate::error::Result;

/// Parse an identifier: a letter or underscore followed by letters,
/// digits and underscores. Rejecting a leading digit keeps digit runs
/// in the literal grammar, where range checking happens.
pub fn identifier(input: Input) -> PResult<Identifier> {
    let (first, rest) = satisfy("identifier", |c| c.is_alphabetic() || c == '_')(input)?;
    let (tail, rest) = many(satisfy("identifier", |c| c.is_alphanumeric() || c == '_'))(rest)?;
    let mut name = String::new();
    name.push(first);
    name.extend(tail);
    Ok((Identifier::new(name), rest))
}

/// Parse a dotted identifier path such as `com.example.Foo`
pub fn composed_identifier(input: Input) -> PResult<ComposedIdentifier> {
    fn segment(input: Input) -> PResult<Identifier> {
        let (_, rest) = ch('.')(input)?;
        identifier(rest)
    }
    let (head, rest) = identifier(input)?;
    let (tail, rest) = many(segment)(rest)?;
    let mut identifiers = vec![head];
    identifiers.extend(tail);
    Ok((ComposedIdentifier::new(identifiers), rest))
}

/// Parse a package name
pub fn package_name(input: Input) -> PResult<PackageName> {
    let (composed, rest) = composed_identifier(input)?;
    Ok((PackageName::new(composed), rest))
}

/// Parse a `package a.b.c;` statement
pub fn package_statement(input: Input) -> PResult<PackageStatement> {
    let (_, rest) = token(keyword("package"))(input)?;
    let (name, rest) = package_name(rest)?;
    let (_, rest) = token(ch(';'))(rest)?;
    Ok((
        PackageStatement { package_name: name },
        rest,
    ))
}

/// Parse an `import a.b.C;` statement
pub fn import_statement(input: Input) -> PResult<ImportStatement> {
    let (_, rest) = token(keyword("import"))(input)?;
    let (name, rest) = token(package_name)(rest)?;
    let (_, rest) = token(ch(';'))(rest)?;
    Ok((
        ImportStatement { package_name: name },
        rest,
    ))
}

/// Parse zero or more import statements, preserving declaration order
/// (duplicates included)
pub fn import_list(input: Input) -> PResult<Vec<ImportStatement>> {
    many(import_statement)(input)
}

/// Parse any literal. On failure the reported error is whichever
/// alternative reached deeper into the input.
pub fn literal(input: Input) -> PResult<Literal> {
    match string_literal(input) {
        Ok(ok) => Ok(ok),
        Err(string_err) => match number_literal(input) {
            Ok(ok) => Ok(ok),
            Err(number_err) => Err(string_err.furthest(number_err)),
        },
    }
}

fn number_literal(input: Input) -> PResult<Literal> {
    let (digits, rest) = at_least_once(satisfy("digit", |c| c.is_ascii_digit()))(input)?;
    let text: String = digits.into_iter().collect();
    let value: i64 = text.parse().map_err(|_| {
        ParseError::unexpected(
            "integer literal in range",
            format!("\"{}\"", text),
            input.location(),
        )
    })?;
    match ch('L')(rest) {
        Ok((_, rest)) => Ok((Literal::Long(value), rest)),
        Err(_) => Ok((Literal::Integer(value), rest)),
    }
}

fn string_literal(input: Input) -> PResult<Literal> {
    let (_, mut rest) = ch('"')(input)?;
    let mut value = String::new();
    loop {
        match rest.next() {
            None => return Err(ParseError::end_of_input("closing '\"'", rest.location())),
            Some(('"', next)) => return Ok((Literal::Str(value), next)),
            Some(('\\', next)) => match next.next() {
                Some(('"', next)) => {
                    value.push('"');
                    rest = next;
                }
                Some(('\\', next)) => {
                    value.push('\\');
                    rest = next;
                }
                Some(('n', next)) => {
                    value.push('\n');
                    rest = next;
                }
                Some(('t', next)) => {
                    value.push('\t');
                    rest = next;
                }
                Some((other, _)) => {
                    return Err(ParseError::unexpected(
                        "string escape",
                        format!("'\\{}'", other),
                        rest.location(),
                    ))
                }
                None => return Err(ParseError::end_of_input("string escape", next.location())),
            },
            Some((ch, next)) => {
                value.push(ch);
                rest = next;
            }
        }
    }
}

/// Parse a comma-separated, possibly empty list of literals
pub(crate) fn literal_list(input: Input) -> PResult<Vec<Literal>> {
    let (first, mut rest) = match token(literal)(input) {
        Ok(ok) => ok,
        Err(_) => return Ok((Vec::new(), input)),
    };
    let mut literals = vec![first];
    loop {
        let after_comma = match token(ch(','))(rest) {
            Ok((_, after)) => after,
            Err(_) => break,
        };
        let (item, after) = token(literal)(after_comma)?;
        literals.push(item);
        rest = after;
    }
    Ok((literals, rest))
}

/// Parse an annotation: `@Name(literal, ...)`
pub fn annotation(input: Input) -> PResult<Annotation> {
    let (_, rest) = token(ch('@'))(input)?;
    let (name, rest) = token(identifier)(rest)?;
    let (_, rest) = token(ch('('))(rest)?;
    let (arguments, rest) = literal_list(rest)?;
    let (_, rest) = token(ch(')'))(rest)?;
    Ok((Annotation { name, arguments }, rest))
}

/// Parse a class header: optional annotation, visibility, `class`,
/// name, optional `extends` base class
pub fn class_definition(input: Input) -> PResult<ClassDefinition> {
    let (annotation, rest) = optional(token(annotation))(input)?;
    let (visibility, rest) = token(symbols::visibility)(rest)?;
    let (_, rest) = token(keyword("class"))(rest)?;
    let (name, rest) = token(identifier)(rest)?;
    let (base_class, rest) = match token(keyword("extends"))(rest) {
        Ok((_, after)) => {
            let (base, after) = token(identifier)(after)?;
            (Some(base), after)
        }
        Err(_) => (None, rest),
    };
    Ok((
        ClassDefinition {
            visibility,
            name,
            base_class,
            annotation,
        },
        rest,
    ))
}

/// Parse a whole compilation unit: package, imports, one class
pub fn compilation_unit(input: Input) -> PResult<CompilationUnit> {
    let (package, rest) = package_statement(input)?;
    let (imports, rest) = import_list(rest)?;
    let (class, rest) = class_definition(rest)?;
    Ok((
        CompilationUnit {
            package,
            imports,
            class,
        },
        rest,
    ))
}

impl ComposedIdentifier {
    /// Parse a dotted identifier path from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(composed_identifier, text)
    }
}

impl PackageName {
    /// Parse a bare dotted package name from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(package_name, text)
    }
}

impl PackageStatement {
    /// Parse a `package a.b.c;` statement from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(package_statement, text)
    }
}

impl ImportStatement {
    /// Parse an `import a.b.C;` statement from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(import_statement, text)
    }
}

impl Annotation {
    /// Parse an `@Name(args)` annotation from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(annotation, text)
    }
}

impl ClassDefinition {
    /// Parse a class header from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(class_definition, text)
    }
}

impl CompilationUnit {
    /// Parse a whole source file from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(compilation_unit, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_takes_letters_and_digits() {
        let (id, rest) = identifier(Input::new("abc123;")).expect("should match");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(rest.rest(), ";");
    }

    #[test]
    fn identifier_requires_at_least_one_char() {
        assert!(identifier(Input::new(";")).is_err());
    }

    #[test]
    fn identifier_cannot_start_with_a_digit() {
        assert!(identifier(Input::new("9abc")).is_err());
        let (id, _) = identifier(Input::new("_private9")).expect("should match");
        assert_eq!(id.as_str(), "_private9");
    }

    #[test]
    fn composed_identifier_splits_on_dots() {
        let (composed, _) =
            composed_identifier(Input::new("com.example.Foo")).expect("should match");
        assert_eq!(composed.identifiers.len(), 3);
        assert_eq!(composed.to_string(), "com.example.Foo");
    }

    #[test]
    fn composed_identifier_stops_before_trailing_dot_space() {
        // the dot segment needs an identifier right after the dot
        let (composed, rest) = composed_identifier(Input::new("a.b ")).expect("should match");
        assert_eq!(composed.to_string(), "a.b");
        assert_eq!(rest.rest(), " ");
    }

    #[test]
    fn long_literal_wins_over_integer() {
        let (lit, rest) = literal(Input::new("200L")).expect("should match");
        assert_eq!(lit, Literal::Long(200));
        assert!(rest.is_at_end());
    }

    #[test]
    fn string_literal_decodes_escapes() {
        let (lit, _) = literal(Input::new(r#""a\"b\n""#)).expect("should match");
        assert_eq!(lit, Literal::Str("a\"b\n".to_string()));
    }

    #[test]
    fn string_literal_rejects_unknown_escape() {
        assert!(literal(Input::new(r#""\q""#)).is_err());
    }

    #[test]
    fn out_of_range_integer_is_a_syntax_error() {
        assert!(literal(Input::new("99999999999999999999")).is_err());
    }
}
