//! The primitive combinator algebra every grammar rule is built from.
//!
//! A parser is any `Fn(Input) -> PResult<T>`: it either returns the
//! parsed value together with the advanced cursor, or a `ParseError`
//! without having consumed anything (`Input` is `Copy`, so the caller's
//! cursor is untouched by a failed branch).

use super::error::ParseError;
use super::input::Input;
use crate::error::{Error, Result};

/// Result of running a parser: the value plus the remaining input
pub type PResult<'a, T> = std::result::Result<(T, Input<'a>), ParseError>;

/// Describe the input at `input` for an error message
pub(crate) fn found(input: &Input) -> String {
    match input.peek() {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

/// Match exactly the character `expected`
pub fn ch<'a>(expected: char) -> impl Fn(Input<'a>) -> PResult<'a, char> {
    move |input| match input.next() {
        Some((c, rest)) if c == expected => Ok((c, rest)),
        Some(_) => Err(ParseError::unexpected(
            format!("'{}'", expected),
            found(&input),
            input.location(),
        )),
        None => Err(ParseError::end_of_input(
            format!("'{}'", expected),
            input.location(),
        )),
    }
}

/// Match a character the predicate accepts; `description` names the
/// character class in error messages
pub fn satisfy<'a, F>(
    description: &'static str,
    predicate: F,
) -> impl Fn(Input<'a>) -> PResult<'a, char>
where
    F: Fn(char) -> bool,
{
    move |input| match input.next() {
        Some((c, rest)) if predicate(c) => Ok((c, rest)),
        Some(_) => Err(ParseError::unexpected(
            description,
            found(&input),
            input.location(),
        )),
        None => Err(ParseError::end_of_input(description, input.location())),
    }
}

/// Match exactly the string `expected`
pub fn literal<'a>(expected: &'static str) -> impl Fn(Input<'a>) -> PResult<'a, &'static str> {
    move |input| {
        if input.starts_with(expected) {
            Ok((expected, input.consume(expected)))
        } else if input.is_at_end() {
            Err(ParseError::end_of_input(
                format!("\"{}\"", expected),
                input.location(),
            ))
        } else {
            Err(ParseError::unexpected(
                format!("\"{}\"", expected),
                found(&input),
                input.location(),
            ))
        }
    }
}

/// Match the word `expected`, refusing to split a longer identifier:
/// `keyword("package")` fails on `"packages"`.
pub fn keyword<'a>(expected: &'static str) -> impl Fn(Input<'a>) -> PResult<'a, &'static str> {
    let inner = literal(expected);
    move |input| {
        let (matched, rest) = inner(input)?;
        if matches!(rest.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            return Err(ParseError::unexpected(
                format!("keyword \"{}\"", expected),
                found(&input),
                input.location(),
            ));
        }
        Ok((matched, rest))
    }
}

/// Repeat `parser` zero or more times, collecting the results in order
pub fn many<'a, T>(
    parser: impl Fn(Input<'a>) -> PResult<'a, T>,
) -> impl Fn(Input<'a>) -> PResult<'a, Vec<T>> {
    move |mut input| {
        let mut results = Vec::new();
        loop {
            match parser(input) {
                Ok((value, rest)) => {
                    // a parser that consumed nothing would repeat forever
                    if rest.location().offset == input.location().offset {
                        break;
                    }
                    results.push(value);
                    input = rest;
                }
                Err(_) => break,
            }
        }
        Ok((results, input))
    }
}

/// Repeat `parser` one or more times; zero matches is a failure
pub fn at_least_once<'a, T>(
    parser: impl Fn(Input<'a>) -> PResult<'a, T>,
) -> impl Fn(Input<'a>) -> PResult<'a, Vec<T>> {
    move |input| {
        let (first, mut rest) = parser(input)?;
        let mut results = vec![first];
        loop {
            match parser(rest) {
                Ok((value, next)) => {
                    if next.location().offset == rest.location().offset {
                        break;
                    }
                    results.push(value);
                    rest = next;
                }
                Err(_) => break,
            }
        }
        Ok((results, rest))
    }
}

/// Run `parser` and succeed either way; absence is `None`
pub fn optional<'a, T>(
    parser: impl Fn(Input<'a>) -> PResult<'a, T>,
) -> impl Fn(Input<'a>) -> PResult<'a, Option<T>> {
    move |input| match parser(input) {
        Ok((value, rest)) => Ok((Some(value), rest)),
        Err(_) => Ok((None, input)),
    }
}

/// Try `first`, then `second`, committing to whichever succeeds first.
/// On double failure, report the failure that reached deeper into the
/// input.
pub fn or<'a, T>(
    first: impl Fn(Input<'a>) -> PResult<'a, T>,
    second: impl Fn(Input<'a>) -> PResult<'a, T>,
) -> impl Fn(Input<'a>) -> PResult<'a, T> {
    move |input| match first(input) {
        Ok(ok) => Ok(ok),
        Err(first_err) => match second(input) {
            Ok(ok) => Ok(ok),
            Err(second_err) => Err(first_err.furthest(second_err)),
        },
    }
}

/// Wrap `parser` so surrounding whitespace is consumed and discarded
pub fn token<'a, T>(
    parser: impl Fn(Input<'a>) -> PResult<'a, T>,
) -> impl Fn(Input<'a>) -> PResult<'a, T> {
    move |input| {
        let (value, rest) = parser(input.skip_whitespace())?;
        Ok((value, rest.skip_whitespace()))
    }
}

/// Run `parser` against the whole of `text`.
///
/// Fails with [`Error::MissingInput`] on empty text, and treats leftover
/// input after a successful match as a syntax error anchored at the
/// first unconsumed character.
pub fn parse<'a, T>(parser: impl Fn(Input<'a>) -> PResult<'a, T>, text: &'a str) -> Result<T> {
    if text.is_empty() {
        return Err(Error::MissingInput);
    }
    let (value, rest) = parser(Input::new(text))?;
    let rest = rest.skip_whitespace();
    if !rest.is_at_end() {
        return Err(ParseError::Incomplete {
            location: rest.location(),
        }
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ch_matches_and_advances() {
        let input = Input::new("ab");
        let (c, rest) = ch('a')(input).expect("should match");
        assert_eq!(c, 'a');
        assert_eq!(rest.rest(), "b");
    }

    #[test]
    fn ch_failure_consumes_nothing() {
        let input = Input::new("ab");
        assert!(ch('x')(input).is_err());
        assert_eq!(input.rest(), "ab");
    }

    #[test]
    fn keyword_rejects_identifier_prefix() {
        assert!(keyword("package")(Input::new("package p;")).is_ok());
        assert!(keyword("package")(Input::new("packages p;")).is_err());
    }

    #[test]
    fn many_allows_zero_matches() {
        let digits = many(satisfy("digit", |c| c.is_ascii_digit()));
        let (value, rest) = digits(Input::new("abc")).expect("many never fails");
        assert!(value.is_empty());
        assert_eq!(rest.rest(), "abc");
    }

    #[test]
    fn at_least_once_requires_a_match() {
        let digits = at_least_once(satisfy("digit", |c| c.is_ascii_digit()));
        assert!(digits(Input::new("abc")).is_err());
        let (value, _) = digits(Input::new("123x")).expect("should match digits");
        assert_eq!(value, vec!['1', '2', '3']);
    }

    #[test]
    fn or_reports_deepest_failure() {
        // first alternative fails at offset 1, second at offset 0
        fn long(input: Input) -> PResult<char> {
            let (_, rest) = ch('a')(input)?;
            ch('z')(rest)
        }
        let alt = or(long, ch('b'));
        let err = alt(Input::new("ax")).expect_err("both fail");
        assert_eq!(err.location().offset, 1);
    }

    #[test]
    fn token_skips_surrounding_whitespace() {
        let semicolon = token(ch(';'));
        let (_, rest) = semicolon(Input::new("  ;  x")).expect("should match");
        assert_eq!(rest.rest(), "x");
    }

    #[test]
    fn parse_rejects_empty_input() {
        let result = parse(ch('a'), "");
        assert!(matches!(result, Err(Error::MissingInput)));
    }

    #[test]
    fn parse_rejects_leftover_input() {
        let result = parse(ch('a'), "ab");
        match result {
            Err(Error::Parse { column, .. }) => assert_eq!(column, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
