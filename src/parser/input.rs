use std::fmt;

/// Represents a location in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of file
    pub offset: usize,
}

impl Location {
    /// Create a new location
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Create a location at the start of a file
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance the location by one character
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor over an immutable source string.
///
/// `Input` is `Copy`: a parser that fails simply discards its advanced
/// copy and the caller keeps the original, so failure never consumes
/// input.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    source: &'a str,
    location: Location,
}

impl<'a> Input<'a> {
    /// Create an input cursor at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            location: Location::start(),
        }
    }

    /// Get the current location
    pub fn location(&self) -> Location {
        self.location
    }

    /// Get the unconsumed remainder of the source
    pub fn rest(&self) -> &'a str {
        &self.source[self.location.offset..]
    }

    /// Check whether all input has been consumed
    pub fn is_at_end(&self) -> bool {
        self.location.offset >= self.source.len()
    }

    /// Look at the next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character, returning it with the advanced cursor
    pub fn next(mut self) -> Option<(char, Self)> {
        let ch = self.peek()?;
        self.location.advance(ch);
        Some((ch, self))
    }

    /// Consume any leading whitespace
    pub fn skip_whitespace(mut self) -> Self {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.location.advance(ch);
        }
        self
    }

    /// Check whether the remainder starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume `text`, which must be a prefix of the remainder
    pub fn consume(mut self, text: &str) -> Self {
        debug_assert!(self.starts_with(text));
        for ch in text.chars() {
            self.location.advance(ch);
        }
        self
    }
}
