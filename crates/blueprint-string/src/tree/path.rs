//! Dot-separated child paths.
//!
//! A path is a sequence of 1-based positions among a book's children, e.g.
//! `"2.1"` is the first child of the second child of the root. The empty
//! path is the root itself. Book-entry `index` fields play no part in
//! addressing.

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;
use crate::model::{BookEntry, Document};

/// Separator between path tokens.
pub const SEPARATOR: char = '.';

/// A parsed path of 1-based child positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    positions: Vec<usize>,
}

impl Path {
    /// The empty path, addressing the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a path string without looking at any document.
    ///
    /// Tokens follow the same rules as [`extract`](crate::tree::extract),
    /// but with no book to measure against, a zero, negative or oversized
    /// number is reported as [`PathError::InvalidIndexToken`]. Bounds are
    /// checked when the path is resolved.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let mut path = Path::root();
        if s.is_empty() {
            return Ok(path);
        }
        for token in tokens(s) {
            let position = parse_position(token).map_err(|_| PathError::InvalidIndexToken {
                token: token.to_string(),
                traversed: path.to_string(),
            })?;
            path.positions.push(position);
        }
        Ok(path)
    }

    pub fn is_root(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.positions.len()
    }

    /// The 1-based positions, outermost first.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Path of the child at 1-based `position` below this one.
    pub fn child(&self, position: usize) -> Self {
        let mut positions = self.positions.clone();
        positions.push(position);
        Self { positions }
    }

    /// Path of the enclosing book, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.positions.split_last()?;
        Some(Self {
            positions: rest.to_vec(),
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Appends a 1-based `position` to a path string.
///
/// The root (`""`) gets no leading separator.
pub fn child_path(parent: &str, position: usize) -> String {
    if parent.is_empty() {
        position.to_string()
    } else {
        format!("{parent}{SEPARATOR}{position}")
    }
}

/// Splits a non-empty path string into its tokens.
pub(crate) fn tokens(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenError {
    /// Not an optionally `-`-signed run of ASCII digits.
    NotNumeric,
    /// Zero or negative.
    NotPositive,
    /// Larger than any list can be.
    TooLarge,
}

/// Parses one path token as a 1-based position.
///
/// `"01"` is `1`. A leading `+`, whitespace and the empty token are not
/// numbers.
fn parse_position(token: &str) -> Result<usize, TokenError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenError::NotNumeric);
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(TokenError::NotPositive);
    }
    digits.parse().map_err(|_| TokenError::TooLarge)
}

/// Resolves one path token against `current`, returning the 0-based child
/// position.
///
/// Checks, in order: `current` is a book with children, the token is a
/// number, the number is positive, and it is within the child list.
pub(crate) fn resolve_step<'a>(
    current: &'a Document,
    token: &str,
    traversed: &str,
) -> Result<(usize, &'a BookEntry), PathError> {
    let children = current.children();
    if children.is_empty() {
        return Err(PathError::NoBookAtPath {
            traversed: traversed.to_string(),
        });
    }

    let out_of_bounds = || PathError::IndexOutOfBounds {
        token: token.to_string(),
        len: children.len(),
        traversed: traversed.to_string(),
    };
    let position = parse_position(token).map_err(|err| match err {
        TokenError::NotNumeric => PathError::InvalidIndexToken {
            token: token.to_string(),
            traversed: traversed.to_string(),
        },
        TokenError::NotPositive | TokenError::TooLarge => out_of_bounds(),
    })?;
    let entry = children.get(position - 1).ok_or_else(out_of_bounds)?;

    Ok((position - 1, entry))
}
