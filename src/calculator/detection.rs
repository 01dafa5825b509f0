//! One-line entry splitting.
//!
//! Lets the front end accept `7 / 2` in a single line by splitting it into
//! the two operand texts and an operator selection. Only one operator is
//! split out; the pieces still go through the normal validation.

use super::operator::Operator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that can appear in a one-line entry.
    static ref ENTRY_SAFE_CHARS: Regex = Regex::new(r"^[\w\s\.\+\-\*/%]+$").unwrap();

    /// An `int` marker right before the division symbol.
    static ref INT_MARKER: Regex = Regex::new(r"(?i)int\s*$").unwrap();
}

/// The three fields of a calculation, as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub left: String,
    pub selection: String,
    pub right: String,
}

/// Split a one-line entry like `-3 * 4` or `7 int/ 2`.
///
/// Returns `None` if the input holds no binary operator or either side is
/// empty.
pub fn split_entry(input: &str) -> Option<Entry> {
    let trimmed = input.trim();
    if !ENTRY_SAFE_CHARS.is_match(trimmed) {
        return None;
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let index = find_operator(&chars)?;

    let mut left: String = chars[..index].iter().collect();
    let right: String = chars[index + 1..].iter().collect();
    let mut selection = chars[index].to_string();

    if chars[index] == '/'
        && let Some(marker) = INT_MARKER.find(&left)
    {
        let end = marker.start();
        left.truncate(end);
        selection = "Int /".to_string();
    }

    let left = left.trim();
    let right = right.trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }

    Some(Entry {
        left: left.to_string(),
        selection,
        right: right.to_string(),
    })
}

/// Find the index of the binary operator, skipping signs that belong to a
/// number.
fn find_operator(chars: &[char]) -> Option<usize> {
    for (i, &c) in chars.iter().enumerate() {
        if !Operator::is_symbol(c) {
            continue;
        }

        if c != '+' && c != '-' {
            return Some(i);
        }

        // Look back past any whitespace to find the previous non-space character
        let prev_non_space = chars[..i].iter().rev().find(|ch| !ch.is_whitespace());

        // A sign with nothing before it, or after another operator, is unary
        let Some(&prev) = prev_non_space else {
            continue;
        };
        if Operator::is_symbol(prev) {
            continue;
        }

        if is_exponent_sign(chars, i) {
            continue;
        }

        return Some(i);
    }

    None
}

/// Check if the sign at `i` directly follows the `e` of a number's exponent.
fn is_exponent_sign(chars: &[char], i: usize) -> bool {
    i >= 2
        && matches!(chars[i - 1], 'e' | 'E')
        && (chars[i - 2].is_ascii_digit() || chars[i - 2] == '.')
}
