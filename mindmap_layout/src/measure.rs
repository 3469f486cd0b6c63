// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement and label wrapping.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

/// Measures the advance width of a run of text in content units.
///
/// Implementations are expected to measure with a fixed font; a font change
/// means a new measurer and a relayout.
pub trait TextMeasurer {
    /// Width of `text` when drawn on a single line.
    fn measure(&self, text: &str) -> f64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str) -> f64 {
        (**self).measure(text)
    }
}

/// Measurer that gives every `char` the same advance.
///
/// Useful headless and in tests; real surfaces measure through their
/// drawing context.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance of a single character.
    pub advance: f64,
}

impl FixedAdvance {
    /// Creates a measurer with the given per-character advance.
    pub const fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Wraps `text` into lines no wider than `max_width`.
///
/// Words are separated by whitespace and joined by single spaces. Explicit
/// newlines always break. A word wider than `max_width` on its own is split
/// between characters. The result always holds at least one line; empty text
/// yields a single empty line.
///
/// ```
/// use mindmap_layout::{FixedAdvance, wrap_text};
///
/// let m = FixedAdvance::new(10.0);
/// assert_eq!(wrap_text(&m, "aa bb cc", 50.0), ["aa bb", "cc"]);
/// assert_eq!(wrap_text(&m, "", 50.0), [""]);
/// ```
pub fn wrap_text(measurer: &impl TextMeasurer, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() {
                let candidate = [line.as_str(), word].join(" ");
                if measurer.measure(&candidate) <= max_width {
                    line = candidate;
                    continue;
                }
                lines.push(mem::take(&mut line));
            }
            if measurer.measure(word) <= max_width {
                line = word.to_owned();
            } else {
                split_word(measurer, word, max_width, &mut lines, &mut line);
            }
        }
        lines.push(line);
    }
    lines
}

/// Breaks an overlong word between characters. Full chunks go to `lines`,
/// the remainder is left in `line`.
fn split_word(
    measurer: &impl TextMeasurer,
    word: &str,
    max_width: f64,
    lines: &mut Vec<String>,
    line: &mut String,
) {
    for ch in word.chars() {
        line.push(ch);
        if measurer.measure(line) > max_width && line.chars().count() > 1 {
            line.pop();
            lines.push(mem::take(line));
            line.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: FixedAdvance = FixedAdvance::new(10.0);

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap_text(&M, "hello world", 200.0), ["hello world"]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap_text(&M, "  a   b ", 200.0), ["a b"]);
    }

    #[test]
    fn explicit_newlines_break() {
        assert_eq!(wrap_text(&M, "a\nb", 200.0), ["a", "b"]);
    }

    #[test]
    fn long_word_is_split_by_chars() {
        assert_eq!(wrap_text(&M, "abcdefg hi", 30.0), ["abc", "def", "g", "hi"]);
    }

    #[test]
    fn no_line_exceeds_width_unless_single_char() {
        let lines = wrap_text(&M, "the quick brown fox jumps over the lazy dog", 60.0);
        assert!(lines.iter().all(|l| M.measure(l) <= 60.0), "{lines:?}");
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn width_narrower_than_a_char_still_makes_progress() {
        assert_eq!(wrap_text(&M, "ab", 5.0), ["a", "b"]);
    }
}
