//! Embedded escape-sequence detection.
//!
//! Recognizes CSI sequences of the form `ESC [ [0-9;]* <letter>` inside
//! arbitrary text so that callers can tell visible bytes from control bytes.
//! The pattern is compiled once per process.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Matches, Regex};

static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("Invalid escape regex"));

/// A piece of text classified by [`segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Bytes the terminal renders as columns.
    Visible(&'a str),
    /// A complete escape sequence.
    Escape(&'a str),
}

/// Byte spans of every escape sequence in `text`, left to right.
pub fn find_all(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    ESCAPE_REGEX.find_iter(text).map(|m| m.range())
}

/// Split `text` into alternating visible and escape segments.
///
/// Empty visible runs (between adjacent escapes, or at either end) are
/// not yielded.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: ESCAPE_REGEX.find_iter(text),
        pos: 0,
        pending: None,
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    matches: Matches<'static, 'a>,
    pos: usize,
    pending: Option<Range<usize>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(span) = self.pending.take() {
                self.pos = span.end;
                return Some(Segment::Escape(&self.text[span]));
            }

            match self.matches.next() {
                Some(m) => {
                    let visible = &self.text[self.pos..m.start()];
                    self.pending = Some(m.range());
                    if !visible.is_empty() {
                        return Some(Segment::Visible(visible));
                    }
                }
                None => {
                    if self.pos >= self.text.len() {
                        return None;
                    }
                    let visible = &self.text[self.pos..];
                    self.pos = self.text.len();
                    return Some(Segment::Visible(visible));
                }
            }
        }
    }
}

/// Number of bytes in `text` outside escape sequences.
pub fn visible_len(text: &str) -> usize {
    let escaped: usize = find_all(text).map(|span| span.len()).sum();
    text.len() - escaped
}

/// Remove every escape sequence from `text`.
pub fn strip(text: &str) -> String {
    ESCAPE_REGEX.replace_all(text, "").into_owned()
}
