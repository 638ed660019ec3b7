//! Width-bounded styled line builder.
//!
//! A [`Line`] accumulates text fragments for one terminal row. It tracks how
//! many columns the row will occupy and silently truncates anything that
//! would push it past `max_width`. Escape sequences never count as columns
//! and are never cut.

use std::fmt;

use super::escape::{self, Segment};
use super::graphics::Graphics;

/// One row of terminal output under construction.
///
/// Mutating methods take `&mut self` and return `&mut Self`, so calls can
/// be chained and a line can only ever have one writer.
#[derive(Debug, Clone)]
pub struct Line {
    text: String,
    len: usize,
    max_width: usize,
    default_graphics: Graphics,
    /// `default_graphics.to_ansi(true)`, written after every fragment.
    reset: String,
}

impl Line {
    /// Create an empty line rendering at most `max_width` columns.
    pub fn new(default_graphics: Graphics, max_width: usize) -> Self {
        let reset = default_graphics.to_ansi(true);
        Self {
            text: String::new(),
            len: 0,
            max_width,
            default_graphics,
            reset,
        }
    }

    /// Append visible text, optionally styled.
    ///
    /// Text that does not fit is cut from the end. The cut never splits a
    /// UTF-8 character, so with multi-byte input `len()` may stop short of
    /// `max_width`. Once the line is full this does nothing at all. After
    /// the fragment the default style is restored so styles never leak into
    /// the next fragment.
    pub fn append(&mut self, text: &str, graphics: Option<&Graphics>) -> &mut Self {
        if self.is_full() {
            return self;
        }

        let kept = self.fit(text);
        if let Some(graphics) = graphics {
            self.text.push_str(&graphics.to_ansi(false));
        }
        self.text.push_str(kept);
        self.text.push_str(&self.reset);
        self
    }

    /// Append text that may already contain escape sequences.
    ///
    /// Only the visible runs between escapes are counted and truncated;
    /// each escape sequence is copied through in place even when the line
    /// is already full. The default style is restored afterwards.
    pub fn append_raw(&mut self, text: &str) -> &mut Self {
        for segment in escape::segments(text) {
            match segment {
                Segment::Visible(visible) => {
                    let kept = self.fit(visible);
                    self.text.push_str(kept);
                }
                Segment::Escape(sequence) => self.text.push_str(sequence),
            }
        }
        self.text.push_str(&self.reset);
        self
    }

    /// Reserve room for `text` and return the part of it that fits.
    fn fit<'t>(&mut self, text: &'t str) -> &'t str {
        let kept = truncate(text, self.remaining());
        if kept.len() < text.len() {
            tracing::trace!(
                requested = text.len(),
                kept = kept.len(),
                max_width = self.max_width,
                "truncated line fragment"
            );
        }
        self.len += kept.len();
        kept
    }

    /// Visible columns used so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no visible text has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Columns still available.
    pub fn remaining(&self) -> usize {
        self.max_width.saturating_sub(self.len)
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.max_width
    }

    pub fn default_graphics(&self) -> &Graphics {
        &self.default_graphics
    }

    /// Everything written so far, escape sequences included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cut `text` to at most `budget` bytes, backing off to a char boundary.
fn truncate(text: &str, budget: usize) -> &str {
    if text.len() <= budget {
        return text;
    }
    let mut end = budget;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
