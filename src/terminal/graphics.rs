//! SGR (Select Graphic Rendition) style state.
//!
//! A [`Graphics`] value bundles text attributes with optional foreground
//! and background colors and renders them as a single `ESC [ ... m`
//! sequence. Parameters are emitted in a fixed order:
//! bold, faint, reverse, foreground, background.

use super::color::Color;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
const SGR_END: &str = "m";

/// Separator between SGR parameters.
const PARAM_SEP: &str = ";";

/// Bare reset sequence (`ESC [ m`), equivalent to resetting all attributes.
pub const RESET: &str = "\x1b[m";

/// Parameter restoring the terminal's default foreground.
const DEFAULT_FG: &str = "39";

/// Parameter restoring the terminal's default background.
const DEFAULT_BG: &str = "49";

/// A boolean text attribute with its set and clear encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Faint,
    Reverse,
}

impl Attribute {
    /// SGR parameter enabling the attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::Bold => "1",
            Self::Faint => "2",
            Self::Reverse => "7",
        }
    }

    /// SGR parameter clearing just this attribute.
    ///
    /// Bold and faint share `22` (normal intensity); `21` is read as double
    /// underline by most terminals.
    pub fn clear_code(self) -> &'static str {
        match self {
            Self::Bold | Self::Faint => "22",
            Self::Reverse => "27",
        }
    }
}

/// Text style: attributes plus optional colors.
///
/// Built once with the `with_*` / attribute builders and never mutated
/// afterwards; share it by reference or clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graphics {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub faint: bool,
    pub reverse: bool,
}

impl Graphics {
    /// Empty style: renders as `ESC [ m`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn faint(mut self, on: bool) -> Self {
        self.faint = on;
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = on;
        self
    }

    /// Attributes that are switched on, in emission order.
    fn attributes(&self) -> impl Iterator<Item = Attribute> {
        [
            (self.bold, Attribute::Bold),
            (self.faint, Attribute::Faint),
            (self.reverse, Attribute::Reverse),
        ]
        .into_iter()
        .filter_map(|(on, attr)| on.then_some(attr))
    }

    /// Render the style as an SGR escape sequence.
    ///
    /// With `reset`, the sequence is preceded by a bare [`RESET`] so the
    /// result does not inherit any attribute already active on the terminal.
    pub fn to_ansi(&self, reset: bool) -> String {
        let mut params: Vec<String> = self
            .attributes()
            .map(|attr| attr.code().to_string())
            .collect();
        if let Some(fg) = &self.fg {
            params.push(fg.to_ansi_fg());
        }
        if let Some(bg) = &self.bg {
            params.push(bg.to_ansi_bg());
        }

        let sequence = sgr(&params);
        if reset {
            format!("{RESET}{sequence}")
        } else {
            sequence
        }
    }

    /// Render a sequence undoing only what this style sets.
    ///
    /// Returns an empty string when nothing is set, since `ESC [ m` would
    /// reset everything rather than nothing.
    pub fn to_ansi_clear(&self) -> String {
        let mut params: Vec<String> = self
            .attributes()
            .map(|attr| attr.clear_code().to_string())
            .collect();
        params.dedup();
        if self.fg.is_some() {
            params.push(DEFAULT_FG.to_string());
        }
        if self.bg.is_some() {
            params.push(DEFAULT_BG.to_string());
        }

        if params.is_empty() {
            String::new()
        } else {
            sgr(&params)
        }
    }
}

/// Wrap parameters into `ESC [ p1;p2;... m`.
fn sgr(params: &[String]) -> String {
    format!("{CSI}{}{SGR_END}", params.join(PARAM_SEP))
}
