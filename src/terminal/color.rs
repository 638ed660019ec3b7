//! Terminal color model.
//!
//! A [`Color`] knows how to express itself as the parameter fragment of an
//! SGR sequence, once for the foreground slot and once for the background
//! slot. Three depth tiers exist:
//! - 3-bit (with the bright flag, the classic 16-color palette)
//! - 8-bit indexed (256-color palette)
//! - 24-bit RGB

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Prefix selecting the bright variant of a base color name.
const BRIGHT_PREFIX: &str = "bright";

/// Base color names, indexed by their 3-bit value.
const BASE_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A classic ANSI palette entry.
///
/// Fields are private so `value` can only ever be in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi3 {
    value: u8,
    bright: bool,
}

impl Ansi3 {
    /// Create a palette entry, rejecting values outside `0..=7`.
    pub fn new(value: u8, bright: bool) -> Result<Self, StyleError> {
        if usize::from(value) >= BASE_NAMES.len() {
            return Err(StyleError::InvalidColorValue { value });
        }
        Ok(Self { value, bright })
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn is_bright(self) -> bool {
        self.bright
    }

    fn base_name(self) -> &'static str {
        BASE_NAMES.get(usize::from(self.value)).copied().unwrap_or_default()
    }
}

/// A renderable terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Classic ANSI color, 8 base values with a bright flag.
    ThreeBit(Ansi3),
    /// 256-color palette index.
    EightBit(u8),
    /// Direct RGB color.
    TrueColor { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a 3-bit color, rejecting values outside `0..=7`.
    pub fn three_bit(value: u8, bright: bool) -> Result<Self, StyleError> {
        Ansi3::new(value, bright).map(Self::ThreeBit)
    }

    /// Create a 256-color palette color.
    pub fn indexed(index: u8) -> Self {
        Self::EightBit(index)
    }

    /// Create a 24-bit RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::TrueColor { r, g, b }
    }

    /// Parse a color name such as `"red"` or `"brightcyan"`.
    ///
    /// Names are case-sensitive. Only the eight base names, optionally
    /// prefixed with `bright`, are accepted.
    ///
    /// # Errors
    /// Returns [`StyleError::InvalidColorName`] for anything else.
    pub fn from_name(name: &str) -> Result<Self, StyleError> {
        let (base, bright) = match name.strip_prefix(BRIGHT_PREFIX) {
            Some(rest) => (rest, true),
            None => (name, false),
        };

        BASE_NAMES
            .iter()
            .position(|candidate| *candidate == base)
            .map(|value| {
                Self::ThreeBit(Ansi3 {
                    value: value as u8,
                    bright,
                })
            })
            .ok_or_else(|| StyleError::InvalidColorName {
                name: name.to_string(),
            })
    }

    /// The name [`Color::from_name`] would accept for this color.
    ///
    /// Only 3-bit colors have names.
    pub fn name(&self) -> Option<String> {
        match *self {
            Self::ThreeBit(ansi) => {
                let base = ansi.base_name();
                Some(if ansi.bright {
                    format!("{BRIGHT_PREFIX}{base}")
                } else {
                    base.to_string()
                })
            }
            Self::EightBit(_) | Self::TrueColor { .. } => None,
        }
    }

    /// All sixteen named colors: the base palette, then the bright one.
    pub fn named() -> impl Iterator<Item = Color> {
        [false, true].into_iter().flat_map(|bright| {
            (0..BASE_NAMES.len() as u8)
                .map(move |value| Self::ThreeBit(Ansi3 { value, bright }))
        })
    }

    /// SGR parameter fragment selecting this color as the foreground.
    pub fn to_ansi_fg(&self) -> String {
        match *self {
            Self::ThreeBit(Ansi3 { value, bright: false }) => format!("3{value}"),
            Self::ThreeBit(Ansi3 { value, bright: true }) => format!("9{value}"),
            Self::EightBit(index) => format!("38;5;{index}"),
            Self::TrueColor { r, g, b } => format!("38;2;{r};{g};{b}"),
        }
    }

    /// SGR parameter fragment selecting this color as the background.
    pub fn to_ansi_bg(&self) -> String {
        match *self {
            Self::ThreeBit(Ansi3 { value, bright: false }) => format!("4{value}"),
            Self::ThreeBit(Ansi3 { value, bright: true }) => format!("10{value}"),
            Self::EightBit(index) => format!("48;5;{index}"),
            Self::TrueColor { r, g, b } => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ThreeBit(_) => {
                write!(f, "{}", self.name().unwrap_or_default())
            }
            Self::EightBit(index) => write!(f, "color{index}"),
            Self::TrueColor { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
