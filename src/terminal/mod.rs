//! Terminal styling and width-bounded line assembly.
//!
//! - [`Color`]: 3-bit, 8-bit and 24-bit colors as SGR parameters
//! - [`Graphics`]: attributes plus colors, rendered as one SGR sequence
//! - [`Line`]: a row builder that never exceeds its visible width
//! - [`escape`]: detection of escape sequences embedded in text

pub mod color;
pub mod escape;
pub mod graphics;
pub mod line;

pub use color::{Ansi3, Color};
pub use graphics::{Attribute, Graphics, RESET};
pub use line::Line;
