//! sgrline - styled, width-bounded lines for character-cell terminals.
//!
//! Build a [`Graphics`] style, create a [`Line`] with a default style and a
//! column budget, append fragments, then write [`Line::text`] to the
//! terminal.
//!
//! ```
//! use sgrline::{Color, Graphics, Line};
//!
//! let red = Graphics::new().with_fg(Color::from_name("red").unwrap());
//! let mut line = Line::new(Graphics::default(), 5);
//! line.append("hello world", Some(&red));
//! assert_eq!(line.len(), 5);
//! assert_eq!(line.text(), "\x1b[31mhello\x1b[m\x1b[m");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod terminal;

pub use config::Config;
pub use error::{ConfigError, StyleError};
pub use terminal::{Color, Graphics, Line};
