//! Progress colour gradient
//!
//! Maps a completion percent to a colour along red → yellow → green.
//! The gradient has two linear segments split at 50: red (255,0,0) to
//! yellow (255,255,0), then yellow to green (0,255,0). Channel values are
//! `base + ratio * (target - base)` truncated to integer.

use std::fmt;

/// An RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Renders a coloured block using a 24-bit ANSI background escape
    pub fn terminal_swatch(&self) -> String {
        format!("\x1b[48;2;{};{};{}m  \x1b[0m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Returns the gradient colour for a completion percent
///
/// Input above 100 is clamped to 100.
pub fn progress_color(percent: u8) -> Rgb {
    let p = f64::from(percent.min(100));

    if p <= 50.0 {
        let ratio = p / 50.0;
        Rgb {
            r: 255,
            g: (ratio * 255.0) as u8,
            b: 0,
        }
    } else {
        let ratio = (p - 50.0) / 50.0;
        Rgb {
            r: (255.0 - ratio * 255.0) as u8,
            g: 255,
            b: 0,
        }
    }
}
