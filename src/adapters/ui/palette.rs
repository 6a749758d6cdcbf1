//! Neon palette and colored printing shared by the banner and console sinks.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

pub type Rgb = (u8, u8, u8);

/// Neon Purple (#bc13fe).
pub const NEON_PURPLE: Rgb = (0xbc, 0x13, 0xfe);
/// Cyber Green (#0ff0fc).
pub const CYBER_GREEN: Rgb = (0x0f, 0xf0, 0xfc);

pub fn color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn mix(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// `steps` evenly spaced colors from `from` to `to`, both ends included.
/// A single step yields `to`.
pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    (0..steps)
        .map(|i| {
            let t = if steps <= 1 {
                1.0
            } else {
                i as f64 / (steps - 1) as f64
            };
            (mix(from.0, to.0, t), mix(from.1, to.1, t), mix(from.2, to.2, t))
        })
        .collect()
}

/// Print `text` in `fg`, then reset. Terminal write errors are ignored.
pub fn print_colored(fg: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(fg));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let steps = gradient(NEON_PURPLE, CYBER_GREEN, 6);
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0], NEON_PURPLE);
        assert_eq!(steps[5], CYBER_GREEN);
    }

    #[test]
    fn test_gradient_single_step_is_target() {
        assert_eq!(gradient(NEON_PURPLE, CYBER_GREEN, 1), vec![CYBER_GREEN]);
        assert!(gradient(NEON_PURPLE, CYBER_GREEN, 0).is_empty());
    }

    #[test]
    fn test_gradient_midpoint() {
        let steps = gradient((0, 0, 0), (200, 100, 50), 3);
        assert_eq!(steps[1], (100, 50, 25));
    }
}
