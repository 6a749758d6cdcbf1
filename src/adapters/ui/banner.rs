//! Welcome banner: figlet title shaded from purple to green.

use super::palette::{CYBER_GREEN, NEON_PURPLE, color, gradient, print_colored};
use figlet_rs::FIGfont;

const TITLE: &str = "CHATBOX";

/// Render the title with figlet's standard font; plain text if the font is unavailable.
fn render_title() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

pub fn print_welcome() {
    let art = render_title();
    let lines: Vec<&str> = art.lines().collect();
    let shades = gradient(NEON_PURPLE, CYBER_GREEN, lines.len());

    for (line, shade) in lines.iter().zip(shades) {
        print_colored(color(shade), &format!("{}\r\n", line));
    }
    print_colored(
        color(CYBER_GREEN),
        &format!("v{}\r\n", env!("CARGO_PKG_VERSION")),
    );
}
