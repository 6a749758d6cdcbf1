//! Console sinks. Print chat replies and upload alerts to stdout.

use super::palette::{CYBER_GREEN, NEON_PURPLE, color, print_colored};
use crate::domain::DomainError;
use crate::ports::{AlertSink, ResponseSink};
use crossterm::style::Color;
use std::io::{BufRead, stdin};

/// Frame `message` in a box sized to its longest line.
pub fn boxed(message: &str) -> String {
    let width = message
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(width + 2);
    let mut out = format!("┌{}┐\n", rule);
    if message.is_empty() {
        out.push_str(&format!("│ {} │\n", " ".repeat(width)));
    }
    for line in message.lines() {
        let pad = width - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("└{}┘\n", rule));
    out
}

/// Writes chat replies below a "Response" label.
#[derive(Default)]
pub struct ConsoleResponseSink;

impl ResponseSink for ConsoleResponseSink {
    fn show_response(&self, text: &str) {
        print_colored(color(NEON_PURPLE), "Response:\n");
        print_colored(color(CYBER_GREEN), &format!("{}\n\n", text));
    }
}

/// Boxed alert. With `acknowledge`, blocks until Enter like a modal dialog.
pub struct ConsoleAlert {
    acknowledge: bool,
}

impl ConsoleAlert {
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }
}

impl AlertSink for ConsoleAlert {
    fn alert(&self, message: &str) {
        print_colored(color(CYBER_GREEN), &boxed(message));
        if self.acknowledge {
            print_colored(color(NEON_PURPLE), "Press Enter to continue...");
            let _ = stdin().lock().read_line(&mut String::new());
        }
    }
}

/// Print a failed operation in red.
pub fn print_error(err: &DomainError) {
    print_colored(Color::Red, &format!("Error: {}\n\n", err));
}
