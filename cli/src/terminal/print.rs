use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

/// Section title padded with a rule to the full width, e.g. `── INVOICE ─────`.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    print(&header_line(title));
}

fn header_line(title: &str) -> String {
    let label: String = format!(" {} ", title.to_uppercase());
    let rule_len: usize = TOTAL_WIDTH.saturating_sub(label.chars().count() + 2);

    format!(
        "{}{}{}",
        "──".color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        "─".repeat(rule_len).color(colors::SEPARATOR)
    )
}

pub fn aligned_line<V: std::fmt::Display>(key: &str, value: V) {
    let dots: String = ".".repeat(12usize.saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::ACCENT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}
