use std::cell::RefCell;
use std::fmt;

use colored::Colorize;

#[derive(Clone, Copy, Debug)]
pub enum MsgColor {
    Green,
    Cyan,
}

thread_local! {
    static IS_MINIMAL: RefCell<bool> = const { RefCell::new(false) };
}

pub fn set_minimal(new_value: bool) -> bool {
    IS_MINIMAL.with(|value| value.replace(new_value))
}
pub fn is_minimal() -> bool {
    IS_MINIMAL.with(|value| *value.borrow())
}

/// Print a right-aligned status word followed by a value.
///
/// Only the value is printed if `--minimal`, without color.
pub fn message(color: MsgColor, left: &str, right: impl fmt::Display) {
    println!("{}", format_message(color, left, right));
}

fn format_message(color: MsgColor, left: &str, right: impl fmt::Display) -> String {
    if is_minimal() {
        return right.to_string();
    }
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
    };
    format!("{left:>12} {right}")
}

/// Address in monitor notation, with decimal value.
///
/// `$C000 (49152)`, or `$C000 49152` if `--minimal`.
pub fn address(value: u16) -> String {
    if is_minimal() {
        format!("${:04X} {}", value, value)
    } else {
        format!("${:04X} ({})", value, value)
    }
}
