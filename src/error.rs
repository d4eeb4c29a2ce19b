use std::error::Error;
use std::fmt;

use miette::{miette, Report, Severity};

/// A token could not be resolved to an address.
///
/// Raised for an unknown label in label arithmetic, and for any token which is neither a label
/// nor a valid numeral. Labels and bare numbers share the same syntax, so both cases are reported
/// as a missing label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNotFound {
    /// Offending label name or whole token.
    pub label: String,
}

impl LabelNotFound {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Error for LabelNotFound {}

impl fmt::Display for LabelNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label not found: {}", self.label)
    }
}

// Command-line errors

pub fn label_not_found(err: LabelNotFound) -> Report {
    miette!(
        severity = Severity::Error,
        code = "parse::label_not_found",
        help = "use a `$hex`, `+decimal` or `%binary` literal, or define the label with `--label`",
        "Unrecognized label or address `{}`",
        err.label,
    )
}

pub fn bcd_out_of_range(value: u8) -> Report {
    miette!(
        severity = Severity::Error,
        code = "convert::bcd_range",
        help = "only values from 0 to 99 can be encoded as a single BCD byte",
        "Cannot encode {value} as BCD",
    )
}

pub fn byte_too_large(value: u16) -> Report {
    miette!(
        severity = Severity::Error,
        code = "convert::byte",
        help = "conversions operate on a single byte (0 to 255)",
        "Value 0x{value:04x} does not fit in a byte",
    )
}
