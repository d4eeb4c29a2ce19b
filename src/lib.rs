// Parsing
mod parse;
pub use parse::{AddressParser, Radix, Sign};

// Labels
mod symbol;
pub use symbol::{label_table, new_label_table, LabelAssignment, LabelTable, Labels, SharedLabels};

mod convert;
pub use convert::{convert_to_bcd, convert_to_bin, itoa};

pub mod error;
pub use error::LabelNotFound;

pub mod env;
pub mod output;
