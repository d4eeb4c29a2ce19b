use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::parse::{AddressParser, Radix};

type FxMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Symbol table of label -> address, in insertion order.
pub type LabelTable = FxMap<String, u16>;

/// Label table which the host can keep modifying while parsers hold a handle to it.
///
/// A lookup made while the host holds a mutable borrow finds no labels, and so reports
/// `LabelNotFound` for a defined label. Release the borrow before parsing.
pub type SharedLabels = Rc<RefCell<LabelTable>>;

pub fn new_label_table() -> LabelTable {
    IndexMap::with_hasher(FxBuildHasher::default())
}

/// Read-only view of label definitions.
pub trait Labels {
    /// Address of label with exactly this name.
    fn address_of(&self, name: &str) -> Option<u16>;
}

impl<S> Labels for IndexMap<String, u16, S>
where
    S: BuildHasher,
{
    fn address_of(&self, name: &str) -> Option<u16> {
        self.get(name).copied()
    }
}

impl<S> Labels for HashMap<String, u16, S>
where
    S: BuildHasher,
{
    fn address_of(&self, name: &str) -> Option<u16> {
        self.get(name).copied()
    }
}

impl<T> Labels for &T
where
    T: Labels + ?Sized,
{
    fn address_of(&self, name: &str) -> Option<u16> {
        (**self).address_of(name)
    }
}

impl<T> Labels for Rc<RefCell<T>>
where
    T: Labels,
{
    // Mutably borrowed table reads as empty rather than panicking mid-mutation
    fn address_of(&self, name: &str) -> Option<u16> {
        self.try_borrow().ok()?.address_of(name)
    }
}

impl<T> Labels for Arc<RwLock<T>>
where
    T: Labels,
{
    // Poisoned table reads as empty; a writer thread panicked mid-mutation
    fn address_of(&self, name: &str) -> Option<u16> {
        self.read().ok()?.address_of(name)
    }
}

/// Label definition, written as `NAME=ADDR`.
///
/// `ADDR` may be any literal accepted by [`AddressParser::number`], read with hex as the default
/// radix. It can not refer to other labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelAssignment {
    pub name: String,
    pub address: u16,
}

impl FromStr for LabelAssignment {
    type Err = String;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let Some((name, address)) = string.split_once('=') else {
            return Err(format!("Expected 'NAME=ADDR', found '{}'", string));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Missing label name in '{}'", string));
        }
        if name.contains(char::is_whitespace) {
            return Err(format!("Label name '{}' cannot contain whitespace", name));
        }

        let parser = AddressParser::new(Radix::HEX, new_label_table());
        let address = parser
            .number(address.trim())
            .map_err(|_| format!("Invalid address '{}' for label '{}'", address.trim(), name))?;

        Ok(Self {
            name: name.to_string(),
            address,
        })
    }
}

/// Collect label definitions into a table. Later definitions replace earlier ones of the same name.
pub fn label_table<I>(assignments: I) -> LabelTable
where
    I: IntoIterator<Item = LabelAssignment>,
{
    let mut table = new_label_table();
    for assignment in assignments {
        table.insert(assignment.name, assignment.address);
    }
    table
}
