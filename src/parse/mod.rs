mod integer;
mod label;
mod range;

use self::integer::{clamp_address, parse_numeral, split_prefix, IntegerValue};
use crate::error::LabelNotFound;
use crate::symbol::Labels;

pub use self::integer::{Radix, Sign};

/// Parse user input into addresses or ranges of addresses.
///
/// Every address produced is clamped into `0..=0xFFFF`.
///
/// The label table is read on every call and never modified. Whether several parsers share one
/// table is decided by the caller, through the handle passed to [`AddressParser::new`] (an owned
/// table, a reference, or a shared `Rc<RefCell<_>>`).
#[derive(Debug, Clone)]
pub struct AddressParser<L> {
    /// Used for any bare numeral, without a `$`, `+`, or `%` prefix.
    radix: Radix,
    labels: L,
}

impl<L> AddressParser<L>
where
    L: Labels,
{
    pub fn new(radix: Radix, labels: L) -> Self {
        Self { radix, labels }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn labels(&self) -> &L {
        &self.labels
    }

    /// Parse a token containing a label or number into an address.
    ///
    /// In order of precedence, accepts:
    ///  - Hex (`$`), decimal (`+`), and binary (`%`) prefixed literals. Eg. "$C000", "+100".
    ///  - Exact label name.
    ///  - Label plus or minus an offset (literal or label). Eg. "loop+2", "table - $10".
    ///  - Bare numeral in the default radix.
    ///
    /// Returns `Err` if the token is none of these, or if the label of an arithmetic token is not
    /// defined.
    pub fn number(&self, token: &str) -> Result<u16, LabelNotFound> {
        if let Some((radix, numeral)) = split_prefix(token) {
            return parse_numeral(numeral, radix)
                .map(clamp_address)
                .ok_or_else(|| LabelNotFound::new(token));
        }

        if let Some(address) = self.labels.address_of(token) {
            return Ok(address);
        }

        // A malformed offset is not arithmetic; fall through to the bare numeral
        if let Some(arithmetic) = label::split_arithmetic(token) {
            if let Some(offset) = self.offset(arithmetic.offset) {
                let base = self
                    .labels
                    .address_of(arithmetic.label)
                    .ok_or_else(|| LabelNotFound::new(arithmetic.label))?;
                let address = arithmetic.sign.apply(base.into(), offset);
                return Ok(clamp_address(address));
            }
        }

        parse_numeral(token, self.radix)
            .map(clamp_address)
            .ok_or_else(|| LabelNotFound::new(token))
    }

    /// Parse a token containing an address or a range of addresses into `(start, end)`.
    ///
    /// Ends are separated by any run of `:` or `,`. A token without a separator is a range of one
    /// address. The ends are swapped if given in descending order.
    pub fn range(&self, token: &str) -> Result<(u16, u16), LabelNotFound> {
        let (start, end) = match range::split_range(token) {
            Some((start, end)) => (self.number(start)?, self.number(end)?),
            None => {
                let address = self.number(token)?;
                (address, address)
            }
        };

        if start > end {
            return Ok((end, start));
        }
        Ok((start, end))
    }

    /// Resolve an offset of label arithmetic, with the same precedence as [`Self::number`].
    ///
    /// Nested arithmetic is not accepted; its shape is rejected by `split_arithmetic`.
    fn offset(&self, offset: &str) -> Option<IntegerValue> {
        if let Some((radix, numeral)) = split_prefix(offset) {
            return parse_numeral(numeral, radix);
        }
        if let Some(address) = self.labels.address_of(offset) {
            return Some(address.into());
        }
        parse_numeral(offset, self.radix)
    }
}
