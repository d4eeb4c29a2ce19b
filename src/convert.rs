//! Byte conversions used by emulated decimal-mode arithmetic.

use crate::parse::Radix;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// BCD byte -> binary value, for every byte.
///
/// Nibbles above 9 are weighted the same as valid digits (`0x1A` -> `20`), matching what decimal
/// hardware produces for invalid BCD input.
const BCD_TO_BIN: [u8; 256] = build_bcd_to_bin();

/// Binary value -> BCD byte, for values representable in one byte of BCD (`0..=99`).
const BIN_TO_BCD: [u8; 100] = build_bin_to_bcd();

const fn build_bcd_to_bin() -> [u8; 256] {
    let mut table = [0; 256];
    let mut bcd = 0;
    while bcd < table.len() {
        table[bcd] = ((bcd >> 4) * 10 + (bcd & 0x0f)) as u8;
        bcd += 1;
    }
    table
}

const fn build_bin_to_bcd() -> [u8; 100] {
    let mut table = [0; 100];
    let mut bin = 0;
    while bin < table.len() {
        table[bin] = (((bin / 10) << 4) | (bin % 10)) as u8;
        bin += 1;
    }
    table
}

pub fn convert_to_bin(bcd: u8) -> u8 {
    BCD_TO_BIN[usize::from(bcd)]
}

/// Returns `None` for values above `99`.
pub fn convert_to_bcd(bin: u8) -> Option<u8> {
    BIN_TO_BCD.get(usize::from(bin)).copied()
}

/// Convert an integer to its representation in another base.
///
/// Inverse of parsing a bare numeral: lowercase digits, with a leading `-` for negative values.
pub fn itoa(num: i64, radix: Radix) -> String {
    let base = u64::from(radix.get());
    let mut magnitude = num.unsigned_abs();

    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if num < 0 {
        digits.push(b'-');
    }

    digits.iter().rev().map(|&digit| digit as char).collect()
}
