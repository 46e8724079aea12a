//! # RISC-V Page Table Entry Encoding
//!
//! Builds a single Sv32, Sv39 or Sv48 page table entry from a physical address
//! and a set of permission/status flags given as text.
//!
//! ## What you get
//! - A numeric literal [`parse_value`] accepting `0x` (hex), `0b` (binary) or
//!   plain decimal input.
//! - A [`PteFlags`] bitfield and the [`decode_flags`] mnemonic decoder
//!   (`D`, `A`, `G`, `U`, `X`, `W`, `R`, `V`).
//! - A closed [`PteMode`] enumeration with a case-insensitive parser.
//! - Mode-specific entry layouts ([`Sv32Pte`], [`Sv39Pte`], [`Sv48Pte`]) and
//!   the mode-tagged [`PageTableEntry`].
//!
//! ## Entry layout
//!
//! All three modes share the same shape: the flag byte occupies the low eight
//! bits and the physical page number (the address with its 12-bit page offset
//! removed) sits directly above it.
//!
//! ```text
//!  Sv32 (32 bit)                 Sv39 / Sv48 (64 bit)
//! | 31 ‒ 8 | 7 ‒ 0 |             | 63 ‒ 8 | 7 ‒ 0 |
//! |  PPN   | flags |             |  PPN   | flags |
//!
//! flags: | D | A | G | U | X | W | R | V |
//!          7   6   5   4   3   2   1   0
//! ```
//!
//! ### Page number truncation
//!
//! The page number is truncated to the width of its field (24 bits for Sv32,
//! 56 bits for Sv39/Sv48). It is **not** checked against the architectural
//! PPN width of the mode, so an address beyond what the mode can map encodes
//! silently with its high bits dropped.
//!
//! ## Example
//! ```rust
//! # use riscv_pte::*;
//! let pa = parse_value("0x80000000").unwrap();
//! let flags = decode_flags("URWV").unwrap();
//! let pte = encode_str("sv39", pa, flags).unwrap();
//! assert_eq!(pte.to_u64(), (0x80000 << 8) | 0x17);
//! assert_eq!(pte.flags(), flags);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod addresses;
mod entry;
mod flags;
mod mode;
mod value;

pub use crate::addresses::{PAGE_SHIFT, PAGE_SIZE, PhysicalAddress};
pub use crate::entry::{PageTableEntry, Sv32Pte, Sv39Pte, Sv48Pte};
pub use crate::flags::{
    PTE_FLAG_A, PTE_FLAG_D, PTE_FLAG_G, PTE_FLAG_R, PTE_FLAG_U, PTE_FLAG_V, PTE_FLAG_W,
    PTE_FLAG_X, PteFlags, UnknownFlagError, decode_flags, flag_for_mnemonic,
};
pub use crate::mode::{PteMode, UnknownModeError};
pub use crate::value::{ParseValueError, ParseValueErrorKind, Radix, parse_value};

/// Encodes a page table entry for an already-parsed mode.
#[inline]
#[must_use]
pub fn encode(mode: PteMode, pa: PhysicalAddress, flags: PteFlags) -> PageTableEntry {
    PageTableEntry::encode(mode, pa, flags)
}

/// Encodes a page table entry, selecting the layout by mode name.
///
/// Only the first four characters of `mode` are compared (ignoring ASCII case).
///
/// # Errors
/// Returns [`UnknownModeError`] if `mode` does not start with `sv32`, `sv39`
/// or `sv48`.
pub fn encode_str(mode: &str, pa: u64, flags: PteFlags) -> Result<PageTableEntry, UnknownModeError> {
    let mode: PteMode = mode.parse()?;
    Ok(encode(mode, PhysicalAddress::from(pa), flags))
}

/// An entry encoded from its textual inputs, together with the decoded values.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EncodedEntry {
    pub address: PhysicalAddress,
    pub flags: PteFlags,
    pub entry: PageTableEntry,
}

/// Runs the full text pipeline: address literal, then flag mnemonics, then mode.
///
/// The first failing stage decides the error; nothing is produced otherwise.
///
/// # Errors
/// Returns the [`PteError`] of the first stage that rejects its input.
pub fn encode_text(mode: &str, address: &str, flags: &str) -> Result<EncodedEntry, PteError> {
    let address = parse_value(address)?;
    let flags = decode_flags(flags)?;
    let entry = encode_str(mode, address, flags)?;
    Ok(EncodedEntry {
        address: PhysicalAddress::from(address),
        flags,
        entry,
    })
}

/// Any error produced while turning text into a page table entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PteError {
    #[error(transparent)]
    Value(#[from] ParseValueError),
    #[error(transparent)]
    Flag(#[from] UnknownFlagError),
    #[error(transparent)]
    Mode(#[from] UnknownModeError),
}
