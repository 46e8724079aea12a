//! PTE permission and status flags.
//!
//! The flag byte is identical across Sv32, Sv39 and Sv48:
//!
//! | Bit | Mnemonic | Meaning |
//! |-----|----------|---------|
//! | 0   | `V`      | Valid |
//! | 1   | `R`      | Readable |
//! | 2   | `W`      | Writable |
//! | 3   | `X`      | Executable |
//! | 4   | `U`      | Accessible to U-mode |
//! | 5   | `G`      | Global mapping |
//! | 6   | `A`      | Accessed |
//! | 7   | `D`      | Dirty |

use bitfield_struct::bitfield;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};
use log::trace;

pub const PTE_FLAG_V: u8 = 1 << 0;
pub const PTE_FLAG_R: u8 = 1 << 1;
pub const PTE_FLAG_W: u8 = 1 << 2;
pub const PTE_FLAG_X: u8 = 1 << 3;
pub const PTE_FLAG_U: u8 = 1 << 4;
pub const PTE_FLAG_G: u8 = 1 << 5;
pub const PTE_FLAG_A: u8 = 1 << 6;
pub const PTE_FLAG_D: u8 = 1 << 7;

/// Mnemonic table, most significant flag first.
const MNEMONICS: [(char, u8); 8] = [
    ('D', PTE_FLAG_D),
    ('A', PTE_FLAG_A),
    ('G', PTE_FLAG_G),
    ('U', PTE_FLAG_U),
    ('X', PTE_FLAG_X),
    ('W', PTE_FLAG_W),
    ('R', PTE_FLAG_R),
    ('V', PTE_FLAG_V),
];

/// The low byte of a RISC-V page table entry.
///
/// Renders as its mnemonic string in `DAGUXWRV` order with `-` for clear
/// bits, e.g. `---U-WRV`.
#[bitfield(u8)]
#[derive(Eq, PartialEq, Hash)]
pub struct PteFlags {
    /// **Valid** (V, bit 0).
    pub valid: bool,
    /// **Read** (R, bit 1).
    pub readable: bool,
    /// **Write** (W, bit 2).
    pub writable: bool,
    /// **Execute** (X, bit 3).
    ///
    /// A valid entry with R, W and X all clear points to the next table
    /// level instead of mapping a page.
    pub executable: bool,
    /// **User** (U, bit 4): accessible from U-mode.
    pub user: bool,
    /// **Global** (G, bit 5): mapping exists in all address spaces.
    pub global: bool,
    /// **Accessed** (A, bit 6).
    pub accessed: bool,
    /// **Dirty** (D, bit 7).
    pub dirty: bool,
}

impl PteFlags {
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.into_bits() & other.into_bits()) == other.into_bits()
    }
}

impl BitOr for PteFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for PteFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for PteFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, bit) in MNEMONICS {
            let c = if self.into_bits() & bit == 0 { '-' } else { c };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for PteFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.into_bits(), f)
    }
}

/// A character outside the `DAGUXWRV` mnemonic set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown PTE flag: {0}")]
pub struct UnknownFlagError(pub char);

/// Looks up the flag for a single mnemonic. Case-sensitive.
#[must_use]
pub fn flag_for_mnemonic(c: char) -> Option<PteFlags> {
    MNEMONICS
        .iter()
        .find(|(m, _)| *m == c)
        .map(|&(_, bit)| PteFlags::from_bits(bit))
}

/// Decodes a string of flag mnemonics into a [`PteFlags`] mask.
///
/// Order does not matter and repeated mnemonics are accepted. The empty string
/// yields an empty mask.
///
/// # Errors
/// Returns [`UnknownFlagError`] for the first character that is not one of
/// `D`, `A`, `G`, `U`, `X`, `W`, `R`, `V`.
pub fn decode_flags(flags: &str) -> Result<PteFlags, UnknownFlagError> {
    let decoded = flags.chars().try_fold(PteFlags::empty(), |acc, c| {
        flag_for_mnemonic(c)
            .map(|bit| acc | bit)
            .ok_or(UnknownFlagError(c))
    })?;
    trace!("decoded flags {flags:?} as {decoded} (0x{decoded:02x})");
    Ok(decoded)
}
