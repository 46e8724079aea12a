use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use log::trace;

/// Number of leading characters compared when parsing a mode name.
const MODE_NAME_LEN: usize = 4;

/// RISC-V virtual memory scheme selecting the entry layout.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PteMode {
    /// 32-bit entries, two-level tables.
    Sv32,
    /// 64-bit entries, three-level tables.
    Sv39,
    /// 64-bit entries, four-level tables.
    Sv48,
}

impl PteMode {
    pub const ALL: [Self; 3] = [Self::Sv32, Self::Sv39, Self::Sv48];

    /// Lowercase mode name, e.g. `sv39`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sv32 => "sv32",
            Self::Sv39 => "sv39",
            Self::Sv48 => "sv48",
        }
    }

    /// Total width of an encoded entry in bits.
    #[must_use]
    pub const fn entry_bits(self) -> u32 {
        match self {
            Self::Sv32 => 32,
            Self::Sv39 | Self::Sv48 => 64,
        }
    }

    /// Width of the page number field: everything above the flag byte.
    #[must_use]
    pub const fn ppn_bits(self) -> u32 {
        self.entry_bits() - 8
    }

    /// Mask selecting the page number bits that survive encoding.
    #[must_use]
    pub const fn ppn_mask(self) -> u64 {
        (1 << self.ppn_bits()) - 1
    }
}

impl fmt::Display for PteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode name that does not start with `sv32`, `sv39` or `sv48`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid PTE mode: {0}")]
pub struct UnknownModeError(pub String);

impl FromStr for PteMode {
    type Err = UnknownModeError;

    /// Compares the first four characters, ignoring ASCII case. Anything past
    /// the fourth character is ignored, so `Sv39x` selects [`PteMode::Sv39`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = s
            .as_bytes()
            .get(..MODE_NAME_LEN)
            .ok_or_else(|| UnknownModeError(s.into()))?;

        let mode = Self::ALL
            .into_iter()
            .find(|m| prefix.eq_ignore_ascii_case(m.name().as_bytes()))
            .ok_or_else(|| UnknownModeError(s.into()))?;

        trace!("selected {mode} for mode string {s:?}");
        Ok(mode)
    }
}
