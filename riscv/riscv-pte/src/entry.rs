use crate::addresses::PhysicalAddress;
use crate::flags::PteFlags;
use crate::mode::PteMode;
use bitfield_struct::bitfield;
use core::fmt;
use log::trace;

/* ================================ Sv32 ==================================== */

/// **Sv32** entry: 32 bits, flag byte below a 24-bit page number.
///
/// Page numbers wider than 24 bits lose their high bits.
#[bitfield(u32)]
#[derive(Eq, PartialEq, Hash)]
pub struct Sv32Pte {
    /// Permission and status flags (bits 0..7).
    #[bits(8)]
    pub flags: PteFlags,

    /// Physical page number (bits 8..31).
    #[bits(24)]
    ppn: u32,
}

impl Sv32Pte {
    /// Builds the entry for the page containing `pa`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_address(pa: PhysicalAddress, flags: PteFlags) -> Self {
        // masked to the 24-bit field first, so the cast is lossless
        let ppn = (pa.page_number() & PteMode::Sv32.ppn_mask()) as u32;
        Self::new().with_flags(flags).with_ppn(ppn)
    }

    /// The stored physical page number.
    #[inline]
    #[must_use]
    pub fn page_number(self) -> u64 {
        u64::from(self.ppn())
    }
}

/* ================================ Sv39 ==================================== */

/// **Sv39** entry: 64 bits, flag byte below a 56-bit page number.
///
/// The architectural Sv39 PPN is 44 bits wide; the extra bits are not
/// rejected here.
#[bitfield(u64)]
#[derive(Eq, PartialEq, Hash)]
pub struct Sv39Pte {
    /// Permission and status flags (bits 0..7).
    #[bits(8)]
    pub flags: PteFlags,

    /// Physical page number (bits 8..63).
    #[bits(56)]
    ppn: u64,
}

impl Sv39Pte {
    /// Builds the entry for the page containing `pa`.
    #[inline]
    #[must_use]
    pub const fn from_address(pa: PhysicalAddress, flags: PteFlags) -> Self {
        let ppn = pa.page_number() & PteMode::Sv39.ppn_mask();
        Self::new().with_flags(flags).with_ppn(ppn)
    }

    /// The stored physical page number.
    #[inline]
    #[must_use]
    pub const fn page_number(self) -> u64 {
        self.ppn()
    }
}

/* ================================ Sv48 ==================================== */

/// **Sv48** entry: 64 bits, flag byte below a 56-bit page number.
#[bitfield(u64)]
#[derive(Eq, PartialEq, Hash)]
pub struct Sv48Pte {
    /// Permission and status flags (bits 0..7).
    #[bits(8)]
    pub flags: PteFlags,

    /// Physical page number (bits 8..63).
    #[bits(56)]
    ppn: u64,
}

impl Sv48Pte {
    /// Builds the entry for the page containing `pa`.
    #[inline]
    #[must_use]
    pub const fn from_address(pa: PhysicalAddress, flags: PteFlags) -> Self {
        let ppn = pa.page_number() & PteMode::Sv48.ppn_mask();
        Self::new().with_flags(flags).with_ppn(ppn)
    }

    /// The stored physical page number.
    #[inline]
    #[must_use]
    pub const fn page_number(self) -> u64 {
        self.ppn()
    }
}

/* ============================== Tagged ==================================== */

/// An encoded entry tagged with the mode whose layout it uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PageTableEntry {
    Sv32(Sv32Pte),
    Sv39(Sv39Pte),
    Sv48(Sv48Pte),
}

impl PageTableEntry {
    /// Packs `flags` and the page number of `pa` using the layout of `mode`.
    #[must_use]
    pub fn encode(mode: PteMode, pa: PhysicalAddress, flags: PteFlags) -> Self {
        let entry = match mode {
            PteMode::Sv32 => Self::Sv32(Sv32Pte::from_address(pa, flags)),
            PteMode::Sv39 => Self::Sv39(Sv39Pte::from_address(pa, flags)),
            PteMode::Sv48 => Self::Sv48(Sv48Pte::from_address(pa, flags)),
        };

        if entry.page_number() != pa.page_number() {
            trace!(
                "{mode}: page number 0x{:x} truncated to 0x{:x}",
                pa.page_number(),
                entry.page_number()
            );
        }

        entry
    }

    #[must_use]
    pub const fn mode(self) -> PteMode {
        match self {
            Self::Sv32(_) => PteMode::Sv32,
            Self::Sv39(_) => PteMode::Sv39,
            Self::Sv48(_) => PteMode::Sv48,
        }
    }

    #[must_use]
    pub const fn flags(self) -> PteFlags {
        match self {
            Self::Sv32(e) => e.flags(),
            Self::Sv39(e) => e.flags(),
            Self::Sv48(e) => e.flags(),
        }
    }

    #[must_use]
    pub fn page_number(self) -> u64 {
        match self {
            Self::Sv32(e) => e.page_number(),
            Self::Sv39(e) => e.page_number(),
            Self::Sv48(e) => e.page_number(),
        }
    }

    /// The raw entry, zero-extended to 64 bits for Sv32.
    #[must_use]
    pub fn to_u64(self) -> u64 {
        match self {
            Self::Sv32(e) => u64::from(e.into_bits()),
            Self::Sv39(e) => e.into_bits(),
            Self::Sv48(e) => e.into_bits(),
        }
    }
}

impl fmt::LowerHex for PageTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_u64(), f)
    }
}

impl From<PageTableEntry> for u64 {
    fn from(entry: PageTableEntry) -> Self {
        entry.to_u64()
    }
}
