use core::fmt;

/// log2 of the base page size; the width of the in-page offset.
pub const PAGE_SHIFT: u32 = 12;

/// Base page size in bytes (4 KiB) shared by Sv32, Sv39 and Sv48.
pub const PAGE_SIZE: u64 = 1 << PAGE_SHIFT;

/// Physical memory address.
///
/// Only the page number ([`PhysicalAddress::page_number`]) ends up in a page
/// table entry. The in-page [`offset`](PhysicalAddress::offset) is dropped
/// during encoding and is not required to be zero.
///
/// ### Examples
/// ```rust
/// # use riscv_pte::PhysicalAddress;
/// let pa = PhysicalAddress::new(0x8020_1042);
/// assert_eq!(pa.page_number(), 0x8_0201);
/// assert_eq!(pa.offset(), 0x42);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PhysicalAddress(u64);

impl PhysicalAddress {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0)
    }

    #[inline]
    #[must_use]
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Physical page number: the address with the page offset shifted out.
    #[inline]
    #[must_use]
    pub const fn page_number(self) -> u64 {
        self.0 >> PAGE_SHIFT
    }

    /// Byte offset within the 4 KiB page.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.0 & (PAGE_SIZE - 1)
    }

    #[inline]
    #[must_use]
    pub const fn is_page_aligned(self) -> bool {
        self.offset() == 0
    }
}

impl fmt::Debug for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PA(0x{:016X})", self.0)
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u64> for PhysicalAddress {
    #[inline]
    fn from(v: u64) -> Self {
        Self::new(v)
    }
}

impl From<PhysicalAddress> for u64 {
    #[inline]
    fn from(pa: PhysicalAddress) -> Self {
        pa.as_u64()
    }
}
