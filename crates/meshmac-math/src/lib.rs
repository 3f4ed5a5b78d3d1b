#![no_std]
#![forbid(unsafe_code)]

pub mod tables;
pub use tables::PRODUCTS;

use zeroize::Zeroize;

/// One symbol of GF(2^8) under the Rijndael polynomial (0x11B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Zeroize)]
#[repr(transparent)]
pub struct GfSymbol(pub u8);

impl GfSymbol {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }
    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self { self.add(rhs) }

    /// Table lookup. PRODUCTS is immutable after compile-time generation.
    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        Self(PRODUCTS.table[self.0 as usize][rhs.0 as usize])
    }

    /// Bit-serial multiply, no table access. Cross-check path for tests.
    pub fn mul_slow(self, rhs: Self) -> Self {
        Self(tables::gmul(self.0, rhs.0))
    }
}

impl From<u8> for GfSymbol {
    #[inline(always)]
    fn from(b: u8) -> Self { Self(b) }
}

// Operator Overloads
impl core::ops::Add for GfSymbol { type Output = Self; fn add(self, rhs: Self) -> Self { self.add(rhs) } }
impl core::ops::Sub for GfSymbol { type Output = Self; fn sub(self, rhs: Self) -> Self { self.sub(rhs) } }
impl core::ops::Mul for GfSymbol { type Output = Self; fn mul(self, rhs: Self) -> Self { self.mul(rhs) } }
