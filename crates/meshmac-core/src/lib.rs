#![no_std]
#![forbid(unsafe_code)]
#[cfg(feature = "std")]
extern crate std;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Required length of both the PRG and PRF keys (AES-128).
pub const KEY_LEN: usize = 16;

/// Required length of the CBC initialization vector.
pub const IV_LEN: usize = 16;

/// Highest valid space identifier. Identifiers run 1..=MAX_SPACE_ID.
pub const MAX_SPACE_ID: u16 = 100;

/// The two independent symmetric keys of one tagging context.
/// `prg` drives the per-coordinate mask sequence, `prf` the per-index
/// coded-coordinate values. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    pub prg: [u8; KEY_LEN],
    pub prf: [u8; KEY_LEN],
}

impl KeyPair {
    pub fn new(prg: [u8; KEY_LEN], prf: [u8; KEY_LEN]) -> Self {
        Self { prg, prf }
    }
}

pub type MacResult<T> = Result<T, MacError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// A key was not exactly KEY_LEN bytes.
    InvalidKeyLength,
    /// Space identifier outside 1..=MAX_SPACE_ID.
    InvalidIdentifier,
    /// Vector length != n+m, or tags/alphas length mismatch.
    VectorLengthMismatch,
    /// The underlying cipher failed to initialize or encrypt.
    CryptoFailure,
}

impl core::fmt::Display for MacError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MacError {}
