//! Homomorphic tags for network-coded vectors over GF(2^8).
//!
//! A tag is a keyed linear functional of the vector: relays can `combine`
//! tags with the same coding coefficients they apply to payloads, without
//! holding the keys, and `verify` still catches corrupted or injected
//! combinations.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod keystream;

use alloc::vec::Vec;
use meshmac_core::{MacError, MacResult, KEY_LEN, MAX_SPACE_ID};
use meshmac_math::GfSymbol;
use zeroize::Zeroize;

/// Compute the tag for vector `y` of length n+m under keys (k1, k2),
/// space `id` and `iv`.
///
/// Deterministic: identical inputs always produce the identical tag.
/// All precondition checks run before any cipher call.
pub fn mac(
    k1: &[u8],
    k2: &[u8],
    id: u16,
    n: u16,
    m: u16,
    y: &[GfSymbol],
    iv: &[u8; 16],
) -> MacResult<GfSymbol> {
    if k1.len() != KEY_LEN || k2.len() != KEY_LEN {
        return Err(MacError::InvalidKeyLength);
    }
    if id < 1 || id > MAX_SPACE_ID {
        return Err(MacError::InvalidIdentifier);
    }
    let n = usize::from(n);
    let coded = usize::from(m);
    if y.len() != n + coded {
        return Err(MacError::VectorLengthMismatch);
    }

    // 1. Mask sequence from the PRG on k1
    let mut r = keystream::prg(k1, iv, n + coded)?;

    // 2. Per-index values from the PRF on k2
    let mut f: Vec<GfSymbol> = Vec::with_capacity(coded);
    for j in 0..m {
        f.push(keystream::prf(k2, iv, id, j)?);
    }

    // 3. Fold the vector: t = sum r[i]*y[i] + sum y[n+j]*f[j]
    let mut t = GfSymbol::ZERO;
    for i in 0..n + coded {
        t = t + r[i] * y[i];
    }
    for j in 0..coded {
        t = t + y[n + j] * f[j];
    }

    r.zeroize();
    f.zeroize();
    Ok(t)
}

/// Mix existing tags with the coding coefficients applied to their vectors.
/// Pure field algebra, no key material.
pub fn combine(tags: &[GfSymbol], alphas: &[GfSymbol]) -> MacResult<GfSymbol> {
    if tags.len() != alphas.len() {
        return Err(MacError::VectorLengthMismatch);
    }

    let mut t = GfSymbol::ZERO;
    for (&tag, &alpha) in tags.iter().zip(alphas) {
        t = t + alpha * tag;
    }
    Ok(t)
}

/// Check a claimed tag `t` against `y` by recomputing it.
///
/// Precondition failures propagate as errors, never as `Ok(false)`; callers
/// must not conflate invalid input with a tag mismatch.
pub fn verify(
    k1: &[u8],
    k2: &[u8],
    id: u16,
    n: u16,
    m: u16,
    y: &[GfSymbol],
    iv: &[u8; 16],
    t: GfSymbol,
) -> MacResult<bool> {
    Ok(mac(k1, k2, id, n, m, y, iv)? == t)
}
