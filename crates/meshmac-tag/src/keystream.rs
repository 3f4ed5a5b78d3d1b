#![forbid(unsafe_code)]

extern crate alloc;
use alloc::vec::Vec;

use aes::Aes128;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use meshmac_core::{MacError, MacResult};
use meshmac_math::GfSymbol;
use zeroize::Zeroize;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;

/// Mask sequence r: one symbol per vector coordinate.
///
/// Wire contract: the plaintext byte at position i is `i mod 256`; the first
/// `len` ciphertext bytes are the masks. PKCS#7 always pads past the
/// plaintext length, so the ciphertext covers `len`.
pub fn prg(key: &[u8], iv: &[u8; 16], len: usize) -> MacResult<Vec<GfSymbol>> {
    let mut msg: Vec<u8> = (0..len).map(|i| i as u8).collect();

    let enc = Aes128CbcEnc::new_from_slices(key, iv).map_err(|_| MacError::CryptoFailure)?;
    let mut ct = enc.encrypt_padded_vec_mut::<Pkcs7>(&msg);

    let r = ct[..len].iter().map(|&b| GfSymbol(b)).collect();
    msg.zeroize();
    ct.zeroize();
    Ok(r)
}

/// Per-index value f[j] for the coded coordinates.
///
/// Wire contract: the plaintext is `id` then `j`, each as a little-endian
/// u16; only the first ciphertext byte is consumed.
pub fn prf(key: &[u8], iv: &[u8; 16], id: u16, j: u16) -> MacResult<GfSymbol> {
    let mut msg = [0u8; 4];
    msg[0..2].copy_from_slice(&id.to_le_bytes());
    msg[2..4].copy_from_slice(&j.to_le_bytes());

    let enc = Aes128CbcEnc::new_from_slices(key, iv).map_err(|_| MacError::CryptoFailure)?;
    let mut ct = enc.encrypt_padded_vec_mut::<Pkcs7>(&msg);

    let out = GfSymbol(ct[0]);
    ct.zeroize();
    Ok(out)
}
