// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Cipher adapter for Scheme A (QKD-keyed) payloads.
//!
//! The 0–16-byte QKD key material is stretched to a full AES-256 key with
//! Argon2id and a fixed domain salt — fixed because the material is already
//! random per exchange, so the salt only provides domain separation, and a
//! fixed salt keeps the derivation reproducible on the decode side from the
//! key material alone.
//!
//! Wire format produced by [`encrypt`]:
//!
//! ```text
//! [12 bytes] random AES-GCM-SIV nonce
//! [N bytes ] ciphertext (plaintext_len + 16-byte auth tag)
//! ```
//!
//! The nonce travels inside the embedded payload so the decoder recovers it
//! from the carrier; only the key material itself is out-of-band.

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use argon2::Argon2;
use zeroize::Zeroizing;

use crate::stego::error::StegoError;
use crate::stego::qkd::QkdKey;

/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Fixed overhead [`encrypt`] adds on top of the plaintext.
pub const CIPHER_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// Fixed salt for stretching QKD key material into an AES-256 key.
const KEY_SALT: &[u8; 16] = b"veil-qkd-aead-v1";

/// Stretch QKD key material into a 32-byte AES-256 key.
///
/// Empty material is accepted — the degenerate zero-length key a fully
/// disagreeing exchange produces still maps to some AES key.
fn derive_cipher_key(key: &QkdKey) -> Zeroizing<[u8; 32]> {
    let mut output = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(key.material(), KEY_SALT, &mut *output)
        .expect("Argon2 cipher key derivation should not fail");
    output
}

/// Encrypt a message with AES-256-GCM-SIV under a QKD-derived key.
///
/// Returns `nonce || ciphertext+tag`, ready for bit conversion and embedding.
pub fn encrypt(plaintext: &[u8], key: &QkdKey) -> Vec<u8> {
    use rand::RngCore;
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let aes_key = derive_cipher_key(key);
    let cipher = Aes256GcmSiv::new_from_slice(&*aes_key).expect("valid key length");
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .expect("AES-GCM-SIV encrypt should not fail");

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    out
}

/// Decrypt `nonce || ciphertext+tag` produced by [`encrypt`].
///
/// # Errors
/// [`StegoError::Authentication`] if the data is too short to contain a nonce
/// and tag, the key is wrong, or the ciphertext was tampered with.
pub fn decrypt(data: &[u8], key: &QkdKey) -> Result<Vec<u8>, StegoError> {
    if data.len() < CIPHER_OVERHEAD {
        return Err(StegoError::Authentication);
    }
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);

    let aes_key = derive_cipher_key(key);
    let cipher = Aes256GcmSiv::new_from_slice(&*aes_key).expect("valid key length");
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| StegoError::Authentication)
}
