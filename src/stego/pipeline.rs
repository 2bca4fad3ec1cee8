// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Encode/decode pipelines for both keying schemes.
//!
//! Encode flow: message bytes → [Scheme A: encrypt] → bit string + sentinel →
//! LSB-embed into carrier slots ([Scheme B: under the rolling mask]) → new
//! carrier image. Decode reverses each step. Every call is a pure transform
//! of its inputs; nothing is shared between invocations.

use crate::raster::RgbImage;
use crate::stego::bits::{self, SENTINEL};
use crate::stego::crypto;
use crate::stego::error::StegoError;
use crate::stego::key::KeyMaterial;
use crate::stego::lsb;
use crate::stego::mask::RollingMask;
use crate::stego::qkd::{simulate_qkd, QkdKey};

/// Hide a message in a carrier image under the given key material.
///
/// - `KeyMaterial::Qkd`: the message is AES-256-GCM-SIV encrypted (nonce
///   prefixed) before embedding; the bits go in unmasked.
/// - `KeyMaterial::Passphrase`: the raw message bits are embedded under the
///   passphrase's rolling XOR mask, which also covers the sentinel region.
///
/// The cover is not modified; a new image with updated slot LSBs is returned.
///
/// # Errors
/// - [`StegoError::InputValidation`] for an empty passphrase.
/// - [`StegoError::Capacity`] if the payload plus sentinel exceeds the slot count.
pub fn encode(cover: &RgbImage, message: &[u8], key: &KeyMaterial) -> Result<RgbImage, StegoError> {
    key.validate()?;

    let (payload, mask) = match key {
        KeyMaterial::Qkd(k) => (crypto::encrypt(message, k), None),
        KeyMaterial::Passphrase(p) => (message.to_vec(), Some(RollingMask::from_passphrase(p))),
    };

    let mut payload_bits = bits::bytes_to_bits(&payload);
    payload_bits.extend_from_slice(&SENTINEL);

    let mut slots = cover.slots().to_vec();
    lsb::embed(&mut slots, &payload_bits, mask)?;

    RgbImage::from_raw(cover.width(), cover.height(), slots)
}

/// Recover a message from a carrier image under the given key material.
///
/// # Errors
/// - [`StegoError::SentinelNotFound`] if no terminator is present.
/// - [`StegoError::MalformedPayload`] if the recovered bits are not whole bytes.
/// - [`StegoError::Authentication`] if Scheme A decryption fails (wrong key
///   or tampered carrier).
pub fn decode(stego: &RgbImage, key: &KeyMaterial) -> Result<Vec<u8>, StegoError> {
    key.validate()?;

    let mask = match key {
        KeyMaterial::Qkd(_) => None,
        KeyMaterial::Passphrase(p) => Some(RollingMask::from_passphrase(p)),
    };

    let payload_bits = lsb::extract(stego.slots(), mask)?;
    let payload = bits::bits_to_bytes(&payload_bits)?;

    match key {
        KeyMaterial::Qkd(k) => crypto::decrypt(&payload, k),
        KeyMaterial::Passphrase(_) => Ok(payload),
    }
}

/// Encode under a freshly simulated QKD key (Scheme A).
///
/// Runs one BB84 exchange, encrypts and embeds the message, and returns the
/// stego image together with the key the decoder will need.
pub fn qkd_encode(cover: &RgbImage, message: &[u8]) -> Result<(RgbImage, QkdKey), StegoError> {
    let key = simulate_qkd();
    let stego = encode(cover, message, &KeyMaterial::Qkd(key.clone()))?;
    Ok((stego, key))
}

/// Decode a Scheme A carrier with the key from the matching exchange.
pub fn qkd_decode(stego: &RgbImage, key: &QkdKey) -> Result<Vec<u8>, StegoError> {
    decode(stego, &KeyMaterial::Qkd(key.clone()))
}

/// Encode under a passphrase-derived rolling mask (Scheme B).
pub fn mask_encode(cover: &RgbImage, message: &[u8], passphrase: &str) -> Result<RgbImage, StegoError> {
    encode(cover, message, &KeyMaterial::Passphrase(passphrase.to_owned()))
}

/// Decode a Scheme B carrier with the passphrase used to encode it.
pub fn mask_decode(stego: &RgbImage, passphrase: &str) -> Result<Vec<u8>, StegoError> {
    decode(stego, &KeyMaterial::Passphrase(passphrase.to_owned()))
}
