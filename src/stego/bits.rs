// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Bit codec: byte sequences ⇄ ordered bit strings.
//!
//! Bits are big-endian per source byte (MSB first) and concatenated in input
//! order. Every embedded payload is followed by [`SENTINEL`], the 16-bit
//! terminator `1111111111111110`. As a byte-aligned pattern that is the pair
//! `0xFF 0xFE`, which is unlikely in typical payloads but not reserved — the
//! extractor documents the residual collision risk.

use crate::stego::error::StegoError;

/// The 16-bit payload terminator, one bit per element.
pub const SENTINEL: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// Convert bytes to a bit vector, MSB first within each byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// # Errors
/// [`StegoError::MalformedPayload`] unless `bits.len()` is a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>, StegoError> {
    if bits.len() % 8 != 0 {
        return Err(StegoError::MalformedPayload { bits: bits.len() });
    }
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    Ok(bytes)
}
