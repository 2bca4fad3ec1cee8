// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Embedding capacity estimation.
//!
//! Lets callers pre-check a message against a carrier before committing to an
//! encode. Capacity is exact here, not an estimate: one bit per slot, minus
//! the 16-bit sentinel, minus (for the QKD scheme) the nonce and auth tag the
//! cipher adapter adds.

use crate::raster::RgbImage;
use crate::stego::bits::SENTINEL;
use crate::stego::crypto::CIPHER_OVERHEAD;

/// Maximum plaintext bytes a carrier can hold under the passphrase-mask scheme.
pub fn mask_capacity(img: &RgbImage) -> usize {
    img.num_slots().saturating_sub(SENTINEL.len()) / 8
}

/// Maximum plaintext bytes a carrier can hold under the QKD scheme.
///
/// The embedded payload is `nonce || ciphertext+tag`, so 28 bytes of the raw
/// capacity go to cipher overhead.
pub fn qkd_capacity(img: &RgbImage) -> usize {
    mask_capacity(img).saturating_sub(CIPHER_OVERHEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: usize, h: usize) -> RgbImage {
        RgbImage::from_raw(w, h, vec![0u8; w * h * 3]).unwrap()
    }

    #[test]
    fn mask_capacity_256x256() {
        // 256*256*3 = 196608 slots; minus 16 sentinel bits = 196592 / 8.
        assert_eq!(mask_capacity(&blank(256, 256)), 24574);
    }

    #[test]
    fn qkd_capacity_subtracts_cipher_overhead() {
        let img = blank(256, 256);
        assert_eq!(qkd_capacity(&img), mask_capacity(&img) - 28);
    }

    #[test]
    fn tiny_carrier_has_zero_capacity() {
        // 2x2 = 12 slots, not even room for the sentinel.
        assert_eq!(mask_capacity(&blank(2, 2)), 0);
        assert_eq!(qkd_capacity(&blank(2, 2)), 0);
    }
}
