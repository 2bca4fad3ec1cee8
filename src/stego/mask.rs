// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Passphrase-derived rolling XOR mask (Scheme B keying).
//!
//! The passphrase is reduced to a single 8-bit offset — the sum of its
//! character code points mod 256 — consumed one bit at a time, LSB first, with
//! a right shift after each use.
//!
//! # Legacy collapse
//!
//! After 8 consumed bits the offset has shifted to zero and every further mask
//! bit is 0, so only the first byte of a message is actually masked. This
//! matches the historical behavior and is preserved deliberately rather than
//! silently re-keyed; callers wanting real confidentiality use the QKD scheme.

/// Rolling XOR bit mask derived from a passphrase.
#[derive(Debug, Clone)]
pub struct RollingMask {
    offset: u8,
}

impl RollingMask {
    /// Derive the mask from a passphrase: offset = Σ code points mod 256.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let sum = passphrase
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
        Self { offset: (sum % 256) as u8 }
    }

    /// Consume and return the next mask bit (LSB of the current offset).
    pub fn next_bit(&mut self) -> u8 {
        let bit = self.offset & 1;
        self.offset >>= 1;
        bit
    }
}
