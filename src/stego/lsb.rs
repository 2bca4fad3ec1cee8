// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! LSB embedding and extraction over carrier slots.
//!
//! One payload bit per slot, in slot order: the new slot value is
//! `(slot & 0xFE) | (bit ^ mask_bit)`, so only the low bit ever changes.
//! Slots past the end of the payload are left untouched. The optional
//! [`RollingMask`] supplies one XOR bit per slot; without a mask the bit goes
//! in plain.
//!
//! Extraction reads slot LSBs back (unmasking symmetrically) until the
//! trailing 16 bits equal [`SENTINEL`] at a byte-aligned end. Payloads are
//! whole bytes plus the sentinel, so the true terminator always lands on a
//! byte boundary; checking only there means an interior sentinel-shaped bit
//! run at an odd offset can never cut the payload short. A payload byte pair
//! `0xFF 0xFE` on an even boundary still collides — that residual risk is
//! inherent to the delimiter protocol.

use crate::stego::bits::SENTINEL;
use crate::stego::error::StegoError;
use crate::stego::mask::RollingMask;

/// Write payload bits into the low bits of `slots`, in order.
///
/// The payload passed here must already include the sentinel; this layer
/// only moves bits. Over-long payloads are a hard error — nothing is
/// silently truncated.
///
/// # Errors
/// [`StegoError::Capacity`] if `bits.len() > slots.len()`.
pub fn embed(slots: &mut [u8], bits: &[u8], mask: Option<RollingMask>) -> Result<(), StegoError> {
    if bits.len() > slots.len() {
        return Err(StegoError::Capacity { needed: bits.len(), available: slots.len() });
    }
    let mut mask = mask;
    for (slot, &bit) in slots.iter_mut().zip(bits) {
        let mask_bit = mask.as_mut().map_or(0, RollingMask::next_bit);
        *slot = (*slot & 0xFE) | ((bit ^ mask_bit) & 1);
    }
    Ok(())
}

/// Read payload bits back out of `slots`, stopping at the sentinel.
///
/// Returns the bits before the sentinel (always a whole number of bytes).
///
/// # Errors
/// [`StegoError::SentinelNotFound`] if the slots are exhausted without a
/// byte-aligned sentinel match.
pub fn extract(slots: &[u8], mask: Option<RollingMask>) -> Result<Vec<u8>, StegoError> {
    let mut mask = mask;
    let mut bits: Vec<u8> = Vec::with_capacity(slots.len().min(4096));
    for &slot in slots {
        let mask_bit = mask.as_mut().map_or(0, RollingMask::next_bit);
        bits.push((slot & 1) ^ mask_bit);

        let n = bits.len();
        if n >= SENTINEL.len() && n % 8 == 0 && bits[n - SENTINEL.len()..] == SENTINEL {
            bits.truncate(n - SENTINEL.len());
            return Ok(bits);
        }
    }
    Err(StegoError::SentinelNotFound)
}
