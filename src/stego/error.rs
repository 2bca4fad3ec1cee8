// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the embedding pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier validation through
//! bit extraction and decryption.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// A required input is missing or unusable (e.g. empty passphrase).
    InputValidation(&'static str),
    /// The payload (message bits plus sentinel) exceeds the carrier's slot count.
    Capacity {
        /// Bits the payload needs.
        needed: usize,
        /// Slots the carrier provides.
        available: usize,
    },
    /// Raw pixel data length is inconsistent with the declared dimensions.
    DimensionMismatch {
        /// Byte count implied by width × height × channels.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },
    /// The carrier was exhausted without finding the 16-bit terminator.
    SentinelNotFound,
    /// A bit string that should be whole bytes is not a multiple of 8 bits.
    MalformedPayload {
        /// Offending bit count.
        bits: usize,
    },
    /// AES-GCM-SIV decryption failed (wrong key or tampered carrier).
    Authentication,
    /// The pixel data uses an unsupported color model.
    ImageFormat {
        /// Channel count of the rejected data.
        channels: u8,
    },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputValidation(what) => write!(f, "invalid input: {what}"),
            Self::Capacity { needed, available } => {
                write!(f, "payload needs {needed} bits but carrier has {available} slots")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "pixel data is {actual} bytes, dimensions imply {expected}")
            }
            Self::SentinelNotFound => write!(f, "no payload terminator found in carrier"),
            Self::MalformedPayload { bits } => {
                write!(f, "extracted {bits} bits, not a whole number of bytes")
            }
            Self::Authentication => write!(f, "decryption failed (wrong key or corrupted data)"),
            Self::ImageFormat { channels } => {
                write!(f, "unsupported color model ({channels} channels, need RGB or RGBA)")
            }
        }
    }
}

impl std::error::Error for StegoError {}
