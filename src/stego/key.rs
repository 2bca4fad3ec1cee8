// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Tagged key material for the two keying schemes.
//!
//! The original service duck-typed its key (a generated binary key for the
//! QKD scheme, a plain string for the passphrase scheme); here the two are an
//! explicit variant dispatched by the pipeline.

use crate::stego::error::StegoError;
use crate::stego::qkd::QkdKey;

/// Key material for an encode or decode operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// Scheme A: symmetric key material from a simulated QKD exchange.
    /// The message is AES-encrypted before embedding.
    Qkd(QkdKey),
    /// Scheme B: a passphrase reduced to a rolling XOR bit mask applied
    /// directly to the plaintext bits. No encryption.
    Passphrase(String),
}

impl KeyMaterial {
    /// Check the key is usable before any carrier work starts.
    ///
    /// # Errors
    /// [`StegoError::InputValidation`] for an empty passphrase. An empty QKD
    /// key is the documented degenerate case and passes.
    pub fn validate(&self) -> Result<(), StegoError> {
        match self {
            Self::Qkd(_) => Ok(()),
            Self::Passphrase(p) if p.is_empty() => {
                Err(StegoError::InputValidation("empty passphrase"))
            }
            Self::Passphrase(_) => Ok(()),
        }
    }
}

impl From<QkdKey> for KeyMaterial {
    fn from(key: QkdKey) -> Self {
        Self::Qkd(key)
    }
}
