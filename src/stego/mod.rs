// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Steganographic encoding and decoding over RGB carrier slots.
//!
//! Two keying schemes share one LSB engine and delimiter protocol:
//!
//! - **QKD** (`qkd_encode` / `qkd_decode`): a simulated BB84 exchange sizes a
//!   symmetric key; the message is AES-256-GCM-SIV encrypted before
//!   embedding. Decoding with the wrong key fails authentication — it never
//!   silently yields wrong plaintext.
//!
//! - **Mask** (`mask_encode` / `mask_decode`): the message's raw bits are
//!   XOR-masked by a passphrase-derived rolling offset. No encryption;
//!   a wrong passphrase yields different bytes, not an error.
//!
//! Both schemes terminate the embedded bit stream with the same 16-bit
//! sentinel and share the capacity accounting in [`capacity`].

pub mod bits;
pub mod capacity;
pub mod crypto;
pub mod error;
pub mod key;
pub mod lsb;
pub mod mask;
mod pipeline;
pub mod qkd;

pub use error::StegoError;
pub use key::KeyMaterial;
pub use pipeline::{decode, encode, mask_decode, mask_encode, qkd_decode, qkd_encode};
