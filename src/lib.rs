// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! # veil-core
//!
//! LSB steganography engine for RGB rasters. Hides an arbitrary byte message
//! in the least-significant bits of a pixel grid's color channels, terminated
//! by a fixed 16-bit sentinel, with two keying schemes:
//!
//! - **QKD** (Scheme A): a simulated BB84 exchange produces symmetric key
//!   material; the message is AES-256-GCM-SIV encrypted (Argon2id-stretched
//!   key) before embedding.
//! - **Mask** (Scheme B): a passphrase-derived rolling XOR mask is applied
//!   directly to the plaintext bits, no encryption.
//!
//! Image containers are out of scope: callers decode PNG/JPEG themselves and
//! hand over a raw RGB byte grid ([`RgbImage`]). LSB data does not survive
//! lossy recompression — re-encode losslessly.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{RgbImage, mask_encode, mask_decode};
//!
//! let cover = RgbImage::from_raw(256, 256, pixels)?;
//! let stego = mask_encode(&cover, b"HELLO", "key")?;
//! assert_eq!(mask_decode(&stego, "key")?, b"HELLO");
//! ```

pub mod raster;
pub mod stego;

pub use raster::RgbImage;
pub use stego::capacity::{mask_capacity, qkd_capacity};
pub use stego::qkd::{simulate_qkd, QkdExchange, QkdKey, QKD_TRIALS};
pub use stego::{decode, encode, mask_decode, mask_encode, qkd_decode, qkd_encode};
pub use stego::{KeyMaterial, StegoError};
