// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Carrier image model: a flat RGB byte grid.
//!
//! The engine never touches PNG/JPEG containers — callers hand it a decoded
//! pixel grid and get one back. An [`RgbImage`] is H×W×3 bytes in row-major
//! pixel order with channel order R,G,B inside each pixel. Each 8-bit channel
//! value is one carrier **slot**: the unit of embedding capacity, addressed
//! in flattening order.

use crate::stego::error::StegoError;

/// A decoded RGB raster. Alpha, if the source had one, is gone by the time
/// this type exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Build an image from raw interleaved RGB bytes.
    ///
    /// # Errors
    /// [`StegoError::DimensionMismatch`] unless `data.len() == width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, StegoError> {
        let expected = width
            .checked_mul(height)
            .and_then(|p| p.checked_mul(3))
            .ok_or(StegoError::DimensionMismatch { expected: usize::MAX, actual: data.len() })?;
        if data.len() != expected {
            return Err(StegoError::DimensionMismatch { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Build an image from interleaved pixel data with `channels` samples per
    /// pixel. 3-channel data is taken verbatim; 4-channel data has the alpha
    /// byte discarded. Anything else is an unsupported color model.
    ///
    /// # Errors
    /// - [`StegoError::ImageFormat`] for channel counts other than 3 or 4.
    /// - [`StegoError::DimensionMismatch`] if `data.len() != width * height * channels`.
    pub fn from_channels(
        width: usize,
        height: usize,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<Self, StegoError> {
        match channels {
            3 => Self::from_raw(width, height, data),
            4 => {
                let expected = width
                    .checked_mul(height)
                    .and_then(|p| p.checked_mul(4))
                    .ok_or(StegoError::DimensionMismatch { expected: usize::MAX, actual: data.len() })?;
                if data.len() != expected {
                    return Err(StegoError::DimensionMismatch { expected, actual: data.len() });
                }
                let mut rgb = Vec::with_capacity(width * height * 3);
                for px in data.chunks_exact(4) {
                    rgb.extend_from_slice(&px[..3]);
                }
                Self::from_raw(width, height, rgb)
            }
            other => Err(StegoError::ImageFormat { channels: other }),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of carrier slots (`width * height * 3`).
    pub fn num_slots(&self) -> usize {
        self.data.len()
    }

    /// The flattened slot sequence, read-only.
    pub fn slots(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, yielding the flattened slot sequence.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
