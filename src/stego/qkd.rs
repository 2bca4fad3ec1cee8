// Copyright (c) 2026 Veil Contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Simulated BB84 quantum key distribution (Scheme A keying).
//!
//! This is a pure simulation of the basis-reconciliation step: no photons,
//! no eavesdropper detection. Alice prepares 16 random bits in 16 random
//! bases; Bob measures each in his own random basis and gets Alice's bit
//! when the bases agree, an independent coin flip otherwise. Positions where
//! the bases agreed form the shared bit string (0–16 bits, data dependent).
//!
//! # Legacy key-derivation weakness
//!
//! The cipher key is *sized* by the shared-bit count but its *content* is
//! freshly generated random material — none of the shared bits' entropy goes
//! into it. This reproduces the historical behavior and is preserved
//! deliberately; it is key-agreement theater, not cryptography. A zero-length
//! shared string yields a degenerate empty key, which the cipher adapter
//! accepts (it stretches whatever material it gets to a full AES key).

use rand::{Rng, RngCore};

/// Number of BB84 trials per exchange.
pub const QKD_TRIALS: usize = 16;

/// A photon polarization basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// The `+` basis.
    Rectilinear,
    /// The `x` basis.
    Diagonal,
}

impl Basis {
    fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Self::Rectilinear
        } else {
            Self::Diagonal
        }
    }
}

/// The transcript of one simulated BB84 exchange.
#[derive(Debug, Clone)]
pub struct QkdExchange {
    /// Alice's prepared bits.
    pub alice_bits: [u8; QKD_TRIALS],
    /// Alice's preparation bases.
    pub alice_bases: [Basis; QKD_TRIALS],
    /// Bob's measurement bases.
    pub bob_bases: [Basis; QKD_TRIALS],
    /// Bob's measured bits (Alice's bit where bases agree, random otherwise).
    pub bob_measurements: [u8; QKD_TRIALS],
}

impl QkdExchange {
    /// Run one exchange with the supplied RNG.
    pub fn run<R: Rng>(rng: &mut R) -> Self {
        let mut alice_bits = [0u8; QKD_TRIALS];
        let mut alice_bases = [Basis::Rectilinear; QKD_TRIALS];
        let mut bob_bases = [Basis::Rectilinear; QKD_TRIALS];
        let mut bob_measurements = [0u8; QKD_TRIALS];

        for i in 0..QKD_TRIALS {
            alice_bits[i] = rng.gen_range(0..=1u8);
            alice_bases[i] = Basis::random(rng);
            bob_bases[i] = Basis::random(rng);
            bob_measurements[i] = if alice_bases[i] == bob_bases[i] {
                alice_bits[i]
            } else {
                // Measurement in the wrong basis collapses to a coin flip.
                rng.gen_range(0..=1u8)
            };
        }

        Self { alice_bits, alice_bases, bob_bases, bob_measurements }
    }

    /// The sifted key: Alice's bits at positions where both bases agreed.
    pub fn shared_bits(&self) -> Vec<u8> {
        (0..QKD_TRIALS)
            .filter(|&i| self.alice_bases[i] == self.bob_bases[i])
            .map(|i| self.alice_bits[i])
            .collect()
    }

    /// Derive key material sized by the sifted-key length: fresh random
    /// bytes truncated to `shared_bits().len()` (see module docs for why the
    /// shared bits themselves are not used).
    pub fn derive_key<R: RngCore>(&self, rng: &mut R) -> QkdKey {
        let len = self.shared_bits().len();
        let mut material = vec![0u8; len];
        rng.fill_bytes(&mut material);
        QkdKey::from_material(material)
    }
}

/// Symmetric key material produced by a simulated QKD exchange.
///
/// 0–16 bytes; the empty key is valid (degenerate but accepted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QkdKey {
    material: Vec<u8>,
}

impl QkdKey {
    /// Wrap raw key material (e.g. received from the other party).
    pub fn from_material(material: Vec<u8>) -> Self {
        Self { material }
    }

    /// The raw key material.
    pub fn material(&self) -> &[u8] {
        &self.material
    }
}

/// Run a full simulated exchange and derive a key, using the thread RNG.
pub fn simulate_qkd() -> QkdKey {
    let mut rng = rand::thread_rng();
    QkdExchange::run(&mut rng).derive_key(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn deterministic_with_seeded_rng() {
        let a = QkdExchange::run(&mut ChaCha20Rng::from_seed([7u8; 32]));
        let b = QkdExchange::run(&mut ChaCha20Rng::from_seed([7u8; 32]));
        assert_eq!(a.alice_bits, b.alice_bits);
        assert_eq!(a.bob_measurements, b.bob_measurements);
        assert_eq!(a.shared_bits(), b.shared_bits());
    }

    #[test]
    fn shared_bits_bounded_by_trials() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for _ in 0..100 {
            let ex = QkdExchange::run(&mut rng);
            assert!(ex.shared_bits().len() <= QKD_TRIALS);
        }
    }

    #[test]
    fn agreeing_bases_measure_alices_bit() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        for _ in 0..50 {
            let ex = QkdExchange::run(&mut rng);
            for i in 0..QKD_TRIALS {
                if ex.alice_bases[i] == ex.bob_bases[i] {
                    assert_eq!(ex.alice_bits[i], ex.bob_measurements[i]);
                }
            }
        }
    }

    #[test]
    fn key_length_matches_shared_count() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..50 {
            let ex = QkdExchange::run(&mut rng);
            let key = ex.derive_key(&mut rng);
            assert_eq!(key.material().len(), ex.shared_bits().len());
        }
    }

    #[test]
    fn bits_are_binary() {
        let ex = QkdExchange::run(&mut ChaCha20Rng::from_seed([4u8; 32]));
        for i in 0..QKD_TRIALS {
            assert!(ex.alice_bits[i] <= 1);
            assert!(ex.bob_measurements[i] <= 1);
        }
    }

    #[test]
    fn empty_key_is_representable() {
        let key = QkdKey::from_material(Vec::new());
        assert!(key.material().is_empty());
    }

    #[test]
    fn simulate_qkd_yields_bounded_key() {
        for _ in 0..20 {
            let key = simulate_qkd();
            assert!(key.material().len() <= QKD_TRIALS);
        }
    }
}
