// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A dot product against a fixed, pre-loaded coefficient sequence.

use std::ops::{Add, Mul};

/// Complex conjugation, with a no-op implementation for real types.
pub trait Conjugate {
    fn conj(self) -> Self;
}

impl Conjugate for f32 {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

/// A dot product `Σ in[i] · conj(coeff[i])` against a fixed coefficient sequence.
pub struct Dotprod<T> {
    coeffs: Vec<T>,
}

impl<T> Dotprod<T>
where
    T: Copy + Default + Conjugate + Mul<Output = T> + Add<Output = T>,
{
    pub fn new(coeffs: &[T]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// Replaces the coefficient sequence.
    pub fn load(&mut self, coeffs: &[T]) {
        self.coeffs = coeffs.to_vec();
    }

    /// Computes `Σ input[i] · conj(coeff[i])` over the shorter of `input` and the loaded
    /// coefficients.
    pub fn execute(&self, input: &[T]) -> T {
        input
            .iter()
            .zip(self.coeffs.iter())
            .fold(T::default(), |acc, (&x, &c)| acc + x * c.conj())
    }
}
