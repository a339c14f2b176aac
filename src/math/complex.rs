// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A 32-bit floating point complex number.

use crate::container::Conjugate;

/// A complex number.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[repr(C)]
pub struct Complex32 {
    /// The real component.
    pub re: f32,
    /// The imaginary component.
    pub im: f32,
}

impl Complex32 {
    /// Creates a new complex number.
    #[inline(always)]
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// The value `0 + j1`.
    #[inline(always)]
    pub fn j() -> Self {
        Self { re: 0.0, im: 1.0 }
    }

    /// Builds a complex number from polar coordinates `r·e^(jθ)`.
    #[inline]
    pub fn from_polar(r: f32, theta: f32) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// `e^(jθ)`, i.e. [`Self::from_polar`] with unit magnitude.
    #[inline]
    pub fn cis(theta: f32) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Scales the complex number by a real factor.
    #[inline(always)]
    pub fn scale(&self, scale: f32) -> Self {
        Self {
            re: self.re * scale,
            im: self.im * scale,
        }
    }

    /// The complex conjugate: for `a + jb`, `a - jb`.
    #[inline(always)]
    pub fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// The squared magnitude `|z|²`, cheaper than [`Self::abs`] when only comparing magnitudes.
    #[inline(always)]
    pub fn norm(&self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// The magnitude `|z|`.
    #[inline]
    pub fn abs(&self) -> f32 {
        self.norm().sqrt()
    }

    /// The natural logarithm of the magnitude, `ln|z|`.
    #[inline]
    pub fn ln_abs(&self) -> f32 {
        self.abs().ln()
    }

    /// The principal square root.
    pub fn sqrt(&self) -> Self {
        let r = self.abs();
        if r == 0.0 {
            return Self::default();
        }
        let re = ((r + self.re) / 2.0).sqrt();
        let im_mag = ((r - self.re) / 2.0).sqrt();
        Self {
            re,
            im: if self.im < 0.0 { -im_mag } else { im_mag },
        }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl Conjugate for Complex32 {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex32::conj(&self)
    }
}

impl core::ops::Add for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl core::ops::AddAssign for Complex32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl core::ops::SubAssign for Complex32 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::Neg for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::Output {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl core::ops::Mul for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::Output {
            re: (self.re * rhs.re) - (self.im * rhs.im),
            im: (self.re * rhs.im) + (self.im * rhs.re),
        }
    }
}

impl core::ops::MulAssign for Complex32 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl core::ops::Div for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;

        Self::Output {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        }
    }
}

impl core::ops::DivAssign for Complex32 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl core::ops::Mul<f32> for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::Output {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl core::ops::Div<f32> for Complex32 {
    type Output = Complex32;

    #[inline(always)]
    fn div(self, rhs: f32) -> Self::Output {
        Self::Output {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_complex() {
        assert_eq!(Complex32::j(), Complex32::new(0.0, 1.0));
        assert_eq!(Complex32::new(1.0, 10.0).conj(), Complex32::new(1.0, -10.0));
        assert_eq!(
            Complex32::new(5.0, 2.0).scale(3.0),
            Complex32::new(15.0, 6.0)
        );
        assert_eq!(
            Complex32::new(3.0, 13.0) + Complex32::new(7.0, 17.0),
            Complex32::new(10.0, 30.0)
        );
        assert_eq!(
            Complex32::new(3.0, 13.0) - Complex32::new(7.0, 17.0),
            Complex32::new(-4.0, -4.0)
        );
        assert_eq!(
            Complex32::new(3.0, 13.0) * Complex32::new(7.0, 17.0),
            Complex32::new(-200.0, 142.0)
        );
        assert_eq!(Complex32::new(5.0, 2.0) * 3.0, Complex32::new(15.0, 6.0));
        assert_eq!(Complex32::new(4.0, 2.0) / 2.0, Complex32::new(2.0, 1.0));
    }

    #[test]
    fn sqrt_of_negative_real_is_positive_imaginary() {
        let root = Complex32::new(-4.0, 0.0).sqrt();
        assert!((root.re).abs() < 1e-5);
        assert!((root.im - 2.0).abs() < 1e-5);
    }

    #[test]
    fn cis_has_unit_magnitude() {
        let z = Complex32::cis(1.234);
        assert!((z.abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn abs_matches_pythagorean_distance() {
        assert!((Complex32::new(3.0, 4.0).abs() - 5.0).abs() < 1e-6);
    }
}
