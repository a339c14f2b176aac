// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Design and execution of an even-order IIR filter as a cascade of biquads.

use super::Biquad;
use crate::math::{pair_zeros_to_poles, solve_madsen, sort_poles, CascadeOrder, Complex32};

/// A higher-order IIR filter, decomposed into second-order sections.
///
/// The caller supplies the filter as direct-form numerator/denominator polynomials of degree
/// `order` (highest-degree coefficient first); construction finds their roots, pairs zeros to
/// poles, and builds one [`Biquad`] per pair.
pub struct IirCascade {
    order: usize,
    cascade: CascadeOrder,
    sections: Vec<Biquad>,
}

impl IirCascade {
    /// # Panics
    ///
    /// Panics if `order` is odd, or if either polynomial is degenerate (see
    /// [`crate::math::solve_madsen`]).
    pub fn new(order: usize, cascade: CascadeOrder, a: &[Complex32], b: &[Complex32]) -> Self {
        assert!(
            order.is_multiple_of(2),
            "iir cascade: order must be even, got {order}"
        );
        assert_eq!(a.len(), order + 1);
        assert_eq!(b.len(), order + 1);

        let mut cascade_filter = Self {
            order,
            cascade,
            sections: Vec::with_capacity(order / 2),
        };
        cascade_filter.design(a, b);
        cascade_filter
    }

    /// Number of second-order sections in the cascade.
    pub fn nsos(&self) -> usize {
        self.order / 2
    }

    /// Redesigns the cascade from a new pair of polynomials, without reallocating the section
    /// list.
    pub fn load(&mut self, a: &[Complex32], b: &[Complex32]) {
        assert_eq!(a.len(), self.order + 1);
        assert_eq!(b.len(), self.order + 1);
        self.design(a, b);
    }

    fn design(&mut self, a: &[Complex32], b: &[Complex32]) {
        let mut a = a.to_vec();
        let mut b = b.to_vec();

        solve_madsen(&mut a, self.order);
        solve_madsen(&mut b, self.order);

        sort_poles(&mut b, self.cascade, self.order);
        pair_zeros_to_poles(&mut a, &b, self.order);

        let nsos = self.order / 2;
        self.sections.clear();
        for i in 0..nsos {
            let (p1, p2) = (b[2 * i + 1], b[2 * i + 2]);
            let (z1, z2) = (a[2 * i + 1], a[2 * i + 2]);

            let as_ = [Complex32::new(1.0, 0.0), -(p1 + p2), p1 * p2];
            let bs_ = [Complex32::new(1.0, 0.0), -(z1 + z2), z1 * z2];

            self.sections.push(Biquad::new(as_, bs_));
        }
    }

    /// Filters `samples` through every section in sequence, writing into `output` (may alias
    /// `samples`'s length but not its storage).
    pub fn execute(&mut self, samples: &[Complex32], output: &mut [Complex32]) {
        self.sections[0].execute_block(samples, output);
        for section in &mut self.sections[1..] {
            let mut tmp = vec![Complex32::default(); output.len()];
            section.execute_block(output, &mut tmp);
            output.copy_from_slice(&tmp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(x: f32) -> Complex32 {
        Complex32::new(x, 0.0)
    }

    #[test]
    fn builds_expected_number_of_sections() {
        // x^6 - 0.5^6 and x^6 - 0.3^6: roots evenly spaced on circles of radius 0.5 and 0.3,
        // well-conditioned for the root finder (stable filter poles, no near-degenerate reals).
        let b = vec![
            re(1.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(-0.015625),
        ];
        let a = vec![
            re(1.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(-0.000729),
        ];
        let cascade = IirCascade::new(6, CascadeOrder::ClosestFirst, &a, &b);
        assert_eq!(cascade.nsos(), 3);
    }

    #[test]
    #[should_panic]
    fn odd_order_panics() {
        let a = vec![re(1.0), re(0.0), re(0.0), re(0.0)];
        let _ = IirCascade::new(3, CascadeOrder::ClosestFirst, &a, &a);
    }

    #[test]
    fn identity_cascade_passes_samples_through() {
        // Both polynomials equal (x-1)^2(x+1)^2 so pole == zero in each section: unity gain.
        let a = vec![re(1.0), re(0.0), re(-2.0), re(0.0), re(1.0)];
        let b = a.clone();
        let mut cascade = IirCascade::new(4, CascadeOrder::ClosestFirst, &a, &b);

        let input = vec![re(1.0), re(0.5), re(-0.25), re(2.0)];
        let mut output = vec![Complex32::default(); input.len()];
        cascade.execute(&input, &mut output);

        for (x, y) in input.iter().zip(output.iter()) {
            assert!((*x - *y).abs() < 1e-2, "expected {:?} ~= {:?}", x, y);
        }
    }
}
