// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kaj Madsen's Newton-iteration polynomial root finder.

use super::Complex32;

/// Evaluates the polynomial `a[0]·z^n + a[1]·z^(n-1) + … + a[n]` by Horner's method, returning
/// the squared magnitude of the result alongside the value itself.
fn poly_b(z: Complex32, a: &[Complex32], n: usize) -> (Complex32, f32) {
    let mut fz = a[0];
    for &coeff in &a[1..=n] {
        fz = fz * z + coeff;
    }
    (fz, fz.norm())
}

/// Finds all `n` roots of the degree-`n` polynomial `a[0..=n]` (highest degree first), writing
/// them into `a[1..=n]` in place. `a[0]` is left holding the original leading coefficient.
///
/// # Panics
///
/// Panics if `a[0]` is zero, or if the polynomial is identically zero (both are configuration
/// errors: the caller supplied a degenerate polynomial).
pub fn solve_madsen(a: &mut [Complex32], order: usize) {
    assert!(
        !a[0].is_zero(),
        "madsen: leading coefficient must be nonzero"
    );

    let mut n = order;
    while a[n].is_zero() {
        assert!(n > 0, "madsen: polynomial is identically zero");
        n -= 1;
    }

    while n > 2 {
        deflate_one_root(a, n);
        n -= 1;
    }

    if n == 1 {
        a[1] = -a[1] / a[0];
    } else {
        solve_quadratic(a);
    }
}

fn deflate_one_root(a: &mut [Complex32], n: usize) {
    let a1: Vec<Complex32> = (0..n).map(|i| a[i].scale((n - i) as f32)).collect();

    let r = a[n].abs();
    let mut min = ((r.ln() - a[0].abs().ln()) / n as f32).exp();
    for (i, coeff) in a.iter().enumerate().take(n).skip(1) {
        if !coeff.is_zero() {
            let u = ((r.ln() - coeff.abs().ln()) / (n - i) as f32).exp();
            if u < min {
                min = u;
            }
        }
    }

    let mut zo = Complex32::default();
    let mut fo = a[n].norm();
    let mut ff = fo;
    let mut foz = a[n - 1];

    let mut z = if a[n - 1].is_zero() {
        Complex32::new(1.0, 0.0)
    } else {
        -a[n] / a[n - 1]
    };
    z = z / z.abs() * (min / 2.0);
    let mut dz = z;

    let (mut fz, mut f) = poly_b(z, a, n);

    let mut ro = 2.5 * min;
    let eps = 4.0 * (n * n) as f32 * 4.93e-32 * fo;

    while (z + dz) != z && f > eps {
        let (f1z, u) = poly_b(z, &a1, n - 1);

        let mut stage1 = false;
        if u == 0.0 {
            dz = dz * 5.0 * Complex32::new(0.6, 0.8);
        } else {
            dz = fz / f1z;

            let v = (foz - f1z) / (zo - z);
            let f2 = v.norm();
            stage1 = (f2 / u) > (u / f / 4.0) || f != ff;

            let r = dz.abs();
            if r > ro {
                dz = dz * (ro / r) * Complex32::new(0.6, 0.8);
                ro = 5.0 * r;
            }
        }
        zo = z;
        fo = f;
        foz = f1z;

        'retry: loop {
            z = zo - dz;
            let mut w = z;
            let (fz1, f1) = poly_b(z, a, n);
            fz = fz1;
            f = f1;
            ff = f;

            if stage1 {
                let div2 = f > fo;
                let mut j = 1;
                while j <= n {
                    if div2 {
                        dz = dz * 0.5;
                        w = zo - dz;
                    } else {
                        w -= dz;
                    }

                    let (fw, fa) = poly_b(w, a, n);
                    if fa < f {
                        f = fa;
                        fz = fw;
                        z = w;
                        j += 1;
                        if div2 && j == 3 {
                            dz *= Complex32::new(0.6, 0.8);
                            z = zo - dz;
                            let (fz2, f2) = poly_b(z, a, n);
                            fz = fz2;
                            f = f2;
                            j = n + 1;
                        }
                    } else {
                        j = n + 1;
                    }
                }
            }

            let r = dz.abs();
            if r < 5.96046e-8 * z.abs() && f >= fo {
                z = zo;
                dz *= Complex32::new(0.3, 0.4);
                if (z + dz) != z {
                    continue 'retry;
                }
            }
            break 'retry;
        }
    }

    let mut v = Complex32::default();
    for coeff in a.iter_mut().take(n) {
        v = v * z + *coeff;
        *coeff = v;
    }
    a[n] = z;
}

fn solve_quadratic(a: &mut [Complex32]) {
    // The original tests `a[1] == 0` exactly; in floating point the deflation that produced
    // `a[1]` can leave a residual a few ULPs off zero, which the closed-form branch below
    // amplifies into a division blowup. Treat anything below a tiny absolute threshold as zero.
    if a[1].abs() < 1e-5 {
        a[1] = -(-a[2] / a[0]).sqrt();
        a[2] = -a[1];
    } else {
        let v = (Complex32::new(1.0, 0.0) - Complex32::new(4.0, 0.0) * a[0] * a[2] / (a[1] * a[1]))
            .sqrt();
        if v.re < 0.0 {
            a[1] = (Complex32::new(-1.0, 0.0) - v) * a[1] / (a[0] * 2.0);
        } else {
            a[1] = (Complex32::new(-1.0, 0.0) + v) * a[1] / (a[0] * 2.0);
        }
        a[2] /= a[0] * a[1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots_of(mut a: Vec<Complex32>, order: usize) -> Vec<Complex32> {
        solve_madsen(&mut a, order);
        a[1..=order].to_vec()
    }

    fn assert_contains_root(roots: &[Complex32], expected: Complex32, tol: f32) {
        assert!(
            roots.iter().any(|r| (*r - expected).abs() < tol),
            "expected root near {:?} in {:?}",
            expected,
            roots
        );
    }

    #[test]
    fn solves_x_squared_minus_one() {
        let a = vec![
            Complex32::new(1.0, 0.0),
            Complex32::new(0.0, 0.0),
            Complex32::new(-1.0, 0.0),
        ];
        let roots = roots_of(a, 2);
        assert_contains_root(&roots, Complex32::new(1.0, 0.0), 1e-4);
        assert_contains_root(&roots, Complex32::new(-1.0, 0.0), 1e-4);
    }

    #[test]
    fn solves_cubic_with_known_integer_roots() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let a = vec![
            Complex32::new(1.0, 0.0),
            Complex32::new(-6.0, 0.0),
            Complex32::new(11.0, 0.0),
            Complex32::new(-6.0, 0.0),
        ];
        let roots = roots_of(a, 3);
        assert_contains_root(&roots, Complex32::new(1.0, 0.0), 1e-3);
        assert_contains_root(&roots, Complex32::new(2.0, 0.0), 1e-3);
        assert_contains_root(&roots, Complex32::new(3.0, 0.0), 1e-3);
    }

    #[test]
    fn solves_eighth_roots_of_unity_sum() {
        // 1 + x + x^2 + ... + x^7 = (x^8 - 1)/(x - 1); roots are the 7 non-trivial 8th roots.
        let a = vec![Complex32::new(1.0, 0.0); 8];
        let roots = roots_of(a, 7);
        assert_eq!(roots.len(), 7);
        for r in &roots {
            assert!(
                (r.abs() - 1.0).abs() < 1e-3,
                "root {:?} not on unit circle",
                r
            );
        }
    }

    #[test]
    #[should_panic]
    fn zero_leading_coefficient_panics() {
        let mut a = vec![
            Complex32::default(),
            Complex32::new(1.0, 0.0),
            Complex32::new(1.0, 0.0),
        ];
        solve_madsen(&mut a, 2);
    }
}
