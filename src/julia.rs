// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test for a single point.
//!
//! A Julia set fixes the constant `c` and varies the starting point:
//! take `z` to be the point on the complex plane, and repeatedly
//! replace it with `z * z + c`.  Points whose orbits stay close to the
//! origin are in the set; points whose orbits run off toward infinity
//! are not.  We can't iterate forever, so we give up after a fixed
//! number of rounds and call anything still nearby a member.

use num::Complex;

/// The constant that picks out this particular Julia set.
pub const JULIA_C: Complex<f32> = Complex {
    re: -0.8,
    im: 0.156,
};

/// How many rounds a point gets before we declare it a member.
pub const MAX_ITERATIONS: usize = 200;

/// Once `re² + im²` exceeds this the orbit is considered gone.
pub const ESCAPE_THRESHOLD: f32 = 1000.0;

/// Whether a point was found to be in the set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Membership {
    /// Survived every iteration.
    Inside,
    /// Crossed the threshold.
    Escaped,
}

impl Membership {
    /// The (blue, green, red) triplet a point is painted with.
    #[inline]
    pub fn bgr(self) -> [u8; 3] {
        match self {
            Membership::Inside => [0, 0, 255],
            Membership::Escaped => [255, 255, 255],
        }
    }
}

/// Iterates `z -> z² + c` from `start`.  Returns the round (counting
/// from one) on which the orbit crossed the threshold, or `None` if
/// it never did.
#[inline]
pub fn escape_time(start: Complex<f32>) -> Option<usize> {
    let mut z = start;
    for i in 1..=MAX_ITERATIONS {
        z = z * z + JULIA_C;
        if z.norm_sqr() > ESCAPE_THRESHOLD {
            return Some(i);
        }
    }
    None
}

/// Classifies `start` as inside or outside the set.
#[inline]
pub fn membership(start: Complex<f32>) -> Membership {
    match escape_time(start) {
        Some(_) => Membership::Escaped,
        None => Membership::Inside,
    }
}
