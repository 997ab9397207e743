// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of pixels on the integral plane, with an origin at
//! 0,0, and a rectangle on the complex plane bounded by its left,
//! right, bottom and top edges.
use errors::{Error, Result};
use num::Complex;

/// The widest or tallest grid a TGA header can describe.
pub const MAX_SIDE: usize = 65_535;

/// Describes the width and height of the pixel grid.  Both sides must
/// be at least two pixels, since the mapping divides by `side - 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid(pub usize, pub usize);

impl Grid {
    /// Checks the grid against the limits of both the mapper and the
    /// file format.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        if width < 2 || height < 2 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(Error::InvalidGrid(width, height));
        }
        Ok(Grid(width, height))
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.0
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.1
    }

    /// The total number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.0 * self.1
    }

    /// Describes that the grid is of a size.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The rectangle of the complex plane being sampled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    /// Lowest real value.
    pub left: f32,
    /// Highest real value.
    pub right: f32,
    /// Lowest imaginary value.
    pub bottom: f32,
    /// Highest imaginary value.
    pub top: f32,
}

impl Domain {
    /// Builds a domain from its four edges.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Result<Domain> {
        if !(left.is_finite() && right.is_finite() && bottom.is_finite() && top.is_finite()) {
            return Err(Error::InvalidDomain(
                "All four bounds must be finite numbers.".to_string(),
            ));
        }

        if left >= right {
            return Err(Error::InvalidDomain(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }

        if bottom >= top {
            return Err(Error::InvalidDomain(
                "The left lower corner is not lower than the right upper corner.".to_string(),
            ));
        }

        Ok(Domain {
            left,
            right,
            bottom,
            top,
        })
    }

    /// Builds a domain from its left-lower and right-upper corners.
    pub fn from_corners(leftlower: Complex<f32>, rightupper: Complex<f32>) -> Result<Domain> {
        Domain::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)
    }
}

/// Describes the column and row of a pixel in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Linear interpolation of index `k` across `n` samples of the span
/// `low..=high`.  The two ends of the span come back exactly.
#[inline]
pub fn coordinate(n: usize, low: f32, high: f32, k: usize) -> f32 {
    let last = n - 1;
    if k == 0 {
        return low;
    }
    if k == last {
        return high;
    }
    ((last - k) as f32 * low + k as f32 * high) / last as f32
}

/// Pairs a pixel grid with a domain and maps pixels into the domain.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The integral plane.
    pub grid: Grid,
    /// The complex plane.
    pub domain: Domain,
}

impl PlaneMapper {
    /// Both halves arrive already validated.
    pub fn new(grid: Grid, domain: Domain) -> PlaneMapper {
        PlaneMapper { grid, domain }
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Real coordinate of column `i`.
    #[inline]
    pub fn real(&self, i: usize) -> f32 {
        coordinate(self.grid.0, self.domain.left, self.domain.right, i)
    }

    /// Imaginary coordinate of row `j`.
    #[inline]
    pub fn imaginary(&self, j: usize) -> f32 {
        coordinate(self.grid.1, self.domain.bottom, self.domain.top, j)
    }

    /// Given a pixel on the integral plane, return the complex number
    /// it samples.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f32> {
        Complex::new(self.real(pixel.0), self.imaginary(pixel.1))
    }

    /// Offset of the first byte of a pixel's color triplet in the
    /// image buffer.
    #[inline]
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        (pixel.1 * self.grid.0 + pixel.0) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: usize) -> PlaneMapper {
        PlaneMapper::new(
            Grid::new(side, side).unwrap(),
            Domain::new(-1.5, 1.5, -1.5, 1.5).unwrap(),
        )
    }

    #[test]
    fn domain_fails_on_bad_shape() {
        assert!(Domain::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Domain::new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(Domain::new(-1.0, -1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn domain_fails_on_non_finite_bounds() {
        assert!(Domain::new(::std::f32::NAN, 1.0, -1.0, 1.0).is_err());
        assert!(Domain::new(-1.0, ::std::f32::INFINITY, -1.0, 1.0).is_err());
    }

    #[test]
    fn domain_passes_on_good_shape() {
        let d = Domain::from_corners(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert_eq!(d, Domain::new(-2.0, 1.0, -1.0, 1.0).unwrap());
    }

    #[test]
    fn grid_rejects_degenerate_and_oversized_sides() {
        assert!(Grid::new(1, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::new(65_536, 10).is_err());
        assert!(Grid::new(2, 2).is_ok());
        assert!(Grid::new(65_535, 2).is_ok());
    }

    #[test]
    fn coordinate_is_exact_at_the_edges() {
        for &n in &[2, 3, 7, 640, 20_000] {
            for &(low, high) in &[(-1.5_f32, 1.5_f32), (0.1, 0.7), (-2.103, 1.201), (-3.3, -0.2)] {
                assert_eq!(coordinate(n, low, high, 0), low);
                assert_eq!(coordinate(n, low, high, n - 1), high);
            }
        }
    }

    #[test]
    fn coordinate_is_monotonic() {
        for &n in &[2, 5, 101, 1000] {
            let mut previous = coordinate(n, -1.5, 1.5, 0);
            for k in 1..n {
                let next = coordinate(n, -1.5, 1.5, k);
                assert!(previous <= next, "k={} went from {} to {}", k, previous, next);
                previous = next;
            }
        }
    }

    #[test]
    fn coordinate_hits_the_midpoint() {
        assert_eq!(coordinate(5, -2.0, 2.0, 2), 0.0);
        assert_eq!(coordinate(5, -2.0, 2.0, 1), -1.0);
        assert_eq!(coordinate(5, -2.0, 2.0, 3), 1.0);
    }

    #[test]
    fn pixel_to_point_on_mixed_planes() {
        let pm = square(5);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.5, -1.5));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(1.5, 1.5));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 0)), Complex::new(1.5, -1.5));
    }

    #[test]
    fn pixel_to_point_on_rectangular_planes() {
        let pm = PlaneMapper::new(
            Grid::new(4, 3).unwrap(),
            Domain::new(0.0, 3.0, -1.0, 1.0).unwrap(),
        );
        assert_eq!(pm.pixel_to_point(&Pixel(1, 1)), Complex::new(1.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 2)), Complex::new(3.0, 1.0));
    }

    #[test]
    fn pixel_to_offset_is_row_major() {
        let pm = PlaneMapper::new(
            Grid::new(4, 3).unwrap(),
            Domain::new(-1.0, 1.0, -1.0, 1.0).unwrap(),
        );
        assert_eq!(pm.pixel_to_offset(&Pixel(0, 0)), 0);
        assert_eq!(pm.pixel_to_offset(&Pixel(3, 0)), 9);
        assert_eq!(pm.pixel_to_offset(&Pixel(0, 1)), 12);
        assert_eq!(pm.pixel_to_offset(&Pixel(3, 2)), 33);
        assert_eq!(pm.len(), 12);
    }
}
