#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is drawn by fixing a complex constant `c` and asking,
//! for every point `z` on a patch of the complex plane, whether
//! repeatedly replacing `z` with `z * z + c` keeps it near the origin
//! or sends it off to infinity.  The points that stay put form the
//! set.  This crate renders the set for `c = -0.8 + 0.156i` onto a
//! grid of pixels, painting members blue and everything else white,
//! and saves the result as an uncompressed TGA file.
//!
//! Every pixel is independent of every other, so the render splits
//! the image into rows and lets a pool of worker threads pull them
//! off a shared queue until the image is complete.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod errors;
pub mod julia;
pub mod parse;
pub mod planes;
pub mod pnm;
pub mod render;
pub mod tga;

pub use errors::{Error, Result};
pub use julia::{escape_time, membership, Membership, ESCAPE_THRESHOLD, JULIA_C, MAX_ITERATIONS};
pub use parse::{parse_complex, parse_pair, parse_size};
pub use planes::{coordinate, Domain, Grid, Pixel, PlaneMapper};
pub use pnm::write_pnm;
pub use render::{Image, JuliaRenderer};
pub use tga::{encode_tga, write_tga};
