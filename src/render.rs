// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set rasterizer
//!
//! Every pixel of the grid is mapped to a point on the complex plane,
//! tested for membership, and painted blue (in the set) or white (not
//! in the set).  No pixel depends on any other, so the image can be
//! carved into rows and handed out to as many workers as we like.
//! Points deep in the set cost the full iteration budget while points
//! far outside bail out after a round or two, so rather than giving
//! each worker a fixed band of the image, workers pull one row at a
//! time from a shared queue until it runs dry.

extern crate crossbeam;

use errors::{Error, Result};
use itertools::iproduct;
use julia::membership;
use num::Complex;
use planes::{Pixel, PlaneMapper};
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::Mutex;

type RowQueue<'a> = Mutex<Enumerate<ChunksMut<'a, u8>>>;

/// A finished render: the grid it was drawn on and its (blue, green,
/// red) pixel triplets in row-major order.
#[derive(Debug)]
pub struct Image {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

/// Holds the plane for a render.  Once set, it is never mutated, so a
/// single renderer can be shared by reference across all workers.
pub struct JuliaRenderer {
    plane: PlaneMapper,
}

/// Reserves the whole pixel buffer up front, reporting failure rather
/// than aborting.  The buffer is filled with `fill`.
pub fn allocate(len: usize, fill: u8) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation(len))?;
    buffer.resize(len, fill);
    Ok(buffer)
}

impl JuliaRenderer {
    /// Wraps an already validated plane.
    pub fn new(plane: PlaneMapper) -> Self {
        JuliaRenderer { plane }
    }

    fn buffer_len(&self) -> Result<usize> {
        let (width, height) = (self.plane.grid.0, self.plane.grid.1);
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| Error::Allocation(usize::max_value()))
    }

    fn check_len(&self, buffer: &[u8]) -> Result<()> {
        let expected = self.buffer_len()?;
        if buffer.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(())
    }

    fn image(&self, pixels: Vec<u8>) -> Image {
        Image {
            width: self.plane.grid.0,
            height: self.plane.grid.1,
            pixels,
        }
    }

    /// Paints one row of the image.  `row` must be exactly one grid
    /// width of triplets.
    fn render_row(&self, j: usize, row: &mut [u8]) {
        let imaginary = self.plane.imaginary(j);
        for (i, slot) in row.chunks_mut(3).enumerate() {
            let point = Complex::new(self.plane.real(i), imaginary);
            slot.copy_from_slice(&membership(point).bgr());
        }
    }

    /// Paints every pixel of `buffer` on the calling thread.
    pub fn render_into_single(&self, buffer: &mut [u8]) -> Result<()> {
        self.check_len(buffer)?;
        for (j, i) in iproduct!(0..self.plane.grid.1, 0..self.plane.grid.0) {
            let pixel = Pixel(i, j);
            let offset = self.plane.pixel_to_offset(&pixel);
            let color = membership(self.plane.pixel_to_point(&pixel)).bgr();
            buffer[offset..offset + 3].copy_from_slice(&color);
        }
        Ok(())
    }

    /// Paints every pixel of `buffer` using `threads` workers.  Each
    /// worker repeatedly claims the next unpainted row; the lock guards
    /// only the queue, and every row slice belongs to exactly one
    /// worker.
    pub fn render_into(&self, buffer: &mut [u8], threads: usize) -> Result<()> {
        if threads == 0 {
            return Err(Error::InvalidThreadCount);
        }
        self.check_len(buffer)?;

        let rows: RowQueue = Mutex::new(buffer.chunks_mut(self.plane.grid.0 * 3).enumerate());
        let rows = &rows;
        crossbeam::scope(|spawner| {
            for worker in 0..threads {
                spawner.spawn(move |_| {
                    let mut painted = 0;
                    loop {
                        let next = match rows.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => None,
                        };
                        match next {
                            Some((j, row)) => {
                                self.render_row(j, row);
                                painted += 1;
                            }
                            None => {
                                break;
                            }
                        }
                    }
                    debug!("worker {} painted {} rows", worker, painted);
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)
    }

    /// The main function for single-threaded renders.
    pub fn render_single(&self) -> Result<Image> {
        let mut buffer = allocate(self.buffer_len()?, 0)?;
        self.render_into_single(&mut buffer)?;
        Ok(self.image(buffer))
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.
    pub fn render(&self, threads: usize) -> Result<Image> {
        if threads == 0 {
            return Err(Error::InvalidThreadCount);
        }
        let len = self.buffer_len()?;
        info!(
            "rendering {}x{} on {} threads",
            self.plane.grid.0, self.plane.grid.1, threads
        );
        let mut buffer = allocate(len, 0)?;
        if threads == 1 {
            self.render_into_single(&mut buffer)?;
        } else {
            self.render_into(&mut buffer, threads)?;
        }
        Ok(self.image(buffer))
    }
}
