// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Binary PPM output, for viewers that don't read TGA.

use errors::{Error, Result};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use render::{allocate, Image};
use std::fs::File;
use std::path::Path;
use tga::discard_on_error;

/// The renderer stores (blue, green, red); PPM wants (red, green, blue).
fn to_rgb(bgr: &[u8]) -> Result<Vec<u8>> {
    let mut rgb = allocate(bgr.len(), 0)?;
    rgb.copy_from_slice(bgr);
    for p in rgb.chunks_mut(3) {
        p.swap(0, 2);
    }
    Ok(rgb)
}

fn encode_file(file: File, width: usize, height: usize, rgb: &[u8]) -> Result<()> {
    let mut encoder =
        PNMEncoder::new(file).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(rgb, width as u32, height as u32, ColorType::RGB(8))?;
    Ok(())
}

/// Writes `image` to `path` as a binary pixmap.  A file that can't be
/// opened is left alone; one that fails part way through is removed.
pub fn write_pnm<P: AsRef<Path>>(path: P, image: &Image) -> Result<()> {
    let path = path.as_ref();
    let expected = image.width * image.height * 3;
    if image.pixels.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: image.pixels.len(),
        });
    }
    let rgb = to_rgb(&image.pixels)?;
    let file = File::create(path)?;
    discard_on_error(path, encode_file(file, image.width, image.height, &rgb))
}
