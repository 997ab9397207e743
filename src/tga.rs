// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes uncompressed true-color TGA files.  The layout is an 18
//! byte header followed by the pixel triplets exactly as the renderer
//! laid them out, in (blue, green, red) order.

use errors::{Error, Result};
use planes::MAX_SIDE;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Image type 2: uncompressed true-color.
const PREAMBLE: [u8; 12] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Size of the fixed part of the file.
pub const HEADER_LEN: usize = 18;

/// The six bytes describing the image: width and height, each low
/// byte first, then 24 bits per pixel and an empty descriptor.
fn image_spec(width: usize, height: usize) -> [u8; 6] {
    [
        (width % 256) as u8,
        (width / 256) as u8,
        (height % 256) as u8,
        (height / 256) as u8,
        24,
        0,
    ]
}

/// Checks that the dimensions fit in the header and the buffer holds
/// exactly one triplet per pixel.
fn check(width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    if width > MAX_SIDE || height > MAX_SIDE {
        return Err(Error::InvalidGrid(width, height));
    }
    let expected = width * height * 3;
    if pixels.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Writes the header and the pixel data to any writer.
pub fn encode_tga<W: Write>(output: &mut W, width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    check(width, height, pixels)?;
    output.write_all(&PREAMBLE)?;
    output.write_all(&image_spec(width, height))?;
    output.write_all(pixels)?;
    Ok(())
}

fn write_file(file: File, width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    let mut output = BufWriter::new(file);
    encode_tga(&mut output, width, height, pixels)?;
    output.flush()?;
    Ok(())
}

/// Settles a write to a file this crate created: on failure the
/// half-written file is removed so it can't pass for output.  Devices
/// and anything else that isn't a regular file are left alone.
pub(crate) fn discard_on_error(path: &Path, written: Result<()>) -> Result<()> {
    match written {
        Ok(()) => {
            info!("graphics data saved as '{}'", path.display());
            Ok(())
        }
        Err(e) => {
            if path.is_file() {
                if let Err(cleanup) = fs::remove_file(path) {
                    warn!("could not remove partial file '{}': {}", path.display(), cleanup);
                }
            }
            Err(e)
        }
    }
}

/// Creates (or truncates) `path` and writes the image to it.  If the
/// file can't be opened nothing on disk is touched; if anything fails
/// after it has been opened, the partial file is removed before the
/// error is returned.
pub fn write_tga<P: AsRef<Path>>(path: P, width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    let path = path.as_ref();
    check(width, height, pixels)?;
    let file = File::create(path)?;
    discard_on_error(path, write_file(file, width, height, pixels))
}
