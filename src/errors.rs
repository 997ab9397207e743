// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parsing a plane and landing
//! the image on disk.

use std::io;

/// The crate-wide error type.
#[derive(Debug, Fail)]
pub enum Error {
    /// The complex rectangle is degenerate, inverted, or not finite.
    #[fail(display = "Invalid domain: {}", _0)]
    InvalidDomain(String),

    /// The pixel grid must be at least 2x2 and fit in a TGA header.
    #[fail(
        display = "Invalid grid {}x{}: each side must be between 2 and 65535",
        _0, _1
    )]
    InvalidGrid(usize, usize),

    /// Asked to render with no workers at all.
    #[fail(display = "Thread count must be at least 1")]
    InvalidThreadCount,

    /// The pixel buffer could not be reserved.
    #[fail(display = "Could not allocate a pixel buffer of {} bytes", _0)]
    Allocation(usize),

    /// A writer was handed a buffer that doesn't match its dimensions.
    #[fail(
        display = "Pixel buffer holds {} bytes, expected {}",
        actual, expected
    )]
    BufferSize {
        /// Bytes the dimensions call for.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },

    /// One of the render workers went down.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,

    /// File creation or writing failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, Error>;
