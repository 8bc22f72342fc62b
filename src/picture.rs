// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The picture grid.
//!
//! A mutable W×H grid of RGB triples, stored row-major.  The carving
//! engine reads and writes individual cells and shrinks the dimensions
//! as seams are removed; file decoding and encoding stay at the
//! boundary as conversions from and to [`image::RgbImage`].

use image::{Rgb, RgbImage};

/// Read-only access to a rectangular grid of RGB pixels.
///
/// The energy and seam-search code is written against this trait
/// rather than against [`Picture`] directly, so one orientation of the
/// algorithm serves both directions: a transposed view
/// ([`crate::flipper::Flipper`]) implements it too.
pub trait PictureView {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// The pixel at column `x`, row `y`.
    fn pixel(&self, x: usize, y: usize) -> [u8; 3];
}

/// A W×H grid of RGB triples.
///
/// A picture is never empty: width and height stay at least one, even
/// after carving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl Picture {
    /// A picture filled with a single color.
    pub fn filled(width: usize, height: usize, pixel: [u8; 3]) -> Self {
        assert!(width >= 1 && height >= 1, "a picture is at least 1x1");
        Picture {
            width,
            height,
            data: vec![pixel; width * height],
        }
    }

    /// Build a picture from row-major pixel data.
    ///
    /// Panics if the dimensions are zero or do not match the data
    /// length.
    pub fn from_raw(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        assert!(width >= 1 && height >= 1, "a picture is at least 1x1");
        assert_eq!(
            data.len(),
            width * height,
            "pixel data does not fill {}x{}",
            width,
            height
        );
        Picture {
            width,
            height,
            data,
        }
    }

    // Keep the index math in exactly one place.
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at column `x`, row `y`.  Panics out of bounds, like
    /// any slice index.
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[self.offset(x, y)]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, pixel: [u8; 3]) {
        let offset = self.offset(x, y);
        self.data[offset] = pixel;
    }

    // Compact every row over its dead last cell.  The read offset
    // never falls behind the write offset, so this is safe in place.
    pub(crate) fn drop_last_column(&mut self) {
        debug_assert!(self.width > 1);
        let width = self.width;
        let mut write = 0;
        for y in 0..self.height {
            for x in 0..width - 1 {
                self.data[write] = self.data[y * width + x];
                write += 1;
            }
        }
        self.data.truncate(write);
        self.width = width - 1;
    }

    // Rows are contiguous, so losing the bottom one is a truncation.
    pub(crate) fn drop_last_row(&mut self) {
        debug_assert!(self.height > 1);
        self.height -= 1;
        self.data.truncate(self.width * self.height);
    }

    /// Render the picture as an [`image::RgbImage`].
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(self.get(x as usize, y as usize))
        })
    }
}

impl PictureView for Picture {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.get(x, y)
    }
}

impl From<&RgbImage> for Picture {
    fn from(image: &RgbImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        Picture::from_raw(width, height, image.pixels().map(|p| p.0).collect())
    }
}
