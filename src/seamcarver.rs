// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal and the carving driver.
//!
//! Removing a seam shifts every pixel past it one step toward the
//! seam, then drops the dead last column (or row).  A seam is checked
//! completely before the first write, so a rejected seam leaves the
//! picture byte-identical.

use crate::cq;
use crate::dualgradient::DualGradient;
use crate::error::{CarveError, SeamError};
use crate::picture::Picture;
use crate::seamfinder::SeamFinder;
use itertools::Itertools;
use log::debug;

// Validation order matters for reporting: the carved dimension first,
// then the seam's length, its connectivity, and finally its range.
fn validate_seam(seam: &[usize], across: usize, along: usize) -> Result<(), SeamError> {
    if across <= 1 {
        return Err(SeamError::TooSmall(across));
    }
    if seam.len() != along {
        return Err(SeamError::LengthMismatch {
            expected: along,
            found: seam.len(),
        });
    }
    for (index, (&from, &to)) in seam.iter().tuple_windows().enumerate() {
        if from.abs_diff(to) > 1 {
            return Err(SeamError::NotConnected { index, from, to });
        }
    }
    for (index, &value) in seam.iter().enumerate() {
        if value >= across {
            return Err(SeamError::OutOfRange {
                index,
                value,
                limit: across,
            });
        }
    }
    Ok(())
}

/// Remove a vertical seam: every row closes leftward over its seam
/// pixel and the picture ends up one column narrower.
pub fn remove_vertical_seam(picture: &mut Picture, seam: &[usize]) -> Result<(), SeamError> {
    let (width, height) = (picture.width(), picture.height());
    validate_seam(seam, width, height)?;
    for (y, &seam_x) in seam.iter().enumerate() {
        for x in seam_x..width - 1 {
            let next = picture.get(x + 1, y);
            picture.set(x, y, next);
        }
    }
    picture.drop_last_column();
    Ok(())
}

/// Remove a horizontal seam: every column closes upward over its seam
/// pixel and the picture ends up one row shorter.
///
/// The result is exactly a transpose, a vertical removal, and a
/// transpose back, without ever materializing the transposed picture.
pub fn remove_horizontal_seam(picture: &mut Picture, seam: &[usize]) -> Result<(), SeamError> {
    let (width, height) = (picture.width(), picture.height());
    validate_seam(seam, height, width)?;
    for (x, &seam_y) in seam.iter().enumerate() {
        for y in seam_y..height - 1 {
            let below = picture.get(x, y + 1);
            picture.set(x, y, below);
        }
    }
    picture.drop_last_row();
    Ok(())
}

// Essentially `bool` with better names; the alternation logic below
// reads much better for it.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        cq!(self == Carve::Width, Carve::Height, Carve::Width)
    }
}

fn carve_once(picture: &mut Picture, direction: Carve) -> Result<(), SeamError> {
    let seam = {
        let finder = DualGradient::new(&*picture);
        cq!(
            direction == Carve::Height,
            finder.find_horizontal_seam(),
            finder.find_vertical_seam()
        )
    };
    debug!(
        "removing a {} seam from {}x{}",
        cq!(direction == Carve::Height, "horizontal", "vertical"),
        picture.width(),
        picture.height()
    );
    if direction == Carve::Height {
        remove_horizontal_seam(picture, &seam)
    } else {
        remove_vertical_seam(picture, &seam)
    }
}

/// Given a picture and a desired new width and height, repeatedly
/// carve seams out of it until it reaches that size, alternating
/// directions while both dimensions still have seams to lose.
pub fn seamcarve(
    picture: &mut Picture,
    new_width: usize,
    new_height: usize,
) -> Result<(), CarveError> {
    if new_width == 0 || new_height == 0 {
        return Err(CarveError::EmptyTarget);
    }
    if new_width > picture.width() || new_height > picture.height() {
        return Err(CarveError::Upscale {
            from_width: picture.width(),
            from_height: picture.height(),
            to_width: new_width,
            to_height: new_height,
        });
    }

    let mut direction = Carve::Width;
    while picture.width() > new_width && picture.height() > new_height {
        carve_once(picture, direction)?;
        direction = direction.turn();
    }
    while picture.width() > new_width {
        carve_once(picture, Carve::Width)?;
    }
    while picture.height() > new_height {
        carve_once(picture, Carve::Height)?;
    }
    Ok(())
}

/// A struct for holding the picture being carved.  Not strictly
/// necessary over the free function, but it leaves room for caching
/// intermediate energy maps between carves.
pub struct SeamCarver {
    picture: Picture,
}

impl SeamCarver {
    /// Takes ownership of the picture to be carved.
    pub fn new(picture: Picture) -> Self {
        SeamCarver { picture }
    }

    /// The picture in its current state.
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Carve down to the target dimensions.
    pub fn carve_to(&mut self, new_width: usize, new_height: usize) -> Result<(), CarveError> {
        seamcarve(&mut self.picture, new_width, new_height)
    }

    /// Give the picture back.
    pub fn into_picture(self) -> Picture {
        self.picture
    }
}
