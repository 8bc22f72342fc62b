// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Transposed picture view.
//!
//! A read-only proxy that swaps the two axes: width maps to the
//! original height and every (x, y) to (y, x).  Running the
//! vertical-seam search over this view yields a horizontal seam of the
//! underlying picture, so a single orientation of the algorithm serves
//! both directions and the picture itself is never written while a
//! horizontal pass runs.

use crate::picture::PictureView;

pub struct Flipper<'a, V: PictureView> {
    pub view: &'a V,
}

impl<'a, V: PictureView> PictureView for Flipper<'a, V> {
    fn width(&self) -> usize {
        self.view.height()
    }

    fn height(&self) -> usize {
        self.view.width()
    }

    fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.view.pixel(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::Picture;

    #[test]
    fn swaps_axes() {
        let data = (0..6u8).map(|c| [c, 0, 0]).collect();
        let picture = Picture::from_raw(3, 2, data);
        let flipped = Flipper { view: &picture };
        assert_eq!((flipped.width(), flipped.height()), (2, 3));
        assert_eq!(flipped.pixel(1, 2), picture.pixel(2, 1));
    }
}
