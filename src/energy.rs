// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient energy of a picture.
//!
//! The energy of a pixel measures how much the color changes across
//! it; seams run through low-energy regions so that carving removes
//! the least visually important strip.  Neighbors wrap around at the
//! edges: a border pixel treats the opposite border as its neighbor,
//! so no border needs a special-cased energy value.

use crate::cq;
use crate::error::OutOfBounds;
use crate::gridmap::GridMap;
use crate::picture::PictureView;
use image::{GrayImage, Luma};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

// Channel differences are at most 255, so a squared sum stays well
// inside u32: 3 * 255^2 per axis.
#[inline]
fn gradient_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&c1, &c2)| {
            let d = <i32 as From<u8>>::from(c1) - <i32 as From<u8>>::from(c2);
            (d * d) as u32
        })
        .sum()
}

/// The squared x-gradient at (x, y): the summed squared channel
/// differences between the left and right neighbors, wrapping around
/// at the vertical edges.  Callers must stay in bounds; [`energy`] is
/// the checked entry point.
pub fn x_gradient_squared<V: PictureView>(view: &V, x: usize, y: usize) -> u32 {
    let mw = view.width() - 1;
    let previous = view.pixel(cq!(x == 0, mw, x - 1), y);
    let next = view.pixel(cq!(x == mw, 0, x + 1), y);
    gradient_squared(next, previous)
}

/// The squared y-gradient at (x, y), wrapping top to bottom.
pub fn y_gradient_squared<V: PictureView>(view: &V, x: usize, y: usize) -> u32 {
    let mh = view.height() - 1;
    let previous = view.pixel(x, cq!(y == 0, mh, y - 1));
    let next = view.pixel(x, cq!(y == mh, 0, y + 1));
    gradient_squared(next, previous)
}

/// The dual-gradient energy of a single pixel.
///
/// The two squared gradient sums are added first and square-rooted
/// once.  A pure query: nothing about the picture changes.
pub fn energy<V: PictureView>(view: &V, x: usize, y: usize) -> Result<f64, OutOfBounds> {
    if x >= view.width() || y >= view.height() {
        return Err(OutOfBounds {
            x,
            y,
            width: view.width(),
            height: view.height(),
        });
    }
    Ok(<f64 as From<u32>>::from(x_gradient_squared(view, x, y) + y_gradient_squared(view, x, y)).sqrt())
}

/// Compute the energy of every pixel, returning the full field.  The
/// seam search consumes this; coordinates are in bounds by
/// construction.
pub fn energy_map<V: PictureView>(view: &V) -> GridMap<f64> {
    let (width, height) = (view.width(), view.height());
    let mut map = GridMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        map[(x, y)] =
            <f64 as From<u32>>::from(x_gradient_squared(view, x, y) + y_gradient_squared(view, x, y)).sqrt();
    }
    map
}

/// Render an energy field as a grayscale image, scaled so the hottest
/// pixel maps to white.  Handy for eyeballing what the carver will
/// avoid.
pub fn energy_to_image(map: &GridMap<f64>) -> GrayImage {
    let (width, height) = (map.width, map.height);
    let factor = iproduct!(0..height, 0..width)
        .map(|(y, x)| map[(x, y)])
        .fold(0.0f64, f64::max);

    let mut out = GrayImage::new(width as u32, height as u32);
    for (y, x) in iproduct!(0..height, 0..width) {
        let level = cq!(factor > 0.0, map[(x, y)] * 255.0 / factor, 0.0);
        let level: u8 = NumCast::from(clamp(level.round(), 0.0, 255.0)).unwrap();
        out.put_pixel(x as u32, y as u32, Luma([level]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::Picture;

    // Row-major 3x3 fixture with distinct values everywhere.
    fn fixture() -> Picture {
        Picture::from_raw(
            3,
            3,
            vec![
                [1, 2, 3],
                [0, 0, 0],
                [4, 5, 6],
                [10, 20, 30],
                [100, 100, 100],
                [40, 10, 5],
                [7, 8, 9],
                [9, 12, 15],
                [11, 13, 17],
            ],
        )
    }

    #[test]
    fn energy_sums_channels_then_roots_once() {
        let picture = fixture();
        // x: (40-10, 10-20, 5-30), y: (9-0, 12-0, 15-0)
        let expected = ((900 + 100 + 625 + 81 + 144 + 225) as f64).sqrt();
        assert!((energy(&picture, 1, 1).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn border_columns_wrap_to_the_opposite_side() {
        let picture = fixture();
        // At column 0 the left neighbor is column 2.
        let xg = {
            let d = [100 - 40, 100 - 10, 100 - 5];
            d.iter().map(|&c| (c * c) as u32).sum::<u32>()
        };
        let yg = 3 * 6 * 6;
        let expected = <f64 as From<u32>>::from(xg + yg).sqrt();
        assert!((energy(&picture, 0, 1).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn diagonal_neighbors_do_not_matter() {
        let mut picture = fixture();
        let before = energy(&picture, 1, 1).unwrap();
        picture.set(0, 0, [250, 250, 250]);
        picture.set(2, 2, [250, 0, 250]);
        assert_eq!(energy(&picture, 1, 1).unwrap(), before);
    }

    #[test]
    fn single_column_has_no_x_gradient() {
        let picture = Picture::from_raw(1, 3, vec![[10, 0, 0], [0, 0, 0], [20, 0, 0]]);
        // Both x-neighbors of the only column are the column itself.
        assert_eq!(x_gradient_squared(&picture, 0, 1), 0);
        assert!((energy(&picture, 0, 1).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_has_no_y_gradient() {
        let picture = Picture::from_raw(3, 1, vec![[5, 0, 0], [0, 0, 0], [9, 0, 0]]);
        assert_eq!(y_gradient_squared(&picture, 1, 0), 0);
        assert!((energy(&picture, 1, 0).unwrap() - ((4 * 4) as f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn one_by_one_is_all_zero() {
        let picture = Picture::filled(1, 1, [200, 100, 50]);
        assert_eq!(energy(&picture, 0, 0).unwrap(), 0.0);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let picture = fixture();
        assert_eq!(
            energy(&picture, 3, 0),
            Err(crate::error::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
        assert!(energy(&picture, 0, 7).is_err());
    }

    #[test]
    fn energy_image_is_max_normalized() {
        let map = GridMap::from_cells(2, 1, vec![2.0, 4.0]);
        let image = energy_to_image(&map);
        assert_eq!(image.get_pixel(0, 0).0, [128]);
        assert_eq!(image.get_pixel(1, 0).0, [255]);
    }

    #[test]
    fn flat_energy_renders_black() {
        let map: GridMap<f64> = GridMap::new(2, 2);
        let image = energy_to_image(&map);
        assert!(image.pixels().all(|p| p.0 == [0]));
    }
}
