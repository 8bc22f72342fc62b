// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient seam search.
//!
//! A classic top-to-bottom shortest-path dynamic program: each pixel
//! may extend a path from the up-to-three pixels above it (fewer at
//! the grid edges; the wraparound of the energy function does not
//! apply here), the cumulative cost table fills row by row, and the
//! cheapest bottom-row ending is walked back up through the recorded
//! predecessors.

use crate::cq;
use crate::energy::energy_map;
use crate::flipper::Flipper;
use crate::gridmap::GridMap;
use crate::picture::PictureView;
use crate::seamfinder::SeamFinder;

/// Cumulative path cost plus the column the path came from.  Row
/// zero's parents are never read.
#[derive(Default, Debug, Copy, Clone)]
struct CostAndParent {
    cost: f64,
    parent: usize,
}

/// Given an energy field, find the cheapest top-to-bottom seam.
///
/// Predecessor preference is part of the contract: on equal costs a
/// path keeps its column, then leans left, then right.  Reorder these
/// checks and identical pictures produce different (equally cheap)
/// seams.
pub fn energy_to_vertical_seam(energy: &GridMap<f64>) -> Vec<usize> {
    let (width, height) = (energy.width, energy.height);
    let mut table: GridMap<CostAndParent> = GridMap::new(width, height);

    // The first row's costs are its raw energies.
    for x in 0..width {
        table[(x, 0)].cost = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            // Straight up first, then up-left, then up-right; only a
            // strict improvement moves the parent, so ties keep the
            // earlier candidate.
            let mut parent = x;
            let mut cost = table[(x, y - 1)].cost;
            if x > 0 && table[(x - 1, y - 1)].cost < cost {
                parent = x - 1;
                cost = table[(x - 1, y - 1)].cost;
            }
            if x < maxwidth && table[(x + 1, y - 1)].cost < cost {
                parent = x + 1;
                cost = table[(x + 1, y - 1)].cost;
            }
            table[(x, y)] = CostAndParent {
                cost: energy[(x, y)] + cost,
                parent,
            };
        }
    }

    // The cheapest ending in the bottom row; the leftmost wins a tie.
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(
            table[(x, height - 1)].cost < table[(best, height - 1)].cost,
            x,
            best
        )
    });

    // Working backwards, collect the column of every visited row,
    // then flip the seam the right way around.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height), |mut acc, y| {
            acc.push(seam_col);
            seam_col = table[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The basic carver: holds a view of the picture and answers seam
/// queries with the dual-gradient energy.
pub struct DualGradient<'a, V: PictureView> {
    view: &'a V,
}

impl<'a, V: PictureView> DualGradient<'a, V> {
    /// Takes a view of a picture, and holds onto it.
    pub fn new(view: &'a V) -> Self {
        DualGradient { view }
    }
}

impl<'a, V: PictureView> SeamFinder for DualGradient<'a, V> {
    fn find_vertical_seam(&self) -> Vec<usize> {
        energy_to_vertical_seam(&energy_map(self.view))
    }

    // The same search over the transposed view.  The picture is read,
    // never written, so there is no restore step to get wrong.
    fn find_horizontal_seam(&self) -> Vec<usize> {
        energy_to_vertical_seam(&energy_map(&Flipper { view: self.view }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::Picture;
    use itertools::Itertools;

    // A cheap diagonal of ones through a field of nines.
    const ENERGY_DATA: [f64; 12] = [9.0, 1.0, 9.0, 9.0, 9.0, 9.0, 1.0, 9.0, 9.0, 9.0, 9.0, 1.0];

    fn textured(width: usize, height: usize) -> Picture {
        let data = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                [
                    ((x * 37 + y * 11) % 256) as u8,
                    ((x * 17 + y * 29) % 256) as u8,
                    ((x * 5 + y * 3) % 256) as u8,
                ]
            })
            .collect();
        Picture::from_raw(width, height, data)
    }

    fn transposed(picture: &Picture) -> Picture {
        let (width, height) = (picture.width(), picture.height());
        let data = (0..width * height)
            .map(|i| picture.get(i / height, i % height))
            .collect();
        Picture::from_raw(height, width, data)
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = GridMap::from_cells(4, 3, ENERGY_DATA.to_vec());
        assert_eq!(energy_to_vertical_seam(&energies), [1, 2, 3]);
    }

    #[test]
    fn uniform_energy_breaks_ties_straight_and_left() {
        let energies = GridMap::from_cells(4, 3, vec![5.0; 12]);
        assert_eq!(energy_to_vertical_seam(&energies), [0, 0, 0]);
    }

    #[test]
    fn vertical_seam_is_connected_and_in_range() {
        let picture = textured(7, 5);
        let seam = DualGradient::new(&picture).find_vertical_seam();
        assert_eq!(seam.len(), picture.height());
        assert!(seam.iter().all(|&x| x < picture.width()));
        assert!(seam
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| a.abs_diff(b) <= 1));
    }

    #[test]
    fn repeated_searches_agree() {
        let picture = textured(6, 9);
        let finder = DualGradient::new(&picture);
        assert_eq!(finder.find_vertical_seam(), finder.find_vertical_seam());
    }

    #[test]
    fn horizontal_seam_matches_vertical_seam_of_transpose() {
        let picture = textured(8, 5);
        let flipped = transposed(&picture);
        assert_eq!(
            DualGradient::new(&picture).find_horizontal_seam(),
            DualGradient::new(&flipped).find_vertical_seam()
        );
        // And the picture came through untouched.
        assert_eq!(picture, textured(8, 5));
    }

    #[test]
    fn bright_stripe_is_avoided() {
        // Black field with a bright, slightly varied stripe in the
        // middle column.  The flat outer columns cost nothing, so the
        // seam has no reason to touch the stripe.
        let mut picture = Picture::filled(5, 3, [0, 0, 0]);
        picture.set(2, 0, [255, 255, 255]);
        picture.set(2, 1, [200, 200, 200]);
        picture.set(2, 2, [255, 255, 255]);
        let seam = DualGradient::new(&picture).find_vertical_seam();
        assert!(seam.iter().all(|&x| x != 2), "seam {:?} hit the stripe", seam);
    }
}
