// #![deny(missing_docs)]

pub mod ternary;

pub mod error;
pub use error::{CarveError, OutOfBounds, SeamError};

pub mod picture;
pub use picture::{Picture, PictureView};

pub mod gridmap;
pub use gridmap::GridMap;

pub mod energy;
pub use energy::{energy, energy_map, energy_to_image};

pub mod flipper;
pub use flipper::Flipper;

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod dualgradient;
pub use dualgradient::DualGradient;

pub mod seamcarver;
pub use seamcarver::{remove_horizontal_seam, remove_vertical_seam, seamcarve, SeamCarver};
