//! Error types for the carving engine.
//!
//! Every failure here is synchronous and deterministic: a rejected
//! call reports exactly which precondition was violated and leaves the
//! picture untouched.  Presentation is the caller's job; the library
//! never prints and never swallows.

use thiserror::Error;

/// Raised by pixel-level energy queries whose coordinates fall outside
/// the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} picture")]
pub struct OutOfBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Raised by the seam removal operations when a seam cannot be applied
/// to the picture in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeamError {
    /// The dimension being carved is already at its minimum of one
    /// pixel.
    #[error("picture is only {0} pixel(s) across; nothing left to carve")]
    TooSmall(usize),

    /// The seam does not have exactly one entry per traversed row or
    /// column.
    #[error("seam of length {found} does not span the picture ({expected} expected)")]
    LengthMismatch { expected: usize, found: usize },

    /// Two consecutive seam entries are more than one pixel apart.
    #[error("seam entries {from} and {to} at step {index} are not adjacent")]
    NotConnected { index: usize, from: usize, to: usize },

    /// A seam entry points outside the picture.
    #[error("seam entry {value} at step {index} exceeds the picture bound {limit}")]
    OutOfRange {
        index: usize,
        value: usize,
        limit: usize,
    },
}

/// Raised by the repeated-carving driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarveError {
    /// Carving only shrinks; growing a picture is a different problem.
    #[error("cannot carve {from_width}x{from_height} up to {to_width}x{to_height}")]
    Upscale {
        from_width: usize,
        from_height: usize,
        to_width: usize,
        to_height: usize,
    },

    /// A picture always keeps at least one row and one column.
    #[error("target dimensions must be at least 1x1")]
    EmptyTarget,

    /// A seam failed validation while carving.
    #[error(transparent)]
    Seam(#[from] SeamError),
}
