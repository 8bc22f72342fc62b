/// How seams are requested from a picture.  A deliberately small
/// interface, leaving room for alternative carvers (forward energy,
/// cached energy maps) behind the same pair of calls.
pub trait SeamFinder {
    /// The cheapest top-to-bottom seam: one column index per row,
    /// adjacent entries differing by at most one.
    fn find_vertical_seam(&self) -> Vec<usize>;

    /// The cheapest left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<usize>;
}
