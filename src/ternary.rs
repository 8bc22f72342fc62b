/// A compact ternary expression.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it over five lines, and the
/// wraparound and edge-handling tables in the energy and seam code
/// read far better as single lines.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
