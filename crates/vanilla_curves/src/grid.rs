//! Evenly spaced parameter grids.
//!
//! Grids are plain `Vec<T>` values: the sweep layer consumes any slice,
//! so callers are free to build irregular grids by hand. These helpers
//! cover the two shapes that come up constantly, a straight interval and
//! a relative window around the current market level.

use vanilla_core::traits::Float;

/// Builds an inclusive evenly spaced grid from `start` to `stop`.
///
/// Zero points produce an empty grid and one point produces `[start]`.
/// The final element is pinned to `stop`, so accumulated rounding never
/// shortens the interval.
///
/// # Examples
/// ```
/// use vanilla_curves::grid::linspace;
///
/// let grid = linspace(0.0, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, points: usize) -> Vec<T> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / T::from(n - 1).unwrap();
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + T::from(i).unwrap() * step
                    }
                })
                .collect()
        }
    }
}

/// Builds a symmetric grid spanning `center · (1 ± rel_width)`.
///
/// A relative width of 0.4 around 100 spans 60 to 140. This is the shape
/// used for spot windows around the prevailing market level.
///
/// # Examples
/// ```
/// use vanilla_curves::grid::centered;
///
/// let window = centered(100.0, 0.4, 3);
/// assert_eq!(window, vec![60.0, 100.0, 140.0]);
/// ```
pub fn centered<T: Float>(center: T, rel_width: T, points: usize) -> Vec<T> {
    let one = T::one();
    linspace(center * (one - rel_width), center * (one + rel_width), points)
}
