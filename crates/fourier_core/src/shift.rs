//! Quadrant swap centering for 2D spectra.

use ndarray::{s, Array2, ArrayView2};

/// Move the zero-frequency bin to the center of the matrix.
///
/// Swaps the top-left quadrant with the bottom-right one and the top-right
/// with the bottom-left, writing into a fresh buffer. Quadrants are
/// `rows/2 x cols/2`; for odd extents the trailing row and column stay where
/// they are. The operation is its own inverse.
pub fn fftshift2d<T: Clone>(matrix: ArrayView2<T>) -> Array2<T> {
    let (rows, cols) = matrix.dim();
    let cy = rows / 2;
    let cx = cols / 2;

    let mut out = matrix.to_owned();
    if cy == 0 || cx == 0 {
        return out;
    }

    let top_left = matrix.slice(s![0..cy, 0..cx]);
    let top_right = matrix.slice(s![0..cy, cx..2 * cx]);
    let bottom_left = matrix.slice(s![cy..2 * cy, 0..cx]);
    let bottom_right = matrix.slice(s![cy..2 * cy, cx..2 * cx]);

    out.slice_mut(s![0..cy, 0..cx]).assign(&bottom_right);
    out.slice_mut(s![cy..2 * cy, cx..2 * cx]).assign(&top_left);
    out.slice_mut(s![0..cy, cx..2 * cx]).assign(&bottom_left);
    out.slice_mut(s![cy..2 * cy, 0..cx]).assign(&top_right);

    out
}

/// Undo [`fftshift2d`]. Identical operation, named for the call sites that
/// un-center a spectrum before the inverse transform.
pub fn ifftshift2d<T: Clone>(matrix: ArrayView2<T>) -> Array2<T> {
    fftshift2d(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_shift_4x4_moves_origin_to_center() {
        let m = Array2::from_shape_fn((4, 4), |(r, c)| r * 4 + c);
        let shifted = fftshift2d(m.view());
        assert_eq!(shifted[[2, 2]], 0);
        assert_eq!(
            shifted,
            arr2(&[
                [10, 11, 8, 9],
                [14, 15, 12, 13],
                [2, 3, 0, 1],
                [6, 7, 4, 5],
            ])
        );
    }

    #[test]
    fn test_shift_then_unshift_is_identity() {
        for n in [1usize, 2, 4, 8, 16] {
            let m = Array2::from_shape_fn((n, n), |(r, c)| (r * 31 + c * 7) as i64);
            let back = ifftshift2d(fftshift2d(m.view()).view());
            assert_eq!(back, m, "n = {n}");
        }
    }

    #[test]
    fn test_shift_odd_extent_keeps_trailing_lane() {
        let m = Array2::from_shape_fn((3, 3), |(r, c)| r * 3 + c);
        let shifted = fftshift2d(m.view());
        assert_eq!(shifted[[0, 0]], 4);
        assert_eq!(shifted[[1, 1]], 0);
        assert_eq!(shifted.row(2), m.row(2));
        assert_eq!(shifted.column(2), m.column(2));
        assert_eq!(fftshift2d(shifted.view()), m);
    }

    #[test]
    fn test_shift_single_element() {
        let m = arr2(&[[42u8]]);
        assert_eq!(fftshift2d(m.view()), m);
    }
}
