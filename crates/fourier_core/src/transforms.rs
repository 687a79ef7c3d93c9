use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::error::{Result, SpectralError};
use crate::fft::Radix2Network;
use crate::sample::Sample;
use crate::shift::{fftshift2d, ifftshift2d};

/// Padded square extent used by [`fft2d`] for an image with `rows` rows.
///
/// Only the row count participates. A wider-than-tall image loses its
/// trailing columns; callers that need them must pad to a square first.
pub fn padded_extent(rows: usize) -> usize {
    rows.max(1).next_power_of_two()
}

/// Compute the centered 2D FFT of an image.
///
/// The image is widened to complex samples and zero-padded into an N x N
/// grid, N being the smallest power of two not below the row count. Every
/// column is transformed, then every row of the intermediate result, and the
/// spectrum is centered with [`fftshift2d`].
///
/// # Errors
/// [`SpectralError::Shape`] if the image has no elements.
pub fn fft2d<T: Sample>(image: ArrayView2<T>) -> Result<Array2<Complex64>> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(SpectralError::shape(format!(
            "image must not be empty, got {rows}x{cols}"
        )));
    }

    let n = padded_extent(rows);
    let kind = T::KIND;
    debug!(rows, cols, padded = n, %kind, "fft2d");
    if cols > n {
        warn!(
            cols,
            padded = n,
            "fft2d pads from the row count; trailing columns are dropped"
        );
    }

    // 1. Zero-pad into an N x N complex grid
    let mut padded = Array2::<Complex64>::zeros((n, n));
    for r in 0..rows {
        for c in 0..cols.min(n) {
            padded[[r, c]] = image[[r, c]].to_complex();
        }
    }

    let network = Radix2Network::new(n);

    // 2. Transform columns
    let mut intermediate = Array2::<Complex64>::zeros((n, n));
    for c in 0..n {
        let col_vec = padded.column(c).to_vec();
        let transformed = network.forward(col_vec);
        for (r, value) in transformed.into_iter().enumerate() {
            intermediate[[r, c]] = value;
        }
    }

    // 3. Transform rows
    let mut output = Array2::<Complex64>::zeros((n, n));
    for r in 0..n {
        let row_vec = intermediate.row(r).to_vec();
        let transformed = network.forward(row_vec);
        for (c, value) in transformed.into_iter().enumerate() {
            output[[r, c]] = value;
        }
    }

    // 4. Center
    Ok(fftshift2d(output.view()))
}

/// Reconstruct an image from a centered spectrum produced by [`fft2d`].
///
/// Un-centers the spectrum, applies the inverse transform to every column
/// and then every row, crops to `rows x cols` and narrows each element to
/// `T` with [`Sample::from_complex`].
///
/// # Errors
/// - [`SpectralError::Shape`] if the spectrum is not a non-empty square
///   grid with a power-of-two extent.
/// - [`SpectralError::Size`] if `rows` or `cols` exceeds that extent.
pub fn ifft2d<T: Sample>(
    spectrum: ArrayView2<Complex64>,
    rows: usize,
    cols: usize,
) -> Result<Array2<T>> {
    let (spec_rows, spec_cols) = spectrum.dim();
    if spec_rows != spec_cols || !spec_rows.is_power_of_two() {
        return Err(SpectralError::shape(format!(
            "spectrum must be a square power-of-two grid, got {spec_rows}x{spec_cols}"
        )));
    }
    let n = spec_rows;
    let largest = rows.max(cols);
    if largest > n {
        return Err(SpectralError::Size {
            requested: n,
            actual: largest,
        });
    }
    let kind = T::KIND;
    debug!(padded = n, rows, cols, %kind, "ifft2d");

    // 1. Un-center
    let uncentered = ifftshift2d(spectrum);
    let network = Radix2Network::new(n);

    // 2. Transform columns
    let mut intermediate = Array2::<Complex64>::zeros((n, n));
    for c in 0..n {
        let col_vec = uncentered.column(c).to_vec();
        let transformed = network.inverse(col_vec);
        for (r, value) in transformed.into_iter().enumerate() {
            intermediate[[r, c]] = value;
        }
    }

    // 3. Transform rows, keeping only the cropped region
    let mut output = Array2::<T>::zeros((rows, cols));
    for r in 0..rows {
        let row_vec = intermediate.row(r).to_vec();
        let transformed = network.inverse(row_vec);
        for c in 0..cols {
            output[[r, c]] = T::from_complex(transformed[c]);
        }
    }

    Ok(output)
}
