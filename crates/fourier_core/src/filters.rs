//! Frequency-domain low-pass kernels.
//!
//! Kernels are addressed in the centered coordinate system produced by
//! [`crate::shift::fftshift2d`]: distance is measured from `(rows/2, cols/2)`.
//! They are real-valued with entries in `[0, 1]` and are applied to a
//! centered spectrum with [`apply_filter`].

use ndarray::{Array2, ArrayView2, Zip};
use num_complex::Complex64;

use crate::error::{Result, SpectralError};

/// Squared Euclidean distance of `(r, c)` from the kernel center.
#[inline]
fn distance_sq(r: usize, c: usize, center: (usize, usize)) -> f64 {
    let dy = r as f64 - center.0 as f64;
    let dx = c as f64 - center.1 as f64;
    dy * dy + dx * dx
}

/// Gaussian low-pass kernel `exp(-d² / (2σ²))`.
///
/// The center entry is exactly 1 and every entry lies in `(0, 1]` (entries
/// far from the center may underflow to 0 for small sigma).
///
/// # Errors
/// [`SpectralError::InvalidParameter`] unless `sigma` is finite and positive.
pub fn gaussian_lpf(dim: (usize, usize), sigma: f64) -> Result<Array2<f64>> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(SpectralError::invalid(format!(
            "gaussian sigma must be finite and > 0, got {sigma}"
        )));
    }
    let center = (dim.0 / 2, dim.1 / 2);
    let d0 = 2.0 * sigma * sigma;
    Ok(Array2::from_shape_fn(dim, |(r, c)| {
        (-distance_sq(r, c, center) / d0).exp()
    }))
}

/// Ideal low-pass kernel: 1 within `radius` of the center (inclusive), 0
/// elsewhere.
///
/// # Errors
/// [`SpectralError::InvalidParameter`] if `radius` is NaN or infinite.
pub fn ideal_lpf(dim: (usize, usize), radius: f64) -> Result<Array2<f64>> {
    if !radius.is_finite() {
        return Err(SpectralError::invalid(format!(
            "ideal cutoff radius must be finite, got {radius}"
        )));
    }
    let center = (dim.0 / 2, dim.1 / 2);
    let mut kernel = Array2::<f64>::zeros(dim);
    for ((r, c), value) in kernel.indexed_iter_mut() {
        if distance_sq(r, c, center).sqrt() <= radius {
            *value = 1.0;
        }
    }
    Ok(kernel)
}

/// Point-wise product of a centered spectrum and a kernel of equal extent.
///
/// # Errors
/// [`SpectralError::DimensionMismatch`] if the extents differ.
pub fn apply_filter(
    spectrum: ArrayView2<Complex64>,
    kernel: ArrayView2<f64>,
) -> Result<Array2<Complex64>> {
    if spectrum.dim() != kernel.dim() {
        return Err(SpectralError::DimensionMismatch {
            left: spectrum.dim(),
            right: kernel.dim(),
        });
    }
    Ok(Zip::from(&spectrum)
        .and(&kernel)
        .map_collect(|&value, &weight| value.scale(weight)))
}

/// Low-pass filter selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LowPassFilter {
    /// Gaussian roll-off with standard deviation `sigma` (in bins).
    Gaussian { sigma: f64 },
    /// Hard cutoff at `radius` bins from the center.
    Ideal { radius: f64 },
}

impl LowPassFilter {
    /// Build the kernel for a spectrum of extent `dim`.
    pub fn kernel(&self, dim: (usize, usize)) -> Result<Array2<f64>> {
        match *self {
            LowPassFilter::Gaussian { sigma } => gaussian_lpf(dim, sigma),
            LowPassFilter::Ideal { radius } => ideal_lpf(dim, radius),
        }
    }

    /// Check the filter parameter without building a kernel.
    pub fn validate(&self) -> Result<()> {
        self.kernel((1, 1)).map(|_| ())
    }
}
