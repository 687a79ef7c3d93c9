//! Image fidelity metrics for 8-bit grayscale images.

use ndarray::{ArrayView2, Zip};

use crate::error::{Result, SpectralError};

/// Peak sample value of an 8-bit image.
const PEAK_VALUE: f64 = 255.0;

/// MSE at or below this is treated as a perfect reconstruction.
const MSE_EPSILON: f64 = 1e-10;

/// PSNR reported for identical images instead of infinity.
pub const PSNR_CEILING: f64 = 100.0;

/// Mean squared error between two images of identical extent.
///
/// # Errors
/// [`SpectralError::DimensionMismatch`] if the extents differ.
pub fn mse(original: ArrayView2<u8>, reconstructed: ArrayView2<u8>) -> Result<f64> {
    if original.dim() != reconstructed.dim() {
        return Err(SpectralError::DimensionMismatch {
            left: original.dim(),
            right: reconstructed.dim(),
        });
    }
    if original.is_empty() {
        return Ok(0.0);
    }

    let mut sum = 0.0f64;
    Zip::from(&original)
        .and(&reconstructed)
        .for_each(|&a, &b| {
            let diff = f64::from(a.abs_diff(b));
            sum += diff * diff;
        });
    Ok(sum / original.len() as f64)
}

/// Peak signal-to-noise ratio in dB, `10·log10(255² / MSE)`.
///
/// Returns [`PSNR_CEILING`] when the MSE is numerically zero.
///
/// # Errors
/// [`SpectralError::DimensionMismatch`] if the extents differ.
pub fn psnr(original: ArrayView2<u8>, reconstructed: ArrayView2<u8>) -> Result<f64> {
    mse(original, reconstructed).map(psnr_from_mse)
}

/// PSNR for a precomputed MSE.
pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse <= MSE_EPSILON {
        return PSNR_CEILING;
    }
    10.0 * (PEAK_VALUE * PEAK_VALUE / mse).log10()
}

/// MSE and PSNR of a reconstruction against its original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FidelityReport {
    pub mse: f64,
    pub psnr: f64,
}

impl FidelityReport {
    /// Compare `reconstructed` against `original`.
    pub fn compare(original: ArrayView2<u8>, reconstructed: ArrayView2<u8>) -> Result<Self> {
        let mse = mse(original, reconstructed)?;
        Ok(Self {
            mse,
            psnr: psnr_from_mse(mse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};

    fn gradient(rows: usize, cols: usize) -> Array2<u8> {
        Array2::from_shape_fn((rows, cols), |(r, c)| ((r * 13 + c * 7) % 200) as u8)
    }

    #[test]
    fn test_mse_identical_is_zero() {
        let img = gradient(16, 12);
        assert_eq!(mse(img.view(), img.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_psnr_identical_is_ceiling() {
        let img = gradient(8, 8);
        assert_eq!(psnr(img.view(), img.view()).unwrap(), PSNR_CEILING);
    }

    #[test]
    fn test_mse_uniform_offset() {
        let img = gradient(10, 10);
        for c in [1u8, 5, 40] {
            let shifted = img.mapv(|v| v + c);
            assert_eq!(mse(img.view(), shifted.view()).unwrap(), f64::from(c) * f64::from(c));
            // symmetric in its arguments
            assert_eq!(mse(shifted.view(), img.view()).unwrap(), f64::from(c) * f64::from(c));
        }
    }

    #[test]
    fn test_mse_hand_computed() {
        let a = arr2(&[[0u8, 10], [20, 255]]);
        let b = arr2(&[[2u8, 10], [17, 250]]);
        // (4 + 0 + 9 + 25) / 4
        assert_eq!(mse(a.view(), b.view()).unwrap(), 9.5);
    }

    #[test]
    fn test_psnr_known_value() {
        // MSE 1 gives 20·log10(255)
        let a = Array2::<u8>::zeros((4, 4));
        let b = Array2::<u8>::ones((4, 4));
        let expected = 20.0 * 255f64.log10();
        assert!((psnr(a.view(), b.view()).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Array2::<u8>::zeros((4, 4));
        let b = Array2::<u8>::zeros((4, 5));
        assert_eq!(
            mse(a.view(), b.view()).unwrap_err(),
            SpectralError::DimensionMismatch {
                left: (4, 4),
                right: (4, 5)
            }
        );
        assert!(psnr(a.view(), b.view()).is_err());
        assert!(FidelityReport::compare(a.view(), b.view()).is_err());
    }

    #[test]
    fn test_report_matches_free_functions() {
        let a = gradient(8, 8);
        let b = a.mapv(|v| v.saturating_add(3));
        let report = FidelityReport::compare(a.view(), b.view()).unwrap();
        assert_eq!(report.mse, mse(a.view(), b.view()).unwrap());
        assert_eq!(report.psnr, psnr(a.view(), b.view()).unwrap());
    }
}
