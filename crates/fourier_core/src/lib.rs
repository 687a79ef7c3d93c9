//! Fourier Core Library
//!
//! Pure Rust radix-2 FFT engine for one-dimensional sequences and
//! two-dimensional images, with spectrum centering, low-pass kernel
//! synthesis and image fidelity metrics. Image decoding and display live
//! with the caller; this crate only exchanges numeric buffers.

pub mod error;
pub mod fft;
pub mod filters;
pub mod metrics;
pub mod reconstruction;
pub mod sample;
pub mod shift;
pub mod transforms;

// Re-export commonly used types at the crate root
pub use error::{Result, SpectralError};
pub use fft::{bit_reversal_permutation, fft1d, ifft1d, twiddle};
pub use filters::{apply_filter, gaussian_lpf, ideal_lpf, LowPassFilter};
pub use metrics::{mse, psnr, FidelityReport, PSNR_CEILING};
pub use num_complex::Complex64;
pub use reconstruction::{
    magnitude_image, reconstruct, refilter, FilteredReconstruction, Reconstruction,
    ReconstructionConfig,
};
pub use sample::{ElementKind, Sample};
pub use shift::{fftshift2d, ifftshift2d};
pub use transforms::{fft2d, ifft2d, padded_extent};
