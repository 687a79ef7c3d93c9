//! Radix-2 decimation-in-time FFT over one-dimensional sequences.
//!
//! The butterfly network never moves samples into bit-reversed order.
//! Instead every stage addresses its operands through the bit-reversal
//! table, and a final gather through the same table restores natural
//! frequency order. The table is an involution, so one table serves both
//! directions.

use ndarray::{Array1, ArrayBase, Data, Dimension};
use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::trace;

use crate::error::{Result, SpectralError};
use crate::sample::Sample;

/// Direction of a butterfly pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Twiddle exponent for butterfly position `i`. The inverse path uses the
    /// conjugate rotation.
    #[inline]
    fn exponent(self, i: usize) -> i64 {
        match self {
            Direction::Forward => i as i64,
            Direction::Inverse => -(i as i64),
        }
    }
}

/// Twiddle factor `W(n, k) = exp(-2πi·k/n)`.
///
/// `k` may be negative; `twiddle(n, -k)` is the complex conjugate of
/// `twiddle(n, k)`. `n` must be non-zero.
#[inline]
pub fn twiddle(n: usize, k: i64) -> Complex64 {
    let angle = -2.0 * PI * (k as f64) / (n as f64);
    Complex64::from_polar(1.0, angle)
}

/// Reverse the low `order` bits of `index`.
#[inline]
fn reverse_bits(index: usize, order: u32) -> usize {
    if order == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - order)
}

/// Bit-reversal permutation for a transform of length `2^order`.
///
/// Entry `i` holds `i` with its `order`-bit binary representation reversed.
pub fn bit_reversal_permutation(order: u32) -> Vec<usize> {
    let n = 1usize << order;
    (0..n).map(|i| reverse_bits(i, order)).collect()
}

/// Resolve the padded transform length for a sequence of `len` samples.
///
/// `requested` below `len` is a size error; a requested length that is not a
/// power of two is rounded up to the next one.
pub(crate) fn padded_length(requested: usize, len: usize) -> Result<usize> {
    if requested < len {
        return Err(SpectralError::Size {
            requested,
            actual: len,
        });
    }
    requested
        .max(1)
        .checked_next_power_of_two()
        .ok_or(SpectralError::Size {
            requested,
            actual: len,
        })
}

/// Butterfly network for one power-of-two length.
///
/// Built once per transform call and shared by every lane of that call
/// (all columns and rows of a 2D transform).
#[derive(Debug, Clone)]
pub(crate) struct Radix2Network {
    order: u32,
    reversed: Vec<usize>,
}

impl Radix2Network {
    /// Network for length `n`, which must be a power of two.
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        let order = n.trailing_zeros();
        Self {
            order,
            reversed: bit_reversal_permutation(order),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Forward transform of a lane already padded to `self.len()`.
    pub(crate) fn forward(&self, lane: Vec<Complex64>) -> Vec<Complex64> {
        self.butterflies(lane, Direction::Forward)
    }

    /// Inverse transform of a lane already padded to `self.len()`, scaled by
    /// `1/N`.
    pub(crate) fn inverse(&self, lane: Vec<Complex64>) -> Vec<Complex64> {
        let scale = 1.0 / self.len() as f64;
        let mut out = self.butterflies(lane, Direction::Inverse);
        for value in out.iter_mut() {
            *value = value.scale(scale);
        }
        out
    }

    fn butterflies(&self, mut work: Vec<Complex64>, direction: Direction) -> Vec<Complex64> {
        let n = self.len();
        debug_assert_eq!(work.len(), n);

        for m in 0..self.order {
            let half = 1usize << m;
            let span = half << 1;
            let stage_twiddles: Vec<Complex64> = (0..half)
                .map(|i| twiddle(span, direction.exponent(i)))
                .collect();

            for group in 0..n / span {
                let base = group * span;
                for (i, &w) in stage_twiddles.iter().enumerate() {
                    let top = self.reversed[base + i];
                    let bottom = self.reversed[base + i + half];
                    let a = work[top];
                    let b = w * work[bottom];
                    work[top] = a + b;
                    work[bottom] = a - b;
                }
            }
        }

        self.reversed.iter().map(|&src| work[src]).collect()
    }
}

/// Widen a 1-D array, or a 2-D array with a single row, into complex samples.
fn sequence_samples<T, S, D>(seq: &ArrayBase<S, D>) -> Result<Vec<Complex64>>
where
    T: Sample,
    S: Data<Elem = T>,
    D: Dimension,
{
    let shape = seq.shape();
    let is_sequence = matches!(shape, [_] | [1, _]);
    if !is_sequence {
        return Err(SpectralError::shape(format!(
            "expected a 1xL sequence, got shape {shape:?}"
        )));
    }
    if seq.is_empty() {
        return Err(SpectralError::shape("sequence must not be empty"));
    }
    Ok(seq.iter().map(|&v| v.to_complex()).collect())
}

fn run_1d<T, S, D>(seq: &ArrayBase<S, D>, n: usize, direction: Direction) -> Result<Array1<Complex64>>
where
    T: Sample,
    S: Data<Elem = T>,
    D: Dimension,
{
    let mut lane = sequence_samples(seq)?;
    let len = lane.len();
    let padded = padded_length(n, len)?;
    let kind = T::KIND;
    trace!(len, padded, %kind, ?direction, "1d transform");

    lane.resize(padded, Complex64::new(0.0, 0.0));
    let network = Radix2Network::new(padded);
    let out = match direction {
        Direction::Forward => network.forward(lane),
        Direction::Inverse => network.inverse(lane),
    };
    Ok(Array1::from_vec(out))
}

/// Forward 1D FFT of `seq` zero-padded to `n` points.
///
/// `seq` is either a 1-D array or a single-row 2-D array of any [`Sample`]
/// type. Returns the natural-order spectrum of length `n` (rounded up to a
/// power of two).
///
/// # Errors
/// - [`SpectralError::Shape`] if `seq` is not a single sequence or is empty.
/// - [`SpectralError::Size`] if `n` is smaller than the sequence length.
pub fn fft1d<T, S, D>(seq: &ArrayBase<S, D>, n: usize) -> Result<Array1<Complex64>>
where
    T: Sample,
    S: Data<Elem = T>,
    D: Dimension,
{
    run_1d(seq, n, Direction::Forward)
}

/// Inverse 1D FFT of `spectrum` zero-padded to `n` points, scaled by `1/n`.
///
/// Same shape and size contract as [`fft1d`].
pub fn ifft1d<T, S, D>(spectrum: &ArrayBase<S, D>, n: usize) -> Result<Array1<Complex64>>
where
    T: Sample,
    S: Data<Elem = T>,
    D: Dimension,
{
    run_1d(spectrum, n, Direction::Inverse)
}
