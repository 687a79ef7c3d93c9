//! Sample trait abstraction for byte, integer and complex elements.
//!
//! Every transform in this crate is generic over the element representation
//! of its input (forward path) or output (inverse path). The three supported
//! representations are resolved at compile time through [`Sample`], with
//! [`ElementKind`] as the explicit discriminator for logging and dispatch.

use num_complex::Complex64;
use num_traits::Zero;
use std::fmt::{self, Debug, Display};

/// Discriminator for the element representations accepted by the engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit unsigned samples (grayscale images).
    Byte,
    /// 32-bit signed integer samples.
    Int,
    /// Double precision complex values.
    Complex,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Byte => "byte",
            ElementKind::Int => "int",
            ElementKind::Complex => "complex",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element types that can enter or leave a transform.
///
/// - `to_complex` widens a sample onto the complex plane (zero imaginary part
///   for real samples).
/// - `from_complex` narrows a transform result back to the sample type.
pub trait Sample: Copy + Zero + Debug + Send + Sync + 'static {
    /// The representation tag for this type.
    const KIND: ElementKind;

    /// Widen to a complex value.
    fn to_complex(self) -> Complex64;

    /// Narrow a complex value to this representation.
    fn from_complex(value: Complex64) -> Self;
}

impl Sample for u8 {
    const KIND: ElementKind = ElementKind::Byte;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(f64::from(self), 0.0)
    }

    /// Truncates the real part toward zero. Out-of-range values saturate at
    /// 0 and 255, NaN maps to 0.
    #[inline]
    fn from_complex(value: Complex64) -> Self {
        value.re as u8
    }
}

impl Sample for i32 {
    const KIND: ElementKind = ElementKind::Int;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(f64::from(self), 0.0)
    }

    /// Truncates the real part toward zero, saturating at the i32 bounds.
    #[inline]
    fn from_complex(value: Complex64) -> Self {
        value.re as i32
    }
}

impl Sample for Complex64 {
    const KIND: ElementKind = ElementKind::Complex;

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }

    #[inline]
    fn from_complex(value: Complex64) -> Self {
        value
    }
}
