// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Arithmetic contract for aggregations and counting ranges.
//!
//! The numeric type is chosen by the caller at compile time; nothing is
//! inferred from the elements of a sequence. Primitive integers and floats are
//! supported out of the box, and `ibig::IBig` with the `bigint` feature.

use core::ops::{Add, Mul, Sub};

/// A number with additive and multiplicative identities.
pub trait Numeric:
    Clone + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// `self + 1`
    #[must_use]
    fn successor(&self) -> Self {
        self.clone() + Self::one()
    }

    /// `self - 1`
    #[must_use]
    fn predecessor(&self) -> Self {
        self.clone() - Self::one()
    }
}

macro_rules! impl_numeric {
    ($zero:expr, $one:expr => $($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_numeric!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0 => f32, f64);

#[cfg(feature = "bigint")]
impl Numeric for ibig::IBig {
    fn zero() -> Self {
        ibig::IBig::from(0u8)
    }

    fn one() -> Self {
        ibig::IBig::from(1u8)
    }
}
