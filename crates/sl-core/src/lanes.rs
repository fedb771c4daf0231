//! Fixed-width 4-lane vector.
//!
//! Each lane is an independent scalar channel (x/y/z/w, r/g/b/a, ...). All
//! arithmetic is lane-wise; nothing here couples one lane to another.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{SlError, SlResult};
use crate::numeric::{Real, Tolerances, nearly_equal};

/// Number of lanes carried by [`Lanes4`].
pub const LANES: usize = 4;

/// Four independent `f64` channels evaluated in lock-step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Lanes4(pub [Real; LANES]);

impl Lanes4 {
    pub const ZERO: Lanes4 = Lanes4::splat(0.0);
    pub const ONE: Lanes4 = Lanes4::splat(1.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self([x, y, z, w])
    }

    /// Every lane set to `value`.
    #[inline]
    pub const fn splat(value: Real) -> Self {
        Self([value; LANES])
    }

    /// Build from up to four values; missing lanes are zero.
    pub fn from_slice(values: &[Real]) -> SlResult<Self> {
        if values.len() > LANES {
            return Err(SlError::LaneCount {
                expected: LANES,
                got: values.len(),
            });
        }
        let mut lanes = [0.0; LANES];
        lanes[..values.len()].copy_from_slice(values);
        Ok(Self(lanes))
    }

    #[inline]
    pub const fn to_array(self) -> [Real; LANES] {
        self.0
    }

    #[inline]
    pub fn map(self, f: impl Fn(Real) -> Real) -> Self {
        Self(self.0.map(f))
    }

    #[inline]
    pub fn map2(self, other: Self, f: impl Fn(Real, Real) -> Real) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        self.0.iter().copied()
    }

    /// True when every lane is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Largest absolute lane value.
    pub fn max_abs(&self) -> Real {
        self.0.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Lane-wise [`nearly_equal`].
    pub fn nearly_equal(&self, other: &Self, tol: Tolerances) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| nearly_equal(*a, *b, tol))
    }
}

impl From<[Real; LANES]> for Lanes4 {
    fn from(value: [Real; LANES]) -> Self {
        Self(value)
    }
}

impl From<Lanes4> for [Real; LANES] {
    fn from(value: Lanes4) -> Self {
        value.0
    }
}

impl Index<usize> for Lanes4 {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        &self.0[index]
    }
}

impl IndexMut<usize> for Lanes4 {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        &mut self.0[index]
    }
}

impl Add for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn add(self, rhs: Lanes4) -> Lanes4 {
        self.map2(rhs, |a, b| a + b)
    }
}

impl Sub for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn sub(self, rhs: Lanes4) -> Lanes4 {
        self.map2(rhs, |a, b| a - b)
    }
}

impl Neg for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn neg(self) -> Lanes4 {
        self.map(|a| -a)
    }
}

impl Mul for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn mul(self, rhs: Lanes4) -> Lanes4 {
        self.map2(rhs, |a, b| a * b)
    }
}

impl Mul<Real> for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn mul(self, rhs: Real) -> Lanes4 {
        self.map(|a| a * rhs)
    }
}

impl Mul<Lanes4> for Real {
    type Output = Lanes4;

    #[inline]
    fn mul(self, rhs: Lanes4) -> Lanes4 {
        rhs * self
    }
}

impl Div<Real> for Lanes4 {
    type Output = Lanes4;

    #[inline]
    fn div(self, rhs: Real) -> Lanes4 {
        self.map(|a| a / rhs)
    }
}
