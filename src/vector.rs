//! Compact grade-1 elements with direct coefficient-array arithmetic.

use std::fmt;

use crate::blade::Blade;
use crate::bundle::GradeBundle;
use crate::metric;
use crate::{GaError, Result};

/// A grade-1 element stored as a coefficient array, index = basis position.
///
/// Redundant with a grade-1 [`GradeBundle`] but kept distinct: vectors
/// generate the algebra, and the array form skips blade bookkeeping for the
/// common scale/sum/dot operations. Mixed-length arithmetic is rejected,
/// never padded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    coeffs: Vec<f64>,
}

impl Vector {
    pub fn new(coeffs: &[f64]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Self {
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        }
    }

    pub fn negate(&self) -> Vector {
        self.scale(-1.0)
    }

    /// Componentwise sum; the lengths must match.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Self {
            coeffs: self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Sum of pairwise coefficient products; the lengths must match.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Reversion of a vector is the identity.
    pub fn reverse(&self) -> Vector {
        self.clone()
    }

    /// Grade involution negates (vectors are odd).
    pub fn involute(&self) -> Vector {
        self.negate()
    }

    /// Whether the inverse denominator is non-zero under the active metric.
    pub fn is_invertible(&self) -> bool {
        self.inverse_denominator() != 0.0
    }

    /// Reciprocal scaling by `dot(self, self)` times the cumulative metric
    /// weight of the spanned indices.
    pub fn inverse(&self) -> Result<Vector> {
        let denom = self.inverse_denominator();
        if denom == 0.0 {
            return Err(GaError::NotInvertible(format!(
                "vector {} has zero self inner product",
                self
            )));
        }
        Ok(self.scale(1.0 / denom))
    }

    /// One grade-1 blade per non-zero coefficient.
    pub fn to_bundle(&self) -> GradeBundle {
        let blades: Vec<Blade> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0.0)
            .map(|(i, &c)| Blade::new(c, &[i]))
            .collect();
        if blades.is_empty() {
            GradeBundle::empty()
        } else {
            GradeBundle::from_parts(Some(1), blades)
        }
    }

    fn inverse_denominator(&self) -> f64 {
        // dot(self, self) never faults: the lengths trivially match.
        let dot: f64 = self.coeffs.iter().map(|c| c * c).sum();
        let mut weight = 1.0;
        for i in 0..self.coeffs.len() {
            weight *= metric::weight_of(i);
        }
        dot * weight
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(GaError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{with_metric, Metric};

    #[test]
    fn test_add_and_dot() {
        let u = Vector::new(&[1.0, 2.0, 3.0]);
        let v = Vector::new(&[4.0, 5.0, 6.0]);
        assert_eq!(u.add(&v).unwrap(), Vector::new(&[5.0, 7.0, 9.0]));
        assert_eq!(u.dot(&v).unwrap(), 32.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let u = Vector::new(&[1.0, 2.0]);
        let v = Vector::new(&[1.0, 2.0, 3.0]);
        assert_eq!(
            u.add(&v).unwrap_err(),
            GaError::LengthMismatch { left: 2, right: 3 }
        );
        assert!(u.dot(&v).is_err());
    }

    #[test]
    fn test_reverse_is_identity() {
        let v = Vector::new(&[1.0, -2.0]);
        assert_eq!(v.reverse(), v);
    }

    #[test]
    fn test_involute_negates() {
        let v = Vector::new(&[1.0, -2.0]);
        assert_eq!(v.involute(), Vector::new(&[-1.0, 2.0]));
    }

    #[test]
    fn test_inverse() {
        let v = Vector::new(&[2.0, 0.0]);
        let inv = v.inverse().unwrap();
        assert_eq!(inv, Vector::new(&[0.5, 0.0]));
        assert_eq!(v.dot(&inv).unwrap(), 1.0);
    }

    #[test]
    fn test_inverse_uses_cumulative_metric_weight() {
        with_metric(Metric::new(&[-1.0, 1.0]), || {
            let v = Vector::new(&[2.0, 0.0]);
            // denominator = dot · metric(0) · metric(1) = 4 · -1 · 1
            assert_eq!(v.inverse().unwrap(), Vector::new(&[-0.5, 0.0]));
        });
    }

    #[test]
    fn test_zero_vector_not_invertible() {
        let v = Vector::new(&[0.0, 0.0]);
        assert!(!v.is_invertible());
        assert!(matches!(v.inverse(), Err(GaError::NotInvertible(_))));
    }

    #[test]
    fn test_to_bundle_skips_zero_coefficients() {
        let v = Vector::new(&[1.0, 0.0, 3.0]);
        let bundle = v.to_bundle();
        assert_eq!(bundle.grade(), Some(1));
        assert_eq!(bundle.blades().len(), 2);
        assert_eq!(bundle.blades()[0], Blade::new(1.0, &[0]));
        assert_eq!(bundle.blades()[1], Blade::new(3.0, &[2]));

        assert!(Vector::new(&[0.0]).to_bundle().is_empty());
    }
}
