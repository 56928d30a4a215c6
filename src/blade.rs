//! Weighted basis blades and the combinatorics of their geometric product.
//!
//! A blade is a real coefficient attached to an ascending sequence of basis
//! indices; its grade is the number of indices. The geometric product of two
//! blades is computed directly: the surviving basis is the symmetric
//! difference of the two index sets, the sign is the parity of the adjacent
//! transpositions needed to merge the two ascending sequences, and every
//! index present on both sides contracts to its metric weight.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::bundle::GradeBundle;
use crate::element::Element;
use crate::metric;
use crate::multivector::Multivector;
use crate::{GaError, Result};

/// Inline storage for basis indices; most blades in practice are low-grade.
pub(crate) type BasisIndices = SmallVec<[usize; 4]>;

/// A scaled basis element: `coeff · e_{i₁} e_{i₂} … e_{iₖ}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blade {
    coeff: f64,
    basis: BasisIndices,
}

impl Blade {
    /// Blade from a coefficient and a collection of basis indices.
    ///
    /// Indices are sorted. A duplicate-free basis is a precondition this
    /// constructor does not repair; blades produced by the algebra itself
    /// always carry unique indices (duplicates annihilate into metric
    /// weights during multiplication).
    pub fn new(coeff: f64, indices: &[usize]) -> Self {
        let mut basis = BasisIndices::from_slice(indices);
        basis.sort_unstable();
        Self { coeff, basis }
    }

    /// Grade-0 blade: empty basis, bare coefficient.
    pub fn scalar(value: f64) -> Self {
        Self {
            coeff: value,
            basis: BasisIndices::new(),
        }
    }

    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Number of basis indices.
    pub fn grade(&self) -> usize {
        self.basis.len()
    }

    /// Same basis, replaced coefficient.
    pub(crate) fn with_coeff(&self, coeff: f64) -> Blade {
        Blade {
            coeff,
            basis: self.basis.clone(),
        }
    }

    pub fn scale(&self, factor: f64) -> Blade {
        self.with_coeff(self.coeff * factor)
    }

    pub fn negate(&self) -> Blade {
        self.with_coeff(-self.coeff)
    }

    /// Reversion: sign `(-1)^{k(k-1)/2}` for grade `k`.
    pub fn reverse(&self) -> Blade {
        self.scale(reversion_sign(self.grade()))
    }

    /// Grade involution: sign `(-1)^k` for grade `k`.
    pub fn involute(&self) -> Blade {
        if self.grade() % 2 == 1 {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Sum with another blade.
    ///
    /// Same basis ⇒ coefficients add; same grade ⇒ a two-blade bundle;
    /// different grades ⇒ a two-bundle multivector.
    pub fn add(&self, other: &Blade) -> Element {
        if self.basis == other.basis {
            Element::Blade(self.with_coeff(self.coeff + other.coeff))
        } else if self.grade() == other.grade() {
            let mut blades = vec![self.clone(), other.clone()];
            blades.sort_by(|a, b| a.basis.cmp(&b.basis));
            Element::Bundle(GradeBundle::from_parts(Some(self.grade()), blades))
        } else {
            let mv = Multivector::empty()
                .absorb(&GradeBundle::singleton(self.clone()))
                .absorb(&GradeBundle::singleton(other.clone()));
            Element::Multivector(mv)
        }
    }

    /// Geometric product under the active metric.
    pub fn geometric(&self, other: &Blade) -> Blade {
        // Parity of the adjacent transpositions needed to merge the two
        // ascending index sequences: each left index moves past every right
        // index strictly below it.
        let mut swaps = 0usize;
        for &l in &self.basis {
            swaps += other.basis.iter().take_while(|&&r| r < l).count();
        }
        let sign = if swaps % 2 == 0 { 1.0 } else { -1.0 };

        // Shared indices annihilate into their metric weight; the surviving
        // basis is the symmetric difference, already ascending.
        let mut weight = 1.0;
        let mut basis = BasisIndices::new();
        let (mut i, mut j) = (0, 0);
        while i < self.basis.len() && j < other.basis.len() {
            match self.basis[i].cmp(&other.basis[j]) {
                Ordering::Less => {
                    basis.push(self.basis[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    basis.push(other.basis[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    weight *= metric::weight_of(self.basis[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        basis.extend_from_slice(&self.basis[i..]);
        basis.extend_from_slice(&other.basis[j..]);

        Blade {
            coeff: self.coeff * other.coeff * sign * weight,
            basis,
        }
    }

    /// Whether the self inner product is non-zero under the active metric.
    pub fn is_invertible(&self) -> bool {
        self.inverse_denominator() != 0.0
    }

    /// Multiplicative inverse: the same basis, coefficient
    /// `1 / (coeff · Π metric(basis) · squareSign)` where `squareSign` is
    /// the blade's reversion sign.
    pub fn inverse(&self) -> Result<Blade> {
        let denom = self.inverse_denominator();
        if denom == 0.0 {
            return Err(GaError::NotInvertible(format!(
                "blade {} has zero self inner product",
                self
            )));
        }
        Ok(self.with_coeff(1.0 / denom))
    }

    /// Product with `other`'s inverse.
    pub fn quotient(&self, other: &Blade) -> Result<Blade> {
        Ok(self.geometric(&other.inverse()?))
    }

    /// The blade itself at its own grade, the zero sentinel elsewhere.
    pub fn grade_part(&self, grade: usize) -> Element {
        if grade == self.grade() {
            Element::Blade(self.clone())
        } else {
            Element::Zero
        }
    }

    fn inverse_denominator(&self) -> f64 {
        let mut weight = 1.0;
        for &i in &self.basis {
            weight *= metric::weight_of(i);
        }
        self.coeff * weight * reversion_sign(self.grade())
    }
}

/// Sign of reversing a grade-`k` blade: `(-1)^{k(k-1)/2}`.
pub(crate) fn reversion_sign(grade: usize) -> f64 {
    if (grade * grade.saturating_sub(1) / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl fmt::Display for Blade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.basis.is_empty() {
            return write!(f, "{}", self.coeff);
        }
        write!(f, "{}·", self.coeff)?;
        for &i in &self.basis {
            write!(f, "e{}", i)?;
        }
        Ok(())
    }
}
