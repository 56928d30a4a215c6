//! Multivectors: heterogeneous aggregates of grade bundles.
//!
//! The multivector is the most general rung; every binary operation between
//! mismatched representations is carried out here after promotion. The full
//! geometric product is the cartesian accumulation of bundle products, and
//! all grade-selective products follow the same pattern with the
//! corresponding bundle-level operator.

use std::fmt;

use crate::bundle::GradeBundle;
use crate::element::Element;
use crate::{GaError, Result};

/// A sum of grade bundles: ascending by grade, at most one bundle per
/// grade, no bundle empty. The empty multivector is the zero element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multivector {
    bundles: Vec<GradeBundle>,
}

impl Multivector {
    pub fn empty() -> Self {
        Self {
            bundles: Vec::new(),
        }
    }

    pub fn bundles(&self) -> &[GradeBundle] {
        &self.bundles
    }

    /// Grades present, ascending.
    pub fn grades(&self) -> Vec<usize> {
        self.bundles.iter().filter_map(|b| b.grade()).collect()
    }

    /// Fold a bundle in: merge into the bundle of the same grade if one
    /// exists, otherwise insert keeping grade order.
    pub fn absorb(&self, bundle: &GradeBundle) -> Multivector {
        let Some(grade) = bundle.grade() else {
            return self.clone(); // nothing to absorb from an empty bundle
        };
        let mut bundles = self.bundles.clone();
        match bundles.binary_search_by(|probe| probe.grade().cmp(&Some(grade))) {
            Ok(pos) => bundles[pos] = bundles[pos].merge(bundle),
            Err(pos) => bundles.insert(pos, bundle.clone()),
        }
        Self { bundles }
    }

    /// Fold every bundle of `other` in, one at a time.
    pub fn absorb_multivector(&self, other: &Multivector) -> Multivector {
        let mut acc = self.clone();
        for bundle in &other.bundles {
            acc = acc.absorb(bundle);
        }
        acc
    }

    pub fn scale(&self, factor: f64) -> Multivector {
        self.map(|b| b.scale(factor))
    }

    pub fn negate(&self) -> Multivector {
        self.map(GradeBundle::negate)
    }

    pub fn reverse(&self) -> Multivector {
        self.map(GradeBundle::reverse)
    }

    pub fn involute(&self) -> Multivector {
        self.map(GradeBundle::involute)
    }

    /// Reversion followed by grade involution.
    pub fn conjugate(&self) -> Multivector {
        self.reverse().involute()
    }

    /// Full geometric product: every bundle pair, each pair product itself a
    /// multivector, all of them absorbed.
    pub fn geometric(&self, other: &Multivector) -> Multivector {
        // A scalar right operand commutes: plain uniform scaling.
        if other.is_scalar() {
            return self.scale(other.scalar_part());
        }
        let mut acc = Multivector::empty();
        for l in &self.bundles {
            for r in &other.bundles {
                acc = acc.absorb_multivector(&l.geometric(r));
            }
        }
        acc
    }

    /// Symmetric inner product, accumulated bundle-pairwise.
    pub fn dot(&self, other: &Multivector) -> Multivector {
        self.accumulate(other, GradeBundle::dot)
    }

    /// Outer product, accumulated bundle-pairwise.
    pub fn wedge(&self, other: &Multivector) -> Multivector {
        self.accumulate(other, GradeBundle::wedge)
    }

    pub fn left_contraction(&self, other: &Multivector) -> Multivector {
        self.accumulate(other, GradeBundle::left_contraction)
    }

    pub fn right_contraction(&self, other: &Multivector) -> Multivector {
        self.accumulate(other, GradeBundle::right_contraction)
    }

    pub fn hestenes_dot(&self, other: &Multivector) -> Multivector {
        self.accumulate(other, GradeBundle::hestenes_dot)
    }

    /// The bundle of the requested grade, or the zero sentinel.
    pub fn grade_part(&self, grade: usize) -> Element {
        self.bundles
            .iter()
            .find(|b| b.grade() == Some(grade))
            .map(|b| Element::Bundle(b.clone()))
            .unwrap_or(Element::Zero)
    }

    /// Coefficient of the grade-0 component.
    pub fn scalar_part(&self) -> f64 {
        self.bundles
            .iter()
            .find(|b| b.grade() == Some(0))
            .and_then(|b| b.blades().first())
            .map_or(0.0, |b| b.coeff())
    }

    /// Exactly one bundle, and it is grade 0.
    pub fn is_scalar(&self) -> bool {
        self.bundles.len() == 1 && self.bundles[0].grade() == Some(0)
    }

    /// Whether the grade-0 part of the self product is non-zero.
    pub fn is_invertible(&self) -> bool {
        self.geometric(self).scalar_part() != 0.0
    }

    /// Reciprocal scaling by the scalar part of the self product.
    pub fn inverse(&self) -> Result<Multivector> {
        let norm = self.geometric(self).scalar_part();
        if norm == 0.0 {
            return Err(GaError::NotInvertible(format!(
                "multivector {} has no scalar self product",
                self
            )));
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Squared norm `⟨M · rev(M)⟩₀`.
    pub fn norm_squared(&self) -> f64 {
        self.geometric(&self.reverse()).scalar_part()
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().abs().sqrt()
    }

    /// Strip zero-coefficient blades and drop bundles that end up empty.
    pub(crate) fn strip_zeros(&self) -> Multivector {
        let bundles: Vec<GradeBundle> = self
            .bundles
            .iter()
            .map(|b| b.strip_zeros())
            .filter(|b| !b.is_empty())
            .collect();
        Self { bundles }
    }

    fn map(&self, f: impl Fn(&GradeBundle) -> GradeBundle) -> Multivector {
        Self {
            bundles: self.bundles.iter().map(f).collect(),
        }
    }

    fn accumulate(
        &self,
        other: &Multivector,
        op: impl Fn(&GradeBundle, &GradeBundle) -> Element,
    ) -> Multivector {
        let mut acc = Multivector::empty();
        for l in &self.bundles {
            for r in &other.bundles {
                if let Element::Bundle(bundle) = op(l, r) {
                    acc = acc.absorb(&bundle);
                }
            }
        }
        acc
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bundles.is_empty() {
            return write!(f, "0");
        }
        for (i, bundle) in self.bundles.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", bundle)?;
        }
        Ok(())
    }
}
