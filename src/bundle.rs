//! Grade bundles: homogeneous-grade aggregates of blades.

use std::fmt;

use crate::blade::Blade;
use crate::element::Element;
use crate::multivector::Multivector;
use crate::{GaError, Result};

/// A sum of blades sharing a single grade.
///
/// Invariants: every blade has the bundle's grade, no two blades share a
/// basis, and blades are ordered lexicographically by basis. The empty
/// bundle carries no grade yet (`grade() == None`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeBundle {
    grade: Option<usize>,
    blades: Vec<Blade>,
}

impl GradeBundle {
    /// The empty bundle: no blades, grade not yet assigned.
    pub fn empty() -> Self {
        Self {
            grade: None,
            blades: Vec::new(),
        }
    }

    /// Bundle holding a single blade.
    pub fn singleton(blade: Blade) -> Self {
        Self {
            grade: Some(blade.grade()),
            blades: vec![blade],
        }
    }

    /// Trusted constructor for callers that already uphold the invariants.
    pub(crate) fn from_parts(grade: Option<usize>, blades: Vec<Blade>) -> Self {
        Self { grade, blades }
    }

    /// The bundle's grade, `None` while empty.
    pub fn grade(&self) -> Option<usize> {
        self.grade
    }

    pub fn blades(&self) -> &[Blade] {
        &self.blades
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    /// Fold a blade into this bundle.
    ///
    /// An empty bundle adopts the blade's grade; a blade with the same basis
    /// as an existing entry adds coefficients (a zero sum is kept and left
    /// to canonicalization); otherwise the blade is inserted in basis order.
    /// Absorbing a blade of a different grade than the established one is a
    /// caller error.
    pub fn absorb(&self, blade: Blade) -> Result<GradeBundle> {
        match self.grade {
            None => Ok(Self::singleton(blade)),
            Some(grade) if grade != blade.grade() => Err(GaError::GradeMismatch {
                expected: grade,
                got: blade.grade(),
            }),
            Some(grade) => {
                let mut blades = self.blades.clone();
                insert_blade(&mut blades, blade);
                Ok(Self {
                    grade: Some(grade),
                    blades,
                })
            }
        }
    }

    /// Fold every blade of `other` into this bundle, one at a time.
    pub fn absorb_bundle(&self, other: &GradeBundle) -> Result<GradeBundle> {
        let mut acc = self.clone();
        for blade in &other.blades {
            acc = acc.absorb(blade.clone())?;
        }
        Ok(acc)
    }

    /// Same-grade merge for callers that have already matched grades.
    pub(crate) fn merge(&self, other: &GradeBundle) -> GradeBundle {
        let mut blades = self.blades.clone();
        for blade in &other.blades {
            insert_blade(&mut blades, blade.clone());
        }
        Self {
            grade: self.grade.or(other.grade),
            blades,
        }
    }

    pub fn scale(&self, factor: f64) -> GradeBundle {
        self.map(|b| b.scale(factor))
    }

    pub fn negate(&self) -> GradeBundle {
        self.map(Blade::negate)
    }

    /// Elementwise blade reversion.
    pub fn reverse(&self) -> GradeBundle {
        self.map(Blade::reverse)
    }

    /// Elementwise grade involution.
    pub fn involute(&self) -> GradeBundle {
        self.map(Blade::involute)
    }

    /// Geometric product: every blade pair, accumulated through multivector
    /// absorption. A bundle product is not generally grade-homogeneous.
    pub fn geometric(&self, other: &GradeBundle) -> Multivector {
        let mut acc = Multivector::empty();
        for l in &self.blades {
            for r in &other.blades {
                acc = acc.absorb(&GradeBundle::singleton(l.geometric(r)));
            }
        }
        acc
    }

    /// Symmetric inner product: the `|gl − gr|` grade of the full product.
    pub fn dot(&self, other: &GradeBundle) -> Element {
        let (Some(gl), Some(gr)) = (self.grade, other.grade) else {
            return Element::Zero;
        };
        self.geometric(other).grade_part(gl.abs_diff(gr))
    }

    /// Outer product: the `gl + gr` grade of the full product.
    pub fn wedge(&self, other: &GradeBundle) -> Element {
        let (Some(gl), Some(gr)) = (self.grade, other.grade) else {
            return Element::Zero;
        };
        self.geometric(other).grade_part(gl + gr)
    }

    /// Left contraction: the `gr − gl` grade, the zero sentinel when that
    /// would be negative.
    pub fn left_contraction(&self, other: &GradeBundle) -> Element {
        let (Some(gl), Some(gr)) = (self.grade, other.grade) else {
            return Element::Zero;
        };
        if gl > gr {
            return Element::Zero;
        }
        self.geometric(other).grade_part(gr - gl)
    }

    /// Right contraction: the `gl − gr` grade, the zero sentinel when that
    /// would be negative.
    pub fn right_contraction(&self, other: &GradeBundle) -> Element {
        let (Some(gl), Some(gr)) = (self.grade, other.grade) else {
            return Element::Zero;
        };
        if gr > gl {
            return Element::Zero;
        }
        self.geometric(other).grade_part(gl - gr)
    }

    /// Hestenes inner product: the symmetric inner product, except that a
    /// scalar operand yields the zero sentinel.
    pub fn hestenes_dot(&self, other: &GradeBundle) -> Element {
        if self.grade == Some(0) || other.grade == Some(0) {
            return Element::Zero;
        }
        self.dot(other)
    }

    /// Whether the scalar part of the self product is non-zero.
    pub fn is_invertible(&self) -> bool {
        self.geometric(self).scalar_part() != 0.0
    }

    /// Reciprocal scaling by the scalar part of the self product.
    pub fn inverse(&self) -> Result<GradeBundle> {
        let norm = self.geometric(self).scalar_part();
        if norm == 0.0 {
            return Err(GaError::NotInvertible(format!(
                "bundle {} has no scalar self product",
                self
            )));
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Drop zero-coefficient blades; an emptied bundle loses its grade.
    pub(crate) fn strip_zeros(&self) -> GradeBundle {
        let blades: Vec<Blade> = self
            .blades
            .iter()
            .filter(|b| b.coeff() != 0.0)
            .cloned()
            .collect();
        let grade = if blades.is_empty() { None } else { self.grade };
        Self { grade, blades }
    }

    fn map(&self, f: impl Fn(&Blade) -> Blade) -> GradeBundle {
        Self {
            grade: self.grade,
            blades: self.blades.iter().map(f).collect(),
        }
    }
}

/// Insert keeping basis-lexicographic order; an existing entry with the same
/// basis absorbs the coefficient instead.
fn insert_blade(blades: &mut Vec<Blade>, blade: Blade) {
    match blades.binary_search_by(|probe| probe.basis().cmp(blade.basis())) {
        Ok(pos) => {
            let sum = blades[pos].coeff() + blade.coeff();
            blades[pos] = blades[pos].with_coeff(sum);
        }
        Err(pos) => blades.insert(pos, blade),
    }
}

impl fmt::Display for GradeBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.blades.is_empty() {
            return write!(f, "0");
        }
        for (i, blade) in self.blades.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", blade)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_adopts_grade() {
        let bundle = GradeBundle::empty();
        assert_eq!(bundle.grade(), None);
        let bundle = bundle.absorb(Blade::new(1.0, &[0, 1])).unwrap();
        assert_eq!(bundle.grade(), Some(2));
    }

    #[test]
    fn test_absorb_rejects_grade_mismatch() {
        let bundle = GradeBundle::singleton(Blade::new(1.0, &[0]));
        let err = bundle.absorb(Blade::new(1.0, &[0, 1])).unwrap_err();
        assert_eq!(err, GaError::GradeMismatch { expected: 1, got: 2 });
    }

    #[test]
    fn test_absorb_merges_same_basis() {
        let bundle = GradeBundle::singleton(Blade::new(1.0, &[0]))
            .absorb(Blade::new(2.5, &[0]))
            .unwrap();
        assert_eq!(bundle.blades().len(), 1);
        assert_eq!(bundle.blades()[0].coeff(), 3.5);
    }

    #[test]
    fn test_absorb_keeps_basis_order() {
        let bundle = GradeBundle::singleton(Blade::new(1.0, &[2]))
            .absorb(Blade::new(1.0, &[0]))
            .unwrap()
            .absorb(Blade::new(1.0, &[1]))
            .unwrap();
        let bases: Vec<&[usize]> = bundle.blades().iter().map(|b| b.basis()).collect();
        assert_eq!(bases, vec![&[0][..], &[1][..], &[2][..]]);
    }

    #[test]
    fn test_zero_sum_kept_for_canonicalization() {
        // Annihilating coefficients stay as an explicit zero entry here;
        // stripping is canonicalization's job.
        let bundle = GradeBundle::singleton(Blade::new(1.0, &[0]))
            .absorb(Blade::new(-1.0, &[0]))
            .unwrap();
        assert_eq!(bundle.blades().len(), 1);
        assert_eq!(bundle.blades()[0].coeff(), 0.0);
        assert!(bundle.strip_zeros().is_empty());
    }

    #[test]
    fn test_product_spans_grades() {
        // (e0 + e1)·(e0 + e1) = e0e0 + e1e1 + e0e1 + e1e0 = 2 + 0·e01.
        let sum = GradeBundle::singleton(Blade::new(1.0, &[0]))
            .absorb(Blade::new(1.0, &[1]))
            .unwrap();
        let product = sum.geometric(&sum);
        assert_eq!(product.grades(), vec![0, 2]);
        assert_eq!(product.scalar_part(), 2.0);
    }

    #[test]
    fn test_dot_and_wedge_select_grades() {
        let e0 = GradeBundle::singleton(Blade::new(1.0, &[0]));
        let e1 = GradeBundle::singleton(Blade::new(1.0, &[1]));
        assert_eq!(e0.dot(&e1), Element::Zero);
        assert_eq!(
            e0.wedge(&e1),
            Element::Bundle(GradeBundle::singleton(Blade::new(1.0, &[0, 1])))
        );
        assert_eq!(e0.dot(&e0), Element::Bundle(GradeBundle::singleton(Blade::scalar(1.0))));
    }

    #[test]
    fn test_contractions_clip_negative_grades() {
        let vector = GradeBundle::singleton(Blade::new(1.0, &[0]));
        let bivector = GradeBundle::singleton(Blade::new(1.0, &[0, 1]));
        // grade 2 ⌋ grade 1 would select grade -1.
        assert_eq!(bivector.left_contraction(&vector), Element::Zero);
        assert_eq!(vector.right_contraction(&bivector), Element::Zero);
        assert_eq!(
            vector.left_contraction(&bivector),
            Element::Bundle(GradeBundle::singleton(Blade::new(1.0, &[1])))
        );
    }

    #[test]
    fn test_hestenes_rejects_scalars() {
        let scalar = GradeBundle::singleton(Blade::scalar(3.0));
        let vector = GradeBundle::singleton(Blade::new(1.0, &[0]));
        assert_eq!(scalar.hestenes_dot(&vector), Element::Zero);
        assert_eq!(vector.hestenes_dot(&scalar), Element::Zero);
        assert_ne!(vector.hestenes_dot(&vector), Element::Zero);
    }

    #[test]
    fn test_inverse() {
        // (e0 + e1)² = 2, so the inverse is (e0 + e1)/2.
        let bundle = GradeBundle::singleton(Blade::new(1.0, &[0]))
            .absorb(Blade::new(1.0, &[1]))
            .unwrap();
        let inv = bundle.inverse().unwrap();
        assert_eq!(inv.blades()[0].coeff(), 0.5);
        assert_eq!(inv.blades()[1].coeff(), 0.5);

        let product = bundle.geometric(&inv);
        assert_eq!(product.scalar_part(), 1.0);
    }

    #[test]
    fn test_reverse_involute() {
        let bivector = GradeBundle::singleton(Blade::new(2.0, &[0, 1]));
        assert_eq!(bivector.reverse().blades()[0].coeff(), -2.0);
        assert_eq!(bivector.involute().blades()[0].coeff(), 2.0);
    }
}
