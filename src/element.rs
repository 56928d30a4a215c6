//! The polymorphic element type: one case per representation rung.
//!
//! Every operation of the algebra is an exhaustive match over the six
//! rungs. Binary operations between mismatched rungs promote both operands
//! to [`Multivector`] first; every result is canonicalized back to its
//! minimal representation. Equality treats the zero sentinel and numeric
//! zero as the same value; otherwise values are compared structurally, so
//! compare canonical forms.

use std::fmt;

use crate::blade::Blade;
use crate::bundle::GradeBundle;
use crate::ladder::{canonicalize, to_multivector};
use crate::multivector::Multivector;
use crate::vector::Vector;
use crate::{GaError, Result};

/// An element of the algebra, tagged by representation rung.
///
/// `Zero` is the additive identity at every grade simultaneously: it
/// carries no grade, absorbs products and is neutral in sums. It is
/// distinct from `Scalar(0.0)` but compares equal to it. Its
/// `is_scalar`/`is_monograde` answers are `true` by convention even though
/// the notion is conceptually ambiguous for a grade-free value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Zero,
    Scalar(f64),
    Blade(Blade),
    Vector(Vector),
    Bundle(GradeBundle),
    Multivector(Multivector),
}

impl Element {
    // =========================================================================
    // Unary operations
    // =========================================================================

    pub fn scale(&self, factor: f64) -> Element {
        let raw = match self {
            Element::Zero => return Element::Zero,
            Element::Scalar(s) => Element::Scalar(s * factor),
            Element::Blade(b) => Element::Blade(b.scale(factor)),
            Element::Vector(v) => Element::Vector(v.scale(factor)),
            Element::Bundle(b) => Element::Bundle(b.scale(factor)),
            Element::Multivector(m) => Element::Multivector(m.scale(factor)),
        };
        canonicalize(raw)
    }

    pub fn negate(&self) -> Element {
        match self {
            Element::Zero => Element::Zero, // zero is self-negating
            Element::Scalar(s) => Element::Scalar(-s),
            Element::Blade(b) => Element::Blade(b.negate()),
            Element::Vector(v) => Element::Vector(v.negate()),
            Element::Bundle(b) => Element::Bundle(b.negate()),
            Element::Multivector(m) => Element::Multivector(m.negate()),
        }
    }

    /// Reversion: each grade-`k` component picks up `(-1)^{k(k-1)/2}`.
    /// On a [`Vector`] this is the identity, as a vector-specific override.
    pub fn reverse(&self) -> Element {
        match self {
            Element::Zero => Element::Zero,
            Element::Scalar(s) => Element::Scalar(*s),
            Element::Blade(b) => Element::Blade(b.reverse()),
            Element::Vector(v) => Element::Vector(v.reverse()),
            Element::Bundle(b) => Element::Bundle(b.reverse()),
            Element::Multivector(m) => Element::Multivector(m.reverse()),
        }
    }

    /// Grade involution: each grade-`k` component picks up `(-1)^k`.
    pub fn involute(&self) -> Element {
        match self {
            Element::Zero => Element::Zero,
            Element::Scalar(s) => Element::Scalar(*s),
            Element::Blade(b) => Element::Blade(b.involute()),
            Element::Vector(v) => Element::Vector(v.involute()),
            Element::Bundle(b) => Element::Bundle(b.involute()),
            Element::Multivector(m) => Element::Multivector(m.involute()),
        }
    }

    /// Reversion followed by grade involution.
    pub fn conjugate(&self) -> Element {
        self.reverse().involute()
    }

    // =========================================================================
    // Binary operations
    // =========================================================================

    /// Sum. Fails only on mismatched [`Vector`] lengths.
    pub fn sum(&self, other: &Element) -> Result<Element> {
        let raw = match (self, other) {
            (Element::Zero, _) => other.clone(),
            (_, Element::Zero) => self.clone(),
            (Element::Scalar(a), Element::Scalar(b)) => Element::Scalar(a + b),
            // A bare number joins the algebra as an empty-basis blade.
            (Element::Scalar(s), _) => return Element::Blade(Blade::scalar(*s)).sum(other),
            (_, Element::Scalar(s)) => return self.sum(&Element::Blade(Blade::scalar(*s))),
            (Element::Blade(a), Element::Blade(b)) => a.add(b),
            (Element::Vector(a), Element::Vector(b)) => Element::Vector(a.add(b)?),
            (Element::Bundle(a), Element::Bundle(b)) if a.grade() == b.grade() => {
                Element::Bundle(a.absorb_bundle(b)?)
            }
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.absorb_multivector(b))
            }
            _ => Element::Multivector(
                to_multivector(self).absorb_multivector(&to_multivector(other)),
            ),
        };
        Ok(canonicalize(raw))
    }

    /// `self + (-other)`.
    pub fn difference(&self, other: &Element) -> Result<Element> {
        self.sum(&other.negate())
    }

    /// Geometric product.
    pub fn product(&self, other: &Element) -> Element {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Element::Zero,
            (Element::Scalar(a), Element::Scalar(b)) => return Element::Scalar(a * b),
            // Scalars commute with every element: uniform scaling.
            (Element::Scalar(s), _) => return other.scale(*s),
            (_, Element::Scalar(s)) => return self.scale(*s),
            (Element::Blade(a), Element::Blade(b)) => Element::Blade(a.geometric(b)),
            (Element::Bundle(a), Element::Bundle(b)) => Element::Multivector(a.geometric(b)),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.geometric(b))
            }
            _ => Element::Multivector(
                to_multivector(self).geometric(&to_multivector(other)),
            ),
        };
        canonicalize(raw)
    }

    /// Product with `other`'s inverse.
    pub fn quotient(&self, other: &Element) -> Result<Element> {
        Ok(self.product(&other.inverse()?))
    }

    /// Symmetric inner product: the `|gl − gr|` grade of the product.
    /// Fails only on mismatched [`Vector`] lengths.
    pub fn dot(&self, other: &Element) -> Result<Element> {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Ok(Element::Zero),
            (Element::Scalar(a), Element::Scalar(b)) => return Ok(Element::Scalar(a * b)),
            // |g − 0| selects the whole product: scaling.
            (Element::Scalar(s), _) => return Ok(other.scale(*s)),
            (_, Element::Scalar(s)) => return Ok(self.scale(*s)),
            (Element::Vector(a), Element::Vector(b)) => Element::Scalar(a.dot(b)?),
            (Element::Blade(a), Element::Blade(b)) => {
                GradeBundle::singleton(a.clone()).dot(&GradeBundle::singleton(b.clone()))
            }
            (Element::Bundle(a), Element::Bundle(b)) => a.dot(b),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.dot(b))
            }
            _ => Element::Multivector(to_multivector(self).dot(&to_multivector(other))),
        };
        Ok(canonicalize(raw))
    }

    /// Outer product: the `gl + gr` grade of the product.
    pub fn wedge(&self, other: &Element) -> Element {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Element::Zero,
            (Element::Scalar(a), Element::Scalar(b)) => return Element::Scalar(a * b),
            // 0 + g selects the whole product: scaling.
            (Element::Scalar(s), _) => return other.scale(*s),
            (_, Element::Scalar(s)) => return self.scale(*s),
            (Element::Blade(a), Element::Blade(b)) => {
                GradeBundle::singleton(a.clone()).wedge(&GradeBundle::singleton(b.clone()))
            }
            (Element::Bundle(a), Element::Bundle(b)) => a.wedge(b),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.wedge(b))
            }
            _ => Element::Multivector(to_multivector(self).wedge(&to_multivector(other))),
        };
        canonicalize(raw)
    }

    /// Left contraction: the `gr − gl` grade of the product, the zero
    /// sentinel when that would be negative.
    pub fn left_contraction(&self, other: &Element) -> Element {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Element::Zero,
            (Element::Blade(a), Element::Blade(b)) => GradeBundle::singleton(a.clone())
                .left_contraction(&GradeBundle::singleton(b.clone())),
            (Element::Bundle(a), Element::Bundle(b)) => a.left_contraction(b),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.left_contraction(b))
            }
            _ => Element::Multivector(
                to_multivector(self).left_contraction(&to_multivector(other)),
            ),
        };
        canonicalize(raw)
    }

    /// Right contraction: the `gl − gr` grade of the product, the zero
    /// sentinel when that would be negative.
    pub fn right_contraction(&self, other: &Element) -> Element {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Element::Zero,
            (Element::Blade(a), Element::Blade(b)) => GradeBundle::singleton(a.clone())
                .right_contraction(&GradeBundle::singleton(b.clone())),
            (Element::Bundle(a), Element::Bundle(b)) => a.right_contraction(b),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.right_contraction(b))
            }
            _ => Element::Multivector(
                to_multivector(self).right_contraction(&to_multivector(other)),
            ),
        };
        canonicalize(raw)
    }

    /// Hestenes inner product: the symmetric inner product, except that a
    /// scalar operand yields the zero sentinel.
    pub fn hestenes_dot(&self, other: &Element) -> Result<Element> {
        let raw = match (self, other) {
            (Element::Zero, _) | (_, Element::Zero) => return Ok(Element::Zero),
            (Element::Scalar(_), _) | (_, Element::Scalar(_)) => return Ok(Element::Zero),
            (Element::Vector(a), Element::Vector(b)) => Element::Scalar(a.dot(b)?),
            (Element::Blade(a), Element::Blade(b)) => GradeBundle::singleton(a.clone())
                .hestenes_dot(&GradeBundle::singleton(b.clone())),
            (Element::Bundle(a), Element::Bundle(b)) => a.hestenes_dot(b),
            (Element::Multivector(a), Element::Multivector(b)) => {
                Element::Multivector(a.hestenes_dot(b))
            }
            _ => Element::Multivector(
                to_multivector(self).hestenes_dot(&to_multivector(other)),
            ),
        };
        Ok(canonicalize(raw))
    }

    /// Multiplicative inverse. Fails on the zero sentinel and on any
    /// element whose relevant self inner product is zero.
    pub fn inverse(&self) -> Result<Element> {
        let raw = match self {
            Element::Zero => {
                return Err(GaError::NotInvertible(
                    "the zero element has no inverse".into(),
                ))
            }
            Element::Scalar(s) => {
                if *s == 0.0 {
                    return Err(GaError::NotInvertible("zero scalar".into()));
                }
                Element::Scalar(1.0 / s)
            }
            Element::Blade(b) => Element::Blade(b.inverse()?),
            Element::Vector(v) => Element::Vector(v.inverse()?),
            Element::Bundle(b) => Element::Bundle(b.inverse()?),
            Element::Multivector(m) => Element::Multivector(m.inverse()?),
        };
        Ok(canonicalize(raw))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The component of the requested grade, the zero sentinel when absent.
    pub fn grade_part(&self, grade: usize) -> Element {
        let raw = match self {
            Element::Zero => Element::Zero,
            Element::Scalar(_) => {
                if grade == 0 {
                    self.clone()
                } else {
                    Element::Zero
                }
            }
            Element::Blade(b) => b.grade_part(grade),
            Element::Vector(_) => {
                if grade == 1 {
                    self.clone()
                } else {
                    Element::Zero
                }
            }
            Element::Bundle(b) => {
                if b.grade() == Some(grade) {
                    self.clone()
                } else {
                    Element::Zero
                }
            }
            Element::Multivector(m) => m.grade_part(grade),
        };
        canonicalize(raw)
    }

    /// Every grade present, ascending. Empty for the zero sentinel.
    pub fn grades(&self) -> Vec<usize> {
        match self {
            Element::Zero => Vec::new(),
            Element::Scalar(_) => vec![0],
            Element::Blade(b) => vec![b.grade()],
            Element::Vector(_) => vec![1],
            Element::Bundle(b) => b.grade().into_iter().collect(),
            Element::Multivector(m) => m.grades(),
        }
    }

    /// The single grade of a homogeneous element; `None` for the zero
    /// sentinel and for a multivector spanning several grades.
    pub fn grade(&self) -> Option<usize> {
        let grades = self.grades();
        if grades.len() == 1 {
            Some(grades[0])
        } else {
            None
        }
    }

    pub fn is_scalar(&self) -> bool {
        match self {
            Element::Zero => true, // by convention; see the type docs
            Element::Scalar(_) => true,
            Element::Blade(b) => b.grade() == 0,
            Element::Vector(_) => false,
            Element::Bundle(b) => b.grade() == Some(0),
            Element::Multivector(m) => m.is_scalar(),
        }
    }

    /// Whether the element is confined to a single grade.
    pub fn is_monograde(&self) -> bool {
        match self {
            Element::Zero => true, // by convention; see the type docs
            Element::Multivector(m) => m.grades().len() <= 1,
            _ => true,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Element::Zero => true,
            Element::Scalar(s) => *s == 0.0,
            _ => false,
        }
    }

    pub fn is_invertible(&self) -> bool {
        match self {
            Element::Zero => false,
            Element::Scalar(s) => *s != 0.0,
            Element::Blade(b) => b.is_invertible(),
            Element::Vector(v) => v.is_invertible(),
            Element::Bundle(b) => b.is_invertible(),
            Element::Multivector(m) => m.is_invertible(),
        }
    }

    /// Squared norm `⟨x · rev(x)⟩₀`.
    pub fn norm_squared(&self) -> f64 {
        to_multivector(self).norm_squared()
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().abs().sqrt()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Zero, Element::Zero) => true,
            (Element::Zero, Element::Scalar(s)) | (Element::Scalar(s), Element::Zero) => {
                *s == 0.0
            }
            (Element::Scalar(a), Element::Scalar(b)) => a == b,
            (Element::Blade(a), Element::Blade(b)) => a == b,
            (Element::Vector(a), Element::Vector(b)) => a == b,
            (Element::Bundle(a), Element::Bundle(b)) => a == b,
            (Element::Multivector(a), Element::Multivector(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Scalar(value)
    }
}

impl From<Blade> for Element {
    fn from(blade: Blade) -> Self {
        Element::Blade(blade)
    }
}

impl From<Vector> for Element {
    fn from(vector: Vector) -> Self {
        Element::Vector(vector)
    }
}

impl From<GradeBundle> for Element {
    fn from(bundle: GradeBundle) -> Self {
        Element::Bundle(bundle)
    }
}

impl From<Multivector> for Element {
    fn from(mv: Multivector) -> Self {
        Element::Multivector(mv)
    }
}

// Operator sugar. The panicking variants exist for expression-heavy code;
// use the named methods to handle faults.

impl std::ops::Add for &Element {
    type Output = Element;
    fn add(self, rhs: &Element) -> Element {
        match self.sum(rhs) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}

impl std::ops::Sub for &Element {
    type Output = Element;
    fn sub(self, rhs: &Element) -> Element {
        match self.difference(rhs) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}

impl std::ops::Mul for &Element {
    type Output = Element;
    fn mul(self, rhs: &Element) -> Element {
        self.product(rhs)
    }
}

impl std::ops::Mul<f64> for &Element {
    type Output = Element;
    fn mul(self, factor: f64) -> Element {
        self.scale(factor)
    }
}

impl std::ops::Neg for &Element {
    type Output = Element;
    fn neg(self) -> Element {
        self.negate()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Zero => write!(f, "0"),
            Element::Scalar(s) => write!(f, "{}", s),
            Element::Blade(b) => write!(f, "{}", b),
            Element::Vector(v) => write!(f, "{}", v),
            Element::Bundle(b) => write!(f, "{}", b),
            Element::Multivector(m) => write!(f, "{}", m),
        }
    }
}
