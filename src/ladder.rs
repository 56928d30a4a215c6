//! The rung ladder: promotion, demotion and canonicalization.
//!
//! Representations form a chain Blade ≤ GradeBundle ≤ Multivector, with
//! Vector and Scalar as lateral specializations. Binary operations promote
//! mismatched operands up the chain; every result is canonicalized back
//! down: zero contributions stripped, then the value demoted to the
//! simplest exact equivalent. Canonicalization is idempotent.

use crate::blade::Blade;
use crate::bundle::GradeBundle;
use crate::element::Element;
use crate::multivector::Multivector;

/// Lift an element all the way to the most general rung.
pub fn to_multivector(element: &Element) -> Multivector {
    match element {
        Element::Zero => Multivector::empty(),
        Element::Scalar(s) => {
            Multivector::empty().absorb(&GradeBundle::singleton(Blade::scalar(*s)))
        }
        Element::Blade(b) => Multivector::empty().absorb(&GradeBundle::singleton(b.clone())),
        Element::Vector(v) => Multivector::empty().absorb(&v.to_bundle()),
        Element::Bundle(b) => Multivector::empty().absorb(b),
        Element::Multivector(m) => m.clone(),
    }
}

/// Lift an element one rung toward Multivector.
///
/// Scalars (and the zero sentinel) become empty-basis blades, blades and
/// vectors become bundles, bundles become multivectors. A multivector is
/// already at the top.
pub fn promote(element: &Element) -> Element {
    match element {
        Element::Zero => Element::Blade(Blade::scalar(0.0)),
        Element::Scalar(s) => Element::Blade(Blade::scalar(*s)),
        Element::Blade(b) => Element::Bundle(GradeBundle::singleton(b.clone())),
        Element::Vector(v) => Element::Bundle(v.to_bundle()),
        Element::Bundle(b) => Element::Multivector(Multivector::empty().absorb(b)),
        Element::Multivector(m) => Element::Multivector(m.clone()),
    }
}

/// Zero-strip, then demote to the simplest exact representation.
///
/// A one-bundle multivector collapses to that bundle, a one-blade bundle to
/// that blade, a basis-less blade to its bare coefficient, and anything
/// left entirely empty to numeric `0`.
pub fn canonicalize(element: Element) -> Element {
    match element {
        Element::Zero => Element::Zero,
        Element::Scalar(s) => Element::Scalar(s),
        Element::Vector(v) => Element::Vector(v),
        Element::Blade(b) => canonicalize_blade(b),
        Element::Bundle(b) => canonicalize_bundle(b),
        Element::Multivector(m) => canonicalize_multivector(m),
    }
}

fn canonicalize_blade(blade: Blade) -> Element {
    if blade.coeff() == 0.0 {
        return Element::Scalar(0.0);
    }
    if blade.grade() == 0 {
        return Element::Scalar(blade.coeff());
    }
    Element::Blade(blade)
}

fn canonicalize_bundle(bundle: GradeBundle) -> Element {
    let stripped = bundle.strip_zeros();
    match stripped.blades().len() {
        0 => Element::Scalar(0.0),
        1 => canonicalize_blade(stripped.blades()[0].clone()),
        _ => Element::Bundle(stripped),
    }
}

fn canonicalize_multivector(mv: Multivector) -> Element {
    let stripped = mv.strip_zeros();
    match stripped.bundles().len() {
        0 => Element::Scalar(0.0),
        1 => canonicalize_bundle(stripped.bundles()[0].clone()),
        _ => Element::Multivector(stripped),
    }
}
