//! Construction façade: weighted blades, vectors, and the named basis
//! blades of 2–3 dimensional algebras.

use crate::blade::Blade;
use crate::element::Element;
use crate::vector::Vector;

/// A weighted basis blade. Indices are sorted internally; a duplicate-free
/// index collection is the caller's responsibility.
pub fn blade(coeff: f64, indices: &[usize]) -> Element {
    Element::Blade(Blade::new(coeff, indices))
}

/// A grade-1 element from an ordered coefficient list.
pub fn vector(coeffs: &[f64]) -> Element {
    Element::Vector(Vector::new(coeffs))
}

/// A grade-0 element.
pub fn scalar(value: f64) -> Element {
    Element::Scalar(value)
}

pub fn e0() -> Element {
    blade(1.0, &[0])
}

pub fn e1() -> Element {
    blade(1.0, &[1])
}

pub fn e2() -> Element {
    blade(1.0, &[2])
}

pub fn e01() -> Element {
    blade(1.0, &[0, 1])
}

pub fn e02() -> Element {
    blade(1.0, &[0, 2])
}

pub fn e12() -> Element {
    blade(1.0, &[1, 2])
}

pub fn e012() -> Element {
    blade(1.0, &[0, 1, 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_blades_multiply_out() {
        assert_eq!(e0().product(&e1()), e01());
        assert_eq!(e0().product(&e2()), e02());
        assert_eq!(e1().product(&e2()), e12());
        assert_eq!(e01().product(&e2()), e012());
    }

    #[test]
    fn test_blade_constructor_sorts() {
        assert_eq!(blade(1.0, &[2, 1, 0]), e012());
    }

    #[test]
    fn test_vector_constructor() {
        let v = vector(&[1.0, 2.0]);
        assert_eq!(v.grades(), vec![1]);
    }
}
