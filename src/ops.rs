//! Derived operations built on the core operator set: duality, scalar
//! product, sandwich transforms.

use crate::blade::{reversion_sign, Blade};
use crate::element::Element;
use crate::Result;

/// Grade-0 part of the geometric product.
pub fn scalar_product(a: &Element, b: &Element) -> Element {
    a.product(b).grade_part(0)
}

/// The top-grade blade of a `dim`-dimensional algebra: basis `0..dim`,
/// coefficient 1.
pub fn pseudoscalar(dim: usize) -> Element {
    let indices: Vec<usize> = (0..dim).collect();
    crate::ladder::canonicalize(Element::Blade(Blade::new(1.0, &indices)))
}

/// The pseudoscalar scaled by the reversion sign of grade `dim`, which
/// inverts it under a unit metric.
pub fn inverse_pseudoscalar(dim: usize) -> Element {
    pseudoscalar(dim).scale(reversion_sign(dim))
}

/// Dual of `a` in a `dim`-dimensional algebra: `a · I⁻¹`.
pub fn dual(a: &Element, dim: usize) -> Element {
    a.product(&inverse_pseudoscalar(dim))
}

/// Sandwich product `r · x · rev(r)`, the rotor application.
pub fn sandwich(rotor: &Element, x: &Element) -> Element {
    rotor.product(x).product(&rotor.reverse())
}

/// Reflection of `x` through the hyperplane normal to `normal`:
/// `-normal · x · normal⁻¹`. Fails when the normal is not invertible.
pub fn reflect(normal: &Element, x: &Element) -> Result<Element> {
    Ok(normal.product(x).product(&normal.inverse()?).negate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::{blade, scalar, vector};

    #[test]
    fn test_scalar_product() {
        let a = blade(1.0, &[0]).sum(&blade(2.0, &[0, 1])).unwrap();
        let b = blade(3.0, &[0]);
        // ⟨(e0 + 2e01)·3e0⟩₀ = 3
        assert_eq!(scalar_product(&a, &b), scalar(3.0));
        assert_eq!(scalar_product(&blade(1.0, &[0]), &blade(1.0, &[1])), Element::Zero);
    }

    #[test]
    fn test_pseudoscalar() {
        assert_eq!(pseudoscalar(3), blade(1.0, &[0, 1, 2]));
        assert_eq!(pseudoscalar(0), scalar(1.0));
    }

    #[test]
    fn test_inverse_pseudoscalar_inverts() {
        for dim in 1..=5 {
            assert_eq!(
                pseudoscalar(dim).product(&inverse_pseudoscalar(dim)),
                scalar(1.0),
                "dim {}",
                dim
            );
        }
    }

    #[test]
    fn test_dual_in_three_dimensions() {
        // dual(e0) = e0 · (-e012) = -e12
        assert_eq!(dual(&blade(1.0, &[0]), 3), blade(-1.0, &[1, 2]));
        // dual of the pseudoscalar is the scalar 1
        assert_eq!(dual(&pseudoscalar(3), 3), scalar(1.0));
    }

    #[test]
    fn test_sandwich_with_unit_scalar_is_identity() {
        let x = vector(&[1.0, 2.0, 3.0]);
        assert_eq!(sandwich(&scalar(1.0), &x), x);
    }

    #[test]
    fn test_sandwich_rotates() {
        // Rotor for a 90° rotation in the e0e1 plane: (1 - e01)/√2.
        let half = std::f64::consts::FRAC_1_SQRT_2;
        let rotor = scalar(half).sum(&blade(-half, &[0, 1])).unwrap();
        let rotated = sandwich(&rotor, &blade(1.0, &[0]));
        // Expect e1 up to rounding.
        let residue = rotated.difference(&blade(1.0, &[1])).unwrap();
        assert!(residue.norm() < 1e-12, "residue {}", residue);
    }

    #[test]
    fn test_reflect() {
        let normal = blade(1.0, &[0]);
        // Component along the normal flips...
        assert_eq!(reflect(&normal, &blade(1.0, &[0])).unwrap(), blade(-1.0, &[0]));
        // ...perpendicular components are unchanged.
        assert_eq!(reflect(&normal, &blade(1.0, &[1])).unwrap(), blade(1.0, &[1]));
        assert!(reflect(&scalar(0.0), &normal).is_err());
    }
}
