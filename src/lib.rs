//! # gradus
//!
//! Exact sparse geometric algebra over arbitrary-dimensional Clifford
//! algebras.
//!
//! Elements are stored as the simplest representation that holds them
//! exactly, on a ladder of rungs:
//! - [`Blade`]: a real coefficient attached to an ascending set of basis
//!   indices
//! - [`GradeBundle`]: a homogeneous-grade sum of blades
//! - [`Multivector`]: a sum of grade bundles across several grades
//! - [`Vector`]: a compact grade-1 coefficient array
//! - plain `f64` scalars and a zero sentinel, folded into [`Element`]
//!
//! Every binary operation unifies mismatched representations by promotion
//! and canonicalizes its result back down the ladder, so a product that
//! collapses to a single scalar *is* a scalar, not a one-entry multivector.
//!
//! The metric (how each basis vector squares) is configurable process-wide
//! and per-scope; see [`metric`].
//!
//! ```
//! use gradus::{blade, scalar};
//!
//! let e0 = blade(1.0, &[0]);
//! let e1 = blade(1.0, &[1]);
//!
//! // Anticommutativity of orthogonal basis vectors:
//! assert_eq!(e0.product(&e1), blade(1.0, &[0, 1]));
//! assert_eq!(e1.product(&e0), blade(-1.0, &[0, 1]));
//!
//! // Contraction collapses to a bare scalar:
//! assert_eq!(e0.product(&e0), scalar(1.0));
//! ```

pub mod basis;
pub mod blade;
pub mod bundle;
pub mod element;
pub mod error;
pub mod ladder;
pub mod metric;
pub mod multivector;
pub mod ops;
pub mod vector;

pub use basis::{blade, e0, e01, e012, e02, e1, e12, e2, scalar, vector};
pub use blade::Blade;
pub use bundle::GradeBundle;
pub use element::Element;
pub use error::GaError;
pub use ladder::{canonicalize, promote, to_multivector};
pub use metric::{
    active_metric, reset_metric, set_metric, with_metric, Metric, MetricGuard,
};
pub use multivector::Multivector;
pub use ops::{
    dual, inverse_pseudoscalar, pseudoscalar, reflect, sandwich, scalar_product,
};
pub use vector::Vector;

pub type Result<T> = std::result::Result<T, GaError>;
