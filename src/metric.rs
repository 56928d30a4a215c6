//! Metric configuration: the signed weight each basis vector squares to.
//!
//! Every product computation consults the *active* metric, resolved in two
//! layers:
//! - a durable, process-wide default ([`set_metric`] / [`reset_metric`]);
//! - a per-thread override stack, installed for the dynamic extent of a
//!   scope by [`MetricGuard`] or [`with_metric`].
//!
//! Threads only ever observe their own override stacks, so concurrent
//! computations under different metrics do not interfere.

use std::cell::RefCell;
use std::sync::OnceLock;

use parking_lot::RwLock;
use smallvec::SmallVec;

/// An ordered sequence of signed weights indexed by basis position.
///
/// Any index beyond the stored weights defaults to `+1.0`, so the empty
/// metric is the Euclidean metric of every dimension at once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    weights: SmallVec<[f64; 4]>,
}

impl Metric {
    /// Metric with the given leading weights.
    pub fn new(weights: &[f64]) -> Self {
        Self {
            weights: SmallVec::from_slice(weights),
        }
    }

    /// The all-`+1` metric (no stored weights).
    pub fn euclidean() -> Self {
        Self {
            weights: SmallVec::new(),
        }
    }

    /// Metric of signature (p, q): `p` basis vectors squaring to `+1`
    /// followed by `q` squaring to `-1`.
    pub fn signature(p: usize, q: usize) -> Self {
        let mut weights = SmallVec::with_capacity(p + q);
        weights.extend(std::iter::repeat(1.0).take(p));
        weights.extend(std::iter::repeat(-1.0).take(q));
        Self { weights }
    }

    /// Weight of a basis index. Out of range ⇒ `+1.0`.
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(1.0)
    }

    /// The explicitly stored weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::euclidean()
    }
}

static GLOBAL_METRIC: OnceLock<RwLock<Metric>> = OnceLock::new();

fn global_metric() -> &'static RwLock<Metric> {
    GLOBAL_METRIC.get_or_init(|| RwLock::new(Metric::euclidean()))
}

thread_local! {
    static SCOPED_METRICS: RefCell<Vec<Metric>> = const { RefCell::new(Vec::new()) };
}

/// Durably replace the process-wide default metric.
pub fn set_metric(metric: Metric) {
    *global_metric().write() = metric;
}

/// Restore the process-wide default metric to Euclidean.
pub fn reset_metric() {
    *global_metric().write() = Metric::euclidean();
}

/// The metric visible to the current thread: the innermost scoped override
/// if one is installed, otherwise the process-wide default.
pub fn active_metric() -> Metric {
    SCOPED_METRICS
        .with(|stack| stack.borrow().last().cloned())
        .unwrap_or_else(|| global_metric().read().clone())
}

/// Weight of a single basis index under the active metric.
pub(crate) fn weight_of(index: usize) -> f64 {
    SCOPED_METRICS
        .with(|stack| stack.borrow().last().map(|m| m.weight(index)))
        .unwrap_or_else(|| global_metric().read().weight(index))
}

/// RAII guard installing a scoped metric override on the current thread.
///
/// The previous metric becomes visible again when the guard is dropped,
/// on every exit path.
///
/// # Example
/// ```
/// use gradus::{blade, scalar, Metric, MetricGuard};
///
/// {
///     let _guard = MetricGuard::new(Metric::new(&[-1.0]));
///     // e0 squares to -1 inside this scope
///     assert_eq!(blade(1.0, &[0]).product(&blade(1.0, &[0])), scalar(-1.0));
/// }
/// // Guard dropped: back to the Euclidean default
/// assert_eq!(blade(1.0, &[0]).product(&blade(1.0, &[0])), scalar(1.0));
/// ```
pub struct MetricGuard {
    _private: (),
}

impl MetricGuard {
    /// Push `metric` onto the current thread's override stack.
    pub fn new(metric: Metric) -> Self {
        SCOPED_METRICS.with(|stack| stack.borrow_mut().push(metric));
        Self { _private: () }
    }
}

impl Drop for MetricGuard {
    fn drop(&mut self) {
        SCOPED_METRICS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with `metric` active on the current thread, restoring the
/// previous metric afterwards (also when `f` panics).
pub fn with_metric<R>(metric: Metric, f: impl FnOnce() -> R) -> R {
    let _guard = MetricGuard::new(metric);
    f()
}
