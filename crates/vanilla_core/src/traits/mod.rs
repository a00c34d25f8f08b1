//! Core traits for generic numeric computation.
//!
//! The whole engine is written against one abstraction: a floating-point
//! scalar. Re-exporting `Float` here keeps downstream crates on a single
//! import path and leaves room to tighten the bound in one place later.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface over the standard floating-point
/// types (`f64`, `f32`). Every pricing routine in the workspace is generic
/// over it.
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, sqrt, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use vanilla_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount: f64 = compute_discount(0.05, 1.0);
/// assert!((discount - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
