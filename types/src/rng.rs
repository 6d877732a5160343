//! Uniform random source abstraction.
//!
//! Every generating function in this crate takes a `RandomSource` by mutable
//! reference instead of reaching for ambient RNG state. Production code hands
//! in a closure over whatever RNG it owns; tests hand in scripted sequences.

/// A source of uniform random samples in `[0, 1)`.
///
/// Implementations must stay inside the half-open unit interval; a sample at
/// or above 1.0 violates the contract of the index arithmetic built on top
/// of this trait.
pub trait RandomSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Any `FnMut() -> f64` closure is a source, which keeps call sites short:
/// `pick(&items, &mut || 0.25)`.
impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}
