use rand::Rng;

/// Source of the random tie-breaking term added to every match score
///
/// The scorer scales samples by the configured jitter weight, so
/// implementations return a raw value in [0, 1). Keeping this behind a trait
/// lets tests swap in a fixed source and assert exact score bounds.
pub trait JitterSource: Send + Sync {
    /// Draw a sample uniformly from [0, 1)
    fn sample(&self) -> f64;
}

/// Production jitter source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic jitter source for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}
