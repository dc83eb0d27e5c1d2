//! Scripted Random Source for deterministic conformance stubs.

use std::collections::VecDeque;

use super::RandomSource;

/// A Random Source that replays a fixed script of values.
///
/// Values are returned in order regardless of the requested range; once the
/// script is exhausted the fallback value is returned for every further draw.
/// Requested ranges are recorded so tests can assert on the exact bounds the
/// builders asked for.
///
/// A scripted value outside the requested range is returned unchanged. The
/// table builders detect and reject such contract violations.
///
/// # Examples
///
/// ```rust
/// use anstable_core::rng::{RandomSource, ScriptedSource};
///
/// let mut rng = ScriptedSource::new([2, 1]).with_fallback(0);
/// assert_eq!(rng.draw(0, 5), 2);
/// assert_eq!(rng.draw(0, 4), 1);
/// assert_eq!(rng.draw(0, 3), 0);
/// assert_eq!(rng.requests(), &[(0, 5), (0, 4), (0, 3)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<u64>,
    fallback: u64,
    requests: Vec<(u64, u64)>,
}

impl ScriptedSource {
    /// Creates a source replaying `values` in order, with a fallback of `0`.
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: 0,
            requests: Vec::new(),
        }
    }

    /// Sets the value returned once the script is exhausted.
    pub fn with_fallback(mut self, fallback: u64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.requests.len()
    }

    /// The `(low, high)` bounds of every draw, in call order.
    pub fn requests(&self) -> &[(u64, u64)] {
        &self.requests
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        self.requests.push((low, high));
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
