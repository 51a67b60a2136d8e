//! # Stack configuration.
//!
//! Provides [`StackConfig`], the settings a [`Stack`](crate::Stack) is built with.
//!
//! ## Sentinel values
//! - `initial_capacity = 0` → no pre-allocation (grow on first push)

/// Settings for a [`Stack`](crate::Stack).
///
/// ## Field semantics
/// - `initial_capacity`: elements pre-allocated for the value sequence (`0` = none)
///
/// ## Example
/// ```rust
/// use stackcast::StackConfig;
///
/// let mut cfg = StackConfig::default();
/// assert_eq!(cfg.capacity_hint(), Some(64));
///
/// cfg.initial_capacity = 0;
/// assert_eq!(cfg.capacity_hint(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackConfig {
    /// Number of values to pre-allocate.
    pub initial_capacity: usize,
}

impl StackConfig {
    /// Returns the pre-allocation size as an `Option`.
    ///
    /// - `None` → no pre-allocation
    /// - `Some(n)` → reserve `n` values up front
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.initial_capacity == 0 {
            None
        } else {
            Some(self.initial_capacity)
        }
    }
}

impl Default for StackConfig {
    /// Default configuration:
    ///
    /// - `initial_capacity = 64`
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}
