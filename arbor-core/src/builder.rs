//! Builder utilities for configuring Kruskal runs.
//!
//! Exposes the heap load strategy and the validation performed before a
//! [`Kruskal`] instance is constructed.

use crate::{Result, error::MstError, heap::DEFAULT_CAPACITY, mst::Kruskal};

/// How the load phase places a graph's edges into the heap.
///
/// # Examples
/// ```
/// use arbor_core::LoadStrategy;
///
/// assert_eq!(LoadStrategy::default(), LoadStrategy::Incremental);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Insert edges one at a time, growing the heap as it fills.
    #[default]
    Incremental,
    /// Copy all edges into the heap and restore heap order bottom-up in
    /// linear time.
    Bulk,
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{KruskalBuilder, LoadStrategy};
///
/// let kruskal = KruskalBuilder::new()
///     .with_load_strategy(LoadStrategy::Bulk)
///     .with_early_exit(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(kruskal.load_strategy(), LoadStrategy::Bulk);
/// assert!(kruskal.early_exit());
/// ```
#[derive(Debug, Clone)]
pub struct KruskalBuilder {
    load_strategy: LoadStrategy,
    initial_heap_capacity: usize,
    early_exit: bool,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self {
            load_strategy: LoadStrategy::Incremental,
            initial_heap_capacity: DEFAULT_CAPACITY,
            early_exit: false,
        }
    }
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{DEFAULT_CAPACITY, KruskalBuilder, LoadStrategy};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.load_strategy(), LoadStrategy::Incremental);
    /// assert_eq!(builder.initial_heap_capacity(), DEFAULT_CAPACITY);
    /// assert!(!builder.early_exit());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how edges are loaded into the heap.
    #[must_use]
    pub fn with_load_strategy(mut self, strategy: LoadStrategy) -> Self {
        self.load_strategy = strategy;
        self
    }

    /// Returns the configured load strategy.
    #[must_use]
    pub fn load_strategy(&self) -> LoadStrategy {
        self.load_strategy
    }

    /// Overrides the heap capacity used by [`LoadStrategy::Incremental`]
    /// before its first growth.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::KruskalBuilder;
    ///
    /// let builder = KruskalBuilder::new().with_initial_heap_capacity(64);
    /// assert_eq!(builder.initial_heap_capacity(), 64);
    /// ```
    #[must_use]
    pub fn with_initial_heap_capacity(mut self, capacity: usize) -> Self {
        self.initial_heap_capacity = capacity;
        self
    }

    /// Returns the configured initial heap capacity.
    #[must_use]
    pub fn initial_heap_capacity(&self) -> usize {
        self.initial_heap_capacity
    }

    /// Stops the selection phase as soon as `vertex_count - 1` edges have been
    /// accepted. The remaining heap is dropped without being inspected.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Returns whether early exit is enabled.
    #[must_use]
    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    /// Validates the configuration and constructs a [`Kruskal`] instance.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidHeapCapacity`] when the initial heap capacity
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{KruskalBuilder, MstError};
    ///
    /// let err = KruskalBuilder::new()
    ///     .with_initial_heap_capacity(0)
    ///     .build()
    ///     .expect_err("zero capacity is rejected");
    /// assert_eq!(err, MstError::InvalidHeapCapacity { got: 0 });
    /// ```
    pub fn build(self) -> Result<Kruskal> {
        if self.initial_heap_capacity == 0 {
            return Err(MstError::InvalidHeapCapacity {
                got: self.initial_heap_capacity,
            });
        }
        Ok(Kruskal::new(
            self.load_strategy,
            self.initial_heap_capacity,
            self.early_exit,
        ))
    }
}
