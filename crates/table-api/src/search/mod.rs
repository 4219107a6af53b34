//! Fuzzy search over a single field of a record collection.
//!
//! Matching is delegated to `frizbee`; this module turns its scores into a
//! normalized distance so callers can express fuzziness as a threshold.

mod config;
mod index;

pub use config::{
	MATCH_CHUNK_SIZE, MAX_TYPOS, PREFILTER_ENABLE_THRESHOLD, config_for_query, substring_score, typo_budget,
};
pub use index::{SearchHit, SearchIndex};

/// Search field and fuzziness tolerance (`0.0` exact, `1.0` anything).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
	pub field: String,
	pub threshold: f64,
}

impl SearchConfig {
	/// Fuzziness used when a table does not configure one.
	pub const DEFAULT_THRESHOLD: f64 = 0.3;

	#[must_use]
	pub fn new(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			threshold: Self::DEFAULT_THRESHOLD,
		}
	}

	#[must_use]
	pub fn with_threshold(mut self, threshold: f64) -> Self {
		self.threshold = threshold;
		self
	}
}

/// Whether `threshold` is a usable fuzziness value.
#[must_use]
pub fn is_valid_threshold(threshold: f64) -> bool {
	(0.0..=1.0).contains(&threshold)
}
