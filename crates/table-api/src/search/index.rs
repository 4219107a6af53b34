use frizbee::match_list;
use log::debug;
use unicase::UniCase;

use super::config::{MATCH_CHUNK_SIZE, config_for_query, substring_score};
use crate::value::TableRecord;

/// A record position with its normalized distance from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
	pub index: usize,
	/// `0.0` is a perfect match, `1.0` means nothing matched.
	pub distance: f64,
}

/// Approximate-match index over the string form of one field.
///
/// The index is immutable: a new collection or a different field requires a
/// fresh [`SearchIndex::build`].
#[derive(Debug, Clone)]
pub struct SearchIndex {
	field: String,
	generation: u64,
	haystacks: Vec<String>,
}

impl SearchIndex {
	/// Index `field` of every record, tagging the index with the collection's
	/// `generation`.
	pub fn build<R: TableRecord>(records: &[R], field: &str, generation: u64) -> Self {
		let haystacks = records
			.iter()
			.map(|record| record.field(field).display().into_owned())
			.collect::<Vec<_>>();
		debug!(
			"built search index over '{field}' ({} records, generation {generation})",
			haystacks.len()
		);
		Self {
			field: field.to_string(),
			generation,
			haystacks,
		}
	}

	/// Whether the index still describes `field` of collection `generation`.
	#[must_use]
	pub fn is_current(&self, field: &str, generation: u64) -> bool {
		self.field == field && self.generation == generation
	}

	#[must_use]
	pub fn field(&self) -> &str {
		&self.field
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.haystacks.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.haystacks.is_empty()
	}

	/// Return the records within `threshold` of `query`, best match first.
	///
	/// Distance is measured against a plain occurrence of the query inside a
	/// cell, so a substring anywhere in the value sits at `0.0`. Cells equal
	/// to the query up to case are exact matches. Equal distances rank the
	/// higher raw score first, then keep collection order. A blank query
	/// yields no hits.
	#[must_use]
	pub fn query(&self, query: &str, threshold: f64) -> Vec<SearchHit> {
		let needle = query.trim();
		if needle.is_empty() || self.haystacks.is_empty() {
			return Vec::new();
		}

		let config = config_for_query(needle, self.haystacks.len(), threshold);
		let best = substring_score(needle, &config);
		let mut scores: Vec<u16> = vec![0; self.haystacks.len()];
		let mut exact: Vec<bool> = vec![false; self.haystacks.len()];

		let mut haystacks: Vec<&str> = Vec::with_capacity(MATCH_CHUNK_SIZE);
		for (chunk_index, chunk) in self.haystacks.chunks(MATCH_CHUNK_SIZE).enumerate() {
			let offset = chunk_index * MATCH_CHUNK_SIZE;
			haystacks.clear();
			haystacks.extend(chunk.iter().map(String::as_str));
			for entry in match_list(needle, &haystacks, &config) {
				let position = offset + entry.index as usize;
				exact[position] = entry.exact;
				scores[position] = entry.score;
			}
		}

		let needle_key = UniCase::new(needle);
		let mut hits = scores
			.iter()
			.enumerate()
			.filter_map(|(index, &score)| {
				let distance = if exact[index] || UniCase::new(self.haystacks[index].trim()) == needle_key {
					0.0
				} else {
					normalized_distance(score, best)
				};
				(distance <= threshold).then_some((SearchHit { index, distance }, score))
			})
			.collect::<Vec<_>>();
		hits.sort_by(|(a, a_score), (b, b_score)| {
			a.distance
				.total_cmp(&b.distance)
				.then_with(|| b_score.cmp(a_score))
				.then_with(|| a.index.cmp(&b.index))
		});
		hits.into_iter().map(|(hit, _)| hit).collect()
	}
}

fn normalized_distance(score: u16, best: u32) -> f64 {
	if score == 0 || best == 0 {
		return 1.0;
	}
	(1.0 - f64::from(score) / f64::from(best)).clamp(0.0, 1.0)
}
