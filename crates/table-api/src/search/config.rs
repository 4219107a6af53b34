use frizbee::Config;

/// Collections at least this large are prefiltered by typo count.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Number of haystacks scored per `match_list` call.
pub const MATCH_CHUNK_SIZE: usize = 512;

/// Most characters a query may drop and still name the same cell.
///
/// Table cells are short (names, emails, phone numbers, college names), so
/// past three missing characters a hit is usually a different person.
pub const MAX_TYPOS: u16 = 3;

/// Typos `query` can carry while staying within `threshold`.
///
/// Each character the prefilter lets go missing forfeits one full
/// character score, so `k` typos put a hit at distance `k / len` at best.
#[must_use]
pub fn typo_budget(query: &str, threshold: f64) -> u16 {
	let length = query.len();
	if length < 2 {
		return 0;
	}
	let affordable = (length as f64 * threshold.clamp(0.0, 1.0)).floor() as usize;
	let budget = affordable.min(length - 1).min(usize::from(MAX_TYPOS));
	u16::try_from(budget).unwrap_or(MAX_TYPOS)
}

/// Matching options for `query` over `dataset_len` cells at `threshold`.
///
/// Small tables are scored exhaustively; the prefilter only pays off once a
/// collection reaches [`PREFILTER_ENABLE_THRESHOLD`].
pub fn config_for_query(query: &str, dataset_len: usize, threshold: f64) -> Config {
	let prefilter = dataset_len >= PREFILTER_ENABLE_THRESHOLD;
	Config {
		prefilter,
		max_typos: prefilter.then(|| typo_budget(query, threshold)),
		// Ranking happens on normalized distances, not raw scores.
		sort: false,
		..Config::default()
	}
}

/// Best score a case-matching, bonus-free occurrence of `query` can earn.
///
/// Prefix, delimiter and exact bonuses push real scores above this, which
/// the distance clamps back to zero.
#[must_use]
pub fn substring_score(query: &str, config: &Config) -> u32 {
	let per_byte = u32::from(config.scoring.match_score) + u32::from(config.scoring.matching_case_bonus);
	u32::try_from(query.len()).unwrap_or(u32::MAX).saturating_mul(per_byte)
}
