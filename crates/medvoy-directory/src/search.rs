//! Clinic matching and ranking.
//!
//! Equality filters are compared slug-to-slug so "Dental Implants" and
//! "dental-implants" both work as query values. Free-text tokens must all
//! match (AND); each token matches by substring, or — when enabled — by
//! Jaro-Winkler similarity against individual words of the clinic's text.
//! Ranking is by mean token score, ties broken by name.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use medvoy_core::slugify;
use medvoy_store::Clinic;

use crate::types::{ClinicFilter, DirectoryConfig};

/// One search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched clinic.
    pub clinic: Clinic,
    /// Match quality in `(0, 1]`; 1.0 for filter-only queries.
    pub score: f64,
}

/// The directory search engine.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    config: DirectoryConfig,
}

impl Directory {
    /// Create a directory with the given configuration.
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }

    /// Search `clinics` with `filter`, returning ranked hits.
    pub fn search(&self, clinics: &[Clinic], filter: &ClinicFilter) -> Vec<SearchHit> {
        let limit = filter.limit.unwrap_or(self.config.default_limit);

        let mut hits: Vec<SearchHit> = clinics
            .iter()
            .filter(|clinic| self.passes_filters(clinic, filter))
            .filter_map(|clinic| {
                self.text_score(clinic, filter.q.as_deref()).map(|score| SearchHit {
                    clinic: clinic.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.clinic.name.cmp(&b.clinic.name))
        });
        hits.truncate(limit);
        hits
    }

    fn passes_filters(&self, clinic: &Clinic, filter: &ClinicFilter) -> bool {
        if let Some(procedure) = &filter.procedure {
            let wanted = slugify(procedure);
            if !clinic.procedures.iter().any(|p| slugify(p) == wanted) {
                return false;
            }
        }
        if let Some(country) = &filter.country
            && slugify(country) != slugify(&clinic.country)
        {
            return false;
        }
        if let Some(city) = &filter.city
            && slugify(city) != slugify(&clinic.city)
        {
            return false;
        }
        true
    }

    /// Score the free-text query against the clinic. `None` means at
    /// least one token failed to match and the clinic is excluded.
    fn text_score(&self, clinic: &Clinic, q: Option<&str>) -> Option<f64> {
        let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) else {
            return Some(1.0);
        };

        let haystack = format!(
            "{} {} {} {} {}",
            clinic.name,
            clinic.description,
            clinic.city,
            clinic.country,
            clinic.procedures.join(" ")
        )
        .to_lowercase();
        let words: Vec<&str> = haystack.split_whitespace().collect();

        let mut total = 0.0;
        let mut count = 0usize;
        for token in q.to_lowercase().split_whitespace() {
            let score = if haystack.contains(token) {
                1.0
            } else if self.config.fuzzy_enabled {
                let best = words
                    .iter()
                    .map(|w| jaro_winkler(token, w))
                    .fold(0.0_f64, f64::max);
                if best < self.config.fuzzy_threshold {
                    return None;
                }
                best
            } else {
                return None;
            };
            total += score;
            count += 1;
        }

        Some(total / count as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================
