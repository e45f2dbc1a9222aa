//! Listing search: a linear AND-filter over the catalog, plus paging.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{JobListing, JobType};

/// Cards shown before the "show more" button.
pub const DEFAULT_PAGE_SIZE: usize = 6;

pub const NO_MATCHES_MESSAGE: &str = "No jobs match your criteria.";

/// Every constraint is optional; a listing matches when it passes all of the set ones.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JobFilter {
    pub category: Option<String>,
    pub term: Option<String>,
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    pub salary_floor: Option<i64>,
    pub salary_ceiling: Option<i64>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category = Some(id.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn salary_between(mut self, floor: Option<i64>, ceiling: Option<i64>) -> Self {
        self.salary_floor = floor;
        self.salary_ceiling = ceiling;
        self
    }

    pub fn matches(&self, job: &JobListing) -> bool {
        if let Some(category) = &self.category {
            if job.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(term) = non_blank(&self.term) {
            if !contains_ci(&job.title, &term) && !contains_ci(&job.company, &term) {
                return false;
            }
        }

        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }

        if let Some(location) = non_blank(&self.location) {
            if !contains_ci(&job.location, &location) {
                return false;
            }
        }

        if self.salary_floor.is_some() || self.salary_ceiling.is_some() {
            match job.salary_range() {
                Some(range) => {
                    if !range.overlaps(self.salary_floor, self.salary_ceiling) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }

    /// Matching listings in catalog order.
    pub fn apply<'a>(&self, listings: &'a [JobListing]) -> Vec<&'a JobListing> {
        listings.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Lowercased, trimmed value, or `None` when blank.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[derive(Debug, Serialize, Clone)]
pub struct ListingPage {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub has_more: bool,
    pub items: Vec<JobListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Runs the filter against the catalog and cuts out one page (1-based).
pub fn search(catalog: &Catalog, filter: &JobFilter, page: usize, per_page: usize) -> ListingPage {
    let matched = filter.apply(&catalog.listings);
    let total = matched.len();
    let page = page.max(1);
    let per_page = per_page.max(1);

    let start = (page - 1).saturating_mul(per_page);
    let items: Vec<JobListing> = matched
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();
    let has_more = start.saturating_add(items.len()) < total;

    let empty_message = (total == 0).then(|| match &filter.category {
        Some(id) => format!(
            "No jobs are currently available in {}",
            catalog.category_name(id)
        ),
        None => NO_MATCHES_MESSAGE.to_string(),
    });

    ListingPage {
        total,
        page,
        per_page,
        has_more,
        items,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(jobs: &[&JobListing]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(JobFilter::new().apply(&catalog.listings).len(), 25);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new().category("construction").apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["6", "13", "14", "15", "16", "17"]);

        let jobs = JobFilter::new().category("Construction").apply(&catalog.listings);
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_term_matches_title_or_company_case_insensitive() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new().term("DEVELOPER").apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["1", "12"]);

        let jobs = JobFilter::new().term("power tech").apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["4", "18"]);
    }

    #[test]
    fn test_blank_term_is_ignored() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new().term("   ").apply(&catalog.listings);
        assert_eq!(jobs.len(), 25);
    }

    #[test]
    fn test_term_does_not_search_location() {
        let catalog = Catalog::embedded().unwrap();
        assert!(JobFilter::new().term("Fujairah").apply(&catalog.listings).is_empty());
    }

    #[test]
    fn test_constraints_are_anded() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new()
            .category("construction")
            .job_type(JobType::Contract)
            .apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["6", "14", "17"]);

        let jobs = JobFilter::new()
            .category("construction")
            .job_type(JobType::Contract)
            .term("mason")
            .apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["14"]);
    }

    #[test]
    fn test_location_filter() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new().location("dubai").apply(&catalog.listings);
        assert_eq!(jobs.len(), 9);
    }

    #[test]
    fn test_salary_bounds_exclude_unparsable_salaries() {
        let catalog = Catalog::embedded().unwrap();
        let jobs = JobFilter::new()
            .category("construction")
            .salary_between(Some(0), None)
            .apply(&catalog.listings);
        // "Negotiable" tile installer drops out
        assert_eq!(ids(&jobs), vec!["6", "13", "14", "15", "17"]);

        let jobs = JobFilter::new()
            .salary_between(Some(100_000), None)
            .apply(&catalog.listings);
        assert_eq!(ids(&jobs), vec!["1", "7", "12"]);
    }

    #[test]
    fn test_search_pages_results() {
        let catalog = Catalog::embedded().unwrap();
        let first = search(&catalog, &JobFilter::new(), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(first.total, 25);
        assert_eq!(first.items.len(), 6);
        assert!(first.has_more);
        assert!(first.empty_message.is_none());

        let last = search(&catalog, &JobFilter::new(), 5, DEFAULT_PAGE_SIZE);
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_more);

        let beyond = search(&catalog, &JobFilter::new(), 9, DEFAULT_PAGE_SIZE);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_more);
    }

    #[test]
    fn test_empty_message_names_the_category() {
        let catalog = Catalog::embedded().unwrap();
        let filter = JobFilter::new().category("healthcare").term("welder");
        let page = search(&catalog, &filter, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total, 0);
        assert_eq!(
            page.empty_message.as_deref(),
            Some("No jobs are currently available in Healthcare")
        );

        let page = search(&catalog, &JobFilter::new().term("welder"), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.empty_message.as_deref(), Some(NO_MATCHES_MESSAGE));
    }
}
