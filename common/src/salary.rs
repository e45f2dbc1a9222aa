//! Salary parsing for the free-text salary field on listings.

use regex::Regex;
use serde::Serialize;

/// Figures below this are treated as noise (dates, counts) rather than pay.
const MIN_PLAUSIBLE_SALARY: i64 = 1000;

/// Pulls every plausible salary figure out of a raw salary string, in order.
fn salary_figures(salary_raw: &str) -> Vec<i64> {
    // Match numbers that may have commas (e.g., "50,000" or "50000")
    let Ok(re) = Regex::new(r"\$?(\d{1,3}(?:,\d{3})+|\d+)") else {
        return Vec::new();
    };

    re.captures_iter(salary_raw)
        .filter_map(|cap| cap.get(1))
        .filter_map(|matched| {
            let clean_number: String = matched
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            clean_number.parse::<i64>().ok()
        })
        .filter(|num| *num >= MIN_PLAUSIBLE_SALARY)
        .collect()
}

/// Extracts the minimum salary from a raw salary string.
/// Returns the first plausible figure found.
pub fn extract_salary(salary_raw: &str) -> Option<i64> {
    salary_figures(salary_raw).into_iter().next()
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    /// "40,000 - 60,000 AED/month" parses to 40000..=60000; a single figure
    /// yields a degenerate range.
    pub fn parse(salary_raw: &str) -> Option<SalaryRange> {
        let figures = salary_figures(salary_raw);
        let min = *figures.first()?;
        let max = figures.get(1).copied().unwrap_or(min);
        Some(SalaryRange {
            min: min.min(max),
            max: min.max(max),
        })
    }

    /// True when this range shares at least one value with `[floor, ceiling]`.
    /// Missing bounds are open.
    pub fn overlaps(&self, floor: Option<i64>, ceiling: Option<i64>) -> bool {
        floor.is_none_or(|f| self.max >= f) && ceiling.is_none_or(|c| self.min <= c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_salary_with_dollar_sign() {
        assert_eq!(extract_salary("$50,000 - $70,000"), Some(50000));
    }

    #[test]
    fn test_extract_salary_without_dollar_sign() {
        assert_eq!(extract_salary("Salary: 60000 USD"), Some(60000));
    }

    #[test]
    fn test_extract_salary_no_salary() {
        assert_eq!(extract_salary("Negotiable"), None);
    }

    #[test]
    fn test_extract_salary_skips_small_numbers() {
        assert_eq!(extract_salary("Shift 12 hours, 45,000 AED"), Some(45000));
    }

    #[test]
    fn test_range_from_listing_text() {
        assert_eq!(
            SalaryRange::parse("80,000 - 100,000 AED/month"),
            Some(SalaryRange {
                min: 80000,
                max: 100000
            })
        );
        assert_eq!(
            SalaryRange::parse("8,000 AED/month"),
            Some(SalaryRange {
                min: 8000,
                max: 8000
            })
        );
    }

    #[test]
    fn test_overlap_with_open_bounds() {
        let range = SalaryRange {
            min: 40000,
            max: 60000,
        };
        assert!(range.overlaps(None, None));
        assert!(range.overlaps(Some(60000), None));
        assert!(!range.overlaps(Some(60001), None));
        assert!(range.overlaps(None, Some(40000)));
        assert!(!range.overlaps(None, Some(39999)));
        assert!(range.overlaps(Some(30000), Some(150000)));
    }
}
