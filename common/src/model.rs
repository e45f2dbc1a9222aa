use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::salary::SalaryRange;

/// A browsable job category shown on the landing page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    /// Advertised number of openings. Static copy, not derived from listings.
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub deadline: String,
    pub job_type: JobType,
    #[serde(default)]
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JobListing {
    /// Salary figures parsed out of the free-text salary field.
    pub fn salary_range(&self) -> Option<SalaryRange> {
        SalaryRange::parse(&self.salary)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

/// Visual weight of the job-type badge on a listing card.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
        JobType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
            JobType::Internship => "internship",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
        }
    }

    /// Arabic label. Internships have no localized label and fall back to the wire value.
    pub fn label_ar(&self) -> &'static str {
        match self {
            JobType::FullTime => "دوام كامل",
            JobType::PartTime => "دوام جزئي",
            JobType::Contract => "عقد",
            JobType::Freelance => "عمل حر",
            JobType::Internship => self.as_str(),
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            JobType::FullTime => BadgeVariant::Default,
            JobType::PartTime => BadgeVariant::Secondary,
            JobType::Contract => BadgeVariant::Outline,
            JobType::Freelance => BadgeVariant::Destructive,
            JobType::Internship => BadgeVariant::Default,
        }
    }

    /// Parses a filter value where `"all"` (or blank) means no constraint.
    pub fn parse_filter(value: &str) -> Result<Option<JobType>, ParseJobTypeError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown job type: {0}")]
pub struct ParseJobTypeError(pub String);

impl FromStr for JobType {
    type Err = ParseJobTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ParseJobTypeError(s.to_string()))
    }
}

/// A craftsperson featured in the trades showcase carousel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tradesperson {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub location: String,
    pub image: String,
    #[serde(default)]
    pub work_samples: Vec<String>,
    pub contact_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_wire_format() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"full-time\"");
        assert!(serde_json::from_str::<JobType>("\"weekends\"").is_err());
    }

    #[test]
    fn test_parse_filter_all_means_none() {
        assert_eq!(JobType::parse_filter("all"), Ok(None));
        assert_eq!(JobType::parse_filter("  "), Ok(None));
        assert_eq!(
            JobType::parse_filter("Part-Time"),
            Ok(Some(JobType::PartTime))
        );
        assert!(JobType::parse_filter("weekends").is_err());
    }

    #[test]
    fn test_badge_and_labels() {
        assert_eq!(JobType::Freelance.badge(), BadgeVariant::Destructive);
        assert_eq!(JobType::Contract.badge(), BadgeVariant::Outline);
        assert_eq!(JobType::FullTime.label_ar(), "دوام كامل");
        assert_eq!(JobType::Internship.label_ar(), "internship");
    }

    #[test]
    fn test_listing_without_category_or_logo() {
        let listing: JobListing = serde_json::from_str(
            r#"{"id":"9","title":"Welder","company":"Arc","location":"Dubai",
                "salary":"Negotiable","deadline":"soon","job_type":"contract"}"#,
        )
        .unwrap();
        assert_eq!(listing.category, None);
        assert!(listing.logo.is_empty());
        assert!(listing.salary_range().is_none());
    }
}
