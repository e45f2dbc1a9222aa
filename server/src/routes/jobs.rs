use axum::{
    Json,
    extract::State,
};
use common::filter::{self, JobFilter, ListingPage};
use common::salary::SalaryRange;
use common::{BadgeVariant, Category, JobListing, JobType};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub live_count: usize,
}

#[derive(Debug, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub listing: JobListing,
    pub job_type_label: &'static str,
    pub job_type_label_ar: &'static str,
    pub badge: BadgeVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
}

/// Query parameters for the listing filter
#[derive(Debug, Default, Deserialize)]
pub struct JobsParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl JobsParams {
    fn to_filter(&self) -> Result<JobFilter, AppError> {
        let job_type = match &self.job_type {
            Some(raw) => {
                JobType::parse_filter(raw).map_err(|e| AppError::Validation(e.to_string()))?
            }
            None => None,
        };

        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(AppError::Validation(format!(
                    "salary_min ({min}) is greater than salary_max ({max})"
                )));
            }
        }

        Ok(JobFilter {
            category: self.category.clone().filter(|c| !c.trim().is_empty()),
            term: self.q.clone(),
            job_type,
            location: self.location.clone(),
            salary_floor: self.salary_min,
            salary_ceiling: self.salary_max,
        })
    }
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let summaries = state
        .catalog
        .categories
        .iter()
        .map(|category| CategorySummary {
            live_count: state.catalog.live_count(&category.id),
            category: category.clone(),
        })
        .collect();
    Json(summaries)
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<CategorySummary>, AppError> {
    let category = state
        .catalog
        .category(&id)
        .ok_or_else(|| AppError::NotFound(format!("category '{id}'")))?;

    Ok(Json(CategorySummary {
        category: category.clone(),
        live_count: state.catalog.live_count(&id),
    }))
}

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<JobsParams>,
) -> Result<Json<ListingPage>, AppError> {
    let job_filter = params.to_filter()?;
    let per_page = match params.per_page {
        Some(0) => return Err(AppError::Validation("per_page must be at least 1".into())),
        Some(n) => n,
        None => state.page_size,
    };
    let page = params.page.unwrap_or(1);

    let result = filter::search(&state.catalog, &job_filter, page, per_page);
    tracing::debug!(
        "Filter {:?} matched {} listings (page {})",
        job_filter,
        result.total,
        result.page
    );
    Ok(Json(result))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<JobDetail>, AppError> {
    let listing = state
        .catalog
        .listing(&id)
        .ok_or_else(|| AppError::NotFound(format!("job '{id}'")))?;

    Ok(Json(JobDetail {
        job_type_label: listing.job_type.label(),
        job_type_label_ar: listing.job_type.label_ar(),
        badge: listing.job_type.badge(),
        category_name: listing
            .category
            .as_deref()
            .map(|c| state.catalog.category_name(c).to_string()),
        salary_range: listing.salary_range(),
        listing: listing.clone(),
    }))
}
