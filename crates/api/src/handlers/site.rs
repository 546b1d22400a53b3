//! Handlers for the public `/site` aggregate.
//!
//! The homepage needs hero, about, projects and testimonials. They load
//! concurrently and independently: one failing section never hides another.

use axum::extract::State;
use axum::Json;
use folio_core::services::{Service, SERVICES};
use folio_db::models::project::Project;
use folio_db::models::settings::{AboutSettingsView, HeroSettings};
use folio_db::models::testimonial::Testimonial;
use folio_db::repositories::{AboutSettingsRepo, HeroSettingsRepo, ProjectRepo, TestimonialRepo};
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Load state of one homepage section.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Section<T: Serialize> {
    Loaded { data: T },
    Empty,
    Failed { error: String },
}

impl<T: Serialize> Section<T> {
    fn from_optional(name: &str, result: Result<Option<T>, sqlx::Error>) -> Self {
        match result {
            Ok(Some(data)) => Section::Loaded { data },
            Ok(None) => Section::Empty,
            Err(e) => Self::failed(name, e),
        }
    }

    fn failed(name: &str, err: sqlx::Error) -> Self {
        tracing::error!(section = name, error = %err, "Homepage section failed to load");
        Section::Failed {
            error: format!("Failed to load {name}"),
        }
    }
}

impl<T: Serialize> Section<Vec<T>> {
    fn from_list(name: &str, result: Result<Vec<T>, sqlx::Error>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Section::Empty,
            Ok(items) => Section::Loaded { data: items },
            Err(e) => Self::failed(name, e),
        }
    }
}

/// Response for `GET /site`.
#[derive(Debug, Serialize)]
pub struct SitePage {
    pub hero: Section<HeroSettings>,
    pub about: Section<AboutSettingsView>,
    pub projects: Section<Vec<Project>>,
    pub testimonials: Section<Vec<Testimonial>>,
    pub services: &'static [Service],
}

/// GET /api/v1/site
pub async fn homepage(State(state): State<AppState>) -> Json<DataResponse<SitePage>> {
    let (hero, about, projects, testimonials) = tokio::join!(
        HeroSettingsRepo::find(&state.pool),
        AboutSettingsRepo::find(&state.pool),
        ProjectRepo::list(&state.pool),
        TestimonialRepo::list(&state.pool),
    );

    Json(DataResponse::new(SitePage {
        hero: Section::from_optional("hero", hero),
        about: Section::from_optional("about", about.map(|a| a.map(AboutSettingsView::from))),
        projects: Section::from_list("projects", projects),
        testimonials: Section::from_list("testimonials", testimonials),
        services: SERVICES,
    }))
}

/// GET /api/v1/site/services
pub async fn services() -> Json<DataResponse<&'static [Service]>> {
    Json(DataResponse::new(SERVICES))
}
