//! The public homepage.

use folio_core::services::{Service, SERVICES};
use folio_db::models::project::Project;
use folio_db::models::settings::{AboutSettingsView, HeroSettings};
use folio_db::models::testimonial::Testimonial;

use crate::client::PublicApi;
use crate::state::LoadState;

/// Everything the homepage renders, each section with its own state.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub hero: LoadState<HeroSettings>,
    pub about: LoadState<AboutSettingsView>,
    pub projects: LoadState<Vec<Project>>,
    pub testimonials: LoadState<Vec<Testimonial>>,
}

impl HomePage {
    /// Fetch all four sections concurrently. A failing section is recorded
    /// as [`LoadState::Failed`] and never affects the others.
    pub async fn load(api: &dyn PublicApi) -> Self {
        let (hero, about, projects, testimonials) = tokio::join!(
            api.get_hero(),
            api.get_about(),
            api.list_projects(),
            api.list_testimonials(),
        );

        let page = Self {
            hero: LoadState::from_optional(hero),
            about: LoadState::from_optional(about),
            projects: LoadState::from_list(projects),
            testimonials: LoadState::from_list(testimonials),
        };

        for (section, error) in [
            ("hero", page.hero.error()),
            ("about", page.about.error()),
            ("projects", page.projects.error()),
            ("testimonials", page.testimonials.error()),
        ] {
            if let Some(error) = error {
                tracing::warn!(section, error, "Homepage section failed to load");
            }
        }
        page
    }

    /// Services are static and always available.
    pub fn services(&self) -> &'static [Service] {
        SERVICES
    }
}
