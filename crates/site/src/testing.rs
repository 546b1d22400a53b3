//! In-memory API used by unit tests.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use folio_core::contact::ContactForm;
use folio_core::media::ResourceType;
use folio_core::project::ProjectType;
use folio_core::types::DbId;
use folio_db::models::admin::AdminAccount;
use folio_db::models::contact::ContactSubmission;
use folio_db::models::project::{Project, UpdateProject};
use folio_db::models::settings::{
    AboutSettings, AboutSettingsView, HeroSettings, UpsertAboutSettings, UpsertHeroSettings,
};
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

use crate::client::{
    AdminApi, AuthTokens, ContactReceipt, MediaFile, ProjectDraft, PublicApi, UploadResult,
};
use crate::error::ClientError;

pub const FAKE_USERNAME: &str = "admin";
pub const FAKE_PASSWORD: &str = "correct horse battery";

pub fn project(id: DbId, title: &str, project_type: ProjectType) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: "Description".to_string(),
        image_url: format!("https://cdn.test/{id}.jpg"),
        tags: Vec::new(),
        project_type,
        gallery_urls: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn testimonial(id: DbId, client_name: &str) -> Testimonial {
    Testimonial {
        id,
        client_name: client_name.to_string(),
        client_title: String::new(),
        content: "Great work".to_string(),
        rating: 5,
        project_context: "House".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn contact(id: DbId, name: &str) -> ContactSubmission {
    ContactSubmission {
        id,
        name: name.to_string(),
        email: "jane@x.com".to_string(),
        message: "I would like a quote.".to_string(),
        is_read: false,
        created_at: Utc::now(),
    }
}

pub struct FakeState {
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub contacts: Vec<ContactSubmission>,
    pub hero: Option<HeroSettings>,
    pub about_raw: Option<serde_json::Value>,
    pub username: String,
    pub password: String,
    pub fail_testimonials: bool,
    pub reject_tokens: bool,
    pub login_attempts: usize,
    pub logouts: usize,
    pub mark_read_calls: usize,
    next_id: DbId,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            testimonials: Vec::new(),
            contacts: Vec::new(),
            hero: None,
            about_raw: None,
            username: FAKE_USERNAME.to_string(),
            password: FAKE_PASSWORD.to_string(),
            fail_testimonials: false,
            reject_tokens: false,
            login_attempts: 0,
            logouts: 0,
            mark_read_calls: 0,
            next_id: 100,
        }
    }
}

impl FakeState {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn check_token(&self) -> Result<(), ClientError> {
        if self.reject_tokens {
            return Err(api_error(401, "Session has ended. Please log in again."));
        }
        Ok(())
    }
}

fn api_error(status: u16, message: &str) -> ClientError {
    ClientError::Api {
        status,
        code: None,
        message: message.to_string(),
    }
}

fn not_found() -> ClientError {
    api_error(404, "not found")
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
    /// When set, every delete call waits for a permit before touching state.
    delete_gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn with_delete_gate(gate: Arc<Notify>) -> Self {
        Self {
            delete_gate: Some(gate),
            ..Default::default()
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    async fn wait_for_delete_gate(&self) {
        if let Some(gate) = &self.delete_gate {
            gate.notified().await;
        }
    }

    fn tokens(username: &str) -> AuthTokens {
        AuthTokens {
            access_token: "access-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            expires_in: 3600,
            username: username.to_string(),
        }
    }
}

#[async_trait]
impl PublicApi for FakeApi {
    async fn get_hero(&self) -> Result<Option<HeroSettings>, ClientError> {
        Ok(self.state().hero.clone())
    }

    async fn get_about(&self) -> Result<Option<AboutSettingsView>, ClientError> {
        Ok(self.state().about_raw.clone().map(|achievements| {
            AboutSettingsView::from(AboutSettings {
                id: 1,
                profile_image_url: String::new(),
                bio: String::new(),
                achievements,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        Ok(self.state().projects.clone())
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        let state = self.state();
        if state.fail_testimonials {
            return Err(api_error(500, "An internal error occurred"));
        }
        Ok(state.testimonials.clone())
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt, ClientError> {
        let mut state = self.state();
        let id = state.next_id();
        let mut submission = contact(id, &form.name);
        submission.email = form.email.clone();
        submission.message = form.message.clone();
        state.contacts.insert(0, submission.clone());
        Ok(ContactReceipt {
            submission,
            email_sent: true,
        })
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn login(&self, username: &str, password: &str) -> Result<AuthTokens, ClientError> {
        let mut state = self.state();
        state.login_attempts += 1;
        if username == state.username && password == state.password {
            Ok(Self::tokens(username))
        } else {
            Err(api_error(401, "Invalid username or password"))
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<AuthTokens, ClientError> {
        let state = self.state();
        state.check_token()?;
        Ok(Self::tokens(&state.username))
    }

    async fn logout(&self, _token: &str) -> Result<u64, ClientError> {
        self.state().logouts += 1;
        Ok(1)
    }

    async fn create_project(
        &self,
        _token: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        let id = state.next_id();
        let mut created = project(id, &draft.title, draft.project_type);
        created.description = draft.description.clone();
        created.image_url = draft.image_url.clone();
        state.projects.insert(0, created.clone());
        Ok(created)
    }

    async fn update_project(
        &self,
        _token: &str,
        id: DbId,
        update: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        let existing = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        if let Some(title) = &update.title {
            existing.title = title.clone();
        }
        if let Some(project_type) = update.project_type {
            existing.project_type = project_type;
        }
        Ok(existing.clone())
    }

    async fn delete_project(&self, _token: &str, id: DbId) -> Result<(), ClientError> {
        self.wait_for_delete_gate().await;
        let mut state = self.state();
        state.check_token()?;
        let before = state.projects.len();
        state.projects.retain(|p| p.id != id);
        if state.projects.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn create_testimonial(
        &self,
        _token: &str,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        let id = state.next_id();
        let mut created = testimonial(id, &input.client_name);
        created.rating = input.rating.unwrap_or(5);
        state.testimonials.insert(0, created.clone());
        Ok(created)
    }

    async fn update_testimonial(
        &self,
        _token: &str,
        id: DbId,
        update: &UpdateTestimonial,
    ) -> Result<Testimonial, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        let existing = state
            .testimonials
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(not_found)?;
        if let Some(rating) = update.rating {
            existing.rating = rating;
        }
        Ok(existing.clone())
    }

    async fn delete_testimonial(&self, _token: &str, id: DbId) -> Result<(), ClientError> {
        self.wait_for_delete_gate().await;
        let mut state = self.state();
        state.check_token()?;
        state.testimonials.retain(|t| t.id != id);
        Ok(())
    }

    async fn list_contacts(&self, _token: &str) -> Result<Vec<ContactSubmission>, ClientError> {
        let state = self.state();
        state.check_token()?;
        Ok(state.contacts.clone())
    }

    async fn mark_contact_read(
        &self,
        _token: &str,
        id: DbId,
    ) -> Result<ContactSubmission, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        state.mark_read_calls += 1;
        let existing = state
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(not_found)?;
        existing.is_read = true;
        Ok(existing.clone())
    }

    async fn delete_contact(&self, _token: &str, id: DbId) -> Result<(), ClientError> {
        self.wait_for_delete_gate().await;
        let mut state = self.state();
        state.check_token()?;
        state.contacts.retain(|c| c.id != id);
        Ok(())
    }

    async fn save_hero(
        &self,
        _token: &str,
        input: &UpsertHeroSettings,
    ) -> Result<HeroSettings, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        let hero = HeroSettings {
            id: 1,
            background_image_url: input.background_image_url.clone().unwrap_or_default(),
            name: input.name.clone().unwrap_or_default(),
            tagline: input.tagline.clone().unwrap_or_default(),
            description: input.description.clone().unwrap_or_default(),
            cv_url: input.cv_url.clone().unwrap_or_default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.hero = Some(hero.clone());
        Ok(hero)
    }

    async fn save_about(
        &self,
        _token: &str,
        input: &UpsertAboutSettings,
    ) -> Result<AboutSettingsView, ClientError> {
        {
            let mut state = self.state();
            state.check_token()?;
            let achievements = input.achievements.clone().unwrap_or_default();
            state.about_raw = Some(serde_json::to_value(achievements)?);
        }
        self.get_about().await?.ok_or_else(not_found)
    }

    async fn get_admin_account(&self, _token: &str) -> Result<Option<AdminAccount>, ClientError> {
        let state = self.state();
        state.check_token()?;
        Ok(Some(AdminAccount {
            username: state.username.clone(),
            updated_at: Utc::now(),
        }))
    }

    async fn save_admin_credentials(
        &self,
        _token: &str,
        username: &str,
        password: &str,
    ) -> Result<AdminAccount, ClientError> {
        let mut state = self.state();
        state.check_token()?;
        state.username = username.to_string();
        state.password = password.to_string();
        Ok(AdminAccount {
            username: state.username.clone(),
            updated_at: Utc::now(),
        })
    }

    async fn upload_media(&self, _token: &str, file: MediaFile) -> Result<UploadResult, ClientError> {
        tokio::time::sleep(Duration::from_millis(file.bytes.len() as u64)).await;
        if file.file_name.starts_with("fail") {
            return Ok(UploadResult {
                file_name: file.file_name,
                secure_url: None,
                public_id: None,
                resource_type: None,
                error: Some("rejected".to_string()),
            });
        }
        Ok(UploadResult {
            secure_url: Some(format!("https://cdn.test/{}", file.file_name)),
            public_id: Some(format!("portfolio/{}", file.file_name)),
            resource_type: Some(ResourceType::Image),
            file_name: file.file_name,
            error: None,
        })
    }
}
