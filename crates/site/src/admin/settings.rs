//! Hero, about and credential editing.

use folio_core::achievements::{validate_achievements, Achievement, ICON_OPTIONS};
use folio_core::validation::require_fields;
use folio_db::models::admin::AdminAccount;
use folio_db::models::settings::{AboutSettingsView, HeroSettings, UpsertAboutSettings, UpsertHeroSettings};

use crate::admin::session::{AdminAuth, SessionStore};
use crate::client::AdminApi;
use crate::error::ClientError;

/// Shortest password the server accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Editable copies of the settings. Nothing is persisted until one of the
/// `save_*` methods is called.
#[derive(Debug, Clone, Default)]
pub struct SettingsEditor {
    pub hero: UpsertHeroSettings,
    pub profile_image_url: String,
    pub bio: String,
    pub achievements: Vec<Achievement>,
    pub username: String,
    legacy_achievements: bool,
}

impl SettingsEditor {
    /// Load hero, about and the admin account concurrently.
    pub async fn load<S: SessionStore>(
        api: &dyn AdminApi,
        auth: &AdminAuth<S>,
    ) -> Result<Self, ClientError> {
        let token = auth.token()?;
        let (hero, about, account) = tokio::join!(
            api.get_hero(),
            api.get_about(),
            api.get_admin_account(&token),
        );

        let mut editor = Self::default();
        if let Some(hero) = hero? {
            editor.apply_hero(hero);
        }
        if let Some(about) = about? {
            editor.apply_about(about);
        }
        if let Some(account) = account.map_err(|e| auth.check(e))? {
            editor.username = account.username;
        }
        Ok(editor)
    }

    /// `true` when the achievements shown came from the old string-list
    /// format and have not been saved since.
    pub fn achievements_need_migration(&self) -> bool {
        self.legacy_achievements
    }

    pub fn add_achievement(&mut self) {
        self.achievements.push(Achievement {
            icon: ICON_OPTIONS[0].to_string(),
            title: String::new(),
            description: String::new(),
        });
    }

    pub fn remove_achievement(&mut self, index: usize) -> Option<Achievement> {
        (index < self.achievements.len()).then(|| self.achievements.remove(index))
    }

    pub async fn save_hero<S: SessionStore>(
        &mut self,
        api: &dyn AdminApi,
        auth: &AdminAuth<S>,
    ) -> Result<HeroSettings, ClientError> {
        let token = auth.token()?;
        let hero = api
            .save_hero(&token, &self.hero)
            .await
            .map_err(|e| auth.check(e))?;
        self.apply_hero(hero.clone());
        Ok(hero)
    }

    /// Save the about copy. Achievements are always written in structured
    /// form, which completes any legacy migration.
    pub async fn save_about<S: SessionStore>(
        &mut self,
        api: &dyn AdminApi,
        auth: &AdminAuth<S>,
    ) -> Result<AboutSettingsView, ClientError> {
        validate_achievements(&self.achievements)?;
        let token = auth.token()?;

        let input = UpsertAboutSettings {
            profile_image_url: Some(self.profile_image_url.clone()),
            bio: Some(self.bio.clone()),
            achievements: Some(self.achievements.clone()),
        };
        let about = api
            .save_about(&token, &input)
            .await
            .map_err(|e| auth.check(e))?;

        if self.legacy_achievements {
            tracing::info!(count = about.achievements.len(), "Legacy achievements migrated");
        }
        self.apply_about(about.clone());
        Ok(about)
    }

    /// Replace the admin credentials. The server ends every session, so the
    /// local one is cleared too.
    pub async fn save_credentials<S: SessionStore>(
        &mut self,
        api: &dyn AdminApi,
        auth: &AdminAuth<S>,
        password: &str,
    ) -> Result<AdminAccount, ClientError> {
        require_fields(&[("username", self.username.as_str()), ("password", password)])?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ClientError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        let token = auth.token()?;

        let account = api
            .save_admin_credentials(&token, self.username.trim(), password)
            .await
            .map_err(|e| auth.check(e))?;

        auth.clear()?;
        self.username = account.username.clone();
        Ok(account)
    }

    fn apply_hero(&mut self, hero: HeroSettings) {
        self.hero = UpsertHeroSettings {
            background_image_url: Some(hero.background_image_url),
            name: Some(hero.name),
            tagline: Some(hero.tagline),
            description: Some(hero.description),
            cv_url: Some(hero.cv_url),
        };
    }

    fn apply_about(&mut self, about: AboutSettingsView) {
        self.profile_image_url = about.profile_image_url;
        self.bio = about.bio;
        self.achievements = about.achievements;
        self.legacy_achievements = about.legacy_achievements;
    }
}
