//! Admin dashboard: projects, testimonials and contact messages.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_core::project::{validate_new_project, validate_project_update};
use folio_core::testimonial::{validate_new_testimonial, validate_testimonial_update};
use folio_core::types::DbId;
use folio_db::models::contact::ContactSubmission;
use folio_db::models::project::{Project, UpdateProject};
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

use crate::admin::session::{AdminAuth, SessionStore};
use crate::client::{AdminApi, ProjectDraft};
use crate::error::ClientError;
use crate::state::LoadState;

/// The answer to "Are you sure?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
}

/// Ids with a delete request in flight.
#[derive(Debug, Default)]
pub struct DeletionTracker {
    in_flight: Mutex<HashSet<DbId>>,
}

impl DeletionTracker {
    /// Mark `id` as being deleted. Returns `None` if it already is.
    pub fn begin(&self, id: DbId) -> Option<DeletionGuard<'_>> {
        let mut in_flight = lock(&self.in_flight);
        in_flight.insert(id).then_some(DeletionGuard { tracker: self, id })
    }

    pub fn is_deleting(&self, id: DbId) -> bool {
        lock(&self.in_flight).contains(&id)
    }
}

/// Clears the in-flight mark when the delete call finishes, however it ends.
#[derive(Debug)]
pub struct DeletionGuard<'a> {
    tracker: &'a DeletionTracker,
    id: DbId,
}

impl Drop for DeletionGuard<'_> {
    fn drop(&mut self) {
        lock(&self.tracker.in_flight).remove(&self.id);
    }
}

fn remove_where<T>(state: &mut LoadState<Vec<T>>, mut matches: impl FnMut(&T) -> bool) {
    if let LoadState::Loaded(items) = state {
        items.retain(|item| !matches(item));
        if items.is_empty() {
            *state = LoadState::Empty;
        }
    }
}

fn replace_where<T>(state: &mut LoadState<Vec<T>>, item: T, mut matches: impl FnMut(&T) -> bool) {
    if let LoadState::Loaded(items) = state {
        if let Some(slot) = items.iter_mut().find(|i| matches(i)) {
            *slot = item;
        }
    }
}

/// Newest items first, matching the API's list order.
fn push_front<T>(state: &mut LoadState<Vec<T>>, item: T) {
    match state {
        LoadState::Loaded(items) => items.insert(0, item),
        other => *other = LoadState::Loaded(vec![item]),
    }
}

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Everything the dashboard lists, plus the operations on it.
///
/// Operations take `&self`, so a view can read the lists and ask
/// [`Dashboard::is_deleting`] for one row while a delete for that row is
/// still awaiting the server. Locks are never held across an await.
pub struct Dashboard<'a, S: SessionStore> {
    api: &'a dyn AdminApi,
    auth: &'a AdminAuth<S>,
    projects: Mutex<LoadState<Vec<Project>>>,
    testimonials: Mutex<LoadState<Vec<Testimonial>>>,
    messages: Mutex<LoadState<Vec<ContactSubmission>>>,
    deletions: DeletionTracker,
}

impl<'a, S: SessionStore> Dashboard<'a, S> {
    pub fn new(api: &'a dyn AdminApi, auth: &'a AdminAuth<S>) -> Self {
        Self {
            api,
            auth,
            projects: Mutex::new(LoadState::NotLoaded),
            testimonials: Mutex::new(LoadState::NotLoaded),
            messages: Mutex::new(LoadState::NotLoaded),
            deletions: DeletionTracker::default(),
        }
    }

    pub fn projects(&self) -> LoadState<Vec<Project>> {
        lock(&self.projects).clone()
    }

    pub fn testimonials(&self) -> LoadState<Vec<Testimonial>> {
        lock(&self.testimonials).clone()
    }

    pub fn messages(&self) -> LoadState<Vec<ContactSubmission>> {
        lock(&self.messages).clone()
    }

    /// Whether the row with `id` has a delete in flight. Drives the per-row
    /// spinner and disabled controls.
    pub fn is_deleting(&self, id: DbId) -> bool {
        self.deletions.is_deleting(id)
    }

    /// Reload all three lists concurrently.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let token = self.auth.token()?;
        let (projects, testimonials, messages) = tokio::join!(
            self.api.list_projects(),
            self.api.list_testimonials(),
            self.api.list_contacts(&token),
        );

        let messages = match messages {
            Err(e) if e.is_unauthorized() => return Err(self.auth.check(e)),
            other => LoadState::from_list(other),
        };
        *lock(&self.projects) = LoadState::from_list(projects);
        *lock(&self.testimonials) = LoadState::from_list(testimonials);
        *lock(&self.messages) = messages;
        Ok(())
    }

    // ---- projects ----

    pub async fn add_project(&self, draft: ProjectDraft) -> Result<Project, ClientError> {
        validate_new_project(&draft.title, &draft.description, &draft.image_url)?;
        let token = self.auth.token()?;

        let project = self
            .api
            .create_project(&token, &draft)
            .await
            .map_err(|e| self.auth.check(e))?;

        tracing::info!(project_id = project.id, "Project added");
        push_front(&mut lock(&self.projects), project.clone());
        Ok(project)
    }

    pub async fn edit_project(
        &self,
        id: DbId,
        update: UpdateProject,
    ) -> Result<Project, ClientError> {
        validate_project_update(
            update.title.as_deref(),
            update.description.as_deref(),
            update.image_url.as_deref(),
        )?;
        let token = self.auth.token()?;

        let project = self
            .api
            .update_project(&token, id, &update)
            .await
            .map_err(|e| self.auth.check(e))?;

        replace_where(&mut lock(&self.projects), project.clone(), |p| p.id == id);
        Ok(project)
    }

    /// Delete after confirmation. Returns `false` when the user declined.
    pub async fn delete_project(&self, id: DbId, confirm: Confirm) -> Result<bool, ClientError> {
        if confirm == Confirm::No {
            return Ok(false);
        }
        let token = self.auth.token()?;
        let Some(_guard) = self.deletions.begin(id) else {
            return Err(ClientError::Validation(format!("Project {id} is already being deleted")));
        };

        self.api
            .delete_project(&token, id)
            .await
            .map_err(|e| self.auth.check(e))?;

        remove_where(&mut lock(&self.projects), |p| p.id == id);
        tracing::info!(project_id = id, "Project deleted");
        Ok(true)
    }

    // ---- testimonials ----

    pub async fn add_testimonial(&self, input: CreateTestimonial) -> Result<Testimonial, ClientError> {
        validate_new_testimonial(
            &input.client_name,
            &input.content,
            &input.project_context,
            input.rating,
        )?;
        let token = self.auth.token()?;

        let testimonial = self
            .api
            .create_testimonial(&token, &input)
            .await
            .map_err(|e| self.auth.check(e))?;

        push_front(&mut lock(&self.testimonials), testimonial.clone());
        Ok(testimonial)
    }

    pub async fn edit_testimonial(
        &self,
        id: DbId,
        update: UpdateTestimonial,
    ) -> Result<Testimonial, ClientError> {
        validate_testimonial_update(
            update.client_name.as_deref(),
            update.content.as_deref(),
            update.project_context.as_deref(),
            update.rating,
        )?;
        let token = self.auth.token()?;

        let testimonial = self
            .api
            .update_testimonial(&token, id, &update)
            .await
            .map_err(|e| self.auth.check(e))?;

        replace_where(&mut lock(&self.testimonials), testimonial.clone(), |t| t.id == id);
        Ok(testimonial)
    }

    pub async fn delete_testimonial(&self, id: DbId, confirm: Confirm) -> Result<bool, ClientError> {
        if confirm == Confirm::No {
            return Ok(false);
        }
        let token = self.auth.token()?;
        let Some(_guard) = self.deletions.begin(id) else {
            return Err(ClientError::Validation(format!(
                "Testimonial {id} is already being deleted"
            )));
        };

        self.api
            .delete_testimonial(&token, id)
            .await
            .map_err(|e| self.auth.check(e))?;

        remove_where(&mut lock(&self.testimonials), |t| t.id == id);
        Ok(true)
    }

    // ---- messages ----

    /// Open a message. The first view marks it read; later views make no call.
    pub async fn view_message(&self, id: DbId) -> Result<ContactSubmission, ClientError> {
        let current = lock(&self.messages)
            .loaded()
            .and_then(|items| items.iter().find(|m| m.id == id))
            .cloned()
            .ok_or_else(|| ClientError::Validation(format!("Message {id} is not loaded")))?;

        if current.is_read {
            return Ok(current);
        }

        let token = self.auth.token()?;
        let updated = self
            .api
            .mark_contact_read(&token, id)
            .await
            .map_err(|e| self.auth.check(e))?;

        replace_where(&mut lock(&self.messages), updated.clone(), |m| m.id == id);
        Ok(updated)
    }

    pub async fn delete_message(&self, id: DbId, confirm: Confirm) -> Result<bool, ClientError> {
        if confirm == Confirm::No {
            return Ok(false);
        }
        let token = self.auth.token()?;
        let Some(_guard) = self.deletions.begin(id) else {
            return Err(ClientError::Validation(format!("Message {id} is already being deleted")));
        };

        self.api
            .delete_contact(&token, id)
            .await
            .map_err(|e| self.auth.check(e))?;

        remove_where(&mut lock(&self.messages), |m| m.id == id);
        Ok(true)
    }

    /// Messages not yet opened.
    pub fn unread_count(&self) -> usize {
        lock(&self.messages)
            .loaded()
            .map_or(0, |items| items.iter().filter(|m| !m.is_read).count())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use folio_core::project::ProjectType;
    use tokio::sync::Notify;

    use crate::admin::session::MemorySessionStore;
    use crate::testing::{contact, project, testimonial, FakeApi, FAKE_PASSWORD, FAKE_USERNAME};

    use super::*;

    async fn logged_in(api: &FakeApi) -> AdminAuth<MemorySessionStore> {
        let auth = AdminAuth::new(MemorySessionStore::default());
        auth.login(api, FAKE_USERNAME, FAKE_PASSWORD).await.unwrap();
        auth
    }

    #[test]
    fn deletion_guard_releases_on_drop() {
        let tracker = DeletionTracker::default();
        let guard = tracker.begin(7).unwrap();
        assert!(tracker.is_deleting(7));
        assert!(tracker.begin(7).is_none());
        drop(guard);
        assert!(!tracker.is_deleting(7));
    }

    #[tokio::test]
    async fn incomplete_project_never_reaches_api() {
        let api = FakeApi::default();
        let auth = logged_in(&api).await;
        let dashboard = Dashboard::new(&api, &auth);

        let result = dashboard
            .add_project(ProjectDraft {
                title: "Villa".into(),
                ..Default::default()
            })
            .await;

        assert_matches!(result, Err(ClientError::Validation(_)));
        assert!(api.state().projects.is_empty());
    }

    #[tokio::test]
    async fn declined_delete_keeps_item() {
        let api = FakeApi::default();
        api.state().projects = vec![project(1, "Loft", ProjectType::Interior)];
        let auth = logged_in(&api).await;
        let dashboard = Dashboard::new(&api, &auth);
        dashboard.refresh().await.unwrap();

        assert!(!dashboard.delete_project(1, Confirm::No).await.unwrap());
        assert_eq!(api.state().projects.len(), 1);

        assert!(dashboard.delete_project(1, Confirm::Yes).await.unwrap());
        assert!(api.state().projects.is_empty());
        assert_eq!(dashboard.projects(), LoadState::Empty);
        assert!(!dashboard.is_deleting(1));
    }

    #[tokio::test]
    async fn pending_delete_marks_only_its_row() {
        let gate = Arc::new(Notify::new());
        let api = FakeApi::with_delete_gate(gate.clone());
        api.state().projects = vec![
            project(1, "Loft", ProjectType::Interior),
            project(2, "Villa", ProjectType::Architectural),
        ];
        let auth = logged_in(&api).await;
        let dashboard = Dashboard::new(&api, &auth);
        dashboard.refresh().await.unwrap();

        let delete = dashboard.delete_project(1, Confirm::Yes);
        tokio::pin!(delete);
        assert!(futures::poll!(delete.as_mut()).is_pending());

        assert!(dashboard.is_deleting(1));
        assert!(!dashboard.is_deleting(2));
        assert_matches!(
            dashboard.delete_project(1, Confirm::Yes).await,
            Err(ClientError::Validation(msg)) if msg.contains("already being deleted")
        );
        assert_eq!(dashboard.projects().loaded().map(Vec::len), Some(2));

        gate.notify_one();
        assert!(delete.await.unwrap());

        assert!(!dashboard.is_deleting(1));
        assert!(!dashboard.is_deleting(2));
        let ids: Vec<_> = dashboard.projects().loaded().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn deleting_testimonial_keeps_others_in_order() {
        let api = FakeApi::default();
        api.state().testimonials = vec![testimonial(3, "C"), testimonial(2, "B"), testimonial(1, "A")];
        let auth = logged_in(&api).await;
        let dashboard = Dashboard::new(&api, &auth);
        dashboard.refresh().await.unwrap();

        dashboard.delete_testimonial(2, Confirm::Yes).await.unwrap();

        let ids: Vec<_> = dashboard.testimonials().loaded().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn first_view_marks_read_once() {
        let api = FakeApi::default();
        api.state().contacts = vec![contact(1, "Jane")];
        let auth = logged_in(&api).await;
        let dashboard = Dashboard::new(&api, &auth);
        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.unread_count(), 1);

        assert!(dashboard.view_message(1).await.unwrap().is_read);
        assert!(dashboard.view_message(1).await.unwrap().is_read);

        assert_eq!(api.state().mark_read_calls, 1);
        assert_eq!(dashboard.unread_count(), 0);
    }

    #[tokio::test]
    async fn server_rejection_logs_out() {
        let api = FakeApi::default();
        let auth = logged_in(&api).await;
        api.state().reject_tokens = true;
        let dashboard = Dashboard::new(&api, &auth);

        assert_matches!(dashboard.refresh().await, Err(ClientError::LoggedOut));
        assert_matches!(auth.token(), Err(ClientError::LoggedOut));
    }

    #[tokio::test]
    async fn guarded_operation_without_session_fails() {
        let api = FakeApi::default();
        let auth = AdminAuth::new(MemorySessionStore::default());
        let dashboard = Dashboard::new(&api, &auth);

        assert_matches!(
            dashboard.delete_message(1, Confirm::Yes).await,
            Err(ClientError::LoggedOut)
        );
    }
}
