//! Integration tests for the content repositories.
//!
//! Exercises projects, testimonials and contact submissions against a real
//! database:
//! - Defaults applied on insert
//! - Partial updates leave omitted fields untouched
//! - Deleting one row leaves the others and their order intact
//! - Marking a submission read is idempotent

use folio_core::contact::ContactForm;
use folio_core::project::ProjectType;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use folio_db::repositories::{ContactRepo, ProjectRepo, TestimonialRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: "A quiet house by the lake".to_string(),
        image_url: "https://cdn.example.com/house.jpg".to_string(),
        tags: vec!["Residential".to_string(), "Timber".to_string()],
        project_type: ProjectType::default(),
        gallery_urls: Vec::new(),
    }
}

fn new_testimonial(client_name: &str) -> CreateTestimonial {
    CreateTestimonial {
        client_name: client_name.to_string(),
        client_title: String::new(),
        content: "Careful, calm and on schedule.".to_string(),
        rating: None,
        project_context: "Lake house".to_string(),
    }
}

fn jane() -> ContactForm {
    ContactForm {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        message: "I would like to talk about a renovation.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_create_defaults(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Lake House"))
        .await
        .unwrap();

    assert_eq!(project.title, "Lake House");
    assert_eq!(project.project_type, ProjectType::Architectural);
    assert_eq!(project.tags, vec!["Residential", "Timber"]);
    assert!(project.gallery_urls.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_partial_update(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Before"))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("After".to_string()),
        project_type: Some(ProjectType::Interior),
        gallery_urls: Some(vec!["https://cdn.example.com/1.jpg".to_string()]),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "After");
    assert_eq!(updated.description, project.description);
    assert_eq!(updated.image_url, project.image_url);
    assert_eq!(updated.tags, project.tags);
    assert_eq!(updated.project_type, ProjectType::Interior);
    assert_eq!(updated.gallery_urls.len(), 1);
    assert!(updated.updated_at >= project.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_missing_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 9999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_list_newest_first(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();

    let ids: Vec<i64> = ProjectRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_blank_title_rejected_by_schema(pool: PgPool) {
    let result = ProjectRepo::create(&pool, &new_project("   ")).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonial_rating_defaults_to_five(pool: PgPool) {
    let testimonial = TestimonialRepo::create(&pool, &new_testimonial("Ana"))
        .await
        .unwrap();
    assert_eq!(testimonial.rating, 5);
    assert_eq!(testimonial.client_title, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonial_rating_out_of_range_rejected(pool: PgPool) {
    let mut input = new_testimonial("Ana");
    input.rating = Some(6);
    assert!(TestimonialRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonial_delete_keeps_others_in_order(pool: PgPool) {
    let a = TestimonialRepo::create(&pool, &new_testimonial("A")).await.unwrap();
    let b = TestimonialRepo::create(&pool, &new_testimonial("B")).await.unwrap();
    let c = TestimonialRepo::create(&pool, &new_testimonial("C")).await.unwrap();

    assert!(TestimonialRepo::delete(&pool, b.id).await.unwrap());

    let ids: Vec<i64> = TestimonialRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![c.id, a.id]);

    // Second delete of the same id is a no-op.
    assert!(!TestimonialRepo::delete(&pool, b.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonial_partial_update(pool: PgPool) {
    let t = TestimonialRepo::create(&pool, &new_testimonial("Ana")).await.unwrap();
    let update = UpdateTestimonial {
        rating: Some(3),
        ..Default::default()
    };
    let updated = TestimonialRepo::update(&pool, t.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.rating, 3);
    assert_eq!(updated.client_name, "Ana");
    assert_eq!(updated.content, t.content);
}

// ---------------------------------------------------------------------------
// Contact submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_create_is_unread(pool: PgPool) {
    let submission = ContactRepo::create(&pool, &jane()).await.unwrap();
    assert_eq!(submission.name, "Jane");
    assert_eq!(submission.email, "jane@x.com");
    assert!(!submission.is_read);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_mark_read_is_idempotent(pool: PgPool) {
    let submission = ContactRepo::create(&pool, &jane()).await.unwrap();

    let first = ContactRepo::set_read(&pool, submission.id, true).await.unwrap();
    let second = ContactRepo::set_read(&pool, submission.id, true).await.unwrap();

    assert!(first.unwrap().is_read);
    assert!(second.unwrap().is_read);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_delete_removes_from_list(pool: PgPool) {
    let submission = ContactRepo::create(&pool, &jane()).await.unwrap();
    assert!(ContactRepo::delete(&pool, submission.id).await.unwrap());

    let remaining = ContactRepo::list(&pool).await.unwrap();
    assert!(remaining.iter().all(|s| s.id != submission.id));
    assert!(ContactRepo::find_by_id(&pool, submission.id)
        .await
        .unwrap()
        .is_none());
}
