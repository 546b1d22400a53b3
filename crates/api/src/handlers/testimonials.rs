//! Handlers for the `/testimonials` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::testimonial::{validate_new_testimonial, validate_testimonial_update};
use folio_core::types::DbId;
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use folio_db::repositories::TestimonialRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::admin::RequireAdmin;
use crate::query::IdQuery;
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// Request body for `PUT /testimonials`. The target id travels in the body.
#[derive(Debug, Deserialize)]
pub struct UpdateTestimonialRequest {
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: UpdateTestimonial,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}

/// GET /api/v1/testimonials
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(testimonials)))
}

/// POST /api/v1/testimonials
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    validate_new_testimonial(
        &input.client_name,
        &input.content,
        &input.project_context,
        input.rating,
    )?;

    let create = CreateTestimonial {
        client_name: input.client_name.trim().to_string(),
        client_title: input.client_title.trim().to_string(),
        content: input.content.trim().to_string(),
        rating: input.rating,
        project_context: input.project_context.trim().to_string(),
    };
    let testimonial = TestimonialRepo::create(&state.pool, &create).await?;

    tracing::info!(
        testimonial_id = testimonial.id,
        rating = testimonial.rating,
        "Testimonial created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(testimonial))))
}

/// PUT /api/v1/testimonials
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<UpdateTestimonialRequest>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Testimonial id is required".into()))?;
    let fields = input.fields;

    validate_testimonial_update(
        fields.client_name.as_deref(),
        fields.content.as_deref(),
        fields.project_context.as_deref(),
        fields.rating,
    )?;

    let update = UpdateTestimonial {
        client_name: trimmed(&fields.client_name),
        client_title: trimmed(&fields.client_title),
        content: trimmed(&fields.content),
        rating: fields.rating,
        project_context: trimmed(&fields.project_context),
    };
    let testimonial = TestimonialRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(testimonial_id = id, "Testimonial updated");
    Ok(Json(DataResponse::new(testimonial)))
}

/// DELETE /api/v1/testimonials?id=
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> AppResult<Json<DeleteResponse>> {
    let id = query.require()?;
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(testimonial_id = id, "Testimonial deleted");
    Ok(Json(DeleteResponse::deleted(id)))
}
