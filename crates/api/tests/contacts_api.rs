//! HTTP-level integration tests for the `/contacts` resource.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, post_json, put_json_auth, RecordingNotifier,
};
use serde_json::json;
use sqlx::PgPool;

fn jane() -> serde_json::Value {
    json!({
        "name": " Jane ",
        "email": "jane@x.com",
        "message": "I would like a quote for a kitchen."
    })
}

/// A visitor submits the form, the owner is notified, and the admin reads
/// and then deletes the message.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_round_trip(pool: PgPool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with(pool.clone(), None, notifier.clone()).await;
    let token = admin_token(app.clone(), &pool).await;

    let response = post_json(app.clone(), "/api/v1/contacts", jane()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = body_json(response).await["data"].clone();
    assert_eq!(receipt["name"], "Jane");
    assert_eq!(receipt["is_read"], false);
    assert_eq!(receipt["email_sent"], true);
    let id = receipt["id"].as_i64().unwrap();

    {
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_name, "Jane");
        assert_eq!(sent[0].from_email, "jane@x.com");
    }

    let list = body_json(get_auth(app.clone(), "/api/v1/contacts", &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    for _ in 0..2 {
        let response = put_json_auth(app.clone(), "/api/v1/contacts", json!({ "id": id }), &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["is_read"], true);
    }

    let response = delete_auth(app.clone(), &format!("/api/v1/contacts?id={id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get_auth(app, "/api/v1/contacts", &token).await).await;
    assert_eq!(list["data"], json!([]));
}

/// A failed notification still stores the submission.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_stored_when_email_fails(pool: PgPool) {
    let app = common::build_test_app_with(pool.clone(), None, Arc::new(RecordingNotifier::failing())).await;
    let token = admin_token(app.clone(), &pool).await;

    let response = post_json(app.clone(), "/api/v1/contacts", jane()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["email_sent"], false);

    let list = body_json(get_auth(app, "/api/v1/contacts", &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

/// Invalid submissions are rejected with the form's messages and not stored.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = admin_token(app.clone(), &pool).await;

    let response = post_json(
        app.clone(),
        "/api/v1/contacts",
        json!({ "name": "Jane", "email": "jane@x.com", "message": "too short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Message must be at least 10 characters"
    );

    let response = post_json(
        app.clone(),
        "/api/v1/contacts",
        json!({ "name": "Jane", "email": "nope", "message": "A long enough message" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get_auth(app, "/api/v1/contacts", &token).await).await;
    assert_eq!(list["data"], json!([]));
}
