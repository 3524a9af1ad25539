//! Profile registration and admin user management against a real database.
//!
//! Require `DATABASE_URL`; run with `cargo test -p heritage-api -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, put_auth, token_for, token_for_identity};
use heritage_core::collaborator::Identity;
use heritage_core::roles::{ROLE_ADMIN, ROLE_CONTRIBUTOR};
use heritage_db::repositories::UserRepo;
use sqlx::PgPool;

fn contributor(uid: &str, name: &str, email: &str) -> String {
    let identity = Identity {
        uid: uid.to_string(),
        display_name: Some(name.to_string()),
        email: Some(email.to_string()),
    };
    token_for_identity(&identity, ROLE_CONTRIBUTOR)
}

async fn register(pool: &PgPool, token: &str) -> serde_json::Value {
    let response = put_auth(common::build_test_app(pool.clone()), "/api/v1/users/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn list_users(pool: &PgPool, search: &str, token: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/admin/users?search={search}"), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn delete_user(pool: &PgPool, id: &str, token: &str) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    delete_auth(app, &format!("/api/v1/admin/users/{id}"), token).await
}

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn register_profile_takes_identity_from_token(pool: PgPool) {
    let json = register(&pool, &contributor("u-1", "Kumari", "kumari@example.com")).await;

    assert_eq!(json["data"]["id"], "u-1");
    assert_eq!(json["data"]["name"], "Kumari");
    assert_eq!(json["data"]["email"], "kumari@example.com");
    assert_eq!(json["data"]["role"], "contributor");

    register(&pool, &contributor("u-1", "Kumari Perera", "kumari@example.com")).await;
    let stored = UserRepo::find_by_id(&pool, "u-1").await.unwrap().unwrap();
    assert_eq!(stored.name, "Kumari Perera");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn admin_searches_users_by_name_or_email(pool: PgPool) {
    register(&pool, &contributor("u-1", "Kumari", "kumari@example.com")).await;
    register(&pool, &contributor("u-2", "Saman", "saman@heritage.lk")).await;
    let admin = token_for("admin-1", ROLE_ADMIN);

    assert_eq!(ids(&list_users(&pool, "", &admin).await).len(), 2);
    assert_eq!(ids(&list_users(&pool, "KUMARI", &admin).await), ["u-1"]);
    assert_eq!(ids(&list_users(&pool, "heritage.lk", &admin).await), ["u-2"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn admin_deletes_user_once(pool: PgPool) {
    register(&pool, &contributor("u-1", "Kumari", "kumari@example.com")).await;
    let admin = token_for("admin-1", ROLE_ADMIN);

    let first = delete_user(&pool, "u-1", &admin).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = delete_user(&pool, "u-1", &admin).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let json = body_json(second).await;
    assert_eq!(json["error"], "User with id u-1 not found");

    assert!(UserRepo::find_by_id(&pool, "u-1").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn contributor_cannot_delete_users(pool: PgPool) {
    register(&pool, &contributor("u-1", "Kumari", "kumari@example.com")).await;
    let token = token_for("u-2", ROLE_CONTRIBUTOR);

    let response = delete_user(&pool, "u-1", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(UserRepo::find_by_id(&pool, "u-1").await.unwrap().is_some());
}
