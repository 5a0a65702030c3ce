//! Tag and beach reference-data tests: admin-only mutation, staff management.

mod common;

use common::{TestApp, TestUser};
use serde_json::{Value, json};

#[tokio::test]
async fn every_role_views_tags_but_only_admin_mutates() {
    let app = TestApp::spawn().await;
    let admin = TestUser::new("ADMIN");
    let moderator = TestUser::new("MODERATOR");
    let food_owner = TestUser::new("BUSINESS_FOOD");
    let guide = TestUser::new("GUIDE");

    let response = app
        .post_as("/tags", &admin)
        .json(&json!({ "name": "mergulho" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let tag: Value = response.json().await.unwrap();
    let tag_id = tag["id"].as_str().unwrap().to_string();

    // Everyone can list
    for user in [admin, moderator, food_owner, guide] {
        let response = app.get_as("/tags", &user).send().await.unwrap();
        assert_eq!(response.status(), 200, "role {} should view tags", user.role);
        let tags: Vec<Value> = response.json().await.unwrap();
        assert_eq!(tags.len(), 1);
    }

    // Only ADMIN mutates
    for user in [moderator, food_owner, guide] {
        let response = app
            .post_as("/tags", &user)
            .json(&json!({ "name": "trilha" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 403, "role {} should not create", user.role);

        let response = app
            .put_as(&format!("/tags/{}", tag_id), &user)
            .json(&json!({ "name": "renomeada" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 403, "role {} should not edit", user.role);

        let response = app
            .delete_as(&format!("/tags/{}", tag_id), &user)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 403, "role {} should not delete", user.role);
    }

    // Duplicate tag name is a validation failure
    let response = app
        .post_as("/tags", &admin)
        .json(&json!({ "name": "Mergulho" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .delete_as(&format!("/tags/{}", tag_id), &admin)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn beaches_are_staff_managed_and_publicly_readable() {
    let app = TestApp::spawn().await;
    let admin = TestUser::new("ADMIN");
    let moderator = TestUser::new("MODERATOR");
    let guide = TestUser::new("GUIDE");

    let response = app
        .post_as("/beaches", &moderator)
        .json(&json!({ "name": "Praia do Forte", "location": "Zona Norte" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let beach: Value = response.json().await.unwrap();
    let beach_id = beach["id"].as_str().unwrap().to_string();

    // Owners/guides hold no beach permissions
    let response = app.get_as("/beaches", &guide).send().await.unwrap();
    assert_eq!(response.status(), 403);
    let response = app
        .post_as("/beaches", &guide)
        .json(&json!({ "name": "Praia Pirata" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // Moderator edits, but only ADMIN deletes
    let response = app
        .put_as(&format!("/beaches/{}", beach_id), &moderator)
        .json(&json!({ "description": "Águas calmas" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .delete_as(&format!("/beaches/{}", beach_id), &moderator)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // Public site reads without identity
    let public: Vec<Value> = app
        .client
        .get(app.url("/public/beaches"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["name"], "Praia do Forte");

    let response = app
        .delete_as(&format!("/beaches/{}", beach_id), &admin)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
