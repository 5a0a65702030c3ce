//! Agency and tour workflow tests: the review rules hold across entity kinds.

mod common;

use common::{TestApp, TestUser};
use serde_json::{Value, json};

#[tokio::test]
async fn agency_registration_and_review() {
    let app = TestApp::spawn().await;
    let guide = TestUser::new("GUIDE");
    let admin = TestUser::new("ADMIN");
    let food_owner = TestUser::new("BUSINESS_FOOD");

    // Business owners may not register agencies
    let response = app
        .post_as("/agencies", &food_owner)
        .json(&json!({ "name": "Agência Clandestina" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    let response = app
        .post_as("/agencies", &guide)
        .json(&json!({ "name": "Litoral Tours", "cadastur": "26.012345.10.0001-7" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let agency: Value = response.json().await.unwrap();
    let id = agency["id"].as_str().unwrap().to_string();
    assert_eq!(agency["status"], "PENDING");

    // One agency per guide
    let response = app
        .post_as("/agencies", &guide)
        .json(&json!({ "name": "Segunda Agência" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Reject requires a reason here too
    let response = app
        .post_as(&format!("/agencies/{}/review", id), &admin)
        .json(&json!({ "decision": "reject", "details": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .post_as(&format!("/agencies/{}/review", id), &admin)
        .json(&json!({ "decision": "approve", "details": "Cadastur conferido" }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "APPROVED");

    // Owner edit resets the approval
    let response = app
        .put_as(&format!("/agencies/{}", id), &guide)
        .json(&json!({ "description": "Passeios de barco e trilhas" }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "PENDING");

    // Approved agencies only on the public site
    let public: Vec<Value> = app
        .client
        .get(app.url("/public/agencies"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(public.is_empty());
}

#[tokio::test]
async fn guide_owns_multiple_tours_and_staff_edit_preserves_status() {
    let app = TestApp::spawn().await;
    let guide = TestUser::new("GUIDE");
    let other_guide = TestUser::new("GUIDE");
    let moderator = TestUser::new("MODERATOR");

    for title in ["Trilha do Farol", "Volta à Ilha"] {
        let response = app
            .post_as("/tours", &guide)
            .json(&json!({ "title": title, "price_cents": 15000 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    // Owner listing is scoped to the guide's own tours
    let own: Vec<Value> = app
        .get_as("/tours", &guide)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(own.len(), 2);
    let tour_id = own[0]["id"].as_str().unwrap().to_string();

    let other_own: Vec<Value> = app
        .get_as("/tours", &other_guide)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(other_own.is_empty());

    // A different guide cannot edit someone else's tour
    let response = app
        .put_as(&format!("/tours/{}", tour_id), &other_guide)
        .json(&json!({ "title": "Roubada" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // Moderator approves, then edits without resetting the status
    let response = app
        .post_as(&format!("/tours/{}/review", tour_id), &moderator)
        .json(&json!({ "decision": "approve" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .put_as(&format!("/tours/{}", tour_id), &moderator)
        .json(&json!({ "price_cents": 18000 }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "APPROVED");
    assert_eq!(body["price_cents"], 18000);

    // Owner edit resets to pending
    let response = app
        .put_as(&format!("/tours/{}", tour_id), &guide)
        .json(&json!({ "description": "Saída às 8h" }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "PENDING");

    // Status filter on staff listing
    let pending: Vec<Value> = app
        .get_as("/tours?status=PENDING", &moderator)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pending.len(), 2);

    let approved: Vec<Value> = app
        .get_as("/tours?status=APPROVED", &moderator)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(approved.is_empty());
}
