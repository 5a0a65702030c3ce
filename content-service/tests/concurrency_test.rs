//! Concurrent review behavior: two staff reviews racing on one entity
//! resolve last-write-wins. This pins the deliberate behavior; there is no
//! optimistic locking in this workflow.

mod common;

use common::{TestApp, TestUser};
use serde_json::{Value, json};

#[tokio::test]
async fn concurrent_reviews_are_last_write_wins() {
    let app = TestApp::spawn().await;
    let owner = TestUser::new("BUSINESS_FOOD");
    let admin = TestUser::new("ADMIN");
    let moderator = TestUser::new("MODERATOR");

    let response = app
        .post_as("/businesses", &owner)
        .json(&json!({ "name": "Quiosque Disputado", "category": "FOOD" }))
        .send()
        .await
        .unwrap();
    let business: Value = response.json().await.unwrap();
    let id = business["id"].as_str().unwrap().to_string();

    let approve = app
        .post_as(&format!("/businesses/{}/review", id), &admin)
        .json(&json!({ "decision": "approve", "details": "Tudo certo" }))
        .send();
    let reject = app
        .post_as(&format!("/businesses/{}/review", id), &moderator)
        .json(&json!({ "decision": "reject", "details": "Documentação pendente" }))
        .send();

    let (approve_result, reject_result) = tokio::join!(approve, reject);
    assert_eq!(approve_result.unwrap().status(), 200);
    assert_eq!(reject_result.unwrap().status(), 200);

    // Whichever write landed last defines the final state; both outcomes are
    // internally consistent (status matches its details).
    let body: Value = app
        .get_as(&format!("/businesses/{}", id), &admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    match body["status"].as_str().unwrap() {
        "APPROVED" => assert_eq!(body["status_details"], "Tudo certo"),
        "REJECTED" => assert_eq!(body["status_details"], "Documentação pendente"),
        other => panic!("Unexpected final status: {}", other),
    }
}
