//! End-to-end coverage of the property CRUD surface.

mod helpers;

use helpers::spawn_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_property_lifecycle_end_to_end() {
    let app = spawn_app(None).await;

    // Create
    let created: Value = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "title": "Lake House", "location": "Austin", "price": 250000 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created["title"], "Lake House");
    assert_eq!(created["description"], "");
    assert_eq!(created["images"], json!([]));
    let id = created["id"].clone();
    assert!(id.is_number());

    // List includes the record
    let list: Value = app
        .client
        .get(app.url("/api/properties"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Partial update changes only the price
    let updated: Value = app
        .client
        .put(app.url(&format!("/api/properties/{}", id)))
        .json(&json!({ "price": 260000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["price"], json!(260000.0));
    assert_eq!(updated["title"], "Lake House");
    assert_eq!(updated["id"], id);

    // Delete, then the catalog is empty again
    let resp = app
        .client
        .delete(app.url(&format!("/api/properties/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Deleted successfully");

    let list: Value = app
        .client
        .get(app.url("/api/properties"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_returns_201() {
    let app = spawn_app(None).await;
    let resp = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "title": "A", "location": "B", "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn test_create_missing_title_is_400_with_error_body() {
    let app = spawn_app(None).await;
    let resp = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "location": "X", "price": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_create_accepts_numeric_string_price() {
    let app = spawn_app(None).await;
    let created: Value = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "title": "A", "location": "B", "price": "99500" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["price"], json!(99500.0));
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = spawn_app(None).await;
    let resp = app
        .client
        .put(app.url("/api/properties/41"))
        .json(&json!({ "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Property not found");
}

#[tokio::test]
async fn test_update_blanking_required_field_is_400() {
    let app = spawn_app(None).await;
    let created: Value = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "title": "A", "location": "B", "price": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let resp = app
        .client
        .put(app.url(&format!("/api/properties/{}", created["id"])))
        .json(&json!({ "title": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // The stored record is untouched.
    let list: Value = app
        .client
        .get(app.url("/api/properties"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list[0]["title"], "A");
}

#[tokio::test]
async fn test_delete_twice_is_404_second_time() {
    let app = spawn_app(None).await;
    let created: Value = app
        .client
        .post(app.url("/api/properties"))
        .json(&json!({ "title": "A", "location": "B", "price": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let url = app.url(&format!("/api/properties/{}", created["id"]));

    assert_eq!(app.client.delete(&url).send().await.unwrap().status(), 200);
    assert_eq!(app.client.delete(&url).send().await.unwrap().status(), 404);
}

#[tokio::test]
async fn test_non_numeric_id_is_404_not_coerced() {
    let app = spawn_app(None).await;
    let resp = app
        .client
        .delete(app.url("/api/properties/not-a-number"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_unmatched_route_is_json_404() {
    let app = spawn_app(None).await;
    let resp = app
        .client
        .get(app.url("/api/no-such-route"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not found");
}
