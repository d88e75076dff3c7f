mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn listings_never_cross_owners() -> Result<()> {
    let server = common::spawn_app().await?;
    let client = reqwest::Client::new();
    let alice = common::token_for("alice");
    let bob = common::token_for("bob");

    // Alice creates a record
    let res = client
        .post(format!("{}/todo", server.base_url))
        .bearer_auth(&alice)
        .json(&json!({"title": "alice's secret"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Bob's listing is still empty
    let res = client
        .get(format!("{}/todo", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.get("data").unwrap(), &json!([]), "body: {}", body);

    // Bob's own create answers with only Bob's records
    let res = client
        .post(format!("{}/todo", server.base_url))
        .bearer_auth(&bob)
        .json(&json!({"title": "bob's task"}))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    let data = body.get("data").unwrap().as_array().unwrap();
    assert_eq!(data.len(), 1, "body: {}", body);
    assert_eq!(data[0].get("title").unwrap(), "bob's task");

    // Alice still sees exactly her own record
    let res = client
        .get(format!("{}/todo", server.base_url))
        .bearer_auth(&alice)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    let data = body.get("data").unwrap().as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].get("title").unwrap(), "alice's secret");

    Ok(())
}

#[tokio::test]
async fn owner_comes_from_the_token_not_the_body() -> Result<()> {
    let server = common::spawn_app().await?;
    let client = reqwest::Client::new();
    let mallory = common::token_for("mallory");

    // A body that tries to smuggle in someone else's owner id is decoded
    // into the typed payload, which has no owner field at all.
    let res = client
        .post(format!("{}/todo", server.base_url))
        .bearer_auth(&mallory)
        .json(&json!({"title": "planted", "owner_id": "victim"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // The record landed under mallory, not under "victim"
    let res = client
        .get(format!("{}/todo", server.base_url))
        .bearer_auth(common::token_for("victim"))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.get("data").unwrap(), &json!([]), "body: {}", body);

    let res = client
        .get(format!("{}/todo", server.base_url))
        .bearer_auth(&mallory)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.get("data").unwrap().as_array().unwrap().len(), 1);

    Ok(())
}
