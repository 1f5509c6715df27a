use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use loadout_testing::auth::MockAuth;

use crate::helpers::{break_store, test_db, test_server, with_auth};

// ── GET /agents ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_all_agents_with_total() {
    let server = test_server(test_db().await);

    let resp = server.get("/agents").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["total"], 4);
    assert_eq!(body["agents"][0]["id"], "jett");
    assert_eq!(body["agents"][0]["role"], "Duelist");
    assert_eq!(body["agents"][0]["abilities"].as_array().unwrap().len(), 4);
    assert!(body["agents"][0]["imageUrl"].as_str().unwrap().ends_with("Jett.png"));
}

#[tokio::test]
async fn should_filter_agents_by_role_and_search() {
    let server = test_server(test_db().await);

    let resp = server
        .get("/agents")
        .add_query_param("role", "Controller")
        .add_query_param("search", "SHADOW")
        .await;

    let body: Value = resp.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["agents"][0]["name"], "Omen");
}

#[tokio::test]
async fn should_return_empty_agent_list_for_unknown_role() {
    let server = test_server(test_db().await);

    let resp = server.get("/agents").add_query_param("role", "duelist").await;

    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>(), json!({ "agents": [], "total": 0 }));
}

// ── GET /weapons ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_weapons_by_type_and_max_cost() {
    let server = test_server(test_db().await);

    let resp = server
        .get("/weapons")
        .add_query_param("type", "Primary")
        .add_query_param("maxCost", "2000")
        .await;

    let body: Value = resp.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["weapons"][0]["id"], "spectre");
    assert_eq!(body["weapons"][0]["type"], "Primary");
    assert_eq!(body["weapons"][0]["cost"], 1600);
}

#[tokio::test]
async fn should_ignore_non_positive_or_blank_max_cost() {
    let server = test_server(test_db().await);
    let unset: Value = server.get("/weapons").await.json();
    assert_eq!(unset["total"], 6);

    for max_cost in ["0", "-500", ""] {
        let resp = server
            .get("/weapons")
            .add_query_param("maxCost", max_cost)
            .await;
        resp.assert_status_ok();
        assert_eq!(resp.json::<Value>(), unset, "maxCost={max_cost:?}");
    }
}

#[tokio::test]
async fn should_reject_non_numeric_max_cost() {
    let server = test_server(test_db().await);

    let resp = server
        .get("/weapons")
        .add_query_param("maxCost", "cheap")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

// ── GET /health ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_healthy() {
    let server = test_server(test_db().await);

    let resp = server.get("/health").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    let ts = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    assert!(resp.headers().contains_key("x-request-id"));
}

// ── GET /stats ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_stats_from_store() {
    let server = test_server(test_db().await);
    for (user, agent) in [("alice", "sova"), ("bob", "sova"), ("carol", "jett")] {
        with_auth(server.post("/loadouts"), &MockAuth::dev(user))
            .json(&json!({ "agent": agent }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = server.get("/stats").await.json();

    assert_eq!(
        body,
        json!({
            "totalAgents": 4,
            "totalWeapons": 6,
            "totalLoadouts": 3,
            "popularAgent": "Sova",
        })
    );
}

#[tokio::test]
async fn should_report_zero_loadouts_when_store_is_unavailable() {
    let db = test_db().await;
    let server = test_server(db.clone());
    break_store(&db).await;

    let resp = server.get("/stats").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["totalLoadouts"], 0);
    assert_eq!(body["totalAgents"], 4);
    assert_eq!(body["popularAgent"], "Jett");
}

// ── POST/GET /loadouts ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_then_list_loadout() {
    let server = test_server(test_db().await);
    let alice = MockAuth::dev("alice");
    let before = Utc::now() - chrono::Duration::milliseconds(1);

    let created = with_auth(server.post("/loadouts"), &alice)
        .json(&json!({ "agent": "jett", "primary": "vandal", "sidearm": "" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(
        created.json::<Value>(),
        json!({ "id": 1, "message": "Loadout saved successfully" })
    );

    let listed = with_auth(server.get("/loadouts"), &alice).await;
    listed.assert_status_ok();
    let body: Value = listed.json();
    assert_eq!(body["total"], 1);
    let loadout = &body["loadouts"][0];
    assert_eq!(loadout["id"], 1);
    assert_eq!(loadout["userId"], "dev-alice");
    assert_eq!(loadout["agent"], "jett");
    assert_eq!(loadout["primary"], "vandal");
    assert!(loadout["sidearm"].is_null());
    let created_at = DateTime::parse_from_rfc3339(loadout["created"].as_str().unwrap()).unwrap();
    assert!(created_at >= before);
}

#[tokio::test]
async fn should_scope_loadout_list_to_caller() {
    let server = test_server(test_db().await);
    let alice = MockAuth::dev("alice");
    let bob = MockAuth::dev("bob");

    with_auth(server.post("/loadouts"), &alice)
        .json(&json!({ "agent": "sage" }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = with_auth(server.get("/loadouts"), &bob).await.json();
    assert_eq!(body, json!({ "loadouts": [], "total": 0 }));
}

#[tokio::test]
async fn should_reject_loadout_without_agent() {
    let server = test_server(test_db().await);
    let alice = MockAuth::dev("alice");

    for payload in [json!({}), json!({ "agent": "" }), json!({ "agent": "  ", "primary": "vandal" })] {
        let resp = with_auth(server.post("/loadouts"), &alice)
            .json(&payload)
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(resp.json::<Value>()["kind"], "MISSING_AGENT");
    }

    let body: Value = with_auth(server.get("/loadouts"), &alice).await.json();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn should_reject_loadout_requests_without_valid_credential() {
    let server = test_server(test_db().await);

    let missing = server
        .post("/loadouts")
        .json(&json!({ "agent": "jett" }))
        .await;
    missing.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(missing.json::<Value>()["kind"], "UNAUTHENTICATED");

    for credential in ["guest", "dev-"] {
        let resp = server
            .get("/loadouts")
            .authorization_bearer(credential)
            .await;
        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    let body: Value = server.get("/stats").await.json();
    assert_eq!(body["totalLoadouts"], 0);
}

#[tokio::test]
async fn should_hide_store_failure_detail_on_create() {
    let db = test_db().await;
    let server = test_server(db.clone());
    break_store(&db).await;

    let resp = with_auth(server.post("/loadouts"), &MockAuth::dev("alice"))
        .json(&json!({ "agent": "jett" }))
        .await;

    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.json::<Value>(),
        json!({ "kind": "PERSISTENCE", "message": "internal error" })
    );
}
