mod common;

use api_core::config::stage::StagePosture;
use business::domain::errors::RepositoryError;
use poem::http::StatusCode;
use serde_json::json;

use common::{TENANT_A, TENANT_B, TestApp, body_of};

#[tokio::test]
async fn should_create_tabung_type_with_created_status() {
    let app = TestApp::documented();

    let resp = app
        .post(TENANT_A, "/tabung-type", json!({ "name": "  Tabung Pembinaan " }))
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body = body_of(resp).await;
    assert_eq!(body["name"], "Tabung Pembinaan");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn should_keep_records_of_one_tenant_invisible_to_another() {
    let app = TestApp::documented();
    let created = body_of(
        app.post(TENANT_A, "/tabung-type", json!({ "name": "Infaq Jumaat" }))
            .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let listed = body_of(app.get(TENANT_B, "/tabung-type").await).await;
    assert_eq!(listed, json!([]));

    app.get(TENANT_B, &format!("/tabung-type/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.delete(TENANT_B, &format!("/tabung-type/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.get(TENANT_A, &format!("/tabung-type/{}", id))
        .await
        .assert_status_is_ok();
}

#[tokio::test]
async fn should_return_same_record_on_repeated_reads() {
    let app = TestApp::documented();
    let id = app
        .seed_tabung(TENANT_A, json!({ "name": "Tabung Ramadan" }))
        .await;

    let first = body_of(app.get(TENANT_A, &format!("/tabung/{}", id)).await).await;
    let second = body_of(app.get(TENANT_A, &format!("/tabung/{}", id)).await).await;

    assert_eq!(first, second);
    assert_eq!(first["name"], "Tabung Ramadan");
}

#[tokio::test]
async fn should_reject_request_without_tenant_before_any_repository_call() {
    let app = TestApp::documented();

    let resp = app.client.get("/tabung").send().await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.repository_calls(), 0);
}

#[tokio::test]
async fn should_reject_unknown_tenant_before_any_repository_call() {
    let app = TestApp::documented();

    let resp = app.get("masjid-tiada", "/tabung").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "tenant.not_found");
    assert_eq!(app.repository_calls(), 0);
}

#[tokio::test]
async fn should_require_token_in_guarded_stage() {
    let app = TestApp::new(StagePosture::Guarded);

    let resp = app
        .client
        .get("/tabung")
        .header("__tenant", TENANT_A)
        .send()
        .await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.repository_calls(), 0);

    app.get(TENANT_A, "/tabung").await.assert_status_is_ok();
}

#[tokio::test]
async fn should_reject_malformed_id() {
    let app = TestApp::documented();

    let resp = app.get(TENANT_A, "/tabung/not-a-uuid").await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "tabung.invalid_id");
}

#[tokio::test]
async fn should_reject_tabung_with_type_of_another_tenant() {
    let app = TestApp::documented();
    let foreign_type = body_of(
        app.post(TENANT_B, "/tabung-type", json!({ "name": "Infaq" }))
            .await,
    )
    .await;

    let resp = app
        .post(
            TENANT_A,
            "/tabung",
            json!({ "tabung_type_id": foreign_type["id"], "name": "Tabung Asing" }),
        )
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "tabung.tabung_type_not_found");
}

#[tokio::test]
async fn should_reject_tabung_whose_period_ends_before_it_starts() {
    let app = TestApp::documented();
    let tabung_type = body_of(
        app.post(TENANT_A, "/tabung-type", json!({ "name": "Infaq" }))
            .await,
    )
    .await;

    let resp = app
        .post(
            TENANT_A,
            "/tabung",
            json!({
                "tabung_type_id": tabung_type["id"],
                "name": "Tabung Korban",
                "start_date": "2026-06-01",
                "end_date": "2026-05-01"
            }),
        )
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_refuse_deleting_tabung_type_still_in_use() {
    let app = TestApp::documented();
    let id = app.seed_tabung(TENANT_A, json!({ "name": "Tabung Masjid" })).await;
    let tabung = body_of(app.get(TENANT_A, &format!("/tabung/{}", id)).await).await;
    let type_id = tabung["tabung_type_id"].as_str().unwrap();

    let refused = app
        .delete(TENANT_A, &format!("/tabung-type/{}", type_id))
        .await;
    refused.assert_status(StatusCode::CONFLICT);

    app.delete(TENANT_A, &format!("/tabung/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.delete(TENANT_A, &format!("/tabung-type/{}", type_id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_update_tabung_partially() {
    let app = TestApp::documented();
    let id = app
        .seed_tabung(TENANT_A, json!({ "name": "Tabung Lama" }))
        .await;

    let resp = app
        .put(
            TENANT_A,
            &format!("/tabung/{}", id),
            json!({ "name": "Tabung Baru", "is_cents_enabled": true }),
        )
        .await;

    resp.assert_status_is_ok();
    let body = body_of(resp).await;
    assert_eq!(body["name"], "Tabung Baru");
    assert_eq!(body["is_cents_enabled"], true);
}

#[tokio::test]
async fn should_record_kutipan_and_total_them_per_tabung() {
    let app = TestApp::documented();
    let tabung_id = app
        .seed_tabung(TENANT_A, json!({ "name": "Infaq Jumaat" }))
        .await;

    for (amount, at) in [
        (2_550, "2026-03-13T05:00:00Z"),
        (1_000, "2026-03-06T05:00:00Z"),
    ] {
        app.post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": tabung_id, "amount_sen": amount, "collected_at": at }),
        )
        .await
        .assert_status(StatusCode::CREATED);
    }

    let resp = app
        .get(TENANT_A, &format!("/kutipan/tabung/{}", tabung_id))
        .await;

    resp.assert_status_is_ok();
    let body = body_of(resp).await;
    assert_eq!(body["total_sen"], 3_550);
    assert_eq!(body["entries"][0]["amount_sen"], 1_000);
    assert_eq!(body["entries"][1]["amount_sen"], 2_550);
}

#[tokio::test]
async fn should_bound_kutipan_listing_by_range() {
    let app = TestApp::documented();
    let tabung_id = app.seed_tabung(TENANT_A, json!({ "name": "Infaq" })).await;
    for at in ["2026-01-02T00:00:00Z", "2026-02-02T00:00:00Z"] {
        app.post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": tabung_id, "amount_sen": 500, "collected_at": at }),
        )
        .await
        .assert_status(StatusCode::CREATED);
    }

    let body = body_of(
        app.get(
            TENANT_A,
            &format!(
                "/kutipan/tabung/{}?from=2026-02-01T00:00:00Z&to=2026-02-28T00:00:00Z",
                tabung_id
            ),
        )
        .await,
    )
    .await;

    assert_eq!(body["total_sen"], 500);
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_inverted_kutipan_range() {
    let app = TestApp::documented();
    let tabung_id = app.seed_tabung(TENANT_A, json!({ "name": "Infaq" })).await;

    let resp = app
        .get(
            TENANT_A,
            &format!(
                "/kutipan/tabung/{}?from=2026-03-01T00:00:00Z&to=2026-02-01T00:00:00Z",
                tabung_id
            ),
        )
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "kutipan.invalid_range");
}

#[tokio::test]
async fn should_route_tabung_listing_apart_from_single_kutipan() {
    let app = TestApp::documented();
    let unknown = uuid::Uuid::new_v4();

    let resp = app
        .get(TENANT_A, &format!("/kutipan/tabung/{}", unknown))
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "kutipan.tabung_not_found");
}

#[tokio::test]
async fn should_reject_negative_kutipan() {
    let app = TestApp::documented();
    let tabung_id = app.seed_tabung(TENANT_A, json!({ "name": "Infaq" })).await;

    let resp = app
        .post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": tabung_id, "amount_sen": -1 }),
        )
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let listed = body_of(app.get(TENANT_A, "/kutipan").await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn should_reject_kutipan_outside_tabung_period() {
    let app = TestApp::documented();
    let tabung_id = app
        .seed_tabung(
            TENANT_A,
            json!({
                "name": "Tabung Ramadan",
                "start_date": "2026-02-18",
                "end_date": "2026-03-19"
            }),
        )
        .await;

    let resp = app
        .post(
            TENANT_A,
            "/kutipan",
            json!({
                "tabung_id": tabung_id,
                "amount_sen": 1_000,
                "collected_at": "2026-04-01T10:00:00Z"
            }),
        )
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "kutipan.outside_tabung_period");
}

#[tokio::test]
async fn should_reject_kutipan_for_unknown_tabung() {
    let app = TestApp::documented();

    let resp = app
        .post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": uuid::Uuid::new_v4(), "amount_sen": 100 }),
        )
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_report_kutipan_insert_conflict_as_conflict() {
    let app = TestApp::documented();
    let tabung_id = app.seed_tabung(TENANT_A, json!({ "name": "Infaq" })).await;
    app.kutipan.fail_next_write(RepositoryError::Conflict);

    let resp = app
        .post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": tabung_id, "amount_sen": 700 }),
        )
        .await;

    resp.assert_status(StatusCode::CONFLICT);
    let body = body_of(resp).await;
    assert_eq!(body["message"], "repository.conflict");
}

#[tokio::test]
async fn should_report_kutipan_update_conflict_as_conflict() {
    let app = TestApp::documented();
    let tabung_id = app.seed_tabung(TENANT_A, json!({ "name": "Infaq" })).await;
    let created = body_of(
        app.post(
            TENANT_A,
            "/kutipan",
            json!({ "tabung_id": tabung_id, "amount_sen": 700 }),
        )
        .await,
    )
    .await;
    let uri = format!("/kutipan/{}", created["id"].as_str().unwrap());

    app.kutipan.fail_next_write(RepositoryError::Conflict);
    let resp = app.put(TENANT_A, &uri, json!({ "amount_sen": 800 })).await;

    resp.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_answer_store_fault_with_server_error_and_keep_serving() {
    let app = TestApp::documented();
    app.seed_tabung(TENANT_A, json!({ "name": "Tabung Masjid" }))
        .await;
    app.tabung.fail_next(RepositoryError::DatabaseError);

    let failed = app.get(TENANT_A, "/tabung").await;

    failed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_of(failed).await;
    assert_eq!(body["message"], "repository.persistence");

    let listed = body_of(app.get(TENANT_A, "/tabung").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_publish_every_route_in_openapi_document() {
    let app = TestApp::documented();

    let document = body_of(app.client.get("/docs/openapi.json").send().await).await;

    let paths = document["paths"].as_object().unwrap();
    for path in [
        "/tabung",
        "/tabung/{id}",
        "/tabung-type",
        "/tabung-type/{id}",
        "/kutipan",
        "/kutipan/{id}",
        "/kutipan/tabung/{tabung_id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
