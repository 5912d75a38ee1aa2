mod common;

use actix_web::{test, web, App};
use serde_json::json;
use std::sync::Arc;

use common::TestApp;
use ruka_api::db::store::{Store, StoreSnapshot};
use ruka_api::models::addon::AddOnCatalog;
use ruka_api::routes::bookings;
use ruka_api::services::payment::interface::{
    PaymentError, PaymentOperations, PaymentReceipt, PaymentRequest,
};

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"]["rooms"], 3);
    assert_eq!(body["store"]["bookings"], 0);
}

#[actix_rt::test]
async fn test_list_rooms() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0]["type"], "Deluxe Room");
    assert_eq!(rooms[0]["base_rate"], 150.0);
}

#[actix_rt::test]
async fn test_get_room_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms/room-2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ocean View Suite");

    let req = test::TestRequest::get().uri("/api/rooms/room-404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_add_on_catalog() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/add-ons").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let add_ons = body.as_array().unwrap();
    assert_eq!(add_ons.len(), 4);
    assert_eq!(add_ons[3]["id"], "add-4");
    assert_eq!(add_ons[3]["type"], "fixed");
}

#[actix_rt::test]
async fn test_experiences() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/experiences").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let experiences = body.as_array().unwrap();
    assert_eq!(experiences.len(), 4);
    assert_eq!(experiences[0]["title"], "Snorkeling Safari");
    assert_eq!(experiences[2]["title"], "Dolphin Watching");
    assert_eq!(
        experiences[3]["description"],
        "Visit neighboring islands and learn about local life."
    );
    assert_eq!(experiences[1]["image"], "https://picsum.photos/600/400?random=21");
}

#[actix_rt::test]
async fn test_site_content() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["contact_email"], "hello@rukamaldives.com");
}

#[actix_rt::test]
async fn test_quote_default_rates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-1",
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "adults": 2,
            "children": 0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nights"], 3);
    assert_eq!(body["stay_total"], 450.0);
    assert_eq!(body["grand_total"], 450.0);
    assert_eq!(
        body["breakdown"],
        json!([
            {"date": "2024-06-01", "price": 150.0},
            {"date": "2024-06-02", "price": 150.0},
            {"date": "2024-06-03", "price": 150.0}
        ])
    );
}

#[actix_rt::test]
async fn test_quote_with_add_ons() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-2",
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "adults": 2,
            "children": 1,
            "add_ons": ["add-1", "add-2", "add-4"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    // (220 + 15) x 3 nights
    assert_eq!(body["stay_total"], 705.0);
    // 35 x 3 guests, 25 x 3 guests x 3 nights, 10 x 3 nights
    assert_eq!(body["add_on_total"], 105.0 + 225.0 + 30.0);
    assert_eq!(body["grand_total"], 705.0 + 360.0);
    assert_eq!(body["add_ons"][1]["name"], "Half Board Upgrade");
}

#[actix_rt::test]
async fn test_quote_per_person_add_on_with_huge_party() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-1",
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "adults": 2,
            "children": 4294967295u32,
            "add_ons": ["add-1"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["add_ons"][0]["amount"], 35.0 * 4_294_967_297.0);
    assert_eq!(body["add_on_total"], 35.0 * 4_294_967_297.0);
}

#[actix_rt::test]
async fn test_quote_same_day_is_empty() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-1",
            "check_in": "2024-06-04",
            "check_out": "2024-06-04",
            "adults": 2,
            "add_ons": ["add-2"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nights"], 0);
    assert_eq!(body["breakdown"], json!([]));
    assert_eq!(body["stay_total"], 0.0);
    assert_eq!(body["grand_total"], 0.0);
}

#[actix_rt::test]
async fn test_quote_unknown_room_or_add_on() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-404",
            "check_in": "2024-06-01",
            "check_out": "2024-06-02",
            "adults": 2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-1",
            "check_in": "2024-06-01",
            "check_out": "2024-06-02",
            "adults": 2,
            "add_ons": ["jet-ski"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_quote_malformed_date() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(&json!({
            "room_id": "room-1",
            "check_in": "June 1st",
            "check_out": "2024-06-02",
            "adults": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_create_booking() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(&json!({
            "room_id": "room-1",
            "guest_name": "Ahmed Test",
            "email": "ahmed@example.com",
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "adults": 2,
            "children": 0,
            "add_ons": ["add-1"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["total_amount"], 450.0 + 70.0);
    assert_eq!(body["id"].as_str().unwrap().len(), 9);

    let bookings = test_app.store.bookings().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].guest_name, "Ahmed Test");
}

#[actix_rt::test]
async fn test_create_booking_rejections() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let base = json!({
        "room_id": "room-1",
        "guest_name": "Ahmed Test",
        "email": "ahmed@example.com",
        "check_in": "2024-06-01",
        "check_out": "2024-06-04",
        "adults": 2
    });

    let cases = [
        (json!({"guest_name": ""}), 400),
        (json!({"email": "ahmed"}), 400),
        (json!({"adults": 0}), 400),
        (json!({"check_out": "2024-05-30"}), 400),
        (json!({"adults": 5}), 400),
        (json!({"children": 11}), 400),
        (json!({"children": 4294967295u32, "add_ons": ["add-1"]}), 400),
        (json!({"add_ons": ["add-9"]}), 400),
        (json!({"room_id": "room-404"}), 404),
    ];

    for (patch, expected) in cases {
        let mut payload = base.clone();
        for (key, value) in patch.as_object().unwrap() {
            payload[key] = value.clone();
        }

        let req = test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "payload: {}", payload);
    }

    assert!(test_app.store.bookings().unwrap().is_empty());
}

struct DecliningGateway;

impl PaymentOperations for DecliningGateway {
    async fn charge(&self, _request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        Err(PaymentError::Declined("insufficient funds".to_string()))
    }
}

#[actix_rt::test]
async fn test_booking_route_with_other_gateway() {
    let store = Arc::new(Store::in_memory(StoreSnapshot::default()));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(AddOnCatalog::default()))
            .app_data(web::Data::new(DecliningGateway))
            .route(
                "/api/bookings",
                web::post().to(bookings::create_booking::<DecliningGateway>),
            ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(&json!({
            "room_id": "room-1",
            "guest_name": "Ahmed Test",
            "email": "ahmed@example.com",
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "adults": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 402);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("insufficient funds"));
    assert!(store.bookings().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_method_not_allowed() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::delete().uri("/api/rooms").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status() == 404 || resp.status() == 405);
}

#[actix_rt::test]
async fn test_cors_headers() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
