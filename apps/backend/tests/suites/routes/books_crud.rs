use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app};

fn dune() -> Value {
    json!({"name": "Dune", "writer": "Frank Herbert", "year": 1965})
}

#[actix_web::test]
async fn create_returns_book_with_assigned_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(dune())
        .to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;

    assert_eq!(
        body,
        json!({"id": 1, "name": "Dune", "writer": "Frank Herbert", "year": 1965})
    );
    Ok(())
}

#[actix_web::test]
async fn create_ignores_client_supplied_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(json!({"id": 42, "name": "Emma", "writer": "Jane Austen", "year": 1815}))
        .to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["id"], 1);

    let req = test::TestRequest::get().uri("/book/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_web::test]
async fn created_books_get_distinct_ids() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/book_add")
            .set_json(dune())
            .to_request();
        let body: Value = read_json(test::call_service(&app, req).await, 200).await;
        ids.push(body["id"].as_i64().unwrap_or_default());
    }

    assert_eq!(ids, vec![1, 2, 3]);
    Ok(())
}

#[actix_web::test]
async fn get_existing_book() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(dune())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/book/1").to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["name"], "Dune");
    assert_eq!(body["writer"], "Frank Herbert");
    assert_eq!(body["year"], 1965);
    Ok(())
}

#[actix_web::test]
async fn get_missing_book_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/book/999").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_from_service_response(
        resp,
        "BOOK_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Book not found"),
    )
    .await;
    assert_eq!(problem.detail, "Book not found");
    Ok(())
}

#[actix_web::test]
async fn update_replaces_fields_and_keeps_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(dune())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/book/1")
        .set_json(json!({"id": 7, "name": "Dune Messiah", "writer": "Frank Herbert", "year": 1969}))
        .to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Dune Messiah", "writer": "Frank Herbert", "year": 1969})
    );

    let req = test::TestRequest::get().uri("/book/1").to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["name"], "Dune Messiah");
    assert_eq!(body["year"], 1969);
    Ok(())
}

#[actix_web::test]
async fn update_missing_book_is_404_and_creates_nothing() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri("/book/5")
        .set_json(dune())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BOOK_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Book not found"),
    )
    .await;

    let req = test::TestRequest::get().uri("/books").to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body, json!([]));
    Ok(())
}

#[actix_web::test]
async fn delete_then_get_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(dune())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/books/1").to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body, json!({"detail": "Book deleted"}));

    let req = test::TestRequest::get().uri("/book/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_web::test]
async fn second_delete_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(dune())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/books/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete().uri("/books/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BOOK_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Book not found"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn list_all_returns_every_book_once_in_id_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for payload in [
        dune(),
        json!({"name": "Emma", "writer": "Jane Austen", "year": 1815}),
        json!({"name": "Children of Dune", "writer": "Frank Herbert", "year": 1976}),
    ] {
        let req = test::TestRequest::post()
            .uri("/book_add")
            .set_json(payload)
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/books").to_request();
    let body: Vec<Value> = read_json(test::call_service(&app, req).await, 200).await;

    let ids: Vec<i64> = body.iter().filter_map(|b| b["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(body[1]["name"], "Emma");
    Ok(())
}

#[actix_web::test]
async fn list_all_on_empty_catalog_is_empty_array() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/books").to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body, json!([]));
    Ok(())
}

#[actix_web::test]
async fn ids_beyond_32_bits_are_looked_up_not_rejected() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let requests = [
        test::TestRequest::get().uri("/book/99999999999"),
        test::TestRequest::delete().uri("/books/99999999999"),
        test::TestRequest::put()
            .uri("/book/99999999999")
            .set_json(dune()),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_problem_details_from_service_response(
            resp,
            "BOOK_NOT_FOUND",
            StatusCode::NOT_FOUND,
            Some("Book not found"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn years_beyond_32_bits_are_stored_and_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/books/by-year/3000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("No books found for 3000000000"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(json!({"name": "Far Future", "writer": "Anon", "year": 3_000_000_000_i64}))
        .to_request();
    let created: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(created["year"], 3_000_000_000_i64);

    let req = test::TestRequest::get()
        .uri("/books/by-year/3000000000")
        .to_request();
    let body: Vec<Value> = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Far Future");
    Ok(())
}

#[actix_web::test]
async fn create_then_find_by_writer_herbert() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/book_add")
        .set_json(json!({"name": "Dune", "writer": "Herbert", "year": 1965}))
        .to_request();
    let created: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Dune", "writer": "Herbert", "year": 1965})
    );

    let req = test::TestRequest::get()
        .uri("/books/by-writer/Herbert")
        .to_request();
    let body: Value = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Dune", "writer": "Herbert", "year": 1965}])
    );
    Ok(())
}
