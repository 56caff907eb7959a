use bookshelf::db::txn::with_txn;
use bookshelf::repos::books::{self, NewBook};
use bookshelf::AppError;

use crate::support::build_test_state;

fn new_book(name: &str, writer: &str, year: i64) -> NewBook {
    NewBook {
        name: name.to_string(),
        writer: writer.to_string(),
        year,
    }
}

#[tokio::test]
async fn create_then_find_round_trips_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let created = with_txn(&state, |txn| {
        Box::pin(async move {
            Ok(books::create_book(txn, new_book("Dune", "Frank Herbert", 1965)).await?)
        })
    })
    .await?;
    assert_eq!(created.id, 1);

    let found = with_txn(&state, move |txn| {
        Box::pin(async move { Ok(books::find_by_id(txn, created.id).await?) })
    })
    .await?;
    assert_eq!(found.as_ref(), Some(&created));
    Ok(())
}

#[tokio::test]
async fn find_by_unknown_id_is_none() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let found = with_txn(&state, |txn| {
        Box::pin(async move { Ok(books::find_by_id(txn, 999).await?) })
    })
    .await?;
    assert!(found.is_none());
    Ok(())
}

#[tokio::test]
async fn filters_are_exact_and_ordered_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let (by_writer, by_year, lowercase) = with_txn(&state, |txn| {
        Box::pin(async move {
            books::create_book(txn, new_book("Dune", "Frank Herbert", 1965)).await?;
            books::create_book(txn, new_book("Emma", "Jane Austen", 1815)).await?;
            books::create_book(txn, new_book("Dune Messiah", "Frank Herbert", 1969)).await?;
            books::create_book(txn, new_book("Ubik", "Philip K. Dick", 1969)).await?;

            let by_writer = books::list_by_writer(txn, "Frank Herbert").await?;
            let by_year = books::list_by_year(txn, 1969).await?;
            let lowercase = books::list_by_writer(txn, "frank herbert").await?;
            Ok((by_writer, by_year, lowercase))
        })
    })
    .await?;

    let ids: Vec<i64> = by_writer.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let names: Vec<&str> = by_year.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Dune Messiah", "Ubik"]);

    assert!(lowercase.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_report_absence_as_none() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let (updated, deleted) = with_txn(&state, |txn| {
        Box::pin(async move {
            let updated = books::update_book(txn, 7, new_book("Emma", "Jane Austen", 1815)).await?;
            let deleted = books::delete_book(txn, 7).await?;
            Ok((updated, deleted))
        })
    })
    .await?;

    assert!(updated.is_none());
    assert!(deleted.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_returns_snapshot_and_removes_row() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let (deleted, remaining) = with_txn(&state, |txn| {
        Box::pin(async move {
            let book = books::create_book(txn, new_book("Dune", "Frank Herbert", 1965)).await?;
            let deleted = books::delete_book(txn, book.id).await?;
            let remaining = books::list_all(txn).await?;
            Ok((deleted, remaining))
        })
    })
    .await?;

    assert_eq!(deleted.map(|b| b.name), Some("Dune".to_string()));
    assert!(remaining.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_session_leaves_no_trace() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            books::create_book(txn, new_book("Dune", "Frank Herbert", 1965)).await?;
            Err(AppError::internal("abort after insert"))
        })
    })
    .await;
    assert!(result.is_err());

    let all = with_txn(&state, |txn| {
        Box::pin(async move { Ok(books::list_all(txn).await?) })
    })
    .await?;
    assert!(all.is_empty());
    Ok(())
}
