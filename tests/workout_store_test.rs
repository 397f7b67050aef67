// ABOUTME: Integration tests for the workout history store
// ABOUTME: Covers insert/fetch ordering, limits, and file-backed persistence across reopens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use evergain_server::{
    database::{Database, WorkoutStore},
    models::NewWorkout,
};

fn workout(weight: f64) -> NewWorkout {
    NewWorkout {
        weight,
        reps: 5,
        sets: 3,
        feeling: "solid".to_owned(),
    }
}

#[tokio::test]
async fn test_persist_assigns_id_and_timestamp() {
    let database = common::create_test_database().await.expect("Setup failed");
    let store = WorkoutStore::new(database.pool().clone());

    let before = chrono::Utc::now();
    let session = store
        .persist(&workout(100.0), "progress_up", "Push on.", "#C6FF5E")
        .await
        .expect("Persist failed");
    let after = chrono::Utc::now();

    assert!(session.id > 0);
    assert!(session.created_at >= before && session.created_at <= after);
    assert_eq!(session.progress_state, "progress_up");
    assert_eq!(session.advice, "Push on.");
    assert_eq!(session.color, "#C6FF5E");
}

#[tokio::test]
async fn test_persisted_fields_round_trip() {
    let database = common::create_test_database().await.expect("Setup failed");
    let store = WorkoutStore::new(database.pool().clone());

    let submitted = NewWorkout {
        weight: 72.5,
        reps: 12,
        sets: 4,
        feeling: "light burn in the forearms".to_owned(),
    };
    let persisted = store
        .persist(&submitted, "stagnant", "Vary the grip.", "#00D1FF")
        .await
        .expect("Persist failed");

    let fetched = store.fetch_recent(5).await.expect("Fetch failed");
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0], persisted);
}

#[tokio::test]
async fn test_fetch_recent_empty_database() {
    let database = common::create_test_database().await.expect("Setup failed");
    let store = WorkoutStore::new(database.pool().clone());

    let sessions = store.fetch_recent(5).await.expect("Fetch failed");
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn test_fetch_recent_orders_newest_first_and_limits() {
    let database = common::create_test_database().await.expect("Setup failed");
    let store = WorkoutStore::new(database.pool().clone());

    for i in 0..8_i64 {
        store
            .persist(&workout(100.0 + i as f64), "stagnant", "seeded", "#00D1FF")
            .await
            .expect("Persist failed");
    }

    let sessions = store.fetch_recent(5).await.expect("Fetch failed");
    assert_eq!(sessions.len(), 5);

    // Newest (heaviest seed) first, strictly descending insert order
    assert!((sessions[0].weight - 107.0).abs() < f64::EPSILON);
    assert!((sessions[4].weight - 103.0).abs() < f64::EPSILON);
    for pair in sessions.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }
}

#[tokio::test]
async fn test_fetch_recent_returns_fewer_than_limit() {
    let database = common::create_test_database().await.expect("Setup failed");
    let store = WorkoutStore::new(database.pool().clone());

    store
        .persist(&workout(90.0), "down", "Deload week.", "#FF4757")
        .await
        .expect("Persist failed");
    store
        .persist(&workout(95.0), "progress_up", "Back on track.", "#C6FF5E")
        .await
        .expect("Persist failed");

    let sessions = store.fetch_recent(20).await.expect("Fetch failed");
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].progress_state, "progress_up");
    assert_eq!(sessions[1].progress_state, "down");
}

#[tokio::test]
async fn test_file_backed_database_survives_reopen() {
    common::init_test_logging();
    let dir = tempfile::tempdir().expect("tempdir failed");
    let url = format!("sqlite:{}/evergain-test.db", dir.path().display());

    {
        let database = Database::new(&url, 2).await.expect("First open failed");
        let store = WorkoutStore::new(database.pool().clone());
        store
            .persist(&workout(120.0), "progress_up", "PR territory.", "#C6FF5E")
            .await
            .expect("Persist failed");
        database.close().await;
    }

    // Reopen: migrations rerun idempotently, data is still there
    let database = Database::new(&url, 2).await.expect("Reopen failed");
    let store = WorkoutStore::new(database.pool().clone());
    let sessions = store.fetch_recent(5).await.expect("Fetch failed");

    assert_eq!(sessions.len(), 1);
    assert!((sessions[0].weight - 120.0).abs() < f64::EPSILON);
    assert_eq!(sessions[0].advice, "PR territory.");
}

#[tokio::test]
async fn test_health_check_reflects_pool_state() {
    let database = common::create_test_database().await.expect("Setup failed");
    assert!(database.health_check().await.is_ok());

    database.close().await;
    assert!(database.health_check().await.is_err());
}
