#![cfg(feature = "http-server")]

//! Handler-level tests of the REST surface: query defaults, clamping and
//! the permissive empty-result policies.

use std::sync::Arc;

use axum::extract::{Query, State};

use launchboard::dataset::{Dataset, LaunchRecord, Outcome};
use launchboard::http::dto::{PieQuery, ScatterQuery};
use launchboard::http::{create_router, handlers, AppState};
use launchboard::services::ChartSpec;

fn record(site: &str, mass: f64, category: &str, outcome: Outcome) -> LaunchRecord {
    LaunchRecord {
        launch_site: site.to_string(),
        payload_mass_kg: mass,
        booster_category: category.to_string(),
        outcome,
    }
}

fn sample_state() -> AppState {
    AppState::new(Arc::new(Dataset::new(vec![
        record("A", 500.0, "v1.0", Outcome::Success),
        record("A", 1500.0, "FT", Outcome::Failure),
        record("B", 800.0, "B4", Outcome::Success),
    ])))
}

#[test]
fn test_router_creation() {
    let _router = create_router(sample_state());
    // If we got here, router was created successfully
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let response = handlers::health_check(State(sample_state())).await.unwrap();
    assert_eq!(response.0.status, "ok");
    assert_eq!(response.0.records, 3);
}

#[tokio::test]
async fn test_sites_endpoint_lists_sentinel_first() {
    let response = handlers::list_sites(State(sample_state())).await.unwrap();
    assert_eq!(response.0.total, 3);
    assert_eq!(response.0.options[0].value, "ALL");
    assert_eq!(response.0.options[0].label, "All Sites");
    assert_eq!(response.0.options[1].value, "A");
    assert_eq!(response.0.options[2].value, "B");
}

#[tokio::test]
async fn test_payload_range_endpoint() {
    let response = handlers::get_payload_range(State(sample_state()))
        .await
        .unwrap();
    assert_eq!(response.0.min_payload, 500.0);
    assert_eq!(response.0.max_payload, 1500.0);
}

#[tokio::test]
async fn test_pie_defaults_to_all_sites() {
    let response = handlers::get_outcome_pie(State(sample_state()), Query(PieQuery::default()))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Pie(pie) => {
            assert_eq!(pie.title, "Total Successful Launches by Site");
            assert_eq!(pie.slices.len(), 2);
        }
        other => panic!("expected pie, got {:?}", other),
    }
}

#[tokio::test]
async fn test_pie_for_unknown_site_is_empty() {
    let query = PieQuery {
        site: Some("nowhere".to_string()),
    };
    let response = handlers::get_outcome_pie(State(sample_state()), Query(query))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Pie(pie) => {
            assert_eq!(pie.title, "Success vs Failure Launches for site nowhere");
            assert!(pie.slices.is_empty());
        }
        other => panic!("expected pie, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_defaults_to_dataset_bounds() {
    let response =
        handlers::get_payload_scatter(State(sample_state()), Query(ScatterQuery::default()))
            .await
            .unwrap();
    match response.0 {
        ChartSpec::Scatter(scatter) => assert_eq!(scatter.points.len(), 3),
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_clamps_out_of_bounds_range() {
    let query = ScatterQuery {
        site: None,
        low: Some(-100.0),
        high: Some(99_999.0),
    };
    let response = handlers::get_payload_scatter(State(sample_state()), Query(query))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Scatter(scatter) => assert_eq!(scatter.points.len(), 3),
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_inverted_range_is_empty_not_error() {
    let query = ScatterQuery {
        site: None,
        low: Some(1400.0),
        high: Some(600.0),
    };
    let response = handlers::get_payload_scatter(State(sample_state()), Query(query))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Scatter(scatter) => assert!(scatter.points.is_empty()),
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_inverted_range_beyond_bounds_is_empty() {
    // Both bounds above the dataset maximum (1500): clamping must not
    // collapse the inverted range onto the maximum and match the 1500 kg
    // record.
    let query = ScatterQuery {
        site: None,
        low: Some(20_000.0),
        high: Some(15_000.0),
    };
    let response = handlers::get_payload_scatter(State(sample_state()), Query(query))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Scatter(scatter) => assert!(scatter.points.is_empty()),
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_site_and_range_combined() {
    let query = ScatterQuery {
        site: Some("A".to_string()),
        low: Some(0.0),
        high: Some(1000.0),
    };
    let response = handlers::get_payload_scatter(State(sample_state()), Query(query))
        .await
        .unwrap();
    match response.0 {
        ChartSpec::Scatter(scatter) => {
            assert_eq!(scatter.points.len(), 1);
            assert_eq!(scatter.points[0].x, 500.0);
            assert_eq!(scatter.points[0].category, "v1.0");
        }
        other => panic!("expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scatter_rejects_non_finite_bounds() {
    let query = ScatterQuery {
        site: None,
        low: Some(f64::NAN),
        high: None,
    };
    let result = handlers::get_payload_scatter(State(sample_state()), Query(query)).await;
    assert!(result.is_err());
}
