//! The users list is requested once when the app starts and then served from the cache.

mod common;

use kittest::Queryable;
use userdesk_business::ListUsersCompute;

use crate::common::{TestCtx, wait_for_users};

#[tokio::test]
async fn test_app_fetches_and_renders_users() {
    let mut ctx = TestCtx::new_app(1.into()).await;
    let harness = ctx.harness_mut();

    wait_for_users(harness).await;

    let users = harness.state().state().ctx.compute::<ListUsersCompute>().users();
    assert_eq!(users.map(<[_]>::len), Some(3), "all sample users should be loaded");

    assert!(harness.query_by_label("Manage Users").is_some());
    assert!(harness.query_by_label("Bob Smith").is_some());
    assert!(harness.query_by_label("amy.lee@example.com").is_some());
    assert!(harness.query_by_label("Cara Jones").is_some());
    assert!(harness.query_by_label("Fetching your users...").is_none());
}

#[tokio::test]
async fn test_no_repeat_fetch_on_subsequent_renders() {
    // Exactly one request, verified when the mock server drops
    let mut ctx = TestCtx::new_app(1.into()).await;
    let harness = ctx.harness_mut();

    wait_for_users(harness).await;

    for _ in 0..5 {
        harness.step();
    }
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    harness.step();
}

#[tokio::test]
async fn test_loading_state_is_shown_first() {
    let mut ctx = TestCtx::new_app((0..=1).into()).await;
    let harness = ctx.harness_mut();

    harness.step();

    assert!(harness.query_by_label("Fetching your users...").is_some());
    assert!(harness.query_by_label("Bob Smith").is_none());
}
