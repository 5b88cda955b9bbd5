//! Filtering and sorting the loaded table through the app.

mod common;

use egui::accesskit::Role;
use kittest::Queryable;
use userdesk_business::{SortDirection, SortState, UserField, UserStatus, UsersTableCompute, UsersTableState};

use crate::common::{TestCtx, wait_for_users};

fn row_ids(ctx: &TestCtx<'_>) -> Vec<u64> {
    ctx.harness()
        .state()
        .state()
        .ctx
        .compute::<UsersTableCompute>()
        .rows()
        .iter()
        .map(|record| record.id)
        .collect()
}

#[tokio::test]
async fn test_status_filter_and_empty_message() {
    let mut ctx = TestCtx::new_app(1.into()).await;
    let harness = ctx.harness_mut();
    wait_for_users(harness).await;

    harness.get_by_role(Role::ComboBox).click();
    harness.step();
    harness.step();
    harness.get_by_label("INACTIVE").click();
    harness.step();
    harness.step();
    assert_eq!(row_ids(&ctx), vec![2]);

    let harness = ctx.harness_mut();
    harness.get_by_role(Role::TextInput).click();
    harness.step();
    harness.get_by_role(Role::TextInput).type_text("cara");
    harness.step();
    harness.step();

    assert!(row_ids(&ctx).is_empty());
    let filter = ctx
        .harness()
        .state()
        .state()
        .ctx
        .state::<UsersTableState>()
        .filter()
        .clone();
    assert_eq!(filter.name_pattern, "cara");
    assert_eq!(filter.status, Some(UserStatus::Inactive));
    assert!(
        ctx.harness()
            .query_by_label("No users match your filters.")
            .is_some()
    );
}

#[tokio::test]
async fn test_sort_toggle_round_trip() {
    let mut ctx = TestCtx::new_app(1.into()).await;
    let harness = ctx.harness_mut();
    wait_for_users(harness).await;
    assert_eq!(row_ids(&ctx), vec![1, 2, 3]);

    let harness = ctx.harness_mut();
    harness.get_by_label("Name ⬍").click();
    harness.step();
    harness.step();
    assert_eq!(row_ids(&ctx), vec![2, 1, 3]);

    let harness = ctx.harness_mut();
    harness.get_by_label("Name ⬆").click();
    harness.step();
    harness.step();
    assert_eq!(row_ids(&ctx), vec![3, 1, 2]);
    assert_eq!(
        ctx.harness().state().state().ctx.state::<UsersTableState>().sort(),
        &SortState::by(UserField::Name, SortDirection::Descending)
    );
    assert!(ctx.harness().query_by_label("Name ⬇").is_some());
}
