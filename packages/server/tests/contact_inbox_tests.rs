//! Integration tests for the contact inbox.
//!
//! Public intake stores messages; admins work the inbox through resolution
//! mutations that stamp who resolved what and when. Resolution state and its
//! audit fields move together, enforced by a table constraint.

mod common;

use crate::common::{create_admin, create_message, TestHarness};
use juniper::Variables;
use server_core::common::IntakeError;
use server_core::domains::contact::actions::submit_message;
use server_core::domains::contact::models::MessageSubject;
use test_context::test_context;

// =============================================================================
// Intake
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn message_intake_stores_trimmed_fields(ctx: &TestHarness) {
    let message = submit_message(
        "  Lina Chowdhury ",
        " lina@example.com ",
        " membership ",
        "  How do I join?  ",
        &ctx.db_pool,
    )
    .await
    .expect("intake should succeed");

    assert_eq!(message.name, "Lina Chowdhury");
    assert_eq!(message.email, "lina@example.com");
    assert_eq!(message.subject, "membership");
    assert_eq!(message.message, "How do I join?");
    assert!(!message.is_resolved);
    assert_eq!(message.notes, "");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn message_intake_rejects_unknown_subject(ctx: &TestHarness) {
    let result = submit_message(
        "Lina",
        "lina@example.com",
        "complaints",
        "Hello",
        &ctx.db_pool,
    )
    .await;

    match result {
        Err(IntakeError::InvalidSubject(subject)) => assert_eq!(subject, "complaints"),
        other => panic!("Expected invalid subject rejection, got {:?}", other),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn message_intake_requires_every_field(ctx: &TestHarness) {
    let result = submit_message("Lina", "lina@example.com", "general", "  ", &ctx.db_pool).await;
    assert!(matches!(result, Err(IntakeError::MissingField("message"))));
}

// =============================================================================
// Resolution
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn resolving_stamps_the_acting_admin(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "moderator").await.unwrap();
    let message = create_message(&ctx.db_pool, "Visitor One", MessageSubject::General)
        .await
        .unwrap();

    let client = ctx.graphql_as_admin(admin.clone());

    let resolved = client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"], notes: "answered by phone") }}"#,
            message.id
        ))
        .await;
    assert_eq!(resolved["resolveContactMessages"].as_i64(), Some(1));

    let query = r#"
        query Message($id: String!) {
            contactMessage(id: $id) { isResolved notes resolvedBy resolvedAt }
        }
    "#;

    let mut vars = Variables::new();
    vars.insert(
        "id".to_string(),
        juniper::InputValue::scalar(message.id.to_string()),
    );

    let after = client.query_with_vars(query, vars).await;
    assert_eq!(
        after["contactMessage"]["isResolved"].as_bool(),
        Some(true)
    );
    assert_eq!(
        after["contactMessage"]["notes"].as_str(),
        Some("answered by phone")
    );
    assert_eq!(
        after["contactMessage"]["resolvedBy"].as_str(),
        Some(admin.id.to_string().as_str())
    );
    assert!(after["contactMessage"]["resolvedAt"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn resolving_without_admin_identity_fails(ctx: &TestHarness) {
    let message = create_message(&ctx.db_pool, "Visitor Two", MessageSubject::General)
        .await
        .unwrap();

    let client = ctx.graphql();
    let result = client
        .execute(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"]) }}"#,
            message.id
        ))
        .await;

    assert!(!result.is_ok());
    assert!(
        result.errors[0].contains("Admin identity required"),
        "Expected identity error, got: {}",
        result.errors[0]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn bulk_resolve_counts_only_rows_that_flipped(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "moderator").await.unwrap();
    let first = create_message(&ctx.db_pool, "Visitor A", MessageSubject::General)
        .await
        .unwrap();
    let second = create_message(&ctx.db_pool, "Visitor B", MessageSubject::Events)
        .await
        .unwrap();
    let third = create_message(&ctx.db_pool, "Visitor C", MessageSubject::Feedback)
        .await
        .unwrap();

    let client = ctx.graphql_as_admin(admin);

    // Resolve one up front; the bulk call then only flips the other two
    client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"]) }}"#,
            first.id
        ))
        .await;

    let bulk = client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}", "{}", "{}"]) }}"#,
            first.id, second.id, third.id
        ))
        .await;
    assert_eq!(bulk["resolveContactMessages"].as_i64(), Some(2));

    // Resolving already-resolved rows is a no-op
    let again = client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}", "{}"]) }}"#,
            second.id, third.id
        ))
        .await;
    assert_eq!(again["resolveContactMessages"].as_i64(), Some(0));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unresolving_discards_the_resolution(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "moderator").await.unwrap();
    let message = create_message(&ctx.db_pool, "Visitor D", MessageSubject::General)
        .await
        .unwrap();

    let admin_client = ctx.graphql_as_admin(admin);
    admin_client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"], notes: "done") }}"#,
            message.id
        ))
        .await;

    // Reopening needs no identity; it only un-does a resolution
    let client = ctx.graphql();
    let reopened = client
        .query(&format!(
            r#"mutation {{ unresolveContactMessages(ids: ["{}"]) }}"#,
            message.id
        ))
        .await;
    assert_eq!(reopened["unresolveContactMessages"].as_i64(), Some(1));

    let after = client
        .query(&format!(
            r#"{{ contactMessage(id: "{}") {{ isResolved notes resolvedBy resolvedAt }} }}"#,
            message.id
        ))
        .await;
    assert_eq!(
        after["contactMessage"]["isResolved"].as_bool(),
        Some(false)
    );
    assert_eq!(after["contactMessage"]["notes"].as_str(), Some(""));
    assert!(after["contactMessage"]["resolvedBy"].is_null());
    assert!(after["contactMessage"]["resolvedAt"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_update_keeps_the_original_resolution_stamp(ctx: &TestHarness) {
    let first_admin = create_admin(&ctx.db_pool, "first.admin").await.unwrap();
    let second_admin = create_admin(&ctx.db_pool, "second.admin").await.unwrap();
    let message = create_message(&ctx.db_pool, "Visitor E", MessageSubject::Membership)
        .await
        .unwrap();

    let first_client = ctx.graphql_as_admin(first_admin.clone());
    first_client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"], notes: "first pass") }}"#,
            message.id
        ))
        .await;

    let stamped = first_client
        .query(&format!(
            r#"{{ contactMessage(id: "{}") {{ resolvedAt }} }}"#,
            message.id
        ))
        .await;
    let original_stamp = stamped["contactMessage"]["resolvedAt"]
        .as_str()
        .unwrap()
        .to_string();

    // A different admin edits the notes without flipping the flag
    let second_client = ctx.graphql_as_admin(second_admin);
    let updated = second_client
        .query(&format!(
            r#"mutation {{
                adminUpdateContactMessage(id: "{}", isResolved: true, notes: "second pass") {{
                    notes
                    resolvedBy
                    resolvedAt
                }}
            }}"#,
            message.id
        ))
        .await;

    assert_eq!(
        updated["adminUpdateContactMessage"]["notes"].as_str(),
        Some("second pass")
    );
    assert_eq!(
        updated["adminUpdateContactMessage"]["resolvedBy"].as_str(),
        Some(first_admin.id.to_string().as_str())
    );
    assert_eq!(
        updated["adminUpdateContactMessage"]["resolvedAt"].as_str(),
        Some(original_stamp.as_str())
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_update_can_resolve_and_reopen(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "moderator").await.unwrap();
    let message = create_message(&ctx.db_pool, "Visitor F", MessageSubject::General)
        .await
        .unwrap();

    let client = ctx.graphql_as_admin(admin.clone());

    let resolved = client
        .query(&format!(
            r#"mutation {{
                adminUpdateContactMessage(id: "{}", isResolved: true, notes: "handled") {{
                    isResolved
                    resolvedBy
                }}
            }}"#,
            message.id
        ))
        .await;
    assert_eq!(
        resolved["adminUpdateContactMessage"]["resolvedBy"].as_str(),
        Some(admin.id.to_string().as_str())
    );

    let reopened = client
        .query(&format!(
            r#"mutation {{
                adminUpdateContactMessage(id: "{}", isResolved: false, notes: "reopening") {{
                    isResolved
                    notes
                    resolvedBy
                    resolvedAt
                }}
            }}"#,
            message.id
        ))
        .await;
    assert_eq!(
        reopened["adminUpdateContactMessage"]["isResolved"].as_bool(),
        Some(false)
    );
    assert_eq!(
        reopened["adminUpdateContactMessage"]["notes"].as_str(),
        Some("reopening")
    );
    assert!(reopened["adminUpdateContactMessage"]["resolvedBy"].is_null());
    assert!(reopened["adminUpdateContactMessage"]["resolvedAt"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deleting_an_admin_keeps_resolved_messages(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "departing.admin").await.unwrap();
    let message = create_message(&ctx.db_pool, "Visitor G", MessageSubject::General)
        .await
        .unwrap();

    let client = ctx.graphql_as_admin(admin.clone());
    client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"]) }}"#,
            message.id
        ))
        .await;

    sqlx::query("DELETE FROM admin_users WHERE id = $1")
        .bind(admin.id)
        .execute(&ctx.db_pool)
        .await
        .expect("admin delete");

    // The message stays resolved; only the audit reference is cleared
    let after = ctx
        .graphql()
        .query(&format!(
            r#"{{ contactMessage(id: "{}") {{ isResolved resolvedBy resolvedAt }} }}"#,
            message.id
        ))
        .await;
    assert_eq!(
        after["contactMessage"]["isResolved"].as_bool(),
        Some(true)
    );
    assert!(after["contactMessage"]["resolvedBy"].is_null());
    assert!(after["contactMessage"]["resolvedAt"].is_string());
}

// =============================================================================
// Inbox listing
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn inbox_pages_newest_first(ctx: &TestHarness) {
    let client = ctx.graphql();

    create_message(&ctx.db_pool, "Oldest", MessageSubject::General)
        .await
        .unwrap();
    create_message(&ctx.db_pool, "Middle", MessageSubject::General)
        .await
        .unwrap();
    create_message(&ctx.db_pool, "Newest", MessageSubject::General)
        .await
        .unwrap();

    let query = r#"
        query InboxPage($first: Int, $after: String) {
            contactMessages(first: $first, after: $after) {
                nodes { name }
                pageInfo { hasNextPage endCursor }
            }
        }
    "#;

    let first_page = client.query_with_vars(query, vars!("first" => 2)).await;

    let nodes = first_page["contactMessages"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["name"].as_str(), Some("Newest"));
    assert_eq!(nodes[1]["name"].as_str(), Some("Middle"));
    assert_eq!(
        first_page["contactMessages"]["pageInfo"]["hasNextPage"].as_bool(),
        Some(true)
    );

    let cursor = first_page["contactMessages"]["pageInfo"]["endCursor"]
        .as_str()
        .unwrap()
        .to_string();

    let second_page = client
        .query_with_vars(query, vars!("first" => 2, "after" => cursor))
        .await;

    let nodes = second_page["contactMessages"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["name"].as_str(), Some("Oldest"));
    assert_eq!(
        second_page["contactMessages"]["pageInfo"]["hasNextPage"].as_bool(),
        Some(false)
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn inbox_filters_by_state_subject_and_text(ctx: &TestHarness) {
    let admin = create_admin(&ctx.db_pool, "moderator").await.unwrap();
    let answered = create_message(&ctx.db_pool, "Answered Visitor", MessageSubject::Membership)
        .await
        .unwrap();
    create_message(&ctx.db_pool, "Open Visitor", MessageSubject::Events)
        .await
        .unwrap();

    let client = ctx.graphql_as_admin(admin);
    client
        .query(&format!(
            r#"mutation {{ resolveContactMessages(ids: ["{}"]) }}"#,
            answered.id
        ))
        .await;

    let unresolved = client
        .query(r#"{ contactMessages(resolved: false) { nodes { name } } }"#)
        .await;
    let nodes = unresolved["contactMessages"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["name"].as_str(), Some("Open Visitor"));

    let by_subject = client
        .query(r#"{ contactMessages(subject: MEMBERSHIP) { nodes { name subjectDisplay } } }"#)
        .await;
    let nodes = by_subject["contactMessages"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["name"].as_str(), Some("Answered Visitor"));
    assert_eq!(
        nodes[0]["subjectDisplay"].as_str(),
        Some("Membership Information")
    );

    let by_search = client
        .query(r#"{ contactMessages(search: "open visitor") { nodes { name } } }"#)
        .await;
    let nodes = by_search["contactMessages"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["name"].as_str(), Some("Open Visitor"));
}
