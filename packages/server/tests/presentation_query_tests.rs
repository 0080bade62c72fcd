//! Integration tests for the visitor-facing queries and admin listings.
//!
//! The orderings here are load-bearing for the site layout: events run by
//! calendar date, the announcement feed pins by priority, the roster groups
//! by designation, and galleries show newest uploads first.

mod common;

use crate::common::{
    create_event, create_event_image, create_gallery_image, create_member, create_update,
    TestHarness,
};
use chrono::NaiveDate;
use server_core::domains::members::models::SocietyDesignation;
use test_context::test_context;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Events
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn events_listing_runs_newest_event_first(ctx: &TestHarness) {
    create_event(&ctx.db_pool, "Spring Fair", date(2024, 3, 1), true)
        .await
        .unwrap();
    create_event(&ctx.db_pool, "Summer Picnic", date(2024, 6, 15), true)
        .await
        .unwrap();
    create_event(&ctx.db_pool, "Winter Social", date(2024, 1, 10), true)
        .await
        .unwrap();
    create_event(&ctx.db_pool, "Unpublished Draft", date(2024, 12, 1), false)
        .await
        .unwrap();

    let result = ctx.graphql().query("{ events { title } }").await;
    let titles: Vec<&str> = result["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Summer Picnic", "Spring Fair", "Winter Social"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn event_gallery_strip_follows_sort_order(ctx: &TestHarness) {
    let event = create_event(&ctx.db_pool, "Annual Dinner", date(2024, 5, 20), true)
        .await
        .unwrap();
    create_event_image(&ctx.db_pool, event.id, "dinner-3.jpg", 2)
        .await
        .unwrap();
    create_event_image(&ctx.db_pool, event.id, "dinner-1.jpg", 0)
        .await
        .unwrap();
    create_event_image(&ctx.db_pool, event.id, "dinner-2.jpg", 1)
        .await
        .unwrap();

    let result = ctx
        .graphql()
        .query(&format!(
            r#"{{ event(id: "{}") {{ images {{ image sortOrder }} }} }}"#,
            event.id
        ))
        .await;

    let images: Vec<&str> = result["event"]["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["image"].as_str().unwrap())
        .collect();
    assert_eq!(images, vec!["dinner-1.jpg", "dinner-2.jpg", "dinner-3.jpg"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn latest_events_defaults_to_a_strip_of_five(ctx: &TestHarness) {
    for month in 1..=6 {
        create_event(
            &ctx.db_pool,
            &format!("Event {}", month),
            date(2024, month, 1),
            true,
        )
        .await
        .unwrap();
    }

    let client = ctx.graphql();

    let default_strip = client.query("{ latestEvents { title } }").await;
    let titles: Vec<&str> = default_strip["latestEvents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Event 6", "Event 5", "Event 4", "Event 3", "Event 2"]
    );

    let short_strip = client
        .query_with_vars(
            r#"query Strip($limit: Int) { latestEvents(limit: $limit) { title } }"#,
            vars!("limit" => 2),
        )
        .await;
    assert_eq!(short_strip["latestEvents"].as_array().unwrap().len(), 2);

    let invalid = client.execute("{ latestEvents(limit: 0) { title } }").await;
    assert!(!invalid.is_ok());
    assert!(invalid.errors[0].contains("must be positive"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unpublished_event_stays_reachable_by_id(ctx: &TestHarness) {
    let draft = create_event(&ctx.db_pool, "Draft Event", date(2024, 9, 9), false)
        .await
        .unwrap();

    let result = ctx
        .graphql()
        .query(&format!(
            r#"{{ event(id: "{}") {{ title isActive }} }}"#,
            draft.id
        ))
        .await;

    assert_eq!(result["event"]["title"].as_str(), Some("Draft Event"));
    assert_eq!(result["event"]["isActive"].as_bool(), Some(false));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deleting_an_event_takes_its_gallery_strip_along(ctx: &TestHarness) {
    let event = create_event(&ctx.db_pool, "Doomed Event", date(2024, 2, 2), true)
        .await
        .unwrap();
    create_event_image(&ctx.db_pool, event.id, "one.jpg", 0)
        .await
        .unwrap();
    create_event_image(&ctx.db_pool, event.id, "two.jpg", 1)
        .await
        .unwrap();

    let client = ctx.graphql();
    let deleted = client
        .query(&format!(r#"mutation {{ deleteEvent(id: "{}") }}"#, event.id))
        .await;
    assert_eq!(deleted["deleteEvent"].as_bool(), Some(true));

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM event_images")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

// =============================================================================
// Roster
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn roster_groups_by_designation_then_name(ctx: &TestHarness) {
    create_member(
        &ctx.db_pool,
        "Zara Ali",
        "zara@example.com",
        SocietyDesignation::President,
        true,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Ben Osei",
        "ben@example.com",
        SocietyDesignation::ExecutiveMember,
        true,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Cara Lindqvist",
        "cara@example.com",
        SocietyDesignation::VicePresident,
        true,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Bo Nilsson",
        "bo@example.com",
        SocietyDesignation::GeneralMember,
        true,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Al Amin",
        "al@example.com",
        SocietyDesignation::GeneralMember,
        true,
    )
    .await
    .unwrap();

    let result = ctx.graphql().query("{ members { memberName } }").await;
    let names: Vec<&str> = result["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["memberName"].as_str().unwrap())
        .collect();

    // Groups sort by the stored designation key, so the executive block
    // precedes general members and the president lands mid-list.
    assert_eq!(
        names,
        vec![
            "Ben Osei",
            "Al Amin",
            "Bo Nilsson",
            "Zara Ali",
            "Cara Lindqvist"
        ]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_roster_filters_and_pages(ctx: &TestHarness) {
    create_member(
        &ctx.db_pool,
        "Zara Ali",
        "zara@example.com",
        SocietyDesignation::President,
        true,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Ben Osei",
        "ben@example.com",
        SocietyDesignation::GeneralMember,
        false,
    )
    .await
    .unwrap();
    create_member(
        &ctx.db_pool,
        "Cara Lindqvist",
        "cara@example.com",
        SocietyDesignation::GeneralMember,
        true,
    )
    .await
    .unwrap();

    let client = ctx.graphql();

    let presidents = client
        .query(r#"{ allMembers(designation: PRESIDENT) { nodes { memberName } } }"#)
        .await;
    let nodes = presidents["allMembers"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["memberName"].as_str(), Some("Zara Ali"));

    let inactive = client
        .query(r#"{ allMembers(active: false) { nodes { memberName } } }"#)
        .await;
    let nodes = inactive["allMembers"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["memberName"].as_str(), Some("Ben Osei"));

    let by_email = client
        .query(r#"{ allMembers(search: "cara@") { nodes { memberName } } }"#)
        .await;
    let nodes = by_email["allMembers"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["memberName"].as_str(), Some("Cara Lindqvist"));

    // Keyset paging walks the listing newest row first
    let query = r#"
        query RosterPage($first: Int, $after: String) {
            allMembers(first: $first, after: $after) {
                nodes { memberName }
                pageInfo { hasNextPage endCursor }
            }
        }
    "#;

    let first_page = client.query_with_vars(query, vars!("first" => 2)).await;
    let nodes = first_page["allMembers"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["memberName"].as_str(), Some("Cara Lindqvist"));
    assert_eq!(
        first_page["allMembers"]["pageInfo"]["hasNextPage"].as_bool(),
        Some(true)
    );

    let cursor = first_page["allMembers"]["pageInfo"]["endCursor"]
        .as_str()
        .unwrap()
        .to_string();
    let second_page = client
        .query_with_vars(query, vars!("first" => 2, "after" => cursor))
        .await;
    let nodes = second_page["allMembers"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["memberName"].as_str(), Some("Zara Ali"));
    assert_eq!(
        second_page["allMembers"]["pageInfo"]["hasNextPage"].as_bool(),
        Some(false)
    );
}

// =============================================================================
// Announcements
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn announcement_feed_pins_by_priority_then_recency(ctx: &TestHarness) {
    create_update(&ctx.db_pool, "Older news", 0, true)
        .await
        .unwrap();
    create_update(&ctx.db_pool, "Newer news", 0, true)
        .await
        .unwrap();
    create_update(&ctx.db_pool, "Pinned notice", 5, true)
        .await
        .unwrap();
    create_update(&ctx.db_pool, "Hidden draft", 9, false)
        .await
        .unwrap();

    let result = ctx.graphql().query("{ updates { title priority } }").await;
    let titles: Vec<&str> = result["updates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Pinned notice", "Newer news", "Older news"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_update_listing_searches_title_and_body(ctx: &TestHarness) {
    create_update(&ctx.db_pool, "Library hours", 0, true)
        .await
        .unwrap();
    create_update(&ctx.db_pool, "Parking notice", 0, false)
        .await
        .unwrap();

    let client = ctx.graphql();

    let matches = client
        .query(r#"{ allUpdates(search: "parking") { title isActive } }"#)
        .await;
    let rows = matches["allUpdates"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"].as_str(), Some("Parking notice"));

    // Body text matches too; fixtures store "<title> body"
    let by_body = client
        .query(r#"{ allUpdates(search: "library hours body") { title } }"#)
        .await;
    assert_eq!(by_body["allUpdates"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Gallery
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn gallery_shows_newest_upload_first(ctx: &TestHarness) {
    create_gallery_image(&ctx.db_pool, "first-upload.jpg", true)
        .await
        .unwrap();
    create_gallery_image(&ctx.db_pool, "second-upload.jpg", true)
        .await
        .unwrap();
    create_gallery_image(&ctx.db_pool, "hidden.jpg", false)
        .await
        .unwrap();

    let result = ctx.graphql().query("{ gallery { image } }").await;
    let images: Vec<&str> = result["gallery"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["image"].as_str().unwrap())
        .collect();

    assert_eq!(images, vec!["second-upload.jpg", "first-upload.jpg"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_gallery_listing_searches_captions(ctx: &TestHarness) {
    let client = ctx.graphql();

    client
        .query(
            r#"mutation {
                addGalleryImage(image: "gala.jpg", caption: "Annual gala night") { id }
            }"#,
        )
        .await;
    client
        .query(
            r#"mutation {
                addGalleryImage(image: "cleanup.jpg", caption: "River cleanup day") { id }
            }"#,
        )
        .await;

    let result = client
        .query(r#"{ allGalleryImages(search: "gala") { image caption } }"#)
        .await;
    let rows = result["allGalleryImages"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["image"].as_str(), Some("gala.jpg"));
}

// =============================================================================
// Admin event listing
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_event_listing_filters_and_searches(ctx: &TestHarness) {
    create_event(&ctx.db_pool, "Harvest Festival", date(2024, 10, 5), true)
        .await
        .unwrap();
    create_event(&ctx.db_pool, "Draft Workshop", date(2024, 11, 1), false)
        .await
        .unwrap();

    let client = ctx.graphql();

    let drafts = client
        .query(r#"{ allEvents(active: false) { title } }"#)
        .await;
    let rows = drafts["allEvents"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"].as_str(), Some("Draft Workshop"));

    // Location text is searchable; fixtures use "Community Hall"
    let by_location = client
        .query(r#"{ allEvents(search: "community hall") { title } }"#)
        .await;
    assert_eq!(by_location["allEvents"].as_array().unwrap().len(), 2);

    let by_title = client
        .query(r#"{ allEvents(search: "harvest") { title } }"#)
        .await;
    assert_eq!(by_title["allEvents"].as_array().unwrap().len(), 1);
}
