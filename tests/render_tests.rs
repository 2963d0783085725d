use ipaas::models::{ApplicationSummary, DatabaseSummary};
use ipaas::render::{
    application_listing, database_listing, Listing, PublicListingView, PublicUpdate, RowAction,
    NO_APPLICATIONS, NO_DATABASES, NO_PUBLIC_APPLICATIONS,
};
use serde_json::json;

fn apps(n: usize) -> Vec<ApplicationSummary> {
    (0..n)
        .map(|i| {
            serde_json::from_value(json!({
                "containerID": format!("c{}", i),
                "name": format!("app{}", i),
                "description": "",
                "externalPort": 8080 + i,
                "isPublic": i % 2 == 0,
            }))
            .unwrap()
        })
        .collect()
}

#[test]
fn test_absent_or_empty_list_renders_placeholder() {
    for listing in [application_listing(None, "vano.my-wan"), application_listing(Some(&[]), "vano.my-wan")] {
        assert_eq!(listing, Listing::Placeholder(NO_APPLICATIONS));
        assert_eq!(listing.row_count(), 0);
    }
    let dbs: Vec<DatabaseSummary> = Vec::new();
    assert_eq!(database_listing(Some(&dbs)), Listing::Placeholder(NO_DATABASES));
}

#[test]
fn test_one_row_per_application_keyed_by_container_id() {
    let list = apps(3);
    let listing = application_listing(Some(&list), "vano.my-wan");

    assert_eq!(listing.row_count(), 3);
    assert_eq!(listing.ids(), vec!["c0", "c1", "c2"]);
    assert!(listing.rows()[1].cells.contains(&"http://vano.my-wan:8081".to_string()));
}

#[test]
fn test_publish_toggle_follows_visibility() {
    let list = apps(2);
    let listing = application_listing(Some(&list), "h");

    assert_eq!(listing.rows()[0].actions, vec![RowAction::Delete, RowAction::MakePrivate]);
    assert_eq!(listing.rows()[1].actions, vec![RowAction::Delete, RowAction::MakePublic]);
}

#[test]
fn test_table_mentions_every_application() {
    let list = apps(2);
    let text = application_listing(Some(&list), "h").to_string();
    assert!(text.contains("app0"));
    assert!(text.contains("app1"));
    assert!(text.contains("Make public"));
}

#[test]
fn test_public_view_skips_unchanged_counts() {
    let mut view = PublicListingView::new("vano.my-wan");
    assert_eq!(view.last_render(), None);

    let two = apps(2);
    match view.apply(Some(&two)) {
        PublicUpdate::Render(listing) => assert_eq!(listing.row_count(), 2),
        other => panic!("expected a render, got {:?}", other),
    }
    assert_eq!(view.apply(Some(&two)), PublicUpdate::Unchanged);
    assert_eq!(view.last_render(), Some(2));

    let three = apps(3);
    assert!(matches!(view.apply(Some(&three)), PublicUpdate::Render(l) if l.row_count() == 3));
}

#[test]
fn test_public_view_shows_placeholder_once_and_resets() {
    let mut view = PublicListingView::new("h");
    let two = apps(2);
    view.apply(Some(&two));

    assert_eq!(
        view.apply(None),
        PublicUpdate::Render(Listing::Placeholder(NO_PUBLIC_APPLICATIONS))
    );
    assert_eq!(view.last_render(), Some(0));
    assert_eq!(view.apply(None), PublicUpdate::Unchanged);

    // after a reset the same two applications are drawn again
    assert!(matches!(view.apply(Some(&two)), PublicUpdate::Render(_)));
}
