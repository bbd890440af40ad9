//! End-to-end filter flow over a fixture feed: load from disk, then drive the
//! controller through the command surface the way a reader session would.

use byline_core::article::{category_summaries, load_feed, Feed};
use byline_core::filter::{FilterCommand, FilterController, FilterMode, DEFAULT_HEADING};
use std::path::Path;

fn fixture_feed() -> Feed {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/feed.json");
    load_feed(&path).expect("fixture feed loads")
}

#[test]
fn fixture_feed_loads_with_categories() {
    let feed = fixture_feed();
    assert_eq!(feed.title, "Fixture Feed");
    assert_eq!(feed.articles.len(), 4);

    let summaries = category_summaries(&feed.articles);
    let labels: Vec<(&str, usize)> =
        summaries.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(labels, vec![("Programming", 2), ("Fitness", 1), ("Travel", 1)]);
}

#[test]
fn reader_session_walks_through_every_filter_state() {
    let feed = fixture_feed();
    let mut controller = FilterController::new(feed.articles);

    // Fresh session: everything visible under the default heading.
    assert_eq!(controller.outcome().visible_count, 4);
    assert_eq!(controller.outcome().heading, DEFAULT_HEADING);
    assert!(controller.outcome().no_results.is_none());

    // Reader types "run" into either search box.
    controller.dispatch(FilterCommand::TextQueryChanged("run".to_string()));
    let titles: Vec<&str> = controller.visible_articles().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Trail Running Tips"]);
    assert_eq!(controller.outcome().heading, "Search Results (1 found)");

    // Then clicks the Fitness category: the category result fully replaces
    // the text result.
    controller.dispatch(FilterCommand::CategorySelected("Fitness".to_string()));
    assert_eq!(controller.outcome().heading, "Fitness Articles (1)");
    assert_eq!(controller.mode(), &FilterMode::Category("fitness".to_string()));

    // A search with no hits raises the panel carrying the query text.
    controller.dispatch(FilterCommand::TextQueryChanged("xyz123".to_string()));
    assert_eq!(controller.outcome().visible_count, 0);
    assert_eq!(controller.outcome().heading, "Search Results (0 found)");
    assert_eq!(controller.outcome().no_results.as_deref(), Some("xyz123"));

    // Clearing the box restores the landing state exactly.
    controller.dispatch(FilterCommand::TextQueryChanged(String::new()));
    assert_eq!(controller.outcome().visible_count, 4);
    assert_eq!(controller.outcome().heading, DEFAULT_HEADING);
    assert!(controller.outcome().no_results.is_none());
    assert_eq!(controller.mode(), &FilterMode::All);
}

#[test]
fn category_zero_hits_never_raise_the_panel() {
    let feed = fixture_feed();
    let mut controller = FilterController::new(feed.articles);

    controller.dispatch(FilterCommand::CategorySelected("Food".to_string()));
    assert_eq!(controller.outcome().visible_count, 0);
    assert_eq!(controller.outcome().heading, "Food Articles (0)");
    assert!(controller.outcome().no_results.is_none(), "panel is text-search only");
}

#[test]
fn text_search_reaches_excerpts_and_categories() {
    let feed = fixture_feed();
    let mut controller = FilterController::new(feed.articles);

    // "goroutines" appears only in an excerpt.
    controller.dispatch(FilterCommand::TextQueryChanged("goroutines".to_string()));
    let titles: Vec<&str> = controller.visible_articles().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Go Concurrency"]);

    // "travel" appears only as a category.
    controller.dispatch(FilterCommand::TextQueryChanged("TRAVEL".to_string()));
    let titles: Vec<&str> = controller.visible_articles().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Slow Trains Through the Alps"]);
}
