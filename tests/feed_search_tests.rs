//! Feed search tests against a local mock feed server.

use httpmock::prelude::*;

use technova_support_server::feed::{FeedClient, FeedError, FeedHit};

const RSS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <link>https://news.example.com/</link>
    <description>Example feed</description>
    <item>
      <title>Learn Rust in 2026</title>
      <description>A practical borrow checker guide</description>
      <link>https://news.example.com/rust</link>
    </item>
    <item>
      <title>Python tips</title>
      <description>List comprehension tricks</description>
      <link>https://news.example.com/python</link>
    </item>
    <item>
      <title>More RUST macros</title>
      <description>Derive deep dive</description>
      <link>https://news.example.com/macros</link>
    </item>
    <item>
      <title>Even more rust</title>
      <description>Async pitfalls</description>
      <link>https://news.example.com/async</link>
    </item>
  </channel>
</rss>"#;

const ATOM_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>channel-1</id>
  <title>Example Channel</title>
  <updated>2026-08-01T00:00:00Z</updated>
  <entry>
    <id>video-1</id>
    <title>Rust Full Course</title>
    <link href="https://videos.example.com/1"/>
    <updated>2026-08-01T00:00:00Z</updated>
  </entry>
  <entry>
    <id>video-2</id>
    <title>Gardening Basics</title>
    <link href="https://videos.example.com/2"/>
    <updated>2026-07-01T00:00:00Z</updated>
  </entry>
</feed>"#;

fn client() -> FeedClient {
    FeedClient::new(reqwest::Client::new())
}

fn rss_server() -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rss");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(RSS_BODY);
    });
    server
}

#[tokio::test]
async fn title_match_is_case_insensitive() {
    let server = rss_server();

    let hits = client()
        .search(&server.url("/rss"), "rust", 10, false)
        .await
        .unwrap();

    let titles: Vec<&str> = hits.iter().map(|hit| hit.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Learn Rust in 2026", "More RUST macros", "Even more rust"]
    );
    assert_eq!(hits[0].url, "https://news.example.com/rust");
}

#[tokio::test]
async fn description_match_requires_opt_in() {
    let server = rss_server();
    let client = client();

    let with_descriptions = client
        .search(&server.url("/rss"), "borrow", 10, true)
        .await
        .unwrap();
    assert_eq!(
        with_descriptions,
        vec![FeedHit {
            title: "Learn Rust in 2026".to_string(),
            url: "https://news.example.com/rust".to_string(),
        }]
    );

    let titles_only = client
        .search(&server.url("/rss"), "borrow", 10, false)
        .await
        .unwrap();
    assert!(titles_only.is_empty());
}

#[tokio::test]
async fn results_are_capped_in_feed_order() {
    let server = rss_server();

    let hits = client()
        .search(&server.url("/rss"), "rust", 2, false)
        .await
        .unwrap();

    let titles: Vec<&str> = hits.iter().map(|hit| hit.title.as_str()).collect();
    assert_eq!(titles, vec!["Learn Rust in 2026", "More RUST macros"]);
}

#[tokio::test]
async fn no_match_returns_empty_list() {
    let server = rss_server();

    let hits = client()
        .search(&server.url("/rss"), "cobol", 3, true)
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn atom_feeds_are_searched_by_title() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/atom");
        then.status(200)
            .header("content-type", "application/atom+xml")
            .body(ATOM_BODY);
    });

    let hits = client()
        .search(&server.url("/atom"), "rust", 3, false)
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Rust Full Course");
    assert_eq!(hits[0].url, "https://videos.example.com/1");
}

#[tokio::test]
async fn http_failure_is_a_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rss");
        then.status(500);
    });

    let err = client()
        .search(&server.url("/rss"), "rust", 3, false)
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Http(_)));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rss");
        then.status(200).body("this is not xml");
    });

    let err = client()
        .search(&server.url("/rss"), "rust", 3, false)
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Parse(_)));
}
