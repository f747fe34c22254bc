//! Integration tests for profile conversion
//!
//! These tests serve profile pages and redirect links from a wiremock
//! server and drive the full pipeline over plain HTTP sessions.

use linkedin2md::fetcher::FetchError;
use linkedin2md::{Config, Coordinator, HttpRenderer, ProfileError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE: &str = include_str!("../fixtures/profile.html");

/// Config pointing profile lookups at the mock server
fn create_test_config(server: &MockServer) -> Config {
    Config {
        base_url: format!("{}/in/", server.uri()),
        timeout_secs: 5,
        ..Config::default()
    }
}

fn create_coordinator(server: &MockServer) -> Coordinator<HttpRenderer> {
    let config = create_test_config(server);
    let renderer = HttpRenderer::new(&config).expect("Failed to build HTTP renderer");
    Coordinator::new(config, renderer).expect("Failed to create coordinator")
}

async fn mount_profile(server: &MockServer, id: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/in/{}", id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_redirect(server: &MockServer, target: &str, destination: &str) {
    Mock::given(method("GET"))
        .and(path("/redir/redirect"))
        .and(query_param("url", target))
        .respond_with(ResponseTemplate::new(302).insert_header("location", destination))
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page: &str) {
    Mock::given(method("GET"))
        .and(path(page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_profile_conversion() {
    let server = MockServer::start().await;
    mount_profile(&server, "jane-doe", PROFILE).await;
    mount_redirect(&server, "paper", "/papers/fast-parsing").await;
    mount_redirect(&server, "project", "/projects/linkedin2md").await;
    mount_page(&server, "/papers/fast-parsing").await;
    mount_page(&server, "/projects/linkedin2md").await;

    let coordinator = create_coordinator(&server);
    let markdown = coordinator
        .convert("jane-doe")
        .await
        .expect("Conversion failed");

    let base = server.uri();

    // Headline
    assert!(markdown.starts_with("## Jane Doe\n\n+ Current\n    + Acme Corp\n    + Widget Labs\n"));
    assert!(markdown.contains("+ Education\n    + State University\n"));

    // Experience
    assert!(markdown.contains(
        "### Experience\n\n+ Engineer\n    + Acme Corp, Springfield\n    + 2020 – 2022\n    + Built things.  \n      Shipped more things.\n+ Intern\n    + Widget Labs\n    + 2019\n"
    ));

    // Education
    assert!(markdown.contains(
        "+ State University (2015 – 2019)\n    + BSc, Computer Science\n    + Activities: Robotics club\n    + Thesis: Parsers\n"
    ));

    // Skills never include pagination controls
    assert!(markdown.contains("### Top Skills\n\n+ Rust\n+ Distributed Systems\n"));
    assert!(!markdown.contains("See 12+"));

    // Languages
    assert!(markdown.contains("+ English: Native or bilingual proficiency\n+ German\n"));

    // Block layouts
    assert!(markdown.contains("#### Mentor at Code Club\n2018 – Present\nWeekly sessions.\n"));
    assert!(markdown.contains("#### Organizer at Rust Users Group  \n2017 – Present  \nMonthly meetups.  \n"));
    assert!(markdown.contains(&format!(
        "#### [Fast Parsing]({}/papers/fast-parsing) on Journal of Parsers\n",
        base
    )));
    assert!(markdown.contains("#### Best Paper\nHeld by ParseConf at 2021  \n"));
    assert!(markdown.contains(&format!(
        "#### [linkedin2md]({}/projects/linkedin2md)\n2016\nExport profiles to markdown.\n",
        base
    )));
    assert!(markdown.contains("#### Side Project\n"));

    // One separator after the headline and after each of the eleven sections
    assert_eq!(markdown.matches("\n---\n").count(), 12);
}

#[tokio::test]
async fn test_unresolvable_redirect_keeps_original_link() {
    let server = MockServer::start().await;
    mount_profile(&server, "jane-doe", PROFILE).await;
    Mock::given(method("GET"))
        .and(path("/redir/redirect"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let coordinator = create_coordinator(&server);
    let markdown = coordinator
        .convert("jane-doe")
        .await
        .expect("Conversion must not fail on a bad redirect");

    assert!(markdown.contains(&format!(
        "#### [linkedin2md]({}/redir/redirect?url=project)",
        server.uri()
    )));
}

#[tokio::test]
async fn test_headline_and_experience_only() {
    let html = r#"<html><body>
        <h1 id="name" class="fn">Sam Smith</h1>
        <section id="experience" class="profile-section">
          <h3 class="title">Experience</h3>
          <ul><li class="position">
            <h4 class="item-title">Engineer</h4>
            <h5 class="item-subtitle">Acme</h5>
            <span class="date-range">2020–2022</span>
            <p class="description">Built things</p>
          </li></ul>
        </section>
    </body></html>"#;

    let server = MockServer::start().await;
    mount_profile(&server, "sam", html).await;

    let markdown = create_coordinator(&server)
        .convert("sam")
        .await
        .expect("Conversion failed");

    // Headline and separator, then the empty summary's separator
    assert!(markdown.starts_with("## Sam Smith\n\n\n---\n\n\n---\n\n### Experience\n"));
    assert!(markdown.contains(
        "### Experience\n\n+ Engineer\n    + Acme\n    + 2020–2022\n    + Built things\n\n---\n"
    ));
    assert_eq!(markdown.matches("\n---\n").count(), 12);
}

#[tokio::test]
async fn test_empty_page_renders_only_separators() {
    let server = MockServer::start().await;
    mount_profile(&server, "nobody", "<html><body></body></html>").await;

    let markdown = create_coordinator(&server)
        .convert("nobody")
        .await
        .expect("Conversion failed");

    assert_eq!(markdown, "\n---\n\n".repeat(12));
}

#[tokio::test]
async fn test_profile_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = create_coordinator(&server).convert("missing").await;

    assert!(matches!(
        result,
        Err(ProfileError::Fetch(FetchError::Status { status: 404, .. }))
    ));
}

#[tokio::test]
async fn test_invalid_identifier() {
    let server = MockServer::start().await;
    let result = create_coordinator(&server).convert("  ").await;
    assert!(matches!(result, Err(ProfileError::InvalidIdentifier(_))));
}

#[tokio::test]
async fn test_identifier_cannot_leave_profile_path() {
    let server = MockServer::start().await;
    let coordinator = create_coordinator(&server);

    for identifier in ["../feed", "javascript:alert(1)", "https://example.com/in/jane-doe"] {
        let result = coordinator.convert(identifier).await;
        assert!(
            matches!(result, Err(ProfileError::InvalidIdentifier(_))),
            "accepted {}",
            identifier
        );
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}
