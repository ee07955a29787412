//! Tests for page generation against real files

use std::fs;
use worklist_core::config::{Config, PathsConfig};
use worklist_core::{generate, WorklistError};
use worklist_testkit::{
    fixtures::{SAMPLE_TEMPLATE, SAMPLE_WORKS},
    temp_dir_in_workspace, write_site, SiteFixture,
};

/// Helper: Config pointing at the fixture files
fn config_for(site: &SiteFixture) -> Config {
    Config {
        paths: PathsConfig {
            data: site.data.clone(),
            template: site.template.clone(),
            output: site.output.clone(),
        },
        ..Config::default()
    }
}

#[test]
fn test_generate_sample_site() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some(SAMPLE_WORKS), Some(SAMPLE_TEMPLATE));

    let report = generate(&config_for(&site)).unwrap();

    assert_eq!(report.output, site.output);
    assert_eq!(report.works, 3);
    assert!(report.placeholder_found);

    let html = fs::read_to_string(&site.output).unwrap();
    assert!(html.starts_with("<!doctype html>\n<main>\n<section class=\"work\">"));
    assert!(html.ends_with("</section>\n</main>\n"));
    assert!(html.contains("<h2>Pixel Garden</h2>"));
    assert!(html.contains("<p>A generative &lt;canvas&gt; toy</p>"));
    assert!(html.contains(r#"<img src="img/pixel-garden.png" alt="Pixel Garden" loading="lazy" decoding="async">"#));
    assert!(html.contains(r#"<a href="https://example.com/garden" target="_blank" rel="noopener noreferrer">Live</a></div>"#));
    assert!(html.contains("<div class=\"tags\"># art, web</div>"));
    assert!(html.contains("<h2>Untitled #2</h2>"));
    assert!(html.contains("<h2>Tom &amp; Jerry&#39;s &quot;Tools&quot;</h2>"));
    assert!(html.contains(r#"href="https://example.com/tools?a=1&amp;b=2""#));
    assert!(!html.contains("{{WORK_LIST}}"));
}

#[test]
fn test_generate_empty_document() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some("[ /* nothing */ ]"), Some(SAMPLE_TEMPLATE));

    let report = generate(&config_for(&site)).unwrap();
    assert_eq!(report.works, 0);

    let html = fs::read_to_string(&site.output).unwrap();
    assert_eq!(html, "<!doctype html>\n<main>\n<p>No works yet.</p>\n</main>\n");
}

#[test]
fn test_generate_missing_template_writes_nothing() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some(SAMPLE_WORKS), None);

    let err = generate(&config_for(&site)).unwrap_err();

    match err {
        WorklistError::MissingInputFile { path } => assert_eq!(path, site.template),
        other => panic!("Expected MissingInputFile, got {other:?}"),
    }
    assert!(!site.output.exists(), "No output should be created");
}

#[test]
fn test_generate_missing_data_checked_first() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), None, None);

    let err = generate(&config_for(&site)).unwrap_err();

    assert!(
        matches!(&err, WorklistError::MissingInputFile { path } if *path == site.data),
        "unexpected error: {err}"
    );
}

#[test]
fn test_generate_parse_error_keeps_previous_output() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some(r#"[{ "title": "A" },]"#), Some(SAMPLE_TEMPLATE));
    fs::write(&site.output, "previous page").unwrap();

    let err = generate(&config_for(&site)).unwrap_err();

    assert!(matches!(err, WorklistError::ParseError(_)));
    assert_eq!(fs::read_to_string(&site.output).unwrap(), "previous page");
}

#[test]
fn test_generate_overwrites_existing_output() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some("[{}]"), Some(SAMPLE_TEMPLATE));
    fs::write(&site.output, "stale").unwrap();

    generate(&config_for(&site)).unwrap();

    let html = fs::read_to_string(&site.output).unwrap();
    assert!(html.contains("<h2>Untitled #1</h2>"));
}

#[test]
fn test_generate_write_error() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some("[]"), Some(SAMPLE_TEMPLATE));
    let mut config = config_for(&site);
    config.paths.output = temp.path().join("no-such-dir").join("work.html");

    let err = generate(&config).unwrap_err();

    assert!(matches!(err, WorklistError::WriteError { .. }));
    assert!(err.to_string().starts_with("WRITE_ERROR:"));
}

#[test]
fn test_generate_template_without_placeholder() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some(SAMPLE_WORKS), Some("<p>static</p>"));

    let report = generate(&config_for(&site)).unwrap();

    assert!(!report.placeholder_found);
    assert_eq!(fs::read_to_string(&site.output).unwrap(), "<p>static</p>");
}

#[test]
fn test_generate_is_repeatable() {
    let temp = temp_dir_in_workspace();
    let site = write_site(temp.path(), Some(SAMPLE_WORKS), Some(SAMPLE_TEMPLATE));
    let config = config_for(&site);

    generate(&config).unwrap();
    let first = fs::read(&site.output).unwrap();
    generate(&config).unwrap();
    let second = fs::read(&site.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_config_file_in_site_dir() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    fs::create_dir_all(root.join("data")).unwrap();
    fs::write(root.join("data/works.jsonc"), "[]").unwrap();
    fs::write(root.join("page.html"), "<div><!-- works --></div>").unwrap();
    fs::write(
        root.join("worklist.toml"),
        r#"
[paths]
data = "data/works.jsonc"
template = "page.html"
output = "out.html"

[render]
placeholder = "<!-- works -->"
empty_state = "<p>Soon.</p>"
"#,
    )
    .unwrap();

    let config = Config::load_or_default(root).unwrap();
    generate(&config).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("out.html")).unwrap(),
        "<div><p>Soon.</p></div>"
    );
}

#[test]
fn test_invalid_config_file() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("worklist.toml"), "[paths\n").unwrap();

    let err = Config::load_or_default(temp.path()).unwrap_err();
    assert!(matches!(err, WorklistError::ConfigParseError(_)));
}
