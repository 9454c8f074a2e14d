use crate::archive::SearchConfig;
use crate::args::Args;
use crate::search::{run_searches, selected_targets};
use chrono::{Datelike, Local};
use clap::Parser;
use mockito::Matcher;
use std::fs;
use std::time::Duration;

#[test]
fn test_default_args() {
    let args = Args::parse_from(["allthewayback", "-d", "example.com", "-o", "out.txt"]);
    assert_eq!(args.from_year, 2020);
    assert_eq!(args.rate_limit, 5);
    assert!(!args.verbose);
    assert!(selected_targets(&args).is_empty());
}

#[test]
fn test_domain_with_scheme_is_rejected() {
    let args = Args::parse_from(["allthewayback", "-d", "https://google.com", "-o", "out.txt"]);
    assert!(args.validated_domain().is_err());

    let args = Args::parse_from(["allthewayback", "-d", "google.com", "-o", "out.txt"]);
    assert_eq!(args.validated_domain().unwrap(), "google.com");
}

#[test]
fn test_selected_targets_follow_flag_order() {
    let args = Args::parse_from([
        "allthewayback",
        "-d",
        "example.com",
        "-o",
        "out.txt",
        "-R",
        "-G",
        "--web-xml",
        "--own-file",
        "/test.php",
    ]);

    let suffixes: Vec<String> = selected_targets(&args)
        .into_iter()
        .map(|target| target.suffix)
        .collect();
    assert_eq!(
        suffixes,
        vec!["/robots.txt", "/.git", "/WEB-INF/web.xml", "/test.php"]
    );
}

#[test]
fn test_nginx_suffix_has_no_leading_slash() {
    let args = Args::parse_from(["allthewayback", "-d", "example.com", "-o", "out.txt", "-N"]);
    let targets = selected_targets(&args);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].suffix, "nginx.conf");
}

#[test]
fn test_run_searches_writes_discovered_urls() {
    let mut server = mockito::Server::new();
    let this_year = Local::now().year();
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("results.txt");

    let _mock = server
        .mock("GET", "/__wb/calendarcaptures/2")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url".into(), "example.com/robots.txt".into()),
            Matcher::UrlEncoded("date".into(), this_year.to_string()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [[115143816, 200, "-"]], "colls": [[0]]}"#)
        .create();

    let args = Args::parse_from([
        "allthewayback",
        "-d",
        "example.com",
        "-o",
        out_path.to_str().unwrap(),
        "-R",
    ]);
    let config = SearchConfig {
        base_url: server.url(),
        from_year: this_year,
        rate_limit: Duration::ZERO,
    };
    let client = crate::archive::new_client().unwrap();

    let written = run_searches(&client, &config, &args).unwrap();

    assert_eq!(written, Some(out_path.clone()));
    let contents = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        format!(
            "{}/web/{}0115143816/example.com/robots.txt\n",
            server.url(),
            this_year
        )
    );
}

#[test]
fn test_run_searches_reports_nothing_written_on_empty_results() {
    let mut server = mockito::Server::new();
    let this_year = Local::now().year();
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("results.txt");

    let _mock = server
        .mock("GET", "/__wb/calendarcaptures/2")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .create();

    let args = Args::parse_from([
        "allthewayback",
        "-d",
        "example.com",
        "-o",
        out_path.to_str().unwrap(),
        "-R",
        "-G",
    ]);
    let config = SearchConfig {
        base_url: server.url(),
        from_year: this_year,
        rate_limit: Duration::ZERO,
    };
    let client = crate::archive::new_client().unwrap();

    let written = run_searches(&client, &config, &args).unwrap();

    assert_eq!(written, None);
    assert!(!out_path.exists());
}
