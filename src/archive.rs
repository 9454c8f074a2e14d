use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::thread;
use std::time::Duration;

/// Public Wayback Machine endpoint serving the calendar-capture index.
pub const WAYBACK_BASE_URL: &str = "https://web.archive.org";

/// Per-request timeout against the archive index.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one search run, threaded explicitly through every call.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Archive service root; overridable so tests can stand in a local server
    pub base_url: String,
    /// First year queried; the search walks from here to the current year
    pub from_year: i32,
    /// Slept after every index request, hit or miss
    pub rate_limit: Duration,
}

impl SearchConfig {
    pub fn new(from_year: i32, rate_limit: Duration) -> SearchConfig {
        SearchConfig {
            base_url: WAYBACK_BASE_URL.to_string(),
            from_year,
            rate_limit,
        }
    }
}

/// One capture row from the calendar index. Position 0 is a timestamp
/// fragment, position 1 the recorded HTTP status (`"-"` when the index never
/// saw one), and any remaining positions are index flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CaptureRecord(pub Vec<Value>);

impl CaptureRecord {
    /// The timestamp portion used to address the snapshot. The index serves
    /// it as a bare number, but a string form is accepted too.
    pub fn timestamp_fragment(&self) -> Option<String> {
        match self.0.first() {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A capture counts as retrievable when it was stored with a 200 or the
    /// index recorded no status at all.
    pub fn is_retrievable(&self) -> bool {
        match self.0.get(1) {
            Some(Value::Number(n)) => n.as_i64() == Some(200),
            Some(Value::String(s)) => s == "-",
            _ => false,
        }
    }
}

/// Capture listing as served by the index. Unknown fields such as `colls`
/// are dropped on deserialization.
#[derive(Debug, Default, Deserialize)]
struct CalendarResponse {
    #[serde(default)]
    items: Vec<CaptureRecord>,
}

pub fn new_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Ask the index for every capture of `host` + `suffix` within one year.
/// Network errors, timeouts, and malformed bodies all surface as `Err`;
/// the caller decides what to do with a failed year.
fn query_year(
    client: &Client,
    config: &SearchConfig,
    host: &str,
    suffix: &str,
    year: i32,
) -> Result<Vec<CaptureRecord>> {
    let url = format!(
        "{}/__wb/calendarcaptures/2?url={}{}&date={}",
        config.base_url, host, suffix, year
    );
    debug!("requesting {}", url);

    let response = client.get(&url).send().context("Failed to send request")?;
    let listing: CalendarResponse = response
        .json()
        .context("Failed to parse capture listing")?;
    Ok(listing.items)
}

/// Drop captures the archive did not store successfully, keeping only 200s
/// and placeholder statuses. Retained rows lose their trailing flag field;
/// the index's ordering is preserved.
pub fn filter_captures(items: Vec<CaptureRecord>) -> Vec<CaptureRecord> {
    items
        .into_iter()
        .filter(CaptureRecord::is_retrievable)
        .map(|mut record| {
            record.0.pop();
            record
        })
        .collect()
}

/// Replayable snapshot address for a capture taken in `year`.
pub fn snapshot_url(base_url: &str, year: i32, fragment: &str, host: &str, suffix: &str) -> String {
    format!("{}/web/{}0{}/{}{}", base_url, year, fragment, host, suffix)
}

/// Query the calendar index for every year from `config.from_year` through
/// the current year and collect the snapshot URLs of retrievable captures.
///
/// A year that cannot be fetched or parsed contributes nothing; the search
/// logs it and moves on. Nothing propagates past this boundary.
pub fn fetch_snapshots(
    client: &Client,
    config: &SearchConfig,
    host: &str,
    suffix: &str,
) -> Vec<String> {
    let this_year = Local::now().year();
    let mut retained: Vec<(i32, CaptureRecord)> = Vec::new();

    println!(
        "[*] Getting list of {} archives from {} onwards...",
        suffix, config.from_year
    );
    println!(
        "[!] This will take about {} seconds per year due to Wayback rate limits..",
        config.rate_limit.as_secs()
    );

    for year in config.from_year..=this_year {
        let result = query_year(client, config, host, suffix, year);
        thread::sleep(config.rate_limit);

        match result {
            Ok(items) => {
                if items.is_empty() {
                    println!("No results were found for {}", year);
                    continue;
                }
                retained.extend(filter_captures(items).into_iter().map(|record| (year, record)));
            }
            Err(e) => warn!("archive query for {} failed: {:#}", year, e),
        }
    }

    let urls: Vec<String> = retained
        .iter()
        .filter_map(|(year, record)| {
            record
                .timestamp_fragment()
                .map(|fragment| snapshot_url(&config.base_url, *year, &fragment, host, suffix))
        })
        .collect();

    if !urls.is_empty() {
        println!(
            "\n[+] Found {} results dating back to {}",
            urls.len(),
            config.from_year
        );
    }

    urls
}
