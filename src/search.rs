use anyhow::Result;
use log::info;
use reqwest::blocking::Client;
use std::path::PathBuf;

use crate::archive::{fetch_snapshots, SearchConfig};
use crate::args::Args;
use crate::output::write_urls;

/// One requested search: the path suffix sent to the archive and the label
/// used in console notices.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub suffix: String,
    pub label: String,
}

impl Target {
    fn fixed(suffix: &str, label: &str) -> Target {
        Target {
            suffix: suffix.to_string(),
            label: label.to_string(),
        }
    }
}

/// Map the requested flags to their path suffixes. The nginx entry carries
/// no leading slash; the archive index is queried with the raw
/// concatenation `{host}nginx.conf`.
pub fn selected_targets(args: &Args) -> Vec<Target> {
    let mut targets = Vec::new();

    if args.robots {
        targets.push(Target::fixed("/robots.txt", "robots.txt"));
    }
    if args.git {
        targets.push(Target::fixed("/.git", ".git"));
    }
    if args.config {
        targets.push(Target::fixed("/config", "/config"));
    }
    if args.sitemap {
        targets.push(Target::fixed("/sitemap.xml", "sitemap.xml"));
    }
    if args.htaccess {
        targets.push(Target::fixed("/.htaccess", ".htaccess"));
    }
    if args.web_config {
        targets.push(Target::fixed("/web.config", "web.config"));
    }
    if args.web_xml {
        targets.push(Target::fixed("/WEB-INF/web.xml", "web.xml"));
    }
    if args.nginx {
        targets.push(Target::fixed("nginx.conf", "nginx.conf"));
    }
    if let Some(own) = &args.own_file {
        targets.push(Target {
            suffix: own.clone(),
            label: own.clone(),
        });
    }

    targets
}

/// Run every requested search against the domain, appending hits to the
/// output file as they come in.
///
/// Returns the output path once anything was written, or `None` when every
/// search came back empty.
pub fn run_searches(
    client: &Client,
    config: &SearchConfig,
    args: &Args,
) -> Result<Option<PathBuf>> {
    let mut wrote_any = false;

    for target in selected_targets(args) {
        let urls = fetch_snapshots(client, config, &args.domain, &target.suffix);

        if urls.is_empty() {
            println!("[!] No {} data discovered", target.label);
            continue;
        }

        info!("writing {} urls for {}", urls.len(), target.label);
        write_urls(&args.output, &urls, args.verbose)?;
        wrote_any = true;
    }

    Ok(if wrote_any {
        Some(args.output.clone())
    } else {
        None
    })
}
