use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "allthewayback",
    about = "Search the WayBackMachine for sensitive data",
    version,
    long_about = None
)]
pub struct Args {
    /// Domain to search for (e.g google.com)
    #[arg(short, long, value_name = "url")]
    pub domain: String,

    /// Output file name
    #[arg(short, long, value_name = "file")]
    pub output: PathBuf,

    /// Year to start wayback searching from
    #[arg(short = 'y', long, value_name = "year", default_value_t = 2020)]
    pub from_year: i32,

    /// Rate limit in seconds between archive requests
    #[arg(long, value_name = "seconds", default_value_t = 5)]
    pub rate_limit: u64,

    /// Display URLs as they are discovered
    #[arg(short, long)]
    pub verbose: bool,

    /// Search for robots.txt files
    #[arg(short = 'R', long)]
    pub robots: bool,

    /// Search for .git files
    #[arg(short = 'G', long)]
    pub git: bool,

    /// Search for config files
    #[arg(short = 'C', long)]
    pub config: bool,

    /// Search for sitemap files
    #[arg(short = 'S', long)]
    pub sitemap: bool,

    /// Search for htaccess files
    #[arg(short = 'H', long)]
    pub htaccess: bool,

    /// Search for web.config files
    #[arg(long)]
    pub web_config: bool,

    /// Search for WEB-INF/web.xml files
    #[arg(long)]
    pub web_xml: bool,

    /// Search for Nginx config
    #[arg(short = 'N', long)]
    pub nginx: bool,

    /// Specify your own file to search for (e.g /test.php)
    #[arg(long, value_name = "path")]
    pub own_file: Option<String>,
}

impl Args {
    /// Searches expect a bare host; anything carrying a scheme is rejected
    /// before a single request goes out.
    pub fn validated_domain(&self) -> Result<&str> {
        if self.domain.contains("http") {
            anyhow::bail!(
                "Please enter a domain without a protocol: google.com and not https://google.com"
            );
        }
        Ok(&self.domain)
    }
}
