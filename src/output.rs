use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write discovered snapshot URLs to the output file, one per line with a
/// trailing newline. The file is created on first write and appended to on
/// every write after that, so repeated searches pile up in one place.
///
/// With `verbose` set the written URLs are echoed to the console; the file
/// contents are the same either way.
pub fn write_urls(path: &Path, urls: &[String], verbose: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;

    let mut block = urls.join("\n");
    block.push('\n');
    file.write_all(block.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    if verbose {
        for url in urls {
            println!(" {}", url);
        }
        println!();
    }

    Ok(())
}
