use std::io::{self, BufRead, Write};

use crate::models::Config;
use crate::youtube::{CanonicalUrl, HostPolicy};
use crate::{launcher, paths, store, youtube};

use anyhow::{Result, anyhow, bail};
use colored::Colorize;

const INVALID_INPUT: &str = "Please enter a valid YouTube URL";

pub fn open(input: Option<&str>, dry_run: bool) -> Result<()> {
    let paths = paths::AppPaths::init()?;
    let cfg = store::load_config(&paths.config_file);

    let Some(input) = input else {
        return prompt(&cfg, dry_run);
    };

    let url = youtube::normalize_with(input, cfg.host_policy)
        .map_err(|e| anyhow!("{INVALID_INPUT} ({e})"))?;

    launch(&url, &cfg, dry_run)
}

/// Reads inputs from stdin until an empty line or EOF, opening each valid one.
fn prompt(cfg: &Config, dry_run: bool) -> Result<()> {
    println!("Enter a YouTube URL and press Enter (empty line to quit)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        match youtube::normalize_with(&line, cfg.host_policy) {
            Ok(url) => {
                // A failed launch should not end the session
                if let Err(e) = launch(&url, cfg, dry_run) {
                    eprintln!("{} {e:#}", "Error:".red());
                }
            }
            Err(e) => {
                log::debug!("rejected input: {e}");
                println!("{}", INVALID_INPUT.red());
            }
        }
    }

    Ok(())
}

fn launch(url: &CanonicalUrl, cfg: &Config, dry_run: bool) -> Result<()> {
    let url = url.to_string();

    if dry_run {
        println!("{url}");
        return Ok(());
    }

    println!("{} {url}", "Opening:".blue());
    let handler = launcher::launch(&url, &cfg.handlers)?;
    log::debug!("opened {url} with {handler}");

    Ok(())
}

pub fn normalize(input: &str, strict: bool) -> Result<()> {
    let paths = paths::AppPaths::init()?;
    let cfg = store::load_config(&paths.config_file);

    let policy = if strict { HostPolicy::Strict } else { cfg.host_policy };

    match youtube::normalize_with(input, policy) {
        Ok(url) => {
            println!("{url}");
            Ok(())
        }
        Err(e) => bail!("{INVALID_INPUT} ({e})"),
    }
}

pub fn config(key: &str, value: &str) -> Result<()> {
    let paths = paths::AppPaths::init()?;
    let mut cfg = store::load_config(&paths.config_file);

    match key {
        "host_policy" => match value.to_lowercase().as_str() {
            "loose" => cfg.host_policy = HostPolicy::Loose,
            "strict" => cfg.host_policy = HostPolicy::Strict,
            _ => bail!("invalid host_policy '{value}': use 'loose' or 'strict'"),
        },
        "handlers" => {
            cfg.handlers = Config::parse_handlers(value);
        }
        _ => bail!("unknown config key '{key}': available keys are 'host_policy', 'handlers'"),
    }

    store::save_config(&paths.config_file, &cfg)?;
    println!("{}", "Config updated.".green());
    Ok(())
}

pub fn info() -> Result<()> {
    let paths = paths::AppPaths::init()?;
    let cfg = store::load_config(&paths.config_file);

    println!("{}", "Settings".bold());
    println!("---------------");
    println!("Config:      {}", paths.config_file.display());
    println!("Host policy: {}", cfg.host_policy);

    let handlers = launcher::candidates(&cfg.handlers)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("Handlers:    {handlers}");

    let config_exists = paths.config_file.exists();
    println!("Config File Exists? {config_exists}");

    Ok(())
}
