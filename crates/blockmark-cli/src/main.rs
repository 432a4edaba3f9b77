use anyhow::{Context, Result};
use blockmark_config::{Config, OutputOptions};
use blockmark_engine::markdown_to_html;
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
};

/// Wraps a rendered fragment in a minimal HTML page.
fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n<body>\n{fragment}\n</body>\n</html>\n"
    )
}

/// Converts the markdown file at `input` into the text to write out.
fn convert_file(input: &Path, config: &Config) -> Result<String> {
    let markdown = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    log::info!("Converting {}", input.display());

    let fragment = markdown_to_html(&markdown, &config.parse)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    Ok(render_output(&fragment, &config.output))
}

fn render_output(fragment: &str, output: &OutputOptions) -> String {
    if output.wrap_document {
        wrap_document(fragment)
    } else {
        format!("{fragment}\n")
    }
}

fn write_output(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            log::info!("Writing {}", path.display());
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            log::info!("Writing to stdout");
            stdout().write_all(html.as_bytes())?;
        }
    }
    Ok(())
}

/// Loads the config at `config_path`. Only a missing file falls back to
/// defaults; an unreadable or invalid one is an error.
fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_from_path(config_path)
        .context("Failed to load config file")?
        .unwrap_or_default();
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: {} <input.md> [output.html]", args[0]);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Fix or remove the config file at {}", config_path.display());
            process::exit(1);
        }
    };

    // Convert fully before touching the output so a failure writes nothing
    let html = match convert_file(&input, &config) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&html, output.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
