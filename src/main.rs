use anyhow::{Context, Result};
use postdown::{Config, MarkdownRenderer};
use std::fs;
use std::io::Read;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    let markdown = read_input(&config)?;
    let html = MarkdownRenderer::new().render(&markdown);
    write_output(&config, &html)?;

    Ok(())
}

/// Reads markdown from the configured input file, or stdin when none is set.
fn read_input(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read markdown from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes rendered HTML to the configured output file, or stdout when none is set.
fn write_output(config: &Config, html: &str) -> Result<()> {
    match &config.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            print!("{html}");
            Ok(())
        }
    }
}
