use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use futures::StreamExt;
use uigen_core::codegen::{FilePayload, Frame, FrameReader};

#[derive(Debug, clap::Parser)]
#[command(name = "client")]
#[command(about = "Request a generation from a running server and print the files")]
pub struct App {
    /// Natural-language description of the UI to build
    pub description: String,

    /// Base URL of the uigen server
    #[clap(long, env = "UIGEN_URL", default_value = "http://localhost:8000")]
    pub url: String,

    /// Number of characters of each file to print
    #[clap(long, default_value = "200")]
    pub preview: usize,
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let endpoint = format!("{}/generate-code", app.url.trim_end_matches('/'));

    if global.verbose {
        eprintln!("POST {}", endpoint);
    }

    let response = reqwest::Client::new()
        .post(&endpoint)
        .json(&serde_json::json!({ "description": app.description }))
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach {}: {}", endpoint, e))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let detail = response.text().await.unwrap_or_default();
        return Err(Error::Http { status, detail }.into());
    }

    let mut reader = FrameReader::new();
    let mut files: Vec<FilePayload> = Vec::new();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.context("Failed to read event stream")?;

        for frame in reader.push(&chunk) {
            match frame {
                Frame::Comment(text) => {
                    if global.verbose {
                        eprintln!(": {}", text);
                    }
                }
                Frame::Data(payload) if payload.is_status() => {
                    println!("{} {}", "status:".bold().cyan(), payload.code);
                }
                Frame::Data(payload) => {
                    print_file(&payload, app.preview);
                    files.push(payload);
                }
                Frame::Malformed(data) => {
                    eprintln!("{} {}", "Failed to parse JSON:".red(), data);
                }
            }
        }
    }

    if !files.is_empty() {
        print_summary(&files);
    }

    Ok(())
}

fn print_file(payload: &FilePayload, preview: usize) {
    println!();
    println!("{} {}", "File:".bold(), payload.file.green());
    println!("Content:");
    println!("{}", truncate_chars(&payload.code, preview));
    println!("{}", "-".repeat(80));
}

fn print_summary(files: &[FilePayload]) {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "File".bold().cyan(),
        "Bytes".bold().cyan(),
        "Lines".bold().cyan()
    ]);

    for file in files {
        table.add_row(prettytable::row![
            file.file.green(),
            file.code.len(),
            file.code.lines().count()
        ]);
    }

    println!();
    table.printstd();
}

/// Cut `text` to at most `max` characters, marking the cut with `...`.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
