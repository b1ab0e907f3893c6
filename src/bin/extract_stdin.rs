//! CLI that reads an article page from stdin and prints the news post as JSON.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use rs_newspost::{extract_news_post_bytes, Options, PreviewMeta, DEFAULT_DESCRIPTION_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "newspost-stdin")]
#[command(about = "Extract a structured news post from article HTML on stdin")]
struct Args {
    /// Canonical article URL; relative links and images resolve against it
    #[arg(long)]
    url: String,

    /// Article title
    #[arg(long)]
    title: String,

    /// Explicit description (synthesized from the content when omitted)
    #[arg(long)]
    description: Option<String>,

    /// Explicit lead image URL
    #[arg(long)]
    image: Option<String>,

    /// CSS selector for the article body
    #[arg(short = 's', long, default_value = "article")]
    selector: String,

    /// CSS selector to strip from the body (repeatable)
    #[arg(short = 'r', long = "remove")]
    remove: Vec<String>,

    /// CSS selector for the lead image
    #[arg(long)]
    lead_image: Option<String>,

    /// Use the first paragraph as the description
    #[arg(long, default_value_t = false)]
    lead_paragraph: bool,

    /// Target length of the synthesized description
    #[arg(short = 'l', long, default_value_t = DEFAULT_DESCRIPTION_LENGTH)]
    description_length: usize,

    /// Site profile name reported as the post source
    #[arg(long, default_value = "generic")]
    source: String,

    /// Output compact JSON instead of pretty
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let options = Options {
        source: args.source,
        content_selector: args.selector,
        remove_selectors: args.remove,
        lead_image_selector: args.lead_image,
        lead_paragraph_description: args.lead_paragraph,
        description_length: args.description_length,
        ..Options::default()
    };

    let preview = PreviewMeta {
        uri: args.url,
        title: Some(args.title),
        description: args.description,
        image: args.image,
        published_at: None,
    };

    let post = match extract_news_post_bytes(&html, preview, &options) {
        Ok(post) => post,
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let json = if args.compact {
        serde_json::to_string(&post)
    } else {
        serde_json::to_string_pretty(&post)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize output: {err}");
            ExitCode::FAILURE
        }
    }
}
