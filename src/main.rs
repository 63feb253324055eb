mod aggregate;
mod builder;
mod config;
mod discount;
mod extract;
mod harvest;
mod output;
mod pacing;
mod pipeline;
mod record;
mod selectors;
mod session;
#[cfg(test)]
mod test_utils;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use indicatif::HumanDuration;
use scraper::Html;
use tracing::error;

use crate::aggregate::Aggregator;
use crate::config::{Credentials, Settings};
use crate::discount::{discount_value, is_deep_discount};
use crate::pipeline::Pipeline;
use crate::record::{CategoryContext, ProductRecord, RankedLink, NO_RANK};
use crate::session::{HttpSession, Session, StaticSession};

#[derive(Parser)]
#[command(name = "deal_scraper", about = "Bestseller scraper that keeps products discounted above 50%")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, scrape every category and save qualifying products as CSV
    Run {
        /// Category bestseller URL (repeatable; default: configured categories)
        #[arg(short, long = "category")]
        categories: Vec<String>,
        /// Listing pages per category
        #[arg(short, long)]
        pages: Option<u32>,
    },
    /// Print the product links and ranks found in a saved listing page
    Harvest {
        /// Saved listing page HTML
        file: PathBuf,
    },
    /// Print the record a saved product page yields
    Extract {
        /// Saved product page HTML
        file: PathBuf,
        /// URL the page was saved from
        #[arg(long, default_value = "https://www.amazon.in/dp/local")]
        url: String,
        /// Category listing URL the product belongs to
        #[arg(long, default_value = "")]
        category: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load()?;

    let result = match cli.command {
        Commands::Run { categories, pages } => {
            if !categories.is_empty() {
                settings.categories = categories;
            }
            if let Some(p) = pages {
                settings.pages = p;
            }
            run(&settings)
        }
        Commands::Harvest { file } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let h = harvest::harvest(&Html::parse_document(&html), &settings.origin);
            if h.links.is_empty() {
                println!("No product links found.");
                return Ok(());
            }
            for (i, link) in h.ranked_links().iter().enumerate() {
                println!("{:>3} | {:<5} | {}", i + 1, link.rank, link.url);
            }
            println!("\n{} links, {} ranks", h.links.len(), h.ranks.len());
            Ok(())
        }
        Commands::Extract { file, url, category } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let mut session = StaticSession::new().with_page(&url, &html);
            session.navigate_to(&url)?;

            let fields = extract::extract_all(&session, &settings.waits());
            let discount = discount_value(fields.sales_discount.as_deref().unwrap_or("0%"));
            let link = RankedLink {
                url,
                rank: NO_RANK.to_string(),
            };
            let record =
                ProductRecord::assemble(fields, &CategoryContext::from_url(&category), &link);
            println!("{}", serde_json::to_string_pretty(&record)?);
            println!(
                "\nDiscount {}%: {}",
                discount,
                if is_deep_discount(discount) { "kept" } else { "filtered out" }
            );
            Ok(())
        }
    };

    println!("\nDone in {}", HumanDuration(t0.elapsed()));

    result
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    if settings.categories.is_empty() {
        bail!("No categories configured");
    }
    let credentials = match settings.credentials() {
        Some(c) => c,
        None => prompt_credentials(settings)?,
    };

    let pipeline = Pipeline::new(settings);
    let settle = settings.settle();
    let mut aggregator = Aggregator::new();

    let summaries = pipeline
        .run(
            &settings.categories,
            || {
                let mut session = HttpSession::open(settings)?;
                session.login(&credentials, &settle)?;
                Ok(session)
            },
            &mut aggregator,
        )
        .inspect_err(|e| error!("Run aborted: {:#}", e))?;

    println!("{:<24} | {:>9} | {:>5}", "Category", "Harvested", "Kept");
    println!("{}", "-".repeat(44));
    for s in &summaries {
        println!("{:<24} | {:>9} | {:>5}", clip(&s.name, 24), s.harvested, s.kept);
    }
    println!();

    let outcome = aggregator.finish(|| {
        std::fs::File::create(output::OUTPUT_PATH)
            .with_context(|| format!("Failed to create {}", output::OUTPUT_PATH))
    })?;
    println!("{}", outcome);
    Ok(())
}

fn prompt_credentials(settings: &Settings) -> anyhow::Result<Credentials> {
    let email = match &settings.email {
        Some(e) => e.clone(),
        None => prompt("Enter your Amazon email: ")?,
    };
    let password = match &settings.password {
        Some(p) => p.clone(),
        None => prompt("Enter your Amazon password: ")?,
    };
    Ok(Credentials { email, password })
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn clip(s: &str, width: usize) -> String {
    match s.char_indices().nth(width) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
