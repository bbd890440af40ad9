//! Byline CLI — read and filter the blog feed from the terminal.
//!
//! Calls `byline-core` directly; filtering behaves exactly as it does in the
//! desktop reader.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use byline_core::article::{category_summaries, load_feed, sample_feed, Article, Feed};
use byline_core::filter::{FilterController, DEFAULT_HEADING};
use byline_core::prefs::Prefs;

/// Byline CLI — browse the blog feed from the terminal.
#[derive(Parser)]
#[command(name = "byline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Feed JSON file to read (default: prefs, then the built-in sample)
    #[arg(long, global = true)]
    feed: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every article in the feed
    List,
    /// Search articles by title, excerpt, or category substring
    Search {
        /// Search query
        query: String,
    },
    /// List categories with article counts
    Categories,
    /// Show only the articles in one category
    Filter {
        /// Category name ("all" clears the filter)
        category: String,
    },
    /// Print one article in full
    Show {
        /// Article slug, as printed by `list`
        slug: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Resolve the feed to read: `--feed` beats the prefs override beats the
/// embedded sample. An explicit `--feed` that fails to load is fatal; a stale
/// prefs path only warns.
fn resolve_feed(flag: Option<PathBuf>) -> Feed {
    if let Some(path) = flag {
        return load_feed(&path).unwrap_or_else(|e| {
            eprintln!("Could not load feed {}: {e}", path.display());
            std::process::exit(1);
        });
    }
    if let Some(path) = Prefs::load().feed {
        match load_feed(std::path::Path::new(&path)) {
            Ok(feed) => return feed,
            Err(e) => {
                tracing::warn!(path = path.as_str(), error = %e, "Configured feed failed to load; using sample");
            }
        }
    }
    sample_feed()
}

fn print_article_rows(articles: &[&Article]) {
    for a in articles {
        println!("{:<28} {:<42} {:<12} {:>2} min", a.slug, a.title, a.category, a.read_minutes);
    }
}

fn articles_json(heading: &str, articles: &[&Article]) -> serde_json::Value {
    serde_json::json!({
        "heading": heading,
        "count": articles.len(),
        "articles": articles,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("byline=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let feed = resolve_feed(cli.feed);
            let controller = FilterController::new(feed.articles);
            let visible: Vec<&Article> = controller.visible_articles().collect();

            if cli.json {
                let output = articles_json(DEFAULT_HEADING, &visible);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                print_article_rows(&visible);
                eprintln!("\n{} ({})", DEFAULT_HEADING, visible.len());
            }
        }
        Commands::Search { query } => {
            let feed = resolve_feed(cli.feed);
            let mut controller = FilterController::new(feed.articles);
            let outcome = controller.apply_text_filter(&query).clone();
            let visible: Vec<&Article> = controller.visible_articles().collect();

            if cli.json {
                let mut output = articles_json(&outcome.heading, &visible);
                output["noResults"] = serde_json::json!(outcome.no_results);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else if let Some(missed) = &outcome.no_results {
                eprintln!("No articles found matching \"{missed}\". Try different keywords.");
                std::process::exit(1);
            } else {
                print_article_rows(&visible);
                eprintln!("\n{}", outcome.heading);
            }
        }
        Commands::Categories => {
            let feed = resolve_feed(cli.feed);
            let summaries = category_summaries(&feed.articles);

            if cli.json {
                let items: Vec<serde_json::Value> = summaries
                    .iter()
                    .map(|c| serde_json::json!({ "category": c.label, "count": c.count }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&items).unwrap());
            } else {
                println!("{:<20} {:>4}", "All", feed.articles.len());
                for c in &summaries {
                    println!("{:<20} {:>4}", c.label, c.count);
                }
            }
        }
        Commands::Filter { category } => {
            let feed = resolve_feed(cli.feed);
            let mut controller = FilterController::new(feed.articles);
            let outcome = controller.apply_category_filter(&category).clone();
            let visible: Vec<&Article> = controller.visible_articles().collect();

            if cli.json {
                let output = articles_json(&outcome.heading, &visible);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                // Unlike search, an empty category prints only its heading.
                print_article_rows(&visible);
                eprintln!("\n{}", outcome.heading);
            }
        }
        Commands::Show { slug } => {
            let feed = resolve_feed(cli.feed);
            let article = feed.article_by_slug(&slug).unwrap_or_else(|| {
                eprintln!("No article with slug '{slug}'");
                std::process::exit(1);
            });

            if cli.json {
                println!("{}", serde_json::to_string_pretty(article).unwrap());
            } else {
                println!("{}", article.title);
                println!(
                    "{} · {} · {} · {} min read",
                    article.category, article.author, article.date, article.read_minutes
                );
                println!("\n{}", article.excerpt);
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "byline", &mut std::io::stdout());
        }
    }
}
