//! Command-line interface for bookgen
//!
//! # Usage Examples
//! ```bash
//! # First page with a fixed seed
//! bookgen --seed 42 --locale en --likes 4 --reviews 3
//!
//! # Later pages reuse the same seed; indices continue where page 1 ended
//! bookgen --seed 42 --page 2
//!
//! # Spanish catalog, pretty-printed
//! bookgen --seed 42 --locale es --pretty
//! ```
//!
//! Without `--seed`, a random 8-digit seed is drawn and logged so the run
//! can be reproduced later.

use bookgen::{generate_page, BuiltinLexicon, PageParams};
use clap::Parser;
use rand::Rng;

#[derive(Parser)]
#[command(name = "bookgen")]
#[command(about = "Deterministic fake book-catalog generator")]
struct Cli {
    /// Seed controlling the entire reproducible run (random when omitted)
    #[arg(long, env = "BOOKGEN_SEED")]
    seed: Option<i64>,

    /// 1-based page number (page 1 carries 20 records, later pages 10)
    #[arg(long, default_value_t = 1, env = "BOOKGEN_PAGE")]
    page: u64,

    /// Locale code for titles, names, and review text (en, es, fr)
    #[arg(long, default_value = "en", env = "BOOKGEN_LOCALE")]
    locale: String,

    /// Target average like count per book
    #[arg(long, default_value_t = 4.0, env = "BOOKGEN_LIKES")]
    likes: f64,

    /// Target average review count per book
    #[arg(long, default_value_t = 3.0, env = "BOOKGEN_REVIEWS")]
    reviews: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let user_seed = cli
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(10_000_000..=99_999_999));
    tracing::info!(
        seed = user_seed,
        page = cli.page,
        locale = %cli.locale,
        "generating catalog page"
    );

    let supply = BuiltinLexicon::new(&cli.locale);
    let params = PageParams {
        user_seed,
        page: cli.page,
        locale: cli.locale,
        avg_likes: cli.likes,
        avg_reviews: cli.reviews,
    };
    let books = generate_page(&params, &supply)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&books)?
    } else {
        serde_json::to_string(&books)?
    };
    println!("{output}");

    Ok(())
}
