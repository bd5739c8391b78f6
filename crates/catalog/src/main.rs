//! catalog - Product catalog viewer.
//!
//! Browses a product catalog with client-side search, category filtering,
//! sorting and pagination. Edits (stock, duplicate, delete) stay in memory.
//!
//! Usage:
//!   catalog                          # built-in sample catalog, interactive
//!   catalog --data products.json     # catalog from a JSON file
//!   catalog --print --sort price     # print one page and exit
//!   catalog --print -c Furniture --page-size 5 --page 2

mod app;
mod event;
mod input;
mod print;
mod render;
mod state;
mod style;
mod widgets;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use catalog_core::models::{Product, product_fields as fields, sample_catalog};
use catalog_core::provider::{ProductStore, RecordProvider};
use catalog_core::table::{DEFAULT_PAGE_SIZE, SortDirection, TabularViewModel};
use catalog_core::view::products::build_products_view;
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

use app::App;
use state::AppState;

/// Interval of the store refresh check in the TUI.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Product catalog viewer.
#[derive(Parser)]
#[command(name = "catalog", about = "Product catalog viewer", version)]
struct Args {
    /// JSON file with an array of products. Default: built-in sample catalog.
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Rows per page.
    #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Initial page (1-based). Out-of-range values are clamped.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Case-insensitive search over name and description.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Only show products of this category.
    #[arg(short, long)]
    category: Option<String>,

    /// Sort by field: id, name, category, price or stock.
    #[arg(long, value_name = "FIELD")]
    sort: Option<String>,

    /// Sort descending (with --sort).
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Print the selected page as text and exit instead of starting the TUI.
    #[arg(long)]
    print: bool,

    /// Write logs to this file (the TUI does not log otherwise).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
///
/// Logs go to `log_file` when given, otherwise to stderr if `stderr` is set.
fn init_logging(
    verbose: u8,
    quiet: bool,
    log_file: Option<&Path>,
    stderr: bool,
) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for krate in ["catalog", "catalog_core"] {
        if let Ok(directive) = format!("{}={}", krate, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn load_store(path: Option<&Path>) -> Result<ProductStore, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ProductStore::from_json_file(path)?),
        None => Ok(ProductStore::new(sample_catalog())),
    }
}

/// Builds the table with the command-line sort/filter/page settings applied.
fn build_table(
    args: &Args,
    store: &ProductStore,
) -> Result<TabularViewModel<Product>, Box<dyn std::error::Error>> {
    let mut table = TabularViewModel::for_record();
    table.set_page_size(args.page_size)?;
    table.set_records(store.fetch()?);

    if let Some(field) = &args.sort {
        let sortable = table.schema().sortable_names();
        if !sortable.contains(&field.as_str()) {
            return Err(format!(
                "unknown sort field '{}' (expected one of: {})",
                field,
                sortable.join(", ")
            )
            .into());
        }
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        table.set_sort(Some(field.as_str()), Some(direction));
    }
    if let Some(query) = &args.search {
        table.set_text_filter(query);
    }
    if let Some(category) = &args.category {
        table.set_category_filter(fields::CATEGORY, Some(category.as_str()));
    }
    table.set_page_index(args.page.saturating_sub(1));
    Ok(table)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose, args.quiet, args.log_file.as_deref(), args.print)?;

    let store = load_store(args.data.as_deref())?;
    let table = build_table(&args, &store)?;
    debug!(
        records = table.records().len(),
        filtered = table.filtered_count(),
        "table ready"
    );

    if args.print {
        print!("{}", print::format_table(&build_products_view(&table)));
        return Ok(());
    }

    App::new(store, AppState::new(table)).run(TICK_RATE)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
