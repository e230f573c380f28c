//! # interview-deck CLI Entry Point
//!
//! ## Overview
//!
//! interview-deck shows a catalog of interview reports (company, role,
//! experience, date, and the questions asked) and filters it by free-text
//! search, company, and role. It runs as an interactive terminal page, or
//! non-interactively to export the filtered view as an HTML page or print it
//! as plain text.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive terminal page over the built-in catalog
//! interview-deck
//!
//! # Attach supplementary report files from a directory or web server
//! interview-deck --base ./interviews
//! interview-deck --base https://example.com/interviews
//!
//! # Export the view for one company as HTML
//! interview-deck --company EXL --export exl.html
//!
//! # Print everything mentioning airflow and exit
//! interview-deck --search airflow --list
//! ```
//!
//! ## Key Bindings
//!
//! - Type in the search box, `Enter` to search
//! - `Tab` / `Shift+Tab` - Move between search, company, role, and results
//! - `←` / `→` (`h` / `l`) - Change the company or role selection
//! - `↑` / `↓` (`j` / `k`) - Move between cards
//! - `r` - Show the selected card's source text
//! - `Ctrl+L` (or `c` outside the search box) - Clear all filters
//! - `Ctrl+T` - Cycle color theme
//! - `Esc` / `Ctrl+C` (or `q` outside the search box) - Quit

use interview_deck::catalog::{
    spawn_enrichment, Catalog, EnrichSource, Enrichment, EnrichmentTasks, Query,
};
use interview_deck::html;
use interview_deck::logging;
use interview_deck::ui::{self, config::Config, App, KeyOutcome};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// interview-deck - browse and filter interview questions
#[derive(Parser, Debug)]
#[command(name = "interview-deck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and filter interview-question reports", long_about = None)]
struct Args {
    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory or http(s) URL that record source files are fetched from
    #[arg(short, long, value_name = "DIR|URL")]
    base: Option<String>,

    /// Initial search text
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Initial company filter (exact match)
    #[arg(long, value_name = "NAME")]
    company: Option<String>,

    /// Initial role filter (exact match)
    #[arg(long, value_name = "NAME")]
    role: Option<String>,

    /// Write the filtered view as an HTML page and exit
    #[arg(short, long, value_name = "FILE", conflicts_with = "list")]
    export: Option<PathBuf>,

    /// Print the filtered view as text and exit
    #[arg(short, long)]
    list: bool,
}

impl Args {
    fn initial_query(&self) -> Query {
        Query::new(
            self.search.clone().unwrap_or_default(),
            self.company.clone().unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let mut config = Config::load();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin().context("Failed to load built-in catalog")?,
    };
    tracing::info!(records = catalog.len(), "catalog loaded");

    let source = match args.base.as_deref() {
        Some(base) => Some(EnrichSource::parse(base)?),
        None => config.enrichment_source()?,
    };

    let mut app = App::new(catalog, config.theme().clone());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let tasks = match &source {
        Some(source) => {
            tracing::info!(?source, "fetching record sources");
            spawn_enrichment(&app.catalog, source, &tx)
        }
        None => EnrichmentTasks::default(),
    };
    drop(tx);

    app.set_query(&args.initial_query());

    if args.export.is_some() || args.list {
        tasks.settle().await;
        drain_enrichments(&mut app, &mut rx);

        if let Some(path) = &args.export {
            export_page(&app, path)?;
            println!(
                "Wrote {} interviews to {}",
                app.visible_count(),
                path.display()
            );
        } else {
            print!("{}", format_list(&app));
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &mut rx,
        &mut config,
    )
    .await;

    // Outstanding fetches are cancelled here
    drop(tasks);

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Merge every enrichment that has arrived so far. Never waits.
fn drain_enrichments(app: &mut App, rx: &mut UnboundedReceiver<Enrichment>) -> usize {
    let mut merged = 0;
    while let Ok(enrichment) = rx.try_recv() {
        if app.apply_enrichment(enrichment) {
            merged += 1;
        }
    }
    merged
}

fn export_page(app: &App, path: &Path) -> Result<()> {
    let page = html::render_page(&app.visible_records(), &app.options, &app.query);
    fs::write(path, page)
        .with_context(|| format!("Failed to write HTML page: {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported html page");
    Ok(())
}

fn format_list(app: &App) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for record in app.visible_records() {
        let _ = writeln!(
            out,
            "{} | {} | {} experience | {}",
            record.company, record.role, record.experience, record.date
        );
        if let Some(notes) = record.notes() {
            let _ = writeln!(out, "  Notes: {notes}");
        }
        for (index, entry) in record.questions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, entry.question);
            if let Some(approach) = entry.approach.as_deref().filter(|a| !a.is_empty()) {
                let _ = writeln!(out, "     Approach: {approach}");
            }
        }
        out.push('\n');
    }
    let stats = app.stats();
    let _ = writeln!(
        out,
        "Total: {} interviews, {} companies",
        stats.total, stats.companies
    );
    out
}

/// Apply one terminal event to the app.
fn handle_event(app: &mut App, event: &Event) -> KeyOutcome {
    match event {
        Event::Key(key) => ui::handle_key(app, *key),
        _ => KeyOutcome::Ignored,
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    enrichments: &mut UnboundedReceiver<Enrichment>,
    config: &mut Config,
) -> Result<()> {
    loop {
        drain_enrichments(app, enrichments);

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Short timeout so arriving enrichments show up without input
        let Some(event) = event_reader.read_event(Duration::from_millis(100))? else {
            continue;
        };

        if handle_event(app, &event) == KeyOutcome::ThemeChanged {
            config.theme = app.theme.name.to_string();
            if let Err(e) = config.save() {
                tracing::warn!("Failed to save theme selection: {e:#}");
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
