//! Protein Browser GUI Application
//!
//! Interactive browser for a server-paginated protein dataset, built on the
//! egui framework. The browser features:
//! - Free-text search over the remote dataset
//! - Single-column sorting with a three-phase direction cycle
//! - Infinite-scroll pagination driven by a continuation cursor
//! - A virtualized results table that stays responsive at tens of
//!   thousands of rows

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core policy (row windowing, continuation trigger)
//! - `io/` - Background page fetching
//! - `state/` - Focused state components (query, results, scroll, layout)
//! - `ui/` - Panel rendering and interaction
//! - `utils/` - Formatting helpers

use eframe::egui;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::sync::Arc;

mod app;
mod domain;
mod io;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SessionProvider, SettingsCoordinator};
use io::PageLoader;
use protview::sample::SAMPLE_BASE_URL;
use protview::{PageSource, RestClient, SampleSource, DEFAULT_BASE_URL};
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const COLUMN_WIDTHS_KEY: &str = "column_widths";

struct CliOptions {
    sample: bool,
    base_url: String,
    verbose: bool,
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        sample: false,
        base_url: DEFAULT_BASE_URL.to_string(),
        verbose: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => options.sample = true,
            "--base-url" => {
                if let Some(url) = args.next() {
                    options.base_url = url;
                } else {
                    eprintln!("--base-url requires a value");
                    std::process::exit(2);
                }
            }
            "--verbose" => options.verbose = true,
            "-h" | "-help" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => eprintln!("Warning: unknown argument: {}", other),
        }
    }
    options
}

fn print_usage() {
    println!("Protein Browser");
    println!("Usage: protview-gui [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --sample            Browse a generated offline sample dataset");
    println!("  --base-url <URL>    Base endpoint (default: {})", DEFAULT_BASE_URL);
    println!("  --verbose           Debug-level logging");
    println!("  -h, -help, --help   Show this help message");
}

/// Main application entry point that initializes and launches the browser.
fn main() -> eframe::Result {
    let cli = parse_args();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);

    let (source, base_url): (Arc<dyn PageSource>, String) = if cli.sample {
        (Arc::new(SampleSource::default()), SAMPLE_BASE_URL.to_string())
    } else {
        match RestClient::new() {
            Ok(client) => (Arc::new(client), cli.base_url),
            Err(error) => {
                eprintln!("protview: {error:#}");
                std::process::exit(1);
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Protein Browser"),
        ..Default::default()
    };

    eframe::run_native(
        "Protein Browser",
        options,
        Box::new(move |cc| Ok(Box::new(ProtviewApp::new(cc, source, base_url)))),
    )
}

/// The main browser application.
///
/// Kept deliberately thin: `ApplicationCoordinator` owns the fetch and
/// state-transition workflows, `PanelManager` owns layout and rendering;
/// this struct just wires them together each frame.
struct ProtviewApp {
    /// Centralized application state
    state: AppState,
    /// Background page loader
    loader: PageLoader,
    /// Shared page backend (HTTP or sample)
    source: Arc<dyn PageSource>,
}

impl ProtviewApp {
    /// Creates the application with column widths restored from persistent
    /// storage.
    fn new(cc: &eframe::CreationContext, source: Arc<dyn PageSource>, base_url: String) -> Self {
        let defaults = LayoutState::new();
        let column_widths = SettingsCoordinator::load_setting_or(
            cc.storage,
            COLUMN_WIDTHS_KEY,
            *defaults.column_widths(),
        );

        Self {
            state: AppState::with_layout(&base_url, LayoutState::with_column_widths(column_widths)),
            loader: PageLoader::new(),
            source,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::SearchSubmitted(text) => {
                ApplicationCoordinator::submit_search(
                    &mut self.state,
                    &mut self.loader,
                    &self.source,
                    ctx,
                    &text,
                );
            }
            PanelInteraction::SortColumnClicked(column) => {
                ApplicationCoordinator::click_sort(
                    &mut self.state,
                    &mut self.loader,
                    &self.source,
                    ctx,
                    column,
                );
            }
            PanelInteraction::SignOutRequested => {
                self.state.auth.sign_out();
            }
        }
    }
}

impl eframe::App for ProtviewApp {
    /// Called when the app is being shut down - persists the table layout.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, COLUMN_WIDTHS_KEY, self.state.layout.column_widths());
    }

    /// Main update loop:
    /// 1. Apply a completed fetch, if any (staleness guard included)
    /// 2. Render all panels
    /// 3. Handle the frame's interaction (search / sort / sign-out)
    /// 4. Let the scroll position request a continuation fetch
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_fetch_completion(&mut self.state, &mut self.loader);

        let frame_output =
            PanelManager::render_all_panels(ctx, &mut self.state, self.loader.is_loading());

        if let Some(interaction) = frame_output.interaction {
            self.handle_panel_interaction(interaction, ctx);
        }

        if let Some(geometry) = frame_output.scroll_geometry {
            ApplicationCoordinator::handle_scroll(
                &mut self.state,
                &mut self.loader,
                &self.source,
                ctx,
                geometry,
            );
        }
    }
}
