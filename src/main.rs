//! nxt-watch - browse, react to, and save videos from the terminal

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use nxt_watch::core::catalog::CatalogClient;
use nxt_watch::core::fetcher::{FetchState, VideoDetailFetcher};
use nxt_watch::core::reactions::ReactionTracker;
use nxt_watch::error::NxtWatchError;
use nxt_watch::session::{CredentialHolder, SessionContext};
use nxt_watch::storage::config;
use nxt_watch::storage::session::SessionFile;
use nxt_watch::types::{Config, MenuItem, Tab};
use nxt_watch::ui::render;
use nxt_watch::ui::selector::Selector;
use nxt_watch::utils::paths::{ensure_app_dirs, session_path};

/// Browse, react to, and save videos from the terminal.
#[derive(Parser, Debug)]
#[command(name = "nxt-watch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Video id to open
    video_id: Option<String>,

    /// List saved videos
    #[arg(long)]
    saved: bool,

    /// Highlight a navigation tab (HOME, TRENDING, GAMING, PLAYLIST)
    #[arg(long)]
    tab: Option<Tab>,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Set the search term
    #[arg(long)]
    search: Option<String>,

    /// Bearer token (falls back to NXT_WATCH_TOKEN, then the config file)
    #[arg(long)]
    token: Option<String>,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Edit the configuration file
    #[arg(short, long)]
    edit: bool,
}

/// Actions offered under a video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Like,
    Dislike,
    Save,
    Retry,
    ToggleTheme,
    Quit,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the menu for the current fetch state
fn actions_for(state: &FetchState) -> Vec<MenuItem<Action>> {
    let item = |label: &str, value: Action| MenuItem {
        label: label.into(),
        value,
    };

    let mut actions = match state {
        FetchState::Ready(_) => vec![
            item("👍 Like", Action::Like),
            item("👎 Dislike", Action::Dislike),
            item("➕ Save", Action::Save),
        ],
        FetchState::Failed => vec![item("🔁 Retry", Action::Retry)],
        FetchState::Idle | FetchState::Loading => Vec::new(),
    };
    actions.push(item("🌓 Toggle theme", Action::ToggleTheme));
    actions.push(item("🚪 Quit", Action::Quit));
    actions
}

/// Show a spinner while a fetch is in flight
async fn with_spinner<F: Future<Output = FetchState>>(fetch: F) -> FetchState {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading video...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let state = fetch.await;
    spinner.finish_and_clear();
    state
}

fn print_saved(session: &SessionContext) {
    let prefs = session.preferences();
    println!("{}", render::format_tabs(&prefs));

    let saved = session.saved();
    if saved.is_empty() {
        println!("{}", "No saved videos found".yellow());
        return;
    }
    println!("{}", render::format_saved_header(saved.len(), &prefs));
    for video in &saved.list() {
        println!("{}", render::format_summary(video, &prefs));
    }
}

async fn watch_video(session: &SessionContext, cfg: &Config, id: &str) -> anyhow::Result<()> {
    let token = session.token().ok_or(NxtWatchError::MissingCredential)?;
    let client = CatalogClient::new(&cfg.api_base_url, config::request_timeout(cfg))?;
    let fetcher = VideoDetailFetcher::new(Arc::new(client));
    let mut reactions = ReactionTracker::new(session.clone());

    reactions.on_video_changed(id);
    let mut state = with_spinner(fetcher.on_id_changed(id, &token)).await;

    loop {
        let prefs = session.preferences();
        println!("{}", render::format_tabs(&prefs));
        match &state {
            FetchState::Ready(detail) => {
                println!("{}", render::format_detail(detail, reactions.state(), &prefs));
            }
            other => {
                if let Some(status) = render::format_status(other) {
                    println!("{}", status);
                }
            }
        }

        let selector = Selector::new(&prefs);
        let prompt = Selector::prompt(&prefs, "Select Action");
        let Some(action) = selector.select(&actions_for(&state), &prompt) else {
            break;
        };

        match action {
            Action::Like => {
                reactions.toggle_like();
            }
            Action::Dislike => {
                reactions.toggle_dislike();
            }
            Action::Save => {
                if let Some(detail) = state.detail() {
                    let summary = reactions.toggle_save(detail);
                    if reactions.state().saved {
                        println!("{} {}", "Saved:".green(), summary.title);
                    }
                }
            }
            Action::Retry => {
                state = with_spinner(fetcher.retry()).await;
            }
            Action::ToggleTheme => {
                session.toggle_theme();
            }
            Action::Quit => break,
        }
    }

    fetcher.unmount();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Ensure app directories exist
    ensure_app_dirs().await?;

    // Handle --edit flag
    if cli.edit {
        let cfg = config::load_config().await?;
        config::edit_config(&cfg.editor).await?;
        return Ok(());
    }

    let cfg = config::load_config().await?;

    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("NXT_WATCH_TOKEN").ok())
        .or_else(|| cfg.token.clone());
    let credential = CredentialHolder::new(token);

    let session_file = SessionFile::new(session_path());
    let session = if cfg.persist_session {
        session_file
            .restore(credential, cfg.initial_preferences())
            .await?
    } else {
        SessionContext::new(cfg.initial_preferences(), credential)
    };

    if cli.dark {
        session.set_theme(true);
    }
    if let Some(tab) = cli.tab {
        session.set_tab(tab);
    }
    if let Some(term) = &cli.search {
        session.set_search_term(term.as_str());
    }

    let outcome = if cli.saved {
        session.set_tab(Tab::Playlist);
        print_saved(&session);
        Ok(())
    } else if let Some(id) = &cli.video_id {
        watch_video(&session, &cfg, id).await
    } else {
        println!("{}", render::format_tabs(&session.preferences()));
        println!("{}", "Pass a video id to open it, or --saved to list saved videos.".dimmed());
        Ok(())
    };

    if cfg.persist_session {
        session_file.save(&session).await?;
    }

    outcome
}
