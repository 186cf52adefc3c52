//! Text rendering for the terminal front end

use crate::core::fetcher::FetchState;
use crate::core::reactions::ReactionState;
use crate::types::{Preferences, Tab, VideoDetail, VideoSummary};
use colored::{ColoredString, Colorize};

/// Highlighted when active, dimmed otherwise
fn toggle_label(text: &str, active: bool) -> ColoredString {
    if active {
        text.blue().bold()
    } else {
        text.dimmed()
    }
}

fn muted(text: &str, prefs: &Preferences) -> ColoredString {
    if prefs.dark_theme {
        text.white()
    } else {
        text.dimmed()
    }
}

/// Navigation bar with the selected tab highlighted
pub fn format_tabs(prefs: &Preferences) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == prefs.selected_tab {
                tab.label().red().bold().to_string()
            } else {
                muted(tab.label(), prefs).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Heading for the saved videos page
pub fn format_saved_header(count: usize, prefs: &Preferences) -> String {
    format!(
        "{} {}",
        Tab::Playlist.label().bold(),
        muted(&format!("({})", count), prefs)
    )
}

/// One line per saved video
pub fn format_summary(video: &VideoSummary, prefs: &Preferences) -> String {
    format!(
        "{} {}",
        video.title.bold(),
        muted(
            &format!(
                "- {} · {} views · {} ago",
                video.channel_name, video.view_count, video.published_ago
            ),
            prefs
        )
    )
}

/// Full detail block including the reaction bar
pub fn format_detail(
    detail: &VideoDetail,
    reactions: ReactionState,
    prefs: &Preferences,
) -> String {
    let save_text = if reactions.saved { "Saved" } else { "Save" };

    [
        detail.title.bold().to_string(),
        muted(&detail.video_url, prefs).to_string(),
        muted(
            &format!("{} views · {} ago", detail.view_count, detail.published_ago),
            prefs,
        )
        .to_string(),
        format!(
            "{}  {}  {}",
            toggle_label("Like", reactions.liked),
            toggle_label("Dislike", reactions.disliked),
            toggle_label(save_text, reactions.saved)
        ),
        String::new(),
        format!(
            "{} {}",
            detail.channel_name.cyan(),
            muted(&format!("{} subscribers", detail.subscriber_count), prefs)
        ),
        detail.description.clone(),
    ]
    .join("\n")
}

/// Placeholder text for states without a detail record
pub fn format_status(state: &FetchState) -> Option<String> {
    match state {
        FetchState::Idle => None,
        FetchState::Loading => Some("Loading...".dimmed().to_string()),
        FetchState::Ready(_) => None,
        FetchState::Failed => Some(format!(
            "{}\n{}",
            "Oops! Something Went Wrong".red().bold(),
            "We are having some trouble to complete your request. Please try again."
        )),
    }
}
