//! Interactive menu selector

use crate::types::{MenuItem, Preferences};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Select;

/// dialoguer-backed menu that follows the session theme
#[derive(Debug, Default)]
pub struct Selector {
    dark_theme: bool,
}

impl Selector {
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            dark_theme: prefs.dark_theme,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_theme
    }

    /// Prompt prefixed with the active tab, e.g. "Trending › Select Action"
    pub fn prompt(prefs: &Preferences, action: &str) -> String {
        format!("{} › {}", prefs.selected_tab.label(), action)
    }

    /// Select an item from the menu; `None` on escape or when there is nothing to pick
    pub fn select<T: Clone>(&self, items: &[MenuItem<T>], prompt: &str) -> Option<T> {
        if items.is_empty() {
            return None;
        }

        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.dark_theme {
            &colorful
        } else {
            &SimpleTheme
        };

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

        let selection = Select::with_theme(theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()?;

        items.get(selection).map(|item| item.value.clone())
    }
}
