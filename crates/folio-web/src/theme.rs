//! Theme context for the web front-end.
//!
//! [`ThemeProvider`] loads the stored [`ThemeMode`], resolves it to an
//! [`AppliedTheme`], puts the matching `theme-*` class on `<html>` and
//! writes every change back to local storage.

use dioxus::prelude::*;
use folio_core::{AppliedTheme, ThemeMode, load_preference, save_preference};

use crate::browser;
use crate::site::use_site;
use crate::storage::LocalStorage;

/// Read/update access to the theme for descendant components.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// The visitor's choice.
    pub mode: Signal<ThemeMode>,
    /// The concrete theme currently on screen.
    pub applied: Memo<AppliedTheme>,
}

impl ThemeContext {
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
    }
}

/// Hook to access the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Provides [`ThemeContext`] to `children`.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let site = use_site();
    let theme_config = site.config.theme.clone();

    let storage_key = theme_config.storage_key.clone();
    let fallback = theme_config.default_mode;
    let mode = use_signal(move || {
        load_preference(&LocalStorage::new(), &storage_key, fallback).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read theme preference");
            fallback
        })
    });

    let daylight = theme_config.daylight;
    let applied = use_memo(move || mode().resolve(browser::local_hour(), &daylight));

    let storage_key = theme_config.storage_key.clone();
    use_effect(move || {
        let mode = mode();
        let applied = applied();
        browser::set_root_theme_class(applied.css_class(), AppliedTheme::all_css_classes());
        if let Err(e) = save_preference(&LocalStorage::new(), &storage_key, mode) {
            tracing::warn!(error = %e, "Could not persist theme preference");
        }
        tracing::info!(theme = %mode, applied = applied.css_class(), "Theme applied");
    });

    use_context_provider(|| ThemeContext { mode, applied });

    rsx! {
        {children}
    }
}

/// Theme switcher dropdown.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut theme = use_theme();
    let current = (theme.mode)();

    rsx! {
        div { class: "theme-controller",
            select {
                class: "theme-selector",
                "aria-label": "Select theme",
                value: current.as_str(),
                onchange: move |evt| {
                    match evt.value().parse::<ThemeMode>() {
                        Ok(mode) => theme.set(mode),
                        Err(e) => tracing::warn!(error = %e, "Ignoring theme selection"),
                    }
                },
                for mode in ThemeMode::all() {
                    option {
                        value: mode.as_str(),
                        selected: *mode == current,
                        "{mode.display_name()}"
                    }
                }
            }
        }
    }
}
