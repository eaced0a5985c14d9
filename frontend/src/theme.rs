use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

pub const STORAGE_KEY: &str = "theme";

/// Colour scheme chosen by the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// The studio's first palette, kept as an easter egg.
    Legacy,
    /// Follow the operating system's `prefers-color-scheme`.
    System,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Legacy, Theme::System];

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Legacy => "old",
            Theme::System => "system",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "old" => Some(Theme::Legacy),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Legacy => "Old",
            Theme::System => "System",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::Legacy => "🎨",
            Theme::System => "🖥",
        }
    }

    /// The concrete theme to paint. Never returns `System`.
    pub fn effective(self, prefers_dark: bool) -> Theme {
        match self {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            other => other,
        }
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(true)
}

pub fn load_theme() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::from_storage_value(&value))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(STORAGE_KEY, theme.storage_value()).is_err() {
            warn!("could not persist theme {}", theme.storage_value());
        }
    }
}

/// Paints `theme` onto the document root and remembers the choice.
pub fn apply_theme(theme: Theme) {
    let painted = theme.effective(prefers_dark());
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", painted.storage_value());
    }
    save_theme(theme);
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_state(load_theme);
    let is_open = use_state(|| false);

    use_effect_with_deps(
        move |theme| {
            apply_theme(**theme);
            || ()
        },
        theme.clone(),
    );

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class={classes!("theme-toggle", props.class.clone())}>
            <button class="theme-toggle-button" onclick={toggle} aria-label="Change theme">
                <span class="theme-glyph">{theme.glyph()}</span>
                <span class="theme-toggle-text">{theme.storage_value()}</span>
            </button>
            if *is_open {
                <div class="theme-toggle-dropdown">
                    { for Theme::ALL.iter().map(|&option| {
                        let onclick = {
                            let theme = theme.clone();
                            let is_open = is_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                info!("Switching theme to {}", option.storage_value());
                                theme.set(option);
                                is_open.set(false);
                            })
                        };
                        html! {
                            <button
                                key={option.storage_value()}
                                class={classes!("theme-option", (*theme == option).then_some("active"))}
                                {onclick}
                            >
                                <span>{option.glyph()}</span>
                                <span>{option.label()}</span>
                            </button>
                        }
                    }) }
                </div>
            }
            <style>
                {r#"
                .theme-toggle {
                    position: relative;
                }
                .theme-toggle-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.4rem 0.8rem;
                    border-radius: 999px;
                    border: 1px solid var(--glass-border);
                    background: var(--glass-bg);
                    color: var(--text-primary);
                    cursor: pointer;
                    text-transform: capitalize;
                }
                .theme-toggle-dropdown {
                    position: absolute;
                    right: 0;
                    top: calc(100% + 0.5rem);
                    display: flex;
                    flex-direction: column;
                    min-width: 140px;
                    padding: 0.4rem;
                    border-radius: 12px;
                    background: var(--bg-elevated);
                    border: 1px solid var(--glass-border);
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.35);
                    z-index: 20;
                }
                .theme-option {
                    display: flex;
                    gap: 0.6rem;
                    padding: 0.5rem 0.7rem;
                    border: none;
                    border-radius: 8px;
                    background: transparent;
                    color: var(--text-secondary);
                    cursor: pointer;
                    text-align: left;
                }
                .theme-option:hover,
                .theme-option.active {
                    background: var(--glass-bg);
                    color: var(--text-primary);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_values_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_storage_value(theme.storage_value()), Some(theme));
        }
        assert_eq!(Theme::Legacy.storage_value(), "old");
        assert_eq!(Theme::from_storage_value("sepia"), None);
        assert_eq!(Theme::from_storage_value(""), None);
    }

    #[test]
    fn system_resolves_from_os_preference() {
        assert_eq!(Theme::System.effective(true), Theme::Dark);
        assert_eq!(Theme::System.effective(false), Theme::Light);
        assert_eq!(Theme::Legacy.effective(false), Theme::Legacy);
        assert_eq!(Theme::Light.effective(true), Theme::Light);
    }

    #[test]
    fn dark_is_the_default() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
