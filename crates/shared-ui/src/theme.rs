use dioxus::prelude::*;

/// Color mode for the whole application shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Key used for storage and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_str(value: &str) -> ThemeMode {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Provides the theme mode signal and stamps `data-theme` on a wrapper div.
#[component]
pub fn ThemeProvider(#[props(default)] default_mode: ThemeMode, children: Element) -> Element {
    let mode = use_signal(|| default_mode);
    use_context_provider(|| mode);

    rsx! {
        div {
            class: "theme-root",
            "data-theme": (mode)().as_str(),
            {children}
        }
    }
}

/// Hook to read and flip the current theme mode.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::from_str("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str("nonsense"), ThemeMode::Light);
    }
}
