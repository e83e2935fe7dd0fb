/// Named set of colors applied to every surface of the page.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub page_bg: &'static str,
    pub surface_bg: &'static str,
    pub muted_surface_bg: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub header_bg: &'static str,
    pub footer_bg: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        name: "light",
        page_bg: "#ffffff",
        surface_bg: "#ffffff",
        muted_surface_bg: "#f9fafb",
        text: "#111827",
        muted_text: "#4b5563",
        accent: "#0d9488",
        accent_hover: "#0f766e",
        header_bg: "#ffffff",
        footer_bg: "#111827",
        border: "#e5e7eb",
    };

    pub const DARK: Palette = Palette {
        name: "dark",
        page_bg: "#0f172a",
        surface_bg: "#1e293b",
        muted_surface_bg: "#111827",
        text: "#f9fafb",
        muted_text: "#9ca3af",
        accent: "#14b8a6",
        accent_hover: "#2dd4bf",
        header_bg: "#111827",
        footer_bg: "#020617",
        border: "#334155",
    };

    /// Inline `style` value exposing the palette as CSS custom properties.
    pub fn css_variables(&self) -> String {
        [
            ("--page-bg", self.page_bg),
            ("--surface-bg", self.surface_bg),
            ("--muted-surface-bg", self.muted_surface_bg),
            ("--text", self.text),
            ("--muted-text", self.muted_text),
            ("--accent", self.accent),
            ("--accent-hover", self.accent_hover),
            ("--header-bg", self.header_bg),
            ("--footer-bg", self.footer_bg),
            ("--border", self.border),
        ]
        .iter()
        .map(|(var, value)| format!("{}: {};", var, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Light/dark selection for the current page load. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub is_dark: bool,
}

impl ThemePreference {
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn palette(&self) -> &'static Palette {
        if self.is_dark {
            &Palette::DARK
        } else {
            &Palette::LIGHT
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.is_dark {
            "theme-dark"
        } else {
            "theme-light"
        }
    }

    /// Label for the header button, naming the palette it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark {
            "☀️ Light"
        } else {
            "🌙 Dark"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        let theme = ThemePreference::default();
        assert!(!theme.is_dark);
        assert_eq!(theme.palette(), &Palette::LIGHT);
        assert_eq!(theme.class_name(), "theme-light");
    }

    #[test]
    fn single_toggle_inverts() {
        let mut theme = ThemePreference::default();
        theme.toggle();
        assert!(theme.is_dark);
        assert_eq!(theme.palette().name, "dark");
        theme.toggle();
        assert!(!theme.is_dark);
        assert_eq!(theme.palette().name, "light");
    }

    #[test]
    fn even_toggles_return_to_start() {
        for start in [false, true] {
            let original = ThemePreference { is_dark: start };
            let mut theme = original;
            for i in 1..=10 {
                let before = theme;
                theme = theme.toggled();
                assert_ne!(theme.is_dark, before.is_dark);
                if i % 2 == 0 {
                    assert_eq!(theme, original);
                }
            }
        }
    }

    #[test]
    fn css_variables_cover_the_palette() {
        let vars = Palette::DARK.css_variables();
        assert!(vars.starts_with("--page-bg: #0f172a;"));
        assert!(vars.contains("--accent: #14b8a6;"));
        assert!(vars.ends_with("--border: #334155;"));
        assert_eq!(vars.matches(';').count(), 10);
        assert_ne!(Palette::LIGHT.css_variables(), vars);
    }
}
