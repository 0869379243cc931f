use ratatui::style::Color;
use tracing::warn;

/// Runtime theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

impl Theme {
    /// Look up a built-in theme, falling back to gruvbox-dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox-dark" => Self::gruvbox_dark(),
            "gruvbox-light" => Self::gruvbox_light(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            other => {
                warn!("unknown theme '{}', using gruvbox-dark", other);
                Self::default()
            }
        }
    }

    fn gruvbox_dark() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }

    fn gruvbox_light() -> Self {
        Self {
            bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
            bg1: Color::Rgb(0xf2, 0xe5, 0xbc),
            bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
            fg0: Color::Rgb(0x65, 0x47, 0x35),
            fg1: Color::Rgb(0x4f, 0x38, 0x29),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x4c, 0x7a, 0x5d),
            success: Color::Rgb(0x6c, 0x78, 0x2e),
            warning: Color::Rgb(0xc3, 0x5e, 0x0a),
        }
    }

    fn nord() -> Self {
        Self {
            bg0: Color::Rgb(0x2e, 0x34, 0x40), // nord0
            bg1: Color::Rgb(0x3b, 0x42, 0x52), // nord1
            bg2: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
            fg0: Color::Rgb(0xec, 0xef, 0xf4), // nord6
            fg1: Color::Rgb(0xe5, 0xe9, 0xf0), // nord5
            grey: Color::Rgb(0x5e, 0x68, 0x7a),
            accent: Color::Rgb(0x8f, 0xbc, 0xbb),  // nord7
            success: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
            warning: Color::Rgb(0xd0, 0x87, 0x70), // nord12
        }
    }

    fn dracula() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x2a, 0x36),
            bg1: Color::Rgb(0x21, 0x22, 0x2c),
            bg2: Color::Rgb(0x44, 0x47, 0x5a),
            fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
            fg1: Color::Rgb(0xe9, 0xe9, 0xea),
            grey: Color::Rgb(0x62, 0x72, 0xa4),
            accent: Color::Rgb(0xbd, 0x93, 0xf9),
            success: Color::Rgb(0x50, 0xfa, 0x7b),
            warning: Color::Rgb(0xff, 0xb8, 0x6c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Theme::from_name("NORD").bg0, Theme::nord().bg0);
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(Theme::from_name("neon-pink").bg0, Theme::gruvbox_dark().bg0);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        for name in ["gruvbox-dark", "gruvbox-light", "nord", "dracula"] {
            let theme = Theme::from_name(name);
            assert_ne!(theme.success, theme.warning, "{}", name);
            assert_ne!(theme.accent, theme.grey, "{}", name);
        }
    }
}
