use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub autoscroll: AutoScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// What happens when the scroll offset reaches the end of the scrollable range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryStrategy {
    /// Settle exactly at the end, then deactivate
    #[default]
    Stop,
    /// Snap back to the start and keep going
    Loop,
    /// Reverse direction at either end
    Bounce,
}

/// Auto-scroll controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Target scroll rate in units (pixels) per second
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Quiet period after user interaction before scrolling resumes
    #[serde(default = "default_resume_delay_ms")]
    pub resume_delay_ms: u64,
    /// End-of-document behavior
    #[serde(default)]
    pub boundary: BoundaryStrategy,
    /// Idle while the platform reports a reduced-motion preference
    #[serde(default = "default_true")]
    pub respect_reduced_motion: bool,
    /// Frame-rate cap (0 = uncapped)
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,
    /// Grace suspension applied when the page becomes visible again
    #[serde(default = "default_visibility_grace_ms")]
    pub visibility_grace_ms: u64,
    /// Distance from either end that already counts as "at the edge"
    #[serde(default = "default_edge_tolerance")]
    pub edge_tolerance: f64,
    /// Upper bound on the per-frame time step
    #[serde(default = "default_max_frame_delta_ms")]
    pub max_frame_delta_ms: u64,
    /// Start scrolling as soon as the host is ready
    #[serde(default = "default_true")]
    pub autostart: bool,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            resume_delay_ms: default_resume_delay_ms(),
            boundary: BoundaryStrategy::default(),
            respect_reduced_motion: default_true(),
            max_fps: default_max_fps(),
            visibility_grace_ms: default_visibility_grace_ms(),
            edge_tolerance: default_edge_tolerance(),
            max_frame_delta_ms: default_max_frame_delta_ms(),
            autostart: default_true(),
        }
    }
}

/// Which region of the terminal host is scrolled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// The whole screen above the status bar
    #[default]
    Page,
    /// A bordered panel under the document title
    Panel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Repaint rate of the terminal host
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Virtual pixels per terminal row
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    /// Scrolled region
    #[serde(default)]
    pub target: TargetKind,
    /// Initial reduced-motion preference (terminals have no OS query for it)
    #[serde(default)]
    pub reduced_motion: bool,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            row_height: default_row_height(),
            target: TargetKind::default(),
            reduced_motion: false,
            theme: default_theme_name(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("autoscroll")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_speed() -> f64 {
    120.0
}

fn default_resume_delay_ms() -> u64 {
    2000
}

fn default_max_fps() -> u32 {
    60
}

fn default_visibility_grace_ms() -> u64 {
    250
}

fn default_edge_tolerance() -> f64 {
    6.0 // wide enough for mobile address-bar jitter
}

fn default_max_frame_delta_ms() -> u64 {
    50
}

fn default_frame_rate() -> u32 {
    60
}

fn default_row_height() -> f64 {
    20.0
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/autoscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("autoscroll")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used by the terminal host
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("autoscroll.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.autoscroll, AutoScrollConfig::default());
        assert_eq!(config.autoscroll.speed, 120.0);
        assert_eq!(config.autoscroll.resume_delay_ms, 2000);
        assert_eq!(config.autoscroll.boundary, BoundaryStrategy::Stop);
        assert!(config.autoscroll.respect_reduced_motion);
        assert_eq!(config.autoscroll.max_fps, 60);
        assert_eq!(config.ui.target, TargetKind::Page);
    }

    #[test]
    fn test_partial_section() {
        let config = AppConfig::from_toml(
            r#"
            [autoscroll]
            speed = 360.0
            resume_delay_ms = 2500
            boundary = "bounce"

            [ui]
            target = "panel"
            "#,
        )
        .unwrap();
        assert_eq!(config.autoscroll.speed, 360.0);
        assert_eq!(config.autoscroll.resume_delay_ms, 2500);
        assert_eq!(config.autoscroll.boundary, BoundaryStrategy::Bounce);
        assert_eq!(config.autoscroll.max_fps, 60);
        assert_eq!(config.ui.target, TargetKind::Panel);
        assert_eq!(config.ui.theme, "gruvbox-dark");
    }

    #[test]
    fn test_unknown_strategy_is_config_error() {
        let err = AppConfig::from_toml("[autoscroll]\nboundary = \"spiral\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let mut config = AppConfig::default();
        config.autoscroll.boundary = BoundaryStrategy::Loop;
        let text = config.to_toml().unwrap();
        assert!(text.contains("[autoscroll]"));
        assert!(text.contains("boundary = \"loop\""));
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.autoscroll.boundary, BoundaryStrategy::Loop);
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = std::path::Path::new("/var/lib/autoscroll");
        assert_eq!(expand_tilde(path), PathBuf::from("/var/lib/autoscroll"));
    }
}
