use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the settings document, kept next to the executable.
pub const CONFIG_FILE: &str = "config.json";
/// Diagnostic file written when the background image cannot be used.
pub const SIDECAR_FILE: &str = "bg_load_error.txt";
/// Fallback used when a color field is emptied in the editor.
pub const FALLBACK_COLOR: &str = "#1a1a1a";

/// The persisted appearance settings. Any field missing from the document
/// loads with its default value; unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_message_text")]
    pub message_text: String,
    /// Solid background, used when no image is configured or it fails to load.
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Empty string means no background image.
    #[serde(default)]
    pub background_image_path: String,
    #[serde(default = "default_message_color")]
    pub message_color: String,
    /// Alternate color the message toggles to while blinking.
    #[serde(default = "default_message_color_alt")]
    pub message_color_alt: String,
    #[serde(default = "default_time_color")]
    pub time_color: String,
    #[serde(default = "default_message_font_size")]
    pub message_font_size: u32,
    #[serde(default = "default_time_font_size")]
    pub time_font_size: u32,
    #[serde(default = "default_message_blink_enabled")]
    pub message_blink_enabled: bool,
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
}

fn default_message_text() -> String {
    "请勿长时间离开座位".into()
}

fn default_background_color() -> String {
    "#1a1a1a".into()
}

fn default_message_color() -> String {
    "#f9f9f9".into()
}

fn default_message_color_alt() -> String {
    "#d9d9d9".into()
}

fn default_time_color() -> String {
    "#ffd700".into()
}

fn default_message_font_size() -> u32 {
    60
}

fn default_time_font_size() -> u32 {
    40
}

fn default_message_blink_enabled() -> bool {
    true
}

fn default_blink_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_text: default_message_text(),
            background_color: default_background_color(),
            background_image_path: String::new(),
            message_color: default_message_color(),
            message_color_alt: default_message_color_alt(),
            time_color: default_time_color(),
            message_font_size: default_message_font_size(),
            time_font_size: default_time_font_size(),
            message_blink_enabled: default_message_blink_enabled(),
            blink_interval_ms: default_blink_interval_ms(),
        }
    }
}

impl Config {
    /// Load settings from `path`. A missing, unreadable or malformed document
    /// yields the defaults; no error is surfaced to the user.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("settings not read from {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("malformed settings in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write the full record to `path`, replacing any prior content.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Directory the settings document lives in: next to the executable, or the
/// current directory when the executable path cannot be resolved.
pub fn config_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

pub fn sidecar_path(dir: &Path) -> PathBuf {
    dir.join(SIDECAR_FILE)
}

/// Parse a `#RRGGBB` color. The leading `#` is optional.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

pub fn format_hex_color((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
