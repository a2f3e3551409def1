use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Directory holding projects.json / company_work.json / profile.json.
    /// Bundled content is used when unset.
    pub content_dir: Option<PathBuf>,
    /// Base that every media path is appended to. Anything other than an
    /// http(s) URL is read as a local directory.
    pub asset_base_url: String,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub lottie: LottieConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
}

/// Scroll-spy tuning
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NavigationConfig {
    /// Activation band starts this far down the viewport (percent)
    pub band_top_percent: u16,
    /// Activation band ends this far above the viewport bottom (percent)
    pub band_bottom_percent: u16,
    /// How long observer updates are ignored after a jump
    pub suppression_ms: u64,
    /// Duration of a smooth programmatic scroll; must stay below suppression_ms
    pub scroll_animation_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LottieConfig {
    /// Playback speed relative to the animation's own frame rate
    pub speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            content_dir: None,
            asset_base_url: "https://assets.example.com".to_string(),
            theme: ThemeConfig::default(),
            navigation: NavigationConfig::default(),
            lottie: LottieConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: ThemeMode::Light,
            selection_fg: Color::Rgb(59, 130, 246), // Blue
            unfocused_selection_fg: None,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            band_top_percent: 20,
            band_bottom_percent: 70,
            suppression_ms: 800,
            scroll_animation_ms: 600,
        }
    }
}

impl Default for LottieConfig {
    fn default() -> Self {
        LottieConfig { speed: 0.8 }
    }
}

impl NavigationConfig {
    pub fn suppression_window(&self) -> Duration {
        Duration::from_millis(self.suppression_ms)
    }

    /// Scroll animation length, clamped below the suppression window so the
    /// observer never resumes mid-scroll
    pub fn scroll_animation(&self) -> Duration {
        let max = self.suppression_ms.saturating_sub(1);
        Duration::from_millis(self.scroll_animation_ms.min(max))
    }
}

impl LottieConfig {
    /// Speed clamped to a sane playback range
    pub fn effective_speed(&self) -> f64 {
        if self.speed.is_finite() && self.speed > 0.0 {
            self.speed.min(4.0)
        } else {
            LottieConfig::default().speed
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg
            .unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

/// Resolved colors handed to every widget at render time
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub mode: ThemeMode,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub border_fg: Color,
    pub before_fg: Color,
    pub after_fg: Color,
}

impl DisplayConfig {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self::with_mode(theme, theme.mode)
    }

    pub fn with_mode(theme: &ThemeConfig, mode: ThemeMode) -> Self {
        let (text_fg, muted_fg, border_fg) = match mode {
            ThemeMode::Light => (Color::Black, Color::DarkGray, Color::Gray),
            ThemeMode::Dark => (Color::White, Color::Gray, Color::DarkGray),
        };
        DisplayConfig {
            mode,
            selection_fg: theme.selection_fg,
            unfocused_selection_fg: theme.unfocused_selection_fg(),
            text_fg,
            muted_fg,
            border_fg,
            before_fg: Color::Rgb(244, 63, 94), // Rose
            after_fg: Color::Rgb(96, 165, 250), // Light blue
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::default())
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        "rose" => return Some(Color::Rgb(244, 63, 94)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("ROSE"), Some(Color::Rgb(244, 63, 94)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#3B82F6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_navigation_defaults() {
        let nav = NavigationConfig::default();
        assert_eq!(nav.band_top_percent, 20);
        assert_eq!(nav.band_bottom_percent, 70);
        assert_eq!(nav.suppression_window(), Duration::from_millis(800));
        assert!(nav.scroll_animation() < nav.suppression_window());
    }

    #[test]
    fn test_scroll_animation_clamped_below_suppression() {
        let nav = NavigationConfig {
            suppression_ms: 300,
            scroll_animation_ms: 1000,
            ..NavigationConfig::default()
        };
        assert_eq!(nav.scroll_animation(), Duration::from_millis(299));
    }

    #[test]
    fn test_lottie_speed_fallback() {
        assert_eq!(LottieConfig { speed: 0.6 }.effective_speed(), 0.6);
        assert_eq!(LottieConfig { speed: -1.0 }.effective_speed(), 0.8);
        assert_eq!(LottieConfig { speed: f64::NAN }.effective_speed(), 0.8);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
asset_base_url = "/srv/assets"
content_dir = "/srv/content"

[theme]
mode = "dark"
selection_fg = "#00FFFF"

[navigation]
band_top_percent = 25
suppression_ms = 1000

[lottie]
speed = 0.6
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.asset_base_url, "/srv/assets");
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.theme.selection_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.navigation.band_top_percent, 25);
        assert_eq!(config.navigation.band_bottom_percent, 70);
        assert_eq!(config.navigation.suppression_ms, 1000);
        assert_eq!(config.lottie.speed, 0.6);
    }

    #[test]
    fn test_display_config_follows_mode() {
        let theme = ThemeConfig::default();
        let light = DisplayConfig::with_mode(&theme, ThemeMode::Light);
        let dark = DisplayConfig::with_mode(&theme, ThemeMode::Dark);
        assert_eq!(light.text_fg, Color::Black);
        assert_eq!(dark.text_fg, Color::White);
        assert_eq!(dark.unfocused_selection_fg, Color::Rgb(29, 65, 123));
    }
}
