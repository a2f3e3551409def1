//! Lazily loaded, visibility-gated lottie playback
//!
//! A player starts as a placeholder. The first time its frame becomes
//! visible it either parses an inline animation or asks for exactly one
//! fetch of the referenced payload. Once ready it loops while visible and
//! holds its frame while off screen. A failed load leaves the placeholder in
//! place for the rest of the mount.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::frame::boxed;
use crate::config::DisplayConfig;
use crate::content::LottieSource;
use crate::error::AssetError;

/// Rows a lottie frame takes when no height hint is given
pub const DEFAULT_LOTTIE_ROWS: u16 = 8;

/// Map a height hint such as `h-64` to a row count
pub fn rows_for_height(hint: Option<&str>) -> u16 {
    hint.and_then(|h| h.strip_prefix("h-"))
        .and_then(|n| n.parse::<u16>().ok())
        .map(|n| (n / 8).clamp(4, 16))
        .unwrap_or(DEFAULT_LOTTIE_ROWS)
}

/// The parts of a Bodymovin document the viewer plays back
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: Option<String>,
    pub frame_rate: f64,
    pub in_point: f64,
    pub out_point: f64,
    pub width: u64,
    pub height: u64,
    pub layers: usize,
}

impl Animation {
    pub fn from_json(value: &Value) -> Result<Self, AssetError> {
        let number = |key: &str| value.get(key).and_then(Value::as_f64);

        let frame_rate = number("fr")
            .filter(|fr| *fr > 0.0)
            .ok_or_else(|| AssetError::InvalidAnimation("missing or zero frame rate".into()))?;
        let in_point = number("ip").unwrap_or(0.0);
        let out_point = number("op")
            .filter(|op| *op > in_point)
            .ok_or_else(|| AssetError::InvalidAnimation("out point not after in point".into()))?;

        Ok(Animation {
            name: value.get("nm").and_then(Value::as_str).map(str::to_string),
            frame_rate,
            in_point,
            out_point,
            width: value.get("w").and_then(Value::as_u64).unwrap_or(0),
            height: value.get("h").and_then(Value::as_u64).unwrap_or(0),
            layers: value
                .get("layers")
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0),
        })
    }

    pub fn total_frames(&self) -> f64 {
        self.out_point - self.in_point
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LottieStatus {
    Placeholder,
    Fetching,
    Ready(Animation),
    Failed,
}

#[derive(Debug, Clone)]
pub struct LottiePlayer {
    source: Option<LottieSource>,
    status: LottieStatus,
    visible: bool,
    frame: f64,
    speed: f64,
    fetches: u32,
}

impl LottiePlayer {
    pub fn new(source: Option<LottieSource>, speed: f64) -> Self {
        Self {
            source,
            status: LottieStatus::Placeholder,
            visible: false,
            frame: 0.0,
            speed,
            fetches: 0,
        }
    }

    pub fn status(&self) -> &LottieStatus {
        &self.status
    }

    pub fn is_playing(&self) -> bool {
        self.visible && matches!(self.status, LottieStatus::Ready(_))
    }

    /// Number of fetches this player has requested
    pub fn fetches(&self) -> u32 {
        self.fetches
    }

    pub fn frame(&self) -> f64 {
        self.frame
    }

    /// Track viewport entry and exit; returns a path to fetch when the
    /// payload is needed for the first time
    pub fn set_visible(&mut self, visible: bool) -> Option<String> {
        self.visible = visible;
        if !visible || self.status != LottieStatus::Placeholder {
            return None;
        }

        match &self.source {
            Some(LottieSource::Inline(value)) => {
                match Animation::from_json(value) {
                    Ok(animation) => {
                        self.frame = animation.in_point;
                        self.status = LottieStatus::Ready(animation);
                    }
                    Err(e) => {
                        warn!("LOTTIE: inline animation unusable: {}", e);
                        self.status = LottieStatus::Failed;
                    }
                }
                None
            }
            Some(LottieSource::Url(path)) if !path.is_empty() => {
                self.status = LottieStatus::Fetching;
                self.fetches += 1;
                debug!("LOTTIE: requesting {}", path);
                Some(path.clone())
            }
            _ => None,
        }
    }

    /// Apply the result of the single fetch
    pub fn on_loaded(&mut self, result: Result<Value, String>) {
        if self.status != LottieStatus::Fetching {
            return;
        }
        match result.and_then(|v| Animation::from_json(&v).map_err(|e| e.to_string())) {
            Ok(animation) => {
                self.frame = animation.in_point;
                self.status = LottieStatus::Ready(animation);
            }
            Err(e) => {
                warn!("LOTTIE: failed to load animation: {}", e);
                self.status = LottieStatus::Failed;
            }
        }
    }

    /// Advance playback by wall time; paused players hold their frame
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.visible {
            return;
        }
        let LottieStatus::Ready(animation) = &self.status else {
            return;
        };
        let total = animation.total_frames();
        let advanced = self.frame - animation.in_point
            + elapsed.as_secs_f64() * animation.frame_rate * self.speed;
        self.frame = animation.in_point + advanced.rem_euclid(total);
    }

    /// Playback position in [0, 1)
    pub fn progress(&self) -> Option<f64> {
        match &self.status {
            LottieStatus::Ready(animation) => {
                Some((self.frame - animation.in_point) / animation.total_frames())
            }
            _ => None,
        }
    }

    /// Lines drawn inside the player's slot
    pub fn frame_lines(
        &self,
        width: u16,
        height: u16,
        caption: Option<&str>,
        display: &DisplayConfig,
    ) -> Vec<Line<'static>> {
        let border = Style::default().fg(display.border_fg);
        let muted = Style::default().fg(display.muted_fg);

        let rows = match (&self.status, self.progress()) {
            (LottieStatus::Ready(animation), Some(progress)) => {
                let bar_width = width.saturating_sub(4) as usize;
                let filled = ((progress * bar_width as f64) as usize).min(bar_width);
                let state = if self.is_playing() { "▶" } else { "❚❚" };
                vec![
                    (
                        format!("{} {}", state, animation.name.as_deref().unwrap_or("animation")),
                        Style::default()
                            .fg(display.text_fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    (
                        format!(
                            "frame {:.0}/{:.0} · {}×{} · {} layers · {}×",
                            self.frame - animation.in_point,
                            animation.total_frames(),
                            animation.width,
                            animation.height,
                            animation.layers,
                            self.speed
                        ),
                        muted,
                    ),
                    (
                        format!("{}{}", "█".repeat(filled), "░".repeat(bar_width - filled)),
                        Style::default().fg(display.selection_fg),
                    ),
                ]
            }
            _ => placeholder_rows(caption, muted),
        };
        boxed(&rows, width, height, border)
    }
}

fn placeholder_rows(caption: Option<&str>, muted: Style) -> Vec<(String, Style)> {
    let mut rows = vec![("◌ animation".to_string(), muted)];
    if let Some(caption) = caption {
        rows.push((caption.to_string(), muted));
    }
    rows
}

/// Placeholder frame used when laying out a page
pub fn placeholder_lines(
    width: u16,
    height: u16,
    caption: Option<&str>,
    display: &DisplayConfig,
) -> Vec<Line<'static>> {
    let border = Style::default().fg(display.border_fg);
    let muted = Style::default().fg(display.muted_fg);
    boxed(&placeholder_rows(caption, muted), width, height, border)
}
