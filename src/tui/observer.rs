//! Scroll-spy over document anchors
//!
//! A single `ViewportObserver` watches every registered anchor of a page and,
//! on each evaluation, reports the anchors whose presence inside the
//! activation band changed since the previous evaluation.

use std::collections::HashMap;
use std::ops::Range;
use tracing::trace;

use super::document::{Anchor, AnchorKind, Viewport};
use crate::config::NavigationConfig;

/// Narrow strip near the top of the viewport that decides "currently active"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationBand {
    /// Inset from the viewport top, percent of height
    pub top_percent: u16,
    /// Inset from the viewport bottom, percent of height
    pub bottom_percent: u16,
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self {
            top_percent: 20,
            bottom_percent: 70,
        }
    }
}

impl ActivationBand {
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            top_percent: config.band_top_percent.min(100),
            bottom_percent: config.band_bottom_percent.min(100),
        }
    }

    /// Document rows covered by the band; never empty
    pub fn rows(&self, viewport: &Viewport) -> Range<u16> {
        let height = u32::from(viewport.height());
        let offset = u32::from(viewport.offset());
        let start = offset + height * u32::from(self.top_percent) / 100;
        let end = offset + height * u32::from(100u16.saturating_sub(self.bottom_percent)) / 100;
        let end = end.max(start + 1);
        clamp_row(start)..clamp_row(end)
    }

    /// Offset that puts `row` at the start of the band
    pub fn offset_for(&self, row: u16, viewport_height: u16) -> u16 {
        let inset = u32::from(viewport_height) * u32::from(self.top_percent) / 100;
        row.saturating_sub(clamp_row(inset))
    }

    pub fn intersects(&self, anchor: &Anchor, viewport: &Viewport) -> bool {
        let band = self.rows(viewport);
        anchor.top < band.end && anchor.bottom() > band.start
    }
}

fn clamp_row(row: u32) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

/// Registration handle returned by `observe`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    token: u64,
    id: String,
}

impl Subscription {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// An anchor entering or leaving the activation band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    pub id: String,
    pub kind: AnchorKind,
    pub visible: bool,
}

impl VisibilityChange {
    pub fn entered(id: impl Into<String>, kind: AnchorKind) -> Self {
        Self {
            id: id.into(),
            kind,
            visible: true,
        }
    }
}

/// Source of visibility changes a page polls once per frame
///
/// Implemented by `ViewportObserver`; tests implement it to feed synthetic
/// events without a layout.
pub trait VisibilityNotifier {
    fn poll(&mut self, anchors: &[Anchor], viewport: &Viewport) -> Vec<VisibilityChange>;
}

#[derive(Debug, Clone)]
struct Registration {
    id: String,
    kind: AnchorKind,
    /// Band state at the last evaluation; None until first seen in a layout
    inside: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    band: ActivationBand,
    registrations: HashMap<u64, Registration>,
    next_token: u64,
}

impl ViewportObserver {
    pub fn new(band: ActivationBand) -> Self {
        Self {
            band,
            registrations: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn band(&self) -> ActivationBand {
        self.band
    }

    pub fn observe(&mut self, id: impl Into<String>, kind: AnchorKind) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        let id = id.into();
        trace!("OBSERVER: observe {} ({:?})", id, kind);
        self.registrations.insert(
            token,
            Registration {
                id: id.clone(),
                kind,
                inside: None,
            },
        );
        Subscription { token, id }
    }

    /// Remove one registration; removing twice is a no-op
    pub fn unobserve(&mut self, subscription: &Subscription) {
        if self.registrations.remove(&subscription.token).is_some() {
            trace!("OBSERVER: unobserve {}", subscription.id);
        }
    }

    /// Drop every registration
    pub fn disconnect(&mut self) {
        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Compare every registered anchor present in the layout against the band
    ///
    /// Changes come out in document order. An anchor seen for the first time
    /// is reported only if it is inside the band. Registered ids missing from
    /// the layout are skipped and keep their previous state.
    pub fn evaluate(&mut self, anchors: &[Anchor], viewport: &Viewport) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        let mut tokens: Vec<u64> = self.registrations.keys().copied().collect();
        tokens.sort_unstable();

        for anchor in anchors {
            for token in &tokens {
                let Some(registration) = self.registrations.get_mut(token) else {
                    continue;
                };
                if registration.id != anchor.id || registration.kind != anchor.kind {
                    continue;
                }

                let inside = self.band.intersects(anchor, viewport);
                let changed = match registration.inside {
                    None => inside,
                    Some(previous) => previous != inside,
                };
                registration.inside = Some(inside);

                if changed {
                    changes.push(VisibilityChange {
                        id: registration.id.clone(),
                        kind: registration.kind,
                        visible: inside,
                    });
                }
            }
        }

        if !changes.is_empty() {
            trace!("OBSERVER: {} change(s)", changes.len());
        }
        changes
    }
}

impl VisibilityNotifier for ViewportObserver {
    fn poll(&mut self, anchors: &[Anchor], viewport: &Viewport) -> Vec<VisibilityChange> {
        self.evaluate(anchors, viewport)
    }
}
