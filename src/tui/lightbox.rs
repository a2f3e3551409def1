//! Full-screen media viewer with a scoped page scroll lock

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::content::MediaItem;

/// Process-wide page scroll lock
///
/// Holders take a guard; the page is locked while any guard is alive.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Releases its hold on the scroll lock when dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct Lightbox {
    lock: ScrollLock,
    media: Vec<MediaItem>,
    current: usize,
    guard: Option<ScrollLockGuard>,
}

impl Lightbox {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            media: Vec::new(),
            current: 0,
            guard: None,
        }
    }

    /// Open at `index` (clamped) over `media`; no-op on an empty list
    pub fn open(&mut self, index: usize, media: Vec<MediaItem>) {
        if media.is_empty() {
            return;
        }
        self.current = index.min(media.len() - 1);
        self.media = media;
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        debug!("LIGHTBOX: open at {} of {}", self.current, self.media.len());
    }

    pub fn close(&mut self) {
        if self.guard.take().is_some() {
            debug!("LIGHTBOX: close");
        }
        self.media.clear();
        self.current = 0;
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn next(&mut self) {
        if self.is_open() {
            self.current = (self.current + 1) % self.media.len();
        }
    }

    pub fn previous(&mut self) {
        if self.is_open() {
            let len = self.media.len();
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Thumbnail selection; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if self.is_open() && index < self.media.len() {
            self.current = index;
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        if self.is_open() {
            self.media.get(self.current)
        } else {
            None
        }
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }
}
