//! Scroll-to-depth tracking.
//!
//! The whole scene is keyed to one normalized scalar: how far down the page
//! the user has scrolled. Depth derives from scroll position, never from
//! time, so it jumps or reverses freely when the user scrolls up.

use input::DocumentMetrics;

/// The per-frame depth snapshot every downstream component reads.
/// Written once per frame before any animator runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthState {
    /// Normalized descent progress in [0, 1].
    pub depth: f32,
    /// Elapsed time since startup in seconds.
    pub elapsed: f32,
}

/// Converts raw scroll positions into the normalized depth scalar.
#[derive(Debug)]
pub struct DepthTracker {
    scroll_top: f32,
    document: DocumentMetrics,
    viewport_height: f32,
    depth: f32,
}

impl DepthTracker {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            document: DocumentMetrics::default(),
            viewport_height,
            depth: 0.0,
        }
    }

    /// Apply a scroll event and recompute depth.
    pub fn apply_scroll(&mut self, scroll_top: f32, document: DocumentMetrics) {
        self.scroll_top = scroll_top;
        self.document = document;
        self.recompute();
    }

    /// Apply a viewport resize and recompute depth.
    pub fn apply_resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.recompute();
    }

    /// Current depth in [0, 1].
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Snapshot for this frame.
    pub fn state(&self, elapsed: f32) -> DepthState {
        DepthState {
            depth: self.depth,
            elapsed,
        }
    }

    fn recompute(&mut self) {
        // Content shorter than the viewport cannot scroll: depth stays 0.
        let scrollable = self.document.max_height() - self.viewport_height;
        self.depth = if scrollable <= 0.0 {
            0.0
        } else {
            (self.scroll_top / scrollable).clamp(0.0, 1.0)
        };
    }
}
