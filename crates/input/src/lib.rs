//! Viewport input model: pointer, scroll, and resize events.
//!
//! Events arrive asynchronously relative to the frame loop. They are queued
//! here and drained in one batch at the start of the next frame, so the
//! whole frame observes a single consistent input state. No rate limiting
//! is applied; events are cheap numeric updates.

use glam::Vec2;

/// Several independent measurements of the scrollable content height.
/// Hosts disagree about which one is authoritative, so the engine takes
/// the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentMetrics {
    pub scroll_height: f32,
    pub offset_height: f32,
    pub client_height: f32,
}

impl DocumentMetrics {
    /// Create metrics where all measurements agree.
    pub fn uniform(height: f32) -> Self {
        Self {
            scroll_height: height,
            offset_height: height,
            client_height: height,
        }
    }

    /// The largest reported content height.
    pub fn max_height(&self) -> f32 {
        self.scroll_height.max(self.offset_height).max(self.client_height)
    }
}

/// One asynchronous viewport event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Pointer moved to `position` in viewport pixel coordinates
    /// (origin top-left, y down).
    PointerMoved { position: Vec2 },
    /// Scroll position changed.
    Scrolled {
        scroll_top: f32,
        document: DocumentMetrics,
    },
    /// Viewport resized to `width` x `height` pixels.
    Resized { width: f32, height: f32 },
}

/// Events accumulated between frames, drained atomically at frame start.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ViewportEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ViewportEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<ViewportEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Last known pointer position. Persists between move events; only an
/// explicit pointer-move changes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    position: Vec2,
}

impl PointerState {
    pub fn apply_move(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Raw viewport pixel coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Coordinates re-centered on the viewport center, y still down.
    pub fn centered(&self, viewport: Vec2) -> Vec2 {
        self.position - viewport * 0.5
    }
}

/// A virtual scrollable page for hosts without a real document, e.g. a
/// bare window where the wheel stands in for page scroll.
#[derive(Debug, Clone, Copy)]
pub struct VirtualPage {
    scroll_top: f32,
    /// Content height in multiples of the viewport height.
    screens: f32,
    viewport_height: f32,
}

impl VirtualPage {
    pub fn new(screens: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            screens: screens.max(1.0),
            viewport_height,
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.clamp_scroll();
    }

    /// Apply a wheel delta in pixels (positive scrolls down) and return the
    /// resulting scroll event.
    pub fn apply_wheel(&mut self, delta: f32) -> ViewportEvent {
        self.scroll_top += delta;
        self.clamp_scroll();
        self.scroll_event()
    }

    /// Current scroll state as an event (for the initial update at startup).
    pub fn scroll_event(&self) -> ViewportEvent {
        ViewportEvent::Scrolled {
            scroll_top: self.scroll_top,
            document: DocumentMetrics::uniform(self.screens * self.viewport_height),
        }
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn clamp_scroll(&mut self) {
        let max = ((self.screens - 1.0) * self.viewport_height).max(0.0);
        self.scroll_top = self.scroll_top.clamp(0.0, max);
    }
}
