//! Top-level engine state: every component the frame loop drives.

use anyhow::{Context, Result};
use engine_core::time::Time;
use engine_core::Vec2;
use input::{EventQueue, PointerState, ViewportEvent};
use scene::{BloomPass, Camera, Environment, Present, RenderCaps};

use crate::anchor::Anchor;
use crate::angler::Angler;
use crate::bubbles::Bubbles;
use crate::config::OceanConfig;
use crate::depth::DepthTracker;
use crate::jellyfish::Jellyfish;
use crate::plankton::PlanktonSwarm;
use crate::zones::{zone_at, Zone};

pub struct OceanState {
    pub config: OceanConfig,
    pub time: Time,
    pub queue: EventQueue,
    pub pointer: PointerState,
    pub depth: DepthTracker,
    pub camera: Camera,
    pub environment: Environment,
    /// None if the backend cannot run bloom; the scene presents without it.
    pub bloom: Option<BloomPass>,
    pub plankton: PlanktonSwarm,
    pub bubbles: Bubbles,
    pub jellyfish: Vec<Jellyfish>,
    pub angler: Angler,
    pub anchor: Anchor,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    pub current_zone: &'static Zone,
}

impl OceanState {
    pub fn new(config: OceanConfig, viewport: Vec2, caps: &RenderCaps) -> Result<Self> {
        config.validate().context("invalid configuration")?;

        let mut camera = Camera::default();
        camera.set_aspect(viewport.x as u32, viewport.y.max(1.0) as u32);

        let bloom = match BloomPass::new(caps) {
            Ok(pass) => Some(pass),
            Err(e) => {
                log::warn!("Bloom disabled: {}", e);
                None
            }
        };

        let tuning = &config.tuning;
        let plankton = PlanktonSwarm::spawn(&tuning.plankton);
        let bubbles = Bubbles::spawn(&tuning.bubbles);
        let jellyfish = Jellyfish::spawn_all(&tuning.jellyfish);
        let angler = Angler::spawn(&tuning.angler);
        let anchor = Anchor::spawn(&tuning.anchor);

        log::info!(
            "Scene populated: {} plankton, {} bubbles, {} jellyfish",
            tuning.plankton.count,
            tuning.bubbles.count,
            tuning.jellyfish.count
        );

        Ok(Self {
            time: Time::new(),
            queue: EventQueue::new(),
            pointer: PointerState::default(),
            depth: DepthTracker::new(viewport.y),
            camera,
            environment: Environment::default(),
            bloom,
            plankton,
            bubbles,
            jellyfish,
            angler,
            anchor,
            viewport,
            current_zone: zone_at(0.0),
            config,
        })
    }

    /// Queue an event for the next frame. Events never take effect
    /// mid-frame.
    pub fn push_event(&mut self, event: ViewportEvent) {
        self.queue.push(event);
    }

    /// Advance one frame and present the result.
    pub fn frame(&mut self, presenter: &mut dyn Present) {
        crate::update::frame(self);
        presenter.present(&self.environment);
    }
}
