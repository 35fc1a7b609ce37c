//! The per-frame update pass.
//!
//! Strict ordering: timing, then the atomic event drain, then the depth
//! snapshot and visual parameters, then every animator, then the
//! environment write. Animators read the same snapshot; none of them sees
//! an event that arrived mid-frame.

use input::ViewportEvent;

use crate::pointer;
use crate::state::OceanState;
use crate::zones::{zone_at, VisualParams};

pub(crate) fn frame(state: &mut OceanState) {
    state.time.update();
    let dt = state.time.delta_seconds();
    let elapsed = state.time.elapsed_seconds();

    for event in state.queue.drain() {
        match event {
            ViewportEvent::PointerMoved { position } => state.pointer.apply_move(position),
            ViewportEvent::Scrolled { scroll_top, document } => {
                state.depth.apply_scroll(scroll_top, document)
            }
            ViewportEvent::Resized { width, height } => {
                state.viewport = engine_core::Vec2::new(width, height);
                state.camera.set_aspect(width as u32, height.max(1.0) as u32);
                state.depth.apply_resize(height);
            }
        }
    }

    let depth_state = state.depth.state(elapsed);
    let params = VisualParams::derive(&depth_state, &state.config.tuning.zones);
    let interaction = pointer::project(
        state.pointer.centered(state.viewport),
        state.viewport,
        &state.camera,
    );

    let tuning = &state.config.tuning;
    state
        .plankton
        .update(dt, &params, &interaction, &tuning.plankton);
    state.bubbles.update(dt, elapsed, &tuning.bubbles);
    for jelly in &mut state.jellyfish {
        jelly.update(dt, &depth_state, &params, &interaction, &tuning.jellyfish);
    }
    state
        .angler
        .update(dt, elapsed, &params, &tuning.angler);
    state.anchor.update(&params);

    state.environment.background = params.background;
    state.environment.fog_color = params.fog_color;
    state.environment.fog_density = params.fog_density;
    state.environment.ambient_intensity = params.ambient_intensity;
    state.environment.sun_intensity = params.sun_intensity;
    if let Some(bloom) = &mut state.bloom {
        bloom.strength = params.bloom_strength;
        bloom.radius = params.bloom_radius;
    }

    let zone = zone_at(depth_state.depth);
    if !std::ptr::eq(zone, state.current_zone) {
        log::debug!(
            "Entered {} at depth {:.3} (base #{:06x}, fog {}, frame {})",
            zone.name,
            depth_state.depth,
            zone.base_color,
            zone.fog_density,
            state.time.frame_count()
        );
        state.current_zone = zone;
    }
}
