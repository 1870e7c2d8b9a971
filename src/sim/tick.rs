//! Per-frame simulation step

use super::state::SimState;

/// Advance the simulation by one frame.
///
/// Polls the spawn schedule against the driver's clock (a spawn that fires
/// here is visible starting this frame), grows every live ripple by one
/// tick, and retires ripples past the expiry radius.
pub fn tick(state: &mut SimState, now_ms: f64) {
    let SimState {
        field,
        ripples,
        scheduler,
        rng,
        ..
    } = state;

    scheduler.poll(now_ms, field, ripples, rng);
    ripples.advance();
    ripples.prune();
}
