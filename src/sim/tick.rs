//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. Order is fixed:
//! ship and firing, lasers, asteroids (plus the spawn cooldown), collisions,
//! then score.

use glam::IVec2;

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Cursor position, if the pointer is over the window
    pub pointer: Option<IVec2>,
    /// Lasers to fire, one per mouse click since the last tick
    pub shots: u32,
}

/// Advance the game state by one frame.
///
/// `now_ms` is wall-clock time since the run started; it drives the spawn
/// cooldown and the survival bonus.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;
    state.elapsed_ms = state.elapsed_ms.max(now_ms);

    if let Some(pointer) = input.pointer {
        state.ship.follow(pointer);
    }

    for _ in 0..input.shots {
        let slot = state.lasers.fire(&state.ship.rect);
        state.events.push(GameEvent::LaserFired { slot });
    }

    state.lasers.step(state.tuning.laser_speed);

    let (speed, spread) = (state.tuning.asteroid_speed, state.tuning.respawn_spread);
    state.asteroids.step(speed, spread, &mut state.rng);
    spawn_on_cooldown(state);

    resolve_laser_hits(state);
    resolve_ship_hit(state);

    let intervals = state.score.advance(state.elapsed_ms);
    if intervals > 0 {
        state.events.push(GameEvent::TimeBonus { intervals });
    }
}

/// Wake one dormant asteroid each time the spawn cooldown elapses
fn spawn_on_cooldown(state: &mut GameState) {
    if state.elapsed_ms.saturating_sub(state.last_spawn_ms) < state.tuning.spawn_interval_ms {
        return;
    }
    state.last_spawn_ms = state.elapsed_ms;

    let spread = state.tuning.respawn_spread;
    if let Some(slot) = state.asteroids.activate_dormant(spread, &mut state.rng) {
        log::debug!("Asteroid spawned in slot {}", slot);
        state.events.push(GameEvent::AsteroidSpawned { slot });
    }
}

/// Each live laser destroys at most one asteroid; both are recycled
fn resolve_laser_hits(state: &mut GameState) {
    let mut hits: Vec<(usize, usize)> = Vec::new();
    for (laser_idx, laser) in state.lasers.active() {
        let target = state
            .asteroids
            .active()
            .find(|(ast_idx, rock)| {
                rock.overlaps(laser) && !hits.iter().any(|&(_, taken)| taken == *ast_idx)
            })
            .map(|(ast_idx, _)| ast_idx);
        if let Some(ast_idx) = target {
            hits.push((laser_idx, ast_idx));
        }
    }

    for (laser, asteroid) in hits {
        state.lasers.park(laser);
        state.asteroids.deactivate(asteroid);
        state.score.register_hit();
        log::debug!(
            "Laser {} destroyed asteroid {} (score {})",
            laser,
            asteroid,
            state.score.value()
        );
        state.events.push(GameEvent::AsteroidDestroyed { laser, asteroid });
    }
}

fn resolve_ship_hit(state: &mut GameState) {
    let ship = state.ship.rect;
    let crash = state
        .asteroids
        .active()
        .find(|(_, rock)| rock.overlaps(&ship))
        .map(|(idx, _)| idx);

    if let Some(asteroid) = crash {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ShipDestroyed { asteroid });
    }
}
