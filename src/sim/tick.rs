//! Per-frame simulation tick
//!
//! Order within a tick: spawn, advance/collide/cull blocks, move player,
//! then score. The frame that ends the game still runs to completion; a tick
//! on a finished game does nothing.

use super::input::InputState;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Spawn
    if let Some(block) = state.spawner.tick(&mut state.rng) {
        log::debug!("Spawned block {} at x={:.1}", block.id, block.pos.x);
        events.push(GameEvent::BlockSpawned { id: block.id });
        state.blocks.push(block);
    }

    update_blocks(state, &mut events);

    // Player moves after blocks, so collisions use last frame's position
    if state.player.update(input) {
        log::info!("Player speed increased to {}", state.player.speed);
        events.push(GameEvent::SpeedUp {
            speed: state.player.speed,
        });
    }

    // Scored even on the frame that ends the game
    if let Some(level) = state.progression.tick() {
        log::info!("Level {} reached at score {}", level, state.progression.score);
        events.push(GameEvent::LevelUp { level });
    }

    if state.phase == GamePhase::GameOver {
        let (score, level) = (state.progression.score, state.progression.level);
        log::info!("Game over: score {}, level {}", score, level);
        events.push(GameEvent::GameOver { score, level });
    }

    events
}

/// Advance every live block once, in spawn order, and drop the ones that hit
/// the player or left the playfield.
///
/// `retain_mut` visits each block exactly once, so a block that is both hit
/// and out of bounds is removed once and costs at most one point of health.
fn update_blocks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = &state.player;
    let health = &mut state.health;
    let phase = &mut state.phase;

    state.blocks.retain_mut(|block| {
        block.update();

        if player.collides_with(block) {
            if *health > 0 {
                *health -= 1;
            }
            log::debug!("Block {} hit player, health {}", block.id, *health);
            events.push(GameEvent::BlockHit {
                block: block.clone(),
                health: *health,
            });

            if *health == 0 {
                *phase = GamePhase::GameOver;
            }
            return false;
        }

        if block.is_out_of_bounds() {
            log::debug!("Block {} left the playfield", block.id);
            events.push(GameEvent::BlockEscaped { id: block.id });
            return false;
        }

        true
    });
}
