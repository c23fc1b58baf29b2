//! Frame composition: blocks, player, HUD and level bar

use glam::Vec2;

use super::surface::{Rect, Surface};
use crate::consts::*;
use crate::sim::palette::colors;
use crate::sim::{Block, GameEvent, GameState};

/// Draw one frame of `state`.
///
/// `events` are the events of the tick that produced `state`; blocks that hit
/// the player this frame are already gone from the state but are still drawn
/// at their impact position.
pub fn draw_frame(state: &GameState, events: &[GameEvent], surface: &mut dyn Surface) {
    surface.clear(Rect::PLAYFIELD);

    for block in &state.blocks {
        draw_block(block, surface);
    }
    for event in events {
        if let GameEvent::BlockHit { block, .. } = event {
            draw_block(block, surface);
        }
    }

    surface.fill_triangle(state.player.triangle(), colors::PLAYER);

    draw_hud(state, surface);
}

fn draw_block(block: &Block, surface: &mut dyn Surface) {
    surface.fill_rect(
        Rect::new(block.pos.x, block.pos.y, BLOCK_SIZE, BLOCK_SIZE),
        block.color,
    );
}

fn draw_hud(state: &GameState, surface: &mut dyn Surface) {
    let lines = [
        format!("Health: {}", state.health),
        format!("Score: {}", state.score()),
        format!("Level: {}", state.level()),
    ];
    for (text, y) in lines.iter().zip(HUD_LINE_Y) {
        surface.fill_text(text, Vec2::new(HUD_TEXT_X, y), HUD_FONT, colors::HUD_TEXT);
    }

    // Track first, then the level colour over the same width
    let width = state.progression.bar_fraction() * GAME_WIDTH;
    let bar = Rect::new(0.0, 0.0, width, LEVEL_BAR_HEIGHT);
    surface.fill_rect(bar, colors::LEVEL_BAR_TRACK);
    surface.fill_rect(bar, state.progression.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::{InputState, LEVEL_COLORS, tick};

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(1);
        for _ in 0..3 {
            tick(&mut state, &InputState::default());
        }
        let mut surface = RecordingSurface::new();
        draw_frame(&state, &[], &mut surface);

        assert_eq!(surface.texts(), vec!["Health: 3", "Score: 3", "Level: 1"]);
        assert!(matches!(surface.commands[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn test_level_bar_width() {
        let mut state = GameState::new(1);
        state.progression.level_timer = 25;
        let mut surface = RecordingSurface::new();
        draw_frame(&state, &[], &mut surface);

        let bars: Vec<_> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(rect, color) if rect.pos == Vec2::ZERO => Some((*rect, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].0.size, Vec2::new(GAME_WIDTH / 2.0, LEVEL_BAR_HEIGHT));
        assert_eq!(bars[0].1, colors::LEVEL_BAR_TRACK);
        assert_eq!(bars[1].1, LEVEL_COLORS[0]);
    }

    #[test]
    fn test_hit_block_drawn_on_impact_frame() {
        let state = GameState::new(1);
        let block = Block::new(7, Vec2::new(100.0, 200.0), LEVEL_COLORS[4]);
        let events = [GameEvent::BlockHit { block, health: 2 }];
        let mut surface = RecordingSurface::new();
        draw_frame(&state, &events, &mut surface);

        let expected = DrawCommand::FillRect(
            Rect::new(100.0, 200.0, BLOCK_SIZE, BLOCK_SIZE),
            LEVEL_COLORS[4],
        );
        assert!(surface.commands.contains(&expected));
    }

    #[test]
    fn test_player_triangle_drawn() {
        let state = GameState::new(1);
        let mut surface = RecordingSurface::new();
        draw_frame(&state, &[], &mut surface);

        let expected = DrawCommand::FillTriangle(state.player.triangle(), colors::PLAYER);
        assert!(surface.commands.contains(&expected));
    }
}
