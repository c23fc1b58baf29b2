//! Score, level and the level-timer bar

use serde::{Deserialize, Serialize};

use super::palette::{Color, level_color};
use crate::consts::LEVEL_UP_SCORE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    /// One point per simulated frame
    pub score: u64,
    /// 1-based level
    pub level: u32,
    /// Frames since the last level-up (cosmetic)
    pub level_timer: u32,
    /// Ambient colour of the current level
    pub color: Color,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            level_timer: 0,
            color: level_color(1),
        }
    }
}

impl Progression {
    /// Score one frame. Returns the new level on a level-up.
    pub fn tick(&mut self) -> Option<u32> {
        self.score += 1;

        let mut leveled = None;
        if self.score % LEVEL_UP_SCORE == 0 {
            self.level += 1;
            self.level_timer = 0;
            self.color = level_color(self.level);
            leveled = Some(self.level);
        }

        self.level_timer += 1;
        leveled
    }

    /// Level bar fill as a fraction of the playfield width. Not capped at 1.0.
    pub fn bar_fraction(&self) -> f32 {
        self.level_timer as f32 / LEVEL_UP_SCORE as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::palette::LEVEL_COLORS;

    #[test]
    fn test_level_up_at_fifty() {
        let mut progression = Progression::default();
        for frame in 1..=49 {
            assert_eq!(progression.tick(), None, "frame {}", frame);
        }
        assert_eq!(progression.level, 1);
        assert_eq!(progression.color, LEVEL_COLORS[0]);

        assert_eq!(progression.tick(), Some(2));
        assert_eq!(progression.score, 50);
        assert_eq!(progression.level, 2);
        assert_eq!(progression.color, LEVEL_COLORS[1]);
        // Reset on level-up, then counted for this frame
        assert_eq!(progression.level_timer, 1);
    }

    #[test]
    fn test_bar_fraction_uncapped() {
        let mut progression = Progression::default();
        for _ in 0..49 {
            progression.tick();
        }
        // 49 frames without a reset
        assert!((progression.bar_fraction() - 0.98).abs() < 1e-6);

        progression.level_timer = 75;
        assert!((progression.bar_fraction() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_palette_cycles_after_twelve_levels() {
        let mut progression = Progression::default();
        for _ in 0..LEVEL_UP_SCORE * 12 {
            progression.tick();
        }
        assert_eq!(progression.level, 13);
        assert_eq!(progression.color, LEVEL_COLORS[0]);
    }
}
