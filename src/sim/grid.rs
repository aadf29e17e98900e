//! Brick grid layout and bookkeeping

use serde::{Deserialize, Serialize};

use super::brick::Brick;
use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::{ROW_BASE_HIT_POINTS, ROW_COLORS, ROW_POINTS};

/// All bricks of the current level plus the count still standing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
    remaining: u32,
}

impl BrickGrid {
    /// Lay out a fresh `rows x cols` grid for a 1-based `level`.
    ///
    /// Every level past the first adds one hit point to every brick; a brick's
    /// value is its row base points times its hit points.
    pub fn build(config: &GameConfig, level: u32) -> Self {
        let extra_hp = level.saturating_sub(1);
        let cols = config.brick_cols;
        let total_width = cols as f32 * config.brick_width
            + cols.saturating_sub(1) as f32 * config.brick_padding;
        let start_x = (config.window_width - total_width) * 0.5;

        let mut bricks = Vec::with_capacity(config.brick_rows as usize * cols as usize);
        for row in 0..config.brick_rows {
            let style = row as usize % ROW_POINTS.len();
            let hp = ROW_BASE_HIT_POINTS[style].saturating_add(extra_hp);
            let points = ROW_POINTS[style].saturating_mul(hp);
            let y = config.brick_top_offset
                + row as f32 * (config.brick_height + config.brick_padding);

            for col in 0..cols {
                let x = start_x + col as f32 * (config.brick_width + config.brick_padding);
                let rect = Rect::new(x, y, config.brick_width, config.brick_height);
                bricks.push(Brick::new(rect, ROW_COLORS[style], hp, points));
            }
        }

        let grid = Self::from_bricks(bricks);
        log::debug!(
            "Built level {} grid: {} bricks (+{} hp), worth {} points",
            level,
            grid.len(),
            extra_hp,
            grid.total_value()
        );
        grid
    }

    /// Wrap an explicit set of bricks (custom layouts, tests)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        let remaining = bricks.iter().filter(|b| !b.is_destroyed()).count() as u32;
        Self { bricks, remaining }
    }

    /// Bricks in construction (row-major) order, destroyed ones included
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks still standing, with their index
    pub fn alive(&self) -> impl Iterator<Item = (usize, &Brick)> {
        self.bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_destroyed())
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    /// Damage the brick at `index`. Returns its points if this hit destroyed it.
    pub fn hit(&mut self, index: usize) -> Option<u32> {
        let brick = self.bricks.get_mut(index)?;
        if brick.hit() {
            self.remaining = self.remaining.saturating_sub(1);
            Some(brick.points())
        } else {
            None
        }
    }

    /// Score for clearing every brick still standing
    pub fn total_value(&self) -> u64 {
        self.alive().map(|(_, b)| b.points() as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BRICK_COLS, MAX_BRICK_ROWS};
    use crate::sim::brick::Rgb;

    #[test]
    fn test_level_one_layout() {
        let config = GameConfig::default();
        let grid = BrickGrid::build(&config, 1);
        assert_eq!(grid.len(), 60);
        assert_eq!(grid.remaining(), 60);

        // 10 * 68 + 9 * 4 = 716 wide, centred in 800
        let first = grid.bricks()[0].rect();
        assert_eq!(first.left, 42.0);
        assert_eq!(first.top, 60.0);
        let last = grid.bricks()[59].rect();
        assert_eq!(last.right(), 758.0);
        assert_eq!(last.top, 60.0 + 5.0 * 26.0);

        assert!(grid.bricks().iter().all(|b| b.hp() == 1));
        assert_eq!(grid.bricks()[0].points(), 60);
        assert_eq!(grid.bricks()[0].color(), Rgb::new(220, 45, 45));
        assert_eq!(grid.bricks()[59].points(), 10);
    }

    #[test]
    fn test_higher_levels_add_hit_points() {
        let config = GameConfig::default();
        let grid = BrickGrid::build(&config, 3);
        assert!(grid.bricks().iter().all(|b| b.hp() == 3 && b.max_hp() == 3));
        // Row 0 base 60 * 3 hp
        assert_eq!(grid.bricks()[0].points(), 180);
        // Sum over rows of base * hp * cols
        assert_eq!(grid.total_value(), (60 + 50 + 40 + 30 + 20 + 10) * 3 * 10);
    }

    #[test]
    fn test_extra_rows_cycle_row_table() {
        let config = GameConfig {
            brick_rows: 8,
            brick_cols: 1,
            ..GameConfig::default()
        };
        let grid = BrickGrid::build(&config, 1);
        assert_eq!(grid.bricks()[6].points(), 60);
        assert_eq!(grid.bricks()[7].color(), ROW_COLORS[1]);
    }

    #[test]
    fn test_hit_tracks_remaining() {
        let config = GameConfig {
            brick_rows: 1,
            brick_cols: 2,
            ..GameConfig::default()
        };
        let mut grid = BrickGrid::build(&config, 2);
        assert_eq!(grid.hit(0), None);
        assert_eq!(grid.remaining(), 2);
        assert_eq!(grid.hit(0), Some(120));
        assert_eq!(grid.remaining(), 1);
        // Already destroyed
        assert_eq!(grid.hit(0), None);
        assert_eq!(grid.remaining(), 1);
        assert_eq!(grid.alive().count(), 1);
        assert_eq!(grid.hit(99), None);
    }

    #[test]
    fn test_oversized_config_builds_capped_grid() {
        let config = GameConfig::from_json(r#"{ "brick_rows": 70000, "brick_cols": 70000 }"#)
            .expect("valid json");
        let grid = BrickGrid::build(&config, 1);
        assert_eq!(grid.len(), (MAX_BRICK_ROWS * MAX_BRICK_COLS) as usize);
        assert_eq!(grid.remaining(), MAX_BRICK_ROWS * MAX_BRICK_COLS);
    }
}
