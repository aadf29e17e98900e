//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [12.0 / 255.0, 12.0 / 255.0, 28.0 / 255.0, 1.0];
    pub const PADDLE: [f32; 4] = [100.0 / 255.0, 180.0 / 255.0, 1.0, 1.0];
    pub const PADDLE_OUTLINE: [f32; 4] = [50.0 / 255.0, 130.0 / 255.0, 210.0 / 255.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BRICK_OUTLINE: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 200.0 / 255.0];
    pub const LIFE_FULL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIFE_EMPTY: [f32; 4] = [90.0 / 255.0, 90.0 / 255.0, 90.0 / 255.0, 1.0];
    /// Backdrop behind menu and end-of-game overlays
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 170.0 / 255.0];
    /// Heavier backdrop behind the controls card
    pub const CONTROLS_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 210.0 / 255.0];
    pub const RULE: [f32; 4] = [80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0];

    // Text
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 60.0 / 255.0, 60.0 / 255.0, 1.0];
    pub const HINT: [f32; 4] = [100.0 / 255.0, 220.0 / 255.0, 1.0, 1.0];
    pub const MUTED: [f32; 4] = [180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0, 1.0];
    pub const DIM: [f32; 4] = [130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0, 1.0];
    pub const SOFT: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
    pub const PALE_GREEN: [f32; 4] = [180.0 / 255.0, 1.0, 180.0 / 255.0, 1.0];
    pub const KEY: [f32; 4] = [1.0, 220.0 / 255.0, 80.0 / 255.0, 1.0];
    pub const SECTION: [f32; 4] = [140.0 / 255.0, 200.0 / 255.0, 1.0, 1.0];
}
