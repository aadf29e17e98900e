//! Rendering module
//!
//! Converts a session snapshot into colored triangles plus text items. The
//! window, GPU and font rasterizer live behind [`RenderSurface`].

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Align, HudSnapshot, Scene, TextItem, TextSize};
pub use vertex::Vertex;

use crate::sim::GamePhase;

/// Presentation target for built scenes
pub trait RenderSurface {
    /// Draw one frame. A surface without a font may skip `scene.texts`.
    fn present(&mut self, scene: &Scene);
}

/// Surface with no display attached
///
/// Logs phase changes and score updates so a headless run still shows
/// what the session is doing.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    frames: u64,
    triangles: u64,
    bytes: u64,
    last: Option<HudSnapshot>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Triangles submitted across all frames
    pub fn triangles(&self) -> u64 {
        self.triangles
    }

    /// Vertex bytes submitted across all frames
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl RenderSurface for HeadlessSurface {
    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        self.triangles += scene.triangle_count() as u64;
        self.bytes += scene.vertex_bytes().len() as u64;

        let hud = scene.hud;
        match self.last {
            Some(prev) if prev.phase != hud.phase => {
                log::info!(
                    "frame {}: {:?} -> {:?} (level {}, lives {}, score {})",
                    self.frames,
                    prev.phase,
                    hud.phase,
                    hud.level,
                    hud.lives,
                    hud.score
                );
            }
            Some(prev) if prev.score != hud.score && hud.phase == GamePhase::Playing => {
                log::debug!("frame {}: score {}", self.frames, hud.score);
            }
            None => log::info!("first frame in {:?}", hud.phase),
            _ => {}
        }
        self.last = Some(hud);
    }
}
