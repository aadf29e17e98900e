//! Per-frame scene description handed to the presentation layer
//!
//! The scene is rebuilt from scratch after every tick. It only reads the
//! session; nothing here feeds back into the simulation.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{ROW_COLORS, ROW_POINTS};
use crate::sim::{GamePhase, GameState, Rect, UniformSource};

/// Outline thickness used for bricks, paddle and life dots
const OUTLINE: f32 = 1.5;
const BALL_SEGMENTS: u32 = 24;
const LIFE_RADIUS: f32 = 7.0;
const LIFE_GAP: f32 = 4.0;

/// Font size classes; the presentation layer maps them to pixel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Headlines (title, game over, victory)
    Large,
    /// HUD and menu body text
    Medium,
    /// Secondary hints
    Small,
}

impl TextSize {
    pub fn pixels(self) -> u32 {
        match self {
            TextSize::Large => 40,
            TextSize::Medium => 24,
            TextSize::Small => 18,
        }
    }
}

/// Horizontal placement of a text item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    /// Left edge at x
    Left(f32),
    /// Centred in the window
    Centre,
    /// Right edge at x
    Right(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub size: TextSize,
    pub color: [f32; 4],
    pub align: Align,
    /// Top of the text line
    pub y: f32,
}

impl TextItem {
    fn new(text: impl Into<String>, size: TextSize, color: [f32; 4], align: Align, y: f32) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            align,
            y,
        }
    }

    fn centred(text: impl Into<String>, size: TextSize, color: [f32; 4], y: f32) -> Self {
        Self::new(text, size, color, Align::Centre, y)
    }
}

/// Session numbers exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub width: f32,
    pub height: f32,
    /// Triangle list, back to front
    pub vertices: Vec<Vertex>,
    /// Text drawn after all vertices, in order
    pub texts: Vec<TextItem>,
    pub hud: HudSnapshot,
}

impl Scene {
    /// Build the scene for the current session state
    pub fn build<R: UniformSource>(state: &GameState<R>) -> Self {
        let phase = state.phase();
        let mut scene = Self {
            clear_color: colors::BACKGROUND,
            width: state.config.window_width,
            height: state.config.window_height,
            vertices: Vec::new(),
            texts: Vec::new(),
            hud: HudSnapshot {
                phase,
                score: state.score,
                lives: state.lives,
                level: state.level,
            },
        };

        scene.push_playfield(state);

        if phase.shows_hud() {
            scene.push_hud(state);
        }

        match phase {
            GamePhase::MainMenu
            | GamePhase::Paused
            | GamePhase::LevelComplete
            | GamePhase::GameOver
            | GamePhase::Victory => scene.push_overlay(state),
            GamePhase::Controls => scene.push_controls(state.machine().previous()),
            GamePhase::BallOnPaddle => scene.texts.push(TextItem::centred(
                "Press SPACE to launch",
                TextSize::Small,
                colors::MUTED,
                scene.height - 26.0,
            )),
            GamePhase::Playing => {}
        }

        scene
    }

    /// Number of triangles in the vertex list
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn push_playfield<R: UniformSource>(&mut self, state: &GameState<R>) {
        for (_, brick) in state.grid.alive() {
            self.vertices
                .extend(shapes::rect(brick.rect(), brick.color().to_rgba(1.0)));
            self.vertices
                .extend(shapes::rect_outline(brick.rect(), OUTLINE, colors::BRICK_OUTLINE));
        }

        let paddle = state.paddle.bounds();
        self.vertices.extend(shapes::rect(&paddle, colors::PADDLE));
        self.vertices
            .extend(shapes::rect_outline(&paddle, OUTLINE, colors::PADDLE_OUTLINE));

        let r = state.ball.radius();
        self.vertices
            .extend(shapes::circle(state.ball.pos, r, colors::BALL, BALL_SEGMENTS));
        self.vertices.extend(shapes::ring(
            state.ball.pos,
            r,
            r + OUTLINE,
            colors::MUTED,
            BALL_SEGMENTS,
        ));
    }

    fn push_hud<R: UniformSource>(&mut self, state: &GameState<R>) {
        self.texts.push(TextItem::new(
            format!("Score: {}", state.score),
            TextSize::Medium,
            colors::WHITE,
            Align::Left(10.0),
            4.0,
        ));
        self.texts.push(TextItem::centred(
            format!("Level: {}", state.level),
            TextSize::Medium,
            colors::WHITE,
            4.0,
        ));

        // One dot per starting life, filled while that life remains
        let slots = state.config.initial_lives;
        let diameter = LIFE_RADIUS * 2.0;
        let total = slots as f32 * diameter + slots.saturating_sub(1) as f32 * LIFE_GAP;
        let start_x = self.width - total - 10.0;
        let cy = self.height - diameter - 6.0 + LIFE_RADIUS;

        for i in 0..slots {
            let cx = start_x + i as f32 * (diameter + LIFE_GAP) + LIFE_RADIUS;
            let center = Vec2::new(cx, cy);
            if i < state.lives {
                self.vertices
                    .extend(shapes::circle(center, LIFE_RADIUS, colors::LIFE_FULL, 16));
                self.vertices.extend(shapes::ring(
                    center,
                    LIFE_RADIUS,
                    LIFE_RADIUS + OUTLINE,
                    colors::MUTED,
                    16,
                ));
            } else {
                self.vertices.extend(shapes::ring(
                    center,
                    LIFE_RADIUS,
                    LIFE_RADIUS + OUTLINE,
                    colors::LIFE_EMPTY,
                    16,
                ));
            }
        }
    }

    fn push_backdrop(&mut self, color: [f32; 4]) {
        let full = Rect::new(0.0, 0.0, self.width, self.height);
        self.vertices.extend(shapes::rect(&full, color));
    }

    fn push_overlay<R: UniformSource>(&mut self, state: &GameState<R>) {
        self.push_backdrop(colors::OVERLAY);
        let mid = self.height * 0.5;

        let lines: Vec<TextItem> = match state.phase() {
            GamePhase::MainMenu => vec![
                TextItem::centred("BREAKOUT", TextSize::Large, colors::YELLOW, mid - 90.0),
                TextItem::centred("Press SPACE to start", TextSize::Medium, colors::WHITE, mid - 15.0),
                TextItem::centred("Press H for controls", TextSize::Medium, colors::HINT, mid + 25.0),
                TextItem::centred("ESC to quit", TextSize::Small, colors::DIM, mid + 68.0),
            ],
            GamePhase::Paused => vec![
                TextItem::centred("PAUSED", TextSize::Large, colors::CYAN, mid - 50.0),
                TextItem::centred("P - Resume", TextSize::Medium, colors::WHITE, mid + 10.0),
                TextItem::centred("H - Controls", TextSize::Medium, colors::HINT, mid + 42.0),
            ],
            GamePhase::LevelComplete => vec![
                TextItem::centred(
                    format!("Level {} Complete!", state.level),
                    TextSize::Large,
                    colors::GREEN,
                    mid - 30.0,
                ),
                TextItem::centred(
                    format!("Get ready for level {}...", state.level + 1),
                    TextSize::Medium,
                    colors::PALE_GREEN,
                    mid + 25.0,
                ),
            ],
            GamePhase::GameOver => vec![
                TextItem::centred("GAME OVER", TextSize::Large, colors::RED, mid - 65.0),
                TextItem::centred(
                    format!("Final Score: {}", state.score),
                    TextSize::Medium,
                    colors::WHITE,
                    mid - 5.0,
                ),
                TextItem::centred("Press SPACE to restart", TextSize::Medium, colors::SOFT, mid + 40.0),
            ],
            GamePhase::Victory => vec![
                TextItem::centred("YOU WIN!", TextSize::Large, colors::YELLOW, mid - 65.0),
                TextItem::centred(
                    format!("Final Score: {}", state.score),
                    TextSize::Medium,
                    colors::WHITE,
                    mid - 5.0,
                ),
                TextItem::centred("Press SPACE to play again", TextSize::Medium, colors::SOFT, mid + 40.0),
            ],
            _ => Vec::new(),
        };
        self.texts.extend(lines);
    }

    fn push_controls(&mut self, back_to: GamePhase) {
        const KEY_COLUMN: f32 = 170.0;
        const DESC_COLUMN: f32 = 210.0;
        const ROW_NAMES: [&str; 6] = ["Red    row", "Orange row", "Yellow row", "Green  row", "Blue   row", "Purple row"];

        self.push_backdrop(colors::CONTROLS_OVERLAY);
        self.texts
            .push(TextItem::centred("CONTROLS", TextSize::Large, colors::WHITE, 18.0));

        let width = self.width;
        let rule = |scene: &mut Scene, y: f32| {
            let line = Rect::new(60.0, y, width - 120.0, 1.0);
            scene.vertices.extend(shapes::rect(&line, colors::RULE));
        };
        let header = |scene: &mut Scene, title: &str, y: f32| {
            scene.texts.push(TextItem::new(
                title,
                TextSize::Small,
                colors::SECTION,
                Align::Right(KEY_COLUMN),
                y,
            ));
        };
        let row = |scene: &mut Scene, key: &str, desc: &str, y: f32| {
            scene
                .texts
                .push(TextItem::new(key, TextSize::Small, colors::KEY, Align::Right(KEY_COLUMN), y));
            scene.texts.push(TextItem::new(
                desc,
                TextSize::Small,
                colors::SOFT,
                Align::Left(DESC_COLUMN),
                y,
            ));
        };

        rule(self, 72.0);

        let mut y = 84.0;
        header(self, "MOVEMENT", y);
        y += 26.0;
        row(self, "\u{2190} / A", "Move paddle left", y);
        y += 24.0;
        row(self, "\u{2192} / D", "Move paddle right", y);
        y += 34.0;
        rule(self, y);

        y += 12.0;
        header(self, "GAME", y);
        y += 26.0;
        for (key, desc) in [
            ("Space", "Launch ball  /  Start  /  Restart"),
            ("P", "Pause / Resume"),
            ("H", "Show / hide this screen"),
            ("Esc", "Close controls  /  Quit"),
        ] {
            row(self, key, desc, y);
            y += 24.0;
        }
        y += 10.0;
        rule(self, y);

        y += 12.0;
        header(self, "SCORING", y);
        y += 26.0;
        for ((name, color), points) in ROW_NAMES.iter().zip(ROW_COLORS).zip(ROW_POINTS) {
            let dot = Vec2::new(KEY_COLUMN - 5.0, y + 9.0);
            self.vertices
                .extend(shapes::circle(dot, 5.0, color.to_rgba(1.0), 12));
            self.texts.push(TextItem::new(
                format!("{name}   {points} pts x hit points"),
                TextSize::Small,
                colors::SOFT,
                Align::Left(DESC_COLUMN),
                y,
            ));
            y += 22.0;
        }

        let footer = match back_to {
            GamePhase::Paused => "H or ESC - back to the game",
            _ => "H or ESC - back to the menu",
        };
        self.texts.push(TextItem::centred(
            footer,
            TextSize::Small,
            colors::DIM,
            self.height - 30.0,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{FixedSource, InputEvent, TickInput, tick};

    fn state() -> GameState<FixedSource> {
        GameState::with_source(GameConfig::default(), FixedSource::constant(0.5))
    }

    fn has_text(scene: &Scene, needle: &str) -> bool {
        scene.texts.iter().any(|t| t.text.contains(needle))
    }

    #[test]
    fn test_main_menu_has_title_and_no_hud() {
        let scene = Scene::build(&state());
        assert!(has_text(&scene, "BREAKOUT"));
        assert!(!has_text(&scene, "Score:"));
        assert_eq!(scene.hud.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_ball_on_paddle_shows_hud_and_hint() {
        let mut state = state();
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        let scene = Scene::build(&state);
        assert!(has_text(&scene, "Score: 0"));
        assert!(has_text(&scene, "Level: 1"));
        assert!(has_text(&scene, "Press SPACE to launch"));
        assert_eq!(scene.vertices.len() % 3, 0);
    }

    #[test]
    fn test_destroyed_bricks_are_not_drawn() {
        let mut state = state();
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        let full = Scene::build(&state).vertices.len();
        state.grid.hit(0);
        let fewer = Scene::build(&state).vertices.len();
        // One brick: fill quad plus four outline quads
        assert_eq!(full - fewer, 30);
    }

    #[test]
    fn test_controls_card() {
        let mut state = state();
        tick(&mut state, &TickInput::press(InputEvent::HelpToggle), 0.0);
        let scene = Scene::build(&state);
        assert_eq!(scene.hud.phase, GamePhase::Controls);
        assert!(has_text(&scene, "CONTROLS"));
        assert!(has_text(&scene, "Pause / Resume"));
        assert!(has_text(&scene, "Purple row"));
        assert!(!has_text(&scene, "Score:"));
        assert!(has_text(&scene, "back to the menu"));
    }

    #[test]
    fn test_controls_from_pause_returns_to_game() {
        let mut state = state();
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        tick(&mut state, &TickInput::press(InputEvent::PauseToggle), 0.0);
        tick(&mut state, &TickInput::press(InputEvent::HelpToggle), 0.0);
        let scene = Scene::build(&state);
        assert_eq!(scene.hud.phase, GamePhase::Controls);
        assert!(has_text(&scene, "back to the game"));
    }

    #[test]
    fn test_game_over_shows_final_score() {
        let mut state = state();
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        tick(&mut state, &TickInput::press(InputEvent::Launch), 0.0);
        state.score = 1234;
        state.lives = 1;
        state.ball.pos = Vec2::new(400.0, 700.0);
        state.ball.vel = Vec2::new(0.0, 100.0);
        tick(&mut state, &TickInput::default(), 0.01);
        let scene = Scene::build(&state);
        assert!(has_text(&scene, "GAME OVER"));
        assert!(has_text(&scene, "Final Score: 1234"));
        assert_eq!(scene.hud.lives, 0);
    }

    #[test]
    fn test_vertex_bytes_match_stride() {
        let scene = Scene::build(&state());
        assert_eq!(scene.vertex_bytes().len(), scene.vertices.len() * Vertex::STRIDE);
        assert_eq!(scene.triangle_count() * 3, scene.vertices.len());
    }
}
