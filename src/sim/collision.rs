//! Collision detection and response
//!
//! Ball against the playfield walls, the paddle and the brick grid. Every
//! function takes the entities it touches explicitly; none of them know about
//! the session that owns them.

use glam::Vec2;

use super::ball::Ball;
use super::grid::BrickGrid;
use super::paddle::Paddle;
use super::rect::Rect;
use crate::consts::{EPSILON, PADDLE_MAX_BOUNCE_DEG, SEPARATION_SLOP};
use crate::direction_from_vertical;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the obstacle to the ball centre
    pub point: Vec2,
    /// Unit normal from the obstacle toward the ball centre
    pub normal: Vec2,
    /// How far the ball overlaps the obstacle
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle vs axis-aligned rectangle using the nearest point on the rectangle.
///
/// When the centre lies inside the rectangle the distance is zero and the
/// normal falls back to straight up.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let nearest = rect.nearest_point(ball_pos);
    let delta = ball_pos - nearest;
    let dist_sq = delta.length_squared();

    if dist_sq >= ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > EPSILON {
        delta / dist
    } else {
        Vec2::NEG_Y
    };

    CollisionResult {
        hit: true,
        point: nearest,
        normal,
        penetration: ball_radius - dist,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Outcome of the wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Ball was pushed back off the left, right or top wall
    pub bounced: bool,
    /// Ball's top edge passed the bottom of the playfield
    pub fell_out: bool,
}

/// Keep the ball inside the playfield.
///
/// Walls are axis-aligned and infinite, so instead of reflecting we clamp the
/// ball onto the wall and force the velocity component to point back inside.
/// The bottom edge never bounces; it only reports the loss.
pub fn resolve_walls(ball: &mut Ball, width: f32, height: f32, target_speed: f32) -> WallContact {
    let start = ball.pos;
    let r = ball.radius();
    let mut contact = WallContact::default();

    if start.x - r < 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = r;
        contact.bounced = true;
    }

    if start.x + r > width {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = width - r;
        contact.bounced = true;
    }

    if start.y - r < 0.0 {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = r;
        contact.bounced = true;
    }

    if start.y - r > height {
        contact.fell_out = true;
    }

    if contact.bounced {
        ball.normalise_speed(target_speed);
    }

    contact
}

/// Normalised horizontal hit position: -1 at the paddle's left edge, 1 at its right
pub fn paddle_hit_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    ((ball_x - paddle.centre_x()) / (paddle.width() * 0.5)).clamp(-1.0, 1.0)
}

/// Outgoing velocity for a paddle hit at `hit_offset`: centre hits go straight
/// up, edge hits leave at the maximum bounce angle from vertical
pub fn paddle_bounce_velocity(hit_offset: f32, speed: f32) -> Vec2 {
    let angle = hit_offset.clamp(-1.0, 1.0) * PADDLE_MAX_BOUNCE_DEG.to_radians();
    direction_from_vertical(angle) * speed
}

/// Deflect the ball off the paddle. Returns `true` on a hit.
///
/// Only a descending ball is considered, so a ball still overlapping the
/// paddle right after a bounce is not deflected twice.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, target_speed: f32) -> bool {
    if ball.vel.y <= 0.0 {
        return false;
    }

    let bounds = paddle.bounds();
    let r = ball.radius();
    if !bounds.expanded(r).contains(ball.pos) {
        return false;
    }

    let hit_offset = paddle_hit_offset(ball.pos.x, paddle);
    ball.pos.y = bounds.top - r - SEPARATION_SLOP;
    ball.vel = paddle_bounce_velocity(hit_offset, target_speed);
    ball.normalise_speed(target_speed);
    true
}

/// Outcome of the brick pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrickContact {
    /// Indices of every brick touched this frame, in grid order
    pub damaged: Vec<usize>,
    /// Indices of the bricks destroyed this frame
    pub destroyed: Vec<usize>,
    /// Points earned from destroyed bricks
    pub points: u64,
    /// Whether the ball's velocity was reflected
    pub reflected: bool,
}

impl BrickContact {
    pub fn is_empty(&self) -> bool {
        self.damaged.is_empty()
    }
}

/// Damage every brick the ball overlaps, reflecting off the first one only.
///
/// A ball straddling two neighbours damages both, but a second reflection in
/// the same frame would cancel or compound the first.
pub fn resolve_bricks(ball: &mut Ball, grid: &mut BrickGrid, target_speed: f32) -> BrickContact {
    let center = ball.pos;
    let r = ball.radius();

    let touching: Vec<(usize, CollisionResult)> = grid
        .alive()
        .filter_map(|(index, brick)| {
            let result = ball_rect_collision(center, r, brick.rect());
            result.hit.then_some((index, result))
        })
        .collect();

    let mut contact = BrickContact::default();
    for (index, result) in touching {
        contact.damaged.push(index);
        if let Some(points) = grid.hit(index) {
            contact.destroyed.push(index);
            contact.points += points as u64;
        }

        if !contact.reflected {
            ball.vel = reflect_velocity(ball.vel, result.normal);
            ball.pos = center + result.normal * (result.penetration + SEPARATION_SLOP);
            ball.normalise_speed(target_speed);
            contact.reflected = true;
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::brick::{Brick, Rgb};
    use proptest::prelude::*;

    const SPEED: f32 = 320.0;

    fn brick_at(left: f32, top: f32) -> Brick {
        Brick::new(Rect::new(left, top, 68.0, 22.0), Rgb::new(220, 45, 45), 1, 60)
    }

    fn moving_ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, 8.0);
        ball.launch(SPEED, &mut crate::sim::rng::FixedSource::constant(0.5));
        ball.vel = vel;
        ball
    }

    fn paddle() -> Paddle {
        Paddle::new(340.0, 555.0, 120.0, 14.0, 500.0)
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);

        let diagonal = reflect_velocity(Vec2::new(3.0, 4.0), Vec2::new(0.0, -1.0));
        assert!((diagonal - Vec2::new(3.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn test_ball_rect_collision_below_brick() {
        let rect = Rect::new(100.0, 60.0, 68.0, 22.0);
        let result = ball_rect_collision(Vec2::new(130.0, 87.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(130.0, 82.0));
        assert!((result.normal - Vec2::Y).length() < 1e-5);
        assert!((result.penetration - 3.0).abs() < 1e-5);

        let miss = ball_rect_collision(Vec2::new(130.0, 90.0), 8.0, &rect);
        assert!(!miss.hit);
    }

    #[test]
    fn test_ball_rect_collision_centre_inside_defaults_up() {
        let rect = Rect::new(100.0, 60.0, 68.0, 22.0);
        let result = ball_rect_collision(Vec2::new(120.0, 70.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(0.0, -1.0));
        assert!((result.penetration - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_walls_force_velocity_inward() {
        let mut ball = moving_ball(Vec2::new(3.0, 300.0), Vec2::new(-200.0, 100.0));
        let contact = resolve_walls(&mut ball, 800.0, 600.0, 223.606_8);
        assert!(contact.bounced && !contact.fell_out);
        assert_eq!(ball.pos.x, 8.0);
        assert!(ball.vel.x > 0.0);

        let mut ball = moving_ball(Vec2::new(797.0, 300.0), Vec2::new(200.0, 0.0));
        resolve_walls(&mut ball, 800.0, 600.0, 200.0);
        assert_eq!(ball.pos.x, 792.0);
        assert!(ball.vel.x < 0.0);

        let mut ball = moving_ball(Vec2::new(400.0, 2.0), Vec2::new(0.0, -200.0));
        resolve_walls(&mut ball, 800.0, 600.0, 200.0);
        assert_eq!(ball.pos.y, 8.0);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_wall_sign_set_keeps_inward_velocity() {
        // Already heading back inside: sign stays positive, not flipped again
        let mut ball = moving_ball(Vec2::new(4.0, 300.0), Vec2::new(150.0, 0.0));
        resolve_walls(&mut ball, 800.0, 600.0, 150.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_bottom_reports_loss_without_bounce() {
        let mut ball = moving_ball(Vec2::new(400.0, 609.0), Vec2::new(0.0, 300.0));
        let contact = resolve_walls(&mut ball, 800.0, 600.0, 300.0);
        assert!(contact.fell_out);
        assert!(!contact.bounced);
        assert!(ball.vel.y > 0.0);

        // Touching the bottom edge is not yet a loss
        let mut ball = moving_ball(Vec2::new(400.0, 605.0), Vec2::new(0.0, 300.0));
        assert!(!resolve_walls(&mut ball, 800.0, 600.0, 300.0).fell_out);
    }

    #[test]
    fn test_paddle_centre_hit_goes_straight_up() {
        let p = paddle();
        let mut ball = moving_ball(Vec2::new(p.centre_x(), 550.0), Vec2::new(50.0, 300.0));
        assert!(resolve_paddle(&mut ball, &p, SPEED));
        assert!(ball.vel.x.abs() < 1e-3);
        assert!(ball.vel.y < 0.0);
        assert!((ball.speed() - SPEED).abs() < 1e-3);
        assert_eq!(ball.pos.y, 555.0 - 8.0 - 0.5);
    }

    #[test]
    fn test_paddle_edge_hits_leave_at_75_degrees() {
        for (offset, sign) in [(1.0f32, 1.0f32), (-1.0, -1.0)] {
            let vel = paddle_bounce_velocity(offset, SPEED);
            let from_vertical = vel.x.atan2(-vel.y).to_degrees();
            assert!((from_vertical - 75.0 * sign).abs() < 1e-3);
            assert!(vel.y < 0.0);
        }

        // Beyond the paddle edge the offset saturates
        let p = paddle();
        assert_eq!(paddle_hit_offset(p.x - 5.0, &p), -1.0);
        assert_eq!(paddle_hit_offset(p.x + p.width() + 5.0, &p), 1.0);
        assert_eq!(paddle_hit_offset(p.centre_x() + 30.0, &p), 0.5);
    }

    #[test]
    fn test_paddle_ignores_rising_ball() {
        let p = paddle();
        let mut ball = moving_ball(Vec2::new(p.centre_x(), 556.0), Vec2::new(0.0, -300.0));
        assert!(!resolve_paddle(&mut ball, &p, SPEED));
        assert_eq!(ball.vel, Vec2::new(0.0, -300.0));
    }

    #[test]
    fn test_paddle_miss_outside_expanded_bounds() {
        let p = paddle();
        let mut ball = moving_ball(Vec2::new(p.x - 9.0, 560.0), Vec2::new(0.0, 300.0));
        assert!(!resolve_paddle(&mut ball, &p, SPEED));
        let mut ball = moving_ball(Vec2::new(p.centre_x(), 546.0), Vec2::new(0.0, 300.0));
        assert!(!resolve_paddle(&mut ball, &p, SPEED));
        let mut ball = moving_ball(Vec2::new(p.centre_x(), 547.5), Vec2::new(0.0, 300.0));
        assert!(resolve_paddle(&mut ball, &p, SPEED));
    }

    #[test]
    fn test_brick_hit_reflects_and_scores() {
        let mut grid = BrickGrid::from_bricks(vec![brick_at(100.0, 60.0)]);
        let mut ball = moving_ball(Vec2::new(130.0, 87.0), Vec2::new(0.0, -SPEED));
        let contact = resolve_bricks(&mut ball, &mut grid, SPEED);

        assert_eq!(contact.damaged, vec![0]);
        assert_eq!(contact.destroyed, vec![0]);
        assert_eq!(contact.points, 60);
        assert!(contact.reflected);
        assert_eq!(grid.remaining(), 0);
        assert!((ball.vel - Vec2::new(0.0, SPEED)).length() < 1e-3);
        // Pushed out by penetration (3) plus slop
        assert!((ball.pos.y - 90.5).abs() < 1e-4);
    }

    #[test]
    fn test_straddling_two_bricks_reflects_once() {
        // Two bricks sharing a 4px gap at x = 168..172
        let mut grid = BrickGrid::from_bricks(vec![brick_at(100.0, 60.0), brick_at(172.0, 60.0)]);
        let start = Vec2::new(170.0, 86.0);
        let incoming = Vec2::new(0.0, -SPEED);
        let mut ball = moving_ball(start, incoming);

        let contact = resolve_bricks(&mut ball, &mut grid, SPEED);
        assert_eq!(contact.damaged, vec![0, 1]);
        assert_eq!(contact.destroyed, vec![0, 1]);
        assert_eq!(contact.points, 120);
        assert_eq!(grid.remaining(), 0);

        // Only the first brick's normal was applied
        let normal = (start - Vec2::new(168.0, 82.0)).normalize();
        let expected = reflect_velocity(incoming, normal);
        assert!((ball.vel - expected).length() < 1e-3);
        let twice = reflect_velocity(expected, (start - Vec2::new(172.0, 82.0)).normalize());
        assert!((ball.vel - twice).length() > 1.0);
    }

    #[test]
    fn test_destroyed_bricks_are_ignored() {
        let mut grid = BrickGrid::from_bricks(vec![brick_at(100.0, 60.0)]);
        grid.hit(0);
        let mut ball = moving_ball(Vec2::new(130.0, 87.0), Vec2::new(0.0, -SPEED));
        let contact = resolve_bricks(&mut ball, &mut grid, SPEED);
        assert!(contact.is_empty());
        assert_eq!(ball.vel, Vec2::new(0.0, -SPEED));
    }

    #[test]
    fn test_multi_hit_brick_survives_but_still_reflects() {
        let tough = Brick::new(Rect::new(100.0, 60.0, 68.0, 22.0), Rgb::new(220, 45, 45), 2, 120);
        let mut grid = BrickGrid::from_bricks(vec![tough]);
        let mut ball = moving_ball(Vec2::new(130.0, 87.0), Vec2::new(0.0, -SPEED));
        let contact = resolve_bricks(&mut ball, &mut grid, SPEED);
        assert_eq!(contact.damaged, vec![0]);
        assert!(contact.destroyed.is_empty());
        assert_eq!(contact.points, 0);
        assert!(contact.reflected);
        assert_eq!(grid.bricks()[0].hp(), 1);
    }

    proptest! {
        /// Property: every collision response leaves the ball at the target speed
        #[test]
        fn prop_responses_restore_target_speed(
            x in -20.0f32..820.0,
            y in -20.0f32..620.0,
            angle in 0.0f32..std::f32::consts::TAU,
            drift in 0.5f32..2.0,
            target in 200.0f32..600.0,
        ) {
            let vel = Vec2::new(angle.cos(), angle.sin()) * target * drift;
            let config = crate::config::GameConfig::default();
            let mut grid = BrickGrid::build(&config, 1);
            let p = paddle();

            let mut ball = moving_ball(Vec2::new(x, y), vel);
            if resolve_walls(&mut ball, 800.0, 600.0, target).bounced {
                prop_assert!((ball.speed() - target).abs() < 1e-3 * target);
            }

            let mut ball = moving_ball(Vec2::new(x, y), vel);
            if resolve_paddle(&mut ball, &p, target) {
                prop_assert!((ball.speed() - target).abs() < 1e-3 * target);
                prop_assert!(ball.vel.y < 0.0);
            }

            let mut ball = moving_ball(Vec2::new(x, y), vel);
            if resolve_bricks(&mut ball, &mut grid, target).reflected {
                prop_assert!((ball.speed() - target).abs() < 1e-3 * target);
            }
        }

        /// Property: paddle bounces stay within 75° of vertical and always rise
        #[test]
        fn prop_paddle_bounce_angle_bounded(offset in -3.0f32..3.0, speed in 100.0f32..600.0) {
            let vel = paddle_bounce_velocity(offset, speed);
            let from_vertical = vel.x.atan2(-vel.y).to_degrees();
            prop_assert!(from_vertical.abs() <= 75.0 + 1e-3);
            prop_assert!(vel.y < 0.0);
            prop_assert!((vel.length() - speed).abs() < 1e-3 * speed);
        }
    }
}
