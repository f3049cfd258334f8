//! Collision response for axis-aligned rectangles
//!
//! Edge-based resolution: once two rectangles overlap, each edge of the
//! obstacle close enough to the mover's opposite edge pushes the mover flush
//! against it and inverts the matching velocity component. Edges are tested
//! independently, so a corner hit can flip both axes in one call.

use glam::Vec2;

use super::rect::Rect;

/// Result of resolving a moving rectangle against a box or the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether any edge correction was applied
    pub hit: bool,
    /// Corrected top-left position of the mover
    pub position: Vec2,
    /// Corrected velocity of the mover
    pub velocity: Vec2,
    /// Mover crossed the bottom window edge while falling (window checks only)
    pub exited_bottom: bool,
}

impl CollisionResult {
    pub fn miss(position: Vec2, velocity: Vec2) -> Self {
        Self {
            hit: false,
            position,
            velocity,
            exited_bottom: false,
        }
    }
}

/// Resolve `mover` (moving with `velocity`) against a stationary `obstacle`
///
/// `threshold` decides which obstacle edges count as touched. Edges only
/// correct the mover if it is moving into them.
pub fn resolve_box_collision(
    mover: Rect,
    velocity: Vec2,
    obstacle: &Rect,
    threshold: f32,
) -> CollisionResult {
    let mut result = CollisionResult::miss(mover.position, velocity);
    if !mover.overlaps(obstacle) {
        return result;
    }

    // Sides are named from the obstacle's perspective
    let col_left = (mover.right() - obstacle.left()).abs() < threshold;
    let col_right = (mover.left() - obstacle.right()).abs() < threshold;
    let col_top = (mover.bottom() - obstacle.top()).abs() < threshold;
    let col_bottom = (mover.top() - obstacle.bottom()).abs() < threshold;

    if col_top && result.velocity.y > 0.0 {
        result.position.y = obstacle.top() - mover.size.y;
        result.velocity.y = -result.velocity.y;
        result.hit = true;
    }
    if col_bottom && result.velocity.y < 0.0 {
        result.position.y = obstacle.bottom();
        result.velocity.y = -result.velocity.y;
        result.hit = true;
    }
    if col_left && result.velocity.x > 0.0 {
        result.position.x = obstacle.left() - mover.size.x;
        result.velocity.x = -result.velocity.x;
        result.hit = true;
    }
    if col_right && result.velocity.x < 0.0 {
        result.position.x = obstacle.right();
        result.velocity.x = -result.velocity.x;
        result.hit = true;
    }

    result
}

/// Keep `mover` inside the window, bouncing off each edge it moves past
///
/// Edges are checked in order and each check sees the corrections made by
/// the ones before it.
pub fn resolve_window_collision(mover: Rect, velocity: Vec2, window_size: Vec2) -> CollisionResult {
    let mut result = CollisionResult::miss(mover.position, velocity);
    let size = mover.size;

    if result.position.x <= 0.0 && result.velocity.x < 0.0 {
        result.position.x = 0.0;
        result.velocity.x = -result.velocity.x;
        result.hit = true;
    }
    if result.position.x + size.x >= window_size.x && result.velocity.x > 0.0 {
        result.position.x = window_size.x - size.x;
        result.velocity.x = -result.velocity.x;
        result.hit = true;
    }
    // Top edge is strict: resting exactly at y == 0 is not a bounce
    if result.position.y < 0.0 && result.velocity.y < 0.0 {
        result.position.y = 0.0;
        result.velocity.y = -result.velocity.y;
        result.hit = true;
    }
    if result.position.y + size.y >= window_size.y && result.velocity.y > 0.0 {
        result.position.y = window_size.y - size.y;
        result.velocity.y = -result.velocity.y;
        result.hit = true;
        result.exited_bottom = true;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLISION_THRESHOLD;

    const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

    fn ball_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::splat(50.0))
    }

    #[test]
    fn test_top_edge_bounce() {
        let obstacle = Rect::new(Vec2::new(50.0, 300.0), Vec2::new(200.0, 40.0));
        // Ball bottom sits 12 units into the box top
        let ball = ball_at(100.0, obstacle.top() - 50.0 + 12.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(200.0, 200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert!(result.hit);
        assert_eq!(result.position.y, obstacle.top() - 50.0);
        assert_eq!(result.velocity.y, -200.0);
        // Horizontal untouched
        assert_eq!(result.position.x, 100.0);
        assert_eq!(result.velocity.x, 200.0);
    }

    #[test]
    fn test_no_correction_when_moving_away() {
        let obstacle = Rect::new(Vec2::new(50.0, 300.0), Vec2::new(200.0, 40.0));
        let ball = ball_at(100.0, obstacle.top() - 50.0 + 12.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(200.0, -200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert!(!result.hit);
        assert_eq!(result.position, ball.position);
        assert_eq!(result.velocity, Vec2::new(200.0, -200.0));
    }

    #[test]
    fn test_corner_hit_flips_both_axes() {
        let obstacle = Rect::new(Vec2::new(300.0, 300.0), Vec2::new(80.0, 50.0));
        // Ball's bottom-right corner 5 units into the box's top-left corner
        let ball = ball_at(255.0, 255.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(200.0, 200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert_eq!(result.position, Vec2::new(250.0, 250.0));
        assert_eq!(result.velocity, Vec2::new(-200.0, -200.0));
    }

    #[test]
    fn test_deep_overlap_is_not_resolved() {
        // Edges are all beyond the threshold: overlap without correction
        let obstacle = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0));
        let ball = ball_at(75.0, 75.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(200.0, 200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_separated_rects_miss() {
        let obstacle = Rect::new(Vec2::new(300.0, 300.0), Vec2::new(80.0, 50.0));
        let ball = ball_at(0.0, 0.0);
        let result = resolve_box_collision(
            ball,
            Vec2::new(200.0, 200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert_eq!(
            result,
            CollisionResult::miss(ball.position, Vec2::new(200.0, 200.0))
        );
    }

    #[test]
    fn test_bottom_edge_bounce() {
        let obstacle = Rect::new(Vec2::new(300.0, 300.0), Vec2::new(80.0, 50.0));
        // Ball top 10 units into the box bottom, rising
        let ball = ball_at(310.0, 340.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(0.0, -200.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert!(result.hit);
        assert_eq!(result.position, Vec2::new(310.0, obstacle.bottom()));
        assert_eq!(result.velocity, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_right_edge_bounce() {
        let obstacle = Rect::new(Vec2::new(300.0, 300.0), Vec2::new(80.0, 50.0));
        // Ball left 10 units into the box right side, heading left
        let ball = ball_at(370.0, 310.0);

        let result = resolve_box_collision(
            ball,
            Vec2::new(-200.0, 0.0),
            &obstacle,
            COLLISION_THRESHOLD,
        );
        assert!(result.hit);
        assert_eq!(result.position, Vec2::new(obstacle.right(), 310.0));
        assert_eq!(result.velocity, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_window_left_and_right() {
        let result =
            resolve_window_collision(ball_at(-3.0, 100.0), Vec2::new(-200.0, 0.0), WINDOW);
        assert_eq!(result.position.x, 0.0);
        assert_eq!(result.velocity.x, 200.0);

        let result =
            resolve_window_collision(ball_at(760.0, 100.0), Vec2::new(200.0, 0.0), WINDOW);
        assert_eq!(result.position.x, 750.0);
        assert_eq!(result.velocity.x, -200.0);
        assert!(!result.exited_bottom);
    }

    #[test]
    fn test_window_narrower_than_ball_applies_edges_in_sequence() {
        // Left bounce puts the ball past the right edge, which bounces it back
        let result = resolve_window_collision(
            ball_at(-1.0, 100.0),
            Vec2::new(-200.0, 0.0),
            Vec2::new(40.0, 600.0),
        );
        assert_eq!(result.position.x, -10.0);
        assert_eq!(result.velocity.x, -200.0);

        // Same on the vertical axis, ending with a bottom exit
        let result = resolve_window_collision(
            ball_at(100.0, -1.0),
            Vec2::new(0.0, -200.0),
            Vec2::new(800.0, 40.0),
        );
        assert_eq!(result.position.y, -10.0);
        assert_eq!(result.velocity.y, -200.0);
        assert!(result.exited_bottom);
    }

    #[test]
    fn test_window_top_is_strict() {
        let result =
            resolve_window_collision(ball_at(100.0, 0.0), Vec2::new(0.0, -200.0), WINDOW);
        assert!(!result.hit);

        let result =
            resolve_window_collision(ball_at(100.0, -1.0), Vec2::new(0.0, -200.0), WINDOW);
        assert_eq!(result.position.y, 0.0);
        assert_eq!(result.velocity.y, 200.0);
    }

    #[test]
    fn test_window_bottom_exit() {
        let result =
            resolve_window_collision(ball_at(100.0, 550.0), Vec2::new(0.0, 200.0), WINDOW);
        assert!(result.exited_bottom);
        assert_eq!(result.position.y, 550.0);
        assert_eq!(result.velocity.y, -200.0);

        // Rising past the bottom line is not an exit
        let result =
            resolve_window_collision(ball_at(100.0, 560.0), Vec2::new(0.0, -200.0), WINDOW);
        assert!(!result.exited_bottom);
    }
}
