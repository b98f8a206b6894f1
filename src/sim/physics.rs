//! Player integration and axis-separated collision resolution
//!
//! Horizontal motion is resolved first and is all-or-nothing: a move that
//! would overlap any obstacle is dropped for the tick. Vertical motion then
//! snaps the player onto obstacle tops (falling) or under obstacle bottoms
//! (rising). The ground clamp runs last and overrides both.

use std::collections::VecDeque;

use super::geometry::{Aabb, overlaps};
use super::state::{Obstacle, Player};
use crate::config::SimConfig;
use crate::input::Actions;

/// What happened to the player during one resolution step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsEvents {
    /// Jump impulse applied this tick
    pub jumped: bool,
    /// Came to rest on top of an obstacle
    pub landed: bool,
    /// Hit the underside of an obstacle while rising
    pub bonked: bool,
    /// Horizontal move rejected by an obstacle
    pub blocked: bool,
    /// Standing on (or clamped to) the ground line
    pub grounded_by_floor: bool,
}

/// Horizontal velocity for the held actions
pub fn horizontal_speed(actions: Actions, config: &SimConfig) -> f32 {
    let speed = if actions.contains(Actions::RUN) {
        config.run_speed
    } else {
        config.walk_speed
    };

    // Right wins when both directions are held
    if actions.contains(Actions::RIGHT) {
        speed
    } else if actions.contains(Actions::LEFT) {
        -speed
    } else {
        0.0
    }
}

/// Bounds of every obstacle overlapping `body`
fn hits(body: Aabb, obstacles: &VecDeque<Obstacle>) -> impl Iterator<Item = Aabb> + '_ {
    obstacles
        .iter()
        .map(|o| o.bounds())
        .filter(move |b| overlaps(&body, b))
}

/// Advance the player by one tick against the live obstacles
///
/// `camera_x` is the camera position from the previous tick; the player is
/// never allowed left of it.
pub fn resolve_player(
    player: &mut Player,
    obstacles: &VecDeque<Obstacle>,
    camera_x: f32,
    actions: Actions,
    config: &SimConfig,
) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();

    // --- Horizontal ---
    player.vel.x = horizontal_speed(actions, config);
    if player.vel.x != 0.0 {
        let next_x = player.pos.x + player.vel.x;
        let candidate = player.bounds().with_position(next_x, player.pos.y);
        if obstacles.iter().any(|o| overlaps(&candidate, &o.bounds())) {
            events.blocked = true;
        } else {
            player.pos.x = next_x;
        }
    }

    // --- Vertical ---
    if actions.contains(Actions::JUMP) && player.on_ground {
        player.vel.y = -config.jump_impulse;
        player.on_ground = false;
        events.jumped = true;
    }

    let start_y = player.pos.y;
    player.pos.y += player.vel.y;

    // Falling rests on the highest overlapping top; rising stops under the
    // lowest overlapping bottom
    let mut contact = false;
    if player.vel.y > 0.0 {
        if let Some(top) = hits(player.bounds(), obstacles)
            .map(|b| b.top())
            .reduce(f32::min)
        {
            contact = true;
            player.pos.y = top - player.size.y;
            player.vel.y = 0.0;
            player.on_ground = true;
            events.landed = true;
        }
    } else if player.vel.y < 0.0 {
        if let Some(bottom) = hits(player.bounds(), obstacles)
            .map(|b| b.bottom())
            .reduce(f32::max)
        {
            contact = true;
            player.pos.y = bottom;
            player.vel.y = 0.0;
            events.bonked = true;
        }
    } else {
        contact = hits(player.bounds(), obstacles).next().is_some();
    }

    // A snap that lands inside a neighbour falls back to the start of the step
    if contact && hits(player.bounds(), obstacles).next().is_some() {
        player.pos.y = start_y;
        player.vel.y = 0.0;
        events.landed = false;
    }

    if !contact && !player.on_ground {
        player.vel.y += config.gravity;
    }

    // Ground clamp wins over any obstacle outcome above
    let ground = config.ground_line();
    if player.pos.y >= ground {
        player.pos.y = ground;
        player.vel.y = 0.0;
        player.on_ground = true;
        events.grounded_by_floor = true;
    } else if !events.landed {
        player.on_ground = false;
    }

    // Never fall behind the trailing camera edge
    if player.pos.x < camera_x {
        player.pos.x = camera_x;
    }

    if events.jumped || events.landed || events.bonked {
        log::trace!(
            "player events {:?} at ({:.1}, {:.1}) vel ({:.1}, {:.1})",
            events,
            player.pos.x,
            player.pos.y,
            player.vel.x,
            player.vel.y
        );
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (SimConfig, Player, VecDeque<Obstacle>) {
        let config = SimConfig::default();
        let player = Player::spawn(&config);
        (config, player, VecDeque::new())
    }

    #[test]
    fn test_walk_and_run_speeds() {
        let (config, mut player, obstacles) = setup();

        resolve_player(&mut player, &obstacles, 0.0, Actions::RIGHT, &config);
        assert!((player.pos.x - 102.2).abs() < 1e-4);

        resolve_player(&mut player, &obstacles, 0.0, Actions::RIGHT | Actions::RUN, &config);
        assert!((player.pos.x - 106.4).abs() < 1e-4);

        resolve_player(&mut player, &obstacles, 0.0, Actions::LEFT, &config);
        assert!((player.pos.x - 104.2).abs() < 1e-4);
    }

    #[test]
    fn test_right_wins_over_left() {
        let (config, _, _) = setup();
        let speed = horizontal_speed(Actions::LEFT | Actions::RIGHT, &config);
        assert_eq!(speed, config.walk_speed);
        assert_eq!(horizontal_speed(Actions::JUMP, &config), 0.0);
    }

    #[test]
    fn test_horizontal_move_fully_rejected() {
        let (config, mut player, mut obstacles) = setup();
        // Block whose left face touches the player's right face
        obstacles.push_back(Obstacle::new(132.0, 366.0, 40.0, 24.0));

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::RIGHT, &config);
        assert!(events.blocked);
        assert_eq!(player.pos.x, 100.0);

        // Moving away is allowed
        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::LEFT, &config);
        assert!(!events.blocked);
        assert!(player.pos.x < 100.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let (config, mut player, obstacles) = setup();

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::JUMP, &config);
        assert!(events.jumped);
        assert!(!player.on_ground);
        assert_eq!(player.pos.y, 342.0 - 12.0);
        // Gravity already applied once at the end of the jump tick
        assert!((player.vel.y - (-12.0 + 0.7)).abs() < 1e-4);

        let mut ticks = 1;
        while !player.on_ground {
            let before = player.vel.y;
            resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
            if !player.on_ground {
                assert!((player.vel.y - (before + 0.7)).abs() < 1e-4);
            }
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(player.pos.y, config.ground_line());
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_holding_jump_in_air_does_nothing() {
        let (config, mut player, obstacles) = setup();
        resolve_player(&mut player, &obstacles, 0.0, Actions::JUMP, &config);
        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::JUMP, &config);
        assert!(!events.jumped);
        assert!(player.vel.y > -12.0);
    }

    #[test]
    fn test_landing_on_obstacle() {
        let (config, mut player, mut obstacles) = setup();
        // Block under the player, top at y=330
        obstacles.push_back(Obstacle::new(90.0, 330.0, 60.0, 60.0));
        player.pos.y = 280.0;
        player.vel.y = 5.0;
        player.on_ground = false;

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
        assert!(events.landed);
        assert!(player.on_ground);
        assert_eq!(player.pos.y, 330.0 - 48.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_resting_on_obstacle_is_stable() {
        let (config, mut player, mut obstacles) = setup();
        obstacles.push_back(Obstacle::new(90.0, 330.0, 60.0, 60.0));
        player.pos.y = 282.0;
        player.vel.y = 0.0;
        player.on_ground = true;

        resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
        assert_eq!(player.pos.y, 282.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_bonk_under_obstacle() {
        let (config, mut player, mut obstacles) = setup();
        // Ceiling block 10 units above the player's head
        obstacles.push_back(Obstacle::new(90.0, 300.0, 60.0, 32.0));

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::JUMP, &config);
        assert!(events.jumped);
        assert!(events.bonked);
        assert_eq!(player.pos.y, 332.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_ground_clamp_overrides_obstacle() {
        let (config, mut player, mut obstacles) = setup();
        // Block whose top sits below the ground line
        obstacles.push_back(Obstacle::new(90.0, 395.0, 60.0, 40.0));
        player.pos.y = 330.0;
        player.vel.y = 40.0;
        player.on_ground = false;

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
        assert!(events.landed);
        assert!(events.grounded_by_floor);
        assert_eq!(player.pos.y, config.ground_line());
        assert!(player.on_ground);
    }

    #[test]
    fn test_straddling_lands_on_taller_obstacle() {
        let (config, mut player, mut obstacles) = setup();
        // Flush pair: short block, then a taller one; the player spans both
        obstacles.push_back(Obstacle::new(100.0, 350.0, 40.0, 40.0));
        obstacles.push_back(Obstacle::new(140.0, 320.0, 40.0, 70.0));
        player.pos = Vec2::new(120.0, 270.0);
        player.vel.y = 40.0;
        player.on_ground = false;

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
        assert!(events.landed);
        assert!(player.on_ground);
        assert_eq!(player.pos.y, 320.0 - 48.0);
        assert!(obstacles.iter().all(|o| !overlaps(&player.bounds(), &o.bounds())));

        // Still free to walk or jump afterwards
        let mut walker = player.clone();
        let events = resolve_player(&mut walker, &obstacles, 0.0, Actions::RIGHT, &config);
        assert!(!events.blocked);
        assert!(walker.pos.x > 120.0);
        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::JUMP, &config);
        assert!(events.jumped);
    }

    #[test]
    fn test_snap_into_neighbour_reverts_step() {
        let (config, mut player, mut obstacles) = setup();
        // Floor block below, floating block clipping the landing spot
        obstacles.push_back(Obstacle::new(100.0, 340.0, 60.0, 50.0));
        obstacles.push_back(Obstacle::new(140.0, 260.0, 60.0, 40.0));
        player.pos = Vec2::new(110.0, 200.0);
        player.vel.y = 100.0;
        player.on_ground = false;

        let events = resolve_player(&mut player, &obstacles, 0.0, Actions::empty(), &config);
        assert!(!events.landed);
        assert!(!player.on_ground);
        assert_eq!(player.pos.y, 200.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(obstacles.iter().all(|o| !overlaps(&player.bounds(), &o.bounds())));
    }

    #[test]
    fn test_walking_off_ledge_becomes_airborne() {
        let (config, mut player, mut obstacles) = setup();
        obstacles.push_back(Obstacle::new(0.0, 330.0, 100.0, 60.0));
        player.pos = Vec2::new(120.0, 282.0);
        player.on_ground = true;

        resolve_player(&mut player, &obstacles, 0.0, Actions::RIGHT, &config);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_left_clamp_to_camera() {
        let (config, mut player, obstacles) = setup();
        player.pos.x = 501.0;
        resolve_player(&mut player, &obstacles, 500.0, Actions::LEFT | Actions::RUN, &config);
        assert_eq!(player.pos.x, 500.0);
    }
}
