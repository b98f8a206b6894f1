//! Draw-list adapter for external renderers
//!
//! The simulation never draws. Hosts ask for a list of filled rectangles in
//! screen space (painter order: ground, obstacles, player) and hand it to
//! whatever backend they have. Obstacles outside the visible span are skipped.

pub mod color;

pub use color::{Color, colors};

use crate::sim::{Aabb, SimulationState};

/// A filled rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub rect: Aabb,
    pub color: Color,
}

/// Build the frame's draw commands from the final tick state
pub fn build_draw_list(state: &SimulationState) -> Vec<FillRect> {
    let config = &state.config;
    let camera = &state.camera;
    let mut list = Vec::with_capacity(state.obstacles.len() + 2);

    // Ground does not scroll
    list.push(FillRect {
        rect: Aabb::new(0.0, config.floor_y(), config.viewport_width, config.ground_height),
        color: colors::GROUND,
    });

    let (view_left, view_right) = camera.visible_range();
    for obstacle in &state.obstacles {
        let b = obstacle.bounds();
        if b.right() < view_left || b.left() >= view_right {
            continue;
        }
        list.push(FillRect {
            rect: b.with_position(camera.world_to_screen(b.left()), b.top()),
            color: colors::OBSTACLE,
        });
    }

    let p = state.player.bounds();
    list.push(FillRect {
        rect: p.with_position(camera.world_to_screen(p.left()), p.top()),
        color: colors::PLAYER,
    });

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::Obstacle;

    #[test]
    fn test_draw_order_and_offsets() {
        let mut state = SimulationState::new(SimConfig::default(), 1);
        state.camera.x = 50.0;
        state.player.pos.x = 120.0;

        let list = build_draw_list(&state);
        assert_eq!(list.len(), 5);

        assert_eq!(list[0].color, colors::GROUND);
        assert_eq!(list[0].rect, Aabb::new(0.0, 390.0, 800.0, 60.0));

        assert_eq!(list[1].color, colors::OBSTACLE);
        assert_eq!(list[1].rect.left(), 300.0);
        assert_eq!(list[1].rect.top(), state.obstacles[0].pos.y);

        let player = list.last().unwrap();
        assert_eq!(player.color, colors::PLAYER);
        assert_eq!(player.rect.left(), 70.0);
        assert_eq!(player.rect.size, state.player.size);
    }

    #[test]
    fn test_offscreen_obstacles_are_culled() {
        let mut state = SimulationState::empty(SimConfig::default(), 1);
        state.obstacles.push_back(Obstacle::new(400.0, 350.0, 40.0, 40.0));
        state.obstacles.push_back(Obstacle::new(800.0, 350.0, 40.0, 40.0));
        state.obstacles.push_back(Obstacle::new(950.0, 350.0, 40.0, 40.0));
        state.camera.x = 100.0;

        let list = build_draw_list(&state);
        let obstacles: Vec<_> = list.iter().filter(|c| c.color == colors::OBSTACLE).collect();
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[1].rect.left(), 700.0);
    }
}
