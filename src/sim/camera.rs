//! One-directional follow camera
//!
//! The camera only scrolls right, and only once the player passes the
//! horizontal middle of the viewport.

use super::state::Player;

/// Horizontal scroll state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World x of the viewport's left edge
    pub x: f32,
    pub viewport_width: f32,
}

impl Camera {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            x: 0.0,
            viewport_width,
        }
    }

    /// Player x at which the camera starts to follow
    #[inline]
    pub fn follow_threshold(&self, player_width: f32) -> f32 {
        self.x + self.viewport_width / 2.0 - player_width / 2.0
    }

    /// Advance the camera so the player stays at or left of center
    pub fn follow(&mut self, player: &Player) {
        if player.pos.x > self.follow_threshold(player.size.x) {
            self.x = player.pos.x - self.viewport_width / 2.0 + player.size.x / 2.0;
        }
    }

    #[inline]
    pub fn world_to_screen(&self, world_x: f32) -> f32 {
        world_x - self.x
    }

    /// Visible world span as (left, right)
    pub fn visible_range(&self) -> (f32, f32) {
        (self.x, self.x + self.viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_camera_holds_until_center() {
        let mut camera = Camera::new(800.0);
        let mut player = Player::spawn(&SimConfig::default());

        // Threshold = 0 + 400 - 16
        player.pos.x = 384.0;
        camera.follow(&player);
        assert_eq!(camera.x, 0.0);

        player.pos.x = 400.0;
        camera.follow(&player);
        assert_eq!(camera.x, 16.0);
    }

    #[test]
    fn test_camera_never_moves_back() {
        let mut camera = Camera::new(800.0);
        let mut player = Player::spawn(&SimConfig::default());

        player.pos.x = 1000.0;
        camera.follow(&player);
        let advanced = camera.x;
        assert_eq!(advanced, 616.0);

        player.pos.x = 700.0;
        camera.follow(&player);
        assert_eq!(camera.x, advanced);
    }

    #[test]
    fn test_world_to_screen() {
        let camera = Camera {
            x: 250.0,
            viewport_width: 800.0,
        };
        assert_eq!(camera.world_to_screen(300.0), 50.0);
        assert_eq!(camera.visible_range(), (250.0, 1050.0));
    }
}
