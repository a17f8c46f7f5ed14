//! Collision side detection between the ball and rectangles
//!
//! The ball is treated as a square. When it overlaps a target, the hit face is
//! chosen as the side with the LARGEST of four raw edge distances (not the
//! smallest penetration). Corner and fast hits can be attributed to the far
//! face; gameplay depends on this exact metric, so keep it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Face of the target rectangle a hit is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Evaluation order; earlier sides win ties
    pub const ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Top and bottom hits reflect the vertical velocity component
    #[inline]
    pub fn is_horizontal_face(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Raw edge distances in `Side::ORDER`:
/// ball bottom vs target top, ball left vs target right,
/// ball top vs target bottom, ball right vs target left.
pub fn side_distances(ball: &Rect, target: &Rect) -> [f32; 4] {
    [
        (ball.bottom() - target.top()).abs(),
        (ball.left() - target.right()).abs(),
        (ball.top() - target.bottom()).abs(),
        (ball.right() - target.left()).abs(),
    ]
}

/// Check which side of `target` a square ball overlaps, if any
pub fn detect_collision_side(ball_pos: Vec2, ball_size: f32, target: &Rect) -> Option<Side> {
    let ball = Rect::square(ball_pos, ball_size);
    if !ball.overlaps(target) {
        return None;
    }

    let distances = side_distances(&ball, target);
    let mut best = 0;
    for (i, &d) in distances.iter().enumerate().skip(1) {
        // Strict comparison keeps the first maximum
        if d > distances[best] {
            best = i;
        }
    }
    Some(Side::ORDER[best])
}
