//! Headless renderer that records draw calls

use super::{Color, Font, Renderer, Sprite, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    DrawImage {
        sprite: Sprite,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        color: Color,
        align: TextAlign,
    },
}

/// Collects every draw call of a frame in order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn sprite_count(&self, sprite: Sprite) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { sprite: s, .. } if *s == sprite))
            .count()
    }

    /// Text of the last overlay message drawn, if any
    pub fn overlay_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::DrawImage { sprite, x, y, w, h });
    }

    fn fill_overlay_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &Font,
        color: Color,
        align: TextAlign,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: *font,
            color,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{colors, draw};
    use crate::sim::GameState;

    #[test]
    fn test_menu_frame() {
        let state = GameState::with_defaults();
        let mut r = RecordingRenderer::new();
        draw(&state, &mut r);

        assert_eq!(
            r.commands[0],
            DrawCommand::Clear {
                x: 0.0,
                y: 0.0,
                w: 832.0,
                h: 832.0
            }
        );
        assert_eq!(r.sprite_count(Sprite::Ball), 1);
        assert_eq!(r.sprite_count(Sprite::Brick), 0);
        assert_eq!(r.overlay_text(), Some("Press Space to start"));
        assert!(r.commands.contains(&DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            w: 832.0,
            h: 832.0,
            color: colors::BACKDROP_OPAQUE,
        }));
    }

    #[test]
    fn test_running_frame_has_entities_and_no_overlay() {
        let mut state = GameState::with_defaults();
        state.start();
        let mut r = RecordingRenderer::new();
        draw(&state, &mut r);

        assert_eq!(r.sprite_count(Sprite::Brick), 39);
        assert_eq!(r.overlay_text(), None);
        assert!(r.commands.contains(&DrawCommand::FillRect {
            x: 341.0,
            y: 792.0,
            w: 150.0,
            h: 30.0,
            color: colors::PADDLE,
        }));
    }

    #[test]
    fn test_paused_and_game_over_overlays() {
        let mut state = GameState::with_defaults();
        state.start();
        state.toggle_pause();
        let mut r = RecordingRenderer::new();
        draw(&state, &mut r);
        let commands = r.take();
        assert!(r.commands.is_empty());
        match commands.last() {
            Some(DrawCommand::Text {
                text, x, y, align, ..
            }) => {
                assert_eq!(text, "Paused");
                assert_eq!((*x, *y), (416.0, 436.0));
                assert_eq!(*align, TextAlign::Center);
            }
            other => panic!("expected overlay text, got {:?}", other),
        }

        state.lives = 0;
        state.update(16.0);
        draw(&state, &mut r);
        assert_eq!(r.overlay_text(), Some("Game Over"));
    }
}
