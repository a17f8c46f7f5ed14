//! Rendering
//!
//! The game draws through the `Renderer` trait: solid fills, sprite blits and
//! overlay text. Backends live in submodules.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use recorder::{DrawCommand, RecordingRenderer};

use crate::sim::{GamePhase, GameState};

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(0, 0, 0, 0.5)`
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PADDLE: Color = Color::rgb(0, 255, 255);
    /// Fallback fills when a sprite image is unavailable
    pub const BALL: Color = Color::rgb(255, 255, 255);
    pub const BRICK: Color = Color::rgb(200, 60, 40);
    pub const BACKDROP_DIM: Color = Color::rgba(0, 0, 0, 0.5);
    pub const BACKDROP_OPAQUE: Color = Color::rgb(0, 0, 0);
    pub const OVERLAY_TEXT: Color = Color::rgba(255, 255, 255, 0.5);
}

/// Image handles the renderer resolves to loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ball,
    Brick,
}

impl Sprite {
    /// DOM id of the `<img>` element backing this sprite
    pub fn element_id(self) -> &'static str {
        match self {
            Sprite::Ball => "img_ball",
            Sprite::Brick => "img_brick",
        }
    }

    pub fn fallback_color(self) -> Color {
        match self {
            Sprite::Ball => colors::BALL,
            Sprite::Brick => colors::BRICK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub bold: bool,
    pub family: &'static str,
}

impl Font {
    pub const fn bold(size_px: u32) -> Self {
        Self {
            size_px,
            bold: true,
            family: "Arial",
        }
    }

    /// CSS font shorthand, e.g. `bold 100px Arial`
    pub fn to_css(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size_px, self.family)
        } else {
            format!("{}px {}", self.size_px, self.family)
        }
    }
}

/// Drawing surface the game renders onto, once per frame
pub trait Renderer {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn fill_overlay_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &Font,
        color: Color,
        align: TextAlign,
    );
}

/// Full-screen message shown over the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub text: &'static str,
    pub font: Font,
    pub backdrop: Color,
}

/// The overlay for a phase. Active play has none.
pub fn overlay_for(phase: GamePhase) -> Option<Overlay> {
    match phase {
        GamePhase::Running | GamePhase::NewLevel => None,
        GamePhase::Paused => Some(Overlay {
            text: "Paused",
            font: Font::bold(100),
            backdrop: colors::BACKDROP_DIM,
        }),
        GamePhase::Menu => Some(Overlay {
            text: "Press Space to start",
            font: Font::bold(50),
            backdrop: colors::BACKDROP_OPAQUE,
        }),
        GamePhase::GameOver => Some(Overlay {
            text: "Game Over",
            font: Font::bold(100),
            backdrop: colors::BACKDROP_DIM,
        }),
    }
}

/// Draw one frame: entities, then the phase overlay
pub fn draw<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let field = state.config.playfield;
    renderer.clear(0.0, 0.0, field.width, field.height);

    let ball = &state.ball;
    renderer.draw_image(Sprite::Ball, ball.pos.x, ball.pos.y, ball.size, ball.size);

    let paddle = &state.paddle;
    renderer.fill_rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.width,
        paddle.height,
        colors::PADDLE,
    );

    for brick in &state.bricks {
        renderer.draw_image(
            Sprite::Brick,
            brick.pos.x,
            brick.pos.y,
            brick.width,
            brick.height,
        );
    }

    if let Some(overlay) = overlay_for(state.phase) {
        renderer.fill_rect(0.0, 0.0, field.width, field.height, overlay.backdrop);
        renderer.fill_overlay_text(
            overlay.text,
            field.width / 2.0,
            field.height / 2.0 + 20.0,
            &overlay.font,
            colors::OVERLAY_TEXT,
            TextAlign::Center,
        );
    }
}
