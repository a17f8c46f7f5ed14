//! Canvas 2D backend (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Font, Renderer, Sprite, TextAlign};

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    ball_image: Option<HtmlImageElement>,
    brick_image: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    /// Bind to `canvas`, looking sprite images up by element id
    pub fn new(document: &Document, canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let image = |sprite: Sprite| {
            let img = document
                .get_element_by_id(sprite.element_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
            if img.is_none() {
                log::warn!("No <img id=\"{}\">, using solid fill", sprite.element_id());
            }
            img
        };

        Some(Self {
            ball_image: image(Sprite::Ball),
            brick_image: image(Sprite::Brick),
            ctx,
        })
    }

    fn image_for(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        let img = match sprite {
            Sprite::Ball => self.ball_image.as_ref(),
            Sprite::Brick => self.brick_image.as_ref(),
        };
        // Not decoded yet: fall back to a fill for this frame
        img.filter(|i| i.complete() && i.natural_width() > 0)
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        let Some(img) = self.image_for(sprite) else {
            self.fill_rect(x, y, w, h, sprite.fallback_color());
            return;
        };
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img, x as f64, y as f64, w as f64, h as f64,
        ) {
            log::warn!("drawImage failed for {:?}: {:?}", sprite, e);
        }
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
        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
