//! Scene drawing - game state in, pixels out
//!
//! No game logic is performed here; this module only translates the
//! simulation state into colored rectangles in a fixed z-order (sky,
//! pipes, power-up, ground, bird, HUD) and presents the buffer.

use std::io::{self, Write};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

use super::framebuffer::{draw_text, draw_text_centered, PixelBuf, Rgb};

// ── Palette ──────────────────────────────────────────────────────────────

const SKY_TOP: Rgb = Rgb(78, 192, 202);
const SKY_BOTTOM: Rgb = Rgb(190, 232, 245);
const GRASS: Rgb = Rgb(115, 191, 87);
const DIRT: Rgb = Rgb(222, 184, 135);
const DIRT_DARK: Rgb = Rgb(196, 158, 108);
const PIPE_BODY: Rgb = Rgb(94, 201, 72);
const PIPE_EDGE: Rgb = Rgb(58, 132, 42);
const BIRD_BODY: Rgb = Rgb(255, 201, 60);
const BIRD_WING: Rgb = Rgb(228, 160, 20);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(235, 90, 40);
const POWER_UP: Rgb = Rgb(186, 85, 255);
const TEXT: Rgb = Rgb(255, 255, 255);
const TEXT_SHADOW: Rgb = Rgb(25, 25, 25);

// High-contrast variants: flat dark sky, plain bright entities
const HC_SKY: Rgb = Rgb(0, 0, 0);
const HC_GROUND: Rgb = Rgb(200, 200, 200);
const HC_PIPE: Rgb = Rgb(0, 255, 0);
const HC_BIRD: Rgb = Rgb(255, 255, 0);

/// Renders the simulation into a half-block pixel buffer sized to the
/// terminal, scaling the fixed world space to whatever is available.
pub struct TermRenderer {
    buf: PixelBuf,
}

impl TermRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2, SKY_TOP),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf
            .resize(cols as usize, rows as usize * 2, SKY_TOP);
    }

    /// Horizontal world-to-pixel scale
    fn sx(&self) -> f32 {
        self.buf.width() as f32 / WORLD_WIDTH
    }

    /// Vertical world-to-pixel scale
    fn sy(&self) -> f32 {
        self.buf.height() as f32 / WORLD_HEIGHT
    }

    fn px(&self, x: f32) -> i32 {
        (x * self.sx()).round() as i32
    }

    fn py(&self, y: f32) -> i32 {
        (y * self.sy()).round() as i32
    }

    /// Paint a world-space rect, clipped to the buffer
    fn blit_rect(&mut self, rect: &Rect, color: Rgb) {
        let x = self.px(rect.left());
        let y = self.py(rect.top());
        let w = (self.px(rect.right()) - x).max(1);
        let h = (self.py(rect.bottom()) - y).max(1);
        self.buf.fill_rect(x, y, w, h, color);
    }

    /// Render one complete frame
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        state: &GameState,
        settings: &Settings,
        fps: u32,
    ) -> io::Result<()> {
        self.draw_sky(settings);
        self.draw_pipes(state, settings);
        if let Some(power_up) = &state.power_up {
            self.blit_rect(&power_up.rect, POWER_UP);
        }
        self.draw_ground(state, settings);
        self.draw_bird(state, settings);
        // After a death, dim the scene behind the waiting overlay
        if !state.active && state.high_score > 0 {
            self.buf.dim_all();
        }
        self.draw_hud(state, settings, fps);
        self.buf.present(out)
    }

    fn draw_sky(&mut self, settings: &Settings) {
        if settings.high_contrast {
            self.buf.fill(HC_SKY);
            return;
        }
        let floor_px = self.py(FLOOR_Y);
        for y in 0..self.buf.height() as i32 {
            let t = (y.max(0) as u32 * 256 / floor_px.max(1) as u32).min(256) as u16;
            let color = Rgb::lerp(SKY_TOP, SKY_BOTTOM, t);
            for x in 0..self.buf.width() as i32 {
                self.buf.set(x, y, color);
            }
        }
    }

    fn draw_pipes(&mut self, state: &GameState, settings: &Settings) {
        let body = if settings.high_contrast { HC_PIPE } else { PIPE_BODY };
        for pair in &state.pipes {
            for (rect, is_top) in [(&pair.top, true), (&pair.bottom, false)] {
                self.blit_rect(rect, body);
                if !settings.high_contrast {
                    // Shaded left edge, plus a lip on the gap-facing end
                    let x = self.px(rect.left());
                    let y = self.py(rect.top());
                    let w = (self.px(rect.right()) - x).max(1);
                    let h = (self.py(rect.bottom()) - y).max(1);
                    self.buf.fill_rect(x, y, 1, h, PIPE_EDGE);
                    let lip_y = if is_top { y + h - 1 } else { y };
                    self.buf.fill_rect(x, lip_y, w, 1, PIPE_EDGE);
                }
            }
        }
    }

    fn draw_ground(&mut self, state: &GameState, settings: &Settings) {
        let top = self.py(FLOOR_Y);
        let width = self.buf.width() as i32;
        let height = self.buf.height() as i32;
        if settings.high_contrast {
            self.buf.fill_rect(0, top, width, height - top, HC_GROUND);
            return;
        }
        self.buf.fill_rect(0, top, width, 2, GRASS);
        let scroll = self.px(-state.floor_x);
        for y in (top + 2)..height {
            for x in 0..width {
                let stripe = (x + scroll + (y - top) * 2).rem_euclid(12) < 6;
                self.buf.set(x, y, if stripe { DIRT } else { DIRT_DARK });
            }
        }
    }

    fn draw_bird(&mut self, state: &GameState, settings: &Settings) {
        let bird = &state.bird;
        if settings.high_contrast {
            self.blit_rect(&bird.rect, HC_BIRD);
            return;
        }

        self.blit_rect(&bird.rect, BIRD_BODY);

        let x = self.px(bird.rect.left());
        let y = self.py(bird.rect.top());
        let w = (self.px(bird.rect.right()) - x).max(2);
        let h = (self.py(bird.rect.bottom()) - y).max(2);

        // Nose-up tilt lifts the beak end, nose-down drops it
        let beak_dy = (-bird.tilt_deg() / 15.0).round().clamp(-2.0, 2.0) as i32;

        // Wing rides the animation frame: down, mid, up
        let wing_dy = match bird.anim_frame {
            0 => h / 3,
            1 => h / 4,
            _ => h / 6,
        };
        self.buf
            .fill_rect(x, y + wing_dy, (w / 2).max(1), (h / 3).max(1), BIRD_WING);

        // Eye near the leading edge
        self.buf.set(x + w - 2, y + h / 4, BIRD_EYE);
        self.buf.set(x + w - 1, y + h / 4, BIRD_PUPIL);

        // Beak pokes past the body, shifted by the tilt
        let beak_y = y + h / 2 + beak_dy;
        self.buf.fill_rect(x + w, beak_y, 2, 1.max(h / 6), BIRD_BEAK);
    }

    fn draw_hud(&mut self, state: &GameState, settings: &Settings, fps: u32) {
        let cx = self.buf.width() as i32 / 2;
        let score_y = self.py(100.0);
        let greeting_y = self.buf.height() as i32 / 2 - 3;
        let best_y = self.py(850.0);

        draw_text_centered(
            &mut self.buf,
            cx,
            score_y,
            &state.score.to_string(),
            TEXT,
            TEXT_SHADOW,
        );

        if !state.active {
            draw_text_centered(&mut self.buf, cx, greeting_y, "FLAP TO START", TEXT, TEXT_SHADOW);
            draw_text_centered(
                &mut self.buf,
                cx,
                best_y,
                &format!("BEST {}", state.high_score),
                BIRD_BODY,
                TEXT_SHADOW,
            );
        }

        if settings.show_fps {
            draw_text(&mut self.buf, 1, 1, &format!("FPS {fps}"), TEXT);
        }
    }
}
