use macroquad::prelude::*;

use crate::core::constants::{DISABLED_INK_COLOR, INK_COLOR};
use crate::core::scene::{Circle, Graphic, Line, Point, Ruler, Text};
use crate::core::widgets::{Button, Entry};
use crate::core::window::WorldCoords;

const LABEL_FONT_SIZE: f32 = 18.0;
const ARROW_HEAD_PX: f32 = 12.0;

/// A world coordinate system drawn into a rectangle of the screen.
///
/// With no viewport the whole window is used, re-read every frame so resizes
/// are followed.
pub struct GraphWin {
    coords: WorldCoords,
    viewport: Option<Rect>,
}

impl GraphWin {
    pub fn new(coords: WorldCoords) -> Self {
        Self {
            coords,
            viewport: None,
        }
    }

    pub fn with_viewport(coords: WorldCoords, viewport: Rect) -> Self {
        Self {
            coords,
            viewport: Some(viewport),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
            .unwrap_or_else(|| Rect::new(0.0, 0.0, screen_width(), screen_height()))
    }

    pub fn to_screen(&self, p: Point) -> Vec2 {
        let view = self.viewport();
        let (sx, sy) = self.coords.to_screen(p, f64::from(view.w), f64::from(view.h));
        vec2(view.x + sx as f32, view.y + sy as f32)
    }

    pub fn to_world(&self, screen: Vec2) -> Point {
        let view = self.viewport();
        self.coords.to_world(
            f64::from(screen.x - view.x),
            f64::from(screen.y - view.y),
            f64::from(view.w),
            f64::from(view.h),
        )
    }

    fn scale(&self) -> (f32, f32) {
        let view = self.viewport();
        (
            self.coords.x_scale(f64::from(view.w)) as f32,
            self.coords.y_scale(f64::from(view.h)) as f32,
        )
    }

    /// World position of a left click made this frame inside the viewport.
    pub fn mouse_click(&self) -> Option<Point> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let (mx, my) = mouse_position();
        let screen = vec2(mx, my);
        self.viewport()
            .contains(screen)
            .then(|| self.to_world(screen))
    }

    pub fn fill(&self, color: Color) {
        let view = self.viewport();
        draw_rectangle(view.x, view.y, view.w, view.h, color);
    }

    pub fn draw_circle(&self, circle: &Circle) {
        if !circle.is_drawn() {
            return;
        }
        let c = self.to_screen(circle.center);
        let (sx, _) = self.scale();
        let r = (circle.radius as f32 * sx).max(1.0);
        if let Some(fill) = circle.fill {
            draw_circle(c.x, c.y, r, fill);
        }
        draw_circle_lines(c.x, c.y, r, 1.0, circle.outline);
    }

    pub fn draw_line(&self, line: &Line) {
        if !line.is_drawn() {
            return;
        }
        let a = self.to_screen(line.p1);
        let b = self.to_screen(line.p2);
        draw_line(a.x, a.y, b.x, b.y, line.width, line.color);

        if line.arrow_head {
            let dir = (b - a).normalize_or_zero();
            if dir.length_squared() > 0.0 {
                let back = b - dir * ARROW_HEAD_PX;
                let side = vec2(-dir.y, dir.x) * (ARROW_HEAD_PX * 0.5);
                draw_triangle(b, back + side, back - side, line.color);
            }
        }
    }

    pub fn draw_text(&self, text: &Text) {
        if !text.is_drawn() {
            return;
        }
        self.draw_centered(&text.label, text.anchor, text.color);
    }

    fn draw_centered(&self, label: &str, anchor: Point, color: Color) {
        let at = self.to_screen(anchor);
        let size = measure_text(label, None, LABEL_FONT_SIZE as u16, 1.0);
        draw_text(
            label,
            at.x - size.width * 0.5,
            at.y + size.height * 0.5,
            LABEL_FONT_SIZE,
            color,
        );
    }

    fn world_rect(&self, center: Point, width: f64, height: f64) -> Rect {
        let a = self.to_screen(Point::new(center.x - width / 2.0, center.y - height / 2.0));
        let b = self.to_screen(Point::new(center.x + width / 2.0, center.y + height / 2.0));
        Rect::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    pub fn draw_button(&self, button: &Button) {
        if !button.is_drawn() {
            return;
        }
        let rect = self.world_rect(button.center, button.width, button.height);
        let (ink, thickness) = if button.is_active() {
            (INK_COLOR, 2.0)
        } else {
            (DISABLED_INK_COLOR, 1.0)
        };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::new(0.83, 0.83, 0.83, 1.0));
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, ink);
        if !button.label.is_empty() {
            self.draw_centered(&button.label, button.center, ink);
        }
    }

    pub fn draw_entry(&self, entry: &Entry) {
        let rect = self.world_rect(entry.center, entry.width, entry.height);
        let border = if entry.is_focused() { BLUE } else { INK_COLOR };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, WHITE);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.5, border);

        let shown = if entry.is_focused() {
            format!("{}|", entry.text())
        } else {
            entry.text().to_string()
        };
        let size = measure_text(&shown, None, LABEL_FONT_SIZE as u16, 1.0);
        draw_text(
            &shown,
            rect.x + 4.0,
            rect.y + (rect.h + size.height) * 0.5,
            LABEL_FONT_SIZE,
            INK_COLOR,
        );
    }

    pub fn draw_ruler(&self, ruler: &Ruler) {
        self.draw_line(&ruler.baseline);
        for tick in &ruler.ticks {
            self.draw_line(tick);
        }
        for label in &ruler.labels {
            self.draw_text(label);
        }
    }
}
