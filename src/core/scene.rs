//! Retained drawables. Owners keep these as plain data and the renderer
//! paints whatever is currently drawn.

use macroquad::prelude::Color;

use crate::core::constants::{
    INK_COLOR, TICK_HEIGHT_M, TICK_LABEL_Y, TICK_SPACING_M, WORLD_MAX_X, WORLD_MIN_X,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub trait Graphic {
    fn draw(&mut self);
    /// Hide the shape. Hiding an already hidden shape does nothing.
    fn undraw(&mut self);
    fn is_drawn(&self) -> bool;
    fn move_by(&mut self, dx: f64, dy: f64);
}

#[derive(Clone, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Option<Color>,
    pub outline: Color,
    drawn: bool,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: None,
            outline: INK_COLOR,
            drawn: false,
        }
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    pub fn set_outline(&mut self, color: Color) {
        self.outline = color;
    }
}

impl Graphic for Circle {
    fn draw(&mut self) {
        self.drawn = true;
    }

    fn undraw(&mut self) {
        self.drawn = false;
    }

    fn is_drawn(&self) -> bool {
        self.drawn
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }
}

#[derive(Clone, Debug)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub width: f32,
    pub arrow_head: bool,
    pub color: Color,
    drawn: bool,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            width: 1.0,
            arrow_head: false,
            color: INK_COLOR,
            drawn: false,
        }
    }

    /// Put an arrow head on the `p2` end.
    pub fn set_arrow(&mut self, arrow_head: bool) {
        self.arrow_head = arrow_head;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Graphic for Line {
    fn draw(&mut self) {
        self.drawn = true;
    }

    fn undraw(&mut self) {
        self.drawn = false;
    }

    fn is_drawn(&self) -> bool {
        self.drawn
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.p1.x += dx;
        self.p1.y += dy;
        self.p2.x += dx;
        self.p2.y += dy;
    }
}

#[derive(Clone, Debug)]
pub struct Text {
    pub anchor: Point,
    pub label: String,
    pub color: Color,
    drawn: bool,
}

impl Text {
    pub fn new(anchor: Point, label: impl Into<String>) -> Self {
        Self {
            anchor,
            label: label.into(),
            color: INK_COLOR,
            drawn: false,
        }
    }
}

impl Graphic for Text {
    fn draw(&mut self) {
        self.drawn = true;
    }

    fn undraw(&mut self) {
        self.drawn = false;
    }

    fn is_drawn(&self) -> bool {
        self.drawn
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.anchor.x += dx;
        self.anchor.y += dy;
    }
}

/// Ground line with distance ticks every 50 m.
pub struct Ruler {
    pub baseline: Line,
    pub ticks: Vec<Line>,
    pub labels: Vec<Text>,
}

impl Ruler {
    pub fn new() -> Self {
        let mut baseline = Line::new(Point::new(WORLD_MIN_X, 0.0), Point::new(WORLD_MAX_X, 0.0));
        baseline.draw();

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        for x in (0..WORLD_MAX_X as usize).step_by(TICK_SPACING_M) {
            let xf = x as f64;
            let mut tick = Line::new(Point::new(xf, 0.0), Point::new(xf, TICK_HEIGHT_M));
            tick.draw();
            ticks.push(tick);

            let mut label = Text::new(Point::new(xf, TICK_LABEL_Y), x.to_string());
            label.draw();
            labels.push(label);
        }

        Self {
            baseline,
            ticks,
            labels,
        }
    }
}

impl Default for Ruler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Circle, Graphic, Line, Point, Ruler};

    #[test]
    fn undraw_is_idempotent() {
        let mut c = Circle::new(Point::new(0.0, 2.0), 3.0);
        assert!(!c.is_drawn());
        c.draw();
        c.undraw();
        c.undraw();
        assert!(!c.is_drawn());
        c.draw();
        assert!(c.is_drawn());
    }

    #[test]
    fn move_is_relative() {
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        line.move_by(2.0, -1.0);
        assert_eq!(line.p1, Point::new(2.0, -1.0));
        assert_eq!(line.p2, Point::new(3.0, 0.0));
    }

    #[test]
    fn ruler_ticks_every_fifty_metres() {
        let ruler = Ruler::new();
        let labels: Vec<&str> = ruler.labels.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "50", "100", "150", "200"]);
        assert_eq!(ruler.ticks.len(), 5);
        assert!(ruler.baseline.is_drawn());
        assert!(ruler.labels.iter().all(|t| t.anchor.y == -7.0));
    }
}
