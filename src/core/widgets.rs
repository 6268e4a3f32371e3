use crate::core::scene::{Graphic, Point};

/// A labelled rectangle that reports clicks only while active.
#[derive(Clone, Debug)]
pub struct Button {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub label: String,
    active: bool,
    drawn: bool,
}

impl Button {
    /// Builds the button already drawn and inactive.
    pub fn new(center: Point, width: f64, height: f64, label: impl Into<String>) -> Self {
        Self {
            center,
            width,
            height,
            label: label.into(),
            active: false,
            drawn: true,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Corners as (min, max), independent of axis orientation.
    pub fn bounds(&self) -> (Point, Point) {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        (
            Point::new(self.center.x - hw, self.center.y - hh),
            Point::new(self.center.x + hw, self.center.y + hh),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        let (min, max) = self.bounds();
        min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y
    }

    pub fn clicked(&self, p: Point) -> bool {
        self.active && self.contains(p)
    }
}

impl Graphic for Button {
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

/// Single-line text field.
#[derive(Clone, Debug)]
pub struct Entry {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    text: String,
    focused: bool,
}

impl Entry {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            text: String::new(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn contains(&self, p: Point) -> bool {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        (p.x - self.center.x).abs() <= hw && (p.y - self.center.y).abs() <= hh
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, Entry};
    use crate::core::scene::Point;

    #[test]
    fn inactive_button_ignores_clicks() {
        let mut b = Button::new(Point::new(200.0, 10.0), 10.0, 20.0, "");
        let center = Point::new(200.0, 10.0);
        assert!(!b.clicked(center));
        b.activate();
        assert!(b.clicked(center));
        b.deactivate();
        assert!(!b.clicked(center));
    }

    #[test]
    fn click_region_is_the_closed_rectangle() {
        let mut b = Button::new(Point::new(200.0, 10.0), 10.0, 20.0, "");
        b.activate();
        assert!(b.clicked(Point::new(195.0, 0.0)));
        assert!(b.clicked(Point::new(205.0, 20.0)));
        assert!(!b.clicked(Point::new(205.1, 10.0)));
        assert!(!b.clicked(Point::new(200.0, -0.1)));
    }

    #[test]
    fn entry_editing() {
        let mut e = Entry::new(Point::new(3.0, 1.0), 1.5, 0.4);
        e.set_text("45.0");
        e.backspace();
        e.push_char('5');
        e.push_char('\u{8}');
        assert_eq!(e.text(), "45.5");
        assert!(e.contains(Point::new(3.5, 1.1)));
        assert!(!e.contains(Point::new(1.0, 1.0)));
    }
}
