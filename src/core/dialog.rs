use crate::core::ballistics::LaunchInputs;
use crate::core::error::{InputError, parse_number};
use crate::core::scene::{Graphic, Point, Text};
use crate::core::widgets::{Button, Entry};
use crate::core::window::WorldCoords;

const ENTRY_WIDTH: f64 = 1.5;
const ENTRY_HEIGHT: f64 = 0.45;
const BUTTON_WIDTH: f64 = 1.25;
const BUTTON_HEIGHT: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    Fire,
    Quit,
}

/// Form for the three launch parameters, with Fire! and Quit buttons.
///
/// Laid out in its own coordinates, `(0, 4.5)` to `(4, 0.5)`, so rows count
/// downwards from the top.
pub struct InputDialog {
    pub labels: Vec<Text>,
    pub entries: [Entry; 3],
    pub fire: Button,
    pub quit: Button,
    error: Option<InputError>,
}

impl InputDialog {
    pub const FIELDS: [&'static str; 3] = ["angle", "velocity", "height"];

    pub fn coords() -> WorldCoords {
        WorldCoords::new(0.0, 4.5, 4.0, 0.5)
    }

    pub fn new(initial: LaunchInputs) -> Self {
        let rows = ["Angle", "Velocity", "Height"];
        let values = [initial.angle_deg, initial.speed_mps, initial.height_m];

        let labels = rows
            .iter()
            .zip(1i32..)
            .map(|(name, row)| {
                let mut label = Text::new(Point::new(1.0, f64::from(row)), *name);
                label.draw();
                label
            })
            .collect();

        let entries = [0i32, 1, 2].map(|i| {
            let mut entry = Entry::new(
                Point::new(3.0, f64::from(i + 1)),
                ENTRY_WIDTH,
                ENTRY_HEIGHT,
            );
            entry.set_text(format!("{:?}", values[i as usize]));
            entry
        });

        let mut fire = Button::new(Point::new(1.0, 4.0), BUTTON_WIDTH, BUTTON_HEIGHT, "Fire!");
        fire.activate();
        let mut quit = Button::new(Point::new(3.0, 4.0), BUTTON_WIDTH, BUTTON_HEIGHT, "Quit");
        quit.activate();

        Self {
            labels,
            entries,
            fire,
            quit,
            error: None,
        }
    }

    /// Handle a click at `p`, in dialog coordinates.
    ///
    /// Returns the chosen button, or `None` when the click only moved focus
    /// or landed on nothing.
    pub fn click(&mut self, p: Point) -> Option<DialogChoice> {
        if self.quit.clicked(p) {
            return Some(DialogChoice::Quit);
        }
        if self.fire.clicked(p) {
            return Some(DialogChoice::Fire);
        }
        if let Some(hit) = self.entries.iter().position(|e| e.contains(p)) {
            self.focus(hit);
        }
        None
    }

    pub fn focused(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_focused)
    }

    pub fn focus(&mut self, index: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.set_focused(i == index);
        }
    }

    pub fn focus_next(&mut self) {
        let next = self.focused().map_or(0, |i| (i + 1) % self.entries.len());
        self.focus(next);
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(i) = self.focused() {
            self.entries[i].push_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(i) = self.focused() {
            self.entries[i].backspace();
        }
    }

    /// Read the three fields as `(angle, velocity, height)`.
    pub fn values(&self) -> Result<LaunchInputs, InputError> {
        let [angle, speed, height] = &self.entries;
        Ok(LaunchInputs::new(
            parse_number(Self::FIELDS[0], angle.text())?,
            parse_number(Self::FIELDS[1], speed.text())?,
            parse_number(Self::FIELDS[2], height.text())?,
        ))
    }

    pub fn set_error(&mut self, error: InputError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogChoice, InputDialog};
    use crate::core::ballistics::LaunchInputs;
    use crate::core::error::InputError;
    use crate::core::scene::Point;

    fn dialog() -> InputDialog {
        InputDialog::new(LaunchInputs::new(45.0, 40.0, 2.0))
    }

    #[test]
    fn prefilled_values_parse_back() {
        let d = dialog();
        assert_eq!(d.entries[0].text(), "45.0");
        assert_eq!(d.values(), Ok(LaunchInputs::new(45.0, 40.0, 2.0)));
    }

    #[test]
    fn buttons_report_choices() {
        let mut d = dialog();
        assert_eq!(d.click(Point::new(1.0, 4.0)), Some(DialogChoice::Fire));
        assert_eq!(d.click(Point::new(3.2, 3.9)), Some(DialogChoice::Quit));
        assert_eq!(d.click(Point::new(2.0, 4.0)), None);
    }

    #[test]
    fn clicking_an_entry_focuses_it_for_typing() {
        let mut d = dialog();
        assert_eq!(d.focused(), None);
        assert_eq!(d.click(Point::new(3.0, 2.0)), None);
        assert_eq!(d.focused(), Some(1));

        for _ in 0..4 {
            d.backspace();
        }
        for ch in "55".chars() {
            d.type_char(ch);
        }
        assert_eq!(d.values().map(|v| v.speed_mps), Ok(55.0));

        d.focus_next();
        assert_eq!(d.focused(), Some(2));
        d.focus_next();
        assert_eq!(d.focused(), Some(0));
    }

    #[test]
    fn malformed_field_is_reported_by_name() {
        let mut d = dialog();
        d.entries[2].set_text("high");
        let err = d.values().expect_err("height is not numeric");
        assert_eq!(err, InputError::invalid_number("height", "high"));

        d.set_error(err);
        assert!(d.error().is_some());
        d.clear_error();
        assert!(d.error().is_none());
    }
}
