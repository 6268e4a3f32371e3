use crate::core::ballistics::LaunchInputs;
use crate::core::constants::{DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS, DIALOG_DEFAULT_HEIGHT_M};
use crate::core::log::log_info;
use crate::core::scene::Circle;
use crate::core::shot::ShotTracker;
use crate::core::window::Playfield;

enum Phase {
    AwaitingInput,
    TrackingShot(ShotTracker),
    Finished,
}

/// One shot at a time: ask for launch parameters, follow the shot until it
/// leaves the field, ask again.
pub struct SingleShotSession {
    phase: Phase,
    last_inputs: LaunchInputs,
    playfield: Playfield,
    spent: Vec<Circle>,
}

impl SingleShotSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingInput,
            last_inputs: LaunchInputs::new(
                DEFAULT_ANGLE_DEG,
                DEFAULT_SPEED_MPS,
                DIALOG_DEFAULT_HEIGHT_M,
            ),
            playfield: Playfield::default(),
            spent: Vec::new(),
        }
    }

    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.phase, Phase::AwaitingInput)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Parameters of the latest shot, used to prefill the next dialog.
    pub fn last_inputs(&self) -> LaunchInputs {
        self.last_inputs
    }

    pub fn shot(&self) -> Option<&ShotTracker> {
        match &self.phase {
            Phase::TrackingShot(shot) => Some(shot),
            _ => None,
        }
    }

    /// Markers of shots that already came down. They stay where they landed.
    pub fn spent(&self) -> &[Circle] {
        &self.spent
    }

    pub fn fire(&mut self, inputs: LaunchInputs) {
        if !self.is_awaiting_input() {
            return;
        }
        log_info(&format!(
            "Firing: angle {:.1} deg, velocity {:.1} m/s, height {:.1} m",
            inputs.angle_deg, inputs.speed_mps, inputs.height_m
        ));
        self.last_inputs = inputs;
        self.phase = Phase::TrackingShot(ShotTracker::launch(inputs));
    }

    pub fn quit(&mut self) {
        self.phase = Phase::Finished;
    }

    /// Advance a tracked shot by `dt` if it is still in play. Returns whether
    /// a shot is still being tracked afterwards.
    pub fn step(&mut self, dt: f64) -> bool {
        let in_play = match &mut self.phase {
            Phase::TrackingShot(shot) => {
                if self.playfield.contains(shot.x(), shot.y()) {
                    shot.update(dt);
                }
                self.playfield.contains(shot.x(), shot.y())
            }
            _ => return false,
        };
        if in_play {
            return true;
        }

        if let Phase::TrackingShot(shot) = std::mem::replace(&mut self.phase, Phase::AwaitingInput)
        {
            log_info(&format!(
                "Shot finished at x={:.2} m, y={:.2} m",
                shot.x(),
                shot.y()
            ));
            self.spent.push(shot.into_marker());
        }
        false
    }
}

impl Default for SingleShotSession {
    fn default() -> Self {
        Self::new()
    }
}
