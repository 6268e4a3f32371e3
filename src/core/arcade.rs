use crate::core::constants::{ANGLE_STEP_DEG, HEIGHT_STEP_M, SPEED_STEP_MPS};
use crate::core::launcher::Launcher;
use crate::core::log::log_info;
use crate::core::scene::Graphic;
use crate::core::shot::ShotTracker;
use crate::core::window::Playfield;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AngleUp,
    AngleDown,
    SpeedUp,
    SpeedDown,
    HeightUp,
    HeightDown,
    Fire,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running { hit: bool },
    Quit,
}

/// State of the free-running game: any number of shots in the air, aimed from
/// the keyboard at a target that jumps elsewhere once it is hit.
pub struct ProjectileApp {
    launcher: Launcher,
    shots: Vec<ShotTracker>,
    playfield: Playfield,
    hits: u32,
}

impl ProjectileApp {
    pub fn new() -> Self {
        Self {
            launcher: Launcher::new(),
            shots: Vec::new(),
            playfield: Playfield::default(),
            hits: 0,
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut Launcher {
        &mut self.launcher
    }

    pub fn shots(&self) -> &[ShotTracker] {
        &self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// One frame: move every shot, apply the pending command, then score hits
    /// against the shots that survived the move.
    pub fn tick(&mut self, dt: f64, command: Option<Command>) -> TickOutcome {
        self.update_shots(dt);

        if let Some(command) = command {
            if command == Command::Quit {
                log_info(&format!("Quitting after {} hit(s)", self.hits));
                return TickOutcome::Quit;
            }
            self.apply(command);
        }

        let hit = self.take_hits();
        if hit {
            self.hits += 1;
            let target = self.launcher.target_mut();
            target.deactivate();
            target.undraw();
            self.launcher.draw_target();
            let center = self.launcher.target().center;
            log_info(&format!(
                "Target hit ({} so far); new target at ({:.0}, {:.0})",
                self.hits, center.x, center.y
            ));
        }

        TickOutcome::Running { hit }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AngleUp => self.launcher.adj_angle(ANGLE_STEP_DEG),
            Command::AngleDown => self.launcher.adj_angle(-ANGLE_STEP_DEG),
            Command::SpeedUp => self.launcher.adj_speed(SPEED_STEP_MPS),
            Command::SpeedDown => self.launcher.adj_speed(-SPEED_STEP_MPS),
            Command::HeightUp => self.launcher.adj_height(HEIGHT_STEP_M),
            Command::HeightDown => self.launcher.adj_height(-HEIGHT_STEP_M),
            Command::Fire => {
                let aim = self.launcher.aim();
                log_info(&format!(
                    "Fire: angle {:.1} deg, velocity {:.1} m/s, height {:.1} m",
                    aim.angle_deg, aim.speed_mps, aim.height_m
                ));
                self.shots.push(self.launcher.fire());
            }
            Command::Quit => {}
        }
    }

    /// Advance all shots, then keep only those still in play.
    pub fn update_shots(&mut self, dt: f64) {
        for shot in &mut self.shots {
            shot.update(dt);
        }
        let playfield = self.playfield;
        self.shots.retain_mut(|shot| {
            let alive = playfield.contains(shot.x(), shot.y());
            if !alive {
                shot.undraw();
            }
            alive
        });
    }

    /// Remove every live shot inside the target. Returns whether any was.
    fn take_hits(&mut self) -> bool {
        let target = self.launcher.target();
        let before = self.shots.len();
        self.shots.retain_mut(|shot| {
            if target.clicked(shot.position()) {
                shot.undraw();
                false
            } else {
                true
            }
        });
        self.shots.len() != before
    }
}

impl Default for ProjectileApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, ProjectileApp, TickOutcome};
    use crate::core::constants::ARCADE_DT_S;
    use crate::core::scene::Point;

    #[test]
    fn keys_adjust_the_launcher() {
        let mut app = ProjectileApp::new();
        app.tick(ARCADE_DT_S, Some(Command::AngleUp));
        app.tick(ARCADE_DT_S, Some(Command::SpeedDown));
        app.tick(ARCADE_DT_S, Some(Command::HeightUp));
        app.tick(ARCADE_DT_S, Some(Command::HeightUp));
        let launcher = app.launcher();
        assert!((launcher.angle_deg() - 50.0).abs() < 1e-9);
        assert_eq!(launcher.speed_mps(), 35.0);
        assert_eq!(launcher.height_m(), 10.0);

        app.tick(ARCADE_DT_S, Some(Command::AngleDown));
        assert!((app.launcher().angle_deg() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = ProjectileApp::new();
        assert_eq!(app.tick(ARCADE_DT_S, None), TickOutcome::Running { hit: false });
        assert_eq!(app.tick(ARCADE_DT_S, Some(Command::Quit)), TickOutcome::Quit);
    }

    #[test]
    fn shots_fly_independently_and_drop_out_of_play() {
        let mut app = ProjectileApp::new();
        // Keep the target out of the way.
        app.launcher_mut().place_target(Point::new(100.0, 145.0));
        app.tick(ARCADE_DT_S, Some(Command::Fire));
        for _ in 0..10 {
            app.tick(ARCADE_DT_S, None);
        }
        app.tick(ARCADE_DT_S, Some(Command::Fire));
        assert_eq!(app.shots().len(), 2);
        assert!(app.shots()[0].x() > app.shots()[1].x());

        let mut frames = 0;
        while !app.shots().is_empty() {
            app.tick(ARCADE_DT_S, None);
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(app.hits(), 0);
    }

    #[test]
    fn hit_removes_shot_and_moves_target() {
        let mut app = ProjectileApp::new();
        // A 45 deg, 40 m/s shot from the ground passes about (82, 41) at t = 2.9 s.
        let t = 87.0 * ARCADE_DT_S;
        let vx = 40.0 * 45f64.to_radians().cos();
        let x = vx * t;
        let y = vx * t - 4.9 * t * t;
        app.launcher_mut().place_target(Point::new(x, y));

        app.tick(ARCADE_DT_S, Some(Command::Fire));
        let mut hit_at = None;
        for frame in 0..200 {
            if let TickOutcome::Running { hit: true } = app.tick(ARCADE_DT_S, None) {
                hit_at = Some(frame);
                break;
            }
        }

        assert!(hit_at.is_some(), "shot never reached the target");
        assert!(app.shots().is_empty());
        assert_eq!(app.hits(), 1);
        let target = app.launcher().target();
        assert!(target.is_active());
        assert!((100.0..=200.0).contains(&target.center.x));
    }
}
