use std::time::{Duration, Instant};

/// Sleeps out the rest of each frame so the loop runs at most `fps` times a
/// second.
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(fps: f64) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1.0)),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time still owed to the current frame.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame.saturating_sub(now.duration_since(self.last))
    }

    pub fn wait(&mut self) {
        let pause = self.remaining(Instant::now());
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::FramePacer;

    #[test]
    fn owes_nothing_once_the_frame_has_passed() {
        let pacer = FramePacer::new(50.0);
        assert_eq!(pacer.frame_duration(), Duration::from_millis(20));
        let late = Instant::now() + Duration::from_millis(25);
        assert!(pacer.remaining(late).is_zero());
    }

    #[test]
    fn wait_spaces_frames() {
        let mut pacer = FramePacer::new(100.0);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
