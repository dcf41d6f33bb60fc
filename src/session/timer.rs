use std::time::Instant;

/// Wall-clock exercise timer. The periodic UI tick only triggers redraws;
/// every elapsed value is computed from the origin instant, so the coarse
/// poll interval never leaks into the WPM math.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    origin: Option<Instant>,
    frozen_secs: f64,
}

impl Timer {
    /// Record the origin instant. No-op if already running.
    pub fn start(&mut self) {
        if self.origin.is_none() {
            self.origin = Some(Instant::now());
        }
    }

    /// Freeze the elapsed value at the moment of stopping.
    pub fn stop(&mut self) {
        if let Some(origin) = self.origin.take() {
            self.frozen_secs = origin.elapsed().as_secs_f64();
        }
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.frozen_secs = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    pub fn elapsed_secs(&self) -> f64 {
        match self.origin {
            Some(origin) => origin.elapsed().as_secs_f64(),
            None => self.frozen_secs,
        }
    }
}

/// Words per minute, rounded. Zero when either input is zero.
pub fn words_per_minute(word_count: usize, elapsed_secs: f64) -> u32 {
    if word_count == 0 || elapsed_secs <= 0.0 {
        return 0;
    }
    (word_count as f64 / (elapsed_secs / 60.0)).round() as u32
}

/// MM:SS display form of an elapsed duration.
pub fn format_elapsed(elapsed_secs: f64) -> String {
    let total = elapsed_secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wpm_is_zero_when_either_input_is_zero() {
        assert_eq!(words_per_minute(0, 60.0), 0);
        assert_eq!(words_per_minute(25, 0.0), 0);
        assert_eq!(words_per_minute(0, 0.0), 0);
    }

    #[test]
    fn wpm_rounds_to_nearest() {
        assert_eq!(words_per_minute(10, 60.0), 10);
        assert_eq!(words_per_minute(7, 30.0), 14);
        // 5 words in 70s = 4.285... -> 4
        assert_eq!(words_per_minute(5, 70.0), 4);
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut timer = Timer::default();
        timer.start();
        let first = timer.origin;
        timer.start();
        assert_eq!(timer.origin, first);
    }

    #[test]
    fn stop_freezes_and_reset_zeroes() {
        let mut timer = Timer::default();
        timer.start();
        timer.stop();
        assert!(!timer.is_running());
        let frozen = timer.elapsed_secs();
        assert_eq!(timer.elapsed_secs(), frozen);

        timer.reset();
        assert_eq!(timer.elapsed_secs(), 0.0);
    }

    #[test]
    fn elapsed_is_zero_before_first_start() {
        let timer = Timer::default();
        assert_eq!(timer.elapsed_secs(), 0.0);
    }

    #[test]
    fn format_elapsed_pads_minutes_and_seconds() {
        assert_eq!(format_elapsed(0.0), "00:00");
        assert_eq!(format_elapsed(75.4), "01:15");
        assert_eq!(format_elapsed(600.0), "10:00");
    }
}
