use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn set_log_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn log_level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

pub fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{timestamp}] [{level}] {message}")
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < log_level() {
        return;
    }
    let line = format_line(level, message);
    if level >= LogLevel::Warning {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn log_debug(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::{LogLevel, format_line, log_level, set_log_level};

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line(LogLevel::Warning, "bad angle");
        assert!(line.starts_with('['));
        assert!(line.ends_with("[WARNING] bad angle"));
    }

    #[test]
    fn minimum_level_can_be_lowered_and_restored() {
        assert_eq!(log_level(), LogLevel::Info);
        set_log_level(LogLevel::Debug);
        assert_eq!(log_level(), LogLevel::Debug);
        set_log_level(LogLevel::Info);
        assert_eq!(log_level(), LogLevel::Info);
    }
}
