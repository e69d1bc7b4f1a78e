use log::LevelFilter;
use std::env;

/// Environment variable that turns on debug output when set to exactly `1`.
pub const DEBUG_VARIABLE: &str = "DEBUG";

/// Settings read once at startup and fixed for the rest of the process.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_debug_value(env::var(DEBUG_VARIABLE).ok().as_deref())
    }

    fn from_debug_value(value: Option<&str>) -> Config {
        Config {
            debug: value == Some("1"),
        }
    }

    /// The requested level, raised to at least `Debug` in debug mode.
    pub fn log_level(&self, requested: LevelFilter) -> LevelFilter {
        if self.debug {
            requested.max(LevelFilter::Debug)
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_one_enables_debug() {
        assert!(Config::from_debug_value(Some("1")).debug);
        assert!(!Config::from_debug_value(Some("true")).debug);
        assert!(!Config::from_debug_value(Some("01")).debug);
        assert!(!Config::from_debug_value(Some("")).debug);
        assert!(!Config::from_debug_value(None).debug);
    }

    #[test]
    fn debug_mode_raises_quiet_levels() {
        let config = Config { debug: true };

        assert_eq!(config.log_level(LevelFilter::Error), LevelFilter::Debug);
        assert_eq!(config.log_level(LevelFilter::Trace), LevelFilter::Trace);
    }

    #[test]
    fn normal_mode_keeps_requested_level() {
        let config = Config::default();

        assert_eq!(config.log_level(LevelFilter::Warn), LevelFilter::Warn);
    }
}
