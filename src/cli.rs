use clap::Parser;

use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "LAPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Display refresh period while running, in milliseconds
    #[arg(
        long,
        env = "LAPWATCH_TICK_MS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    #[arg(long, env = "LAPWATCH_WIDTH", default_value_t = 360.0, value_parser = parse_dimension)]
    pub width: f32,

    #[arg(long, env = "LAPWATCH_HEIGHT", default_value_t = 640.0, value_parser = parse_dimension)]
    pub height: f32,
}

/// Window dimensions must be finite and positive.
fn parse_dimension(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{} is not a positive size", s))
    }
}

impl Arguments {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["lapwatch"]).unwrap();
        assert_eq!(args.tick_period(), Duration::from_millis(30));
        assert_eq!(args.log_filter(), "warn");
        assert_eq!(args.width, 360.0);
        assert_eq!(args.height, 640.0);
    }

    #[test]
    fn test_verbosity() {
        let args = Arguments::try_parse_from(["lapwatch", "-vv", "--tick-ms", "16"]).unwrap();
        assert_eq!(args.log_filter(), "debug");
        assert_eq!(args.tick_period(), Duration::from_millis(16));
    }

    #[test]
    fn test_window_size() {
        let args =
            Arguments::try_parse_from(["lapwatch", "--width", "480", "--height=800.5"]).unwrap();
        assert_eq!(args.width, 480.0);
        assert_eq!(args.height, 800.5);
    }

    #[test]
    fn test_bad_window_size_rejected() {
        for bad in ["0", "-5", "NaN", "inf", "wide"] {
            let width = format!("--width={}", bad);
            assert!(Arguments::try_parse_from(["lapwatch", width.as_str()]).is_err());
            let height = format!("--height={}", bad);
            assert!(Arguments::try_parse_from(["lapwatch", height.as_str()]).is_err());
        }
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Arguments::try_parse_from(["lapwatch", "--tick-ms", "0"]).is_err());
    }
}
