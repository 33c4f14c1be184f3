//! Simulator configuration, read from the environment with an optional
//! positional override for the day count.

pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";
pub const OUTPUT_ENV: &str = "GILDED_ROSE_OUTPUT";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    JsonLines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub days: u32,
    pub output: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: OutputFormat::default(),
        }
    }
}

impl SimConfig {
    /// Load from the process environment and command-line arguments.
    pub fn from_env() -> Self {
        Self::load(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolve configuration from `args` (program name already skipped) and
    /// an environment lookup. Invalid values are logged and replaced by the
    /// default.
    pub fn load<I, F>(args: I, env: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = env(DAYS_ENV) {
            config.days = parse_days(DAYS_ENV, &raw);
        }

        if let Some(raw) = env(OUTPUT_ENV) {
            config.output = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::JsonLines,
                other => {
                    tracing::warn!(value = other, "{OUTPUT_ENV} not recognised; using text");
                    OutputFormat::Text
                }
            };
        }

        if let Some(raw) = args.into_iter().next() {
            config.days = parse_days("days argument", &raw);
        }

        config
    }
}

fn parse_days(source: &str, raw: &str) -> u32 {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(value = raw, "{source} is not a day count; using {DEFAULT_DAYS}");
        DEFAULT_DAYS
    })
}
