//! Landing page configuration.
//!
//! Every field has a default, so an absent file or a partial JSON object
//! both work:
//!
//! ```json
//! {
//!   "launch_url": "http://127.0.0.1:8051/",
//!   "star_seed": 7,
//!   "typewriter": { "typing_speed_ms": 40 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, LandingResult};
use crate::quotes::default_quotes;
use crate::starfield::DEFAULT_STAR_COUNT;
use crate::typewriter::{cycle_duration, TypewriterTiming};

/// Where the Start button sends the webview.
pub const DEFAULT_LAUNCH_URL: &str = "http://127.0.0.1:8051/";

/// Background video path served alongside the page.
pub const DEFAULT_BACKGROUND_VIDEO: &str = "/mylivewallpapers.com-Earth.mp4";

/// Typewriter cadence in milliseconds, as stored on disk.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub typing_speed_ms: u64,
    pub pause_ms: u64,
    pub erase_speed_ms: u64,
    pub erase_pause_ms: u64,
    pub transition_duration_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::from(TypewriterTiming::default())
    }
}

impl From<TypewriterTiming> for TimingConfig {
    fn from(timing: TypewriterTiming) -> Self {
        let ms = |d: Duration| d.as_millis() as u64;
        Self {
            typing_speed_ms: ms(timing.typing_speed),
            pause_ms: ms(timing.pause),
            erase_speed_ms: ms(timing.erase_speed),
            erase_pause_ms: ms(timing.erase_pause),
            transition_duration_ms: ms(timing.transition_duration),
        }
    }
}

impl From<TimingConfig> for TypewriterTiming {
    fn from(config: TimingConfig) -> Self {
        Self {
            typing_speed: Duration::from_millis(config.typing_speed_ms),
            pause: Duration::from_millis(config.pause_ms),
            erase_speed: Duration::from_millis(config.erase_speed_ms),
            erase_pause: Duration::from_millis(config.erase_pause_ms),
            transition_duration: Duration::from_millis(config.transition_duration_ms),
        }
    }
}

/// A team member link in the Developers section.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub profile_url: String,
}

impl Developer {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
        }
    }
}

fn default_developers() -> Vec<Developer> {
    vec![
        Developer::new(
            "Ujjwal Chaudhary",
            "https://www.linkedin.com/in/ujjwal-chaudhary-3796b8377",
        ),
        Developer::new("Sachin Bhawala", "https://www.linkedin.com/in/sachin-bhawala"),
        Developer::new(
            "Shivam Sharma",
            "https://www.linkedin.com/in/shivam-sharma-6756962b0/",
        ),
        Developer::new(
            "Gaurav Chandola",
            "https://www.linkedin.com/in/gaurav-chandola-228498283/",
        ),
        Developer::new(
            "Sugandha Gumber",
            "https://www.linkedin.com/in/sugandha-gumber-0366a9378/",
        ),
        Developer::new(
            "Ronak Mehta",
            "https://www.linkedin.com/in/sugandha-gumber-0366a9378/",
        ),
    ]
}

/// Everything the landing page can be configured with.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub launch_url: String,
    pub background_video: String,
    pub star_count: usize,
    /// Fixed seed for the star field; random per launch when absent
    pub star_seed: Option<u64>,
    pub typewriter: TimingConfig,
    /// Replaces the built-in quotes when set
    pub quotes: Option<Vec<String>>,
    pub developers: Vec<Developer>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            launch_url: DEFAULT_LAUNCH_URL.to_string(),
            background_video: DEFAULT_BACKGROUND_VIDEO.to_string(),
            star_count: DEFAULT_STAR_COUNT,
            star_seed: None,
            typewriter: TimingConfig::default(),
            quotes: None,
            developers: default_developers(),
        }
    }
}

impl LandingConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> LandingResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: LandingConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!("Loaded landing config from {:?}", path);
        Ok(config)
    }

    /// Like [`LandingConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LandingResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> LandingResult<()> {
        if self.typewriter.typing_speed_ms == 0 {
            return Err(LandingError::InvalidConfig(
                "typewriter.typing_speed_ms must be > 0".to_string(),
            ));
        }
        if self.typewriter.erase_speed_ms == 0 {
            return Err(LandingError::InvalidConfig(
                "typewriter.erase_speed_ms must be > 0".to_string(),
            ));
        }
        let quotes = self.quotes();
        if !quotes.is_empty() && cycle_duration(&quotes, &self.timing()).is_zero() {
            return Err(LandingError::InvalidConfig(
                "typewriter cycle takes no time: every quote is empty and both pauses are 0"
                    .to_string(),
            ));
        }
        if !(self.launch_url.starts_with("http://") || self.launch_url.starts_with("https://")) {
            return Err(LandingError::InvalidConfig(format!(
                "launch_url must be http(s): {}",
                self.launch_url
            )));
        }
        Ok(())
    }

    /// Quotes to animate: the override if present, else the built-ins.
    pub fn quotes(&self) -> Vec<String> {
        self.quotes.clone().unwrap_or_else(default_quotes)
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.typewriter.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page() {
        let config = LandingConfig::default();
        assert_eq!(config.launch_url, "http://127.0.0.1:8051/");
        assert_eq!(config.star_count, 100);
        assert_eq!(config.developers.len(), 6);
        assert_eq!(config.quotes().len(), 15);
        assert_eq!(config.timing(), TypewriterTiming::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: LandingConfig =
            serde_json::from_str(r#"{ "typewriter": { "pause_ms": 1000 } }"#).unwrap();
        assert_eq!(config.typewriter.pause_ms, 1000);
        assert_eq!(config.typewriter.typing_speed_ms, 30);
        assert_eq!(config.launch_url, DEFAULT_LAUNCH_URL);
    }

    #[test]
    fn quote_override_wins() {
        let config = LandingConfig {
            quotes: Some(vec!["Only one".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.quotes(), vec!["Only one".to_string()]);
    }

    #[test]
    fn rejects_zero_typing_speed() {
        let mut config = LandingConfig::default();
        config.typewriter.typing_speed_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(LandingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_erase_speed() {
        let mut config = LandingConfig::default();
        config.typewriter.erase_speed_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_cycle_with_no_duration() {
        let config: LandingConfig = serde_json::from_str(
            r#"{ "quotes": [""], "typewriter": { "pause_ms": 0, "erase_pause_ms": 0 } }"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(LandingError::InvalidConfig(_))
        ));

        // One pause is enough to keep the cycle moving
        let config = LandingConfig {
            quotes: Some(vec![String::new()]),
            typewriter: TimingConfig {
                pause_ms: 0,
                ..TimingConfig::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        // An empty list is a static page, not a spinning one
        let config = LandingConfig {
            quotes: Some(Vec::new()),
            typewriter: TimingConfig {
                pause_ms: 0,
                erase_pause_ms: 0,
                ..TimingConfig::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_launch_url() {
        let config = LandingConfig {
            launch_url: "file:///etc/passwd".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn timing_converts_both_ways() {
        let timing = TypewriterTiming::uniform(Duration::from_millis(5));
        let config = TimingConfig::from(timing);
        assert_eq!(config.erase_pause_ms, 5);
        assert_eq!(TypewriterTiming::from(config), timing);
    }
}
