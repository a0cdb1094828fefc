//! Page tunables.
//!
//! Settings are read from a TOML document. Every section and key is
//! optional; missing values take the defaults below.
//!
//! ```toml
//! [particles]
//! count = 80
//!
//! [lazy_load]
//! root_margin = "50px 0px"
//! ```

use serde::Deserialize;

use crate::error::SettingsError;

/// All page settings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub particles: ParticleSettings,
    pub lazy_load: ObserverSettings,
    pub reveal: RevealSettings,
    pub scroller: ScrollerSettings,
}

impl Settings {
    /// Parse and validate settings from TOML.
    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.particles.validate()?;
        self.lazy_load
            .validate("lazy_load.root_margin", "lazy_load.threshold")?;
        self.reveal
            .observer()
            .validate("reveal.root_margin", "reveal.threshold")?;
        if !is_positive(self.scroller.step) {
            return Err(invalid("scroller.step", "must be positive"));
        }
        if !is_positive(self.scroller.swipe_multiplier) {
            return Err(invalid("scroller.swipe_multiplier", "must be positive"));
        }
        Ok(())
    }
}

/// Background particle layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    pub size_min: f64,
    pub size_max: f64,
    /// Per-axis speed, pixels per frame.
    pub speed_min: f64,
    pub speed_max: f64,
    /// Radius around the pointer inside which particles are repelled.
    pub pointer_radius: f64,
    /// Probability that a particle twinkles.
    pub twinkle_chance: f64,
    pub colors: Vec<String>,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 80,
            size_min: 2.0,
            size_max: 8.0,
            speed_min: 0.3,
            speed_max: 1.2,
            pointer_radius: 120.0,
            twinkle_chance: 0.3,
            colors: [
                "#FFD700", "#FFA500", "#FF8C00", "#FF6347", "#FF4500", "#FFEC8B", "#FFFACD",
                "#FFFFE0", "#FAFAD2", "#EEE8AA",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ParticleSettings {
    fn validate(&self) -> Result<(), SettingsError> {
        for (key, value) in [
            ("particles.size_min", self.size_min),
            ("particles.size_max", self.size_max),
            ("particles.speed_min", self.speed_min),
            ("particles.speed_max", self.speed_max),
            ("particles.pointer_radius", self.pointer_radius),
            ("particles.twinkle_chance", self.twinkle_chance),
        ] {
            if !value.is_finite() {
                return Err(invalid(key, "must be a finite number"));
            }
        }
        if self.size_min < 0.0 || self.size_min > self.size_max {
            return Err(invalid("particles.size_min", "must be between 0 and size_max"));
        }
        if self.speed_min < 0.0 || self.speed_min > self.speed_max {
            return Err(invalid("particles.speed_min", "must be between 0 and speed_max"));
        }
        if self.pointer_radius <= 0.0 {
            return Err(invalid("particles.pointer_radius", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.twinkle_chance) {
            return Err(invalid("particles.twinkle_chance", "must be within 0..=1"));
        }
        if self.colors.is_empty() {
            return Err(invalid("particles.colors", "at least one colour is required"));
        }
        Ok(())
    }
}

/// IntersectionObserver options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverSettings {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            root_margin: "50px 0px".to_string(),
            threshold: 0.1,
        }
    }
}

impl ObserverSettings {
    fn validate(
        &self,
        margin_key: &'static str,
        threshold_key: &'static str,
    ) -> Result<(), SettingsError> {
        if self.root_margin.trim().is_empty() {
            return Err(invalid(margin_key, "must not be empty"));
        }
        // Also rejects NaN
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid(threshold_key, "must be within 0..=1"));
        }
        Ok(())
    }
}

/// Scroll-reveal animation of content blocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub root_margin: String,
    pub threshold: f64,
    /// Delay before a block is marked visible, milliseconds.
    pub delay_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px -50px 0px".to_string(),
            threshold: 0.1,
            delay_ms: 50,
        }
    }
}

impl RevealSettings {
    /// Observer options for content blocks.
    pub fn observer(&self) -> ObserverSettings {
        ObserverSettings {
            root_margin: self.root_margin.clone(),
            threshold: self.threshold,
        }
    }
}

/// Gallery strip scrolling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollerSettings {
    /// Distance scrolled by a prev/next button press, pixels.
    pub step: f64,
    /// Scroll distance per pixel of finger travel.
    pub swipe_multiplier: f64,
}

impl Default for ScrollerSettings {
    fn default() -> Self {
        Self {
            step: 320.0,
            swipe_multiplier: 2.0,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(key: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        key,
        reason: reason.to_string(),
    }
}
