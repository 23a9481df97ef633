//! Session settings.

/// Sonar equipment for one hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntConfig {
    /// Number of sonars the boat can drop.
    pub sonars: u32,
    /// Step distance within which a sonar detects the treasure.
    pub sonar_range: u32,
}

impl HuntConfig {
    /// Three sonars with a range of 38.
    pub const DEFAULT: Self = Self::new(3, 38);

    pub const fn new(sonars: u32, sonar_range: u32) -> Self {
        Self {
            sonars,
            sonar_range,
        }
    }

    pub const fn with_sonars(mut self, sonars: u32) -> Self {
        self.sonars = sonars;
        self
    }

    pub const fn with_range(mut self, sonar_range: u32) -> Self {
        self.sonar_range = sonar_range;
        self
    }
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = HuntConfig::new(2, 40);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"sonars":2,"sonar_range":40}"#);
        let back: HuntConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
