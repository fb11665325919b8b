//! Widget configuration, read once from host-element attributes.

const DEFAULT_SPEED_FACTOR: f64 = 5.;
const DEFAULT_STRENGTH: f64 = 0.05;
const DEFAULT_SCALE_FACTOR: f64 = 0.003;
const DEFAULT_DISTORTION_FACTOR: f64 = 0.006;

/// Tuning knobs for a carousel instance.
///
/// Immutable after construction. Malformed or missing attribute values fall
/// back to the defaults without surfacing an error to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Multiplier applied to drag deltas before they reach the progress
    /// accumulator.
    pub speed_factor: f64,
    /// Smoothing coefficient in `(0, 1]`. `1.` snaps to the target in one
    /// frame; values near `0.` converge asymptotically.
    pub strength: f64,
    /// Per-slide squash proportional to instantaneous speed.
    pub scale_factor: f64,
    /// Per-image horizontal stretch proportional to instantaneous speed.
    pub distortion_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_factor: DEFAULT_SPEED_FACTOR,
            strength: DEFAULT_STRENGTH,
            scale_factor: DEFAULT_SCALE_FACTOR,
            distortion_factor: DEFAULT_DISTORTION_FACTOR,
        }
    }
}

impl Config {
    /// Builds a config from `(key, value)` attribute pairs.
    ///
    /// Recognized keys are `speed`, `strength`, `scale` and `distortion`.
    /// Unknown keys are ignored; when the same key appears more than once, the
    /// last occurrence wins.
    pub fn from_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();

        for (key, value) in attrs {
            let field = match key {
                "speed" => &mut config.speed_factor,
                "strength" => &mut config.strength,
                "scale" => &mut config.scale_factor,
                "distortion" => &mut config.distortion_factor,
                _ => continue,
            };

            match value.parse::<f64>() {
                Ok(parsed) if !parsed.is_nan() => *field = parsed,
                _ => {
                    debug!("ignoring unparsable value {value:?} for attribute {key:?}");
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_abs_diff_eq!(config.speed_factor, 5.);
        assert_abs_diff_eq!(config.strength, 0.05);
        assert_abs_diff_eq!(config.scale_factor, 0.003);
        assert_abs_diff_eq!(config.distortion_factor, 0.006);
    }

    #[test]
    fn parses_known_attributes() {
        let config = Config::from_attributes([
            ("speed", "2.5"),
            ("strength", "1"),
            ("scale", "0.01"),
            ("distortion", "0.02"),
        ]);
        assert_abs_diff_eq!(config.speed_factor, 2.5);
        assert_abs_diff_eq!(config.strength, 1.);
        assert_abs_diff_eq!(config.scale_factor, 0.01);
        assert_abs_diff_eq!(config.distortion_factor, 0.02);
    }

    #[test]
    fn malformed_values_fall_back_silently() {
        let config = Config::from_attributes([
            ("speed", "fast"),
            ("strength", ""),
            ("scale", "NaN"),
        ]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::from_attributes([("velocity", "3"), ("speed", "3")]);
        assert_abs_diff_eq!(config.speed_factor, 3.);
        assert_abs_diff_eq!(config.strength, 0.05);
    }

    #[test]
    fn last_duplicate_wins() {
        let config = Config::from_attributes([("speed", "1"), ("speed", "7")]);
        assert_abs_diff_eq!(config.speed_factor, 7.);
    }
}
