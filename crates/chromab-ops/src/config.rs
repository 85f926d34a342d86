//! Filter configuration.
//!
//! A [`FilterConfig`] is built once per filter invocation, validated at
//! construction, and shared immutably across all workers.

use crate::{OpsError, OpsResult};

/// Parameters describing displacement shape, magnitude, falloff, and
/// sampling mode.
///
/// # Example
///
/// ```rust
/// use chromab_ops::FilterConfig;
///
/// let radial = FilterConfig::radial(20, 5, true, false).unwrap();
/// assert_eq!(radial.max_displacement(), 20);
///
/// // Deadzone of 100% would leave no active region
/// assert!(FilterConfig::radial(20, 100, true, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterConfig {
    /// Displacement grows radially from the image center.
    Radial {
        /// Maximum displacement in pixels, at least 1.
        max_displacement: u32,
        /// Central radius (percent of the center distance, `0..=99`)
        /// within which displacement is suppressed entirely.
        deadzone_percent: u32,
        /// Quadratic instead of linear growth from the deadzone edge.
        exponential_falloff: bool,
        /// Bilinear interpolation when sampling displaced positions.
        interpolate: bool,
    },
    /// Uniform displacement along a fixed direction.
    Linear {
        /// Maximum displacement in pixels, at least 1.
        max_displacement: u32,
        /// Displacement direction in degrees, `0..=359`.
        direction_degrees: u32,
        /// Bilinear interpolation when sampling displaced positions.
        interpolate: bool,
    },
}

impl FilterConfig {
    /// Creates a validated radial configuration.
    pub fn radial(
        max_displacement: u32,
        deadzone_percent: u32,
        exponential_falloff: bool,
        interpolate: bool,
    ) -> OpsResult<Self> {
        let config = Self::Radial {
            max_displacement,
            deadzone_percent,
            exponential_falloff,
            interpolate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a validated linear configuration.
    pub fn linear(
        max_displacement: u32,
        direction_degrees: u32,
        interpolate: bool,
    ) -> OpsResult<Self> {
        let config = Self::Linear {
            max_displacement,
            direction_degrees,
            interpolate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks all parameters, returning [`OpsError::InvalidConfig`] on
    /// the first out-of-range value.
    pub fn validate(&self) -> OpsResult<()> {
        if self.max_displacement() < 1 {
            return Err(OpsError::InvalidConfig(
                "max displacement must be at least 1 pixel".into(),
            ));
        }
        match *self {
            Self::Radial {
                deadzone_percent, ..
            } => {
                // 100 would empty the active region and divide by zero
                // at the deadzone rescale.
                if deadzone_percent > 99 {
                    return Err(OpsError::InvalidConfig(format!(
                        "deadzone must be in 0..=99 percent, got {deadzone_percent}"
                    )));
                }
            }
            Self::Linear {
                direction_degrees, ..
            } => {
                if direction_degrees > 359 {
                    return Err(OpsError::InvalidConfig(format!(
                        "direction must be in 0..=359 degrees, got {direction_degrees}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Maximum displacement in pixels.
    #[inline]
    pub fn max_displacement(&self) -> u32 {
        match *self {
            Self::Radial {
                max_displacement, ..
            }
            | Self::Linear {
                max_displacement, ..
            } => max_displacement,
        }
    }

    /// Whether displaced samples use bilinear interpolation.
    #[inline]
    pub fn interpolate(&self) -> bool {
        match *self {
            Self::Radial { interpolate, .. } | Self::Linear { interpolate, .. } => interpolate,
        }
    }
}
