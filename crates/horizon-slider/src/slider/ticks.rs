//! Tick layout.
//!
//! Ticks are laid out as a fraction of the track length between two
//! consecutive marks. The layout is recomputed only when track geometry is
//! captured, never per frame.

use serde::{Deserialize, Serialize};

/// Minimum distance in pixels between ticks when the interval is automatic.
pub const MIN_AUTO_TICK_SEPARATION: f64 = 30.0;

/// How often tick marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "TickIntervalRepr", into = "TickIntervalRepr")]
pub enum TickInterval {
    /// No tick marks.
    #[default]
    None,
    /// As dense as possible while staying [`MIN_AUTO_TICK_SEPARATION`] apart.
    Auto,
    /// A mark every this many steps.
    Steps(f64),
}

impl TickInterval {
    /// A mark every `steps` steps; zero or negative disables ticks.
    pub fn steps(steps: f64) -> Self {
        if steps > 0.0 && steps.is_finite() {
            TickInterval::Steps(steps)
        } else {
            TickInterval::None
        }
    }

    /// Whether any ticks are drawn.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, TickInterval::None)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TickIntervalRepr {
    Keyword(String),
    Number(f64),
}

impl TryFrom<TickIntervalRepr> for TickInterval {
    type Error = String;

    fn try_from(repr: TickIntervalRepr) -> Result<Self, Self::Error> {
        match repr {
            TickIntervalRepr::Keyword(keyword) if keyword == "auto" => Ok(TickInterval::Auto),
            TickIntervalRepr::Keyword(other) => {
                Err(format!("expected \"auto\" or a number of steps, got \"{other}\""))
            }
            TickIntervalRepr::Number(steps) => Ok(TickInterval::steps(steps)),
        }
    }
}

impl From<TickInterval> for TickIntervalRepr {
    fn from(interval: TickInterval) -> Self {
        match interval {
            TickInterval::None => TickIntervalRepr::Number(0.0),
            TickInterval::Auto => TickIntervalRepr::Keyword("auto".to_string()),
            TickInterval::Steps(steps) => TickIntervalRepr::Number(steps),
        }
    }
}

/// Spacing between tick marks, as a fraction of the track length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLayout {
    /// Distance between consecutive ticks in `[0, 1]` track units.
    pub interval_percent: f64,
}

impl TickLayout {
    /// Compute the layout for a range and track.
    ///
    /// `track_size` is only consulted for [`TickInterval::Auto`]. Returns
    /// `None` when no ticks should be drawn or the inputs cannot produce a
    /// positive spacing.
    pub fn compute(
        interval: TickInterval,
        min: f64,
        max: f64,
        step: f64,
        track_size: f64,
    ) -> Option<Self> {
        let span = max - min;
        if !(span > 0.0) || !(step > 0.0) {
            return None;
        }

        let interval_percent = match interval {
            TickInterval::None => return None,
            TickInterval::Steps(steps) => steps * step / span,
            TickInterval::Auto => {
                if !(track_size > 0.0) {
                    return None;
                }
                let pixels_per_step = track_size * step / span;
                let steps_per_tick = (MIN_AUTO_TICK_SEPARATION / pixels_per_step).ceil().max(1.0);
                steps_per_tick * step / span
            }
        };

        (interval_percent > 0.0).then_some(Self { interval_percent })
    }

    /// Positions of every tick along the track, starting at `0`.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        let count = (1.0 / self.interval_percent).floor() as usize;
        (0..=count).map(move |i| i as f64 * self.interval_percent)
    }
}
