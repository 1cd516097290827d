//! Bidirectional mapping between wall-clock time-of-day and vertical pixel
//! offset within the business-hours window, with snapping.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Grid geometry configuration. Defaults: 07:00-23:00 business hours,
/// 15-minute snap, 64 pixels per hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub business_start_hour: u32,
    pub business_end_hour: u32,
    pub snap_minutes: u32,
    pub pixels_per_hour: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            business_start_hour: 7,
            business_end_hour: 23,
            snap_minutes: 15,
            pixels_per_hour: 64.0,
        }
    }
}

impl GridConfig {
    pub fn minute_height(&self) -> f32 {
        self.pixels_per_hour / 60.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.business_start_hour >= self.business_end_hour {
            return Err("Business hours must start before they end".to_string());
        }
        if self.business_end_hour > 24 {
            return Err("Business end hour must be at most 24".to_string());
        }
        if self.snap_minutes == 0 || self.snap_minutes > 60 {
            return Err("Snap increment must be between 1 and 60 minutes".to_string());
        }
        if self.pixels_per_hour <= 0.0 {
            return Err("Pixels per hour must be positive".to_string());
        }
        Ok(())
    }
}

/// Converts between times-of-day and pixel offsets from the top of the
/// business-hours window.
#[derive(Debug, Clone, Copy)]
pub struct TimeGridMapper {
    config: GridConfig,
}

impl TimeGridMapper {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Pixel offset of `time` from the window start. Times before the
    /// window yield a negative offset; filtering display is the caller's
    /// responsibility.
    pub fn time_to_offset(&self, time: NaiveTime) -> f32 {
        let minutes_since_start = (time.hour() * 60 + time.minute()) as i64
            - (self.config.business_start_hour * 60) as i64;
        minutes_since_start as f32 * self.config.minute_height()
    }

    /// Time-of-day for a pixel offset: divide by minute height, round to
    /// the nearest snap increment, clamp the hour to
    /// `[business_start, business_end - 1]`.
    pub fn offset_to_time(&self, offset: f32) -> NaiveTime {
        let snap = self.config.snap_minutes as f32;
        let raw_minutes = offset / self.config.minute_height();
        let snapped = (raw_minutes / snap).round() * snap;
        let total = self.config.business_start_hour as i64 * 60 + snapped as i64;

        let hour = total.div_euclid(60);
        let minute = total.rem_euclid(60);
        let hour = hour.clamp(
            self.config.business_start_hour as i64,
            self.config.business_end_hour as i64 - 1,
        );

        NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    }

    /// Pixel height spanned by `minutes` of duration.
    pub fn duration_height(&self, minutes: u32) -> f32 {
        minutes as f32 * self.config.minute_height()
    }
}

impl Default for TimeGridMapper {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
