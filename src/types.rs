use chrono::{DateTime, TimeZone, Utc};

/// An absolute UTC timestamp.
pub type Instant = DateTime<Utc>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Clock offset from UTC plus the year whose January 1 anchors day offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeReference {
    pub utc_offset_hours: f64,
    pub year: i32,
}

impl TimeReference {
    /// January 1, 00:00 UTC of the reference year.
    ///
    /// # Panics
    /// If `year` is outside the range chrono can represent.
    pub fn day_zero(&self) -> Instant {
        Utc.with_ymd_and_hms(self.year, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("year {} out of range", self.year))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalemmaConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
    pub year: i32,
}

impl Default for AnalemmaConfig {
    // Tiffin, Ohio on Eastern Standard Time.
    fn default() -> Self {
        Self {
            latitude: 41.1190631,
            longitude: -83.2225659,
            utc_offset_hours: -5.0,
            year: 2021,
        }
    }
}

impl AnalemmaConfig {
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn time_reference(&self) -> TimeReference {
        TimeReference {
            utc_offset_hours: self.utc_offset_hours,
            year: self.year,
        }
    }
}

/// Apparent sun position in degrees. Azimuth is clockwise from North.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

/// Shadow tip of a vertical pole, in ground (east, north) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundShadow {
    pub east: f64,
    pub north: f64,
}

impl From<GroundShadow> for (f64, f64) {
    fn from(s: GroundShadow) -> Self {
        (s.east, s.north)
    }
}

/// Shadow of a unit gnomon normal to a wall, in wall-plane (right, up) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallShadow {
    pub right: f64,
    pub up: f64,
}

impl From<WallShadow> for (f64, f64) {
    fn from(s: WallShadow) -> Self {
        (s.right, s.up)
    }
}
