use log::{debug, trace};
use ndarray::Array1;

use crate::ephemeris::{SolarEphemeris, Spa};
use crate::shadow;
use crate::time;
use crate::types::{
    AnalemmaConfig, GroundShadow, Instant, Location, SunPosition, TimeReference, WallShadow,
};

/// Sun angles and shadows for one observer, on local standard time.
///
/// Location and time reference are fixed at construction. Every query is a
/// pure function of its arguments and those fields.
#[derive(Debug, Clone)]
pub struct Analemma<E = Spa> {
    location: Location,
    time_reference: TimeReference,
    day_zero: Instant,
    ephemeris: E,
}

impl Default for Analemma<Spa> {
    fn default() -> Self {
        Self::new(AnalemmaConfig::default())
    }
}

impl Analemma<Spa> {
    pub fn new(config: AnalemmaConfig) -> Self {
        Self::with_ephemeris(config, Spa::default())
    }
}

impl<E: SolarEphemeris> Analemma<E> {
    /// # Panics
    /// If `config.year` is outside the range chrono can represent.
    pub fn with_ephemeris(config: AnalemmaConfig, ephemeris: E) -> Self {
        debug!(
            "analemma observer at ({}, {}), UTC{:+} hours, year {}",
            config.latitude, config.longitude, config.utc_offset_hours, config.year
        );
        let time_reference = config.time_reference();
        Self {
            location: config.location(),
            day_zero: time_reference.day_zero(),
            time_reference,
            ephemeris,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn time_reference(&self) -> &TimeReference {
        &self.time_reference
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn day_zero(&self) -> Instant {
        self.day_zero
    }

    /// UTC instant for a day offset from January 1 and a local standard clock hour.
    ///
    /// # Panics
    /// If `local_hour` is not finite, or the result is out of chrono's range.
    pub fn instant_from_local(&self, day_of_year: i64, local_hour: f64) -> Instant {
        time::local_to_utc(
            self.day_zero,
            self.time_reference.utc_offset_hours,
            day_of_year,
            local_hour,
        )
    }

    pub fn instants_at_fixed_local_time(&self, local_time: f64, days: &[i64]) -> Vec<Instant> {
        days.iter()
            .map(|&d| self.instant_from_local(d, local_time))
            .collect()
    }

    pub fn instants_at_fixed_day(&self, day: i64, local_times: &[f64]) -> Vec<Instant> {
        local_times
            .iter()
            .map(|&t| self.instant_from_local(day, t))
            .collect()
    }

    pub fn altitude(&self, instant: &Instant) -> Result<f64, E::Error> {
        self.ephemeris.altitude(&self.location, instant)
    }

    pub fn azimuth(&self, instant: &Instant) -> Result<f64, E::Error> {
        self.ephemeris.azimuth(&self.location, instant)
    }

    pub fn sun_position(&self, instant: &Instant) -> Result<SunPosition, E::Error> {
        self.ephemeris.sun_position(&self.location, instant)
    }

    pub fn alt_az(&self, day_of_year: i64, local_hour: f64) -> Result<SunPosition, E::Error> {
        self.sun_position(&self.instant_from_local(day_of_year, local_hour))
    }

    pub fn altitudes(&self, instants: &[Instant]) -> Result<Array1<f64>, E::Error> {
        trace!("querying {} altitudes", instants.len());
        let values = instants
            .iter()
            .map(|t| self.altitude(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from_vec(values))
    }

    /// Azimuths clockwise from North, in input order.
    pub fn azimuths(&self, instants: &[Instant]) -> Result<Array1<f64>, E::Error> {
        trace!("querying {} azimuths", instants.len());
        let values = instants
            .iter()
            .map(|t| self.azimuth(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from_vec(values))
    }

    pub fn sun_positions(&self, instants: &[Instant]) -> Result<Vec<SunPosition>, E::Error> {
        trace!("querying {} sun positions", instants.len());
        instants.iter().map(|t| self.sun_position(t)).collect()
    }

    /// Sun position at `local_time` on every day of the reference year.
    pub fn analemma(&self, local_time: f64) -> Result<Vec<SunPosition>, E::Error> {
        let days: Vec<i64> = (0..time::days_in_year(self.time_reference.year)).collect();
        self.sun_positions(&self.instants_at_fixed_local_time(local_time, &days))
    }

    pub fn shadow_ground_east_north(&self, alt: f64, az: f64, height: f64) -> GroundShadow {
        shadow::shadow_ground_east_north(alt, az, height)
    }

    pub fn shadow_wall_right_up(&self, alt_sun: f64, az_sun: f64, az_wall: f64) -> WallShadow {
        shadow::shadow_wall_right_up(alt_sun, az_sun, az_wall)
    }
}
