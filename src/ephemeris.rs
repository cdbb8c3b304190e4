use solar_positioning::time::DeltaT;
use solar_positioning::{spa, RefractionCorrection};

use crate::types::{Instant, Location, SunPosition};

pub trait SolarEphemeris {
    type Error;

    /// Degrees above the horizon, negative below it.
    fn altitude(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error>;

    /// Degrees clockwise from North.
    fn azimuth(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error>;

    fn sun_position(
        &self,
        location: &Location,
        instant: &Instant,
    ) -> Result<SunPosition, Self::Error> {
        Ok(SunPosition {
            altitude: self.altitude(location, instant)?,
            azimuth: self.azimuth(location, instant)?,
        })
    }
}

impl<E: SolarEphemeris + ?Sized> SolarEphemeris for &E {
    type Error = E::Error;

    fn altitude(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error> {
        (**self).altitude(location, instant)
    }

    fn azimuth(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error> {
        (**self).azimuth(location, instant)
    }

    fn sun_position(
        &self,
        location: &Location,
        instant: &Instant,
    ) -> Result<SunPosition, Self::Error> {
        (**self).sun_position(location, instant)
    }
}

/// NREL Solar Position Algorithm, with ΔT estimated from the instant's date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spa {
    /// Observer elevation in meters above sea level.
    pub elevation: f64,
    pub refraction: Option<RefractionCorrection>,
}

impl Default for Spa {
    fn default() -> Self {
        Self {
            elevation: 0.0,
            refraction: Some(RefractionCorrection::standard()),
        }
    }
}

impl SolarEphemeris for Spa {
    type Error = solar_positioning::Error;

    fn altitude(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error> {
        Ok(self.sun_position(location, instant)?.altitude)
    }

    fn azimuth(&self, location: &Location, instant: &Instant) -> Result<f64, Self::Error> {
        Ok(self.sun_position(location, instant)?.azimuth)
    }

    fn sun_position(
        &self,
        location: &Location,
        instant: &Instant,
    ) -> Result<SunPosition, Self::Error> {
        let delta_t = DeltaT::estimate_from_date_like(*instant)?;
        let position = spa::solar_position(
            *instant,
            location.latitude,
            location.longitude,
            self.elevation,
            delta_t,
            self.refraction,
        )?;
        Ok(SunPosition {
            altitude: position.elevation_angle(),
            azimuth: position.azimuth(),
        })
    }
}
