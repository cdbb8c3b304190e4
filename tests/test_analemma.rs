use std::cell::Cell;

use analemma::ephemeris::{SolarEphemeris, Spa};
use analemma::types::{AnalemmaConfig, Instant, Location};
use analemma::Analemma;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

/// Encodes the instant and location into the answer so order is checkable.
struct Echo;

impl SolarEphemeris for Echo {
    type Error = String;

    fn altitude(&self, location: &Location, instant: &Instant) -> Result<f64, String> {
        Ok(instant.timestamp() as f64 + location.latitude)
    }

    fn azimuth(&self, location: &Location, instant: &Instant) -> Result<f64, String> {
        Ok(-(instant.timestamp() as f64) + location.longitude)
    }
}

/// Fails for anything at or after `cutoff`, counting calls.
struct FailsAfter {
    cutoff: Instant,
    calls: Cell<usize>,
}

#[derive(Debug, PartialEq)]
struct OutOfRange(Instant);

impl SolarEphemeris for FailsAfter {
    type Error = OutOfRange;

    fn altitude(&self, _: &Location, instant: &Instant) -> Result<f64, OutOfRange> {
        self.calls.set(self.calls.get() + 1);
        if *instant >= self.cutoff {
            Err(OutOfRange(*instant))
        } else {
            Ok(10.0)
        }
    }

    fn azimuth(&self, location: &Location, instant: &Instant) -> Result<f64, OutOfRange> {
        self.altitude(location, instant).map(|_| 180.0)
    }
}

fn echo() -> Analemma<Echo> {
    Analemma::with_ephemeris(AnalemmaConfig::default(), Echo)
}

// ── Construction ──

#[test]
fn test_default_config() {
    let a: Analemma = Analemma::default();
    assert_eq!(a.location().latitude, 41.1190631);
    assert_eq!(a.location().longitude, -83.2225659);
    assert_eq!(a.time_reference().utc_offset_hours, -5.0);
    assert_eq!(a.time_reference().year, 2021);
    assert_eq!(a.day_zero().timestamp(), 1_609_459_200);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_unrepresentable_year_fails_at_construction() {
    Analemma::with_ephemeris(
        AnalemmaConfig {
            year: 300_000,
            ..AnalemmaConfig::default()
        },
        Echo,
    );
}

#[test]
#[should_panic(expected = "not a representable duration")]
fn test_nan_local_hour_panics() {
    echo().instant_from_local(0, f64::NAN);
}

#[test]
#[should_panic(expected = "not a representable duration")]
fn test_nan_local_time_in_batch_panics() {
    echo().instants_at_fixed_local_time(f64::NAN, &[0, 1]);
}

// ── Scalar queries ──

#[test]
fn test_altitude_and_azimuth_delegate_with_fixed_location() {
    let a = echo();
    let t = a.instant_from_local(0, 0.0);
    assert_eq!(a.altitude(&t).unwrap(), t.timestamp() as f64 + 41.1190631);
    assert_eq!(a.azimuth(&t).unwrap(), -(t.timestamp() as f64) - 83.2225659);
}

#[test]
fn test_alt_az_combines_instant_and_position() {
    let a = echo();
    let t = a.instant_from_local(100, 9.25);
    let pos = a.alt_az(100, 9.25).unwrap();
    assert_eq!(pos, a.sun_position(&t).unwrap());
}

// ── Batch queries ──

#[test]
fn test_batch_preserves_length_and_order() {
    let a = echo();
    let instants = a.instants_at_fixed_day(10, &[18.0, 6.0, 12.0, 6.0]);
    let alts = a.altitudes(&instants).unwrap();
    let azs = a.azimuths(&instants).unwrap();
    assert_eq!(alts.len(), 4);
    assert_eq!(azs.len(), 4);
    for (i, t) in instants.iter().enumerate() {
        assert_eq!(alts[i], a.altitude(t).unwrap());
        assert_eq!(azs[i], a.azimuth(t).unwrap());
    }
    assert_eq!(alts[1], alts[3]);
}

#[test]
fn test_batch_empty() {
    let a = echo();
    assert!(a.altitudes(&[]).unwrap().is_empty());
    assert!(a.azimuths(&[]).unwrap().is_empty());
    assert!(a.sun_positions(&[]).unwrap().is_empty());
}

#[test]
fn test_batch_error_propagates_unchanged() {
    let config = AnalemmaConfig::default();
    let cutoff = Analemma::with_ephemeris(config, Echo).instant_from_local(2, 0.0);
    let failing = FailsAfter {
        cutoff,
        calls: Cell::new(0),
    };
    let a = Analemma::with_ephemeris(config, &failing);
    let instants = a.instants_at_fixed_local_time(12.0, &[0, 1, 2, 3]);
    assert_eq!(a.altitudes(&instants), Err(OutOfRange(instants[2])));
    assert_eq!(failing.calls.get(), 3);
    assert_eq!(a.azimuths(&instants[..2]).unwrap().to_vec(), vec![180.0, 180.0]);
}

// ── Analemma ──

#[test]
fn test_analemma_one_point_per_day() {
    let a = echo();
    assert_eq!(a.analemma(12.0).unwrap().len(), 365);
    let leap = Analemma::with_ephemeris(
        AnalemmaConfig {
            year: 2024,
            ..AnalemmaConfig::default()
        },
        Echo,
    );
    let points = leap.analemma(12.0).unwrap();
    assert_eq!(points.len(), 366);
    assert_eq!(points[0], leap.alt_az(0, 12.0).unwrap());
    assert_eq!(points[365], leap.alt_az(365, 12.0).unwrap());
}

// ── Shadows through the calculator ──

#[test]
fn test_shadow_methods_ignore_observer() {
    let a = echo();
    let s = a.shadow_ground_east_north(45.0, 0.0, 1.0);
    assert_approx!(s.north, -1.0, 1e-12);
    let w = a.shadow_wall_right_up(0.0, 90.0, 0.0);
    assert_approx!(w.right, 0.0, 1e-12);
}

// ── Real ephemerides ──

fn tiffin_summer_noon() -> Instant {
    // June 21, local mean solar noon is about 12:35 EST at 83.2° W.
    let a: Analemma = Analemma::default();
    a.instant_from_local(171, 12.58)
}

#[test]
fn test_spa_summer_solstice_noon() {
    let a: Analemma = Analemma::default();
    let pos = a.sun_position(&tiffin_summer_noon()).unwrap();
    assert_approx!(pos.altitude, 72.3, 0.5);
    assert_approx!(pos.azimuth, 180.0, 10.0);
}

#[test]
fn test_spa_winter_solstice_noon() {
    let a: Analemma = Analemma::default();
    let pos = a.alt_az(354, 12.5).unwrap();
    assert_approx!(pos.altitude, 25.4, 0.8);
}

#[test]
fn test_spa_night_is_below_horizon() {
    let a: Analemma = Analemma::default();
    assert!(a.alt_az(0, 0.0).unwrap().altitude < -30.0);
}

#[test]
fn test_spa_morning_sun_in_the_east() {
    let a: Analemma = Analemma::default();
    let pos = a.alt_az(171, 8.0).unwrap();
    assert!(pos.altitude > 0.0);
    assert!(pos.azimuth > 45.0 && pos.azimuth < 135.0, "azimuth={}", pos.azimuth);
}

#[test]
fn test_spa_altitude_and_azimuth_match_sun_position() {
    let a: Analemma = Analemma::default();
    let t = a.instant_from_local(80, 15.0);
    let pos = a.sun_position(&t).unwrap();
    assert_eq!(a.altitude(&t).unwrap(), pos.altitude);
    assert_eq!(a.azimuth(&t).unwrap(), pos.azimuth);
}

#[test]
fn test_spa_invalid_latitude_error_surfaces() {
    let a = Analemma::new(AnalemmaConfig {
        latitude: 95.0,
        ..AnalemmaConfig::default()
    });
    let t = a.instant_from_local(0, 12.0);
    assert_eq!(
        a.altitude(&t),
        Err(solar_positioning::Error::InvalidLatitude { value: 95.0 })
    );
}

#[test]
fn test_spa_with_elevation_and_no_refraction() {
    let plain = Spa {
        elevation: 250.0,
        refraction: None,
    };
    let a = Analemma::with_ephemeris(AnalemmaConfig::default(), plain);
    let refracted: Analemma = Analemma::default();
    let t = a.instant_from_local(171, 6.0);
    let diff = refracted.altitude(&t).unwrap() - a.altitude(&t).unwrap();
    assert!(diff >= 0.0 && diff < 1.0, "diff={}", diff);
}
