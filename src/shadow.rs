use ndarray::{Array1, Zip};

use crate::types::{GroundShadow, WallShadow};

pub const DEFAULT_HEIGHT: f64 = 1.0;

fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Shadow cast on level ground by a vertical pole of `height`. Infinite or
/// NaN at the horizon, never an error.
pub fn shadow_ground_east_north(alt: f64, az: f64, height: f64) -> GroundShadow {
    let length = 1.0 / deg_to_rad(alt).tan();
    let az_rad = deg_to_rad(az);
    GroundShadow {
        east: height * -length * az_rad.sin(),
        north: height * -length * az_rad.cos(),
    }
}

/// Shadow of a unit gnomon sticking straight out of a vertical wall whose
/// outward normal points at `az_wall`.
pub fn shadow_wall_right_up(alt_sun: f64, az_sun: f64, az_wall: f64) -> WallShadow {
    let az_diff = deg_to_rad(az_sun - az_wall);
    let sin_diff = az_diff.sin();
    WallShadow {
        right: -az_diff.cos() / sin_diff,
        up: -deg_to_rad(alt_sun).tan() / sin_diff,
    }
}

/// Element-wise [`shadow_ground_east_north`], returning `(east, north)`.
///
/// # Panics
/// If `alt` and `az` differ in length.
pub fn ground_shadows(alt: &Array1<f64>, az: &Array1<f64>, height: f64) -> (Array1<f64>, Array1<f64>) {
    let mut east = Array1::zeros(alt.len());
    let mut north = Array1::zeros(alt.len());
    Zip::from(&mut east)
        .and(&mut north)
        .and(alt)
        .and(az)
        .for_each(|e, n, &alt, &az| {
            let s = shadow_ground_east_north(alt, az, height);
            *e = s.east;
            *n = s.north;
        });
    (east, north)
}

/// Element-wise [`shadow_wall_right_up`] against one wall, returning `(right, up)`.
///
/// # Panics
/// If `alt_sun` and `az_sun` differ in length.
pub fn wall_shadows(
    alt_sun: &Array1<f64>,
    az_sun: &Array1<f64>,
    az_wall: f64,
) -> (Array1<f64>, Array1<f64>) {
    let mut right = Array1::zeros(alt_sun.len());
    let mut up = Array1::zeros(alt_sun.len());
    Zip::from(&mut right)
        .and(&mut up)
        .and(alt_sun)
        .and(az_sun)
        .for_each(|r, u, &alt, &az| {
            let s = shadow_wall_right_up(alt, az, az_wall);
            *r = s.right;
            *u = s.up;
        });
    (right, up)
}
