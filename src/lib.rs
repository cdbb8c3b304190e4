pub mod analemma;
pub mod ephemeris;
pub mod shadow;
pub mod time;
pub mod types;

pub use analemma::Analemma;

pub use ephemeris::{SolarEphemeris, Spa};

pub use shadow::{
    ground_shadows, shadow_ground_east_north, shadow_wall_right_up, wall_shadows, DEFAULT_HEIGHT,
};

pub use time::{
    days_in_year, instant_from_local, instants_at_fixed_day, instants_at_fixed_local_time,
    leap_year, local_to_utc, truncate_day,
};

pub use types::{
    AnalemmaConfig, GroundShadow, Instant, Location, SunPosition, TimeReference, WallShadow,
};
