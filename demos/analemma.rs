use analemma::{Analemma, AnalemmaConfig};

fn main() -> Result<(), solar_positioning::Error> {
    env_logger::init();

    let config = AnalemmaConfig::default();
    let calc: Analemma = Analemma::new(config);

    println!("=== Sun and Shadows ===");
    println!(
        "Location: Tiffin, OH ({:.3}°N, {:.3}°W), UTC{:+}",
        config.latitude, -config.longitude, config.utc_offset_hours
    );
    println!();

    println!("--- Summer solstice, hourly ---");
    let hours: Vec<f64> = (5..=20).map(f64::from).collect();
    let instants = calc.instants_at_fixed_day(171, &hours);
    let alts = calc.altitudes(&instants)?;
    let azs = calc.azimuths(&instants)?;
    for ((hour, alt), az) in hours.iter().zip(&alts).zip(&azs) {
        if *alt <= 0.0 {
            println!("{:>5.1} h  alt {:>7.2}°  az {:>7.2}°  (below horizon)", hour, alt, az);
            continue;
        }
        let ground = calc.shadow_ground_east_north(*alt, *az, 1.0);
        println!(
            "{:>5.1} h  alt {:>7.2}°  az {:>7.2}°  shadow E {:>7.3}  N {:>7.3}",
            hour, alt, az, ground.east, ground.north
        );
    }
    println!();

    println!("--- Noon analemma, every 30 days ---");
    let points = calc.analemma(12.0)?;
    for (day, pos) in points.iter().enumerate().step_by(30) {
        let wall = calc.shadow_wall_right_up(pos.altitude, pos.azimuth, 180.0);
        println!(
            "day {:>3}  alt {:>6.2}°  az {:>7.2}°  south wall R {:>6.3}  U {:>6.3}",
            day, pos.altitude, pos.azimuth, wall.right, wall.up
        );
    }

    Ok(())
}
