use rand::Rng;

use orbital_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The control panel extremes, as headless showcase runs.
    run_showcase("Full power, no atmosphere", 10.0, 0.0, false)?;
    run_showcase("Minimum power", 1.0, 0.0, false)?;
    run_showcase("Medium shot through the atmosphere", 6.5, 0.0, true)?;

    explore_random_launches(25)?;

    Ok(())
}

fn run_showcase(
    title: &str,
    speed: f64,
    angle: f64,
    atmosphere: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = LaunchParams::new(speed, angle)?;

    println!("=== {} ===", title);
    println!(
        "Launch: {:.2} km/s at {:.0}° ({})",
        params.display_speed(),
        params.angle_degrees(),
        params.velocity_category().label()
    );

    let mut driver = SimulationDriver::new(TrajectoryEngine::new(World::default()));
    driver.engine_mut().set_atmosphere(atmosphere)?;
    driver.launch(params)?;

    let world = driver.engine().world().clone();
    let mut telemetry = Telemetry::new();
    let outcome = driver.run(MAX_SIMULATION_FRAMES, |frame| {
        telemetry.collect_data(frame, &world);
    });

    match outcome {
        Some(outcome) => println!("{}", outcome),
        None => println!(
            "Still circling after {} frames without closing the loop",
            MAX_SIMULATION_FRAMES
        ),
    }
    telemetry.display_data();
    println!();

    Ok(())
}

fn explore_random_launches(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Random exploration: {} shots ===", count);

    let mut rng = rand::thread_rng();
    let mut driver = SimulationDriver::new(TrajectoryEngine::new(World::default()));

    let mut impacts = 0;
    let mut escapes = 0;
    let mut orbits = 0;
    let mut unresolved = 0;

    for _ in 0..count {
        let speed = rng.gen_range(MIN_SPEED_INPUT..=MAX_SPEED_INPUT);
        let angle = rng.gen_range(0.0..360.0);
        let params = LaunchParams::new(speed, angle)?;

        driver.reset();
        let outcome = driver.fly(params, 2_000)?;

        match &outcome {
            Some(Outcome::Impact) => impacts += 1,
            Some(Outcome::Escape) => escapes += 1,
            Some(_) => orbits += 1,
            None => unresolved += 1,
        }

        match outcome {
            Some(outcome) => println!(
                "  speed {:.1}, angle {:>3.0}° -> {}",
                speed, angle, outcome
            ),
            None => println!(
                "  speed {:.1}, angle {:>3.0}° -> still in flight after 2000 frames",
                speed, angle
            ),
        }
    }

    println!(
        "Totals: {} impacts, {} escapes, {} orbits, {} unresolved",
        impacts, escapes, orbits, unresolved
    );

    Ok(())
}
