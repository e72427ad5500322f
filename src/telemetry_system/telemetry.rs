use crate::control::world::World;
use crate::trajectory_system::engine::FrameSnapshot;
use crate::utils::vector2d::Vector2D;

// Keep one formatted entry out of this many collected frames.
const LOG_SAMPLE_INTERVAL: usize = 25;

/// Per-run flight recorder. Feed it every frame snapshot; it tracks the
/// extremes of the run and keeps a sampled, human-readable log.
pub struct Telemetry {
    pub log: Vec<String>,
    steps: usize,
    max_display_speed: f64,
    min_distance: f64,
    max_distance: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            steps: 0,
            max_display_speed: 0.0,
            min_distance: f64::MAX,
            max_distance: 0.0,
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    pub fn collect_data(&mut self, frame: &FrameSnapshot, world: &World) {
        self.steps += 1;
        let distance = frame.position.distance_to(&world.center);
        let display_speed = frame.display_speed();

        if display_speed > self.max_display_speed {
            self.max_display_speed = display_speed;
        }
        if distance < self.min_distance {
            self.min_distance = distance;
        }
        if distance > self.max_distance {
            self.max_distance = distance;
        }

        if self.steps % LOG_SAMPLE_INTERVAL == 1 {
            let data = format!(
                "Frame: {}\n\
                     Position: {}\n\
                     Velocity: {} ({:.2} km/s)\n\
                     Distance from center: {:.2}\n\
                     Trail points: {}\n",
                self.steps,
                Self::format_vector2d(&frame.position, 2),
                Self::format_vector2d(&frame.velocity, 2),
                display_speed,
                distance,
                frame.trail.len()
            );
            self.log.push(data);
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn max_display_speed(&self) -> f64 {
        self.max_display_speed
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn display_data(&self) {
        println!("--- Flight Telemetry ---");
        for entry in &self.log {
            println!("{}", entry);
        }

        println!("--- Flight Summary ---");
        println!("Frames: {}", self.steps);
        println!("Max Speed: {:.2} km/s", self.max_display_speed);
        if self.steps > 0 {
            println!("Closest Approach: {:.2}", self.min_distance);
            println!("Farthest Distance: {:.2}", self.max_distance);
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}
