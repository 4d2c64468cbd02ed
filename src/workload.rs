//! Random workload generation.
//!
//! Produces valid process sets for simulation studies: IDs are `1..=n`,
//! arrivals are non-negative and bursts positive regardless of the
//! configured ranges.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(10)
//!     .with_arrival_range(0, 20)
//!     .with_burst_range(1, 8)
//!     .generate(&mut rng);
//! assert_eq!(processes.len(), 10);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, ProcessId, Ticks};

/// Random process set generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Inclusive arrival time range.
    pub arrival_range: (Ticks, Ticks),
    /// Inclusive burst time range.
    pub burst_range: (Ticks, Ticks),
    /// Inclusive priority range.
    pub priority_range: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            process_count: 5,
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: (0, 5),
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `process_count` processes with default ranges.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            ..Default::default()
        }
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Generates a process set.
    ///
    /// Ranges are reordered if reversed, arrivals are clamped to `>= 0` and
    /// bursts to `>= 1`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        let (arrival_lo, arrival_hi) = ordered(self.arrival_range, 0);
        let (burst_lo, burst_hi) = ordered(self.burst_range, 1);
        let (prio_lo, prio_hi) = ordered(self.priority_range, i32::MIN);

        (1..=self.process_count)
            .map(|n| ProcessDescriptor {
                id: n as ProcessId,
                arrival_time: rng.random_range(arrival_lo..=arrival_hi),
                burst_time: rng.random_range(burst_lo..=burst_hi),
                priority: rng.random_range(prio_lo..=prio_hi),
            })
            .collect()
    }
}

fn ordered<T: Ord + Copy>((a, b): (T, T), floor: T) -> (T, T) {
    (a.min(b).max(floor), a.max(b).max(floor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_valid_processes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(50)
            .with_arrival_range(0, 30)
            .with_burst_range(1, 12)
            .with_priority_range(1, 4);
        let processes = generator.generate(&mut rng);

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..=30).contains(&p.arrival_time));
            assert!((1..=12).contains(&p.burst_time));
            assert!((1..=4).contains(&p.priority));
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_are_sanitized() {
        let mut rng = SmallRng::seed_from_u64(1);
        let processes = WorkloadGenerator::new(20)
            .with_arrival_range(5, -5)
            .with_burst_range(-3, 0)
            .generate(&mut rng);

        assert!(processes.iter().all(|p| (0..=5).contains(&p.arrival_time)));
        assert!(processes.iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_zero_processes() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(WorkloadGenerator::new(0).generate(&mut rng).is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let generator: WorkloadGenerator =
            serde_json::from_str(r#"{"process_count": 3, "burst_range": [2, 4]}"#).unwrap();
        assert_eq!(generator.process_count, 3);
        assert_eq!(generator.burst_range, (2, 4));
        assert_eq!(generator.arrival_range, (0, 10));
    }
}
