//! Single-processor CPU scheduling simulator.
//!
//! Computes deterministic execution schedules for a set of processes under
//! five classic disciplines and derives waiting/turnaround metrics from them.
//! Rendering and input collection are left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `RuntimeProcess`,
//!   `ExecutionInterval`, `Schedule`
//! - **`dispatching`**: Selection rules (arrival, burst, priority) and the
//!   sequential `RuleEngine` used to pick from the ready set
//! - **`scheduler`**: The `DispatchPolicy` implementations (`Fcfs`, `Sjn`,
//!   `Priority`, `RoundRobin`, `Srtf`), `ScheduleMetrics`, and the
//!   `simulate` facade
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs,
//!   non-positive bursts and quanta)
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 5),
//!     ProcessDescriptor::new(2, 0, 3),
//! ];
//! let outcome = simulate("RoundRobin", &processes, Some(2)).unwrap();
//!
//! let slices: Vec<_> = outcome
//!     .schedule
//!     .iter()
//!     .map(|i| (i.process_id, i.start_time, i.end_time))
//!     .collect();
//! assert_eq!(slices, vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7), (1, 7, 8)]);
//! assert!((outcome.metrics.avg_turnaround_time - 7.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
