//! CPU scheduling domain models.
//!
//! Provides the input record for a process and the schedule produced by a
//! dispatch policy.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Immutable caller input |
//! | `RuntimeProcess` | Per-dispatch progress (remaining service) |
//! | `ExecutionInterval` | One stretch of CPU time |
//! | `Schedule` | Ordered intervals on the single CPU |

mod process;
mod schedule;

pub use process::{ProcessDescriptor, ProcessId, RuntimeProcess, Ticks};
pub use schedule::{ExecutionInterval, Schedule, Violation, ViolationType};
