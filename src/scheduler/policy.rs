//! Policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DispatchPolicy, Fcfs, Priority, RoundRobin, Sjn, Srtf};
use crate::error::ScheduleError;
use crate::models::Ticks;

/// The five supported dispatch disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-Next.
    #[serde(rename = "SJN")]
    Sjn,
    /// Non-preemptive priority.
    Priority,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
    /// Shortest-Remaining-Time-First (dispatch to completion).
    #[serde(rename = "SRTF")]
    Srtf,
}

impl PolicyKind {
    /// All policies in canonical order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjn,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
        PolicyKind::Srtf,
    ];

    /// Canonical selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjn => "SJN",
            Self::Priority => "Priority",
            Self::RoundRobin => "RoundRobin",
            Self::Srtf => "SRTF",
        }
    }

    /// Whether this policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Builds the policy.
    ///
    /// # Errors
    /// `MissingQuantum` for Round-Robin when `quantum` is absent or not
    /// positive. The quantum is ignored by every other policy.
    pub fn build(&self, quantum: Option<Ticks>) -> Result<Box<dyn DispatchPolicy>, ScheduleError> {
        let policy: Box<dyn DispatchPolicy> = match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjn => Box::new(Sjn),
            Self::Priority => Box::new(Priority),
            Self::Srtf => Box::new(Srtf),
            Self::RoundRobin => match quantum {
                Some(q) if q > 0 => Box::new(RoundRobin::new(q)),
                _ => return Err(ScheduleError::MissingQuantum),
            },
        };
        Ok(policy)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ScheduleError;

    /// Parses a selector, case-insensitively. `SJF`, `RR` and
    /// `Round Robin` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJN" | "SJF" => Ok(Self::Sjn),
            "PRIORITY" => Ok(Self::Priority),
            "ROUNDROBIN" | "RR" => Ok(Self::RoundRobin),
            "SRTF" => Ok(Self::Srtf),
            _ => Err(ScheduleError::UnknownPolicy(s.to_string())),
        }
    }
}
