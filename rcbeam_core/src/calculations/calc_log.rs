//! # Calculation Log
//!
//! Append-only, ordered record of the derivation steps of one evaluation.
//! Steps are grouped into [`Phase`]s; each phase starts with a header that
//! renders as a distinguishable string so a presenter working on raw lines
//! can still split the log into sections.
//!
//! ```rust
//! use rcbeam_core::calculations::calc_log::{CalcLog, Phase};
//!
//! let mut log = CalcLog::new();
//! log.begin(Phase::Inputs);
//! log.step("f'c = 240 kg/cm², fy = 4000 kg/cm²");
//! log.begin(Phase::RatioBounds);
//! log.step("rho_min = 0.0031");
//!
//! let lines = log.lines();
//! assert!(CalcLog::is_header(&lines[0]));
//! assert!(!CalcLog::is_header(&lines[1]));
//! assert_eq!(log.segments().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Logical phase of the evaluation, in the order phases are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Inputs,
    RatioBounds,
    RequiredSteel,
    TensionSteel,
    CompressionSteel,
    MomentCapacity,
    ShearCapacity,
    Stirrups,
    Summary,
}

impl Phase {
    /// All phases in emission order
    pub const ALL: [Phase; 9] = [
        Phase::Inputs,
        Phase::RatioBounds,
        Phase::RequiredSteel,
        Phase::TensionSteel,
        Phase::CompressionSteel,
        Phase::MomentCapacity,
        Phase::ShearCapacity,
        Phase::Stirrups,
        Phase::Summary,
    ];

    /// Section title
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Inputs => "Beam Design (Strength Design Method)",
            Phase::RatioBounds => "Reinforcement Ratio Limits",
            Phase::RequiredSteel => "Required Steel",
            Phase::TensionSteel => "Tension Steel",
            Phase::CompressionSteel => "Compression Steel",
            Phase::MomentCapacity => "Moment Capacity",
            Phase::ShearCapacity => "Shear Check",
            Phase::Stirrups => "Stirrups",
            Phase::Summary => "Design Summary",
        }
    }

    /// Top-level phases frame the log and use the `===` marker
    pub fn is_top_level(&self) -> bool {
        matches!(self, Phase::Inputs | Phase::Summary)
    }

    /// Rendered header line
    pub fn header(&self) -> String {
        if self.is_top_level() {
            format!("=== {} ===", self.title())
        } else {
            format!("--- {} ---", self.title())
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// One entry of the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text")]
pub enum LogEntry {
    Header(Phase),
    Step(String),
}

impl LogEntry {
    /// Render as the line a presenter displays verbatim
    pub fn render(&self) -> String {
        match self {
            LogEntry::Header(phase) => phase.header(),
            LogEntry::Step(text) => text.clone(),
        }
    }
}

/// Ordered derivation log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalcLog {
    entries: Vec<LogEntry>,
}

impl CalcLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a phase. A phase that was already started is not repeated.
    pub fn begin(&mut self, phase: Phase) {
        if !self.has_phase(phase) {
            self.entries.push(LogEntry::Header(phase));
        }
    }

    /// Append a derivation step to the current phase
    pub fn step(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry::Step(text.into()));
    }

    /// Whether a phase header has been emitted
    pub fn has_phase(&self, phase: Phase) -> bool {
        self.entries.iter().any(|e| *e == LogEntry::Header(phase))
    }

    /// The most recently started phase
    pub fn current_phase(&self) -> Option<Phase> {
        self.entries.iter().rev().find_map(|e| match e {
            LogEntry::Header(p) => Some(*p),
            LogEntry::Step(_) => None,
        })
    }

    /// Phases in the order they were started
    pub fn phases(&self) -> Vec<Phase> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                LogEntry::Header(p) => Some(*p),
                LogEntry::Step(_) => None,
            })
            .collect()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every entry rendered as a line, headers included
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render).collect()
    }

    /// Steps grouped under their phase, in order. Steps logged before any
    /// header are not part of a segment.
    pub fn segments(&self) -> Vec<(Phase, Vec<String>)> {
        let mut segments: Vec<(Phase, Vec<String>)> = Vec::new();
        for entry in &self.entries {
            match entry {
                LogEntry::Header(phase) => segments.push((*phase, Vec::new())),
                LogEntry::Step(text) => {
                    if let Some((_, lines)) = segments.last_mut() {
                        lines.push(text.clone());
                    }
                }
            }
        }
        segments
    }

    /// Whether a rendered line is a phase header
    pub fn is_header(line: &str) -> bool {
        let line = line.trim();
        line.len() > 6
            && ((line.starts_with("===") && line.ends_with("==="))
                || (line.starts_with("---") && line.ends_with("---")))
    }
}

impl std::fmt::Display for CalcLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if let LogEntry::Header(phase) = entry {
                if i > 0 && !matches!(phase, Phase::Inputs) {
                    writeln!(f)?;
                }
            }
            write!(f, "{}", entry.render())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_markers() {
        assert_eq!(Phase::Inputs.header(), "=== Beam Design (Strength Design Method) ===");
        assert_eq!(Phase::Summary.header(), "=== Design Summary ===");
        assert_eq!(Phase::Stirrups.header(), "--- Stirrups ---");
        for phase in Phase::ALL {
            assert!(CalcLog::is_header(&phase.header()));
        }
    }

    #[test]
    fn test_is_header_rejects_steps() {
        assert!(!CalcLog::is_header("a = 3.94 cm"));
        assert!(!CalcLog::is_header("---"));
        assert!(!CalcLog::is_header("--- unterminated"));
    }

    #[test]
    fn test_phase_emitted_once() {
        let mut log = CalcLog::new();
        log.begin(Phase::Inputs);
        log.begin(Phase::Inputs);
        log.step("x");
        assert_eq!(log.phases(), vec![Phase::Inputs]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_segments_group_steps() {
        let mut log = CalcLog::new();
        log.step("orphan");
        log.begin(Phase::Inputs);
        log.step("one");
        log.step("two");
        log.begin(Phase::Summary);
        log.step("three");

        let segments = log.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], (Phase::Inputs, vec!["one".to_string(), "two".to_string()]));
        assert_eq!(segments[1].0, Phase::Summary);
        assert_eq!(log.current_phase(), Some(Phase::Summary));
    }

    #[test]
    fn test_phase_order() {
        let mut sorted = Phase::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Phase::ALL.to_vec());
    }

    #[test]
    fn test_serialization() {
        let mut log = CalcLog::new();
        log.begin(Phase::ShearCapacity);
        log.step("Vc = 11,331 kg");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
        let back: CalcLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
