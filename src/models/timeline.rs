//! Execution timeline model.
//!
//! A timeline is the ordered, gap-free sequence of segments describing
//! what the CPU was doing over `[0, total_time)`. Gaps where no process
//! was ready are filled with explicit idle segments.

use serde::{Deserialize, Serialize};

/// What occupies the CPU during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// A process was running.
    Process {
        /// Process identity.
        id: String,
        /// Display name at the time of the run.
        name: String,
    },
    /// No process was ready.
    Idle,
}

impl Occupant {
    /// Label for rendering: the process name, or `"Idle"`.
    pub fn label(&self) -> &str {
        match self {
            Occupant::Process { name, .. } => name,
            Occupant::Idle => "Idle",
        }
    }

    /// Process identity, `None` for idle.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Occupant::Process { id, .. } => Some(id),
            Occupant::Idle => None,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }
}

/// A contiguous interval `[start, end)` of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Running process or idle.
    pub occupant: Occupant,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Creates a segment for a running process.
    pub fn process(
        id: impl Into<String>,
        name: impl Into<String>,
        start: i64,
        end: i64,
    ) -> Self {
        Self {
            occupant: Occupant::Process {
                id: id.into(),
                name: name.into(),
            },
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            occupant: Occupant::Idle,
            start,
            end,
        }
    }

    /// Duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant.is_idle()
    }
}

/// Append-only timeline builder.
///
/// Segments are appended at the current end; zero-length segments are
/// dropped. `extend_or_push` merges with the last segment when it has the
/// same occupant and ends exactly where the new one starts.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// End tick of the last segment (0 when empty).
    pub fn end(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Appends a segment as-is.
    pub fn push(&mut self, segment: TimelineSegment) {
        debug_assert_eq!(segment.start, self.end(), "timeline must stay contiguous");
        if segment.duration() > 0 {
            self.segments.push(segment);
        }
    }

    /// Appends an idle segment up to `until`, if the timeline ends before it.
    pub fn idle_until(&mut self, until: i64) {
        let start = self.end();
        if until > start {
            self.segments.push(TimelineSegment::idle(start, until));
        }
    }

    /// Appends a segment, coalescing with the last one when the occupant
    /// is unchanged.
    pub fn extend_or_push(&mut self, segment: TimelineSegment) {
        if segment.duration() <= 0 {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.occupant == segment.occupant && last.end == segment.start {
                last.end = segment.end;
                return;
            }
        }
        self.push(segment);
    }

    /// Sum of non-idle durations.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimelineSegment::duration)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<TimelineSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_duration() {
        let s = TimelineSegment::process("P1", "P1", 2, 7);
        assert_eq!(s.duration(), 5);
        assert!(!s.is_idle());
        assert_eq!(s.occupant.process_id(), Some("P1"));
        assert_eq!(s.occupant.label(), "P1");

        let idle = TimelineSegment::idle(0, 2);
        assert!(idle.is_idle());
        assert_eq!(idle.occupant.label(), "Idle");
        assert_eq!(idle.occupant.process_id(), None);
    }

    #[test]
    fn test_idle_until() {
        let mut t = Timeline::new();
        t.idle_until(3);
        t.push(TimelineSegment::process("P1", "P1", 3, 5));
        t.idle_until(5); // no gap, nothing appended
        assert_eq!(t.len(), 2);
        assert_eq!(t.end(), 5);
        assert_eq!(t.busy_time(), 2);
    }

    #[test]
    fn test_extend_or_push_merges_same_occupant() {
        let mut t = Timeline::new();
        t.extend_or_push(TimelineSegment::process("P1", "P1", 0, 2));
        t.extend_or_push(TimelineSegment::process("P1", "P1", 2, 4));
        t.extend_or_push(TimelineSegment::process("P2", "P2", 4, 5));
        let segs = t.into_segments();
        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].start, segs[0].end), (0, 4));
        assert_eq!((segs[1].start, segs[1].end), (4, 5));
    }

    #[test]
    fn test_push_keeps_repeated_slices_separate() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::process("P1", "P1", 0, 4));
        t.push(TimelineSegment::process("P1", "P1", 4, 8));
        assert_eq!(t.len(), 2);
        assert_eq!(t.busy_time(), 8);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.end(), 0);
        assert_eq!(t.busy_time(), 0);
    }
}
