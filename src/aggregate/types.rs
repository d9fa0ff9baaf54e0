use serde::Serialize;

/// One rubric dimension in the final breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub criterion: &'static str,
    pub score: u32,
    pub max: u32,
    pub feedback: String,
}

/// Transcript-level statistics echoed back alongside the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    pub word_count: usize,
    /// Duration as supplied by the caller, in seconds.
    pub duration: Option<u32>,
}

/// The engine's sole output: total score plus the per-dimension breakdown.
///
/// Invariants by construction: every entry's `score <= max`, the maxima sum
/// to 100, and `overall_score` equals the sum of the entry scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    pub overall_score: u32,
    pub breakdown: Vec<BreakdownEntry>,
    pub transcript_stats: TranscriptStats,
}

impl ScoringResult {
    /// Convenience lookup by criterion name.
    pub fn entry(&self, criterion: &str) -> Option<&BreakdownEntry> {
        self.breakdown.iter().find(|e| e.criterion == criterion)
    }
}
