//! Keyword-based visual classification of problem entities.
//!
//! The schematic picks a draw style per entity by scanning its display name
//! and the problem text for domain vocabulary: vehicles with physical length
//! are drawn as extended bodies, stationary structures as fixed-span
//! landmarks, everything else as point agents. Round-trip ("shuttle") motion
//! is likewise inferred from narrative vocabulary.
//!
//! This is presentation-only pattern matching, not physics: classification
//! never feeds back into positions or timing, and it is best-effort:
//! unusual wording can and will misclassify. Keep it that way; callers must
//! not depend on it for correctness.

use crate::problem::MovementParams;

/// Draw style selected for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    /// A dot with a velocity-direction arrow.
    PointAgent,
    /// A moving rectangle with physical length (trains, convoys).
    ExtendedBody,
    /// A stationary extent drawn once at a fixed location (bridges, tunnels).
    FixedSpan,
}

/// Vehicle-with-length vocabulary (Chinese exam phrasing plus English).
const EXTENDED_BODY_KEYWORDS: &[&str] = &[
    "火车", "列车", "车队", "队伍", "地铁", "高铁", "train", "convoy", "column",
];

/// Stationary-structure vocabulary.
const FIXED_SPAN_KEYWORDS: &[&str] = &[
    "大桥", "桥", "隧道", "电线杆", "灯", "站台", "终点", "bridge", "tunnel", "pole", "platform",
];

/// Round-trip / shuttle-motion vocabulary.
const ROUND_TRIP_KEYWORDS: &[&str] = &[
    "往返", "折返", "返回", "立即返回", "来回", "round trip", "bounce back", "turns around",
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Pick a draw style for one entity from its display name.
///
/// Fixed-span vocabulary wins over extended-body vocabulary, so a name like
/// "大桥" (bridge) stays a landmark even in a problem full of trains.
pub fn classify_entity(name: &str) -> VisualKind {
    if contains_any(name, FIXED_SPAN_KEYWORDS) {
        VisualKind::FixedSpan
    } else if contains_any(name, EXTENDED_BODY_KEYWORDS) {
        VisualKind::ExtendedBody
    } else {
        VisualKind::PointAgent
    }
}

/// Whether the problem narrative describes motion on a bounded track with
/// reversal at the ends ("second meeting" problems and similar).
///
/// Checked against question, analysis, and title; a zero-length track never
/// reflects regardless of wording.
pub fn detect_round_trip(params: &MovementParams, title: &str, question: &str, analysis: &str) -> bool {
    if params.initial_distance <= 0.0 {
        return false;
    }
    contains_any(title, ROUND_TRIP_KEYWORDS)
        || contains_any(question, ROUND_TRIP_KEYWORDS)
        || contains_any(analysis, ROUND_TRIP_KEYWORDS)
}
