use std::fmt;

use serde::Serialize;

/// Salutation strength reported by the judge, canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalutationLevel {
    NoSalutation,
    Normal,
    Good,
    Excellent,
}

impl SalutationLevel {
    /// Exact label lookup against the rubric table. Unknown labels map to
    /// `None` so callers can apply the default.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "No Salutation" => Some(SalutationLevel::NoSalutation),
            "Normal" => Some(SalutationLevel::Normal),
            "Good" => Some(SalutationLevel::Good),
            "Excellent" => Some(SalutationLevel::Excellent),
            _ => None,
        }
    }

    /// Reverse lookup from a bare score; only the exact table entries are
    /// defined, everything else reads as `Normal`.
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => SalutationLevel::NoSalutation,
            4 => SalutationLevel::Good,
            5 => SalutationLevel::Excellent,
            _ => SalutationLevel::Normal,
        }
    }

    pub fn score(self) -> u32 {
        match self {
            SalutationLevel::NoSalutation => 0,
            SalutationLevel::Normal => 2,
            SalutationLevel::Good => 4,
            SalutationLevel::Excellent => 5,
        }
    }
}

impl fmt::Display for SalutationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SalutationLevel::NoSalutation => "No Salutation",
            SalutationLevel::Normal => "Normal",
            SalutationLevel::Good => "Good",
            SalutationLevel::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// Shapes the judge has been observed to use for the salutation field.
/// Parsed exhaustively before coercion instead of ad hoc type sniffing.
#[derive(Debug, Clone, PartialEq)]
pub enum SalutationField {
    Label(String),
    Score(i64),
    Detailed {
        label: Option<String>,
        score: Option<i64>,
    },
    Missing,
}

/// Shapes the judge has been observed to use for the flow field.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowField {
    Detailed {
        status: Option<String>,
        order_followed: Option<bool>,
        score: Option<i64>,
    },
    Score(i64),
    Followed(bool),
    Status(String),
    Missing,
}

/// Canonical, fully-typed form of the judge's verdict. Derived
/// deterministically; absent or unrecognized fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedVerdict {
    pub salutation_level: SalutationLevel,
    /// 0-5, clamped.
    pub salutation_score: u32,
    /// Flattened, lowercased keyword strings in judge order.
    pub found_keywords: Vec<String>,
    /// Combined keyword score, capped at 30.
    pub keyword_score: u32,
    pub must_have_matches: u32,
    pub good_to_have_matches: u32,
    pub flow_followed: bool,
    /// Display form of the flow status, for feedback only.
    pub flow_status: String,
    /// Display-only tone label; numeric engagement scoring is rule-based.
    pub engagement_tone: String,
}

impl Default for NormalizedVerdict {
    fn default() -> Self {
        Self {
            salutation_level: SalutationLevel::Normal,
            salutation_score: SalutationLevel::Normal.score(),
            found_keywords: Vec::new(),
            keyword_score: 0,
            must_have_matches: 0,
            good_to_have_matches: 0,
            flow_followed: false,
            flow_status: "Order Not followed".to_string(),
            engagement_tone: "Neutral".to_string(),
        }
    }
}
