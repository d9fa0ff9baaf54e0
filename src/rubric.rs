//! Cross-cutting rubric constants.
//!
//! The rubric is fixed: five dimensions whose maxima sum to 100. Thresholds,
//! keyword tables and the judge prompt live here so that the metrics
//! calculator, the normalizer and the aggregator cannot drift apart.

/// Maximum points for the Content & Structure dimension.
pub const CONTENT_MAX: u32 = 40;
/// Maximum points for the Speech Rate dimension.
pub const SPEECH_RATE_MAX: u32 = 10;
/// Maximum points for the Language & Grammar dimension.
pub const LANGUAGE_MAX: u32 = 20;
/// Maximum points for the Clarity dimension.
pub const CLARITY_MAX: u32 = 15;
/// Maximum points for the Engagement dimension.
pub const ENGAGEMENT_MAX: u32 = 15;

/// Speech-rate band boundaries in words per minute.
///
/// Bands are closed-open and exhaustive over `[0, inf)`:
/// `< SLOW_MIN` too slow, `[SLOW_MIN, IDEAL_MIN)` slow,
/// `[IDEAL_MIN, FAST_MIN)` ideal, `[FAST_MIN, TOO_FAST_MIN)` fast,
/// `>= TOO_FAST_MIN` too fast.
pub const WPM_SLOW_MIN: f64 = 81.0;
pub const WPM_IDEAL_MIN: f64 = 111.0;
pub const WPM_FAST_MIN: f64 = 141.0;
pub const WPM_TOO_FAST_MIN: f64 = 161.0;

/// Quality thresholds shared by grammar, vocabulary and engagement banding,
/// applied to a value in `[0, 1]`.
pub const QUALITY_EXCELLENT: f64 = 0.9;
pub const QUALITY_GOOD: f64 = 0.7;
pub const QUALITY_AVERAGE: f64 = 0.5;
pub const QUALITY_POOR: f64 = 0.3;

/// Filler-rate thresholds in percent of total words (inclusive upper bounds).
pub const FILLER_EXCELLENT: f64 = 3.0;
pub const FILLER_GOOD: f64 = 6.0;
pub const FILLER_AVERAGE: f64 = 9.0;
pub const FILLER_POOR: f64 = 12.0;

/// Grammar-error density (errors per 100 words) at which quality bottoms out.
pub const GRAMMAR_DENSITY_CEILING: f64 = 10.0;

/// Points per matched must-have keyword category.
pub const MUST_HAVE_POINTS: u32 = 4;
/// Points per matched good-to-have keyword category.
pub const GOOD_TO_HAVE_POINTS: u32 = 2;
/// Hard cap on the combined keyword score.
pub const KEYWORD_SCORE_CAP: u32 = 30;

/// Points awarded when the expected topic order was followed.
pub const FLOW_POINTS: u32 = 5;

/// Salutation score assumed when the judge says nothing usable. The full
/// label-to-score table lives on
/// [`SalutationLevel`](crate::normalize::SalutationLevel).
pub const SALUTATION_DEFAULT_SCORE: u32 = 2;

/// Must-have keyword categories with their synonym phrases. A category counts
/// as found when any synonym (or the category name itself) is a substring of
/// a normalized keyword reported by the judge.
pub const MUST_HAVE_KEYWORDS: &[(&str, &[&str])] = &[
    ("name", &["name", "myself", "i am"]),
    ("age", &["age", "years old"]),
    ("school", &["school", "class", "studying"]),
    ("family", &["family", "mother", "father", "parents"]),
    (
        "hobbies",
        &["hobby", "hobbies", "interest", "enjoy", "play", "like to"],
    ),
];

/// Good-to-have keyword categories, same matching rules as must-have.
pub const GOOD_TO_HAVE_KEYWORDS: &[(&str, &[&str])] = &[
    ("origin", &["origin", "from", "live"]),
    ("ambition", &["ambition", "goal", "dream", "become"]),
    ("fact", &["fact", "unique", "special"]),
    ("strength", &["strength", "achievement"]),
];

/// Discourse fillers counted for the clarity score. Matched case-insensitively
/// against individual tokens, so multi-word entries only match if the
/// tokenizer ever yields them as a single token.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right",
    "i mean", "well", "kinda", "sort of", "okay", "hmm", "ah",
];

/// Instruction template sent to the semantic judge ahead of the transcript.
pub const JUDGE_PROMPT: &str = "\
You are an expert communication coach evaluating a student's self-introduction transcript.
Your task is to analyze the text based on specific criteria and return a structured JSON response.

Analyze the following aspects:
1. **Salutation Level**:
   - \"No Salutation\" (0 pts)
   - \"Normal\" (e.g., Hi, Hello) (2 pts)
   - \"Good\" (e.g., Good Morning, Hello everyone) (4 pts)
   - \"Excellent\" (e.g., Excited to introduce, Feeling great) (5 pts)

2. **Keyword Presence**:
   Check for the presence of these topics. Return a list of found topics.
   - Must Have: Name, Age, School/Class, Family, Hobbies/Interest.
   - Good to Have: Origin/Location, Ambition/Goal, Fun fact/Unique point, Strengths/Achievements.

3. **Flow**:
   Check if the order is: Salutation -> Basic Details (Name, Age, School) -> Additional Details -> Closing.
   - \"Order followed\" (5 pts)
   - \"Order Not followed\" (0 pts)

4. **Engagement/Sentiment**:
   Analyze the tone. Is it Positive (enthusiastic), Neutral, or Negative?

Output strictly in JSON format.";
