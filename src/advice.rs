// Improvement tips keyed by predicted sentiment

const NEGATIVE_TIPS: &[&str] = &[
    "Provide clearer guidance and structured tasks.",
    "Balance intern workload and set realistic expectations.",
    "Increase frequency of mentor check-ins and feedback.",
];

const NEUTRAL_TIPS: &[&str] = &[
    "Add more challenging, real-world tasks.",
    "Offer deeper training sessions and resources.",
];

/// Improvement tips for a predicted sentiment label.
///
/// Matching is case-insensitive. Labels other than "negative" and "neutral"
/// (typically "positive") get no tips.
pub fn tips_for(label: &str) -> &'static [&'static str] {
    match label.to_lowercase().as_str() {
        "negative" => NEGATIVE_TIPS,
        "neutral" => NEUTRAL_TIPS,
        _ => &[],
    }
}
