//! # Strength Classification
//!
//! A deterministic heuristic over the password text itself, independent of
//! how it was generated: length buckets refined by class diversity (how many
//! of the four character classes appear at least once).

/// Heuristic strength bucket for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

/// Number of distinct character classes present (0-4).
fn diversity(password: &str) -> usize {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    [has_upper, has_lower, has_digit, has_special]
        .into_iter()
        .filter(|&present| present)
        .count()
}

/// Classify a password by length bucket and class diversity.
///
/// - length < 8 → Weak
/// - 8 ≤ length < 12 → Medium when diversity ≥ 3, else Weak
/// - length ≥ 12 → Strong when diversity ≥ 3, else Medium
///
/// Length counts Unicode scalar values, matching how the rest of the
/// application counts characters.
pub fn classify(password: &str) -> Strength {
    let length = password.chars().count();
    let diverse = diversity(password) >= 3;

    if length < 8 {
        Strength::Weak
    } else if length < 12 {
        if diverse { Strength::Medium } else { Strength::Weak }
    } else if diverse {
        Strength::Strong
    } else {
        Strength::Medium
    }
}
