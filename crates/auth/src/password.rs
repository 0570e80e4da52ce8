//! Password policy and strength scoring for the register/profile forms.

use serde::Serialize;

/// Per-criterion result of the strong-password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub has_min_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
}

impl PasswordReport {
    pub fn is_strong(&self) -> bool {
        self.has_min_length && self.has_upper_case && self.has_lower_case && self.has_number
    }
}

/// Evaluate the strong-password policy: min 8 chars, at least one upper, one
/// lower and one digit.
pub fn check(password: &str) -> PasswordReport {
    PasswordReport {
        has_min_length: password.chars().count() >= 8,
        has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
        has_number: password.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Strength score, 0-100.
///
/// Length ≥8 and ≥12 are worth 25 each, mixed case 25, a digit 12.5 and a
/// symbol 12.5, capped at 100.
pub fn strength(password: &str) -> f32 {
    if password.is_empty() {
        return 0.0;
    }

    let len = password.chars().count();
    let mut score = 0.0f32;

    if len >= 8 {
        score += 25.0;
    }
    if len >= 12 {
        score += 25.0;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 25.0;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 12.5;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 12.5;
    }

    score.min(100.0)
}

/// Label shown next to the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn for_score(score: f32) -> Self {
        if score < 40.0 {
            StrengthLabel::Weak
        } else if score < 70.0 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Débil",
            StrengthLabel::Medium => "Media",
            StrengthLabel::Strong => "Fuerte",
        }
    }
}
