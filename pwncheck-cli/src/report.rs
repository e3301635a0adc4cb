//! Presentation pieces for check results: severity bands, flavor message
//! pools and password strength tips.
//!
//! None of this has a correctness contract beyond the band thresholds; the
//! message pools are plain data and the selector takes the RNG as an
//! argument so tests can seed it.

use std::fmt;

use rand::Rng;
use serde::Deserialize;

static MESSAGES: &str = include_str!("../assets/messages.json");

/// How bad a breach count is, for the user-facing verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn of_count(count: u64) -> Self {
        if count > 100_000 {
            Severity::Critical
        } else if count > 10_000 {
            Severity::High
        } else if count > 1_000 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Flavor message pools, one per severity band plus a "safe" pool.
#[derive(Debug, Deserialize)]
pub struct MessageBank {
    safe: Vec<String>,
    compromised: CompromisedPools,
}

#[derive(Debug, Deserialize)]
struct CompromisedPools {
    low: Vec<String>,
    medium: Vec<String>,
    high: Vec<String>,
    critical: Vec<String>,
}

impl MessageBank {
    pub fn load() -> Self {
        serde_json::from_str(MESSAGES).expect("embedded message bank is valid JSON")
    }

    pub fn safe(&self, rng: &mut impl Rng) -> &str {
        pick(&self.safe, rng)
    }

    pub fn compromised(&self, severity: Severity, rng: &mut impl Rng) -> &str {
        let pool = match severity {
            Severity::Low => &self.compromised.low,
            Severity::Medium => &self.compromised.medium,
            Severity::High => &self.compromised.high,
            Severity::Critical => &self.compromised.critical,
        };
        pick(pool, rng)
    }
}

fn pick<'a>(pool: &'a [String], rng: &mut impl Rng) -> &'a str {
    &pool[rng.gen_range(0..pool.len())]
}

/// Advisory strength tips for a secret, independent of the breach check.
pub fn strength_tips(secret: &str) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if secret.chars().count() < 12 {
        tips.push("Use at least 12 characters for better security");
    }
    if !secret.chars().any(|c| c.is_ascii_uppercase()) {
        tips.push("Add uppercase letters (A-Z)");
    }
    if !secret.chars().any(|c| c.is_ascii_lowercase()) {
        tips.push("Add lowercase letters (a-z)");
    }
    if !secret.chars().any(|c| c.is_ascii_digit()) {
        tips.push("Add numbers (0-9)");
    }
    if secret.chars().all(|c| c.is_ascii_alphanumeric()) {
        tips.push("Add special characters (!@#$%^&*)");
    }

    let lowered = secret.to_lowercase();
    if ["123", "abc", "qwe", "password", "admin"].iter().any(|p| lowered.contains(p)) {
        tips.push("Avoid common patterns like \"123\", \"abc\", or \"password\"");
    }
    if has_triple_repeat(secret) {
        tips.push("Avoid repeating the same character multiple times");
    }

    tips
}

fn has_triple_repeat(secret: &str) -> bool {
    let mut run = 0;
    let mut last = None;
    for c in secret.chars() {
        if Some(c) == last {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            last = Some(c);
            run = 1;
        }
    }
    false
}

/// Renders a count with thousands separators: 2254650 -> "2,254,650".
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
