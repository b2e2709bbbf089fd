//! Idempotent substring patches.
//!
//! A patch never parses the target format. It replaces the first occurrence
//! of `needle` with `replacer` unless `replacer` is already in the text, so
//! re-running an install over the same project leaves files untouched.

/// A single `needle -> replacer` substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub needle: String,
    pub replacer: String,
}

impl Replacement {
    pub fn new(needle: impl Into<String>, replacer: impl Into<String>) -> Self {
        Self { needle: needle.into(), replacer: replacer.into() }
    }
}

/// Result of applying one replacement to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The needle was replaced.
    Applied,
    /// The replacer was already present; nothing changed.
    AlreadyPresent,
    /// Neither replacer nor needle occur in the text; nothing changed.
    NeedleMissing,
}

/// Apply `replacement` to `content`, returning the new text and what happened.
pub fn apply_replacement(content: &str, replacement: &Replacement) -> (String, PatchOutcome) {
    if content.contains(&replacement.replacer) {
        return (content.to_string(), PatchOutcome::AlreadyPresent);
    }
    if !content.contains(&replacement.needle) {
        return (content.to_string(), PatchOutcome::NeedleMissing);
    }
    (content.replacen(&replacement.needle, &replacement.replacer, 1), PatchOutcome::Applied)
}

/// Apply several replacements in order.
pub fn apply_all(content: &str, replacements: &[Replacement]) -> (String, Vec<PatchOutcome>) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(replacements.len());
    for replacement in replacements {
        let (next, outcome) = apply_replacement(&current, replacement);
        current = next;
        outcomes.push(outcome);
    }
    (current, outcomes)
}
