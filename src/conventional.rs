pub use crate::version::BumpLevel;

/// Determines the version bump level from a batch of commit messages.
///
/// First-match wins, in priority order:
/// 1. Any message containing the literal substring `BREAKING CHANGE`
///    (case-sensitive) -> Major
/// 2. Any message whose lower-cased text starts with `feat` -> Minor
/// 3. Otherwise -> Patch
///
/// The case asymmetry is deliberate: the breaking-change footer is an exact
/// conventional-commits marker, while `feat`/`Feat`/`FEAT` subjects are all
/// accepted as features.
pub fn classify_bump_level(messages: &[String]) -> BumpLevel {
    if messages.iter().any(|m| m.contains("BREAKING CHANGE")) {
        return BumpLevel::Major;
    }
    if messages
        .iter()
        .any(|m| m.to_lowercase().starts_with("feat"))
    {
        return BumpLevel::Minor;
    }
    BumpLevel::Patch
}

/// Checks whether the batch already contains a version-bump commit.
///
/// Matches the configured marker text case-insensitively anywhere in a
/// message. Used to short-circuit the run and avoid bump loops in CI.
pub fn is_version_bump_commit(messages: &[String], marker: &str) -> bool {
    let marker = marker.to_lowercase();
    messages
        .iter()
        .any(|m| m.to_lowercase().contains(&marker))
}
