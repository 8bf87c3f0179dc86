//! Reference deduplication

use herald_core::Reference;

/// Drop closing references whose issue is already linked inline.
///
/// A reference is removed only when it has an action (closes, fixes, ...)
/// and its issue number is in `linked_issues`. Plain mentions always stay.
pub fn dedupe(references: Vec<Reference>, linked_issues: &[String]) -> Vec<Reference> {
    references
        .into_iter()
        .filter(|reference| {
            reference.action.is_none() || !linked_issues.contains(&reference.issue)
        })
        .collect()
}
