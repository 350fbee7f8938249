//! Task ID generation
//!
//! Generated tasks get IDs of the form `{6-char-hex}-task-{slug}`, e.g.
//! `0193f2-task-draft-api-error-budget`. The hex prefix comes from a UUIDv7
//! so IDs sort roughly by creation time.

/// Generate a unique ID for a record of the given kind.
pub fn generate_id(kind: &str, title: &str) -> String {
    let uuid = uuid::Uuid::now_v7();
    let hex_prefix = &uuid.to_string()[..6];
    format!("{}-{}-{}", hex_prefix, kind, slugify(title))
}

/// Slugify a title for use in IDs: lowercase, alphanumeric runs joined by
/// single hyphens, capped at 40 characters.
fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(40)
        .collect()
}
