//! Display labels for raw category strings.

/// Categories whose display label is not plain capitalisation.
///
/// Keys are lower-case. The set is closed: acronyms and proper nouns are
/// listed explicitly rather than derived.
const LABEL_EXCEPTIONS: &[(&str, &str)] = &[
    ("n8n", "n8n"),
    ("api", "API"),
    ("ai", "AI"),
    ("ml", "ML"),
    ("llm", "LLM"),
    ("ui", "UI"),
    ("ux", "UX"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("js", "JS"),
    ("ts", "TS"),
    ("sql", "SQL"),
    ("rest", "REST"),
    ("graphql", "GraphQL"),
    ("oauth", "OAuth"),
];

/// Maps a raw category to the label shown in the category selector.
///
/// Listed acronyms and proper nouns use their fixed spelling regardless of
/// input case. Anything else gets its first character upper-cased and the
/// rest lower-cased; multi-word inputs are not title-cased word by word.
///
/// # Examples
///
/// ```
/// use agent_catalog::catalog::domain::format_label;
///
/// assert_eq!(format_label("ai"), "AI");
/// assert_eq!(format_label("GraphQL"), "GraphQL");
/// assert_eq!(format_label("productivity"), "Productivity");
/// ```
#[must_use]
pub fn format_label(category: &str) -> String {
    let lowered = category.to_lowercase();
    if let Some((_, label)) = LABEL_EXCEPTIONS.iter().find(|(key, _)| *key == lowered) {
        return (*label).to_owned();
    }

    let mut chars = category.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect()
    })
}
