//! Name-based predicates shared by the cover selector, track collector and scanner.

/// Case-insensitive `.ext` suffix match against already-normalized extensions.
pub fn has_extension(name: &str, exts: &[String]) -> bool {
    let lower = name.to_lowercase();
    exts.iter().any(|ext| {
        lower
            .strip_suffix(ext.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

pub fn is_excluded(name: &str, keywords: &[String]) -> bool {
    let lower = name.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| lower.contains(&k))
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
