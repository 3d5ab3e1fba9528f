use std::collections::BTreeMap;

/// Extension to language table. Order decides ties between languages with
/// the same file count.
const LANGUAGE_EXTENSIONS: &[(&str, &[&str])] = &[
    (
        "JavaScript/TypeScript",
        &["js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "svelte", "astro"],
    ),
    ("Python", &["py"]),
    ("Ruby", &["rb", "erb"]),
    ("PHP", &["php"]),
    ("Go", &["go"]),
    ("Rust", &["rs"]),
    ("Java", &["java", "kt", "kts"]),
    ("C#", &["cs", "cshtml", "razor"]),
    ("Elixir", &["ex", "exs", "heex"]),
    ("HTML", &["html", "htm", "css"]),
];

/// Language with the most source files according to the extension
/// histogram, or `None` when no known source file exists.
pub fn dominant_language(
    extensions: &BTreeMap<String, usize>,
) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;

    for &(language, exts) in LANGUAGE_EXTENSIONS {
        let count = exts
            .iter()
            .filter_map(|ext| extensions.get(*ext))
            .sum::<usize>();

        if count == 0 {
            continue;
        }

        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((language, count)),
        }
    }

    best.map(|(language, _)| language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(entries: &[(&str, usize)]) -> BTreeMap<String, usize> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn picks_language_with_most_files() {
        let ext = histogram(&[("py", 3), ("js", 1), ("ts", 1), ("md", 10)]);
        assert_eq!(dominant_language(&ext), Some("Python"));
    }

    #[test]
    fn sums_extensions_of_the_same_language() {
        let ext = histogram(&[("py", 3), ("js", 2), ("tsx", 2)]);
        assert_eq!(dominant_language(&ext), Some("JavaScript/TypeScript"));
    }

    #[test]
    fn ties_resolve_by_table_order() {
        let ext = histogram(&[("go", 2), ("rs", 2)]);
        assert_eq!(dominant_language(&ext), Some("Go"));
    }

    #[test]
    fn unknown_extensions_yield_none() {
        let ext = histogram(&[("md", 4), ("txt", 1)]);
        assert_eq!(dominant_language(&ext), None);
        assert_eq!(dominant_language(&BTreeMap::new()), None);
    }
}
