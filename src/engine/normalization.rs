// * Normalizes raw content for keyword matching and resolves link paths.
// *
// * Logic:
// * 1. Blank content normalizes to the empty string.
// * 2. Fold Turkish dotted capital İ to plain i.
// * 3. Unicode lower-case everything else.
// * Markup is left in place: keywords inside headings or tags still match.

/// Lower-cases content for substring matching. Never strips markup.
pub fn normalize_content(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    // * 'İ'.to_lowercase() yields "i\u{307}", which would hide "i" keywords behind a combining dot
    let mut normalized = String::with_capacity(content.len());
    for c in content.chars() {
        if c == 'İ' {
            normalized.push('i');
        } else {
            normalized.extend(c.to_lowercase());
        }
    }
    normalized
}

/// Joins a locale base path (e.g. "/en", "/en/", "") with a rooted target path
pub fn join_base_path(base_path: &str, path: &str) -> String {
    let base = base_path.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_content() {
        assert_eq!(normalize_content("Karasu'da Deniz"), "karasu'da deniz");
    }

    #[test]
    fn test_blank_content_is_empty() {
        assert_eq!(normalize_content(""), "");
        assert_eq!(normalize_content("   \n\t "), "");
    }

    #[test]
    fn test_markup_is_preserved() {
        assert_eq!(
            normalize_content("<h2>Satılık VİLLA</h2>"),
            "<h2>satılık villa</h2>"
        );
    }

    #[test]
    fn test_turkish_dotted_capital_folds_to_plain_i() {
        let normalized = normalize_content("İSTANBUL TAPU İŞLEMLERİ");
        assert_eq!(normalized, "istanbul tapu işlemleri");
        assert!(!normalized.contains('\u{307}'));
    }

    #[test]
    fn test_join_base_path() {
        assert_eq!(join_base_path("", "/satilik"), "/satilik");
        assert_eq!(join_base_path("/en", "/satilik"), "/en/satilik");
        assert_eq!(join_base_path("/en/", "/satilik"), "/en/satilik");
        assert_eq!(join_base_path("/", "/satilik"), "/satilik");
        assert_eq!(join_base_path(" /de ", "rehber"), "/de/rehber");
    }
}
