use regex::Regex;
use std::sync::OnceLock;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static whitespace pattern"))
}

/// Turns a card display name into the slug EDHREC uses in its page paths.
///
/// Lowercases, drops commas and apostrophes, then collapses every run of
/// whitespace into a single hyphen. Leading or trailing whitespace becomes
/// a leading or trailing hyphen, same as the EDHREC paths expect.
pub fn format_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && *c != '\'')
        .collect();

    whitespace_runs().replace_all(&cleaned, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name_strips_commas() {
        assert_eq!(
            format_name("Urza, Lord High Artificer"),
            "urza-lord-high-artificer"
        );
    }

    #[test]
    fn test_format_name_strips_apostrophes() {
        assert_eq!(format_name("K'rrik, Son of Yawgmoth"), "krrik-son-of-yawgmoth");
    }

    #[test]
    fn test_format_name_collapses_whitespace() {
        assert_eq!(format_name("A   B"), "a-b");
        assert_eq!(format_name("A\t\nB"), "a-b");
    }

    #[test]
    fn test_format_name_empty() {
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn test_format_name_keeps_other_punctuation() {
        assert_eq!(format_name("Fire // Ice"), "fire-//-ice");
        assert_eq!(format_name("Rograkh, Son of Rohgahh"), "rograkh-son-of-rohgahh");
    }

    #[test]
    fn test_format_name_is_idempotent_on_slugs() {
        for name in [
            "Urza, Lord High Artificer",
            "K'rrik, Son of Yawgmoth",
            "Thrasios, Triton Hero Tymna the Weaver",
        ] {
            let slug = format_name(name);
            assert_eq!(format_name(&slug), slug);
        }
    }
}
