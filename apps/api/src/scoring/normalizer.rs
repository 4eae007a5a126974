//! Text normalization shared by keyword extraction and résumé matching.

/// Symbols kept alongside `[a-z0-9]` so terms like `c++`, `c#`, `.net` and
/// `ci/cd` survive normalization.
const KEPT_SYMBOLS: &[char] = &['+', '.', '#', '/'];

/// Lowercases `text`, replaces every character outside `[a-z0-9+.#/ ]` with a
/// space, then collapses whitespace runs and trims.
///
/// Total: any input, including the empty string, produces a value.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    replaced.split(' ').filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || KEPT_SYMBOLS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Senior Rust Engineer!"), "senior rust engineer");
        assert_eq!(normalize("(Python, Go; SQL)"), "python go sql");
    }

    #[test]
    fn test_preserves_tech_symbols() {
        assert_eq!(normalize("C++, C#, .NET and CI/CD"), "c++ c# .net and ci/cd");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(normalize("  rust\n\n\tand \r\n  go  "), "rust and go");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t"), "");
        assert_eq!(normalize("!!!---***"), "");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        // Accented letters fall outside the kept set.
        assert_eq!(normalize("Résumé Ünïcode 日本"), "r sum n code");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Looking for a Python developer with AWS and Docker experience, 3+ years required",
            "C++/C# @ Café — 100% remote!",
            "",
            "\u{1F600} emoji \u{0130}stanbul",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
