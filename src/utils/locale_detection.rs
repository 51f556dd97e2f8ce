// ============================================================================
// Locale Detection
// Derives the process default locale from the environment
// ============================================================================
//
// POSIX precedence for monetary formatting:
//     LC_ALL      overrides every category
//     LC_MONETARY monetary category only
//     LANG        default for unset categories
//
// Unset, empty and unparsable variables are skipped. If none yields a
// locale, the root locale is used and currency lookup falls back to the
// first available currency.
// ============================================================================

use crate::domain::Locale;
use tracing::debug;

/// Environment variables consulted, highest precedence first
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Detect the default locale from the process environment.
pub fn detect_locale() -> Locale {
    detect_from(|name| std::env::var(name).ok()).unwrap_or_else(fallback)
}

/// Detect a locale from an arbitrary variable lookup.
///
/// Returns `None` if no variable holds a usable locale name.
pub fn detect_from<F>(lookup: F) -> Option<Locale>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARIABLES.iter().find_map(|&name| {
        let value = lookup(name)?;
        if value.trim().is_empty() {
            return None;
        }
        match Locale::parse(&value) {
            Some(locale) => {
                debug!(variable = name, %locale, "detected locale");
                Some(locale)
            }
            None => {
                debug!(variable = name, value = %value, "ignoring unparsable locale");
                None
            }
        }
    })
}

fn fallback() -> Locale {
    debug!("no locale in environment, using root locale");
    Locale::root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_precedence() {
        let lookup = env(&[("LC_ALL", "de_CH.UTF-8"), ("LC_MONETARY", "fr_FR"), ("LANG", "en_US")]);
        assert_eq!(detect_from(lookup), Locale::parse("de_CH"));

        let lookup = env(&[("LC_MONETARY", "fr_FR"), ("LANG", "en_US")]);
        assert_eq!(detect_from(lookup), Locale::parse("fr_FR"));

        let lookup = env(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(detect_from(lookup), Some(Locale::us()));
    }

    #[test]
    fn test_empty_and_garbage_are_skipped() {
        let lookup = env(&[("LC_ALL", ""), ("LC_MONETARY", "not a locale"), ("LANG", "de_DE")]);
        assert_eq!(detect_from(lookup), Some(Locale::germany()));
    }

    #[test]
    fn test_nothing_set() {
        assert_eq!(detect_from(env(&[])), None);
    }

    #[test]
    fn test_detect_never_fails() {
        // whatever the environment holds, a locale comes back
        let locale = detect_locale();
        assert!(locale.language().len() <= 3);
    }
}
