//! Per-language character validity.
//!
//! Some corpora mix scripts or carry loanwords spelled with letters a
//! language never uses natively. A [`CharsetProfile`] describes, per
//! ISO 639-1 code, which characters may appear in a native word: an
//! optional inclusion class (everything a native word may contain) and
//! an optional exclusion class (valid for the script, never native).
//! Unknown languages get the permissive profile, so filtering is opt-in
//! per table entry.
//!
//! Adding a language is a data edit: append one `(&str, CharsetProfile)`
//! row to [`PROFILES`].

/// A character class as a set of inclusive `(low, high)` ranges.
#[derive(Debug, Clone, Copy)]
pub struct CharClass(&'static [(char, char)]);

impl CharClass {
    /// Membership test by linear range scan; the classes here are tiny.
    #[inline]
    pub fn contains(self, c: char) -> bool {
        self.0.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }
}

/// Inclusion and exclusion classes for one language.
#[derive(Debug, Clone, Copy)]
pub struct CharsetProfile {
    /// Characters allowed in native words; `None` means no constraint.
    pub include: Option<CharClass>,
    /// Characters never found in native words; `None` means no constraint.
    pub exclude: Option<CharClass>,
}

impl CharsetProfile {
    /// The no-constraint profile used for languages without a table entry.
    pub const PERMISSIVE: Self = Self {
        include: None,
        exclude: None,
    };

    /// Whether a single character passes both constraints.
    #[inline]
    pub fn allows(self, c: char) -> bool {
        if let Some(include) = self.include {
            if !include.contains(c) {
                return false;
            }
        }
        if let Some(exclude) = self.exclude {
            if exclude.contains(c) {
                return false;
            }
        }
        true
    }
}

/// Latvian native letters: ASCII plus the macron/cedilla/caron pairs.
/// Each uppercase/lowercase pair sits on adjacent codepoints.
const LATVIAN_INCLUDE: CharClass = CharClass(&[
    ('A', 'Z'),
    ('a', 'z'),
    ('Ā', 'ā'),
    ('Č', 'č'),
    ('Ē', 'ē'),
    ('Ģ', 'ģ'),
    ('Ī', 'ī'),
    ('Ķ', 'ķ'),
    ('Ļ', 'ļ'),
    ('Ņ', 'ņ'),
    ('Š', 'š'),
    ('Ū', 'ū'),
    ('Ž', 'ž'),
]);

/// Latin letters valid for the script but absent from native Latvian words.
const LATVIAN_EXCLUDE: CharClass = CharClass(&[
    ('Q', 'Q'),
    ('W', 'W'),
    ('X', 'X'),
    ('Y', 'Y'),
    ('q', 'q'),
    ('w', 'w'),
    ('x', 'x'),
    ('y', 'y'),
]);

/// Charset table, keyed by ISO 639-1 code.
// TODO: define charsets for more languages as corpora need them.
static PROFILES: &[(&str, CharsetProfile)] = &[(
    "lv",
    CharsetProfile {
        include: Some(LATVIAN_INCLUDE),
        exclude: Some(LATVIAN_EXCLUDE),
    },
)];

/// Looks up the profile for a language code, permissive when unknown.
#[inline]
pub fn profile_for(language: &str) -> CharsetProfile {
    PROFILES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, profile)| *profile)
        .unwrap_or(CharsetProfile::PERMISSIVE)
}

/// Classifies whether a word is valid for the particular language.
///
/// Every character of the trimmed word must pass the language's
/// inclusion and exclusion constraints. Languages without a table entry
/// always pass.
#[inline]
pub fn is_valid_language_word(word: &str, language: &str) -> bool {
    let profile = profile_for(language);
    word.trim().chars().all(|c| profile.allows(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_always_passes() {
        assert!(is_valid_language_word("cat", "xx"));
        assert!(is_valid_language_word("naïve-42_!?", "xx"));
        assert!(is_valid_language_word("", "xx"));
    }

    #[test]
    fn latvian_native_word_passes() {
        assert!(is_valid_language_word("žāvēt", "lv"));
        assert!(is_valid_language_word("Čigāns", "lv"));
        assert!(is_valid_language_word("iela", "lv"));
    }

    #[test]
    fn latvian_rejects_characters_outside_inclusion() {
        assert!(!is_valid_language_word("naïve", "lv"));
        assert!(!is_valid_language_word("мир", "lv"));
        assert!(!is_valid_language_word("a2", "lv"));
    }

    #[test]
    fn latvian_rejects_excluded_script_letters() {
        assert!(!is_valid_language_word("taxi", "lv"));
        assert!(!is_valid_language_word("Quebec", "lv"));
        assert!(!is_valid_language_word("whisky", "lv"));
        assert!(!is_valid_language_word("yoga", "lv"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_valid_language_word("  iela  ", "lv"));
    }

    #[test]
    fn empty_word_passes() {
        // No character can fail a check.
        assert!(is_valid_language_word("", "lv"));
        assert!(is_valid_language_word("   ", "lv"));
    }

    #[test]
    fn char_class_range_membership() {
        let class = CharClass(&[('a', 'c')]);
        assert!(class.contains('a'));
        assert!(class.contains('b'));
        assert!(class.contains('c'));
        assert!(!class.contains('d'));
    }

    #[test]
    fn inclusion_only_profile() {
        let profile = CharsetProfile {
            include: Some(CharClass(&[('a', 'c')])),
            exclude: None,
        };
        assert!(profile.allows('b'));
        assert!(!profile.allows('d'));
    }

    #[test]
    fn exclusion_only_profile() {
        let profile = CharsetProfile {
            include: None,
            exclude: Some(CharClass(&[('q', 'q')])),
        };
        assert!(profile.allows('a'));
        assert!(!profile.allows('q'));
    }

    #[test]
    fn permissive_profile_allows_everything() {
        for c in ['a', 'Ж', '犬', '7', '_'] {
            assert!(CharsetProfile::PERMISSIVE.allows(c));
        }
    }

    #[test]
    fn profile_lookup_is_case_and_code_exact() {
        // Only the exact two-letter code selects the table entry.
        assert!(is_valid_language_word("taxi", "LV"));
        assert!(is_valid_language_word("taxi", "lav"));
    }
}
