//! Cleanup of raw post text and OCR output.

/// Decorative and typographic glyphs that OCR and social-media captions
/// scatter through posts.
const DENYLIST: &[char] = &[
    '\u{00A9}', // ©
    '\u{2122}', // ™
    '\u{2022}', // •
    '\u{2192}', // →
    '\u{2014}', // —
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{2026}', // …
    '\u{00BB}', // »
    '@',
    '~',
];

/// Strip ASCII control characters and decorative glyphs, then collapse every
/// whitespace run to a single space and trim the ends.
///
/// Every character in 0x00–0x1F is deleted, tab and newline included, so the
/// lines of a caption join without a separator. Stored fingerprints depend on
/// this exact output. Non-Latin scripts pass through untouched.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{00}'..='\u{1F}') && !DENYLIST.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_controls_and_glyphs() {
        let clean = normalize("This is a \x00 noisy\x1F content \u{2122}");
        assert!(clean.contains("noisy"));
        assert!(!clean.contains('\u{2122}'));
        assert_eq!(clean, "This is a noisy content");
    }

    #[test]
    fn line_breaks_are_deleted_not_spaced() {
        assert_eq!(normalize("Jiwani\nMarch 2\r\n\t2024"), "JiwaniMarch 22024");
        assert_eq!(
            normalize("Ali Khan\nreleased\tturtle"),
            "Ali Khanreleasedturtle"
        );
        assert_eq!(normalize("green\n turtle"), "green turtle");
    }

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize("   green    turtle   "), "green turtle");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{2022}\u{2026}"), "");
    }

    #[test]
    fn removes_denylisted_glyphs() {
        assert_eq!(
            normalize("\u{201C}Released\u{201D} \u{2014} @wwf \u{2192} Pasni\u{2026} \u{00A9}2024"),
            "Released wwf Pasni 2024"
        );
        assert_eq!(normalize("~Ormara\u{00BB}"), "Ormara");
    }

    #[test]
    fn preserves_urdu() {
        let urdu = "کچوے آزاد";
        assert_eq!(normalize(urdu), urdu);
    }

    #[test]
    fn never_leaves_control_characters() {
        let all_controls: String = (0u8..0x20).map(char::from).collect();
        let input = format!("a{all_controls}b{all_controls}");
        assert_eq!(normalize(&input), "ab");
    }

    fn noisy_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                any::<char>(),
                (0u8..0x20).prop_map(char::from),
                prop::sample::select(DENYLIST),
                Just(' '),
                Just('\u{00A0}'),
            ],
            0..64,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in noisy_text()) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_is_clean(raw in noisy_text()) {
            let out = normalize(&raw);
            prop_assert!(out.chars().all(|c| u32::from(c) >= 0x20));
            prop_assert!(!out.chars().any(|c| DENYLIST.contains(&c)));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn normalize_handles_arbitrary_strings(raw in any::<String>()) {
            let once = normalize(&raw);
            prop_assert!(once.chars().all(|c| u32::from(c) >= 0x20));
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
