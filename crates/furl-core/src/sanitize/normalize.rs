//! Transliteration and punctuation folding.

use deunicode::deunicode_with_tofu;

/// Punctuation folded into a single `-` separator.
const DASHED: &[char] = &[
    ' ', '!', ',', '\'', '+', '~', '(', ')', '[', ']', '*', '^',
];

/// Non-alphanumeric characters that survive the first stripping pass.
const KEPT_PUNCT: &str = "-~/\\?:@#[]=&+$,._!*'()";

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || KEPT_PUNCT.contains(c)
}

/// Reduces `input` to a restricted URL-friendly ASCII alphabet.
///
/// - Transliterates non-ASCII text; characters without a transliteration are dropped
/// - Strips anything outside `[A-Za-z0-9-~/\?:@#[]=&+$,._!*'()]` (spaces included)
/// - Folds the punctuation in [`DASHED`] to `-`
/// - Collapses dash runs and trims dashes at both ends
///
/// The result is a fixed point: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let ascii = if input.is_ascii() {
        input.to_string()
    } else {
        deunicode_with_tofu(input, "")
    };

    let mut out = String::with_capacity(ascii.len());
    let mut prev_dash = false;
    for c in ascii.chars().filter(|&c| is_kept(c)) {
        let c = if DASHED.contains(&c) { '-' } else { c };
        if c == '-' {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        } else {
            out.push(c);
            prev_dash = false;
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_punctuation_to_dashes() {
        assert_eq!(normalize("a!b,c'd+e~f(g)h[i]j*k"), "a-b-c-d-e-f-g-h-i-j-k");
    }

    #[test]
    fn spaces_are_stripped_before_folding() {
        assert_eq!(normalize("hello world"), "helloworld");
        assert_eq!(normalize("a\tb\nc"), "abc");
    }

    #[test]
    fn collapses_and_trims_dashes() {
        assert_eq!(normalize("--a---b--"), "a-b");
        assert_eq!(normalize("(x)"), "x");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn keeps_url_punctuation() {
        assert_eq!(
            normalize("https://example.com/a?b=1&c=2#top"),
            "https://example.com/a?b=1&c=2#top"
        );
        assert_eq!(normalize("user@host:8080"), "user@host:8080");
    }

    #[test]
    fn strips_other_symbols() {
        assert_eq!(normalize("a<b>c\"d%e;f"), "abcdef");
    }

    #[test]
    fn transliterates_unicode() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("Ærøskøbing"), "AEroskobing");
    }

    #[test]
    fn idempotent() {
        for s in [
            "https://example.com/a b/(c)/",
            "--Über--straße!!",
            "x[1]*y^z",
            "/blog/tag/a/b/c/",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }
}
