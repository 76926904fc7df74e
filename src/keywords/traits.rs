// Segmenter trait — the injected linguistic capability.
//
// Swap-ready abstraction: the word-boundary strategy can change without
// touching the normalizer, ranker, or comparators. The default splits on
// Unicode word boundaries; a language-specific segmenter can be dropped in.

use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into candidate word units.
///
/// Implementations must be pure: the same text always yields the same units
/// in the same order. Units are produced lazily. `Send + Sync` so one
/// instance can serve every request.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// English clitics split off after an apostrophe ("google's", "they'll").
const CLITICS: &[&str] = &["s", "t", "ll", "re", "ve", "d", "m"];

/// UAX #29 word segmentation with English clitic splitting.
///
/// Punctuation and whitespace never appear in the output. Hyphenated words
/// come out as separate units ("machine-learning" -> "machine", "learning"),
/// while alphanumeric runs like "python3" stay whole and are rejected later
/// by the alphabetic filter.
///
/// UAX #29 keeps apostrophes inside words, so a trailing clitic is cut off
/// and only the stem is emitted: "Google's" -> "Google", "don't" -> "do"
/// (the "n" of "n't" goes with the clitic). Units whose suffix is not a
/// known clitic ("O'Brien") are left whole.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            text.unicode_words()
                .map(strip_clitic)
                .filter(|unit| !unit.is_empty()),
        )
    }
}

fn strip_clitic(unit: &str) -> &str {
    let Some((stem, suffix)) = unit.rsplit_once(|c: char| c == '\'' || c == '\u{2019}') else {
        return unit;
    };

    if !CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
        return unit;
    }

    // n't: "don't" -> "do", "isn't" -> "is"
    if suffix.eq_ignore_ascii_case("t") {
        if let Some(base) = stem.strip_suffix(|c: char| c == 'n' || c == 'N') {
            return base;
        }
    }

    stem
}
