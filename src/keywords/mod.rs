// Keyword extraction and resume / job description gap analysis.
//
// Data flow: text -> normalizer -> token sequence -> {ranker, gap, score}.
// The three consumers are independent of each other.

pub mod analysis;
pub mod frequency;
pub mod gap;
pub mod normalizer;
pub mod score;
pub mod traits;

pub use analysis::{analyze, analyze_batch, Analysis, DEFAULT_TOP_N};
pub use frequency::{rank, FrequencyTable, RankedKeyword};
pub use gap::{compare, KeywordGap, MatchedKeywords};
pub use normalizer::{Normalizer, StopwordSource, TokenSequence};
pub use score::score;
pub use traits::{Segmenter, UnicodeSegmenter};
