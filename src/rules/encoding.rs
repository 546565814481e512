use chardetng::EncodingDetector;
use encoding_rs::{Encoding, ISO_2022_JP, UTF_8};

use crate::finding::{Finding, FindingKind};

const ESC: u8 = 0x1b;

/// Guess the encoding of `raw` with a statistical detector.
///
/// The guess is heuristic: short or ambiguous inputs can be misclassified.
#[must_use]
pub fn detect_encoding(raw: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    detector.guess(None, true)
}

/// Report a file-level finding unless `raw` looks like UTF-8.
///
/// ASCII-only input, empty input included, counts as UTF-8. The one 7-bit
/// encoding that is told apart from it is ISO-2022-JP, which needs ESC
/// sequences, so ASCII without an ESC byte skips the detector.
#[must_use]
pub fn check_encoding(file_name: &str, raw: &[u8]) -> Vec<Finding> {
    if raw.is_ascii() && !raw.contains(&ESC) {
        return Vec::new();
    }

    let encoding = detect_encoding(raw);
    log::debug!("{file_name}: detected encoding {}", encoding.name());
    // The detector falls back to a legacy encoding for other 7-bit input.
    let is_utf8 = encoding == UTF_8 || (raw.is_ascii() && encoding != ISO_2022_JP);
    if is_utf8 {
        Vec::new()
    } else {
        vec![Finding::file_level(file_name, FindingKind::NotUtf8)]
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
