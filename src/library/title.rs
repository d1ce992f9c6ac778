use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

// "03 - Midnight", "3-Midnight", "03  -  Midnight"; ASCII digits only
static RE_NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([0-9]+)\s*-\s*(.*)$").expect("valid numbered title regex"));
static RE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s*-\s*").expect("valid track prefix regex"));

/// Track number and display title inferred from an audio filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    pub track_number: Option<u32>,
    pub title: String,
}

/// Split a `NN - Title.ext` filename into its number and title.
///
/// Names without a numeric prefix keep their stem as the title. A prefix that does
/// not fit in a `u32` is still stripped, but no number is reported.
pub fn parse_title(filename: &str) -> ParsedTitle {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    if let Some(caps) = RE_NUMBERED.captures(stem) {
        if let Ok(number) = caps[1].parse::<u32>() {
            return ParsedTitle {
                track_number: Some(number),
                title: caps[2].trim().to_string(),
            };
        }
    }

    ParsedTitle {
        track_number: None,
        title: RE_PREFIX.replace(stem, "").trim().to_string(),
    }
}
