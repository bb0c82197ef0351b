//! Front-matter directive parsing
//!
//! A document may open with a `---`-delimited block of `key: value` lines.
//! Known keys shape the deck stylesheet; unknown keys pass through untouched
//! as styling context. A leading `---` without a closing delimiter is not
//! front-matter at all - it falls back to being an ordinary slide separator.

use super::CompileError;
use std::collections::BTreeMap;

/// Deck aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideSize {
    /// 16:9, 1280x720
    Widescreen,
    /// 4:3, 960x720
    #[default]
    Standard,
}

impl SlideSize {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SlideSize::Widescreen => (1280, 720),
            SlideSize::Standard => (960, 720),
        }
    }
}

/// Presentation-level directives parsed from front-matter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    pub theme: Option<String>,
    pub size: SlideSize,
    pub paginate: bool,
    /// Unrecognized directives, passed through as styling context.
    pub custom: BTreeMap<String, String>,
}

/// Split a document into directives and the slide-body remainder.
///
/// Returns an error only when a block that is unambiguously front-matter
/// (leading `---` with a closing `---`) contains a non-directive line.
pub(crate) fn split_front_matter(source: &str) -> Result<(Directives, String), CompileError> {
    let lines: Vec<&str> = source.lines().collect();

    if lines.first().map(|l| l.trim()) != Some("---") {
        return Ok((Directives::default(), source.to_string()));
    }

    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == "---")
        .map(|i| i + 1)
    else {
        // No closing delimiter: the leading `---` is a slide separator.
        return Ok((Directives::default(), source.to_string()));
    };

    let mut directives = Directives::default();
    for (offset, line) in lines[1..close].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = parse_directive(line).ok_or(CompileError::MalformedFrontMatter {
            line: offset + 2,
            text: (*line).to_string(),
        })?;
        apply_directive(&mut directives, key, value);
    }

    let body = lines[close + 1..].join("\n");
    Ok((directives, body))
}

fn parse_directive(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key, value.trim()))
}

fn apply_directive(directives: &mut Directives, key: &str, value: &str) {
    match key {
        // Marker directive from the source format; nothing to configure.
        "marp" => {}
        "theme" => directives.theme = Some(value.to_string()),
        "size" => {
            directives.size = match value {
                "16:9" => SlideSize::Widescreen,
                _ => SlideSize::Standard,
            };
        }
        "paginate" => directives.paginate = value == "true",
        _ => {
            directives
                .custom
                .insert(key.to_string(), value.to_string());
        }
    }
}
