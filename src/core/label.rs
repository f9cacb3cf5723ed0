use serde::{Deserialize, Serialize};

/// Display text and optional link target parsed from a raw label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabel {
    pub display_name: String,
    pub target: Option<String>,
}

/// Resolves `[[target]]` and `[[target|display]]` wiki links.
///
/// The whole string must be the link. The target may contain neither `]` nor
/// `|`; the display text may not contain `]`. Without explicit display text
/// the last `/` segment of the target is shown. Anything else is returned
/// verbatim without a target.
#[must_use]
pub fn resolve_label(raw: &str) -> ResolvedLabel {
    match parse_wiki_link(raw) {
        Some((target, display)) => {
            let display_name = match display {
                Some(display) => display,
                None => match target.rsplit('/').next() {
                    Some(segment) if !segment.is_empty() => segment,
                    _ => target,
                },
            };
            ResolvedLabel {
                display_name: display_name.to_owned(),
                target: Some(target.to_owned()),
            }
        }
        None => ResolvedLabel {
            display_name: raw.to_owned(),
            target: None,
        },
    }
}

fn parse_wiki_link(raw: &str) -> Option<(&str, Option<&str>)> {
    let inner = raw.strip_prefix("[[")?.strip_suffix("]]")?;
    if inner.contains(']') {
        return None;
    }

    let (target, display) = match inner.split_once('|') {
        Some((target, display)) => {
            if display.is_empty() {
                return None;
            }
            (target, Some(display))
        }
        None => (inner, None),
    };

    if target.is_empty() {
        return None;
    }
    Some((target, display))
}
