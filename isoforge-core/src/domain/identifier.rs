// isoforge-core/src/domain/identifier.rs
//
// Pure string transforms that turn whatever the sources publish into
// comparable identifiers. Every function here is total: unknown input is
// passed through, never rejected.

use crate::domain::tables::TypeAliasTable;
use regex::Regex;
use std::sync::OnceLock;

/// Sentinel returned by [`normalize_type`] when nothing usable is left.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Language tags accepted for bracketed alternates, in order of preference.
const PREFERRED_LANGUAGES: [&[&str]; 2] = [&["english", "en"], &["french", "fr"]];

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|_| {
            // Patterns are hardcoded; this branch only keeps Clippy and the unwrap guard happy.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

fn re_parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^.*\((?P<type>.*)\).*$")
}

fn re_language_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^(?P<text>.*?)\s*\[(?P<lang>[^\]]*)\]\s*$")
}

fn re_see_also() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(
        &RE,
        r"^(?P<name>.*) \(see also separate (?:country code|ISO 3166-1) entry under [A-Z]{2}\)",
    )
}

fn re_quoted_fragment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r#""[^"]*"\s*"#)
}

fn re_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"\s+")
}

/// Canonicalizes a subdivision type string.
///
/// - `"Oblast (Region)"` → `"region"` (the parenthesised qualifier wins)
/// - `"Région [French] / Region [English]"` → `"region"` (English, then French, then first)
/// - `"Kraj [cs]"` → `"kraj"`
/// - `""` → [`UNKNOWN_TYPE`]
pub fn normalize_type(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let resolved = if let Some(caps) = re_parenthetical().captures(&lowered) {
        caps.name("type").map_or("", |m| m.as_str()).trim().to_string()
    } else if lowered.contains('[') {
        resolve_language_variant(&lowered)
    } else {
        lowered
    };

    let resolved = re_whitespace().replace_all(resolved.trim(), " ").into_owned();
    if resolved.is_empty() {
        UNKNOWN_TYPE.to_string()
    } else {
        resolved
    }
}

/// `"X [lang1] / Y [lang2]"`: picks the English segment, else French, else the first one.
fn resolve_language_variant(lowered: &str) -> String {
    let segments: Vec<(&str, Option<&str>)> = lowered
        .split(" / ")
        .map(|segment| match re_language_segment().captures(segment) {
            Some(caps) => (
                caps.name("text").map_or("", |m| m.as_str()),
                caps.name("lang").map(|m| m.as_str().trim()),
            ),
            // trailing text after the tag: keep what precedes the bracket
            None => (segment.split_once('[').map_or(segment, |(head, _)| head), None),
        })
        .collect();

    for tags in PREFERRED_LANGUAGES {
        if let Some((text, _)) = segments
            .iter()
            .find(|(_, lang)| lang.is_some_and(|l| tags.contains(&l)))
        {
            return text.trim().to_string();
        }
    }

    segments
        .first()
        .map(|(text, _)| text.trim().to_string())
        .unwrap_or_default()
}

/// Turns any label into a program-identifier-safe token.
/// `"autonomous region"` → `"AUTONOMOUS_REGION"`, `"FR-75"` → `"FR_75"`.
pub fn canonical_enum_token(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '(' | ')' | ',' => None,
            other => Some(other),
        })
        .collect()
}

/// Collapses a known foreign-language synonym into its canonical type.
pub fn apply_alias(kind: &str, aliases: &TypeAliasTable) -> String {
    aliases.resolve(kind).unwrap_or(kind).to_string()
}

/// Title-cases the way the generated display labels always have:
/// every run of letters starts upper-case, the rest is lower-case.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut inside_word = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if inside_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            inside_word = true;
        } else {
            out.push(c);
            inside_word = false;
        }
    }
    out
}

/// Drops footnote markers and the "see also separate ... entry" suffix.
pub fn clean_name(raw: &str) -> String {
    let name = raw.replace('*', "");
    match re_see_also().captures(&name) {
        Some(caps) => caps.name("name").map_or("", |m| m.as_str()).trim().to_string(),
        None => name.trim().to_string(),
    }
}

/// Comparable form of a code: footnote markers removed, trimmed, upper-case.
pub fn clean_code(raw: &str) -> String {
    raw.replace('*', "").trim().to_uppercase()
}

/// `"Zimbabwe Dollar \"new\"\u{a0}(2008)"` → `"Zimbabwe Dollar (2008)"`.
pub fn clean_currency_name(raw: &str) -> String {
    let without_quotes = re_quoted_fragment().replace_all(raw, "");
    let spaced = without_quotes.replace('\u{a0}', " ");
    re_whitespace().replace_all(&spaced, " ").trim().to_string()
}

/// Escapes a display name for a double-quoted literal (`\\` and `"`).
pub fn escape_display_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
