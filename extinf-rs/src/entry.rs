//! Parsing of a single `#EXTINF` fragment.
//!
//! A fragment is the directive line plus whatever follows it up to the next
//! `#EXTINF`, e.g.
//! ```text
//! #EXTINF:-1 tvg-id="1" group-title="News",Channel One
//! http://example.com/ch1
//! ```

use std::collections::HashMap;

use log::trace;
use smol_str::SmolStr;

use crate::{
    ParseError,
    format::{Attributes, Entry, directives},
};

/// Offset right after `#EXTINF:`
const VALUE_START: usize = directives::EXTINF_LEN + 1;

pub fn validate(fragment: &str) -> Result<(), ParseError> {
    if !fragment.starts_with(directives::EXTINF) {
        return Err(ParseError::NotAnEntry);
    }

    Ok(())
}

/// Builds an [`Entry`] out of one fragment, failing on the first field
/// that cannot be parsed.
pub fn parse_entry(fragment: &str) -> Result<Entry, ParseError> {
    validate(fragment)?;

    let name = parse_name(fragment);
    let duration = parse_duration(fragment)?;
    let uri = parse_uri(fragment);
    let attributes = parse_attributes(fragment);

    trace!("Parsed entry {:?} ({:?}): {:?}", name, duration, uri);

    Ok(Entry {
        name,
        duration,
        uri,
        attributes,
        raw_info: fragment.to_owned(),
    })
}

/// Position right after the first ASCII digit that is directly followed by
/// whitespace or a comma, searched over the whole fragment.
///
/// For `#EXTINF:180,A` this is the index after `0`, i.e. the end of the
/// duration digits.
fn find_duration_end(fragment: &str) -> Option<usize> {
    fragment
        .bytes()
        .enumerate()
        .filter(|(_, b)| b.is_ascii_digit())
        .find_map(|(i, _)| {
            fragment[i + 1..]
                .chars()
                .next()
                .filter(|c| c.is_whitespace() || *c == ',')
                .map(|_| i + 1)
        })
}

/// Reads an optionally signed integer from the start of `input`, ignoring
/// anything after the digits (`"6.000"` reads as `6`). Values beyond the
/// range of `i64` saturate.
fn parse_leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let value = digits[..len].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Duration of the entry in seconds.
///
/// `Ok(None)` when the colon after `#EXTINF` is missing or no digit run
/// ending in whitespace/comma exists.
pub fn parse_duration(fragment: &str) -> Result<Option<i64>, ParseError> {
    if fragment.as_bytes().get(directives::EXTINF_LEN) != Some(&b':') {
        return Ok(None);
    }

    let Some(end) = find_duration_end(fragment) else {
        return Ok(None);
    };

    let (start, end) = if VALUE_START <= end {
        (VALUE_START, end)
    } else {
        (end, VALUE_START)
    };
    let region = &fragment[start..end];

    parse_leading_integer(region)
        .map(Some)
        .ok_or_else(|| ParseError::InvalidDuration(region.to_owned()))
}

fn first_line(fragment: &str) -> &str {
    fragment.split('\n').next().unwrap_or(fragment)
}

/// Everything after the last comma of the directive line, trimmed
pub fn parse_name(fragment: &str) -> SmolStr {
    let line = first_line(fragment);
    match line.rfind(',') {
        Some(comma) => SmolStr::new(line[comma + 1..].trim()),
        None => SmolStr::default(),
    }
}

fn ceil_char_boundary(input: &str, mut index: usize) -> usize {
    while index < input.len() && !input.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Drops exactly one char on each side, meant for `"quoted"` values.
/// Unquoted values get cut as well (`abc` -> `b`, `x` -> empty).
fn unwrap_value(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// `key="value"` and bare `key` tokens between the duration and the last
/// comma of the directive line.
pub fn parse_attributes(fragment: &str) -> Option<Attributes> {
    let line = first_line(fragment);

    let start = find_duration_end(fragment).unwrap_or(VALUE_START);
    let start = ceil_char_boundary(line, start);
    let end = line.rfind(',').unwrap_or(line.len());
    if start >= end {
        return None;
    }

    let region = line[start..end].trim();
    if region.is_empty() {
        return None;
    }

    let mut result = HashMap::new();
    for token in region.split(' ') {
        match token.split_once('=') {
            Some((key, value)) => {
                result.insert(SmolStr::new(key), Some(SmolStr::new(unwrap_value(value))));
            }
            None => {
                result.insert(SmolStr::new(token), None);
            }
        }
    }

    Some(result)
}

/// Second line of the fragment, untouched
pub fn parse_uri(fragment: &str) -> Option<SmolStr> {
    fragment.split('\n').nth(1).map(SmolStr::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("#EXTINF:1,A").is_ok());
        assert_eq!(validate("hello"), Err(ParseError::NotAnEntry));
        assert_eq!(validate(" #EXTINF:1,A"), Err(ParseError::NotAnEntry));
        assert_eq!(validate("#extinf:1,A"), Err(ParseError::NotAnEntry));
    }

    #[test]
    fn test_parse_simple_entry() {
        let entry = parse_entry("#EXTINF:180,Song 1\nhttp://example.com/song1.mp3").unwrap();
        assert_eq!(entry.name(), "Song 1");
        assert_eq!(entry.duration(), Some(180));
        assert_eq!(entry.uri(), Some("http://example.com/song1.mp3"));
        assert!(entry.attributes().is_none());
        assert_eq!(
            entry.raw_info(),
            "#EXTINF:180,Song 1\nhttp://example.com/song1.mp3"
        );
    }

    #[test]
    fn test_parse_entry_with_attributes() {
        let entry =
            parse_entry("#EXTINF:-1 tvg-id=\"1\" group-title=\"News\",Channel One\nhttp://x/ch1")
                .unwrap();
        assert_eq!(entry.name(), "Channel One");
        assert_eq!(entry.duration(), Some(-1));
        assert_eq!(entry.uri(), Some("http://x/ch1"));

        let attributes = entry.attributes().unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(entry.attribute("tvg-id"), Some("1"));
        assert_eq!(entry.attribute("group-title"), Some("News"));
    }

    #[test]
    fn test_duration_without_colon() {
        assert_eq!(parse_duration("#EXTINF,Name only\n"), Ok(None));
        assert_eq!(parse_duration("#EXTINF 180,Name\n"), Ok(None));
    }

    #[test]
    fn test_duration_without_digits() {
        assert_eq!(parse_duration("#EXTINF:,Name\nhttp://x/a.mp3"), Ok(None));
    }

    #[test]
    fn test_duration_fraction_is_truncated() {
        assert_eq!(parse_duration("#EXTINF:6.00000000,\n21-35-08882.ts"), Ok(Some(6)));
        assert_eq!(parse_duration("#EXTINF:10.5,A\nb"), Ok(Some(10)));
    }

    #[test]
    fn test_duration_negative_placeholder_is_present() {
        assert_eq!(parse_duration("#EXTINF:-1,Live\nhttp://x/live"), Ok(Some(-1)));
        assert_eq!(parse_duration("#EXTINF:0,Zero\nhttp://x/zero"), Ok(Some(0)));
    }

    #[test]
    fn test_duration_out_of_range_saturates() {
        assert_eq!(
            parse_duration("#EXTINF:99999999999999999999,A\nb"),
            Ok(Some(i64::MAX))
        );
        assert_eq!(
            parse_duration("#EXTINF:-99999999999999999999,A\nb"),
            Ok(Some(i64::MIN))
        );
        assert_eq!(
            parse_duration("#EXTINF:-9223372036854775808,A\nb"),
            Ok(Some(i64::MIN))
        );
    }

    #[test]
    fn test_duration_found_in_name() {
        // the first digit followed by a space sits in the name
        assert_eq!(
            parse_duration("#EXTINF:,Channel 5 HD\nhttp://x/5"),
            Err(ParseError::InvalidDuration(",Channel 5".to_owned()))
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(parse_name("#EXTINF:1,  Spaced Out  \nuri"), "Spaced Out");
        assert_eq!(parse_name("#EXTINF:1 a=\"x,y\",Last\nuri"), "Last");
        assert_eq!(parse_name("#EXTINF:1,\nuri"), "");
        assert_eq!(parse_name("#EXTINF:1\nuri,not a name"), "");
        assert_eq!(parse_name("#EXTINF:1,Windows\r\nuri"), "Windows");
    }

    #[test]
    fn test_attributes_absent() {
        assert_eq!(parse_attributes("#EXTINF:180,Song 1\nuri"), None);
        assert_eq!(parse_attributes("#EXTINF:180 ,Song 1\nuri"), None);
        assert_eq!(parse_attributes("#EXTINF,Name only\n"), None);
    }

    #[test]
    fn test_attributes_bare_key_and_duplicates() {
        let attributes =
            parse_attributes("#EXTINF:1 radio a=\"first\" a=\"second\",Name\nuri").unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("radio"), Some(&None));
        assert_eq!(attributes.get("a"), Some(&Some(SmolStr::new("second"))));
    }

    #[test]
    fn test_attributes_value_unwrap_quirk() {
        let attributes =
            parse_attributes("#EXTINF:1 plain=abc one=x empty= quoted=\"\",Name\nuri").unwrap();
        assert_eq!(attributes.get("plain"), Some(&Some(SmolStr::new("b"))));
        assert_eq!(attributes.get("one"), Some(&Some(SmolStr::new(""))));
        assert_eq!(attributes.get("empty"), Some(&Some(SmolStr::new(""))));
        assert_eq!(attributes.get("quoted"), Some(&Some(SmolStr::new(""))));
    }

    #[test]
    fn test_attributes_split_on_spaces_inside_quotes() {
        let attributes = parse_attributes("#EXTINF:1 group-title=\"My News\",Name\nuri").unwrap();
        // `"My` loses its quote and its last letter
        assert_eq!(attributes.get("group-title"), Some(&Some(SmolStr::new("M"))));
        assert_eq!(attributes.get("News\""), Some(&None));
    }

    #[test]
    fn test_attributes_double_space_gives_empty_key() {
        let attributes = parse_attributes("#EXTINF:1 a=\"x\"  b=\"y\",Name\nuri").unwrap();
        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes.get(""), Some(&None));
        assert_eq!(attributes.get("a"), Some(&Some(SmolStr::new("x"))));
        assert_eq!(attributes.get("b"), Some(&Some(SmolStr::new("y"))));
    }

    #[test]
    fn test_attributes_value_keeps_later_equals() {
        let attributes = parse_attributes("#EXTINF:1 url=\"a=b\",Name\nuri").unwrap();
        assert_eq!(attributes.get("url"), Some(&Some(SmolStr::new("a=b"))));
    }

    #[test]
    fn test_attributes_without_duration() {
        let attributes = parse_attributes("#EXTINF: tvg-id=\"x\",Name\nuri").unwrap();
        assert_eq!(attributes.get("tvg-id"), Some(&Some(SmolStr::new("x"))));
    }

    #[test]
    fn test_uri() {
        assert_eq!(parse_uri("#EXTINF:1,A"), None);
        assert_eq!(parse_uri("#EXTINF:1,A\n"), Some(SmolStr::new("")));
        assert_eq!(
            parse_uri("#EXTINF:1,A\n  http://x/a \nignored"),
            Some(SmolStr::new("  http://x/a "))
        );
    }

    #[test]
    fn test_invalid_duration_aborts_entry() {
        assert!(matches!(
            parse_entry("#EXTINF:abc 1,Name\nuri"),
            Err(ParseError::InvalidDuration(_))
        ));
    }
}
