//! String helpers: case conversion, escaping, padding and searching.
//!
//! The case converters are literal regular-expression rewrites rather than a
//! word tokenizer. Word characters and boundaries are ASCII-only, so mixed
//! case or punctuation-heavy input is handled exactly as the patterns say and
//! nothing more:
//!
//! ```rust
//! use tacklebox_core::strings::{camel_case, kebab_case, snake_case};
//!
//! assert_eq!(camel_case("hello big world"), "helloBigWorld");
//! assert_eq!(camel_case("Hello-World foo"), "hello-WorldFoo");
//! assert_eq!(snake_case("parseHTTPResponse"), "parse_httpresponse");
//! assert_eq!(kebab_case("backgroundColor"), "background-color");
//! ```

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Start of the string, any capital, or a word character after a boundary.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CAMEL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:^\w|[A-Z]|\b\w)").unwrap());

/// First word character after an ASCII word boundary.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static WORD_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u:\b\w)").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lower-case letter or digit followed by a capital.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CASE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Runs of whitespace, underscores and hyphens.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Characters with a meaning in regular-expression syntax.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static REGEX_META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.*+?^${}()|\[\]\\]").unwrap());

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Convert to camelCase.
///
/// The first character is lower-cased; every capital and every word
/// character that starts a word is upper-cased; whitespace is then removed.
pub fn camel_case(s: &str) -> String {
    let rewritten = CAMEL_WORD_RE.replace_all(s, |caps: &Captures<'_>| {
        let word = &caps[0];
        if caps.get(0).is_some_and(|m| m.start() == 0) {
            word.to_lowercase()
        } else {
            word.to_uppercase()
        }
    });
    WHITESPACE_RE.replace_all(&rewritten, "").into_owned()
}

/// Convert to PascalCase: [`camel_case`] followed by [`capitalize`].
pub fn pascal_case(s: &str) -> String {
    capitalize(&camel_case(s))
}

/// Convert to `snake_case`.
///
/// Splits a lower-case letter or digit from a following capital, collapses
/// runs of whitespace, `_` and `-` into one `_`, then lower-cases everything.
/// Surrounding whitespace is trimmed first.
pub fn snake_case(s: &str) -> String {
    separated_case(s, '_')
}

/// Convert to `kebab-case`, using the same rules as [`snake_case`] with `-`.
pub fn kebab_case(s: &str) -> String {
    separated_case(s, '-')
}

fn separated_case(s: &str, separator: char) -> String {
    let split = CASE_BOUNDARY_RE.replace_all(s.trim(), |caps: &Captures<'_>| {
        format!("{}{separator}{}", &caps[1], &caps[2])
    });
    let joined = SEPARATOR_RE.replace_all(&split, separator.to_string().as_str());
    joined.to_lowercase()
}

/// Upper-case the first character of every word.
///
/// ```rust
/// use tacklebox_core::strings::capitalize_words;
///
/// assert_eq!(capitalize_words("hello world-wide web"), "Hello World-Wide Web");
/// ```
pub fn capitalize_words(s: &str) -> String {
    WORD_START_RE
        .replace_all(s, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// Reverse a string by Unicode scalar value.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Escape `<`, `>`, `&` and `"` as HTML entities. Single quotes are left alone.
///
/// ```rust
/// use tacklebox_core::strings::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;Tom &amp; 'Jerry'&lt;/a&gt;");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Decode HTML entities, the inverse of [`escape_html`].
pub fn unescape_html(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}

/// Backslash-escape regex metacharacters so `s` can be embedded in a pattern literally.
///
/// Escapes `. * + ? ^ $ { } ( ) | [ ] \`.
pub fn escape_reg_exp(s: &str) -> Cow<'_, str> {
    REGEX_META_RE.replace_all(s, r"\$0")
}

/// Pad the start of `s` with repetitions of `fill` until it is `target_len` characters long.
///
/// Lengths are counted in `char`s. The fill is truncated on the last
/// repetition. Strings already long enough, and an empty `fill`, leave `s`
/// unchanged.
///
/// ```rust
/// use tacklebox_core::strings::{pad_end, pad_start};
///
/// assert_eq!(pad_start("5", 3, "0"), "005");
/// assert_eq!(pad_start("abc", 10, "123"), "1231231abc");
/// assert_eq!(pad_end("abc", 6, "."), "abc...");
/// ```
pub fn pad_start(s: &str, target_len: usize, fill: &str) -> String {
    match padding(s, target_len, fill) {
        Some(pad) => pad + s,
        None => s.to_string(),
    }
}

/// Pad the end of `s`; see [`pad_start`] for the rules.
pub fn pad_end(s: &str, target_len: usize, fill: &str) -> String {
    match padding(s, target_len, fill) {
        Some(pad) => format!("{s}{pad}"),
        None => s.to_string(),
    }
}

fn padding(s: &str, target_len: usize, fill: &str) -> Option<String> {
    let missing = target_len.checked_sub(s.chars().count())?;
    if missing == 0 || fill.is_empty() {
        return None;
    }
    Some(fill.chars().cycle().take(missing).collect())
}

/// Keep the first `max_chars` characters and append `suffix` if anything was cut.
///
/// Never splits a multi-byte character.
///
/// ```rust
/// use tacklebox_core::strings::truncate;
///
/// assert_eq!(truncate("Hello, World!", 5, "..."), "Hello...");
/// assert_eq!(truncate("Hi", 5, "..."), "Hi");
/// assert_eq!(truncate("Hello 世界", 7, "…"), "Hello 世…");
/// ```
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{suffix}", &s[..cut]),
        None => s.to_string(),
    }
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
///
/// An empty needle counts as zero occurrences.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    memchr::memmem::find_iter(haystack.as_bytes(), needle.as_bytes()).count()
}
