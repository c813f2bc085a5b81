//! Individual inline rewrite passes.
//!
//! Each pass is a pure `&str -> Cow<str>` function and borrows its input
//! when it has nothing to rewrite.

use std::borrow::Cow;

use super::delimited::{replace_delimited, DelimiterPair};
use super::digest::hex_digest;

/// `**x**`
pub const BOLD: DelimiterPair = DelimiterPair::new("**", "**");
/// `__x__`
pub const EMPHASIS: DelimiterPair = DelimiterPair::new("__", "__");
/// `[[x]]`
pub const HASH_TOKEN: DelimiterPair = DelimiterPair::new("[[", "]]");
/// `((x))`
pub const OBSCURE_TOKEN: DelimiterPair = DelimiterPair::new("((", "))");

/// Wrap `**x**` in `<b>` tags.
pub fn bold(text: &str) -> Cow<'_, str> {
    replace_delimited(text, BOLD, |inner, out| wrap_tag(out, "b", inner))
}

/// Wrap `__x__` in `<em>` tags.
pub fn emphasis(text: &str) -> Cow<'_, str> {
    replace_delimited(text, EMPHASIS, |inner, out| wrap_tag(out, "em", inner))
}

/// Replace `[[x]]` with the hex digest of `x`.
pub fn hash_tokens(text: &str) -> Cow<'_, str> {
    replace_delimited(text, HASH_TOKEN, |inner, out| out.push_str(&hex_digest(inner)))
}

/// Replace `((x))` with `x` minus every `c` and `C`.
pub fn obscure_tokens(text: &str) -> Cow<'_, str> {
    replace_delimited(text, OBSCURE_TOKEN, |inner, out| {
        out.extend(inner.chars().filter(|&ch| ch != 'c' && ch != 'C'));
    })
}

/// Turn embedded newlines into `<br/>` followed by a newline.
pub fn line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', "<br/>\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn wrap_tag(out: &mut String, tag: &str, inner: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
