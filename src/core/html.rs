// src/core/html.rs
// Tag-level HTML scanning. No DOM is built: callers walk tags in document
// order and use `element_bounds` to find the matching close tag.
// Tag and attribute names compare ASCII case-insensitively.

use super::sanitize::{decode_entities, normalize_ws};

/// One start or end tag as it appears in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    /// Raw text between the name and `>`.
    pub attrs: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
    pub closing: bool,
    pub self_closing: bool,
}

impl Tag<'_> {
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        attr_value(self.attrs, "class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }
}

const VOID: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

const RAW_TEXT: [&str; 2] = ["script", "style"];

fn is_void(name: &str) -> bool {
    VOID.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Next tag at or after `from`. Comments, doctypes and processing
/// instructions are skipped, as are the bodies of `<script>`/`<style>`.
pub fn next_tag(s: &str, from: usize) -> Option<Tag<'_>> {
    let b = s.as_bytes();
    let mut i = from;

    while i < b.len() {
        let lt = i + s.get(i..)?.find('<')?;
        let rest = &s[lt..];

        if rest.starts_with("<!--") {
            i = rest.find("-->").map_or(b.len(), |p| lt + p + 3);
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            i = rest.find('>').map_or(b.len(), |p| lt + p + 1);
            continue;
        }

        let closing = rest.starts_with("</");
        let name_start = if closing { lt + 2 } else { lt + 1 };
        let name_len = b[name_start..]
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == b'-')
            .count();
        if name_len == 0 {
            // stray '<' in text
            i = lt + 1;
            continue;
        }
        let name_end = name_start + name_len;
        let gt = find_tag_end(b, name_end)?;
        let name = &s[name_start..name_end];
        let attrs = &s[name_end..gt];

        if !closing && RAW_TEXT.iter().any(|r| r.eq_ignore_ascii_case(name)) {
            i = find_ci(s, &join!("</", name), gt + 1).unwrap_or(b.len());
            continue;
        }

        return Some(Tag {
            name,
            attrs,
            start: lt,
            end: gt + 1,
            closing,
            self_closing: attrs.trim_end().ends_with('/'),
        });
    }
    None
}

/// Position of the `>` closing a tag, ignoring any inside quoted values.
fn find_tag_end(b: &[u8], from: usize) -> Option<usize> {
    let (mut in_s, mut in_d) = (false, false);
    for (off, &c) in b[from..].iter().enumerate() {
        match c {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(from + off),
            _ => {}
        }
    }
    None
}

fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = s.get(from..)?.to_ascii_lowercase();
    hay.find(&needle.to_ascii_lowercase()).map(|p| from + p)
}

/// Value of attribute `name` in a tag's raw attribute text.
/// Bare attributes (`hidden`) yield `""`.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let b = attrs.as_bytes();
    let n = b.len();
    let skip_ws = |mut i: usize| {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        i
    };

    let mut i = skip_ws(0);
    while i < n {
        let key_start = i;
        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'/' { i += 1; }
        let key = &attrs[key_start..i];

        i = skip_ws(i);
        let mut value = "";
        if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() { i += 1; }
            if i < n && (b[i] == b'"' || b[i] == b'\'') {
                let quote = b[i] as char;
                let v_start = i + 1;
                let v_end = attrs[v_start..].find(quote).map_or(n, |p| v_start + p);
                value = &attrs[v_start..v_end];
                i = (v_end + 1).min(n);
            } else {
                let v_start = i;
                while i < n && !b[i].is_ascii_whitespace() { i += 1; }
                value = &attrs[v_start..i];
            }
        } else if key.is_empty() {
            i += 1;
        }

        if !key.is_empty() && key.eq_ignore_ascii_case(name) {
            return Some(value);
        }
        i = skip_ws(i);
    }
    None
}

/// For a start tag, return `(inner_end, outer_end)`: the offset of its
/// matching end tag and the offset just past it. Void and self-closing
/// elements end where they start. `None` if the element is never closed.
pub fn element_bounds(s: &str, open: &Tag<'_>) -> Option<(usize, usize)> {
    if open.self_closing || is_void(open.name) {
        return Some((open.end, open.end));
    }
    let mut depth = 1usize;
    let mut pos = open.end;
    while let Some(tag) = next_tag(s, pos) {
        pos = tag.end;
        if !tag.is(open.name) || tag.self_closing {
            continue;
        }
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Some((tag.start, tag.end));
            }
        } else {
            depth += 1;
        }
    }
    None
}

/// First element after `pos` at the same nesting level. Text nodes are
/// skipped; reaching the parent's end tag means there is no sibling.
pub fn next_sibling(s: &str, pos: usize) -> Option<Tag<'_>> {
    next_tag(s, pos).filter(|t| !t.closing)
}

/// Visible text of an HTML fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub fn text_content(fragment: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(fragment)))
}

/// Remove every `<...>` run. Script/style bodies are not special-cased.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_tag_reads_name_attrs_and_kind() {
        let doc = r#"<!DOCTYPE html><!-- <div class="x"> --><DIV class='a b'>hi</div>"#;
        let open = next_tag(doc, 0).unwrap();
        assert!(open.is("div"));
        assert!(!open.closing);
        assert!(open.has_class("b"));
        let close = next_tag(doc, open.end).unwrap();
        assert!(close.closing && close.is("div"));
    }

    #[test]
    fn script_bodies_are_skipped() {
        let doc = r#"<script>var s = "<p class='k'>";</script><p class="real">x</p>"#;
        let mut pos = 0;
        let mut opens = Vec::new();
        while let Some(t) = next_tag(doc, pos) {
            pos = t.end;
            if !t.closing { opens.push(t.attrs); }
        }
        assert_eq!(opens, vec![r#" class="real""#]);
    }

    #[test]
    fn attr_value_variants() {
        assert_eq!(attr_value(r#" id=top class="a  b" hidden"#, "class"), Some("a  b"));
        assert_eq!(attr_value(r#" id=top class="a  b" hidden"#, "ID"), Some("top"));
        assert_eq!(attr_value(r#" id=top class="a  b" hidden"#, "hidden"), Some(""));
        assert_eq!(attr_value(r#" data-x='1>2'"#, "data-x"), Some("1>2"));
        assert_eq!(attr_value(" id=top", "class"), None);
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let doc = r#"<a title="1 > 0" class="k">x</a>"#;
        let t = next_tag(doc, 0).unwrap();
        assert!(t.has_class("k"));
    }

    #[test]
    fn element_bounds_handles_nesting_and_void() {
        let doc = "<div><div>in</div><br></div>tail";
        let open = next_tag(doc, 0).unwrap();
        let (inner_end, outer_end) = element_bounds(doc, &open).unwrap();
        assert_eq!(&doc[open.end..inner_end], "<div>in</div><br>");
        assert_eq!(&doc[outer_end..], "tail");

        let br = next_tag(doc, doc.find("<br").unwrap()).unwrap();
        assert_eq!(element_bounds(doc, &br), Some((br.end, br.end)));
    }

    #[test]
    fn unclosed_element_has_no_bounds() {
        let doc = "<div><span>x</span>";
        let open = next_tag(doc, 0).unwrap();
        assert_eq!(element_bounds(doc, &open), None);
    }

    #[test]
    fn next_sibling_stops_at_parent_end() {
        let doc = "<p><b>x</b>  text  <i>y</i></p>";
        let b = next_tag(doc, 0).and_then(|p| next_tag(doc, p.end)).unwrap();
        let (_, b_end) = element_bounds(doc, &b).unwrap();
        let i = next_sibling(doc, b_end).unwrap();
        assert!(i.is("i"));
        let (_, i_end) = element_bounds(doc, &i).unwrap();
        assert_eq!(next_sibling(doc, i_end), None);
    }

    #[test]
    fn text_content_decodes_and_collapses() {
        assert_eq!(text_content("<span>rock</span> &amp; <b>roll</b>\n "), "rock & roll");
        assert_eq!(text_content("<div>walk</div><div>ing</div>"), "walking");
        assert_eq!(text_content("  &lt;b&gt; "), "<b>");
    }
}
