// src/core/html.rs
//
// House tag-block scanner. Case-insensitive, tolerant of attribute noise,
// boundary-checked so "td" never matches "<table" and "th" never matches
// "<thead". Close tags are matched naively (first occurrence), which is
// fine for the flat table markup this crate reads.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// True when the tag name ends right here: attributes, '>' or '/>' follow.
fn ends_tag_name(rest: &str) -> bool {
    matches!(
        rest.as_bytes().first(),
        None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
    )
}

/// Next `<tag ...>…</tag>` block at or after byte offset `from`.
/// Returns (start of open tag, end just past the close tag).
pub fn next_tag_block(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s); // same byte length: only ASCII is mapped
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let after_name = start + open.len();
        if !ends_tag_name(&lc[after_name..]) {
            // Prefix of a longer tag name; keep looking.
            at = after_name;
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(&close)?;
        return Some((start, open_end + end_rel + close.len()));
    }
}

/// All `<tag>` blocks in `s`, in document order, non-overlapping.
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_tag_block(s, tag, pos) {
        blocks.push(&s[b_s..b_e]);
        pos = b_e;
    }
    blocks
}

/// Contents between the open tag's '>' and the final close tag.
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return &block[oe + 1..cs];
            }
        }
    }
    ""
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
