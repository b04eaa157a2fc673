#![allow(missing_docs, dead_code)]

use core::fmt::Write;

use textsource::TextSource;

/// Mixed sample: ASCII, Latin-1, CJK, an astral emoji and a musical symbol.
pub const SAMPLE: &str = "Ab é 漢 😀 𝄞";

pub fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Renders every codepoint as `U+XXXX`, space separated, followed by the
/// final cursor position as `@N`.
pub fn render(mut source: TextSource<'_>) -> String {
    let mut out = String::new();
    while let Some(cp) = source.next_codepoint() {
        write!(out, "U+{cp:04X} ").unwrap();
    }
    write!(out, "@{}", source.position()).unwrap();
    out
}
