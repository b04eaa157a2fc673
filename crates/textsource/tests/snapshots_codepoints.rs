#![expect(missing_docs)]

mod common;

use common::{SAMPLE, render, units};
use textsource::{Segment, TextSource, Utf16Buffer};

#[test]
fn snapshot_sample_text() {
    let text = units(SAMPLE);
    insta::assert_snapshot!(
        render(TextSource::new(&text)),
        @"U+0041 U+0062 U+0020 U+00E9 U+0020 U+6F22 U+0020 U+1F600 U+0020 U+1D11E @12"
    );
}

#[test]
fn snapshot_unpaired_surrogates() {
    // lone low, reversed pair, high before ASCII, trailing high
    let text = [0xDC00, 0xDE00, 0xD83D, 0xD800, 0x0041, 0xDBFF];
    insta::assert_snapshot!(
        render(TextSource::from_slice(&text)),
        @"U+DC00 U+DE00 U+D83D U+D800 U+0041 U+DBFF @6"
    );
}

#[test]
fn snapshot_segment_window() {
    let text = units("left|😀mid|right");
    let seg = Segment::new(&text, 5, 5);
    insta::assert_snapshot!(
        render(TextSource::from_segment(seg)),
        @"U+1F600 U+006D U+0069 U+0064 @5"
    );
}

#[test]
fn snapshot_lossy_buffer() {
    let mut buffer = Utf16Buffer::new();
    buffer.extend_from_utf8_lossy(b"ok\xF0\x9F\x98\x80\xC3");
    insta::assert_snapshot!(
        render(TextSource::from_buffer(&buffer)),
        @"U+006F U+006B U+1F600 U+FFFD @5"
    );
}

#[test]
fn snapshot_null_source() {
    insta::assert_snapshot!(render(TextSource::null()), @"@0");
}
