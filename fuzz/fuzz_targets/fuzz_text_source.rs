#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use textsource::{Segment, TextSource, Utf16Buffer};

/// Code units framed by padding, so the segment backing reads a window of a
/// larger text.
#[derive(Debug, Arbitrary)]
struct Input {
    prefix: Vec<u16>,
    units: Vec<u16>,
    suffix: Vec<u16>,
    /// Codepoints to read before a mid-stream reset.
    reset_after: u8,
}

/// Decodes with the standard library, keeping unpaired surrogates raw.
fn reference(units: &[u16]) -> Vec<u32> {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.map_or_else(|e| u32::from(e.unpaired_surrogate()), u32::from))
        .collect()
}

fn check(mut source: TextSource<'_>, expected: &[u32], reset_after: usize) {
    let mut last = source.position();
    for &cp in expected.iter().take(reset_after) {
        assert_eq!(source.next_codepoint(), Some(cp));
        assert!(source.position() > last && source.position() <= source.len_units());
        last = source.position();
    }
    source.reset();
    assert_eq!(source.position(), 0);

    let got: Vec<u32> = source.by_ref().collect();
    assert_eq!(got, expected);
    assert_eq!(source.position(), source.len_units());
    assert_eq!(source.next_codepoint(), None);
}

fn text_source(input: &Input) {
    let expected = reference(&input.units);
    assert_eq!(TextSource::calculate_length(&input.units), expected.len());

    let mut framed = input.prefix.clone();
    framed.extend_from_slice(&input.units);
    framed.extend_from_slice(&input.suffix);
    let Ok(segment) = Segment::try_new(&framed, input.prefix.len(), input.units.len()) else {
        panic!("framed segment must be in bounds");
    };
    let buffer = Utf16Buffer::from(input.units.clone());
    let reset_after = usize::from(input.reset_after);

    check(TextSource::new(&input.units), &expected, reset_after);
    check(TextSource::from_segment(segment), &expected, reset_after);
    check(TextSource::from_buffer(&buffer), &expected, reset_after);
    check(TextSource::from_slice(&input.units), &expected, reset_after);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) {
        text_source(&input);
    }
});
