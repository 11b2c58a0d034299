use super::*;

fn feed(machine: &mut Utf8Decoder, bytes: &[u8]) -> Step {
    let mut last = Step::Incomplete;
    for &b in bytes {
        last = machine.push(b);
    }
    last
}

#[test]
fn ascii_is_emitted_from_start() {
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0x00), Step::Scalar(0x00));
    assert_eq!(m.push(0x41), Step::Scalar(0x41));
    assert_eq!(m.push(0x7F), Step::Scalar(0x7F));
    assert!(!m.pending());
}

#[test]
fn two_byte_sequence_assembles() {
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xC3), Step::Incomplete);
    assert!(m.pending());
    assert_eq!(m.push(0xA9), Step::Scalar(0xE9));
    assert!(!m.pending());
}

#[test]
fn three_byte_sequence_assembles() {
    let mut m = Utf8Decoder::new();
    assert_eq!(feed(&mut m, &[0xEF, 0xBF, 0xBF]), Step::Scalar(0xFFFF));
}

#[test]
fn four_byte_sequence_assembles_max_scalar() {
    let mut m = Utf8Decoder::new();
    assert_eq!(feed(&mut m, &[0xF4, 0x8F, 0xBF, 0xBF]), Step::Scalar(0x10_FFFF));
}

#[test]
fn invalid_lead_bytes_are_consumed_singly() {
    for lead in [0x80, 0xBF, 0xC0, 0xC1, 0xF5, 0xFF] {
        let mut m = Utf8Decoder::new();
        assert_eq!(m.push(lead), Step::InvalidLead, "lead 0x{lead:02X}");
        assert!(!m.pending(), "lead 0x{lead:02X} left the machine pending");
    }
}

#[test]
fn overlong_three_byte_rejected_at_first_continuation() {
    // E0 requires A0..=BF next; 0x9F would be an overlong encoding.
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xE0), Step::Incomplete);
    assert_eq!(m.push(0x9F), Step::Rejected);
    // The rejected byte gets a fresh chance as a lead.
    assert_eq!(m.push(0x9F), Step::InvalidLead);
}

#[test]
fn encoded_surrogate_rejected_at_first_continuation() {
    // ED A0 80 would decode to U+D800.
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xED), Step::Incomplete);
    assert_eq!(m.push(0xA0), Step::Rejected);
}

#[test]
fn overlong_four_byte_rejected_at_first_continuation() {
    // F0 requires 90..=BF next.
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xF0), Step::Incomplete);
    assert_eq!(m.push(0x8F), Step::Rejected);
}

#[test]
fn out_of_range_four_byte_rejected_at_first_continuation() {
    // F4 90 80 80 would decode above U+10FFFF.
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xF4), Step::Incomplete);
    assert_eq!(m.push(0x90), Step::Rejected);
}

#[test]
fn later_continuations_use_plain_range() {
    // ED's restriction applies to the first continuation byte only.
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xED), Step::Incomplete);
    assert_eq!(m.push(0x9F), Step::Incomplete);
    assert_eq!(m.push(0xBF), Step::Scalar(0xD7FF));
}

#[test]
fn rejection_resets_to_start() {
    let mut m = Utf8Decoder::new();
    assert_eq!(m.push(0xE9), Step::Incomplete);
    assert_eq!(m.push(0x00), Step::Rejected);
    assert!(!m.pending());
    // Reprocessing the same byte now emits it as ASCII.
    assert_eq!(m.push(0x00), Step::Scalar(0x00));
}
