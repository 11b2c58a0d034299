#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8codec::{decode, decode_strict, encode, encode_strict};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    units: Vec<u16>,
}

fuzz_target!(|input: Input| {
    // Decode side: replacement decoding is total, always yields valid
    // UTF-16, and whatever comes out must re-encode to well-formed UTF-8.
    let units = decode(&input.bytes);
    let text = String::from_utf16(&units).expect("decode produced a lone surrogate");
    let reencoded = encode(&units);
    assert_eq!(reencoded, text.as_bytes());
    assert_eq!(decode_strict(&reencoded), Ok(units.clone()));

    // Strict decoding accepts exactly what core::str accepts, and agrees
    // with the replacement policy on that input.
    match decode_strict(&input.bytes) {
        Ok(strict) => {
            let s = core::str::from_utf8(&input.bytes).expect("strict accepted invalid UTF-8");
            assert_eq!(strict, units);
            assert_eq!(strict, s.encode_utf16().collect::<Vec<u16>>());
        }
        Err(_) => assert!(core::str::from_utf8(&input.bytes).is_err()),
    }

    // Encode side: output is always well-formed UTF-8 and matches the
    // standard library's lossy conversion; strict mode agrees when it
    // succeeds.
    let bytes = encode(&input.units);
    assert_eq!(bytes, String::from_utf16_lossy(&input.units).as_bytes());
    if let Ok(strict) = encode_strict(&input.units) {
        assert_eq!(strict, bytes);
        assert_eq!(decode(&bytes), input.units);
    }
});
