//! Behaviour every codec selectable from an index header must share.

use ircodec::{CodecError, CodecKind, IntegerCodec};

/// Repeating 1, 2, 3 pattern, then a spread of magnitudes.
fn sample() -> Vec<u64> {
    let mut values: Vec<u64> = (0..30).map(|i| 1 + i % 3).collect();
    values.extend([1u64 << 7, (1 << 16) + 3, 1 << 31, (1 << 47) - 1, (1 << 63) - 1]);
    values
}

fn check_codec(codec: &dyn IntegerCodec) {
    let values = sample();

    // every prefix round-trips, including the empty one
    for len in 0..=values.len() {
        let prefix = &values[..len];
        let encoded = codec.encode_to_vec(prefix).unwrap();
        assert_eq!(encoded.len(), codec.encoded_len(prefix).unwrap());

        let decoded = codec.decode_to_vec(&encoded, len).unwrap();
        assert_eq!(prefix, &decoded[..], "{}: prefix {}", codec.name(), len);
    }

    // the destination may be larger than needed
    let needed = codec.encoded_len(&values).unwrap();
    let mut roomy = vec![0u8; needed + 32];
    assert_eq!(codec.encode(&mut roomy, &values).unwrap(), needed);
    let decoded = codec.decode_to_vec(&roomy, values.len()).unwrap();
    assert_eq!(values, decoded);

    // errors
    assert_eq!(
        codec.encode_to_vec(&[5, 0]),
        Err(CodecError::InvalidInput { index: 1 })
    );
    let mut short = vec![0u8; needed - 1];
    assert_eq!(
        codec.encode(&mut short, &values),
        Err(CodecError::BufferTooSmall {
            needed,
            capacity: needed - 1
        })
    );
    let encoded = codec.encode_to_vec(&values).unwrap();
    assert!(matches!(
        codec.decode_to_vec(&encoded, values.len() + 1),
        Err(CodecError::TruncatedStream { .. })
    ));
}

#[test]
fn all_codecs_conform() {
    for kind in CodecKind::ALL {
        check_codec(kind.codec().as_ref());
    }
}

#[test]
fn elias_delta_is_smaller_than_none() {
    let values = sample();
    let none = CodecKind::None.codec();
    let delta = CodecKind::EliasDelta.codec();

    let raw = none.bits_per_integer(&values).unwrap();
    let packed = delta.bits_per_integer(&values).unwrap();
    assert_eq!(raw, 64.0);
    assert!(packed < raw, "{} should be below {}", packed, raw);
}

#[test]
fn codecs_are_shareable_across_threads() {
    let codec = CodecKind::EliasDelta.codec();
    let values = sample();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let encoded = codec.encode_to_vec(&values).unwrap();
                assert_eq!(codec.decode_to_vec(&encoded, values.len()).unwrap(), values);
            });
        }
    });
}
