use femtrack::device::{decode_frame, CORE_CHANNELS, MIN_FRAME_LEN};

fn frame_with(values: [f32; 11]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MIN_FRAME_LEN);
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    buf
}

#[test]
fn channels_decode_at_fixed_offsets() {
    let values = [
        80.0, 11.5, 6.8, 4.0, 5.4, 2.0, 7.0, 5.0, 2.4, 1.8, 14.0_f32,
    ];
    let channels = decode_frame(&frame_with(values)).unwrap();
    assert_eq!(channels.len(), CORE_CHANNELS.len());
    assert_eq!(channels[0], ("flow_ml".to_string(), 80.0));
    assert_eq!(channels[1], ("hb".to_string(), 11.5));
    assert_eq!(channels[10].0, "prolactin_level");
    assert!((channels[10].1 - 14.0).abs() < 1e-6);
}

#[test]
fn short_frame_is_rejected() {
    let buf = vec![0u8; MIN_FRAME_LEN - 1];
    let err = decode_frame(&buf).unwrap_err();
    assert!(err.to_string().contains("too short"));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut buf = frame_with([50.0; 11]);
    buf.extend_from_slice(&[0xAB; 16]);
    let channels = decode_frame(&buf).unwrap();
    assert!(channels.iter().all(|(_, v)| (*v - 50.0).abs() < 1e-6));
}

#[test]
fn little_endian_layout() {
    // 1.0f32 little-endian at offset 4 (hb).
    let mut buf = vec![0u8; 44];
    buf[4..8].copy_from_slice(&[0x00, 0x00, 0x80, 0x3F]);
    let channels = decode_frame(&buf).unwrap();
    assert_eq!(channels[1], ("hb".to_string(), 1.0));
}
