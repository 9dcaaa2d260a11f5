use femtrack::device::{channel_range, decode_frame, validate_channels, DEFAULT_RANGE};

fn pairs(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
    entries.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

#[test]
fn known_channel_bounds() {
    assert_eq!(channel_range("flow_ml"), (0.0, 500.0));
    assert_eq!(channel_range("hb"), (5.0, 20.0));
    assert_eq!(channel_range("weight_gain"), (-20.0, 50.0));
    assert_eq!(channel_range("leukocyte_count"), (1000.0, 20000.0));
}

#[test]
fn unknown_channel_falls_back_to_default() {
    assert_eq!(channel_range("mystery"), DEFAULT_RANGE);
    // The broad default admits implausible values; preserved behavior.
    let validated = validate_channels(&pairs(&[("mystery", 999.0)]));
    assert_eq!(validated.get("mystery"), Some(999.0));
}

#[test]
fn out_of_range_values_are_dropped_not_clamped() {
    let validated = validate_channels(&pairs(&[
        ("flow_ml", 600.0),
        ("hb", 4.9),
        ("hb", 20.1),
        ("ph", 6.5),
    ]));
    assert_eq!(validated.get("flow_ml"), None);
    assert_eq!(validated.get("hb"), None);
    assert_eq!(validated.get("ph"), Some(6.5));
    assert!(validated.has_valid_data);
}

#[test]
fn non_finite_values_vanish() {
    let validated = validate_channels(&pairs(&[
        ("flow_ml", f64::NAN),
        ("hb", f64::INFINITY),
        ("ph", f64::NEG_INFINITY),
    ]));
    assert!(validated.values.is_empty());
    assert!(!validated.has_valid_data);
}

#[test]
fn inclusive_bounds_retained() {
    let validated = validate_channels(&pairs(&[
        ("flow_ml", 0.0),
        ("flow_ml", 500.0),
        ("hb", 5.0),
        ("hb", 20.0),
    ]));
    assert_eq!(validated.values.len(), 4);
}

#[test]
fn output_never_exceeds_declared_bounds() {
    let candidates = [
        -1e9, -20.0, -0.1, 0.0, 0.5, 1.0, 3.0, 5.0, 8.0, 20.0, 42.0, 100.0, 500.0, 999.0, 1000.0,
        1000.1, 1e9,
    ];
    let channels = ["flow_ml", "hb", "ph", "fever", "bloating", "unknown_chan"];
    for channel in channels {
        for value in candidates {
            let validated = validate_channels(&pairs(&[(channel, value)]));
            let (min, max) = channel_range(channel);
            for (_, kept) in &validated.values {
                assert!(*kept >= min && *kept <= max);
            }
        }
    }
}

#[test]
fn zero_frame_keeps_flow_but_drops_hb() {
    // 44 zero bytes: every channel decodes to 0.0. Zero is inside
    // flow_ml's [0,500] but below hb's [5,20].
    let buf = [0u8; 44];
    let channels = decode_frame(&buf).unwrap();
    let validated = validate_channels(&channels);
    assert_eq!(validated.get("flow_ml"), Some(0.0));
    assert_eq!(validated.get("hb"), None);
    assert_eq!(validated.get("hba1c_ratio"), None); // below [3,15]
    assert!(validated.has_valid_data);
}
