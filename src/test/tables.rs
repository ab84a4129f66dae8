use crate::prelude::tables::*;
use crate::prelude::*;

#[test]
pub fn assert_every_type_generated() {
    assert_eq!(PROFILES.len(), ThermocoupleType::ALL.len());
    for kind in ThermocoupleType::ALL {
        assert!(PROFILES.iter().any(|profile| profile.kind == kind));
    }
}

#[test]
pub fn assert_segment_counts() {
    let counts = [
        (&TYPE_B, 2),
        (&TYPE_E, 5),
        (&TYPE_J, 5),
        (&TYPE_K, 5),
        (&TYPE_N, 3),
        (&TYPE_R, 4),
        (&TYPE_S, 4),
        (&TYPE_T, 4),
    ];

    for (profile, count) in counts {
        assert_eq!(profile.segments.len(), count, "type {}", profile.kind);
    }
}

#[test]
pub fn assert_contiguous_and_ordered() {
    for profile in PROFILES {
        let inclusivity = profile.segments[0].range.inclusivity;
        for pair in profile.segments.windows(2) {
            assert!(pair[0].range.low < pair[0].range.high);
            assert_eq!(pair[0].range.high, pair[1].range.low, "type {}", profile.kind);
            assert_eq!(pair[1].range.inclusivity, inclusivity);
        }
    }
}

#[test]
pub fn assert_boundary_rules() {
    for profile in PROFILES {
        let expected = match profile.kind {
            ThermocoupleType::TypeK => Inclusivity::ClosedHigh,
            _ => Inclusivity::ClosedLow,
        };
        assert_eq!(profile.domain().inclusivity, expected, "type {}", profile.kind);
    }
}

#[test]
pub fn assert_published_domains() {
    let domains = [
        (&TYPE_B, 0.291, 13.820),
        (&TYPE_E, -9.835, 76.373),
        (&TYPE_J, -8.095, 69.553),
        (&TYPE_K, -6.404, 69.553),
        (&TYPE_N, -4.313, 47.513),
        (&TYPE_R, -0.226, 21.101),
        (&TYPE_S, -0.236, 18.693),
        (&TYPE_T, -6.18, 20.872),
    ];

    for (profile, low, high) in domains {
        let domain = profile.domain();
        assert_eq!((domain.low, domain.high), (low, high), "type {}", profile.kind);
    }
}

#[test]
pub fn assert_corrected_coefficients() {
    // Published values, not the transposed ones that break continuity
    assert_eq!(TYPE_B.segments[0].coefficients.p[2], -9.7271640e1);
    assert_eq!(TYPE_T.segments[3].coefficients.q[2], 0.0);
}

#[test]
pub fn assert_profiles_serialise() {
    let value = serde_json::to_value(&TYPE_K).unwrap();

    assert_eq!(value["kind"], serde_json::json!("TypeK"));
    assert_eq!(value["segments"].as_array().unwrap().len(), 5);
    assert_eq!(
        value["segments"][1]["range"]["inclusivity"],
        serde_json::json!("ClosedHigh")
    );
}
