//! Keyword classifier for model replies.
//!
//! Replies are free text with no guaranteed structure. Each domain has a list
//! of tiers checked from most to least urgent; the first tier with any
//! trigger present wins, so a reply mentioning both "moderate" and "severe"
//! resolves to severe. Matching is a case-insensitive substring test with no
//! negation handling: "not an emergency" still matches "emergency", and the
//! symptom trigger "er" matches inside words such as "there".

use crate::models::{Classification, Domain, FacilityType, Severity};

struct Tier {
    triggers: &'static [&'static str],
    classification: Classification,
}

const SKIN_TIERS: &[Tier] = &[
    Tier {
        triggers: &["severe", "emergency", "urgent"],
        classification: Classification {
            severity: Some(Severity::Severe),
            facility: FacilityType::EmergencyRoom,
        },
    },
    Tier {
        triggers: &["moderate"],
        classification: Classification {
            severity: Some(Severity::Moderate),
            facility: FacilityType::Dermatologist,
        },
    },
];

const SKIN_DEFAULT: Classification = Classification {
    severity: Some(Severity::Mild),
    facility: FacilityType::Dermatologist,
};

const SYMPTOM_TIERS: &[Tier] = &[
    Tier {
        triggers: &["emergency", "911", "er", "immediately"],
        classification: Classification {
            severity: None,
            facility: FacilityType::EmergencyRoom,
        },
    },
    Tier {
        triggers: &["urgent care", "doctor"],
        classification: Classification {
            severity: None,
            facility: FacilityType::DoctorsOffice,
        },
    },
];

const SYMPTOM_DEFAULT: Classification = Classification {
    severity: None,
    facility: FacilityType::PrimaryCareClinic,
};

/// Classify a model reply. Empty text yields the least urgent label.
pub fn classify(reply_text: &str, domain: Domain) -> Classification {
    let (tiers, default) = match domain {
        Domain::Skin => (SKIN_TIERS, SKIN_DEFAULT),
        Domain::Symptom => (SYMPTOM_TIERS, SYMPTOM_DEFAULT),
    };

    let lowered = reply_text.to_lowercase();

    tiers
        .iter()
        .find(|tier| tier.triggers.iter().any(|t| lowered.contains(t)))
        .map(|tier| tier.classification)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin(text: &str) -> Classification {
        classify(text, Domain::Skin)
    }

    fn symptom(text: &str) -> FacilityType {
        classify(text, Domain::Symptom).facility
    }

    #[test]
    fn skin_severe_triggers_send_to_emergency_room() {
        for text in [
            "This looks SEVERE.",
            "Seek emergency care.",
            "Urgent evaluation recommended",
        ] {
            let result = skin(text);
            assert_eq!(result.severity, Some(Severity::Severe), "{text}");
            assert_eq!(result.facility, FacilityType::EmergencyRoom, "{text}");
        }
    }

    #[test]
    fn skin_moderate_goes_to_dermatologist() {
        let result = skin("Moderate eczema on the forearm.");
        assert_eq!(result.severity, Some(Severity::Moderate));
        assert_eq!(result.facility, FacilityType::Dermatologist);
    }

    #[test]
    fn skin_without_triggers_defaults_to_mild() {
        let result = skin("Looks like a small patch of dry skin.");
        assert_eq!(result, SKIN_DEFAULT);
        assert_eq!(result.severity, Some(Severity::Mild));
        assert_eq!(result.facility, FacilityType::Dermatologist);
    }

    #[test]
    fn most_severe_tier_wins_regardless_of_position() {
        let result = skin("Moderate redness, but the swelling could become severe.");
        assert_eq!(result.severity, Some(Severity::Severe));

        let result = skin("Severe? No. This is moderate.");
        assert_eq!(result.severity, Some(Severity::Severe));
    }

    #[test]
    fn empty_reply_fails_open_to_least_urgent() {
        assert_eq!(skin(""), SKIN_DEFAULT);
        assert_eq!(symptom(""), FacilityType::PrimaryCareClinic);
    }

    #[test]
    fn negation_is_not_understood() {
        assert_eq!(
            skin("This is not an emergency.").facility,
            FacilityType::EmergencyRoom
        );
    }

    #[test]
    fn symptom_emergency_triggers() {
        assert_eq!(symptom("Call 911 now."), FacilityType::EmergencyRoom);
        assert_eq!(symptom("Go IMMEDIATELY."), FacilityType::EmergencyRoom);
        assert_eq!(symptom("This is an Emergency."), FacilityType::EmergencyRoom);
    }

    #[test]
    fn symptom_er_matches_inside_words() {
        assert_eq!(symptom("Drink plenty of water."), FacilityType::EmergencyRoom);
    }

    #[test]
    fn symptom_doctor_tier() {
        assert_eq!(symptom("Visit a doctor soon."), FacilityType::DoctorsOffice);
        assert_eq!(symptom("Try urgent care."), FacilityType::DoctorsOffice);
    }

    #[test]
    fn symptom_default_is_primary_care() {
        let result = classify("Rest at home and stay hydrated.", Domain::Symptom);
        assert_eq!(result.facility, FacilityType::PrimaryCareClinic);
        assert_eq!(result.severity, None);
    }

    #[test]
    fn classification_is_idempotent() {
        let text = "Moderate rash; see a doctor if it spreads.";
        assert_eq!(skin(text), skin(text));
        assert_eq!(
            classify(text, Domain::Symptom),
            classify(text, Domain::Symptom)
        );
    }
}
