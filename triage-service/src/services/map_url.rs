//! Map search links for the recommended facility.

/// Public maps host used when none is configured.
pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Build `<maps>/search/<facility>+near+<address>` against the default host.
pub fn build_map_url(facility_type: &str, address: &str) -> String {
    build_map_url_with_base(DEFAULT_MAPS_BASE_URL, facility_type, address)
}

/// Same as [`build_map_url`] with an explicit maps base URL.
///
/// Both fields are percent-encoded; the address is not otherwise checked.
pub fn build_map_url_with_base(base_url: &str, facility_type: &str, address: &str) -> String {
    format!(
        "{}/search/{}+near+{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(facility_type),
        urlencoding::encode(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_facility_and_address() {
        let url = build_map_url("Emergency Room", "123 Main St");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/Emergency%20Room+near+123%20Main%20St"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = build_map_url("Doctor's Office", "5 Rue de l'Été, Paris & Co/2");
        assert!(url.starts_with("https://www.google.com/maps/search/Doctor%27s%20Office+near+"));
        assert!(url.ends_with("5%20Rue%20de%20l%27%C3%89t%C3%A9%2C%20Paris%20%26%20Co%2F2"));
    }

    #[test]
    fn custom_base_tolerates_trailing_slash() {
        let url = build_map_url_with_base("http://maps.local/", "Dermatologist", "");
        assert_eq!(url, "http://maps.local/search/Dermatologist+near+");
    }
}
