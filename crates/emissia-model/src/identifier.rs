// SPDX-License-Identifier: Apache-2.0

/// Lookup key form used by the fuel and waste tables: lowercase with spaces
/// replaced by underscores. No trimming or fuzzy matching.
#[must_use]
pub fn normalize_identifier(input: &str) -> String {
    input.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::normalize_identifier;

    #[test]
    fn lowercases_and_replaces_spaces() {
        assert_eq!(normalize_identifier("Natural Gas"), "natural_gas");
        assert_eq!(normalize_identifier("Food  Waste"), "food__waste");
    }

    #[test]
    fn leaves_other_separators_alone() {
        assert_eq!(normalize_identifier("heating-oil"), "heating-oil");
        assert_eq!(normalize_identifier(" lpg"), "_lpg");
    }
}
