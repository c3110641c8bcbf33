//! Maps localized city names to the canonical names the search index expects.

use std::sync::Arc;

use super::CityTable;

/// City name normalizer over a shared, immutable [`CityTable`].
#[derive(Debug, Clone)]
pub struct CityNormalizer {
    table: Arc<CityTable>,
    /// Aliases for substring scanning, longest first so "제주도" wins over "제주"
    scan_order: Vec<(String, String)>,
}

impl CityNormalizer {
    pub fn new(table: Arc<CityTable>) -> Self {
        let mut scan_order: Vec<(String, String)> = table
            .aliases()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        scan_order.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { table, scan_order }
    }

    pub fn table(&self) -> &Arc<CityTable> {
        &self.table
    }

    /// Exact alias, then any alias contained in the input, then the input unchanged.
    pub fn normalize(&self, local_name: &str) -> String {
        let trimmed = local_name.trim();
        if let Some(canonical) = self.table.canonical(trimmed) {
            return canonical.to_string();
        }

        let lowered = trimmed.to_lowercase();
        self.scan_order
            .iter()
            .find(|(alias, _)| lowered.contains(alias.as_str()))
            .map(|(_, canonical)| canonical.clone())
            .unwrap_or_else(|| trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> CityNormalizer {
        CityNormalizer::new(Arc::new(CityTable::builtin()))
    }

    #[test]
    fn test_exact_alias() {
        let n = normalizer();
        assert_eq!(n.normalize("도쿄"), "Tokyo");
        assert_eq!(n.normalize(" 방콕 "), "Bangkok");
        assert_eq!(n.normalize("東京"), "Tokyo");
    }

    #[test]
    fn test_substring_alias() {
        let n = normalizer();
        assert_eq!(n.normalize("오사카 여행"), "Osaka");
        assert_eq!(n.normalize("일본 교토시"), "Kyoto");
    }

    #[test]
    fn test_longest_alias_wins() {
        let mut table = CityTable::new();
        table.insert(super::super::CityRecord {
            canonical: "Jeju".to_string(),
            aliases: vec!["제주".to_string()],
            lat: None,
            lon: None,
        });
        table.insert(super::super::CityRecord {
            canonical: "Jeju Island".to_string(),
            aliases: vec!["제주도".to_string()],
            lat: None,
            lon: None,
        });
        let n = CityNormalizer::new(Arc::new(table));
        assert_eq!(n.normalize("제주도 동쪽"), "Jeju Island");
        assert_eq!(n.normalize("제주시"), "Jeju");
    }

    #[test]
    fn test_unknown_name_unchanged() {
        let n = normalizer();
        assert_eq!(n.normalize("Reykjavik"), "Reykjavik");
        assert_eq!(n.normalize(""), "");
    }
}
