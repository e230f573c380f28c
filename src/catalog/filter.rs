//! # Filter Engine
//!
//! [`filter`] derives the visible view of a [`Catalog`] from a [`Query`].
//! It never touches the catalog itself and always keeps catalog order.

use crate::catalog::loader::Catalog;
use crate::catalog::record::InterviewRecord;

/// Current search text plus the selected company and role.
///
/// An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub company: String,
    pub role: String,
}

impl Query {
    pub fn new(
        search: impl Into<String>,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            company: company.into(),
            role: role.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.company.is_empty() && self.role.is_empty()
    }

    /// Whether a record satisfies all three constraints.
    pub fn matches(&self, record: &InterviewRecord) -> bool {
        self.matches_company(record) && self.matches_role(record) && self.matches_search(record)
    }

    fn matches_company(&self, record: &InterviewRecord) -> bool {
        self.company.is_empty() || record.company == self.company
    }

    fn matches_role(&self, record: &InterviewRecord) -> bool {
        self.role.is_empty() || record.role == self.role
    }

    fn matches_search(&self, record: &InterviewRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&term);

        contains(record.company.as_str())
            || contains(record.role.as_str())
            || record.questions.iter().any(|q| {
                contains(q.question.as_str()) || q.approach.as_deref().is_some_and(contains)
            })
    }
}

/// Records matching `query`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a InterviewRecord> {
    catalog.iter().filter(|r| query.matches(r)).collect()
}

/// Catalog positions of the records matching `query`, in catalog order.
pub fn filter_positions(catalog: &Catalog, query: &Query) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, r)| query.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::QuestionEntry;

    fn record(id: &str, company: &str, role: &str, questions: Vec<QuestionEntry>) -> InterviewRecord {
        InterviewRecord {
            id: id.to_string(),
            company: company.to_string(),
            role: role.to_string(),
            experience: "3 years".to_string(),
            date: "March 2024".to_string(),
            file: None,
            notes: None,
            questions,
            raw_content: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            record(
                "a",
                "Acme",
                "Backend Engineer",
                vec![QuestionEntry::new("Explain Kafka partitions", None)],
            ),
            record(
                "b",
                "Globex",
                "Data Engineer",
                vec![QuestionEntry::new(
                    "Design a pipeline",
                    Some("Mention Kafka consumer groups"),
                )],
            ),
            record(
                "c",
                "acme",
                "Data Engineer",
                vec![QuestionEntry::new("Window functions", None)],
            ),
        ])
        .expect("catalog")
    }

    fn ids(records: &[&InterviewRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &Query::default());
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_company_match_is_case_sensitive() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &Query::new("", "Acme", ""));
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_role_match_is_exact() {
        let catalog = sample_catalog();
        assert_eq!(
            ids(&filter(&catalog, &Query::new("", "", "Data Engineer"))),
            vec!["b", "c"]
        );
        assert!(filter(&catalog, &Query::new("", "", "Data")).is_empty());
    }

    #[test]
    fn test_search_matches_approach_text() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &Query::new("consumer", "", ""));
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let catalog = sample_catalog();
        assert_eq!(
            ids(&filter(&catalog, &Query::new("KAFKA", "", ""))),
            vec!["a", "b"]
        );
        assert_eq!(
            ids(&filter(&catalog, &Query::new("ACME", "", ""))),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &Query::new("kafka", "Globex", "Data Engineer"));
        assert_eq!(ids(&result), vec!["b"]);
        assert!(filter(&catalog, &Query::new("window", "Globex", "")).is_empty());
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, &Query::new(" kafka ", "", "")).is_empty());
    }

    #[test]
    fn test_filter_positions_match_filter() {
        let catalog = sample_catalog();
        let query = Query::new("engineer", "", "");
        let positions = filter_positions(&catalog, &query);
        let records = filter(&catalog, &query);
        assert_eq!(positions.len(), records.len());
        for (pos, record) in positions.iter().zip(records) {
            assert_eq!(catalog.records()[*pos].id, record.id);
        }
    }
}
