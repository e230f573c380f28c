use std::collections::{BTreeSet, HashSet};

use crate::catalog::record::InterviewRecord;

/// Label of the default "no constraint" entry in both selectors.
pub const ALL_COMPANIES: &str = "All Companies";
pub const ALL_ROLES: &str = "All Roles";

/// Distinct, sorted companies and roles of the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub roles: Vec<String>,
}

impl FilterOptions {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a InterviewRecord>) -> Self {
        let mut companies = BTreeSet::new();
        let mut roles = BTreeSet::new();
        for record in records {
            companies.insert(record.company.clone());
            roles.insert(record.role.clone());
        }
        Self {
            companies: companies.into_iter().collect(),
            roles: roles.into_iter().collect(),
        }
    }
}

/// Aggregate counters shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub companies: usize,
}

impl Stats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a InterviewRecord>) -> Self {
        let mut total = 0;
        let mut companies = HashSet::new();
        for record in records {
            total += 1;
            companies.insert(record.company.as_str());
        }
        Self {
            total,
            companies: companies.len(),
        }
    }
}
