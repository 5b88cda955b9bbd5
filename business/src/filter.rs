use crate::user::{UserRecord, UserStatus};

/// Name and status filter of the users table.
///
/// Name matching is a case-insensitive substring test, status matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub name_pattern: String,
    pub status: Option<UserStatus>,
}

impl FilterState {
    /// Whether any filter narrows the result. Decides which empty message is shown.
    pub fn is_active(&self) -> bool {
        !self.name_pattern.is_empty() || self.status.is_some()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        NameMatcher::new(&self.name_pattern).matches(&record.name) && self.status_matches(record)
    }

    fn status_matches(&self, record: &UserRecord) -> bool {
        self.status.is_none_or(|status| status == record.status)
    }
}

struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    fn new(pattern: &str) -> Self {
        Self {
            needle: pattern.to_lowercase(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}

/// Keeps the records matching `filter`, in their original order.
pub fn filter_users<'a>(records: &'a [UserRecord], filter: &FilterState) -> Vec<&'a UserRecord> {
    let name = NameMatcher::new(&filter.name_pattern);
    records
        .iter()
        .filter(|record| name.matches(&record.name) && filter.status_matches(record))
        .collect()
}
