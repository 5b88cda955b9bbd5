//! User records as served by `GET /api/users`.

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status. Declaration order is the sort order: `Active < Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Every status, in declared order. Drives the status filter options.
pub const USER_STATUSES: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

impl UserStatus {
    /// Wire value, as it appears in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user. Never mutated after it is decoded; the table only filters and reorders
/// references to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(default)]
    pub address: String,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

impl UserRecord {
    /// `joined_at` as shown in the detail view, e.g. `March 4, 2024`.
    pub fn joined_display(&self) -> String {
        self.joined_at.format("%B %-d, %Y").to_string()
    }
}

/// A field of [`UserRecord`] that the table can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Name,
    Email,
    Status,
    Address,
    JoinedAt,
    Notes,
}

impl UserField {
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Status,
        Self::Address,
        Self::JoinedAt,
        Self::Notes,
    ];

    /// Field name as serialized.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Status => "status",
            Self::Address => "address",
            Self::JoinedAt => "joined_at",
            Self::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Status => "Status",
            Self::Address => "Address",
            Self::JoinedAt => "Joined",
            Self::Notes => "Notes",
        }
    }

    /// Natural ordering of the field's values: numeric for `id`, chronological for
    /// `joined_at`, declared order for `status`, byte-wise lexicographic for strings.
    pub fn compare(self, a: &UserRecord, b: &UserRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Status => a.status.cmp(&b.status),
            Self::Address => a.address.cmp(&b.address),
            Self::JoinedAt => a.joined_at.cmp(&b.joined_at),
            Self::Notes => a.notes.cmp(&b.notes),
        }
    }

    /// Plain text rendering used by table cells without a custom formatter.
    pub fn display_value(self, record: &UserRecord) -> String {
        match self {
            Self::Id => record.id.to_string(),
            Self::Name => record.name.clone(),
            Self::Email => record.email.clone(),
            Self::Status => record.status.to_string(),
            Self::Address => record.address.clone(),
            Self::JoinedAt => record.joined_display(),
            Self::Notes => record.notes.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone as _;

    use super::*;

    pub fn user(id: u64, name: &str, status: UserStatus) -> UserRecord {
        UserRecord {
            id,
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            status,
            address: String::new(),
            joined_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            notes: String::new(),
        }
    }

    /// `[{1, Bob, active}, {2, Amy, inactive}]`
    pub fn bob_and_amy() -> Vec<UserRecord> {
        vec![
            user(1, "Bob", UserStatus::Active),
            user(2, "Amy", UserStatus::Inactive),
        ]
    }
}
