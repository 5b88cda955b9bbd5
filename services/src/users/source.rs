//! Where the users endpoint reads its records from.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use userdesk_business::{UserRecord, UserStatus};

#[derive(Debug, Error)]
pub enum UserSourceError {
    #[error("user source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the full user list. No paging, filtering or sorting happens here.
pub trait UserSource: Clone + Send + Sync + 'static {
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, UserSourceError>> + Send;
}

/// Fixed in-memory user list.
#[derive(Debug, Clone)]
pub struct SeededUserSource {
    users: Arc<Vec<UserRecord>>,
}

impl SeededUserSource {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// The ten demo users.
    pub fn demo() -> Self {
        Self::with_users(demo_users())
    }
}

impl Default for SeededUserSource {
    fn default() -> Self {
        Self::demo()
    }
}

impl UserSource for SeededUserSource {
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, UserSourceError>> + Send {
        let users = Arc::clone(&self.users);
        async move { Ok(users.as_ref().clone()) }
    }
}

fn joined(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn demo_user(
    id: u64,
    name: &str,
    status: UserStatus,
    address: &str,
    joined_at: DateTime<Utc>,
    notes: &str,
) -> UserRecord {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    UserRecord {
        id,
        name: name.to_owned(),
        email,
        status,
        address: address.to_owned(),
        joined_at,
        notes: notes.to_owned(),
    }
}

pub fn demo_users() -> Vec<UserRecord> {
    use UserStatus::{Active, Inactive};

    vec![
        demo_user(
            1,
            "John Doe",
            Active,
            "12 Harbor Lane, Portland, OR",
            joined(2021, 3, 14),
            "Account owner. Prefers email contact.",
        ),
        demo_user(
            2,
            "Jane Smith",
            Inactive,
            "48 Elm Street, Austin, TX",
            joined(2020, 11, 2),
            "Paused subscription in Q2.",
        ),
        demo_user(
            3,
            "Mike Johnson",
            Active,
            "7 Birch Road, Denver, CO",
            joined(2022, 6, 21),
            "Beta tester for the reporting module.",
        ),
        demo_user(
            4,
            "Sarah Wilson",
            Inactive,
            "301 Pine Avenue, Seattle, WA",
            joined(2019, 8, 9),
            "Requested data export before leaving.",
        ),
        demo_user(
            5,
            "David Brown",
            Active,
            "95 Maple Court, Chicago, IL",
            joined(2023, 1, 30),
            "Team lead, manages four seats.",
        ),
        demo_user(
            6,
            "Lisa Davis",
            Inactive,
            "16 Cedar Drive, Boston, MA",
            joined(2021, 9, 17),
            "Invoice dispute resolved.",
        ),
        demo_user(
            7,
            "Tom Anderson",
            Active,
            "220 Oak Boulevard, Miami, FL",
            joined(2022, 2, 5),
            "Uses the API integration daily.",
        ),
        demo_user(
            8,
            "Emma Taylor",
            Active,
            "5 Willow Way, San Diego, CA",
            joined(2023, 7, 12),
            "Joined through the referral program.",
        ),
        demo_user(
            9,
            "Chris Miller",
            Inactive,
            "63 Spruce Street, Phoenix, AZ",
            joined(2020, 4, 28),
            "Card expired, awaiting update.",
        ),
        demo_user(
            10,
            "Anna White",
            Active,
            "410 Aspen Place, Nashville, TN",
            joined(2024, 1, 8),
            "Newest member of the design team.",
        ),
    ]
}
