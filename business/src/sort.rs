use std::cmp::Ordering;

use crate::user::{UserField, UserRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Descending reverses the comparison, not the sorted list, so ties keep their order.
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// What a column header shows for its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Unsorted => "⬍",
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

/// Sort key and direction. With no key the source order is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<UserField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: UserField, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Ascending on the current key flips to descending; anything else sorts
    /// ascending by `key`.
    pub fn toggle(&mut self, key: UserField) {
        *self = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            Self::by(key, SortDirection::Descending)
        } else {
            Self::by(key, SortDirection::Ascending)
        };
    }

    pub fn indicator(&self, field: UserField) -> SortIndicator {
        match (self.key, self.direction) {
            (Some(key), SortDirection::Ascending) if key == field => SortIndicator::Ascending,
            (Some(key), SortDirection::Descending) if key == field => SortIndicator::Descending,
            _ => SortIndicator::Unsorted,
        }
    }
}

/// Returns `records` ordered by `sort`. Stable; the input is left untouched.
pub fn sort_users<'a>(records: &[&'a UserRecord], sort: &SortState) -> Vec<&'a UserRecord> {
    let mut sorted = records.to_vec();
    if let Some(key) = sort.key {
        sorted.sort_by(|a, b| sort.direction.apply(key.compare(a, b)));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserStatus;
    use crate::user::fixtures::{bob_and_amy, user};

    fn names(records: &[&UserRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn sort_by_name_both_directions() {
        let records = bob_and_amy();
        let refs: Vec<_> = records.iter().collect();

        let asc = sort_users(&refs, &SortState::by(UserField::Name, SortDirection::Ascending));
        assert_eq!(names(&asc), ["Amy", "Bob"]);

        let desc = sort_users(&refs, &SortState::by(UserField::Name, SortDirection::Descending));
        assert_eq!(names(&desc), ["Bob", "Amy"]);

        // input untouched
        assert_eq!(names(&refs), ["Bob", "Amy"]);
    }

    #[test]
    fn no_key_is_identity() {
        let records = vec![
            user(3, "Cy", UserStatus::Active),
            user(1, "Al", UserStatus::Inactive),
            user(2, "Bo", UserStatus::Active),
        ];
        let refs: Vec<_> = records.iter().collect();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let state = SortState {
                key: None,
                direction,
            };
            let out = sort_users(&refs, &state);
            assert_eq!(out, refs);
        }
    }

    #[test]
    fn ties_keep_relative_order_in_both_directions() {
        let records = vec![
            user(1, "A", UserStatus::Inactive),
            user(2, "B", UserStatus::Active),
            user(3, "C", UserStatus::Inactive),
            user(4, "D", UserStatus::Active),
        ];
        let refs: Vec<_> = records.iter().collect();

        let asc = sort_users(&refs, &SortState::by(UserField::Status, SortDirection::Ascending));
        assert_eq!(names(&asc), ["B", "D", "A", "C"]);

        let desc = sort_users(
            &refs,
            &SortState::by(UserField::Status, SortDirection::Descending),
        );
        assert_eq!(names(&desc), ["A", "C", "B", "D"]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let records = vec![
            user(5, "eve", UserStatus::Active),
            user(2, "Dan", UserStatus::Inactive),
            user(9, "Al", UserStatus::Active),
            user(1, "Dan", UserStatus::Active),
        ];
        let refs: Vec<_> = records.iter().collect();

        for key in UserField::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let state = SortState::by(key, direction);
                let once = sort_users(&refs, &state);
                let twice = sort_users(&once, &state);
                assert_eq!(once, twice, "not idempotent for {state:?}");
            }
        }
    }

    #[test]
    fn toggle_transitions() {
        let mut state = SortState::default();
        assert_eq!(state.key, None);

        state.toggle(UserField::Name);
        assert_eq!(state, SortState::by(UserField::Name, SortDirection::Ascending));

        state.toggle(UserField::Name);
        assert_eq!(state, SortState::by(UserField::Name, SortDirection::Descending));

        state.toggle(UserField::Name);
        assert_eq!(state, SortState::by(UserField::Name, SortDirection::Ascending));

        // a new key always starts ascending
        state.toggle(UserField::Name);
        state.toggle(UserField::Email);
        assert_eq!(state, SortState::by(UserField::Email, SortDirection::Ascending));
    }

    #[test]
    fn indicator_follows_state() {
        let state = SortState::by(UserField::Id, SortDirection::Descending);
        assert_eq!(state.indicator(UserField::Id), SortIndicator::Descending);
        assert_eq!(state.indicator(UserField::Name), SortIndicator::Unsorted);
        assert_eq!(SortState::default().indicator(UserField::Id), SortIndicator::Unsorted);
        assert_eq!(SortIndicator::Ascending.symbol(), "⬆");
    }
}
