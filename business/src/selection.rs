//! Selected user, kept in the `user` query parameter so the detail view can be shared and
//! survives a reload.

use std::any::Any;
use std::fmt::Debug;

use userdesk_states::{State, state_assign_impl};

use crate::user::UserRecord;

pub const USER_PARAM: &str = "user";

/// Query string of the current location.
///
/// `replace_search` must replace the current history entry rather than push a new one.
pub trait Location: Debug + Send {
    /// Query string without the leading `?`.
    fn search(&self) -> String;

    fn replace_search(&mut self, search: &str);
}

/// In-memory [`Location`] for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    search: String,
    replace_count: usize,
}

impl MemoryLocation {
    pub fn new(search: impl Into<String>) -> Self {
        let search: String = search.into();
        Self {
            search: search.trim_start_matches('?').to_owned(),
            replace_count: 0,
        }
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// History length. Replacing never adds entries.
    pub fn history_len(&self) -> usize {
        1
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn replace_search(&mut self, search: &str) {
        self.search = search.trim_start_matches('?').to_owned();
        self.replace_count += 1;
    }
}

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

fn pair_name(pair: &str) -> String {
    decode(pair.split_once('=').map_or(pair, |(name, _)| name))
}

/// First value of `name` in `search`, decoded.
pub fn read_param(search: &str, name: &str) -> Option<String> {
    pairs(search).find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode(key) == name).then(|| decode(value))
    })
}

/// Sets `name` to `value`. The first occurrence is replaced in place and later duplicates
/// are dropped; other parameters keep their order and their original encoding.
pub fn set_param(search: &str, name: &str, value: &str) -> String {
    let encoded = format!("{}={}", urlencoding::encode(name), urlencoding::encode(value));
    let mut replaced = false;
    let mut out: Vec<&str> = Vec::new();

    for pair in pairs(search) {
        if pair_name(pair) != name {
            out.push(pair);
        } else if !replaced {
            out.push(&encoded);
            replaced = true;
        }
    }
    if !replaced {
        out.push(&encoded);
    }
    out.join("&")
}

/// Removes every occurrence of `name`, keeping the other parameters untouched.
pub fn remove_param(search: &str, name: &str) -> String {
    pairs(search)
        .filter(|pair| pair_name(pair) != name)
        .collect::<Vec<_>>()
        .join("&")
}

/// Row selection, backed by a [`Location`].
#[derive(Debug)]
pub struct UserSelection {
    location: Box<dyn Location>,
}

impl Default for UserSelection {
    fn default() -> Self {
        Self::new(MemoryLocation::default())
    }
}

impl UserSelection {
    pub fn new(location: impl Location + 'static) -> Self {
        Self {
            location: Box::new(location),
        }
    }

    pub fn location(&self) -> &dyn Location {
        self.location.as_ref()
    }

    /// The id in the location, if it parses. Whether it is loaded is not checked here.
    pub fn selected_id(&self) -> Option<u64> {
        read_param(&self.location.search(), USER_PARAM)?
            // Surrounding blanks are accepted, so `user=+3` and `user=%203` both select 3.
            .trim()
            .parse()
            .ok()
    }

    pub fn select(&mut self, id: u64) {
        let search = set_param(&self.location.search(), USER_PARAM, &id.to_string());
        self.location.replace_search(&search);
    }

    pub fn clear(&mut self) {
        let current = self.location.search();
        if read_param(&current, USER_PARAM).is_none() {
            return;
        }
        self.location
            .replace_search(&remove_param(&current, USER_PARAM));
    }

    /// The selected record among `records`. A missing, malformed or stale id yields `None`.
    pub fn resolve<'a>(&self, records: &'a [UserRecord]) -> Option<&'a UserRecord> {
        let id = self.selected_id()?;
        records.iter().find(|record| record.id == id)
    }
}

impl State for UserSelection {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserStatus;
    use crate::user::fixtures::{bob_and_amy, user};

    fn selection(search: &str) -> UserSelection {
        UserSelection::new(MemoryLocation::new(search))
    }

    #[test]
    fn select_preserves_other_params() {
        let mut selection = selection("?tab=team&q=a%20b");
        selection.select(7);
        assert_eq!(selection.location().search(), "tab=team&q=a%20b&user=7");
        assert_eq!(selection.selected_id(), Some(7));

        selection.select(3);
        assert_eq!(selection.location().search(), "tab=team&q=a%20b&user=3");
    }

    #[test]
    fn select_replaces_in_place_and_drops_duplicates() {
        let search = set_param("user=1&tab=x&user=2", "user", "9");
        assert_eq!(search, "user=9&tab=x");
    }

    #[test]
    fn clear_removes_only_the_user_param() {
        let mut selection = selection("a=1&user=4&b=2");
        selection.clear();
        assert_eq!(selection.location().search(), "a=1&b=2");
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut location = MemoryLocation::default();
        location.replace_search("user=1");
        location.replace_search("user=2");
        assert_eq!(location.replace_count(), 2);
        assert_eq!(location.history_len(), 1);

        let mut selection = UserSelection::new(location);
        selection.select(5);
        selection.clear();
        // clearing twice is a no-op
        selection.clear();
        assert_eq!(selection.location().search(), "");
    }

    #[test]
    fn malformed_ids_resolve_to_none() {
        let records = bob_and_amy();
        for search in ["user=abc", "user=", "user=-1", "user=1.5", "other=1"] {
            let selection = selection(search);
            assert_eq!(selection.resolve(&records), None, "search {search:?}");
        }
    }

    #[test]
    fn blank_padded_ids_still_parse() {
        for search in ["user=+3", "user=%203", "user=3%20"] {
            assert_eq!(selection(search).selected_id(), Some(3), "search {search:?}");
        }
        assert_eq!(selection("user=3+4").selected_id(), None);
    }

    #[test]
    fn stale_id_resolves_to_none() {
        let records = bob_and_amy();
        let selection = selection("user=42");
        assert_eq!(selection.selected_id(), Some(42));
        assert_eq!(selection.resolve(&records), None);
        // the parameter is left in place
        assert_eq!(selection.location().search(), "user=42");
    }

    #[test]
    fn resolves_loaded_record() {
        let records = vec![
            user(1, "Bob", UserStatus::Active),
            user(2, "Amy", UserStatus::Inactive),
        ];
        let selection = selection("?user=2");
        assert_eq!(selection.resolve(&records).map(|r| r.name.as_str()), Some("Amy"));
    }

    #[test]
    fn params_are_percent_decoded() {
        assert_eq!(read_param("na%6De=J%C3%BCrgen+K", "name").as_deref(), Some("Jürgen K"));
        assert_eq!(read_param("flag", "flag").as_deref(), Some(""));
        assert_eq!(remove_param("user%3D=1&user=2", "user"), "user%3D=1");
    }
}
