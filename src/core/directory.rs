use std::collections::HashMap;

use crate::core::models::{BaseEntity, Client, Coach};

/// Read-only id lookup over a borrowed slice. When ids repeat, the first
/// record in slice order wins.
#[derive(Debug)]
pub struct Directory<'a, T: BaseEntity> {
    items: &'a [T],
    by_key: HashMap<&'a str, usize>,
}

impl<'a, T: BaseEntity> Directory<'a, T> {
    fn from_keys<F>(items: &'a [T], keys: F) -> Self
    where
        F: Fn(&'a T) -> Vec<&'a str>,
    {
        let mut by_key = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            for key in keys(item) {
                by_key.entry(key).or_insert(idx);
            }
        }
        Self { items, by_key }
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.by_key.get(key).map(|idx| &self.items[*idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn values(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }
}

pub type ClientDirectory<'a> = Directory<'a, Client>;
pub type CoachDirectory<'a> = Directory<'a, Coach>;

impl<'a> Directory<'a, Client> {
    pub fn clients(items: &'a [Client]) -> Self {
        Self::from_keys(items, |c| vec![c.id()])
    }
}

impl<'a> Directory<'a, Coach> {
    /// Indexes both the primary id and the auth uid, so `get` follows the
    /// same rule as [`Coach::matches_id`]: first coach in slice order that
    /// matches either field.
    pub fn coaches(items: &'a [Coach]) -> Self {
        Self::from_keys(items, |c| {
            let mut keys = vec![c.id.as_str()];
            if let Some(uid) = c.uid.as_deref() {
                keys.push(uid);
            }
            keys
        })
    }
}
