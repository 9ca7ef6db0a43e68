use std::collections::HashMap;

pub mod resolver;

pub use resolver::{EnvSource, ProcessEnv, Resolver};

/// Registry of environment variables known to a benchmark run.
///
/// The table is allocated on the first `put` or an explicit `init_table`, so a
/// `Store` can live in a `static` and still report that it was never populated.
#[derive(Debug, Default)]
pub struct Store {
    data: Option<HashMap<String, String>>,
}

impl Store {
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Allocates an empty table, dropping whatever was stored before.
    pub fn init_table(&mut self) {
        self.data = Some(HashMap::new());
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// Inserts or overwrites `key`, returning the value it replaced.
    ///
    /// `None` means the key is new. Empty keys are refused and leave the
    /// table untouched.
    pub fn put(&mut self, key: &str, value: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        self.data
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key).map(String::as_str)
    }

    /// Number of distinct keys, or `None` if the table was never created.
    pub fn size(&self) -> Option<usize> {
        self.data.as_ref().map(HashMap::len)
    }

    /// Puts every pair and returns how many keys were new.
    pub fn fill<I, K, V>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut added = 0;
        for (key, value) in entries {
            let key = key.as_ref();
            if !key.is_empty() && self.put(key, value.as_ref()).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Entries ordered by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .data
            .iter()
            .flat_map(|data| data.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
