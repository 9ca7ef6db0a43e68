//! Seeding a [`Store`] with built-in variables.

use tracing::debug;

use crate::store::Store;

/// Puts trusted `KEY=value` strings into `store`.
///
/// Unlike PARAMETER file lines, seed values are not classified: everything
/// after the first `=` is stored. Entries without `=` or with an empty key
/// are ignored. Returns the number of new keys.
pub fn seed_from_lines<I, S>(store: &mut Store, lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut added = 0;
    for line in lines {
        let line = line.as_ref();
        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                if store.put(key, value).is_none() {
                    added += 1;
                }
            }
            _ => debug!(entry = line, "ignoring seed entry"),
        }
    }
    added
}

/// Copies the current process environment into `store`.
///
/// Variables whose name or value is not valid unicode are skipped.
pub fn capture_environment(store: &mut Store) -> usize {
    let vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    store.fill(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_split_at_first_equals() {
        let mut store = Store::new();
        let added = seed_from_lines(
            &mut store,
            ["BENCHIT_DEFINES= -DLINEAR_MEASUREMENT -DDEBUGLEVEL=0", "BASH_ALIASES=()"],
        );
        assert_eq!(added, 2);
        assert_eq!(
            store.get("BENCHIT_DEFINES"),
            Some(" -DLINEAR_MEASUREMENT -DDEBUGLEVEL=0")
        );
        assert_eq!(store.get("BASH_ALIASES"), Some("()"));
    }

    #[test]
    fn seeds_are_not_classified() {
        let mut store = Store::new();
        seed_from_lines(&mut store, ["lower='open", "SHELL=$0"]);
        assert_eq!(store.get("lower"), Some("'open"));
        assert_eq!(store.get("SHELL"), Some("$0"));
    }

    #[test]
    fn malformed_seeds_are_ignored() {
        let mut store = Store::new();
        let added = seed_from_lines(&mut store, ["NOEQUALS", "=value"]);
        assert_eq!(added, 0);
        assert_eq!(store.size(), None);
    }

    #[test]
    fn capture_copies_process_environment() {
        let mut store = Store::new();
        capture_environment(&mut store);
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(store.get("PATH"), Some(path.as_str()));
        }
    }
}
