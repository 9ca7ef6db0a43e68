use std::collections::HashMap;

use super::Store;

/// Read-only view of a process environment.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Looks a key up in the environment first and falls back to the store.
///
/// Values found in the environment are never written back.
pub struct Resolver<'a, E = ProcessEnv> {
    store: &'a Store,
    env: E,
}

impl<'a> Resolver<'a, ProcessEnv> {
    pub fn new(store: &'a Store) -> Self {
        Self { store, env: ProcessEnv }
    }
}

impl<'a, E: EnvSource> Resolver<'a, E> {
    pub fn with_env(store: &'a Store, env: E) -> Self {
        Self { store, env }
    }

    pub fn resolve(&self, key: &str) -> Option<String> {
        self.env
            .var(key)
            .or_else(|| self.store.get(key).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn environment_wins_over_store() {
        let mut store = Store::new();
        store.put("BENCHIT_HOSTNAME", "KP04");
        let resolver = Resolver::with_env(&store, env(&[("BENCHIT_HOSTNAME", "node17")]));

        assert_eq!(resolver.resolve("BENCHIT_HOSTNAME"), Some("node17".to_string()));
        assert_eq!(store.get("BENCHIT_HOSTNAME"), Some("KP04"));
    }

    #[test]
    fn falls_back_to_store() {
        let mut store = Store::new();
        store.put("BENCHIT_KERNEL_RUNS", "6");
        let resolver = Resolver::with_env(&store, env(&[]));

        assert_eq!(resolver.resolve("BENCHIT_KERNEL_RUNS"), Some("6".to_string()));
        assert_eq!(resolver.resolve("BENCHIT_KERNEL_STEPS"), None);
    }

    #[test]
    fn process_env_ignores_unrepresentable_keys() {
        assert_eq!(ProcessEnv.var(""), None);
        assert_eq!(ProcessEnv.var("A=B"), None);
    }
}
