use std::{
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

use shared::ConfigField;
use strum::IntoEnumIterator;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable the loader reads, aliases included.
pub fn config_env_keys() -> Vec<&'static str> {
    ConfigField::iter()
        .flat_map(|field| std::iter::once(field.env_key()).chain(field.env_alias()))
        .collect()
}

/// Holds the process environment exclusively with only `pairs` set among the config keys.
/// The config keys are cleared again on drop.
pub struct ScopedEnv {
    _guard: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_config_env();
        for (key, value) in pairs {
            env::set_var(key, value);
        }
        Self { _guard: guard }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        clear_config_env();
    }
}

fn clear_config_env() {
    for key in config_env_keys() {
        env::remove_var(key);
    }
}
