pub mod rate_service;
pub mod theme_preference;
pub mod user_prefs;

/// Reads a preference variable: the runtime environment first, then the value
/// baked in at compile time. Browsers have no runtime environment, so wasm
/// builds only see the latter.
macro_rules! pref_var {
    ($name:literal) => {
        std::env::var($name)
            .ok()
            .or_else(|| option_env!($name).map(str::to_string))
            .filter(|v| !v.trim().is_empty())
    };
}
pub(crate) use pref_var;
