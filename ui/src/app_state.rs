use api::prefs::user_prefs::UserPrefs;
use api::rate_providers::frankfurter::Frankfurter;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub provider: Frankfurter,
}

/// Startup configuration shared read-only with every component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let provider = Frankfurter::new(prefs.rate_service());
        Self(Arc::new(AppStateData { prefs, provider }))
    }
}
