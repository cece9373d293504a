//! Bookkeeping for rate fetches triggered by pair changes.
//!
//! Every trigger takes a [`FetchTicket`] stamped with a new generation. A
//! completion may only write state while its ticket is still current; a newer
//! trigger or an unmount advances the generation and turns older completions
//! into no-ops. The request itself is never aborted.

use api::conversion_pair::ConversionPair;
use api::rate::Quote;
use api::rate::Rate;
use api::rate_providers::RateProvider;
use api::RateError;
use api::UserError;
use dioxus_logger::tracing::{debug, info, warn};

/// Identifies one triggered fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pair: ConversionPair,
}

/// The stored rate plus a counter bumped by every completed fetch, so an
/// identical rate from a new fetch still registers as a change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateSnapshot {
    pub rate: Option<Rate>,
    revision: u64,
}

/// Rate, error and loading state owned by the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateFetchState {
    generation: u64,
    snapshot: RateSnapshot,
    error: Option<UserError>,
    loading: bool,
}

impl RateFetchState {
    /// Starts a fetch for `pair`: clears the error, sets loading and
    /// supersedes any fetch still in flight. The last known rate stays until
    /// this fetch completes.
    pub fn begin(&mut self, pair: ConversionPair) -> FetchTicket {
        self.generation += 1;
        self.error = None;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            pair,
        }
    }

    /// Invalidates the in-flight fetch without starting a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a finished fetch. Returns `false`, changing nothing, when the
    /// ticket has been superseded.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Quote, RateError>) -> bool {
        if !self.is_current(&ticket) {
            debug!("discarding stale rate for {}", ticket.pair);
            return false;
        }

        match outcome {
            Ok(quote) => {
                info!("rate for {}: {}", ticket.pair, quote.rate);
                self.snapshot.rate = Some(quote.rate);
                self.error = None;
            }
            Err(e) => {
                warn!("rate fetch for {} failed: {}", ticket.pair, e);
                self.snapshot.rate = None;
                self.error = Some(e.user_error());
            }
        }
        self.snapshot.revision += 1;
        self.loading = false;
        true
    }

    /// Surfaces the Convert action's validation error. Rate is left alone.
    pub fn report(&mut self, error: UserError) {
        self.error = Some(error);
    }

    pub fn rate(&self) -> Option<Rate> {
        self.snapshot.rate
    }

    pub fn snapshot(&self) -> RateSnapshot {
        self.snapshot
    }

    pub fn error(&self) -> Option<UserError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Performs the network side of a fetch. Never touches state, so it can run
/// while the ticket goes stale.
pub async fn resolve<P: RateProvider>(provider: &P, ticket: FetchTicket) -> Result<Quote, RateError> {
    info!("fetching rate for {}", ticket.pair);
    provider.get_rate(ticket.pair).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::convert_amount;
    use api::currency_code::CurrencyCode;
    use api::number_format::NumberLocale;
    use crate::test_support::StubProvider;

    fn eur_inr() -> ConversionPair {
        ConversionPair::new(CurrencyCode::EUR, CurrencyCode::INR)
    }

    #[tokio::test]
    async fn successful_fetch_feeds_converter() {
        let stub = StubProvider::default().with(eur_inr(), 200, r#"{"rates":{"INR":90}}"#);
        let mut state = RateFetchState::default();

        let ticket = state.begin(eur_inr());
        assert!(state.is_loading());
        let outcome = resolve(&stub, ticket).await;
        assert!(state.complete(ticket, outcome));

        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(convert_amount("2", state.rate(), &NumberLocale::EN_US), "180");
    }

    #[tokio::test]
    async fn empty_rates_reports_unavailable() {
        let stub = StubProvider::default().with(eur_inr(), 200, r#"{"rates":{}}"#);
        let mut state = RateFetchState::default();

        let ticket = state.begin(eur_inr());
        let outcome = resolve(&stub, ticket).await;
        state.complete(ticket, outcome);

        assert_eq!(state.rate(), None);
        assert_eq!(state.error(), Some(UserError::RateUnavailable));
        assert_eq!(
            state.error().unwrap().to_string(),
            "Rate unavailable right now. Try again later."
        );
    }

    #[tokio::test]
    async fn network_failure_clears_rate() {
        let good = StubProvider::default().with(eur_inr(), 200, r#"{"rates":{"INR":90}}"#);
        let offline = StubProvider::default();
        let mut state = RateFetchState::default();

        let first = state.begin(eur_inr());
        let outcome = resolve(&good, first).await;
        state.complete(first, outcome);
        assert!(state.rate().is_some());

        let second = state.begin(eur_inr());
        let outcome = resolve(&offline, second).await;
        state.complete(second, outcome);

        assert_eq!(state.rate(), None);
        assert_eq!(state.error(), Some(UserError::FetchFailed));
        assert_eq!(
            state.error().unwrap().to_string(),
            "Failed to fetch rates. Please try again."
        );
    }

    #[tokio::test]
    async fn http_error_status_is_failure() {
        let stub = StubProvider::default().with(eur_inr(), 500, "");
        let mut state = RateFetchState::default();

        let ticket = state.begin(eur_inr());
        let outcome = resolve(&stub, ticket).await;
        state.complete(ticket, outcome);

        assert_eq!(state.error(), Some(UserError::FetchFailed));
    }

    #[tokio::test]
    async fn stale_completion_changes_nothing() {
        let inr_eur = eur_inr().swapped();
        let stub = StubProvider::default()
            .with(eur_inr(), 200, r#"{"rates":{"INR":90}}"#)
            .with(inr_eur, 200, r#"{"rates":{"EUR":0.011}}"#);
        let mut state = RateFetchState::default();

        let stale = state.begin(eur_inr());
        let current = state.begin(inr_eur);

        // The stale fetch lands first while the current one is still pending.
        let outcome = resolve(&stub, stale).await;
        assert!(!state.complete(stale, outcome));
        assert!(state.is_loading());
        assert_eq!(state.rate(), None);

        let outcome = resolve(&stub, current).await;
        assert!(state.complete(current, outcome));
        let after_current = state.clone();

        // A late failure for the stale pair is ignored too.
        assert!(!state.complete(stale, Err(RateError::Status(502))));
        assert_eq!(state, after_current);
        assert_eq!(state.rate().map(|r| r.value()), Some(0.011));
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut state = RateFetchState::default();
        let ticket = state.begin(eur_inr());
        state.complete(ticket, Err(RateError::Status(404)));
        assert!(state.error().is_some());

        state.begin(eur_inr());
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn cancel_suppresses_in_flight_fetch() {
        let mut state = RateFetchState::default();
        let ticket = state.begin(eur_inr());
        state.cancel();
        assert!(!state.is_current(&ticket));
        assert!(!state.complete(ticket, Err(RateError::Status(500))));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn report_keeps_rate() {
        let mut state = RateFetchState::default();
        let ticket = state.begin(eur_inr());
        let rate = Rate::new(90.0).unwrap();
        state.complete(ticket, Ok(Quote { pair: eur_inr(), rate }));

        state.report(UserError::InvalidAmount);
        assert_eq!(state.error(), Some(UserError::InvalidAmount));
        assert_eq!(state.rate(), Some(rate));
    }

    #[test]
    fn identical_rate_still_bumps_snapshot() {
        let mut state = RateFetchState::default();
        let rate = Rate::new(1.0).unwrap();
        let pair = eur_inr();

        let first = state.begin(pair);
        state.complete(first, Ok(Quote { pair, rate }));
        let before = state.snapshot();

        let second = state.begin(pair);
        state.complete(second, Ok(Quote { pair, rate }));
        assert_ne!(state.snapshot(), before);
        assert_eq!(state.snapshot().rate, before.rate);
    }
}
