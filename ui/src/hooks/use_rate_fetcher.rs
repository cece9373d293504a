use api::rate_providers::RateProvider;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state_mut::ConverterState;
use crate::rate_fetch;

/// Fetches the rate whenever the selected pair changes, including at mount.
///
/// The pair is read through a memo, so a write that leaves the pair equal (for
/// example re-selecting the current currency) does not start a fetch. Each
/// fetch holds a ticket; once the pair changes again or the component unmounts
/// its completion is dropped without touching state.
pub fn use_rate_fetcher<P>(state: ConverterState, provider: P)
where
    P: RateProvider + Clone + 'static,
{
    let pair_signal = state.pair;
    let mut fetch = state.fetch;
    let pair = use_memo(move || pair_signal());

    use_effect(move || {
        let pair = pair();
        if pair.is_identity() {
            // Same-currency pairs are still quoted by the service.
            debug!("requesting identity pair {}", pair);
        }
        let ticket = fetch.write().begin(pair);
        let provider = provider.clone();

        spawn(async move {
            let outcome = rate_fetch::resolve(&provider, ticket).await;
            if let Ok(mut fetch) = fetch.try_write() {
                fetch.complete(ticket, outcome);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut fetch) = fetch.try_write() {
            fetch.cancel();
        }
    });
}
