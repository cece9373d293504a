use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use api::conversion_pair::ConversionPair;
use api::rate::Quote;
use api::rate_providers::frankfurter::parse_rate_body;
use api::rate_providers::RateProvider;
use api::RateError;

/// Answers from canned bodies; a pair without one behaves like a network
/// failure. Clones share the request counter.
#[derive(Clone, Default)]
pub struct StubProvider {
    bodies: HashMap<ConversionPair, (u16, &'static str)>,
    requests: Rc<Cell<usize>>,
}

impl StubProvider {
    pub fn with(mut self, pair: ConversionPair, status: u16, body: &'static str) -> Self {
        self.bodies.insert(pair, (status, body));
        self
    }

    /// Number of `get_rate` calls made through this stub or any clone of it.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl RateProvider for StubProvider {
    async fn get_rate(&self, pair: ConversionPair) -> Result<Quote, RateError> {
        self.requests.set(self.requests.get() + 1);
        let (status, body) = self
            .bodies
            .get(&pair)
            .ok_or_else(|| RateError::Transport("connection refused".into()))?;
        let rate = parse_rate_body(*status, body, pair.target)?;
        Ok(Quote { pair, rate })
    }
}
