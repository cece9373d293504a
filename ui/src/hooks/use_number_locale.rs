use api::number_format::NumberLocale;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::compat;

/// Replaces `locale` with the rules for the display language once it is known.
/// Keeps the current rules when no language is reported.
pub fn use_number_locale(mut locale: Signal<NumberLocale>) {
    use_effect(move || {
        spawn(async move {
            if let Some(tag) = compat::preferred_language().await {
                let rules = NumberLocale::from_language_tag(&tag);
                info!("number locale for {}: {:?}", tag, rules);
                locale.set(rules);
            }
        });
    });
}
