// Platform shims for the few browser facilities the converter touches:
// persistent storage, the color-scheme media query, the root element's theme
// and the preferred language.
//
// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::prefs::theme_preference::ThemePreference;
    use web_sys::{Storage, Window};

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub async fn load_preference(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub async fn store_preference(key: &str, value: &str) -> bool {
        match local_storage() {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }

    pub async fn prefers_dark() -> Option<bool> {
        let window: Window = web_sys::window()?;
        let query = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(query.matches())
    }

    pub async fn apply_theme(theme: ThemePreference) -> bool {
        let apply = || -> Option<()> {
            let root = web_sys::window()?.document()?.document_element()?;
            root.class_list()
                .toggle_with_force("dark", theme.is_dark())
                .ok()?;
            root.set_attribute("data-theme", theme.as_str()).ok()
        };
        apply().is_some()
    }

    pub async fn preferred_language() -> Option<String> {
        web_sys::window()?.navigator().language()
    }
}

/// # Webview Implementation
/// Desktop builds render into a webview, so the same browser APIs are reached
/// by evaluating JavaScript in it. Outside a webview every call degrades to
/// "unavailable".
#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::prefs::theme_preference::ThemePreference;
    use dioxus::document;
    use dioxus_logger::tracing::debug;
    use serde::de::DeserializeOwned;

    async fn eval_js<T: DeserializeOwned>(js: &str) -> Option<T> {
        match document::eval(js).join::<T>().await {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("script evaluation failed: {:?}", e);
                None
            }
        }
    }

    // JSON string literals are valid JavaScript string literals.
    fn js_string(s: &str) -> String {
        serde_json::Value::from(s).to_string()
    }

    pub async fn load_preference(key: &str) -> Option<String> {
        let js = format!("return window.localStorage.getItem({});", js_string(key));
        eval_js::<Option<String>>(&js).await.flatten()
    }

    pub async fn store_preference(key: &str, value: &str) -> bool {
        let js = format!(
            "try {{ window.localStorage.setItem({}, {}); return true; }} catch (e) {{ return false; }}",
            js_string(key),
            js_string(value)
        );
        eval_js::<bool>(&js).await.unwrap_or(false)
    }

    pub async fn prefers_dark() -> Option<bool> {
        eval_js::<Option<bool>>(
            r#"return window.matchMedia ? window.matchMedia("(prefers-color-scheme: dark)").matches : null;"#,
        )
        .await
        .flatten()
    }

    pub async fn apply_theme(theme: ThemePreference) -> bool {
        let js = format!(
            "const root = document.documentElement; root.classList.toggle(\"dark\", {}); root.setAttribute(\"data-theme\", {}); return true;",
            theme.is_dark(),
            js_string(theme.as_str())
        );
        eval_js::<bool>(&js).await.unwrap_or(false)
    }

    pub async fn preferred_language() -> Option<String> {
        eval_js::<Option<String>>("return navigator.language || null;")
            .await
            .flatten()
    }

    #[cfg(test)]
    mod tests {
        use super::js_string;

        #[test]
        fn quotes_values_for_scripts() {
            assert_eq!(js_string("theme"), "\"theme\"");
            assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        }
    }
}
