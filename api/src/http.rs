// Uncached HTTP GET for each platform. Returns the status code and body text so
// the caller decides what counts as success.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use crate::error::RateError;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

    fn js_err(e: JsValue) -> RateError {
        RateError::Transport(format!("{:?}", e))
    }

    /// Browser `fetch` with `cache: "no-store"`.
    pub async fn get_uncached(url: &str) -> Result<(u16, String), RateError> {
        let window = web_sys::window().ok_or_else(|| RateError::Transport("no window".into()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_cache(RequestCache::NoStore);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok((status, text.as_string().unwrap_or_default()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use crate::error::RateError;
    use reqwest::header::{CACHE_CONTROL, PRAGMA};

    /// `reqwest` keeps no response cache; the headers ask intermediaries not to
    /// serve a stored copy either.
    pub async fn get_uncached(url: &str) -> Result<(u16, String), RateError> {
        let client = reqwest::Client::new();
        let resp = client
            .get(url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok((status, body))
    }
}
