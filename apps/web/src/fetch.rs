use radiopharma_core::DataError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, RequestInit, RequestMode, Response};

pub const DATA_URL: &str = "https://r-eco-52zl8.ondigitalocean.app/visualising";
pub const GEO_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

fn transport(value: JsValue) -> DataError {
    DataError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// An in-flight request. Dropping it aborts the fetch.
#[derive(Debug)]
pub struct InFlight {
    controller: AbortController,
}

impl InFlight {
    pub fn new() -> Result<(Self, AbortSignal), DataError> {
        let controller = AbortController::new().map_err(transport)?;
        let signal = controller.signal();
        Ok((Self { controller }, signal))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.controller.abort();
    }
}

/// GETs `url` and returns the body as text.
pub async fn fetch_text(url: &str, signal: &AbortSignal) -> Result<String, DataError> {
    let window = web_sys::window().ok_or_else(|| DataError::Transport("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(signal));
    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    if !response.ok() {
        return Err(DataError::Status {
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    body.as_string()
        .ok_or_else(|| DataError::Transport("response body is not text".to_string()))
}
