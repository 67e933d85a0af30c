//! Browser geolocation wrapped into a future.

use contracts::domain::location::GeoPoint;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Resolve the device position once. A rejected permission prompt surfaces as
/// an error message, not a retry.
pub async fn current_position() -> Result<GeoPoint, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| "geolocation unavailable".to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_ok = Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            let pair = js_sys::Array::of2(&coords.latitude().into(), &coords.longitude().into());
            let _ = resolve.call1(&JsValue::NULL, &pair);
        });
        let reject_cb = reject.clone();
        let on_err = Closure::once_into_js(move |error: web_sys::PositionError| {
            let _ = reject_cb.call1(&JsValue::NULL, &error.message().into());
        });
        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_ok.unchecked_ref(),
            Some(on_err.unchecked_ref()),
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let pair = JsFuture::from(promise).await.map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| "location permission denied".to_string())
    })?;
    let pair: js_sys::Array = pair
        .dyn_into()
        .map_err(|_| "unexpected geolocation result".to_string())?;

    let latitude = pair
        .get(0)
        .as_f64()
        .ok_or_else(|| "bad latitude".to_string())?;
    let longitude = pair
        .get(1)
        .as_f64()
        .ok_or_else(|| "bad longitude".to_string())?;
    Ok(GeoPoint::new(latitude, longitude))
}
