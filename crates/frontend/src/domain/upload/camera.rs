//! Device camera and gallery glue over web-sys.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints,
};

/// Which device camera the preview should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Back,
}

impl CameraFacing {
    /// `facingMode` constraint value.
    pub fn as_str(self) -> &'static str {
        match self {
            CameraFacing::Front => "user",
            CameraFacing::Back => "environment",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }
}

/// Ask for a camera stream. A rejected promise is how the browser reports a
/// denied permission, so that case maps to a user-facing message.
pub async fn open_camera(facing: CameraFacing) -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| format!("{e:?}"))?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"facingMode".into(), &facing.as_str().into())
        .map_err(|e| format!("{e:?}"))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video.into());
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("{e:?}"))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|_| "camera permission denied".to_string())?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| "unexpected getUserMedia result".to_string())
}

/// Stop every track so the device light goes off when the screen closes.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Grab the current preview frame as a JPEG data URL.
pub fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<String, String> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err("camera is not ready yet".to_string());
    }
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "no 2d canvas context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "unexpected canvas context".to_string())?;

    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|e| format!("{e:?}"))?;

    canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(|e| format!("{e:?}"))
}

/// Object URLs for every file picked from the gallery input, in pick order.
pub fn object_urls(files: &web_sys::FileList) -> Vec<String> {
    let mut urls = Vec::new();
    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => urls.push(url),
                Err(e) => log::warn!("failed to create object URL: {e:?}"),
            }
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_mode_values() {
        assert_eq!(CameraFacing::Front.as_str(), "user");
        assert_eq!(CameraFacing::Back.as_str(), "environment");
    }

    #[test]
    fn test_toggled_flips_between_cameras() {
        assert_eq!(CameraFacing::Back.toggled(), CameraFacing::Front);
        assert_eq!(CameraFacing::Front.toggled().toggled(), CameraFacing::Front);
    }
}
