use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::job_flow::ui::JobFlowBar;
use crate::domain::upload::camera::{self, CameraFacing};
use crate::domain::upload::store::UploadStore;
use crate::shared::icons::icon;
use crate::shared::theme::{colors, fullscreen_overlay, sizes};
use contracts::domain::job_flow::JobFlowStep;
use contracts::domain::upload::ScreenTag;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MediaStream;

/// Full-screen capture/pick flow. Owns the camera stream for its lifetime and
/// writes every picked image into the shared upload store.
#[component]
pub fn UploadScreen() -> impl IntoView {
    let upload = use_context::<UploadStore>().expect("UploadStore not provided in context");
    let job_flow = use_context::<JobFlowStore>().expect("JobFlowStore not provided in context");

    let facing = RwSignal::new(CameraFacing::Back);
    let has_camera = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let stream = RwSignal::new_local(None::<MediaStream>);

    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let gallery_ref = NodeRef::<leptos::html::Input>::new();

    let start_camera = move |facing_mode: CameraFacing| {
        spawn_local(async move {
            match camera::open_camera(facing_mode).await {
                Ok(media) => {
                    stream.set(Some(media));
                    has_camera.set(true);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("camera unavailable: {e}");
                    has_camera.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    // Attach the stream once both it and the <video> element exist.
    Effect::new(move |_| {
        if let (Some(video), Some(media)) = (video_ref.get(), stream.get()) {
            video.set_src_object(Some(&media));
            let _ = video.play();
        }
    });

    let stop_camera = move || {
        if let Some(media) = stream.get_untracked() {
            camera::stop_stream(&media);
        }
        stream.set(None);
        has_camera.set(false);
    };

    // Mark the surface and step once the modal starts opening; the short
    // settle delay keeps shared components from flashing their chat styling.
    Effect::new(move |_| {
        if upload.upload_visible.get() {
            spawn_local(async move {
                TimeoutFuture::new(100).await;
                upload.set_screen(ScreenTag::Upload);
                job_flow.set_active_step(JobFlowStep::Attachment);
            });
            start_camera(facing.get_untracked());
        } else {
            stop_camera();
        }
    });

    let capture = move |_| {
        let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked())
        else {
            return;
        };
        match camera::capture_frame(&video, &canvas) {
            Ok(url) => upload.add_image(url),
            Err(e) => error.set(Some(e)),
        }
    };

    let flip_camera = move |_| {
        stop_camera();
        facing.update(|f| *f = f.toggled());
        start_camera(facing.get_untracked());
    };

    let open_gallery = move || {
        if let Some(input) = gallery_ref.get_untracked() {
            input.click();
        }
    };

    let close = move |_| {
        stop_camera();
        upload.close();
    };

    view! {
        <Show when=move || upload.upload_visible.get()>
            <div style=fullscreen_overlay(1000)>
                // Header
                <div style=format!(
                    "position: relative; display: flex; align-items: center; justify-content: center; \
                     padding: 16px; border-bottom: 1px solid {};",
                    colors::BORDER
                )>
                    <button
                        style="position: absolute; left: 16px; background: none; border: none; cursor: pointer;"
                        on:click=close
                    >
                        {icon("close")}
                    </button>
                    <span style="font-size: 18px; font-weight: 600;">"Upload Files"</span>
                </div>

                <JobFlowBar on_attachment=Callback::new(move |_| open_gallery()) />

                // Camera section
                <div style="flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 0 20px; overflow-y: auto;">
                    <div style=format!(
                        "position: relative; width: min(80vw, 420px); aspect-ratio: 1; border: 3px solid {}; \
                         border-radius: {}px; overflow: hidden; margin-bottom: 20px; background: {};",
                        colors::PRIMARY,
                        sizes::BORDER_RADIUS,
                        colors::SECONDARY
                    )>
                        <video
                            node_ref=video_ref
                            autoplay=true
                            playsinline=true
                            muted=true
                            style=move || format!(
                                "width: 100%; height: 100%; object-fit: cover; display: {};",
                                if has_camera.get() { "block" } else { "none" }
                            )
                        ></video>
                        <Show when=move || has_camera.get()>
                            <div style=format!(
                                "position: absolute; top: 50%; left: 50%; width: 80px; height: 80px; \
                                 margin: -40px 0 0 -40px; border: 2px solid {}; border-radius: 8px;",
                                colors::PRIMARY
                            )></div>
                            <button
                                style="position: absolute; top: 12px; right: 12px; width: 50px; height: 50px; \
                                       border-radius: 50%; border: none; cursor: pointer; display: flex; \
                                       align-items: center; justify-content: center; \
                                       background: rgba(0, 0, 0, 0.5); color: #fff;"
                                on:click=flip_camera
                            >
                                {icon("flip-camera")}
                            </button>
                        </Show>
                        <Show when=move || !has_camera.get()>
                            <div style="position: absolute; inset: 0; display: flex; flex-direction: column; \
                                        align-items: center; justify-content: center; gap: 8px;">
                                <span style=format!("color: {};", colors::PRIMARY)>{icon("camera")}</span>
                                <span style="font-size: 14px;">"Camera permission required"</span>
                                <button
                                    style=format!(
                                        "padding: 8px 16px; border: none; border-radius: {}px; cursor: pointer; \
                                         background: {}; color: {}; font-size: 14px; font-weight: 600;",
                                        sizes::BORDER_RADIUS,
                                        colors::PRIMARY,
                                        colors::TEXT_LIGHT
                                    )
                                    on:click=move |_| start_camera(facing.get_untracked())
                                >
                                    "Grant Permission"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <button
                        style=move || format!(
                            "width: 80px; height: 80px; border-radius: 50%; border: none; cursor: pointer; \
                             display: flex; align-items: center; justify-content: center; \
                             background: {}; margin-bottom: 20px; opacity: {};",
                            colors::PRIMARY,
                            if has_camera.get() { "1" } else { "0.5" }
                        )
                        disabled=move || !has_camera.get()
                        on:click=capture
                    >
                        <div style=format!(
                            "width: 60px; height: 60px; border-radius: 50%; background: {};",
                            colors::TEXT_LIGHT
                        )></div>
                    </button>

                    {move || {
                        let error_text = error.get()?;
                        Some(view! {
                            <div style=format!(
                                "margin-bottom: 12px; padding: 8px 12px; border-radius: {}px; \
                                 background: {}; font-size: 13px;",
                                sizes::BORDER_RADIUS,
                                colors::SECONDARY
                            )>{error_text}</div>
                        })
                    }}

                    <Show when=move || !upload.images.get().is_empty()>
                        <div style="align-self: stretch; padding: 0 4px 20px;">
                            <div style="font-size: 16px; font-weight: 600; margin-bottom: 8px;">
                                {move || format!("Selected Images ({})", upload.images.get().len())}
                            </div>
                            <div style="display: flex; gap: 8px; overflow-x: auto;">
                                <For
                                    each=move || upload.images.get().into_iter().enumerate()
                                    key=|(index, uri)| (*index, uri.clone())
                                    let:entry
                                >
                                    <div style="position: relative; flex: 0 0 auto;">
                                        <img
                                            src=entry.1.clone()
                                            style=format!(
                                                "width: 80px; height: 80px; object-fit: cover; border-radius: {}px;",
                                                sizes::BORDER_RADIUS
                                            )
                                        />
                                        <button
                                            style=format!(
                                                "position: absolute; top: -8px; right: -8px; width: 24px; height: 24px; \
                                                 border-radius: 50%; border: none; cursor: pointer; display: flex; \
                                                 align-items: center; justify-content: center; background: {}; color: {};",
                                                colors::PRIMARY,
                                                colors::TEXT_LIGHT
                                            )
                                            on:click=move |_| upload.remove_image(&entry.1)
                                        >
                                            {icon("close")}
                                        </button>
                                    </div>
                                </For>
                            </div>
                        </div>
                    </Show>
                </div>

                // Action row
                <div style="display: flex; justify-content: space-around; padding: 16px 20px;">
                    <button
                        style=format!(
                            "display: flex; align-items: center; gap: 8px; min-width: 120px; justify-content: center; \
                             padding: 12px 16px; border: none; border-radius: {}px; cursor: pointer; \
                             background: {}; color: {}; font-size: 16px; font-weight: 600;",
                            sizes::BORDER_RADIUS,
                            colors::SECONDARY,
                            colors::PRIMARY
                        )
                        on:click=move |_| open_gallery()
                    >
                        {icon("gallery")}
                        "Gallery"
                    </button>
                    <button
                        style=format!(
                            "display: flex; align-items: center; gap: 8px; min-width: 140px; justify-content: center; \
                             padding: 16px 20px; border: none; border-radius: {}px; cursor: pointer; \
                             background: {}; color: {}; font-size: 18px; font-weight: 700;",
                            sizes::BORDER_RADIUS,
                            colors::PRIMARY,
                            colors::TEXT_LIGHT
                        )
                        on:click=close
                    >
                        {icon("done")}
                        "Done"
                    </button>
                </div>

                <input
                    node_ref=gallery_ref
                    type="file"
                    accept="image/*"
                    multiple=true
                    style="display: none;"
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement = event_target(&ev);
                        if let Some(files) = input.files() {
                            for url in camera::object_urls(&files) {
                                upload.add_image(url);
                            }
                        }
                        input.set_value("");
                    }
                />
                <canvas node_ref=canvas_ref style="display: none;"></canvas>
            </div>
        </Show>
    }
}
