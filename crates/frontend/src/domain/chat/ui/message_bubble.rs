use crate::domain::upload::store::UploadStore;
use crate::shared::icons::icon;
use crate::shared::texts;
use crate::shared::theme::{colors, sizes};
use contracts::domain::chat::ChatMessage;
use leptos::prelude::*;

/// One transcript bubble: the text, optional quick replies, and on the
/// upload-affordance message a trigger button plus the picked-image strip.
#[component]
pub fn MessageBubble(
    msg: ChatMessage,
    /// Tapped quick-reply strings are forwarded verbatim
    #[prop(optional)]
    on_quick_reply: Option<Callback<String>>,
) -> impl IntoView {
    let upload = use_context::<UploadStore>().expect("UploadStore not provided in context");

    let sent = msg.is_sent();
    let bubble_style = format!(
        "align-self: {}; background: {}; color: {}; border-radius: 12px; \
         padding: 12px; max-width: 80%;",
        if sent { "flex-end" } else { "flex-start" },
        if sent { colors::PRIMARY } else { colors::SECONDARY },
        if sent { colors::TEXT_LIGHT } else { colors::TEXT_DARK },
    );

    let show_picker = msg.image_picker;

    view! {
        <div style="display: flex; flex-direction: column; margin-bottom: 15px;">
            <div style=bubble_style>
                <div style="font-size: 15px; line-height: 20px; white-space: pre-wrap;">
                    {msg.text.clone()}
                </div>
                {msg.quick_replies.clone().map(|replies| {
                    view! {
                        <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px;">
                            {replies
                                .into_iter()
                                .map(|reply| {
                                    let caption = reply.clone();
                                    view! {
                                        <button
                                            style=format!(
                                                "background: none; border: none; border-bottom: 1px solid {}; \
                                                 padding: 6px 12px; font-size: 14px; color: {}; cursor: pointer;",
                                                colors::TEXT_DARK,
                                                colors::TEXT_DARK
                                            )
                                            on:click=move |_| {
                                                if let Some(handler) = on_quick_reply {
                                                    handler.run(reply.clone());
                                                }
                                            }
                                        >
                                            {caption}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </div>

            <Show when=move || show_picker>
                <button
                    style=format!(
                        "align-self: flex-end; display: flex; align-items: center; gap: 8px; \
                         margin-top: 8px; padding: 12px; border: none; border-radius: 12px; \
                         background: {}; color: {}; font-size: 16px; cursor: pointer;",
                        colors::PRIMARY,
                        colors::TEXT_LIGHT
                    )
                    on:click=move |_| upload.open()
                >
                    {icon("upload")}
                    {texts::UPLOAD_TEXT}
                </button>
            </Show>

            <Show when=move || show_picker && !upload.images.get().is_empty()>
                <div style="align-self: flex-end; display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; max-width: 80%;">
                    <For
                        each=move || upload.images.get().into_iter().enumerate()
                        key=|(index, uri)| (*index, uri.clone())
                        let:entry
                    >
                        <img
                            src=entry.1
                            style=format!(
                                "width: 80px; height: 80px; object-fit: cover; border-radius: {}px;",
                                sizes::BORDER_RADIUS + 2
                            )
                        />
                    </For>
                </div>
            </Show>
        </div>
    }
}
