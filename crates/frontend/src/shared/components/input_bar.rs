use crate::shared::icons::icon;
use crate::shared::texts;
use crate::shared::theme::{colors, sizes};
use leptos::prelude::*;

/// Text entry row pinned under the transcript. Enter or the trailing button
/// submits.
#[component]
pub fn InputBar(
    /// Backing signal for the entered text
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Submit handler
    #[prop(optional)]
    on_send: Option<Callback<()>>,
) -> impl IntoView {
    let send = move || {
        if let Some(handler) = on_send {
            handler.run(());
        }
    };

    view! {
        <div style=format!(
            "display: flex; align-items: center; gap: 10px; padding: 10px; \
             border-top: 1px solid {}; background: {};",
            colors::BORDER,
            colors::BACKGROUND
        )>
            <input
                type="text"
                style=format!(
                    "flex: 1; height: {}px; border: 1px solid {}; border-radius: {}px; \
                     padding: 0 12px; font-size: 15px; background: {}; outline: none;",
                    sizes::INPUT_HEIGHT,
                    colors::INPUT_BORDER,
                    sizes::BORDER_RADIUS,
                    colors::BACKGROUND
                )
                placeholder=move || {
                    placeholder
                        .get()
                        .unwrap_or_else(|| texts::TYPE_PLACEHOLDER.to_string())
                }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        send();
                    }
                }
            />
            <button
                style=format!(
                    "width: 40px; height: 40px; display: flex; align-items: center; \
                     justify-content: center; border: 1px solid {}; border-radius: {}px; \
                     background: {}; color: {}; cursor: pointer;",
                    colors::INPUT_BORDER,
                    sizes::BORDER_RADIUS,
                    colors::BACKGROUND,
                    colors::TEXT_DARK
                )
                on:click=move |_| send()
            >
                {icon("more-vert")}
            </button>
        </div>
    }
}
