use crate::shared::texts;
use crate::shared::theme::{colors, sizes, spacing};
use leptos::prelude::*;

/// Yes/no dialog over a dimmed overlay. Both buttons close the dialog after
/// running their handler.
#[component]
pub fn ConfirmationModal(
    /// Visibility signal owned by the caller
    #[prop(into)]
    visible: RwSignal<bool>,
    /// Question shown in the dialog
    #[prop(into)]
    message: String,
    /// Confirm button caption, defaults to "YES"
    #[prop(optional, into)]
    confirm_text: MaybeProp<String>,
    /// Cancel button caption, defaults to "NO"
    #[prop(optional, into)]
    cancel_text: MaybeProp<String>,
    /// Confirm handler
    #[prop(optional)]
    on_confirm: Option<Callback<()>>,
    /// Cancel handler
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let button_style = |background: &str, color: &str| {
        format!(
            "flex: 1; padding: 10px 0; border: none; border-radius: {}px; \
             background: {background}; color: {color}; font-size: 15px; \
             font-weight: 700; cursor: pointer;",
            sizes::BORDER_RADIUS
        )
    };

    view! {
        <Show when=move || visible.get()>
            <div style=format!(
                "position: fixed; inset: 0; display: flex; align-items: center; \
                 justify-content: center; background: {}; z-index: 1200;",
                colors::MODAL_OVERLAY
            )>
                <div style=format!(
                    "background: {}; border-radius: {}px; padding: {}px; min-width: 280px; \
                     display: flex; flex-direction: column; align-items: center;",
                    colors::BACKGROUND,
                    sizes::MODAL_BORDER_RADIUS,
                    spacing::XL
                )>
                    <div style=format!(
                        "font-size: 16px; font-weight: 700; text-align: center; \
                         margin-bottom: {}px;",
                        spacing::MD
                    )>{message.clone()}</div>
                    <div style="display: flex; gap: 10px; margin-top: 10px; width: 100%;">
                        <button
                            style=button_style(colors::PRIMARY, colors::TEXT_LIGHT)
                            on:click=move |_| {
                                if let Some(handler) = on_confirm {
                                    handler.run(());
                                }
                                visible.set(false);
                            }
                        >
                            {move || confirm_text.get().unwrap_or_else(|| texts::YES.to_string())}
                        </button>
                        <button
                            style=button_style(colors::NEUTRAL, colors::TEXT_DARK)
                            on:click=move |_| {
                                if let Some(handler) = on_cancel {
                                    handler.run(());
                                }
                                visible.set(false);
                            }
                        >
                            {move || cancel_text.get().unwrap_or_else(|| texts::NO.to_string())}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
