use crate::shared::icons::icon;
use crate::shared::theme::{colors, sizes, spacing};
use crate::shared::texts;
use leptos::prelude::*;

/// Centered screen title with optional icon actions on either side.
#[component]
pub fn Header(
    /// Title text, defaults to "Post Job"
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Icon name for the left action
    #[prop(optional, into)]
    left_icon: MaybeProp<String>,
    /// Left action handler
    #[prop(optional)]
    on_left: Option<Callback<()>>,
    /// Icon name for the right action
    #[prop(optional, into)]
    right_icon: MaybeProp<String>,
    /// Right action handler
    #[prop(optional)]
    on_right: Option<Callback<()>>,
) -> impl IntoView {
    let heading = move || {
        title
            .get()
            .unwrap_or_else(|| texts::HEADER_TITLE.to_string())
    };

    let action_style = |side: &str| {
        format!(
            "position: absolute; {side}: {}px; background: none; border: none; \
             cursor: pointer; padding: {}px; color: {}; display: flex; align-items: center;",
            spacing::LG,
            spacing::XS,
            colors::TEXT_DARK
        )
    };

    view! {
        <div style=format!(
            "position: relative; height: {}px; display: flex; align-items: center; \
             justify-content: center; background: {}; border-bottom: 1px solid {};",
            sizes::HEADER_HEIGHT,
            colors::BACKGROUND,
            colors::BORDER
        )>
            <span style="font-size: 18px; font-weight: 600;">{heading}</span>
            {move || {
                left_icon.get().map(|name| {
                    view! {
                        <button
                            style=action_style("left")
                            on:click=move |_| {
                                if let Some(handler) = on_left {
                                    handler.run(());
                                }
                            }
                        >
                            {icon(&name)}
                        </button>
                    }
                })
            }}
            {move || {
                right_icon.get().map(|name| {
                    view! {
                        <button
                            style=action_style("right")
                            on:click=move |_| {
                                if let Some(handler) = on_right {
                                    handler.run(());
                                }
                            }
                        >
                            {icon(&name)}
                        </button>
                    }
                })
            }}
        </div>
    }
}
