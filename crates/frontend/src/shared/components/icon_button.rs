use crate::shared::icons::icon;
use crate::shared::theme::{colors, sizes};
use leptos::prelude::*;

/// Circular icon chip; becomes a labelled pill when `label` is set.
#[component]
pub fn IconButton(
    /// Icon name from `shared::icons`
    #[prop(into)]
    name: String,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Chip background color
    #[prop(optional, into)]
    background: MaybeProp<String>,
    /// Icon and label color
    #[prop(optional, into)]
    color: MaybeProp<String>,
    /// Label rendered beside the icon
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Render the label bold
    #[prop(optional, into)]
    bold: MaybeProp<bool>,
    /// Extra style appended to the chip
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let background = move || {
        background
            .get()
            .unwrap_or_else(|| colors::NEUTRAL.to_string())
    };
    let color = move || color.get().unwrap_or_else(|| colors::TEXT_DARK.to_string());

    let shape = move || {
        if label.get().is_some_and(|l| !l.is_empty()) {
            format!(
                "border-radius: {}px; padding: 6px 16px; min-width: 100px;",
                sizes::BORDER_RADIUS + 4
            )
        } else {
            format!(
                "width: {size}px; height: {size}px; border-radius: 50%;",
                size = sizes::ICON_LARGE
            )
        }
    };

    let chip_style = move || {
        format!(
            "display: flex; align-items: center; justify-content: center; gap: 4px; \
             border: none; cursor: pointer; color: {}; background: {}; {} {}",
            color(),
            background(),
            shape(),
            style.get().unwrap_or_default()
        )
    };

    let label_weight = move || if bold.get().unwrap_or(false) { 700 } else { 600 };

    view! {
        <button
            style=chip_style
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {icon(&name)}
            {move || {
                label.get().filter(|l| !l.is_empty()).map(|l| {
                    view! {
                        <span style=format!(
                            "font-size: 12px; font-weight: {}; white-space: nowrap;",
                            label_weight()
                        )>{l}</span>
                    }
                })
            }}
        </button>
    }
}
