//! Summary screen - View Component

use super::view_model::SummaryVm;
use crate::domain::upload::store::UploadStore;
use crate::shared::icons::icon;
use crate::shared::theme::{colors, fullscreen_overlay, sizes, spacing};
use leptos::prelude::*;
use thaw::*;

/// Full-screen job summary: editable description, tag set, and a read-only
/// view of the picked images and confirmed location from the upload store.
#[component]
pub fn SummaryScreen(
    #[prop(into)] visible: RwSignal<bool>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let vm = SummaryVm::new();
    let upload = use_context::<UploadStore>().expect("UploadStore not provided in context");

    let complete = move |_| {
        on_complete.run(());
        visible.set(false);
    };

    let section_title = |caption: &'static str| {
        view! {
            <div style=format!(
                "font-size: 18px; font-weight: 600; margin-bottom: {}px;",
                spacing::MD
            )>{caption}</div>
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div style=fullscreen_overlay(1015)>
                // Header
                <div style=format!(
                    "position: relative; display: flex; align-items: center; justify-content: center; \
                     padding: {}px {}px; border-bottom: 1px solid {};",
                    spacing::MD,
                    spacing::LG,
                    colors::BORDER
                )>
                    <button
                        style="position: absolute; left: 16px; background: none; border: none; cursor: pointer;"
                        on:click=move |_| visible.set(false)
                    >
                        {icon("back")}
                    </button>
                    <span style="font-size: 18px; font-weight: 600;">"Job Summary"</span>
                </div>

                <div style=format!("flex: 1; overflow-y: auto; padding: 0 {}px;", spacing::LG)>
                    // Attached photos
                    <Show when=move || !upload.images.get().is_empty()>
                        <div style=format!("margin: {}px 0;", spacing::LG)>
                            {section_title("Attached Photos")}
                            <div style="display: flex; gap: 12px; overflow-x: auto; padding: 8px 0;">
                                <For
                                    each=move || upload.images.get().into_iter().enumerate()
                                    key=|(index, uri)| (*index, uri.clone())
                                    let:entry
                                >
                                    <div style="position: relative; flex: 0 0 auto;">
                                        <img
                                            src=entry.1.clone()
                                            style=format!(
                                                "width: 100px; height: 100px; object-fit: cover; \
                                                 border-radius: {}px; background: {};",
                                                sizes::BORDER_RADIUS + 4,
                                                colors::NEUTRAL
                                            )
                                        />
                                        <button
                                            style=format!(
                                                "position: absolute; top: -8px; right: -8px; width: 24px; height: 24px; \
                                                 border-radius: 50%; border: 2px solid {}; cursor: pointer; display: flex; \
                                                 align-items: center; justify-content: center; background: {}; color: {};",
                                                colors::BACKGROUND,
                                                colors::DANGER,
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

                    // Job location
                    <Show when=move || !upload.location.get().is_empty()>
                        <div style=format!("margin-bottom: {}px;", spacing::XL)>
                            {section_title("Job Location")}
                            <div style=format!(
                                "display: flex; align-items: center; gap: 8px; padding: {}px; \
                                 border-radius: {}px; background: {};",
                                spacing::MD,
                                sizes::BORDER_RADIUS,
                                colors::SECONDARY
                            )>
                                <span style=format!("color: {};", colors::PRIMARY)>
                                    {icon("location")}
                                </span>
                                <span style="font-size: 16px;">{move || upload.location.get()}</span>
                            </div>
                        </div>
                    </Show>

                    // Job description
                    <div style=format!("margin: {}px 0 {}px;", spacing::LG, spacing::XL)>
                        {section_title("Job Description")}
                        <Textarea
                            value=vm.description
                            placeholder="Enter job description..."
                            attr:style="width: 100%; min-height: 120px; resize: vertical;"
                        />
                    </div>

                    // Tags
                    <div style=format!("margin-bottom: {}px;", spacing::XL)>
                        {section_title("Relevant Tags")}
                        <div style=format!(
                            "display: flex; flex-wrap: wrap; gap: {}px; margin-bottom: {}px;",
                            spacing::SM,
                            spacing::MD
                        )>
                            <For
                                each=move || vm.tags.get()
                                key=|tag| tag.clone()
                                let:tag
                            >
                                <div style=format!(
                                    "display: flex; align-items: center; gap: 4px; padding: {}px {}px; \
                                     border-radius: 20px; background: {}; color: {}; font-size: 14px;",
                                    spacing::SM,
                                    spacing::MD,
                                    colors::PRIMARY,
                                    colors::TEXT_LIGHT
                                )>
                                    <span>{tag.clone()}</span>
                                    <button
                                        style=format!(
                                            "background: none; border: none; cursor: pointer; padding: 2px; color: {};",
                                            colors::TEXT_LIGHT
                                        )
                                        on:click=move |_| vm.remove_tag(&tag)
                                    >
                                        {icon("close")}
                                    </button>
                                </div>
                            </For>
                        </div>

                        <Show
                            when=move || vm.adding_tag.get()
                            fallback=move || {
                                view! {
                                    <button
                                        style=format!(
                                            "display: flex; align-items: center; gap: 4px; padding: {}px {}px; \
                                             border: 2px dashed {}; border-radius: 20px; cursor: pointer; \
                                             background: none; color: {}; font-size: 14px;",
                                            spacing::SM,
                                            spacing::MD,
                                            colors::PRIMARY,
                                            colors::PRIMARY
                                        )
                                        on:click=move |_| vm.adding_tag.set(true)
                                    >
                                        {icon("add")}
                                        "Add Tag"
                                    </button>
                                }
                            }
                        >
                            <div style=format!(
                                "display: flex; align-items: center; gap: {}px;",
                                spacing::SM
                            )>
                                <input
                                    type="text"
                                    placeholder="Enter new tag..."
                                    style=format!(
                                        "flex: 1; padding: {}px {}px; border: 1px solid {}; \
                                         border-radius: {}px; font-size: 14px; outline: none;",
                                        spacing::SM,
                                        spacing::MD,
                                        colors::INPUT_BORDER,
                                        sizes::BORDER_RADIUS
                                    )
                                    prop:value=move || vm.new_tag.get()
                                    on:input=move |ev| vm.new_tag.set(event_target_value(&ev))
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            vm.add_tag();
                                        }
                                    }
                                />
                                <button
                                    style=format!(
                                        "padding: {}px; border: none; border-radius: {}px; cursor: pointer; \
                                         background: {}; color: {};",
                                        spacing::SM,
                                        sizes::BORDER_RADIUS,
                                        colors::PRIMARY,
                                        colors::TEXT_LIGHT
                                    )
                                    on:click=move |_| vm.add_tag()
                                >
                                    {icon("checkmark")}
                                </button>
                                <button
                                    style=format!(
                                        "padding: {}px; border: none; border-radius: {}px; cursor: pointer; \
                                         background: {}; color: {};",
                                        spacing::SM,
                                        sizes::BORDER_RADIUS,
                                        colors::NEUTRAL,
                                        colors::TEXT_DARK
                                    )
                                    on:click=move |_| vm.cancel_tag_entry()
                                >
                                    {icon("close")}
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>

                // Done
                <div style=format!(
                    "padding: {}px; border-top: 1px solid {};",
                    spacing::LG,
                    colors::BORDER
                )>
                    <button
                        style=format!(
                            "width: 100%; display: flex; align-items: center; justify-content: center; \
                             gap: 8px; padding: {}px 0; border: none; border-radius: {}px; cursor: pointer; \
                             background: {}; color: {}; font-size: 16px; font-weight: 600;",
                            spacing::MD,
                            sizes::BORDER_RADIUS,
                            colors::PRIMARY,
                            colors::TEXT_LIGHT
                        )
                        on:click=complete
                    >
                        {icon("checkmark")}
                        "Done"
                    </button>
                </div>
            </div>
        </Show>
    }
}
