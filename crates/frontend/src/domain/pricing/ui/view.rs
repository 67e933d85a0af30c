//! Pricing screen - View Component

use super::view_model::{PricingVm, QUICK_PRICES};
use crate::domain::job_flow::store::JobFlowStore;
use crate::shared::icons::icon;
use crate::shared::theme::{colors, sizes, spacing};
use contracts::domain::job_flow::JobFlowStep;
use leptos::prelude::*;

/// Bottom-sheet numeric keypad with quick-price shortcuts. Confirming or
/// tapping a shortcut hands the price string to `on_price_select` and closes
/// the sheet.
#[component]
pub fn PricingScreen(
    #[prop(into)] visible: RwSignal<bool>,
    on_price_select: Callback<String>,
) -> impl IntoView {
    let vm = PricingVm::new();
    let job_flow = use_context::<JobFlowStore>().expect("JobFlowStore not provided in context");

    // Showing the sheet is what moves the wizard onto the pricing step.
    Effect::new(move |_| {
        if visible.get() {
            job_flow.set_active_step(JobFlowStep::Pricing);
        }
    });

    let select = move |price: String| {
        vm.clear();
        on_price_select.run(price);
        visible.set(false);
    };

    let confirm = move |_| {
        if let Some(price) = vm.take() {
            select(price);
        }
    };

    let keypad_rows: [[&'static str; 3]; 4] = [
        ["1", "2", "3"],
        ["4", "5", "6"],
        ["7", "8", "9"],
        ["clear", "0", "delete"],
    ];

    let key_press = move |key: &'static str| match key {
        "clear" => vm.clear(),
        "delete" => vm.backspace(),
        digit => {
            if let Some(c) = digit.chars().next() {
                vm.push_digit(c);
            }
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div style="position: fixed; inset: 0; display: flex; flex-direction: column; \
                        justify-content: flex-end; background: rgba(0,0,0,0.5); z-index: 1020;">
                <div style=format!(
                    "display: flex; flex-direction: column; height: 60%; background: {}; \
                     border-radius: {radius}px {radius}px 0 0; padding-top: {}px;",
                    colors::PRIMARY,
                    spacing::LG,
                    radius = sizes::MODAL_BORDER_RADIUS
                )>
                    // Price display
                    <div style="display: flex; align-items: center; justify-content: center; gap: 12px; padding: 12px 0;">
                        <span style=format!(
                            "font-size: 24px; font-weight: 600; color: {};",
                            colors::TEXT_LIGHT
                        )>"RS"</span>
                        <span style=format!(
                            "font-size: 36px; font-weight: 700; min-width: 120px; text-align: center; color: {};",
                            colors::TEXT_LIGHT
                        )>
                            {move || {
                                let entered = vm.entered.get();
                                if entered.is_empty() { "0".to_string() } else { entered }
                            }}
                        </span>
                    </div>

                    // Quick prices
                    <div style="display: flex; justify-content: center; gap: 20px; padding: 4px 16px;">
                        {QUICK_PRICES
                            .into_iter()
                            .map(|price| {
                                view! {
                                    <button
                                        style=format!(
                                            "padding: 4px 12px; border: none; border-radius: 15px; cursor: pointer; \
                                             background: {}; color: {}; font-size: 12px; font-weight: 600;",
                                            colors::TEXT_LIGHT,
                                            colors::TEXT_DARK
                                        )
                                        on:click=move |_| select(price.to_string())
                                    >
                                        {price}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Keypad
                    <div style="flex: 1; display: flex; flex-direction: column; align-items: center; \
                                justify-content: flex-start; gap: 8px; padding-top: 4px;">
                        {keypad_rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div style="display: flex; gap: 35px;">
                                        {row
                                            .into_iter()
                                            .map(|key| {
                                                view! {
                                                    <button
                                                        style=format!(
                                                            "width: 70px; height: 70px; border: none; cursor: pointer; \
                                                             background: none; color: {}; font-weight: 700; font-size: {}px; \
                                                             display: flex; align-items: center; justify-content: center;",
                                                            colors::TEXT_LIGHT,
                                                            if key == "clear" { 14 } else { 20 }
                                                        )
                                                        on:click=move |_| key_press(key)
                                                    >
                                                        {match key {
                                                            "clear" => view! { <span>"Clear"</span> }.into_any(),
                                                            "delete" => icon("backspace"),
                                                            digit => view! { <span>{digit}</span> }.into_any(),
                                                        }}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Confirm
                    <div style="padding: 12px 16px;">
                        <button
                            style=move || format!(
                                "width: 100%; padding: 12px 0; border: none; border-radius: {}px; \
                                 cursor: pointer; font-size: 16px; font-weight: 600; background: {}; color: {};",
                                sizes::BORDER_RADIUS,
                                if vm.entered.get().is_empty() { colors::NEUTRAL } else { colors::TEXT_LIGHT },
                                if vm.entered.get().is_empty() { colors::TEXT_DARK } else { colors::PRIMARY }
                            )
                            disabled=move || vm.entered.get().is_empty()
                            on:click=confirm
                        >
                            "Confirm Budget"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
