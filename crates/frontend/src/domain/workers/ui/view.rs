//! Workers screen - View Component

use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::job_flow::ui::JobFlowBar;
use crate::shared::components::Header;
use crate::shared::theme::{colors, fullscreen_overlay};
use contracts::domain::job_flow::JobFlowStep;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long the searching visual runs before flipping to success.
const SEARCH_DURATION_MS: u32 = 6_000;

/// Purely cosmetic hand-off screen: a fixed one-shot timer switches the
/// "finding experts" visual to the success state.
#[component]
pub fn WorkersScreen(#[prop(into)] visible: RwSignal<bool>) -> impl IntoView {
    let job_flow = use_context::<JobFlowStore>().expect("JobFlowStore not provided in context");

    let show_success = RwSignal::new(false);
    // Re-opening restarts the timer; a stale timer from an earlier open must
    // not flip the new run.
    let run_id = RwSignal::new(0u32);

    Effect::new(move |_| {
        if !visible.get() {
            return;
        }
        show_success.set(false);
        job_flow.set_active_step(JobFlowStep::Done);

        let current = run_id.get_untracked() + 1;
        run_id.set(current);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DURATION_MS).await;
            if visible.get_untracked() && run_id.get_untracked() == current {
                show_success.set(true);
            }
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div style=fullscreen_overlay(1030)>
                <Header
                    left_icon="chevron-back".to_string()
                    on_left=Callback::new(move |_| visible.set(false))
                />
                <JobFlowBar />

                <div style="flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 32px;">
                    <Show
                        when=move || show_success.get()
                        fallback=move || {
                            view! {
                                <div style=format!(
                                    "width: 180px; height: 180px; border-radius: 50%; \
                                     border: 6px solid {}; border-top-color: {}; \
                                     animation: spin 1.2s linear infinite;",
                                    colors::SECONDARY,
                                    colors::PRIMARY
                                )></div>
                                <style>
                                    "@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }"
                                </style>
                                <div style="display: flex; flex-direction: column; align-items: center; gap: 4px;">
                                    <span style="font-size: 32px; font-weight: 700;">"Finding Experts"</span>
                                    <span style="font-size: 32px; font-weight: 700;">"&"</span>
                                    <span style="font-size: 32px; font-weight: 700;">"Launching Job"</span>
                                </div>
                            }
                        }
                    >
                        <div style=format!(
                            "width: 180px; height: 180px; border-radius: 50%; display: flex; \
                             align-items: center; justify-content: center; background: {};",
                            colors::SECONDARY
                        )>
                            <svg width="96" height="96" viewBox="0 0 24 24" fill="none" stroke=colors::PRIMARY stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                                <path d="m9 11 3 3L22 4"/>
                            </svg>
                        </div>
                        <span style="font-size: 32px; font-weight: 700; text-align: center;">
                            "You can wait for expert's bids now."
                        </span>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
