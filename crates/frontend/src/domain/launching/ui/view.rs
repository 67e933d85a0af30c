//! Launching screen - View Component

use crate::shared::theme::colors;
use leptos::prelude::*;

/// Full-screen interstitial shown while a job launch is in flight.
#[component]
pub fn LaunchingScreen(#[prop(into)] visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div style=format!(
                "position: fixed; inset: 0; display: flex; flex-direction: column; \
                 align-items: center; justify-content: center; gap: 4px; \
                 background: {}; color: {}; z-index: 1040;",
                colors::PRIMARY,
                colors::TEXT_LIGHT
            )>
                <span style="font-size: 32px; font-weight: 700;">"Finding Experts"</span>
                <span style="font-size: 32px; font-weight: 700;">"&"</span>
                <span style="font-size: 32px; font-weight: 700;">"Launching Job"</span>
            </div>
        </Show>
    }
}
