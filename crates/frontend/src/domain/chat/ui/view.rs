//! Chat screen - View Component

use super::message_bubble::MessageBubble;
use super::model::{self, ReplyTrigger};
use super::view_model::ChatVm;
use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::job_flow::ui::JobFlowBar;
use crate::domain::launching::ui::LaunchingScreen;
use crate::domain::map::ui::MapScreen;
use crate::domain::pricing::ui::PricingScreen;
use crate::domain::summary::ui::SummaryScreen;
use crate::domain::upload::store::UploadStore;
use crate::domain::upload::ui::UploadScreen;
use crate::domain::workers::ui::WorkersScreen;
use crate::shared::components::{ConfirmationModal, Header, InputBar};
use crate::shared::texts;
use crate::shared::theme::colors;
use contracts::domain::job_flow::JobFlowStep;
use contracts::domain::location::SelectedLocation;
use contracts::domain::upload::ScreenTag;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Schedule the delayed assistant reply for `trigger`, unless the same
/// trigger is already pending. The timer is fire-once and set-and-forget; it
/// dies with the page.
fn schedule_reply(vm: ChatVm, trigger: ReplyTrigger) {
    if !vm.begin(trigger) {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(model::reply_delay_ms(trigger)).await;
        vm.fire(trigger);
    });
}

/// Top-level wizard screen: transcript, flow bar, input row and every modal
/// screen stacked above them.
#[component]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let job_flow = use_context::<JobFlowStore>().expect("JobFlowStore not provided in context");
    let upload = use_context::<UploadStore>().expect("UploadStore not provided in context");

    job_flow.set_active_step(JobFlowStep::Asking);

    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        let _ = vm.messages.get();
        if let Some(container) = transcript_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Offer to proceed once images arrive back on the chat surface. The
    // scheduler guard plus the latch make this a once-per-session prompt.
    Effect::new(move |_| {
        if upload.screen.get() == ScreenTag::Chat
            && !upload.images.get().is_empty()
            && !vm.follow_up_shown.get()
        {
            schedule_reply(vm, ReplyTrigger::UploadFollowUp);
        }
    });

    let handle_send = move || {
        if let Some(trigger) = vm.send_input() {
            schedule_reply(vm, trigger);
        }
    };

    let handle_quick_reply = Callback::new(move |reply: String| {
        if let Some(trigger) = vm.quick_reply(&reply, &job_flow) {
            schedule_reply(vm, trigger);
        }
    });

    let handle_location_select = Callback::new(move |location: SelectedLocation| {
        let trigger = vm.location_confirmed(&location, &upload);
        schedule_reply(vm, trigger);
    });

    let handle_price_select = Callback::new(move |price: String| {
        let trigger = vm.price_selected(&price);
        schedule_reply(vm, trigger);
    });

    let handle_summary_complete = Callback::new(move |_| vm.summary_completed());

    let handle_wipeout_confirm = Callback::new(move |_| {
        log::info!("starting new order");
    });

    view! {
        <div style=format!(
            "display: flex; flex-direction: column; height: 100vh; background: {};",
            colors::BACKGROUND
        )>
            <Header
                left_icon="back".to_string()
                right_icon="wipeout".to_string()
                on_right=Callback::new(move |_| vm.wipeout_visible.set(true))
            />

            <JobFlowBar
                on_attachment=Callback::new(move |_| upload.open())
                on_pricing=Callback::new(move |_| vm.pricing_visible.set(true))
            />

            <div
                node_ref=transcript_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; padding: 15px;"
            >
                <For each=move || vm.messages.get() key=|m| m.id let:msg>
                    <MessageBubble msg=msg on_quick_reply=handle_quick_reply />
                </For>
            </div>

            <InputBar value=vm.input_text on_send=Callback::new(move |_| handle_send()) />

            <ConfirmationModal
                visible=vm.wipeout_visible
                message=texts::WIPEOUT_CONFIRMATION
                on_confirm=handle_wipeout_confirm
            />

            <UploadScreen />
            <MapScreen visible=vm.map_visible on_location_select=handle_location_select />
            <SummaryScreen visible=vm.summary_visible on_complete=handle_summary_complete />
            <PricingScreen visible=vm.pricing_visible on_price_select=handle_price_select />
            <LaunchingScreen visible=vm.launching_visible />
            <WorkersScreen visible=vm.workers_visible />
        </div>
    }
}
