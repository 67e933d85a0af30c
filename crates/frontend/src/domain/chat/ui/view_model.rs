//! Chat screen - View Model

use super::model::{self, ReplyTrigger};
use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::upload::store::UploadStore;
use contracts::domain::chat::ChatMessage;
use contracts::domain::job_flow::JobFlowStep;
use contracts::domain::location::SelectedLocation;
use leptos::prelude::*;

/// Per-session state of the chat screen: the append-only transcript, modal
/// visibilities and the guarded delayed-reply scheduler.
#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input_text: RwSignal<String>,
    pub wipeout_visible: RwSignal<bool>,
    pub map_visible: RwSignal<bool>,
    pub summary_visible: RwSignal<bool>,
    pub pricing_visible: RwSignal<bool>,
    pub launching_visible: RwSignal<bool>,
    pub workers_visible: RwSignal<bool>,
    /// Latches after the upload follow-up fires; it never repeats.
    pub follow_up_shown: RwSignal<bool>,
    /// Set once the user asked to proceed and the map may be offered.
    pub location_selection_available: RwSignal<bool>,
    pending: RwSignal<Vec<ReplyTrigger>>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(model::seed_transcript()),
            input_text: RwSignal::new(String::new()),
            wipeout_visible: RwSignal::new(false),
            map_visible: RwSignal::new(false),
            summary_visible: RwSignal::new(false),
            pricing_visible: RwSignal::new(false),
            launching_visible: RwSignal::new(false),
            workers_visible: RwSignal::new(false),
            follow_up_shown: RwSignal::new(false),
            location_selection_available: RwSignal::new(false),
            pending: RwSignal::new(Vec::new()),
        }
    }

    /// Append a user message. The id is `len + 1`, which stays strictly
    /// increasing because the transcript is append-only.
    pub fn append_sent(&self, text: impl Into<String>) {
        let text = text.into();
        self.messages.update(|messages| {
            let id = messages.len() as u32 + 1;
            messages.push(ChatMessage::sent(id, text));
        });
    }

    /// Claim the delayed-reply slot for `trigger`. Returns false while the
    /// same trigger is already pending, and permanently once the upload
    /// follow-up has latched.
    pub fn begin(&self, trigger: ReplyTrigger) -> bool {
        if trigger == ReplyTrigger::UploadFollowUp && self.follow_up_shown.get_untracked() {
            return false;
        }
        let mut claimed = false;
        self.pending.update(|pending| {
            if !pending.contains(&trigger) {
                pending.push(trigger);
                claimed = true;
            }
        });
        claimed
    }

    /// Append the reply for a fired trigger and release its slot.
    pub fn fire(&self, trigger: ReplyTrigger) {
        self.pending
            .update(|pending| pending.retain(|t| *t != trigger));
        if trigger == ReplyTrigger::UploadFollowUp {
            self.follow_up_shown.set(true);
        }
        self.messages.update(|messages| {
            let id = messages.len() as u32 + 1;
            messages.push(model::reply_message(trigger, id));
        });
    }

    /// Send the free-text input. Returns the reply to schedule, if any.
    pub fn send_input(&self) -> Option<ReplyTrigger> {
        let text = self.input_text.get_untracked();
        if text.trim().is_empty() {
            return None;
        }
        self.append_sent(text.clone());
        self.input_text.set(String::new());
        if model::mentions_proceed_further(&text) {
            self.location_selection_available.set(true);
            return Some(ReplyTrigger::LocationPrompt);
        }
        None
    }

    /// Dispatch a tapped quick reply.
    ///
    /// "Choose Location" and "Yes Proceed" only open their screens and leave
    /// the transcript alone; anything else is echoed as a sent message.
    pub fn quick_reply(&self, reply: &str, job_flow: &JobFlowStore) -> Option<ReplyTrigger> {
        let lower = reply.to_lowercase();
        if lower == "choose location" {
            job_flow.set_active_step(JobFlowStep::Location);
            self.map_visible.set(true);
            return None;
        }
        if lower == "yes proceed" {
            self.summary_visible.set(true);
            return None;
        }

        self.append_sent(reply);

        if lower == "proceed further" {
            self.location_selection_available.set(true);
            return Some(ReplyTrigger::LocationPrompt);
        }
        None
    }

    /// The map confirmed an address: remember it, echo it, and queue the
    /// summary prompt.
    pub fn location_confirmed(
        &self,
        location: &SelectedLocation,
        upload: &UploadStore,
    ) -> ReplyTrigger {
        upload.set_location(location.address.clone());
        self.append_sent(location.address.clone());
        ReplyTrigger::SummaryPrompt
    }

    /// The summary screen finished: hand off to pricing.
    pub fn summary_completed(&self) {
        self.summary_visible.set(false);
        self.pricing_visible.set(true);
        self.append_sent(model::SUMMARY_COMPLETED_TEXT);
    }

    /// A budget was chosen: hand off to the workers screen.
    pub fn price_selected(&self, price: &str) -> ReplyTrigger {
        self.pricing_visible.set(false);
        self.workers_visible.set(true);
        self.append_sent(format!("Budget set: RS {price}"));
        ReplyTrigger::BudgetConfirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::location::GeoPoint;
    use leptos::prelude::Owner;

    fn last(vm: &ChatVm) -> ChatMessage {
        vm.messages.get_untracked().last().unwrap().clone()
    }

    #[test]
    fn test_free_text_proceed_further_grows_transcript_by_two() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        vm.input_text.set("please proceed further now".to_string());

        let trigger = vm.send_input();
        assert_eq!(trigger, Some(ReplyTrigger::LocationPrompt));
        assert_eq!(vm.messages.get_untracked().len(), 8);
        assert_eq!(last(&vm).text, "please proceed further now");
        assert!(last(&vm).is_sent());
        assert!(vm.location_selection_available.get_untracked());

        assert!(vm.begin(ReplyTrigger::LocationPrompt));
        vm.fire(ReplyTrigger::LocationPrompt);
        assert_eq!(vm.messages.get_untracked().len(), 9);
        assert_eq!(
            last(&vm).quick_replies,
            Some(vec![model::QUICK_REPLY_CHOOSE_LOCATION.to_string()])
        );
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        vm.input_text.set("   ".to_string());
        assert_eq!(vm.send_input(), None);
        assert_eq!(vm.messages.get_untracked().len(), 7);
    }

    #[test]
    fn test_plain_quick_reply_echoes_without_touching_the_step() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        let job_flow = JobFlowStore::new();

        let trigger = vm.quick_reply("Yes", &job_flow);
        assert_eq!(trigger, None);
        assert_eq!(vm.messages.get_untracked().len(), 8);
        assert_eq!(last(&vm).text, "Yes");
        assert!(last(&vm).is_sent());
        assert_eq!(job_flow.active_step.get_untracked(), JobFlowStep::Asking);
    }

    #[test]
    fn test_choose_location_opens_the_map_silently() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        let job_flow = JobFlowStore::new();

        let trigger = vm.quick_reply("Choose Location", &job_flow);
        assert_eq!(trigger, None);
        assert_eq!(vm.messages.get_untracked().len(), 7);
        assert!(vm.map_visible.get_untracked());
        assert_eq!(job_flow.active_step.get_untracked(), JobFlowStep::Location);
    }

    #[test]
    fn test_yes_proceed_opens_the_summary_silently() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        let job_flow = JobFlowStore::new();

        assert_eq!(vm.quick_reply("Yes Proceed", &job_flow), None);
        assert_eq!(vm.messages.get_untracked().len(), 7);
        assert!(vm.summary_visible.get_untracked());
    }

    #[test]
    fn test_scheduler_slots_are_exclusive_while_pending() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        assert!(vm.begin(ReplyTrigger::LocationPrompt));
        assert!(!vm.begin(ReplyTrigger::LocationPrompt));

        vm.fire(ReplyTrigger::LocationPrompt);
        // Released after firing; a later trigger may schedule again.
        assert!(vm.begin(ReplyTrigger::LocationPrompt));
    }

    #[test]
    fn test_upload_follow_up_latches_permanently() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        assert!(vm.begin(ReplyTrigger::UploadFollowUp));
        vm.fire(ReplyTrigger::UploadFollowUp);
        assert!(vm.follow_up_shown.get_untracked());
        assert!(!vm.begin(ReplyTrigger::UploadFollowUp));
    }

    #[test]
    fn test_price_selection_hands_off_to_workers() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        vm.pricing_visible.set(true);

        let trigger = vm.price_selected("750");
        assert_eq!(trigger, ReplyTrigger::BudgetConfirmation);
        assert!(!vm.pricing_visible.get_untracked());
        assert!(vm.workers_visible.get_untracked());
        assert!(last(&vm).text.contains("750"));

        assert!(vm.begin(trigger));
        vm.fire(trigger);
        assert_eq!(vm.messages.get_untracked().len(), 9);
        assert!(!last(&vm).is_sent());
    }

    #[test]
    fn test_end_to_end_transcript_lengths() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        let job_flow = JobFlowStore::new();
        let upload = UploadStore::new();
        assert_eq!(vm.messages.get_untracked().len(), 7);

        // An image came back from the picker while on the chat surface.
        upload.add_image("file:///bulb.jpg");
        assert!(vm.begin(ReplyTrigger::UploadFollowUp));
        vm.fire(ReplyTrigger::UploadFollowUp);
        assert_eq!(vm.messages.get_untracked().len(), 8);
        assert_eq!(
            last(&vm).quick_replies,
            Some(vec![model::QUICK_REPLY_PROCEED_FURTHER.to_string()])
        );

        let trigger = vm.quick_reply(model::QUICK_REPLY_PROCEED_FURTHER, &job_flow);
        assert_eq!(vm.messages.get_untracked().len(), 9);
        assert_eq!(trigger, Some(ReplyTrigger::LocationPrompt));
        assert!(vm.begin(ReplyTrigger::LocationPrompt));
        vm.fire(ReplyTrigger::LocationPrompt);
        assert_eq!(vm.messages.get_untracked().len(), 10);
        assert_eq!(
            last(&vm).quick_replies,
            Some(vec![model::QUICK_REPLY_CHOOSE_LOCATION.to_string()])
        );

        let selected =
            SelectedLocation::new(GeoPoint::new(37.78825, -122.4324), "123 Main St");
        let trigger = vm.location_confirmed(&selected, &upload);
        assert_eq!(vm.messages.get_untracked().len(), 11);
        assert_eq!(last(&vm).text, "123 Main St");
        assert_eq!(upload.location.get_untracked(), "123 Main St");

        assert!(vm.begin(trigger));
        vm.fire(trigger);
        assert_eq!(vm.messages.get_untracked().len(), 12);
        assert_eq!(
            last(&vm).quick_replies,
            Some(vec![model::QUICK_REPLY_YES_PROCEED.to_string()])
        );

        // Ids stayed strictly increasing across the whole session.
        let ids: Vec<u32> = vm.messages.get_untracked().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_summary_completed_opens_pricing_and_echoes() {
        let owner = Owner::new();
        owner.set();

        let vm = ChatVm::new();
        vm.summary_visible.set(true);

        vm.summary_completed();
        assert!(!vm.summary_visible.get_untracked());
        assert!(vm.pricing_visible.get_untracked());
        assert_eq!(last(&vm).text, model::SUMMARY_COMPLETED_TEXT);
    }
}
