//! Chat screen - transcript seed and assistant reply rules.

use contracts::domain::chat::ChatMessage;

pub const QUICK_REPLY_CHOOSE_LOCATION: &str = "Choose Location";
pub const QUICK_REPLY_YES_PROCEED: &str = "Yes Proceed";
pub const QUICK_REPLY_PROCEED_FURTHER: &str = "Proceed Further";

pub const SUMMARY_COMPLETED_TEXT: &str = "Job summary completed! Ready to set budget.";

/// Delayed assistant replies. At most one timer per trigger is in flight at a
/// time; the upload follow-up additionally latches after firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTrigger {
    UploadFollowUp,
    LocationPrompt,
    SummaryPrompt,
    BudgetConfirmation,
}

/// Wall-clock delay before the reply for `trigger` is appended.
pub fn reply_delay_ms(trigger: ReplyTrigger) -> u32 {
    match trigger {
        ReplyTrigger::UploadFollowUp => 500,
        ReplyTrigger::LocationPrompt
        | ReplyTrigger::SummaryPrompt
        | ReplyTrigger::BudgetConfirmation => 1_000,
    }
}

/// The assistant message a fired trigger appends, built with the next
/// transcript id.
pub fn reply_message(trigger: ReplyTrigger, id: u32) -> ChatMessage {
    match trigger {
        ReplyTrigger::UploadFollowUp => ChatMessage::received(
            id,
            "Thanks for uploading the images, do you want to ask or include anything else or should I proceed further?",
        )
        .with_quick_replies(&[QUICK_REPLY_PROCEED_FURTHER]),
        ReplyTrigger::LocationPrompt => ChatMessage::received(
            id,
            "Please select the location where you want to get this service on",
        )
        .with_quick_replies(&[QUICK_REPLY_CHOOSE_LOCATION]),
        ReplyTrigger::SummaryPrompt => ChatMessage::received(
            id,
            "Do you have anything else to discuss or should I generate the job description so that you can set your price there?",
        )
        .with_quick_replies(&[QUICK_REPLY_YES_PROCEED]),
        ReplyTrigger::BudgetConfirmation => ChatMessage::received(
            id,
            "Great! Your budget has been set. Finding workers for your job!",
        ),
    }
}

/// Free text asking to move on unlocks location selection.
pub fn mentions_proceed_further(text: &str) -> bool {
    text.to_lowercase().contains("proceed further")
}

/// The canned conversation the screen opens with.
pub fn seed_transcript() -> Vec<ChatMessage> {
    vec![
        ChatMessage::received(1, "Hi Fahad, please let me know how may I help you?"),
        ChatMessage::sent(2, "I am looking for an electrician for some work!"),
        ChatMessage::received(
            3,
            "Thank you for letting me know. Can you please describe the work which particular work you want to get from electrician so that I can find your best match around you.",
        ),
        ChatMessage::sent(4, "I want to get the few bulb installation in my office"),
        ChatMessage::received(
            5,
            "I see, can you let me know do you have accessories available with you like bulbs, holders etc and wires?",
        )
        .with_quick_replies(&["Yes", "No"]),
        ChatMessage::sent(6, "Yes"),
        ChatMessage::received(
            7,
            "Thanks, can you please upload the pictures of the bulb and your office where you want to get it install?",
        )
        .with_image_picker(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_strictly_increase() {
        let seed = seed_transcript();
        assert_eq!(seed.len(), 7);
        for (index, message) in seed.iter().enumerate() {
            assert_eq!(message.id, index as u32 + 1);
        }
    }

    #[test]
    fn test_seed_offers_upload_on_last_message() {
        let seed = seed_transcript();
        assert!(seed.last().unwrap().image_picker);
        assert_eq!(
            seed[4].quick_replies,
            Some(vec!["Yes".to_string(), "No".to_string()])
        );
    }

    #[test]
    fn test_reply_delays() {
        assert_eq!(reply_delay_ms(ReplyTrigger::UploadFollowUp), 500);
        assert_eq!(reply_delay_ms(ReplyTrigger::LocationPrompt), 1_000);
        assert_eq!(reply_delay_ms(ReplyTrigger::SummaryPrompt), 1_000);
        assert_eq!(reply_delay_ms(ReplyTrigger::BudgetConfirmation), 1_000);
    }

    #[test]
    fn test_proceed_further_detection_is_case_insensitive_substring() {
        assert!(mentions_proceed_further("please Proceed Further now"));
        assert!(mentions_proceed_further("PROCEED FURTHER"));
        assert!(!mentions_proceed_further("proceed"));
    }

    #[test]
    fn test_budget_confirmation_has_no_quick_replies() {
        let message = reply_message(ReplyTrigger::BudgetConfirmation, 12);
        assert!(message.quick_replies.is_none());
        assert_eq!(message.id, 12);
    }
}
