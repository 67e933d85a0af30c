//! Job-posting wizard step model.

use serde::{Deserialize, Serialize};

/// One stage of the job-posting flow. Exactly one step is active at a time;
/// the active step only changes through an explicit operation, never by
/// inference from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobFlowStep {
    Asking,
    Attachment,
    Location,
    Pricing,
    Done,
}

/// The fixed progression of the wizard.
pub const STEP_ORDER: [JobFlowStep; 5] = [
    JobFlowStep::Asking,
    JobFlowStep::Attachment,
    JobFlowStep::Location,
    JobFlowStep::Pricing,
    JobFlowStep::Done,
];

impl JobFlowStep {
    pub fn index(self) -> usize {
        STEP_ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next step in the fixed order; stays on `Done` at the end.
    pub fn next(self) -> Self {
        let i = self.index();
        if i + 1 < STEP_ORDER.len() {
            STEP_ORDER[i + 1]
        } else {
            self
        }
    }

    /// Previous step in the fixed order; stays on `Asking` at the start.
    pub fn prev(self) -> Self {
        let i = self.index();
        if i > 0 {
            STEP_ORDER[i - 1]
        } else {
            self
        }
    }

    /// Label shown on the flow bar's center chip.
    pub fn title(self) -> &'static str {
        match self {
            JobFlowStep::Asking => "Asking problem",
            JobFlowStep::Attachment => "Attach Photo/Files",
            JobFlowStep::Location => "Decide location",
            JobFlowStep::Pricing => "Set Budget",
            JobFlowStep::Done => "Find Workers",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "asking" => Ok(JobFlowStep::Asking),
            "attachment" => Ok(JobFlowStep::Attachment),
            "location" => Ok(JobFlowStep::Location),
            "pricing" => Ok(JobFlowStep::Pricing),
            "done" => Ok(JobFlowStep::Done),
            _ => Err(format!("Unknown job flow step: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobFlowStep::Asking => "asking",
            JobFlowStep::Attachment => "attachment",
            JobFlowStep::Location => "location",
            JobFlowStep::Pricing => "pricing",
            JobFlowStep::Done => "done",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_the_fixed_order() {
        assert_eq!(JobFlowStep::Asking.next(), JobFlowStep::Attachment);
        assert_eq!(JobFlowStep::Attachment.next(), JobFlowStep::Location);
        assert_eq!(JobFlowStep::Location.next(), JobFlowStep::Pricing);
        assert_eq!(JobFlowStep::Pricing.next(), JobFlowStep::Done);
    }

    #[test]
    fn test_clamped_at_both_ends() {
        assert_eq!(JobFlowStep::Done.next(), JobFlowStep::Done);
        assert_eq!(JobFlowStep::Asking.prev(), JobFlowStep::Asking);
    }

    #[test]
    fn test_prev_inverts_next_inside_the_order() {
        for pair in STEP_ORDER.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
            assert_eq!(pair[1].prev(), pair[0]);
        }
    }

    #[test]
    fn test_string_round_trip() {
        for step in STEP_ORDER {
            assert_eq!(JobFlowStep::from_str(step.as_str()).unwrap(), step);
        }
        assert!(JobFlowStep::from_str("launch").is_err());
    }
}
