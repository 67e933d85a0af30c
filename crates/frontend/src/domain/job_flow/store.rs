use contracts::domain::job_flow::JobFlowStep;
use leptos::prelude::*;

/// Wizard step tracker shared by every screen.
///
/// `set_active_step` is intentionally unconditional: any screen may jump to
/// any step at any time, and the last write wins. Legality of transitions is
/// not enforced anywhere.
#[derive(Clone, Copy)]
pub struct JobFlowStore {
    pub active_step: RwSignal<JobFlowStep>,
}

impl JobFlowStore {
    pub fn new() -> Self {
        Self {
            active_step: RwSignal::new(JobFlowStep::Asking),
        }
    }

    pub fn set_active_step(&self, step: JobFlowStep) {
        self.active_step.set(step);
    }

    /// Move one step forward; no-op on `Done`.
    pub fn advance(&self) {
        self.active_step.update(|step| *step = step.next());
    }

    /// Move one step back; no-op on `Asking`.
    pub fn retreat(&self) {
        self.active_step.update(|step| *step = step.prev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_last_set_wins_without_validation() {
        let owner = Owner::new();
        owner.set();

        let store = JobFlowStore::new();
        assert_eq!(store.active_step.get_untracked(), JobFlowStep::Asking);

        // Arbitrary jumps are accepted, including straight to Done.
        for step in [
            JobFlowStep::Done,
            JobFlowStep::Asking,
            JobFlowStep::Pricing,
            JobFlowStep::Pricing,
            JobFlowStep::Attachment,
        ] {
            store.set_active_step(step);
            assert_eq!(store.active_step.get_untracked(), step);
        }
    }

    #[test]
    fn test_advance_and_retreat_clamp() {
        let owner = Owner::new();
        owner.set();

        let store = JobFlowStore::new();
        store.retreat();
        assert_eq!(store.active_step.get_untracked(), JobFlowStep::Asking);

        store.advance();
        assert_eq!(store.active_step.get_untracked(), JobFlowStep::Attachment);

        store.set_active_step(JobFlowStep::Done);
        store.advance();
        assert_eq!(store.active_step.get_untracked(), JobFlowStep::Done);

        store.retreat();
        assert_eq!(store.active_step.get_untracked(), JobFlowStep::Pricing);
    }
}
