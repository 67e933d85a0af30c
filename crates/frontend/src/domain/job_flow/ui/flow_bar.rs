use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::upload::store::UploadStore;
use crate::shared::components::IconButton;
use crate::shared::theme::colors;
use contracts::domain::job_flow::JobFlowStep;
use contracts::domain::upload::ScreenTag;
use leptos::prelude::*;

/// One icon chip of the flow bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowButton {
    pub step: JobFlowStep,
    pub icon: &'static str,
    pub active: bool,
}

impl FlowButton {
    fn new(step: JobFlowStep, active: bool) -> Self {
        Self {
            step,
            icon: step_icon(step),
            active,
        }
    }
}

/// Side groups and center chip for one state of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub left: Vec<FlowButton>,
    pub center: FlowButton,
    pub right: Vec<FlowButton>,
}

pub fn step_icon(step: JobFlowStep) -> &'static str {
    match step {
        JobFlowStep::Asking => "thinking",
        JobFlowStep::Attachment => "attachment",
        JobFlowStep::Location => "location",
        JobFlowStep::Pricing => "pricing",
        JobFlowStep::Done => "done",
    }
}

/// Which chips surround the center chip for the given active step. Ports the
/// product's fixed per-step tables.
pub fn bar_layout(active: JobFlowStep) -> BarLayout {
    use JobFlowStep::*;

    let left = match active {
        Asking => vec![FlowButton::new(Attachment, false), FlowButton::new(Pricing, false)],
        Attachment => vec![FlowButton::new(Asking, true), FlowButton::new(Pricing, false)],
        Location | Pricing | Done => {
            vec![FlowButton::new(Asking, true), FlowButton::new(Attachment, true)]
        }
    };

    let right = match active {
        Asking | Attachment => {
            vec![FlowButton::new(Location, false), FlowButton::new(Done, false)]
        }
        Location => vec![FlowButton::new(Pricing, false), FlowButton::new(Done, false)],
        Pricing => vec![FlowButton::new(Location, true), FlowButton::new(Done, false)],
        Done => vec![FlowButton::new(Location, true), FlowButton::new(Pricing, true)],
    };

    BarLayout {
        left,
        center: FlowButton::new(active, true),
        right,
    }
}

/// Step-aware toolbar under the header. Pressing a chip activates that step
/// and runs the matching screen callback.
#[component]
pub fn JobFlowBar(
    /// Runs after the attachment chip activates the attachment step
    #[prop(optional)]
    on_attachment: Option<Callback<()>>,
    /// Runs after the pricing chip activates the pricing step
    #[prop(optional)]
    on_pricing: Option<Callback<()>>,
    #[prop(optional)]
    on_location: Option<Callback<()>>,
    #[prop(optional)]
    on_asking: Option<Callback<()>>,
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let job_flow = use_context::<JobFlowStore>().expect("JobFlowStore not provided in context");
    let upload = use_context::<UploadStore>().expect("UploadStore not provided in context");

    let press = move |step: JobFlowStep| {
        job_flow.set_active_step(step);
        let handler = match step {
            JobFlowStep::Asking => on_asking,
            JobFlowStep::Attachment => on_attachment,
            JobFlowStep::Location => on_location,
            JobFlowStep::Pricing => on_pricing,
            JobFlowStep::Done => on_done,
        };
        if let Some(handler) = handler {
            handler.run(());
        }
    };

    let side_chip = move |button: FlowButton| {
        let (background, color) = if button.active {
            (colors::PRIMARY, colors::TEXT_LIGHT)
        } else {
            (colors::NEUTRAL, colors::TEXT_DARK)
        };
        view! {
            <IconButton
                name=button.icon
                background=background.to_string()
                color=color.to_string()
                on_click=Callback::new(move |_| press(button.step))
            />
        }
    };

    view! {
        <div style="display: flex; align-items: center; justify-content: center; gap: 16px; padding: 10px 12px;">
            {move || {
                let layout = bar_layout(job_flow.active_step.get());
                // The center chip drops its label on the upload surface unless
                // the attachment step itself is active.
                let show_label = upload.screen.get() == ScreenTag::Chat
                    || layout.center.step == JobFlowStep::Attachment;
                let center_step = layout.center.step;
                let center_label = if show_label {
                    center_step.title().to_string()
                } else {
                    String::new()
                };
                view! {
                    <div style="display: flex; align-items: center; gap: 12px;">
                        {layout.left.into_iter().map(side_chip).collect_view()}
                    </div>
                    <IconButton
                        name=layout.center.icon
                        label=center_label
                        bold=true
                        background="rgba(0, 128, 128, 0.7)".to_string()
                        color=colors::TEXT_LIGHT.to_string()
                        on_click=Callback::new(move |_| press(center_step))
                    />
                    <div style="display: flex; align-items: center; gap: 12px;">
                        {layout.right.into_iter().map(side_chip).collect_view()}
                    </div>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use JobFlowStep::*;

    fn steps(buttons: &[FlowButton]) -> Vec<JobFlowStep> {
        buttons.iter().map(|b| b.step).collect()
    }

    #[test]
    fn test_asking_layout() {
        let layout = bar_layout(Asking);
        assert_eq!(steps(&layout.left), vec![Attachment, Pricing]);
        assert_eq!(steps(&layout.right), vec![Location, Done]);
        assert!(layout.left.iter().all(|b| !b.active));
        assert_eq!(layout.center.step, Asking);
    }

    #[test]
    fn test_attachment_marks_asking_done() {
        let layout = bar_layout(Attachment);
        assert_eq!(steps(&layout.left), vec![Asking, Pricing]);
        assert!(layout.left[0].active);
        assert!(!layout.left[1].active);
    }

    #[test]
    fn test_late_steps_mark_progress() {
        for step in [Location, Pricing, Done] {
            let layout = bar_layout(step);
            assert_eq!(steps(&layout.left), vec![Asking, Attachment]);
            assert!(layout.left.iter().all(|b| b.active));
        }
        let layout = bar_layout(Done);
        assert_eq!(steps(&layout.right), vec![Location, Pricing]);
        assert!(layout.right.iter().all(|b| b.active));
    }

    #[test]
    fn test_center_follows_active_step() {
        for step in contracts::domain::job_flow::STEP_ORDER {
            assert_eq!(bar_layout(step).center.step, step);
            assert_eq!(bar_layout(step).center.icon, step_icon(step));
        }
    }
}
