//! Summary screen - View Model

use leptos::prelude::*;

/// Seed text for the editable job description.
pub const DESCRIPTION_TEMPLATE: &str = "We're looking for an experienced Electrician to install, repair, and maintain electrical systems in residential and commercial settings. The role involves troubleshooting issues, ensuring safety compliance, and delivering high-quality work. Ideal candidates have relevant certifications, strong technical skills, and a commitment to safety. Join us if you're passionate about delivering reliable electrical solutions! We're looking for an experienced Electrician to install, repair, and maintain electrical systems in residential and commercial settings. The role involves troubleshooting issues, ensuring safety compliance, and delivering high-quality work. Ideal candidates have relevant";

fn default_tags() -> Vec<String> {
    [
        "Electrical Installation",
        "Troubleshooting",
        "Safety Compliance",
        "Residential Work",
        "Commercial Work",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Editable summary state: free-text description and a duplicate-free tag
/// set.
#[derive(Clone, Copy)]
pub struct SummaryVm {
    pub description: RwSignal<String>,
    pub tags: RwSignal<Vec<String>>,
    pub new_tag: RwSignal<String>,
    pub adding_tag: RwSignal<bool>,
}

impl SummaryVm {
    pub fn new() -> Self {
        Self {
            description: RwSignal::new(DESCRIPTION_TEMPLATE.to_string()),
            tags: RwSignal::new(default_tags()),
            new_tag: RwSignal::new(String::new()),
            adding_tag: RwSignal::new(false),
        }
    }

    /// Add the pending tag. Empty input and duplicates are rejected; on
    /// success the editor row closes.
    pub fn add_tag(&self) {
        let tag = self.new_tag.get_untracked().trim().to_string();
        if tag.is_empty() || self.tags.get_untracked().contains(&tag) {
            return;
        }
        self.tags.update(|tags| tags.push(tag));
        self.new_tag.set(String::new());
        self.adding_tag.set(false);
    }

    pub fn remove_tag(&self, tag: &str) {
        self.tags.update(|tags| tags.retain(|t| t != tag));
    }

    pub fn cancel_tag_entry(&self) {
        self.adding_tag.set(false);
        self.new_tag.set(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_add_tag_trims_and_rejects_duplicates() {
        let owner = Owner::new();
        owner.set();

        let vm = SummaryVm::new();
        let initial = vm.tags.get_untracked().len();

        vm.new_tag.set("  Emergency Repairs  ".to_string());
        vm.add_tag();
        assert_eq!(vm.tags.get_untracked().len(), initial + 1);
        assert_eq!(
            vm.tags.get_untracked().last().unwrap(),
            "Emergency Repairs"
        );
        assert_eq!(vm.new_tag.get_untracked(), "");

        // Same name again is a no-op.
        vm.new_tag.set("Emergency Repairs".to_string());
        vm.add_tag();
        assert_eq!(vm.tags.get_untracked().len(), initial + 1);
    }

    #[test]
    fn test_add_tag_rejects_blank_input() {
        let owner = Owner::new();
        owner.set();

        let vm = SummaryVm::new();
        let initial = vm.tags.get_untracked().len();
        vm.new_tag.set("   ".to_string());
        vm.add_tag();
        assert_eq!(vm.tags.get_untracked().len(), initial);
    }

    #[test]
    fn test_remove_tag() {
        let owner = Owner::new();
        owner.set();

        let vm = SummaryVm::new();
        vm.remove_tag("Troubleshooting");
        assert!(!vm
            .tags
            .get_untracked()
            .contains(&"Troubleshooting".to_string()));
    }

    #[test]
    fn test_cancel_clears_the_editor() {
        let owner = Owner::new();
        owner.set();

        let vm = SummaryVm::new();
        vm.adding_tag.set(true);
        vm.new_tag.set("half-typed".to_string());
        vm.cancel_tag_entry();
        assert!(!vm.adding_tag.get_untracked());
        assert_eq!(vm.new_tag.get_untracked(), "");
    }
}
