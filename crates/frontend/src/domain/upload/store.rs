use contracts::domain::upload::ScreenTag;
use leptos::prelude::*;

/// Ephemeral upload/session state: picker visibility, picked image refs,
/// the active surface tag and the confirmed address string.
///
/// Image refs are opaque strings with no identity beyond equality. The list
/// is only ever appended to, filtered by exact match, or cleared.
#[derive(Clone, Copy)]
pub struct UploadStore {
    pub upload_visible: RwSignal<bool>,
    pub images: RwSignal<Vec<String>>,
    pub screen: RwSignal<ScreenTag>,
    pub location: RwSignal<String>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self {
            upload_visible: RwSignal::new(false),
            images: RwSignal::new(Vec::new()),
            screen: RwSignal::new(ScreenTag::Chat),
            location: RwSignal::new(String::new()),
        }
    }

    pub fn open(&self) {
        self.upload_visible.set(true);
    }

    /// Closing the picker always returns the session to the chat surface.
    pub fn close(&self) {
        self.upload_visible.set(false);
        self.screen.set(ScreenTag::Chat);
    }

    pub fn set_screen(&self, tag: ScreenTag) {
        self.screen.set(tag);
    }

    /// Appends unconditionally; duplicates are kept.
    pub fn add_image(&self, uri: impl Into<String>) {
        let uri = uri.into();
        self.images.update(|images| images.push(uri));
    }

    /// Removes every entry equal to `uri`.
    pub fn remove_image(&self, uri: &str) {
        self.images.update(|images| images.retain(|i| i != uri));
    }

    pub fn clear_images(&self) {
        self.images.update(|images| images.clear());
    }

    pub fn set_location(&self, address: impl Into<String>) {
        self.location.set(address.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_add_then_remove_restores_previous_state() {
        let owner = Owner::new();
        owner.set();

        let store = UploadStore::new();
        store.add_image("file:///a.jpg");
        let before = store.images.get_untracked();

        store.add_image("file:///b.jpg");
        store.remove_image("file:///b.jpg");
        assert_eq!(store.images.get_untracked(), before);
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let owner = Owner::new();
        owner.set();

        let store = UploadStore::new();
        store.add_image("x");
        store.add_image("x");
        store.add_image("y");
        assert_eq!(store.images.get_untracked().len(), 3);

        store.remove_image("x");
        assert_eq!(store.images.get_untracked(), vec!["y".to_string()]);
    }

    #[test]
    fn test_close_resets_surface_to_chat() {
        let owner = Owner::new();
        owner.set();

        let store = UploadStore::new();
        store.open();
        store.set_screen(ScreenTag::Upload);
        assert!(store.upload_visible.get_untracked());

        store.close();
        assert!(!store.upload_visible.get_untracked());
        assert_eq!(store.screen.get_untracked(), ScreenTag::Chat);
    }

    #[test]
    fn test_clear_images_and_location() {
        let owner = Owner::new();
        owner.set();

        let store = UploadStore::new();
        store.add_image("a");
        store.clear_images();
        assert!(store.images.get_untracked().is_empty());

        store.set_location("12 High Street");
        store.set_location("34 Low Street");
        assert_eq!(store.location.get_untracked(), "34 Low Street");
    }
}
