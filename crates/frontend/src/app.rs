use crate::domain::chat::ui::ChatPage;
use crate::domain::job_flow::store::JobFlowStore;
use crate::domain::upload::store::UploadStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared session stores live in context so every screen reads and writes
    // the same state without process-wide singletons.
    provide_context(JobFlowStore::new());
    provide_context(UploadStore::new());

    view! {
        <ChatPage />
    }
}
