//! Spinner shown while a submission is running.

use leptos::*;

#[component]
pub fn BusyIndicator() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-label="Processing">
            <div class="circle"></div>
        </div>
    }
}
