//! Upload form with drag & drop support.
//!
//! Collects files and an instruction, submits them to the processing
//! service and lets the browser download the result.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::components::BusyIndicator;
use crate::config::RUN_PROGRAM_URL;
use crate::services::{BrowserAlerts, BrowserDownload, GlooTransport};
use crate::state::FormState;
use crate::submission::submit;
use crate::types::SubmissionState;

#[component]
pub fn UploadForm() -> impl IntoView {
    let form = create_rw_signal(FormState::<File>::new());
    let (hovered, set_hovered) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let add_files = move |list: Option<FileList>| {
        let files = list.map(files_from_list).unwrap_or_default();
        if !files.is_empty() {
            log::debug!("Selected {} file(s)", files.len());
            form.update(|state| {
                state.add_files(files);
            });
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_hovered.set(false);
        add_files(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_hovered.set(true);
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        add_files(input.files());
        // Reset so picking the same file again fires `change`.
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = move |_| {
        // `submit` logs and alerts on its own; the outcome is only for tests.
        spawn_local(async move {
            _ = submit(
                &form,
                RUN_PROGRAM_URL,
                &GlooTransport,
                &BrowserDownload,
                &BrowserAlerts,
            )
            .await;
        });
    };

    let has_files = move || form.with(|state| !state.files().is_empty());
    let is_submitting = move || form.with(|state| state.submission().is_submitting());

    view! {
        <div class="file-upload-container">
            <div
                class="dropzone"
                class:dragging=move || hovered.get()
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=move |_| set_hovered.set(false)
                on:drop=on_drop
            >
                <p>"Drag and drop files here, or click to select files"</p>
            </div>
            <input
                type="file"
                multiple=true
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <div class="file-list">
                <div class="file-list-header">
                    <h3>"Selected Files"</h3>
                    <Show when=has_files fallback=|| view! { }>
                        <button
                            class="remove-all-button"
                            on:click=move |_| form.update(|state| state.remove_all_files())
                        >
                            "Remove All"
                        </button>
                    </Show>
                </div>
                <Show when=has_files fallback=|| view! { }>
                    <ul>
                        <For
                            each=move || form.with(|state| state.files().to_vec())
                            key=|file| file.id()
                            children=move |file| {
                                let id = file.id();
                                view! {
                                    <li>
                                        <i class=file.icon().css_class() aria-hidden="true"></i>
                                        {file.name().to_string()}
                                        <button
                                            class="remove-file-button"
                                            on:click=move |_| form.update(|state| {
                                                state.remove_file(id);
                                            })
                                        >
                                            "x"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>

            <textarea
                class="description-textarea"
                rows="4"
                placeholder="What do you want to do with the files?"
                prop:value=move || form.with(|state| state.instruction().to_string())
                on:input=move |ev| form.update(|state| state.set_instruction(event_target_value(&ev)))
            ></textarea>

            <button
                type="button"
                class="submit-button"
                disabled=is_submitting
                on:click=on_submit
            >
                <Show when=is_submitting fallback=|| "Process Files">
                    <BusyIndicator/>
                </Show>
            </button>

            {move || match form.with(|state| state.submission().clone()) {
                SubmissionState::Completed { filename } => view! {
                    <p class="status-message">"Downloaded " {filename}</p>
                }.into_view(),
                _ => ().into_view(),
            }}
        </div>
    }
}

fn files_from_list(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
