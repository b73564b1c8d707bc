//! Modal Component
//!
//! Bootstrap-styled dialog that is mounted once with its page and shown or
//! hidden by an `open` signal. Opening twice is the same as opening once.

use leptos::prelude::*;

fn title_id(modal_id: &str) -> String {
    format!("{}Label", modal_id)
}

/// Dialog shell; children supply `modal-body` and `modal-footer`
#[component]
pub fn Modal(
    /// Element id, kept stable for styling hooks
    #[prop(into)] id: String,
    #[prop(into)] title: Signal<String>,
    open: RwSignal<bool>,
    /// Extra dialog class such as `modal-lg`
    #[prop(optional, into)] size: String,
    children: Children,
) -> impl IntoView {
    let dialog_class = if size.is_empty() {
        "modal-dialog".to_string()
    } else {
        format!("modal-dialog {}", size)
    };
    let label_id = title_id(&id);
    let labelled_by = title_id(&id);

    view! {
        <div
            id=id
            class=move || if open.get() { "modal fade show" } else { "modal fade" }
            style=move || if open.get() { "display: block;" } else { "display: none;" }
            tabindex="-1"
            aria-labelledby=labelled_by
            aria-hidden=move || if open.get() { "false" } else { "true" }
        >
            <div class=dialog_class>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id=label_id>{move || title.get()}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| open.set(false)
                        ></button>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
        <Show when=move || open.get()>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_id_labels_dialog() {
        assert_eq!(title_id("createSaveModal"), "createSaveModalLabel");
    }
}
