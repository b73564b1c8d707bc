//! Thoughts Tab
//!
//! A player's notes, newest last, plus the add-thought modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_alerts::Severity;

use crate::context::use_app_context;
use crate::format::format_optional;
use crate::forms::validate_thought;
use crate::models::{Thought, THOUGHT_CATEGORIES};
use crate::store::{bump_thoughts, use_players_store, PlayersStateStoreFields};

use super::Modal;

#[component]
pub fn ThoughtsTab(player_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_players_store();
    let (thoughts, set_thoughts) = signal(None::<Vec<Thought>>);
    let add_open = RwSignal::new(false);
    let player_id = StoredValue::new(player_id);

    Effect::new(move |_| {
        let _ = store.thoughts_version().get();
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.list_thoughts(&id).await {
                let list = response.into_data().map(|d| d.thoughts).unwrap_or_default();
                let _ = set_thoughts.try_set(Some(list));
            }
        });
    });

    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <h5 class="mb-0">"Thoughts"</h5>
            <button class="btn btn-sm btn-primary" on:click=move |_| add_open.set(true)>"Add Thought"</button>
        </div>
        {move || match thoughts.get() {
            None => view! { <p class="text-muted">"Loading thoughts..."</p> }.into_any(),
            Some(list) if list.is_empty() => view! { <p class="text-muted">"No thoughts recorded"</p> }.into_any(),
            Some(list) => view! {
                <div class="list-group">
                    {list.into_iter().map(|thought| view! {
                        <div class="list-group-item">
                            <div class="d-flex justify-content-between">
                                <span class=thought.category_class()>{thought.category.clone()}</span>
                                <small class="text-muted">{format_optional(thought.timestamp.as_deref())}</small>
                            </div>
                            <p class="mb-0 mt-2">{thought.content.clone()}</p>
                        </div>
                    }).collect_view()}
                </div>
            }.into_any(),
        }}
        <AddThoughtModal player_id=player_id open=add_open />
    }
}

#[component]
fn AddThoughtModal(player_id: StoredValue<String>, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_players_store();
    let (content, set_content) = signal(String::new());
    let (category, set_category) = signal(THOUGHT_CATEGORIES[0].0.to_string());

    let submit = move |_| {
        let thought = match validate_thought(&content.get_untracked(), &category.get_untracked()) {
            Ok(thought) => thought,
            Err(err) => {
                ctx.notify(&err.to_string(), err.severity());
                return;
            }
        };
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.add_thought(&id, &thought).await {
                if response.success {
                    ctx.notify("Thought added successfully", Severity::Success);
                    open.set(false);
                    set_content.set(String::new());
                    bump_thoughts(&store);
                }
            }
        });
    };

    view! {
        <Modal id="addThoughtModal" title="Add Thought".to_string() open=open>
            <div class="modal-body">
                <div class="mb-3">
                    <label class="form-label">"Content"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="mb-3">
                    <label class="form-label">"Category"</label>
                    <select class="form-select" on:change=move |ev| set_category.set(event_target_value(&ev))>
                        {THOUGHT_CATEGORIES.iter().map(|(v, label)| view! {
                            <option value=*v prop:selected=move || category.get() == *v>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-primary" on:click=submit>"Add Thought"</button>
            </div>
        </Modal>
    }
}
