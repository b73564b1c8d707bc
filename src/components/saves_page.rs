//! Saves Page
//!
//! Save file list with create, and load/delete behind confirmation modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_alerts::Severity;
use reactive_stores::Store;

use crate::actions::SaveAction;
use crate::context::use_app_context;
use crate::format::{format_optional, format_timestamp};
use crate::forms::validate_save;
use crate::models::{SaveFile, GAME_VERSIONS};
use crate::store::{find_save, reload_saves, use_saves_store, SavesState, SavesStateStoreFields};

use super::Modal;

#[component]
pub fn SavesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(SavesState::default());
    provide_context(store);

    let (loaded, set_loaded) = signal(false);
    let create_open = RwSignal::new(false);
    let load_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);

    Effect::new(move |_| {
        let version = store.version().get();
        let api = ctx.api();
        log::debug!("[saves] Loading saves (version {})", version);
        spawn_local(async move {
            if let Ok(response) = api.list_saves().await {
                let saves = response.into_data().map(|d| d.saves).unwrap_or_default();
                log::debug!("[saves] Loaded {} saves", saves.len());
                store.saves().set(saves);
                set_loaded.set(true);
            }
        });
    });

    let on_table_click = move |ev: web_sys::MouseEvent| match SaveAction::from_event(&ev) {
        Some(SaveAction::Load(id)) => {
            if let Some(save) = find_save(&store, &id) {
                store.pending_load().set(Some(save));
                load_open.set(true);
            }
        }
        Some(SaveAction::Delete(id)) => {
            if let Some(save) = find_save(&store, &id) {
                store.pending_delete().set(Some(save));
                delete_open.set(true);
            }
        }
        None => {}
    };

    view! {
        <section class="saves-page">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>"Save Files"</h2>
                <button class="btn btn-success" on:click=move |_| create_open.set(true)>
                    "Create Save"
                </button>
            </div>

            <div class="table-responsive">
                <table class="table table-striped table-hover" id="savesTable">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Game Version"</th>
                            <th>"Created"</th>
                            <th>"Last Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody on:click=on_table_click>
                        {move || {
                            let saves = store.saves().get();
                            if !loaded.get() {
                                view! { <tr><td colspan="6" class="text-center">"Loading save files..."</td></tr> }.into_any()
                            } else if saves.is_empty() {
                                view! { <tr><td colspan="6" class="text-center">"No save files found"</td></tr> }.into_any()
                            } else {
                                saves.into_iter().map(|save| view! { <SaveRow save=save /> }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <CreateSaveModal open=create_open />
            <LoadSaveModal open=load_open />
            <DeleteSaveModal open=delete_open />
        </section>
    }
}

#[component]
fn SaveRow(save: SaveFile) -> impl IntoView {
    let id = save.id.clone();
    view! {
        <tr>
            <td><small class="text-muted">{save.id.clone()}</small></td>
            <td>{save.name.clone()}</td>
            <td>{save.game_version.clone()}</td>
            <td>{format_optional(save.created_at.as_deref())}</td>
            <td>{format_optional(save.last_updated.as_deref())}</td>
            <td>
                <button class="btn btn-sm btn-primary me-1" data-action=SaveAction::LOAD data-id=id.clone()>
                    "Load"
                </button>
                <button class="btn btn-sm btn-danger" data-action=SaveAction::DELETE data-id=id>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

// ========================
// Modals
// ========================

#[component]
fn CreateSaveModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_saves_store();
    let (name, set_name) = signal(String::new());
    let (version, set_version) = signal(GAME_VERSIONS[0].0.to_string());

    let submit = move |_| {
        let save = match validate_save(&name.get_untracked(), &version.get_untracked()) {
            Ok(save) => save,
            Err(err) => {
                ctx.notify(&err.to_string(), err.severity());
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.create_save(&save).await {
                if response.success {
                    log::info!("[saves] Created {}", save.name);
                    ctx.notify(&save.created_message(), Severity::Success);
                    open.set(false);
                    set_name.set(String::new());
                    reload_saves(&store);
                }
            }
        });
    };

    view! {
        <Modal id="createSaveModal" title="Create Save File".to_string() open=open>
            <div class="modal-body">
                <div class="mb-3">
                    <label class="form-label">"Save Name"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label">"Game Version"</label>
                    <select class="form-select" on:change=move |ev| set_version.set(event_target_value(&ev))>
                        {GAME_VERSIONS.iter().map(|(v, label)| view! {
                            <option value=*v prop:selected=move || version.get() == *v>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-primary" on:click=submit>"Create Save"</button>
            </div>
        </Modal>
    }
}

#[component]
fn LoadSaveModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_saves_store();

    let confirm = move |_| {
        let Some(save) = store.pending_load().get_untracked() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.load_save(&save.id).await {
                if response.success {
                    log::info!("[saves] Loaded {}", save.id);
                    ctx.notify("Save file loaded successfully", Severity::Success);
                    open.set(false);
                    store.pending_load().set(None);
                    reload_saves(&store);
                    ctx.reload_players();
                }
            }
        });
    };

    view! {
        <Modal id="loadSaveModal" title="Load Save File".to_string() open=open>
            <div class="modal-body">
                {move || store.pending_load().get().map(|save| view! {
                    <p>"Are you sure you want to load save file " <strong>{save.name.clone()}</strong> "?"</p>
                    <p class="text-muted">
                        "Created: " {save.created_at.as_deref().map(format_timestamp).unwrap_or_else(|| "-".to_string())}
                    </p>
                    <p class="text-warning">"Loading replaces all current player data."</p>
                })}
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-primary" on:click=confirm>"Load"</button>
            </div>
        </Modal>
    }
}

#[component]
fn DeleteSaveModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_saves_store();

    let confirm = move |_| {
        let Some(save) = store.pending_delete().get_untracked() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.delete_save(&save.id).await {
                if response.success {
                    log::info!("[saves] Deleted {}", save.id);
                    ctx.notify("Save file deleted successfully", Severity::Success);
                    open.set(false);
                    store.pending_delete().set(None);
                    reload_saves(&store);
                }
            }
        });
    };

    view! {
        <Modal id="deleteSaveModal" title="Delete Save File".to_string() open=open>
            <div class="modal-body">
                {move || store.pending_delete().get().map(|save| view! {
                    <p>"Are you sure you want to delete save file " <strong>{save.name}</strong> "?"</p>
                    <p class="text-danger">"This action cannot be undone."</p>
                })}
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-danger" on:click=confirm>"Delete"</button>
            </div>
        </Modal>
    }
}
