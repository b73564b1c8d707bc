//! Create Player Modal
//!
//! Player form with location and a team builder of up to six Pokemon.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_alerts::Severity;

use crate::context::use_app_context;
use crate::forms::{PlayerDraft, PokemonField, NATURES, POKEMON_TYPES, STAT_LABELS};

use super::Modal;

#[component]
pub fn CreatePlayerModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(PlayerDraft::default());

    let add_pokemon = move |_| {
        let added = draft.try_update(|d| d.team.add()).unwrap_or(Ok(0));
        if let Err(err) = added {
            ctx.notify(&err.to_string(), err.severity());
        }
    };

    let submit = move |_| {
        let player = match draft.with_untracked(PlayerDraft::validate) {
            Ok(player) => player,
            Err(err) => {
                ctx.notify(&err.to_string(), err.severity());
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.create_player(&player).await {
                if response.success {
                    log::info!("[players] Created {}", player.name);
                    ctx.notify(&format!("Player {} created successfully", player.name), Severity::Success);
                    open.set(false);
                    draft.set(PlayerDraft::default());
                    ctx.reload_players();
                }
            }
        });
    };

    view! {
        <Modal id="createPlayerModal" title="Create New Player".to_string() open=open size="modal-lg">
            <div class="modal-body">
                <form id="createPlayerForm" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                    <div class="mb-3">
                        <label for="playerName" class="form-label">"Player Name"</label>
                        <input
                            type="text"
                            class="form-control"
                            id="playerName"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>

                    <h6>"Location"</h6>
                    <div class="row mb-3">
                        <div class="col">
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Area (e.g. Aspertia City)"
                                prop:value=move || draft.with(|d| d.area.clone())
                                on:input=move |ev| draft.update(|d| d.area = event_target_value(&ev))
                            />
                        </div>
                        <div class="col">
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Specific location"
                                prop:value=move || draft.with(|d| d.specific.clone())
                                on:input=move |ev| draft.update(|d| d.specific = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="mb-3">
                        <textarea
                            class="form-control"
                            rows="2"
                            placeholder="Location description (optional)"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <h6 class="mb-0">"Team"</h6>
                        <button type="button" class="btn btn-sm btn-outline-primary" on:click=add_pokemon>
                            "Add Pokemon"
                        </button>
                    </div>
                    <div id="teamContainer">
                        <For
                            each=move || draft.with(|d| d.team.keys())
                            key=|key| *key
                            children=move |key| view! { <PokemonFields draft=draft row_key=key /> }
                        />
                    </div>
                </form>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-primary" on:click=submit>"Create Player"</button>
            </div>
        </Modal>
    }
}

/// Inputs for one team member, addressed by its row key
#[component]
fn PokemonFields(draft: RwSignal<PlayerDraft>, row_key: u32) -> impl IntoView {
    let value = move |field: PokemonField| {
        draft.with(|d| d.team.member(row_key).map(|p| p.get(field).to_string()).unwrap_or_default())
    };
    let set = move |field: PokemonField, input: String| draft.update(|d| d.team.set_field(row_key, field, input));
    let number = move || draft.with(|d| d.team.position(row_key).map(|i| i + 1).unwrap_or(0));
    let removable = move || draft.with(|d| d.team.is_removable(row_key));

    view! {
        <div class="card mb-2 pokemon-entry">
            <div class="card-body">
                <div class="d-flex justify-content-between align-items-center mb-2">
                    <h6 class="mb-0">{move || format!("Pokemon #{}", number())}</h6>
                    <Show when=removable>
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-danger"
                            on:click=move |_| {
                                draft.update(|d| {
                                    d.team.remove(row_key);
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </Show>
                </div>
                <div class="row g-2 mb-2">
                    <div class="col-md-6">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Name"
                            prop:value=move || value(PokemonField::Name)
                            on:input=move |ev| set(PokemonField::Name, event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-2">
                        <input
                            type="number"
                            class="form-control"
                            min="1"
                            max="100"
                            placeholder="Level"
                            prop:value=move || value(PokemonField::Level)
                            on:input=move |ev| set(PokemonField::Level, event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Held item (optional)"
                            prop:value=move || value(PokemonField::HeldItem)
                            on:input=move |ev| set(PokemonField::HeldItem, event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="row g-2 mb-2">
                    <div class="col-md-4">
                        <select class="form-select" on:change=move |ev| set(PokemonField::Type1, event_target_value(&ev))>
                            <option value="" prop:selected=move || value(PokemonField::Type1).is_empty()>"Type 1"</option>
                            {POKEMON_TYPES.iter().map(|(v, label)| view! {
                                <option value=*v prop:selected=move || value(PokemonField::Type1) == *v>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="col-md-4">
                        <select class="form-select" on:change=move |ev| set(PokemonField::Type2, event_target_value(&ev))>
                            <option value="" prop:selected=move || value(PokemonField::Type2).is_empty()>"Type 2 (optional)"</option>
                            {POKEMON_TYPES.iter().map(|(v, label)| view! {
                                <option value=*v prop:selected=move || value(PokemonField::Type2) == *v>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="col-md-4">
                        <select class="form-select" on:change=move |ev| set(PokemonField::Nature, event_target_value(&ev))>
                            <option value="" prop:selected=move || value(PokemonField::Nature).is_empty()>"Nature"</option>
                            {NATURES.iter().map(|(v, label)| view! {
                                <option value=*v prop:selected=move || value(PokemonField::Nature) == *v>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
                <div class="row g-2">
                    {STAT_LABELS.iter().enumerate().map(|(i, label)| view! {
                        <div class="col-2">
                            <label class="form-label small">{*label}</label>
                            <input
                                type="number"
                                class="form-control form-control-sm"
                                min="1"
                                max="255"
                                prop:value=move || value(PokemonField::Stat(i))
                                on:input=move |ev| set(PokemonField::Stat(i), event_target_value(&ev))
                            />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
