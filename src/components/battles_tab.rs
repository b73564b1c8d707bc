//! Battles Tab
//!
//! Battle history, the start-battle form and the battle details modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_alerts::Severity;

use crate::actions::ViewBattle;
use crate::context::use_app_context;
use crate::format::format_optional;
use crate::forms::validate_battle;
use crate::models::{describe_action, Battle, BattleOutcome, Pokemon, Turn};
use crate::store::{bump_battles, use_players_store, PlayersStateStoreFields};

use super::Modal;

fn result_badge(result: Option<BattleOutcome>) -> impl IntoView {
    match result {
        Some(outcome) => view! {
            <span class=format!("badge {}", outcome.badge_class())>{outcome.label()}</span>
        }
        .into_any(),
        None => view! { <span class="badge bg-warning text-dark">"In Progress"</span> }.into_any(),
    }
}

#[component]
pub fn BattlesTab(player_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_players_store();
    let (battles, set_battles) = signal(None::<Vec<Battle>>);
    let start_open = RwSignal::new(false);
    let details_open = RwSignal::new(false);
    let player_id = StoredValue::new(player_id);

    Effect::new(move |_| {
        let _ = store.battles_version().get();
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.list_battles(&id).await {
                let list = response.into_data().map(|d| d.battles).unwrap_or_default();
                let _ = set_battles.try_set(Some(list));
            }
        });
    });

    let on_list_click = move |ev: web_sys::MouseEvent| {
        let Some(ViewBattle(battle_id)) = ViewBattle::from_event(&ev) else {
            return;
        };
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.get_battle(&id, &battle_id).await {
                if let Some(battle) = response.into_data() {
                    store.selected_battle().set(Some(battle));
                    details_open.set(true);
                }
            }
        });
    };

    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <h5 class="mb-0">"Battles"</h5>
            <button class="btn btn-sm btn-primary" on:click=move |_| start_open.set(true)>"Start Battle"</button>
        </div>
        <div on:click=on_list_click>
            {move || match battles.get() {
                None => view! { <p class="text-muted">"Loading battles..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p class="text-muted">"No battles recorded"</p> }.into_any(),
                Some(list) => view! {
                    <div class="list-group">
                        {list.into_iter().map(|battle| view! {
                            <div class="list-group-item d-flex justify-content-between align-items-center">
                                <div>
                                    <strong>"vs. " {battle.opponent_name.clone()}</strong>
                                    <br />
                                    <small class="text-muted">{format_optional(battle.start_time.as_deref())}</small>
                                </div>
                                <div>
                                    {result_badge(battle.result)}
                                    <button
                                        class="btn btn-sm btn-outline-primary ms-2"
                                        data-action=ViewBattle::ACTION
                                        data-id=battle.id.clone()
                                    >
                                        "Details"
                                    </button>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
        <StartBattleModal player_id=player_id open=start_open />
        <BattleDetailsModal player_id=player_id open=details_open />
    }
}

#[component]
fn StartBattleModal(player_id: StoredValue<String>, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_players_store();
    let (opponent_id, set_opponent_id) = signal(String::new());
    let (opponent_name, set_opponent_name) = signal(String::new());

    let submit = move |_| {
        let battle = match validate_battle(&opponent_id.get_untracked(), &opponent_name.get_untracked()) {
            Ok(battle) => battle,
            Err(err) => {
                ctx.notify(&err.to_string(), err.severity());
                return;
            }
        };
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.start_battle(&id, &battle).await {
                if let Some(started) = response.into_data() {
                    log::info!("[battles] Started {} against {}", started.battle_id, battle.opponent_name);
                    ctx.notify("Battle started successfully", Severity::Success);
                    open.set(false);
                    set_opponent_id.set(String::new());
                    set_opponent_name.set(String::new());
                    bump_battles(&store);
                }
            }
        });
    };

    view! {
        <Modal id="startBattleModal" title="Start Battle".to_string() open=open>
            <div class="modal-body">
                <div class="mb-3">
                    <label class="form-label">"Opponent ID"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || opponent_id.get()
                        on:input=move |ev| set_opponent_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label">"Opponent Name"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || opponent_name.get()
                        on:input=move |ev| set_opponent_name.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="btn btn-primary" on:click=submit>"Start Battle"</button>
            </div>
        </Modal>
    }
}

// ========================
// Battle Details
// ========================

#[component]
fn BattleDetailsModal(player_id: StoredValue<String>, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_players_store();

    let set_result = move |outcome: BattleOutcome| {
        let Some(battle_id) = store.selected_battle().with_untracked(|b| b.as_ref().map(|b| b.id.clone())) else {
            return;
        };
        let api = ctx.api();
        let id = player_id.get_value();
        spawn_local(async move {
            if let Ok(response) = api.set_battle_result(&id, &battle_id, outcome).await {
                if response.success {
                    ctx.notify(&format!("Battle result updated: {}", outcome.as_str()), Severity::Success);
                    open.set(false);
                    bump_battles(&store);
                }
            }
        });
    };

    let title = Signal::derive(move || {
        store
            .selected_battle()
            .with(|b| b.as_ref().map(|b| format!("Battle vs. {}", b.opponent_name)).unwrap_or_default())
    });

    view! {
        <Modal id="battleDetailsModal" title=title open=open size="modal-lg">
            <div class="modal-body">
                {move || store.selected_battle().get().map(|battle| view! { <BattleSummary battle=battle /> })}
            </div>
            <div class="modal-footer">
                <Show when=move || store.selected_battle().with(|b| b.as_ref().is_some_and(|b| !b.is_finished()))>
                    <div class="me-auto">
                        {BattleOutcome::ALL.into_iter().map(|outcome| view! {
                            <button type="button" class=outcome.button_class() on:click=move |_| set_result(outcome)>
                                {outcome.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </Show>
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Close"</button>
            </div>
        </Modal>
    }
}

#[component]
fn BattleSummary(battle: Battle) -> impl IntoView {
    view! {
        <div class="mb-3">
            <p class="mb-1"><strong>"Status: "</strong>{result_badge(battle.result)}</p>
            <p class="mb-1"><strong>"Started: "</strong>{format_optional(battle.start_time.as_deref())}</p>
            <p class="mb-1"><strong>"Ended: "</strong>{format_optional(battle.end_time.as_deref())}</p>
        </div>
        <div class="row mb-3">
            <div class="col-md-6">
                <h6>"Your Team"</h6>
                <ul class="list-group">
                    {battle.player_team.iter().map(|p| team_entry(Some(p))).collect_view()}
                </ul>
            </div>
            <div class="col-md-6">
                <h6>"Opponent Team"</h6>
                <ul class="list-group">
                    {battle.opponent_team.iter().map(|p| team_entry(p.as_ref())).collect_view()}
                </ul>
            </div>
        </div>
        <h6>"Battle Log"</h6>
        {if battle.turns.is_empty() {
            view! { <p class="text-muted">"No turns recorded"</p> }.into_any()
        } else {
            view! {
                <div class="battle-log">
                    {battle.turns.into_iter().map(turn_entry).collect_view()}
                </div>
            }.into_any()
        }}
    }
}

fn team_entry(pokemon: Option<&Pokemon>) -> impl IntoView {
    match pokemon {
        Some(p) => view! {
            <li class="list-group-item">{format!("{} (Lv. {})", p.name, p.level)}</li>
        }
        .into_any(),
        None => view! { <li class="list-group-item text-muted">"Unknown Pokemon"</li> }.into_any(),
    }
}

fn turn_entry(turn: Turn) -> impl IntoView {
    view! {
        <div class="battle-turn mb-2">
            <strong>"Turn " {turn.turn_number}</strong>
            <div>"You: " {describe_action(turn.player_action.as_ref())}</div>
            <div>"Opponent: " {describe_action(turn.opponent_action.as_ref())}</div>
            {(!turn.effects.is_empty()).then(|| view! {
                <ul class="small text-muted mb-0">
                    {turn.effects.into_iter().map(|effect| view! { <li>{effect}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
