//! Player Details Modal
//!
//! Team, location and the lazily loaded thoughts, battles and matchups tabs.

use leptos::prelude::*;

use crate::models::{stat_percent, type_class, MapLocation, Pokemon};
use crate::store::{use_players_store, PlayersStateStoreFields};

use super::{BattlesTab, MatchupsTab, Modal, ThoughtsTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Team,
    Location,
    Thoughts,
    Battles,
    Matchups,
}

impl DetailTab {
    const ALL: [DetailTab; 5] = [
        DetailTab::Team,
        DetailTab::Location,
        DetailTab::Thoughts,
        DetailTab::Battles,
        DetailTab::Matchups,
    ];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Team => "Team",
            DetailTab::Location => "Location",
            DetailTab::Thoughts => "Thoughts",
            DetailTab::Battles => "Battles",
            DetailTab::Matchups => "Matchups",
        }
    }
}

#[component]
pub fn PlayerDetails(open: RwSignal<bool>) -> impl IntoView {
    let store = use_players_store();
    let tab = RwSignal::new(DetailTab::Team);

    // Each newly opened player starts on the team tab
    Effect::new(move |_| {
        if open.get() {
            tab.set(DetailTab::Team);
        }
    });

    let title = Signal::derive(move || {
        store
            .selected_player()
            .with(|p| p.as_ref().map(|p| format!("Player: {}", p.name)).unwrap_or_default())
    });

    view! {
        <Modal id="playerDetailsModal" title=title open=open size="modal-xl">
            <div class="modal-body">
                <ul class="nav nav-tabs mb-3">
                    {DetailTab::ALL.into_iter().map(|t| view! {
                        <li class="nav-item">
                            <button
                                type="button"
                                class=move || if tab.get() == t { "nav-link active" } else { "nav-link" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        </li>
                    }).collect_view()}
                </ul>
                {move || {
                    let player = store.selected_player().get()?;
                    // Tabs mount only while open so their data loads on demand
                    if !open.get() {
                        return None;
                    }
                    let content = match tab.get() {
                        DetailTab::Team => view! { <TeamTab team=player.team /> }.into_any(),
                        DetailTab::Location => view! { <LocationTab location=player.location /> }.into_any(),
                        DetailTab::Thoughts => view! { <ThoughtsTab player_id=player.id /> }.into_any(),
                        DetailTab::Battles => view! { <BattlesTab player_id=player.id /> }.into_any(),
                        DetailTab::Matchups => view! { <MatchupsTab player_id=player.id /> }.into_any(),
                    };
                    Some(content)
                }}
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Close"</button>
            </div>
        </Modal>
    }
}

// ========================
// Team & Location
// ========================

#[component]
fn TeamTab(team: Vec<Pokemon>) -> impl IntoView {
    if team.is_empty() {
        return view! { <p class="text-muted">"No Pokemon in team"</p> }.into_any();
    }
    view! {
        <div class="row">
            {team.into_iter().map(|pokemon| view! {
                <div class="col-md-4 mb-3">
                    <PokemonCard pokemon=pokemon />
                </div>
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn PokemonCard(pokemon: Pokemon) -> impl IntoView {
    let held_item = pokemon.held_item.clone().unwrap_or_else(|| "None".to_string());
    view! {
        <div class="card pokemon-card h-100">
            <div class="card-body">
                <h5 class="card-title">{pokemon.name.clone()} " " <small class="text-muted">"Lv. " {pokemon.level}</small></h5>
                <div class="mb-2">
                    {pokemon.types.iter().map(|t| view! {
                        <span class=type_class(t)>{t.clone()}</span>
                    }).collect_view()}
                </div>
                <p class="mb-1"><strong>"Nature: "</strong>{pokemon.nature.clone()}</p>
                <p class="mb-1"><strong>"Held Item: "</strong>{held_item}</p>
                <p class="mb-2"><strong>"HP: "</strong>{format!("{}/{}", pokemon.current_hp, pokemon.max_hp)}</p>
                {pokemon.base_stats.rows().into_iter().map(|(label, value, color)| view! {
                    <div class="stat-row small">
                        <span class="stat-label">{label}</span>
                        <div class="progress">
                            <div
                                class=format!("progress-bar {}", color)
                                role="progressbar"
                                style=format!("width: {:.1}%", stat_percent(value))
                            >
                                {value}
                            </div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LocationTab(location: MapLocation) -> impl IntoView {
    let accessible = location.accessible_locations.clone();
    view! {
        <div>
            <h5>{location.label()}</h5>
            {location.description.clone().map(|d| view! { <p>{d}</p> })}
            <h6>"Accessible Locations"</h6>
            {if accessible.is_empty() {
                view! { <p class="text-muted">"No accessible locations available"</p> }.into_any()
            } else {
                view! {
                    <ul class="list-group">
                        {accessible.into_iter().map(|loc| view! {
                            <li class="list-group-item">{loc.join(" - ")}</li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
