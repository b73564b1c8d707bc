//! Players Page
//!
//! Paginated players table with create, view and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions::PlayerAction;
use crate::context::use_app_context;
use crate::format::format_optional;
use crate::forms::MAX_TEAM_SIZE;
use crate::models::{Player, PlayerPage};
use crate::store::{PlayersState, PlayersStateStoreFields};

use super::{CreatePlayerModal, Pagination, PlayerDetails};

const DELETE_PROMPT: &str = "Are you sure you want to delete this player? This action cannot be undone.";

#[component]
pub fn PlayersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(PlayersState::new());
    provide_context(store);

    let (listing, set_listing) = signal(None::<PlayerPage>);
    let create_open = RwSignal::new(false);
    let details_open = RwSignal::new(false);

    // Load players when the page or the reload trigger changes
    Effect::new(move |_| {
        let page = store.page().get();
        let version = ctx.players_version.get();
        let api = ctx.api();
        log::debug!("[players] Loading page {} (version {})", page, version);
        spawn_local(async move {
            match api.list_players(page, ctx.per_page).await {
                Ok(result) if result.success => {
                    log::debug!("[players] Loaded {} of {} players", result.data.len(), result.total);
                    set_listing.set(Some(result));
                }
                Ok(result) => log::warn!("[players] List refused: {:?}", result.message),
                Err(_) => {}
            }
        });
    });

    let view_player = move |player_id: String| {
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.get_player(&player_id).await {
                if let Some(player) = response.into_data() {
                    store.selected_player().set(Some(player));
                    details_open.set(true);
                }
            }
        });
    };

    let delete_player = move |player_id: String| {
        let confirmed = window().confirm_with_message(DELETE_PROMPT).unwrap_or(false);
        if !confirmed {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(response) = api.delete_player(&player_id).await {
                if response.success {
                    log::info!("[players] Deleted {}", player_id);
                    ctx.notify("Player deleted successfully", leptos_alerts::Severity::Success);
                    ctx.reload_players();
                }
            }
        });
    };

    // One listener for every row button
    let on_table_click = move |ev: web_sys::MouseEvent| match PlayerAction::from_event(&ev) {
        Some(PlayerAction::View(id)) => view_player(id),
        Some(PlayerAction::Delete(id)) => delete_player(id),
        None => {}
    };

    let total_pages = Signal::derive(move || listing.with(|l| l.as_ref().map(|p| p.total_pages).unwrap_or(0)));

    view! {
        <section class="players-page">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>"Players"</h2>
                <button class="btn btn-success" on:click=move |_| create_open.set(true)>
                    "Create Player"
                </button>
            </div>

            <div class="table-responsive">
                <table class="table table-striped table-hover" id="playersTable">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Location"</th>
                            <th>"Team"</th>
                            <th>"Last Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody on:click=on_table_click>
                        {move || match listing.get() {
                            None => view! {
                                <tr><td colspan="6" class="text-center">"Loading players..."</td></tr>
                            }.into_any(),
                            Some(page) if page.data.is_empty() => view! {
                                <tr><td colspan="6" class="text-center">"No players found"</td></tr>
                            }.into_any(),
                            Some(page) => page.data
                                .into_iter()
                                .map(|player| view! { <PlayerRow player=player /> })
                                .collect_view()
                                .into_any(),
                        }}
                    </tbody>
                </table>
            </div>

            <Pagination
                page=Signal::derive(move || store.page().get())
                total_pages=total_pages
                on_select=move |page: u32| store.page().set(page)
            />

            <CreatePlayerModal open=create_open />
            <PlayerDetails open=details_open />
        </section>
    }
}

#[component]
fn PlayerRow(player: Player) -> impl IntoView {
    let id = player.id.clone();
    view! {
        <tr>
            <td><small class="text-muted">{player.id.clone()}</small></td>
            <td>{player.name.clone()}</td>
            <td>{player.location.label()}</td>
            <td>{format!("{} / {}", player.team.len(), MAX_TEAM_SIZE)}</td>
            <td>{format_optional(player.last_updated.as_deref())}</td>
            <td>
                <button class="btn btn-sm btn-primary me-1" data-action=PlayerAction::VIEW data-id=id.clone()>
                    "View"
                </button>
                <button class="btn btn-sm btn-danger" data-action=PlayerAction::DELETE data-id=id>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
