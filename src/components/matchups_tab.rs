//! Matchups Tab
//!
//! Win/loss/draw record against each opponent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::format::format_optional;
use crate::models::MatchupRecord;

#[component]
pub fn MatchupsTab(player_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (matchups, set_matchups) = signal(None::<Vec<MatchupRecord>>);

    let api = ctx.api();
    spawn_local(async move {
        if let Ok(response) = api.list_matchups(&player_id).await {
            let records = response
                .into_data()
                .map(|m| m.matchups.into_values().collect())
                .unwrap_or_default();
            let _ = set_matchups.try_set(Some(records));
        }
    });

    move || match matchups.get() {
        None => view! { <p class="text-muted">"Loading matchups..."</p> }.into_any(),
        Some(records) if records.is_empty() => view! { <p class="text-muted">"No matchups recorded"</p> }.into_any(),
        Some(records) => view! {
            <div class="table-responsive">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>"Opponent"</th>
                            <th>"Record"</th>
                            <th class="w-25">"Results"</th>
                            <th>"Win Rate"</th>
                            <th>"Last Battle"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {records.into_iter().map(|record| view! { <MatchupRow record=record /> }).collect_view()}
                    </tbody>
                </table>
            </div>
        }.into_any(),
    }
}

#[component]
fn MatchupRow(record: MatchupRecord) -> impl IntoView {
    let segments = [
        (record.wins, "bg-success"),
        (record.losses, "bg-danger"),
        (record.draws, "bg-secondary"),
    ];
    view! {
        <tr>
            <td>{record.opponent_name.clone()}</td>
            <td>{format!("{}W / {}L / {}D", record.wins, record.losses, record.draws)}</td>
            <td>
                <div class="progress">
                    {segments.into_iter().map(|(count, color)| view! {
                        <div
                            class=format!("progress-bar {}", color)
                            role="progressbar"
                            style=format!("width: {:.1}%", record.share(count))
                        ></div>
                    }).collect_view()}
                </div>
            </td>
            <td>{format!("{}%", record.win_rate_label())}</td>
            <td>{format_optional(record.last_battle.as_deref())}</td>
        </tr>
    }
}
