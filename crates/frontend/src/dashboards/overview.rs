use contracts::stats::DashboardStats;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::navigation::{use_navigation, IdentitiesParams, Route, TenantsParams};
use crate::shared::api_utils::api_url;
use crate::shared::components::stat_card::{StatCard, StatColor};
use crate::system::auth::context::use_auth;

async fn fetch_stats(token: &str) -> Result<DashboardStats, String> {
    let response = Request::get(&api_url("/api/admin/stats"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Stats fetch failed: {}", response.status()));
    }

    response
        .json::<DashboardStats>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, _) = use_auth();

    // Zeroed stats stay on screen if the fetch fails
    let (stats, set_stats) = signal(DashboardStats::default());

    let token = auth_state
        .get_untracked()
        .access_token
        .unwrap_or_default();
    spawn_local(async move {
        match fetch_stats(&token).await {
            Ok(fetched) => set_stats.set(fetched),
            Err(e) => log::error!("stats fetch error: {}", e),
        }
    });

    let plan_rows = move || {
        let distribution = stats.get().plan_distribution;
        let total = distribution.total();
        let rows = [
            ("Free", distribution.free, "plan-bar--free"),
            ("Starter", distribution.starter, "plan-bar--starter"),
            ("Professional", distribution.professional, "plan-bar--professional"),
            ("Enterprise", distribution.enterprise, "plan-bar--enterprise"),
        ];
        rows.into_iter()
            .map(|(label, count, bar_class)| {
                let percentage = if total > 0 {
                    (count * 100 / total) as u32
                } else {
                    0
                };
                view! {
                    <div class="plan-row">
                        <div class="plan-row__header">
                            <span>{label}</span>
                            <span class="plan-row__count">
                                {format!("{} ({}%)", count, percentage)}
                            </span>
                        </div>
                        <div class="plan-bar">
                            <div
                                class=format!("plan-bar__fill {}", bar_class)
                                style=format!("width: {}%", percentage)
                            ></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let locked_warning = move || {
        let locked = stats.get().locked_identities;
        (locked > 0).then(|| {
            view! {
                <div class="alert alert--warning">
                    <div class="alert__body">
                        <p class="alert__title">{format!("{} accounts are locked", locked)}</p>
                        <p class="alert__text">"Review the locked accounts and unlock them"</p>
                    </div>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            nav.go(
                                Route::Identities(IdentitiesParams {
                                    locked_only: true,
                                    ..Default::default()
                                }),
                            )
                        }
                    >
                        "Review"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Welcome to the HiveAuth admin panel"</p>
                </div>
            </div>

            <div class="stats-grid">
                <StatCard
                    title="Total identities"
                    value=Signal::derive(move || stats.get().total_identities)
                    color=StatColor::Blue
                />
                <StatCard
                    title="Active identities"
                    value=Signal::derive(move || stats.get().active_identities)
                    color=StatColor::Green
                    description=Signal::derive(move || {
                        Some(format!("{} verified", stats.get().verified_identities))
                    })
                />
                <StatCard
                    title="Total tenants"
                    value=Signal::derive(move || stats.get().total_tenants)
                    color=StatColor::Purple
                    description=Signal::derive(move || {
                        Some(format!("{} active", stats.get().active_tenants))
                    })
                />
                <StatCard
                    title="Locked accounts"
                    value=Signal::derive(move || stats.get().locked_identities)
                    color=StatColor::Red
                />
            </div>

            <div class="dashboard-grid">
                <div class="panel">
                    <h2 class="panel__title">"Plan distribution"</h2>
                    <div class="plan-rows">{plan_rows}</div>
                </div>

                <div class="dashboard-grid__column">
                    <div class="panel">
                        <h2 class="panel__title">"Quick actions"</h2>
                        <div class="quick-links">
                            <button
                                class="quick-links__item"
                                on:click=move |_| {
                                    nav.go(
                                        Route::Identities(IdentitiesParams {
                                            open_create: true,
                                            ..Default::default()
                                        }),
                                    )
                                }
                            >
                                "New identity"
                            </button>
                            <button
                                class="quick-links__item"
                                on:click=move |_| {
                                    nav.go(Route::Tenants(TenantsParams { open_create: true }))
                                }
                            >
                                "New tenant"
                            </button>
                            <button
                                class="quick-links__item"
                                on:click=move |_| {
                                    nav.go(
                                        Route::Identities(IdentitiesParams {
                                            locked_only: true,
                                            ..Default::default()
                                        }),
                                    )
                                }
                            >
                                "Locked accounts"
                            </button>
                        </div>
                    </div>

                    <div class="panel">
                        <h2 class="panel__title">"Last 24 hours"</h2>
                        <p class="stat-card__value">
                            {move || stats.get().recent_logins_24h.to_string()}
                        </p>
                        <p class="stat-card__description">"successful logins"</p>
                    </div>
                </div>
            </div>

            {locked_warning}
        </div>
    }
}
