//! Dashboard: balance summary cards and the most recent transactions.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::movimentacao_item::MovimentacaoItem;
use crate::net::api::{self, ApiError};
use crate::net::types::Movimentacao;
use crate::state::movimentacoes::{DASHBOARD_RECENTES, recentes};
use crate::state::session::SessionState;
use crate::util::format::formatar_valor;
use crate::util::storage::Store;

/// Balance and transaction list, fetched together on mount.
async fn carregar(store: Store) -> Result<(f64, Vec<Movimentacao>), ApiError> {
    let saldo = api::fetch_saldo(&store).await?;
    let movs = api::fetch_movimentacoes(&store).await?;
    Ok((saldo.saldo, movs))
}

/// Dashboard page: balance card, transaction count, system status, and the
/// five most recent transactions in the order the backend returned them.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<RwSignal<SessionState>>();

    let dados = LocalResource::new(move || carregar(store.clone()));

    // An expired session drops the in-memory user; the route guard then
    // redirects on the next render.
    Effect::new(move || {
        if let Some(Err(ApiError::SessionExpired)) = dados.get() {
            session.update(|s| s.user = None);
        }
    });

    let nome = move || {
        session
            .get()
            .user
            .map(|u| u.nome)
            .unwrap_or_default()
    };

    view! {
        <Layout>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__greeting">
                        {move || format!("Bem-vindo, {}!", nome())}
                    </p>
                </header>

                <Suspense fallback=move || {
                    view! { <p class="dashboard-page__loading">"Carregando..."</p> }
                }>
                    {move || {
                        dados
                            .get()
                            .map(|result| match result {
                                Ok((saldo, movs)) => render_resumo(saldo, &movs).into_any(),
                                Err(err) => {
                                    view! {
                                        <div class="dashboard-page__error">
                                            {err.user_message("Erro ao carregar dados")}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn render_resumo(saldo: f64, movs: &[Movimentacao]) -> impl IntoView {
    let saldo_class = if saldo >= 0.0 {
        "dashboard-page__saldo dashboard-page__saldo--positivo"
    } else {
        "dashboard-page__saldo dashboard-page__saldo--negativo"
    };
    let ultimas = recentes(movs, DASHBOARD_RECENTES);
    let total = movs.len();

    view! {
        <div class="dashboard-page__cards">
            <div class="card">
                <p class="card__label">"Saldo Total"</p>
                <p class=saldo_class>{formatar_valor(saldo)}</p>
                <span class="card__icon">"💰"</span>
            </div>
            <div class="card">
                <p class="card__label">"Total Movimentações"</p>
                <p class="card__value">{total}</p>
                <span class="card__icon">"📈"</span>
            </div>
            <div class="card">
                <p class="card__label">"Status do Sistema"</p>
                <p class="card__value card__value--online">"Online"</p>
                <span class="card__icon">"✅"</span>
            </div>
        </div>

        <section class="card dashboard-page__recentes">
            <h2>"Últimas Movimentações"</h2>
            {if ultimas.is_empty() {
                view! {
                    <p class="dashboard-page__empty">"Nenhuma movimentação encontrada"</p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="dashboard-page__list">
                        {ultimas
                            .into_iter()
                            .map(|mov| view! { <MovimentacaoItem mov=mov/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
