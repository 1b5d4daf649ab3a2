//! Transaction history page with local search, filters, and totals.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::components::movimentacao_item::MovimentacaoItem;
use crate::net::api::{self, ApiError};
use crate::net::types::{Categoria, Movimentacao, Tipo};
use crate::state::movimentacoes::{Filtros, calcular_totais};
use crate::state::session::SessionState;
use crate::util::format::formatar_valor;
use crate::util::storage::Store;

/// Transaction list page.
///
/// The collection is fetched once on mount; search, direction, and category
/// filters plus the totals are applied locally with no further round trips.
#[component]
pub fn MovimentacoesPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let itens = LocalResource::new(move || {
        let store = store.clone();
        async move { api::fetch_movimentacoes(&store).await }
    });

    let filtros = RwSignal::new(Filtros::default());

    Effect::new(move || {
        if let Some(Err(ApiError::SessionExpired)) = itens.get() {
            session.update(|s| s.user = None);
        }
    });

    let on_nova = move |_| navigate("/movimentacoes/nova", NavigateOptions::default());

    view! {
        <Layout>
            <div class="movimentacoes-page">
                <header class="movimentacoes-page__header">
                    <div>
                        <h1>"Movimentações"</h1>
                        <p class="movimentacoes-page__subtitle">
                            "Histórico completo de entradas e saídas"
                        </p>
                    </div>
                    <button class="btn btn--primary" on:click=on_nova>
                        "➕ Nova Movimentação"
                    </button>
                </header>

                <FiltrosCard filtros=filtros/>

                <Suspense fallback=move || {
                    view! {
                        <p class="movimentacoes-page__loading">"Carregando movimentações..."</p>
                    }
                }>
                    {move || {
                        itens
                            .get()
                            .map(|result| match result {
                                Ok(todas) => {
                                    let filtradas = filtros.get().aplicar(&todas);
                                    render_lista(&filtradas).into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <div class="movimentacoes-page__error">
                                            {err.user_message("Erro ao carregar movimentações")}
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

/// Search box plus direction and category selects.
#[component]
fn FiltrosCard(filtros: RwSignal<Filtros>) -> impl IntoView {
    view! {
        <div class="card movimentacoes-page__filtros">
            <h2>"Filtros"</h2>
            <div class="movimentacoes-page__filtros-grid">
                <label class="movimentacoes-page__filtro">
                    "Pesquisar"
                    <input
                        type="text"
                        prop:value=move || filtros.get().busca
                        on:input=move |ev| {
                            filtros.update(|f| f.busca = event_target_value(&ev));
                        }
                        placeholder="Descrição ou responsável..."
                    />
                </label>

                <label class="movimentacoes-page__filtro">
                    "Tipo"
                    <select on:change=move |ev| {
                        filtros.update(|f| f.tipo = Tipo::parse(&event_target_value(&ev)));
                    }>
                        <option value="todos">"Todos"</option>
                        <option value="entrada">"Entradas"</option>
                        <option value="saida">"Saídas"</option>
                    </select>
                </label>

                <label class="movimentacoes-page__filtro">
                    "Categoria"
                    <select on:change=move |ev| {
                        filtros
                            .update(|f| f.categoria = Categoria::parse(&event_target_value(&ev)));
                    }>
                        <option value="todos">"Todas"</option>
                        {Categoria::ALL
                            .into_iter()
                            .map(|cat| {
                                view! { <option value=cat.as_str()>{cat.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
        </div>
    }
}

fn render_lista(filtradas: &[Movimentacao]) -> impl IntoView {
    let totais = calcular_totais(filtradas);
    let saldo_class = if totais.saldo >= 0.0 {
        "card__value card__value--entrada"
    } else {
        "card__value card__value--saida"
    };
    let titulo = format!("Movimentações ({})", filtradas.len());
    let linhas = filtradas.to_vec();

    view! {
        <div class="movimentacoes-page__totais">
            <div class="card">
                <p class="card__label">"Total Entradas"</p>
                <p class="card__value card__value--entrada">{formatar_valor(totais.entradas)}</p>
                <span class="card__icon">"📈"</span>
            </div>
            <div class="card">
                <p class="card__label">"Total Saídas"</p>
                <p class="card__value card__value--saida">{formatar_valor(totais.saidas)}</p>
                <span class="card__icon">"📉"</span>
            </div>
            <div class="card">
                <p class="card__label">"Saldo Filtrado"</p>
                <p class=saldo_class>{formatar_valor(totais.saldo)}</p>
                <span class="card__icon">"💰"</span>
            </div>
        </div>

        <section class="card movimentacoes-page__lista">
            <h2>{titulo}</h2>
            {if linhas.is_empty() {
                view! {
                    <div class="movimentacoes-page__empty">
                        <p>"Nenhuma movimentação encontrada"</p>
                        <p class="movimentacoes-page__empty-hint">
                            "Tente ajustar os filtros ou adicionar novas movimentações"
                        </p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="movimentacoes-page__linhas">
                        {linhas
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
