//! Creation form with live preview and client-side validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::net::api::{self, ApiError};
use crate::net::types::{Categoria, FormaPagamento, Tipo};
use crate::state::nova_movimentacao::NovaMovimentacaoForm;
use crate::state::session::SessionState;
use crate::util::format::{formatar_data, formatar_valor};
use crate::util::storage::Store;

/// New-transaction page.
///
/// Required-field and range validation happens before any network call; on
/// success the page navigates back to the list, on collaborator failure the
/// message is shown inline and the form keeps its values.
#[component]
pub fn NovaMovimentacaoPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(NovaMovimentacaoForm::default());
    let erro = RwSignal::new(String::new());
    let enviando = RwSignal::new(false);

    let voltar = {
        let navigate = navigate.clone();
        move |_| navigate("/movimentacoes", NavigateOptions::default())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if enviando.get_untracked() {
            return;
        }
        erro.set(String::new());

        let pedido = match form.get_untracked().validar() {
            Ok(pedido) => pedido,
            Err(err) => {
                erro.set(err.to_string());
                return;
            }
        };

        enviando.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_movimentacao(&store, &pedido).await {
                Ok(_) => navigate("/movimentacoes", NavigateOptions::default()),
                Err(ApiError::SessionExpired) => session.update(|s| s.user = None),
                Err(err) => erro.set(err.user_message("Erro ao criar movimentação")),
            }
            enviando.set(false);
        });
    };

    view! {
        <Layout>
            <div class="nova-page">
                <header class="nova-page__header">
                    <div>
                        <h1>"Nova Movimentação"</h1>
                        <p class="nova-page__subtitle">"Registre uma nova entrada ou saída"</p>
                    </div>
                    <button class="nova-page__voltar" on:click=voltar>
                        "← Voltar"
                    </button>
                </header>

                <Preview form=form/>

                <div class="card nova-page__form-card">
                    <Show when=move || !erro.get().is_empty()>
                        <div class="nova-page__error">{move || erro.get()}</div>
                    </Show>

                    <form class="nova-page__form" on:submit=on_submit>
                        <div class="nova-page__row">
                            <label class="nova-page__label">
                                "Tipo *"
                                <select on:change=move |ev| {
                                    form.update(|f| {
                                        f.tipo = Tipo::parse(&event_target_value(&ev))
                                            .unwrap_or(f.tipo);
                                    });
                                }>
                                    <option value="entrada">"💚 Entrada"</option>
                                    <option value="saida">"❤️ Saída"</option>
                                </select>
                            </label>

                            <label class="nova-page__label">
                                "Valor (R$) *"
                                <input
                                    type="number"
                                    step="0.01"
                                    min="5"
                                    max="10000"
                                    prop:value=move || form.get().valor
                                    on:input=move |ev| {
                                        form.update(|f| f.valor = event_target_value(&ev));
                                    }
                                    placeholder="0,00"
                                />
                            </label>
                        </div>

                        <label class="nova-page__label">
                            "Descrição *"
                            <input
                                type="text"
                                prop:value=move || form.get().descricao
                                on:input=move |ev| {
                                    form.update(|f| f.descricao = event_target_value(&ev));
                                }
                                placeholder="Ex: Anuidade - João Silva"
                            />
                        </label>

                        <div class="nova-page__row">
                            <label class="nova-page__label">
                                "Categoria *"
                                <select on:change=move |ev| {
                                    form.update(|f| {
                                        f.categoria = Categoria::parse(&event_target_value(&ev))
                                            .unwrap_or(f.categoria);
                                    });
                                }>
                                    {Categoria::ALL
                                        .into_iter()
                                        .map(|cat| {
                                            view! {
                                                <option value=cat.as_str()>{cat.label()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>

                            <label class="nova-page__label">
                                "Forma de Pagamento *"
                                <select on:change=move |ev| {
                                    form.update(|f| {
                                        f.forma_pagamento = FormaPagamento::parse(
                                                &event_target_value(&ev),
                                            )
                                            .unwrap_or(f.forma_pagamento);
                                    });
                                }>
                                    {FormaPagamento::ALL
                                        .into_iter()
                                        .map(|fp| {
                                            view! {
                                                <option value=fp.as_str()>{fp.label()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                        </div>

                        <label class="nova-page__label">
                            "Data *"
                            <input
                                type="date"
                                prop:value=move || form.get().data
                                on:input=move |ev| {
                                    form.update(|f| f.data = event_target_value(&ev));
                                }
                            />
                        </label>

                        <button
                            class="btn btn--primary nova-page__submit"
                            type="submit"
                            prop:disabled=move || enviando.get()
                        >
                            {move || if enviando.get() { "Salvando..." } else { "Salvar Movimentação" }}
                        </button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}

/// Live preview rendered from the current form values.
#[component]
fn Preview(form: RwSignal<NovaMovimentacaoForm>) -> impl IntoView {
    let dot_class = move || {
        if form.get().tipo == Tipo::Entrada {
            "mov-item__dot mov-item__dot--entrada"
        } else {
            "mov-item__dot mov-item__dot--saida"
        }
    };
    let valor_class = move || {
        if form.get().tipo == Tipo::Entrada {
            "mov-item__valor mov-item__valor--entrada"
        } else {
            "mov-item__valor mov-item__valor--saida"
        }
    };
    let descricao = move || {
        let f = form.get();
        if f.descricao.is_empty() {
            "Descrição da movimentação".to_owned()
        } else {
            f.descricao
        }
    };
    let meta = move || {
        let f = form.get();
        let data = if f.data.is_empty() {
            "Data".to_owned()
        } else {
            formatar_data(&f.data)
        };
        format!("{} • {} • {}", f.categoria.label(), data, f.forma_pagamento.label())
    };
    let valor = move || {
        let f = form.get();
        format!(
            "{}{}",
            if f.tipo == Tipo::Entrada { "+" } else { "-" },
            formatar_valor(f.valor_numerico().unwrap_or(0.0))
        )
    };
    let tipo = move || form.get().tipo.label();

    view! {
        <div class="card nova-page__preview">
            <h2>"Preview"</h2>
            <div class="mov-item">
                <span class=dot_class></span>
                <div class="mov-item__info">
                    <p class="mov-item__descricao">{descricao}</p>
                    <p class="mov-item__meta">{meta}</p>
                </div>
                <div class="mov-item__right">
                    <p class=valor_class>{valor}</p>
                    <p class="mov-item__tipo">{tipo}</p>
                </div>
            </div>
        </div>
    }
}
