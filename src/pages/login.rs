//! Login page: credential form with inline error and self-redirect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;
use crate::util::storage::Store;

/// Login page.
///
/// Redirects to the dashboard when rendered while already authenticated and
/// after a successful login; collaborator failures are shown inline and the
/// submit button is disabled while a call is outstanding.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let erro = RwSignal::new(String::new());
    let enviando = RwSignal::new(false);

    // Already logged in: go straight to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if enviando.get_untracked() {
            return;
        }
        enviando.set(true);
        erro.set(String::new());

        let store = store.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&store, &email.get_untracked(), &senha.get_untracked()).await {
                Ok(payload) => {
                    session.update(|s| s.apply_login(&store, &payload));
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => erro.set(err.user_message("Erro ao fazer login")),
            }
            enviando.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__brand">"🎯 ShotControl"</h1>
                <p class="login-page__subtitle">"Sistema de Gestão do Clube"</p>

                <Show when=move || !erro.get().is_empty()>
                    <div class="login-page__error">{move || erro.get()}</div>
                </Show>

                <form class="login-page__form" on:submit=on_submit>
                    <label class="login-page__label">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="admin@email.com"
                        />
                    </label>
                    <label class="login-page__label">
                        "Senha"
                        <input
                            type="password"
                            prop:value=move || senha.get()
                            on:input=move |ev| senha.set(event_target_value(&ev))
                            placeholder="••••••••"
                        />
                    </label>
                    <button
                        class="btn btn--primary login-page__submit"
                        type="submit"
                        prop:disabled=move || enviando.get()
                    >
                        {move || if enviando.get() { "Entrando..." } else { "Entrar no Sistema" }}
                    </button>
                </form>

                <p class="login-page__hint">"Use as credenciais do administrador"</p>
            </div>
        </div>
    }
}
