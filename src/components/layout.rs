//! Application shell: sidebar navigation, current user block, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::storage::Store;

const MENU: [(&str, &str, &str); 3] = [
    ("Dashboard", "/dashboard", "📊"),
    ("Movimentações", "/movimentacoes", "💰"),
    ("Nova Movimentação", "/movimentacoes/nova", "➕"),
];

/// Sidebar layout wrapping every protected page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Closed by default so small screens start with the content visible.
    let sidebar_open = RwSignal::new(false);

    let user_nome = move || {
        session
            .get()
            .user
            .map(|u| u.nome)
            .unwrap_or_default()
    };
    let user_email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.update(|s| s.logout(&store));
        navigate("/login", NavigateOptions::default());
    };

    let sidebar_class = move || {
        if sidebar_open.get() {
            "layout__sidebar layout__sidebar--open"
        } else {
            "layout__sidebar"
        }
    };

    view! {
        <div class="layout">
            <Show when=move || sidebar_open.get()>
                <div class="layout__overlay" on:click=move |_| sidebar_open.set(false)></div>
            </Show>

            <aside class=sidebar_class>
                <div class="layout__brand">
                    <h1 class="layout__title">"🎯 ShotControl"</h1>
                    <button class="layout__close" on:click=move |_| sidebar_open.set(false)>
                        "✕"
                    </button>
                </div>

                <nav class="layout__nav">
                    {MENU
                        .into_iter()
                        .map(|(label, path, icon)| {
                            let item_class = move || {
                                if pathname.get() == path {
                                    "layout__nav-item layout__nav-item--active"
                                } else {
                                    "layout__nav-item"
                                }
                            };
                            view! {
                                <a
                                    class=item_class
                                    href=path
                                    on:click=move |_| sidebar_open.set(false)
                                >
                                    <span class="layout__nav-icon">{icon}</span>
                                    <span class="layout__nav-label">{label}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="layout__user">
                    <p class="layout__user-name">{user_nome}</p>
                    <p class="layout__user-email">{user_email}</p>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </aside>

            <div class="layout__main">
                <header class="layout__topbar">
                    <button class="layout__menu" on:click=move |_| sidebar_open.set(true)>
                        "☰"
                    </button>
                    <h1 class="layout__topbar-title">"ShotControl"</h1>
                </header>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
