//! Root application component with routing, contexts, and the route guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, movimentacoes::MovimentacoesPage,
    nova_movimentacao::NovaMovimentacaoPage,
};
use crate::state::session::{self, GuardDecision, SessionState};
use crate::util::storage::Store;

/// Root application component.
///
/// Hydrates the session from durable storage before the first render,
/// provides the storage handle and session signal as contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = Store::for_target();
    let session = RwSignal::new(initial_session(&store));

    provide_context(store);
    provide_context(session);

    view! {
        <Title text="ShotControl"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("movimentacoes")
                    view=|| view! { <ProtectedRoute><MovimentacoesPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("movimentacoes"), StaticSegment("nova"))
                    view=|| view! { <ProtectedRoute><NovaMovimentacaoPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}

/// Session state for the very first render: hydrated synchronously in the
/// browser, left pending elsewhere so the guard shows its placeholder.
fn initial_session(store: &Store) -> SessionState {
    #[cfg(feature = "csr")]
    {
        SessionState::initialize(store)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        SessionState::default()
    }
}

/// Gate for protected views: placeholder while hydration is pending, the
/// content when authenticated, redirect to `/login` otherwise.
///
/// The decision is re-evaluated on every render, so a forced teardown after
/// a 401 is reflected on the next render without a reload.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect outside the render pass, replacing history so back-navigation
    // cannot loop into the protected view.
    Effect::new(move || {
        if session::guard(&session.get()) == GuardDecision::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match session::guard(&session.get()) {
        GuardDecision::Loading => {
            view! { <div class="guard__loading">"Carregando..."</div> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
        GuardDecision::RedirectToLogin => ().into_any(),
    }
}
