//! Transaction row shared by the dashboard and the list page.

use leptos::prelude::*;

use crate::net::types::{Movimentacao, Tipo};
use crate::util::format::{formatar_data, formatar_valor};

/// A single transaction entry: direction dot, description, metadata line,
/// and the signed amount.
#[component]
pub fn MovimentacaoItem(mov: Movimentacao) -> impl IntoView {
    let entrada = mov.tipo == Tipo::Entrada;
    let dot_class = if entrada {
        "mov-item__dot mov-item__dot--entrada"
    } else {
        "mov-item__dot mov-item__dot--saida"
    };
    let valor_class = if entrada {
        "mov-item__valor mov-item__valor--entrada"
    } else {
        "mov-item__valor mov-item__valor--saida"
    };

    let valor = format!(
        "{}{}",
        if entrada { "+" } else { "-" },
        formatar_valor(mov.valor)
    );
    let meta = format!(
        "{} • {} • {} • por {}",
        mov.categoria.label(),
        formatar_data(&mov.data),
        mov.forma_pagamento.label(),
        mov.responsavel
    );
    let tipo = mov.tipo.label();

    view! {
        <div class="mov-item">
            <span class=dot_class></span>
            <div class="mov-item__info">
                <p class="mov-item__descricao">{mov.descricao}</p>
                <p class="mov-item__meta">{meta}</p>
            </div>
            <div class="mov-item__right">
                <p class=valor_class>{valor}</p>
                <p class="mov-item__tipo">{tipo}</p>
            </div>
        </div>
    }
}
