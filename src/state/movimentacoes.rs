//! Local filtering and aggregation over the fetched transaction list.
//!
//! Everything here is synchronous and operates on the in-memory collection;
//! filter changes never trigger a server round trip.

#[cfg(test)]
#[path = "movimentacoes_test.rs"]
mod movimentacoes_test;

use crate::net::types::{Categoria, Movimentacao, Tipo};

/// How many transactions the dashboard shows.
pub const DASHBOARD_RECENTES: usize = 5;

/// Filter criteria applied client-side to the fetched list.
///
/// Defaults mean "no constraint": an empty search plus `None` for both
/// enumerated filters yields the full collection unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtros {
    pub busca: String,
    pub tipo: Option<Tipo>,
    pub categoria: Option<Categoria>,
}

impl Filtros {
    /// Apply the filters: case-insensitive substring match on description
    /// and responsible party, equality on direction and category.
    pub fn aplicar(&self, itens: &[Movimentacao]) -> Vec<Movimentacao> {
        let busca = self.busca.to_lowercase();
        itens
            .iter()
            .filter(|mov| {
                (busca.is_empty()
                    || mov.descricao.to_lowercase().contains(&busca)
                    || mov.responsavel.to_lowercase().contains(&busca))
                    && self.tipo.is_none_or(|tipo| mov.tipo == tipo)
                    && self.categoria.is_none_or(|cat| mov.categoria == cat)
            })
            .cloned()
            .collect()
    }
}

/// Totals over a (possibly filtered) transaction set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totais {
    pub entradas: f64,
    pub saidas: f64,
    pub saldo: f64,
}

/// Sum `valor` by direction; `saldo` is entradas minus saídas.
pub fn calcular_totais(itens: &[Movimentacao]) -> Totais {
    let mut totais = Totais::default();
    for mov in itens {
        match mov.tipo {
            Tipo::Entrada => totais.entradas += mov.valor,
            Tipo::Saida => totais.saidas += mov.valor,
        }
    }
    totais.saldo = totais.entradas - totais.saidas;
    totais
}

/// First `n` transactions in the order the backend returned them.
pub fn recentes(itens: &[Movimentacao], n: usize) -> Vec<Movimentacao> {
    itens.iter().take(n).cloned().collect()
}
