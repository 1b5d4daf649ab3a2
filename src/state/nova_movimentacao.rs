//! Controlled state and client-side validation for the creation form.

#[cfg(test)]
#[path = "nova_movimentacao_test.rs"]
mod nova_movimentacao_test;

use crate::net::types::{Categoria, FormaPagamento, NovaMovimentacaoRequest, Tipo};

/// Smallest accepted `valor`, in reais.
pub const VALOR_MIN: f64 = 5.0;
/// Largest accepted `valor`, in reais.
pub const VALOR_MAX: f64 = 10_000.0;

/// Client-side validation failures. These block submission before any
/// network call and are surfaced inline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("preencha o campo {0}")]
    CampoObrigatorio(&'static str),
    #[error("valor inválido")]
    ValorInvalido,
    #[error("o valor deve estar entre R$ 5,00 e R$ 10.000,00")]
    ValorForaDoIntervalo,
}

/// Form fields as typed by the user; `valor` stays raw text until validated.
#[derive(Clone, Debug, PartialEq)]
pub struct NovaMovimentacaoForm {
    pub descricao: String,
    pub valor: String,
    pub tipo: Tipo,
    pub categoria: Categoria,
    pub forma_pagamento: FormaPagamento,
    pub data: String,
}

impl Default for NovaMovimentacaoForm {
    fn default() -> Self {
        Self {
            descricao: String::new(),
            valor: String::new(),
            tipo: Tipo::Entrada,
            categoria: Categoria::Anuidades,
            forma_pagamento: FormaPagamento::Pix,
            data: crate::util::format::hoje(),
        }
    }
}

impl NovaMovimentacaoForm {
    /// Parsed `valor` for the preview card; `None` while unparseable.
    pub fn valor_numerico(&self) -> Option<f64> {
        self.valor.trim().parse().ok()
    }

    /// Validate the fields and build the request payload.
    pub fn validar(&self) -> Result<NovaMovimentacaoRequest, ValidationError> {
        if self.descricao.trim().is_empty() {
            return Err(ValidationError::CampoObrigatorio("descrição"));
        }
        if self.data.trim().is_empty() {
            return Err(ValidationError::CampoObrigatorio("data"));
        }
        if self.valor.trim().is_empty() {
            return Err(ValidationError::CampoObrigatorio("valor"));
        }
        let valor = self.valor_numerico().ok_or(ValidationError::ValorInvalido)?;
        if !(VALOR_MIN..=VALOR_MAX).contains(&valor) {
            return Err(ValidationError::ValorForaDoIntervalo);
        }
        Ok(NovaMovimentacaoRequest {
            descricao: self.descricao.trim().to_owned(),
            valor,
            tipo: self.tipo,
            categoria: self.categoria,
            forma_pagamento: self.forma_pagamento,
            data: self.data.clone(),
        })
    }
}
