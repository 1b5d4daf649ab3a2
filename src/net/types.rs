//! Typed payload schemas for the ShotControl backend.
//!
//! Every collaborator payload is parsed into these records at the network
//! boundary; malformed bodies surface as decode errors instead of loose
//! JSON flowing into the pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user identity, returned at login and persisted durably.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

/// Transaction direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tipo {
    Entrada,
    Saida,
}

impl Tipo {
    /// Wire value, also used for `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Tipo::Entrada => "entrada",
            Tipo::Saida => "saida",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Tipo::Entrada => "Entrada",
            Tipo::Saida => "Saída",
        }
    }

    /// Parse a wire/select value; anything else (e.g. `"todos"`) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entrada" => Some(Tipo::Entrada),
            "saida" => Some(Tipo::Saida),
            _ => None,
        }
    }
}

/// Transaction category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Categoria {
    Anuidades,
    Provas,
    #[serde(rename = "acessórios")]
    Acessorios,
    Despesas,
}

impl Categoria {
    /// All categories, in form/filter display order.
    pub const ALL: [Categoria; 4] = [
        Categoria::Anuidades,
        Categoria::Provas,
        Categoria::Acessorios,
        Categoria::Despesas,
    ];

    /// Wire value, also used for `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Categoria::Anuidades => "anuidades",
            Categoria::Provas => "provas",
            Categoria::Acessorios => "acessórios",
            Categoria::Despesas => "despesas",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Categoria::Anuidades => "Anuidades",
            Categoria::Provas => "Provas",
            Categoria::Acessorios => "Acessórios",
            Categoria::Despesas => "Despesas",
        }
    }

    /// Parse a wire/select value; anything else (e.g. `"todos"`) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Payment method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormaPagamento {
    Pix,
    Dinheiro,
    Cartao,
}

impl FormaPagamento {
    /// All payment methods, in form display order.
    pub const ALL: [FormaPagamento; 3] = [
        FormaPagamento::Pix,
        FormaPagamento::Dinheiro,
        FormaPagamento::Cartao,
    ];

    /// Wire value, also used for `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            FormaPagamento::Pix => "pix",
            FormaPagamento::Dinheiro => "dinheiro",
            FormaPagamento::Cartao => "cartao",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            FormaPagamento::Pix => "Pix",
            FormaPagamento::Dinheiro => "Dinheiro",
            FormaPagamento::Cartao => "Cartão",
        }
    }

    /// Parse a wire/select value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// A single dated financial entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movimentacao {
    pub id: i64,
    pub descricao: String,
    pub valor: f64,
    pub tipo: Tipo,
    pub categoria: Categoria,
    pub forma_pagamento: FormaPagamento,
    pub data: String,
    pub responsavel: String,
}

/// Successful `POST /auth/login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `GET /movimentacoes/saldo` payload.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Saldo {
    pub saldo: f64,
}

/// Body for `POST /movimentacoes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NovaMovimentacaoRequest {
    pub descricao: String,
    pub valor: f64,
    pub tipo: Tipo,
    pub categoria: Categoria,
    pub forma_pagamento: FormaPagamento,
    pub data: String,
}
