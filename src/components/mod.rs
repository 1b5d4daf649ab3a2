//! Reusable UI components.

pub mod layout;
pub mod movimentacao_item;
