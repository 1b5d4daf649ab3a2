//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, list filtering, the creation form)
//! so components depend on small focused models that stay unit-testable
//! without a browser.

pub mod movimentacoes;
pub mod nova_movimentacao;
pub mod session;
