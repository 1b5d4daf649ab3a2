//! Network layer: typed collaborator schemas and the REST client adapter.

pub mod api;
pub mod types;
