//! topic-scores library: topic score aggregation and small collaborator-injection exercises.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
