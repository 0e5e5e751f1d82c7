//! Mock Client Dataset Generator
//!
//! Synthesizes Brazilian individual and company clients, mixes them at a
//! fixed people-per-company ratio and writes the shuffled set to CSV.

pub mod components;
pub mod config;
pub mod documents;
pub mod error;
pub mod generators;
pub mod names;
pub mod persistence;
pub mod population;
pub mod provider;

pub use components::*;
pub use config::GenerationConfig;
pub use error::{ClientGenError, Result};
pub use persistence::{read_clients, write_clients, ClientRow};
pub use population::{generate_clients, PopulationBuilder};
pub use provider::{BrazilianProvider, DataProvider};
