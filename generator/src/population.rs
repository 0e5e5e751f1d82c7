//! Population Builder - mixes people and companies by ratio

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{debug, info};

use crate::components::Client;
use crate::config::GenerationConfig;
use crate::generators::{self, generate_company, generate_person};
use crate::provider::DataProvider;

pub struct PopulationBuilder<P> {
    provider: P,
    now: NaiveDateTime,
}

impl<P: DataProvider> PopulationBuilder<P> {
    /// Builder anchored at the current instant
    pub fn new(provider: P) -> Self {
        Self::at(provider, generators::generation_instant())
    }

    /// Builder whose date windows are measured from `now`
    pub fn at(provider: P, now: NaiveDateTime) -> Self {
        Self { provider, now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Generate all people followed by all companies.
    pub fn build<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> Vec<Client> {
        let people = config.people_count();
        let companies = config.company_count();
        let mut clients: Vec<Client> = Vec::with_capacity(config.total_count());

        debug!("Generating {} person clients...", people);
        for _ in 0..people {
            clients.push(generate_person(&self.provider, rng, self.now).into());
        }

        debug!("Generating {} company clients...", companies);
        for _ in 0..companies {
            clients.push(generate_company(&self.provider, rng, self.now).into());
        }

        info!(
            "Population built: {} people, {} companies (ratio {})",
            people,
            companies,
            config.ratio()
        );
        clients
    }
}

/// Generate `population_size` people plus `max(1, population_size / ratio)` companies.
pub fn generate_clients<P, R>(
    provider: P,
    population_size: u32,
    ratio: u32,
    rng: &mut R,
) -> crate::error::Result<Vec<Client>>
where
    P: DataProvider,
    R: Rng + ?Sized,
{
    let config = GenerationConfig::new(population_size, ratio)?;
    Ok(PopulationBuilder::new(provider).build(&config, rng))
}
