//! Person Generator
//!
//! Builds one individual client with a cleaned name, CPF and
//! demographic dates.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

use super::years_before;
use crate::components::{Genre, PersonClient};
use crate::names::clean_name;
use crate::provider::DataProvider;

/// Oldest generated client, in years
pub const MAX_AGE_YEARS: i64 = 80;

/// Youngest generated client, in years
pub const MIN_AGE_YEARS: i64 = 18;

/// How far back a person's `created_at` may go
pub const PERSON_HISTORY_YEARS: i64 = 2;

/// Generate a single individual client as of `now`.
pub fn generate_person<P, R>(provider: &P, rng: &mut R, now: NaiveDateTime) -> PersonClient
where
    P: DataProvider,
    R: Rng + ?Sized,
{
    let genre = *Genre::ALL.choose(rng).unwrap_or(&Genre::Desconhecido);

    let raw_name = match genre {
        Genre::Masculino => provider.person_name_male(rng),
        Genre::Feminino => provider.person_name_female(rng),
        Genre::Desconhecido => provider.person_name_any(rng),
    };

    let cpf = provider.individual_tax_id(rng);
    let birth_date = provider.timestamp_between(
        rng,
        years_before(now, MAX_AGE_YEARS),
        years_before(now, MIN_AGE_YEARS),
    );
    let mother_name = clean_name(&provider.person_name_female(rng));
    let created_at = provider.timestamp_between(rng, years_before(now, PERSON_HISTORY_YEARS), now);

    PersonClient {
        name: clean_name(&raw_name),
        cpf,
        birth_date,
        mother_name,
        genre,
        created_at,
    }
}
