//! Company Generator
//!
//! Builds one organizational client. Names without a recognized legal
//! form get one appended.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

use super::years_before;
use crate::components::CompanyClient;
use crate::provider::DataProvider;

/// Legal-entity markers; a company name must contain at least one
pub const LEGAL_SUFFIXES: &[&str] = &["Ltda.", "S.A.", "ME", "EIRELI"];

/// How far back a company's `created_at` may go
pub const COMPANY_HISTORY_YEARS: i64 = 3;

/// Append a random legal suffix unless one already occurs anywhere in `name`.
pub fn with_legal_suffix<R: Rng + ?Sized>(rng: &mut R, name: String) -> String {
    if LEGAL_SUFFIXES.iter().any(|suffix| name.contains(suffix)) {
        return name;
    }
    let suffix = LEGAL_SUFFIXES.choose(rng).copied().unwrap_or("Ltda.");
    format!("{name} {suffix}")
}

/// Generate a single company client as of `now`.
pub fn generate_company<P, R>(provider: &P, rng: &mut R, now: NaiveDateTime) -> CompanyClient
where
    P: DataProvider,
    R: Rng + ?Sized,
{
    let raw_name = provider.company_name(rng);
    let name = with_legal_suffix(rng, raw_name);
    let cnpj = provider.organization_tax_id(rng);
    let created_at = provider.timestamp_between(rng, years_before(now, COMPANY_HISTORY_YEARS), now);

    CompanyClient {
        name,
        cnpj,
        created_at,
    }
}
