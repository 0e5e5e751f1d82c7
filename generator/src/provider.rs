//! Synthetic data provider
//!
//! Source of raw locale-shaped values (names, taxpayer ids, company names,
//! timestamps). Record generators only talk to this trait, so tests can
//! swap in canned values.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::{documents, names};

pub trait DataProvider {
    fn person_name_male<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn person_name_female<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Name with no gender constraint
    fn person_name_any<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Formatted CPF
    fn individual_tax_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Formatted CNPJ
    fn organization_tax_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Instant in `[start, end]`. Returns `start` when the window is empty.
    fn timestamp_between<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> NaiveDateTime;
}

/// Brazilian Portuguese provider backed by the built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianProvider;

impl BrazilianProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for BrazilianProvider {
    fn person_name_male<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        names::random_full_name(rng, true)
    }

    fn person_name_female<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        names::random_full_name(rng, false)
    }

    fn person_name_any<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let is_male = rng.gen::<bool>();
        names::random_full_name(rng, is_male)
    }

    fn individual_tax_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        documents::random_cpf(rng)
    }

    fn organization_tax_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        documents::random_cnpj(rng)
    }

    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        names::random_company_name(rng)
    }

    fn timestamp_between<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> NaiveDateTime {
        let span = (end - start).num_seconds();
        if span <= 0 {
            return start;
        }
        start + Duration::seconds(rng.gen_range(0..=span))
    }
}

/// Provider returning the same values on every call.
///
/// Timestamps are the midpoint of the requested window.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct FixedProvider {
    pub male_name: String,
    pub female_name: String,
    pub any_name: String,
    pub cpf: String,
    pub cnpj: String,
    pub company: String,
}

#[cfg(test)]
impl Default for FixedProvider {
    fn default() -> Self {
        Self {
            male_name: "Sr. Carlos Silva".to_string(),
            female_name: "Dra. Maria Souza".to_string(),
            any_name: "Ana Costa".to_string(),
            cpf: "111.444.777-35".to_string(),
            cnpj: "11.222.333/0001-81".to_string(),
            company: "Almeida e Rocha".to_string(),
        }
    }
}

#[cfg(test)]
impl DataProvider for FixedProvider {
    fn person_name_male<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.male_name.clone()
    }

    fn person_name_female<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.female_name.clone()
    }

    fn person_name_any<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.any_name.clone()
    }

    fn individual_tax_id<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.cpf.clone()
    }

    fn organization_tax_id<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.cnpj.clone()
    }

    fn company_name<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.company.clone()
    }

    fn timestamp_between<R: Rng + ?Sized>(
        &self,
        _rng: &mut R,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> NaiveDateTime {
        start + (end - start) / 2
    }
}
