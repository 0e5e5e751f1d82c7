//! Client record types
//!
//! A client is either an individual (`PersonClient`) or an organization
//! (`CompanyClient`). The flat CSV shape lives in `persistence`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp rendering used for every date column (naive, whole seconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ============================================================================
// Genre
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Masculino,
    Feminino,
    Desconhecido,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::Masculino, Genre::Feminino, Genre::Desconhecido];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Masculino => "Masculino",
            Genre::Feminino => "Feminino",
            Genre::Desconhecido => "Desconhecido",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Client Records
// ============================================================================

/// Individual client. Name fields are already stripped of honorifics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonClient {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDateTime,
    pub mother_name: String,
    pub genre: Genre,
    pub created_at: NaiveDateTime,
}

/// Organizational client. The name always carries a legal-entity suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyClient {
    pub name: String,
    pub cnpj: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Client {
    Person(PersonClient),
    Company(CompanyClient),
}

impl Client {
    pub fn is_person(&self) -> bool {
        matches!(self, Client::Person(_))
    }

    pub fn is_company(&self) -> bool {
        matches!(self, Client::Company(_))
    }
}

impl From<PersonClient> for Client {
    fn from(person: PersonClient) -> Self {
        Client::Person(person)
    }
}

impl From<CompanyClient> for Client {
    fn from(company: CompanyClient) -> Self {
        Client::Company(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(8, 30, 0).unwrap()
    }

    #[test]
    fn test_client_variant_checks() {
        let company = Client::from(CompanyClient {
            name: "Souza Ltda.".to_string(),
            cnpj: "11.222.333/0001-81".to_string(),
            created_at: at(2025, 3, 1),
        });
        assert!(company.is_company());
        assert!(!company.is_person());
    }

    #[test]
    fn test_genre_labels() {
        let labels: Vec<String> = Genre::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(labels, ["Masculino", "Feminino", "Desconhecido"]);
    }

    #[test]
    fn test_timestamp_format_has_no_fraction() {
        assert_eq!(at(1990, 1, 2).format(TIMESTAMP_FORMAT).to_string(), "1990-01-02T08:30:00");
    }
}
