//! Persistence module for writing and reading client datasets
//!
//! Clients are flattened into `ClientRow` and stored as CSV, one row per
//! client. Fields a variant does not carry are written as empty values.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

use crate::components::*;
use crate::error::{ClientGenError, Result};

/// Column order of every dataset file
pub const HEADER: [&str; 7] = [
    "name",
    "cpf",
    "birthDate",
    "motherName",
    "cnpj",
    "genre",
    "createdAt",
];

// ============================================================================
// Row Structure
// ============================================================================

/// Flat CSV shape shared by both client variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRow {
    pub name: String,
    pub cpf: Option<String>,
    pub birth_date: Option<String>,
    pub mother_name: Option<String>,
    pub cnpj: Option<String>,
    pub genre: Option<Genre>,
    pub created_at: String,
}

fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(field: &str, value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| format!("{field} {value:?} is not a timestamp: {e}"))
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        match client {
            Client::Person(p) => ClientRow {
                name: p.name.clone(),
                cpf: Some(p.cpf.clone()),
                birth_date: Some(format_timestamp(p.birth_date)),
                mother_name: Some(p.mother_name.clone()),
                cnpj: None,
                genre: Some(p.genre),
                created_at: format_timestamp(p.created_at),
            },
            Client::Company(c) => ClientRow {
                name: c.name.clone(),
                cpf: None,
                birth_date: None,
                mother_name: None,
                cnpj: Some(c.cnpj.clone()),
                genre: None,
                created_at: format_timestamp(c.created_at),
            },
        }
    }
}

impl TryFrom<ClientRow> for Client {
    type Error = String;

    fn try_from(row: ClientRow) -> std::result::Result<Self, Self::Error> {
        let created_at = parse_timestamp("createdAt", &row.created_at)?;

        // cpf or cnpj decides the variant; text fields may be empty
        match (row.cpf, row.cnpj) {
            (Some(cpf), None) => {
                let birth_date = row.birth_date.ok_or("person row without birthDate")?;
                let genre = row.genre.ok_or("person row without genre")?;
                Ok(Client::Person(PersonClient {
                    name: row.name,
                    cpf,
                    birth_date: parse_timestamp("birthDate", &birth_date)?,
                    mother_name: row.mother_name.unwrap_or_default(),
                    genre,
                    created_at,
                }))
            }
            (None, Some(cnpj)) => {
                if row.birth_date.is_some() || row.mother_name.is_some() || row.genre.is_some() {
                    return Err("company row carries person fields".to_string());
                }
                Ok(Client::Company(CompanyClient {
                    name: row.name,
                    cnpj,
                    created_at,
                }))
            }
            (Some(_), Some(_)) => Err("row has both cpf and cnpj".to_string()),
            (None, None) => Err("row has neither cpf nor cnpj".to_string()),
        }
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Shuffle `clients` in place and write them to `path` as CSV.
///
/// Missing parent directories are created; an existing file is replaced.
pub fn write_clients<R: Rng + ?Sized>(
    clients: &mut [Client],
    path: impl AsRef<Path>,
    rng: &mut R,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ClientGenError::io(parent, e))?;
    }

    clients.shuffle(rng);
    debug!("Shuffled {} clients", clients.len());

    let file = File::create(path).map_err(|e| ClientGenError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(HEADER)?;
    for client in clients.iter() {
        writer.serialize(ClientRow::from(client))?;
    }
    writer.flush().map_err(|e| ClientGenError::io(path, e))?;

    info!("Wrote {} clients to {}", clients.len(), path.display());
    Ok(())
}

// ============================================================================
// Reader
// ============================================================================

/// Load a dataset written by [`write_clients`].
pub fn read_clients(path: impl AsRef<Path>) -> Result<Vec<Client>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ClientGenError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let headers = reader.headers()?;
    if !headers.iter().eq(HEADER) {
        return Err(ClientGenError::InvalidRow {
            row: 0,
            reason: format!("unexpected header {:?}", headers.iter().collect::<Vec<_>>()),
        });
    }

    let mut clients = Vec::new();
    for (index, row) in reader.deserialize::<ClientRow>().enumerate() {
        let client = Client::try_from(row?).map_err(|reason| ClientGenError::InvalidRow {
            row: index + 1,
            reason,
        })?;
        clients.push(client);
    }

    debug!("Read {} clients from {}", clients.len(), path.display());
    Ok(clients)
}
