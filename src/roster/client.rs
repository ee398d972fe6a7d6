//! GraphQL client for the HR roster endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::RosterSettings;
use crate::error::{SnapshotError, SnapshotResult};
use crate::models::EmployeeRecord;

use super::{RosterPage, RosterSource};

/// GraphQL operation name of the roster query.
pub const ROSTER_OPERATION_NAME: &str = "DaftarPegawai";

/// The roster query, selecting every field the snapshot rules read.
pub const ROSTER_QUERY: &str = r#"query DaftarPegawai(
	$skip: Int
	$take: Int
	$orderBy: PegawaiOrderByInput
	$filter: PegawaiFilterInput
) {
	daftarPegawai(skip: $skip, take: $take, orderBy: $orderBy, filter: $filter) {
		count
		pegawai {
			id
			nama
			statusPegawai { id nama }
			jabatanSaatIni {
				id
				level {
					id
					nama
					ssoRole { code description }
					jabatan { id nama }
				}
				sublevel { id nama }
				grade { id remun }
			}
			unitKerjaSaatIni {
				id
				unitKerja { id nama }
				bagian { id nama }
				subbag { id nama }
				posisi { id nama }
				grade { id remun }
				isSecondary
			}
			jenisJabatan
			unitGaji { id nama }
			unitRemun { id nama }
			riwayatPangkat { golonganRuang }
		}
	}
}
"#;

const USER_AGENT: &str = concat!("position-snapshot/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<RosterData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RosterData {
    #[serde(rename = "daftarPegawai")]
    roster: Option<RosterPayload>,
}

#[derive(Debug, Deserialize)]
struct RosterPayload {
    #[serde(default)]
    count: Option<u64>,
    #[serde(rename = "pegawai", default)]
    employees: Option<Vec<EmployeeRecord>>,
}

/// Fetches roster pages from the HR GraphQL API.
#[derive(Debug, Clone)]
pub struct HrRosterClient {
    http: Client,
    settings: RosterSettings,
}

impl HrRosterClient {
    /// Builds a client for the configured endpoint.
    pub fn new(settings: RosterSettings) -> SnapshotResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SnapshotError::Transport {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { http, settings })
    }

    /// Builds the JSON request body for the page at `skip`.
    pub fn request_body(&self, skip: u64) -> Value {
        let mut variables = json!({
            "filter": { "daftarStatusAktifId": self.settings.active_status_ids },
            "skip": skip,
        });
        if let Some(take) = self.settings.page_size {
            variables["take"] = json!(take);
        }

        json!({
            "query": ROSTER_QUERY,
            "variables": variables,
            "operationName": ROSTER_OPERATION_NAME,
        })
    }
}

impl RosterSource for HrRosterClient {
    async fn fetch_page(&self, skip: u64) -> SnapshotResult<RosterPage> {
        let url = &self.settings.url;
        let response = self
            .http
            .post(url)
            .header("apikey", &self.settings.api_key)
            .json(&self.request_body(skip))
            .send()
            .await
            .map_err(|e| SnapshotError::Transport {
                message: format!("{url}: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SnapshotError::Transport {
                message: format!("{url}: HTTP {status}"),
            });
        }

        let body = response.text().await.map_err(|e| SnapshotError::Transport {
            message: format!("{url}: failed to read body: {e}"),
        })?;

        parse_roster_response(&body)
    }
}

/// Decodes a roster response body into a page.
///
/// A non-empty `errors` array or a missing `data.daftarPegawai` object is
/// an error; a `null` count or employee list decodes as zero or empty.
pub fn parse_roster_response(body: &str) -> SnapshotResult<RosterPage> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| SnapshotError::Decode {
            message: e.to_string(),
        })?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SnapshotError::GraphQl { message });
    }

    let payload = response
        .data
        .and_then(|data| data.roster)
        .ok_or_else(|| SnapshotError::Decode {
            message: "response has no data.daftarPegawai".to_string(),
        })?;

    Ok(RosterPage {
        employees: payload.employees.unwrap_or_default(),
        total_count: payload.count.unwrap_or_default(),
    })
}
