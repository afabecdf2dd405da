use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use parkfit::entities::Instance;
use parkfit::solve;
use thousands::Separable;

use crate::config::ParkFitConfig;
use crate::io::export::export;
use crate::io::ext_repr::{ExtError, ExtListing, ExtLocationResult, ExtVehicle};
use crate::io::import::{import_listings, import_vehicles};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Status code and JSON body to send back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    fn error(status_code: u16, message: &str) -> Self {
        let body = serde_json::to_string(&ExtError {
            error: message.to_string(),
        })
        .unwrap_or_else(|_| "<failed to serialize error>".to_string());
        Self { status_code, body }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

/// Handles a single request: a JSON array of vehicles to be stored in listings of the catalogue.
///
/// * 200 with a JSON array of the cheapest feasible listings per location, cheapest location first
/// * 400 if the request has no body
/// * 500 if the body cannot be parsed, contains invalid values or the search fails
pub fn handle_request(
    body: Option<&str>,
    catalogue: &[ExtListing],
    config: &ParkFitConfig,
) -> Response {
    let Some(body) = body else {
        warn!("[HANDLER] rejected request without body");
        return Response::error(STATUS_BAD_REQUEST, "missing request body");
    };

    let serialized = process_request(body, catalogue, config).and_then(|results| {
        let body = match config.pretty_output {
            true => serde_json::to_string_pretty(&results),
            false => serde_json::to_string(&results),
        };
        body.context("failed to serialize response")
    });

    match serialized {
        Ok(body) => Response {
            status_code: STATUS_OK,
            body,
        },
        Err(e) => {
            error!("[HANDLER] request failed: {e:#}");
            Response::error(STATUS_INTERNAL_ERROR, &format!("{e:#}"))
        }
    }
}

fn process_request(
    body: &str,
    catalogue: &[ExtListing],
    config: &ParkFitConfig,
) -> Result<Vec<ExtLocationResult>> {
    let ext_vehicles: Vec<ExtVehicle> =
        serde_json::from_str(body).context("failed to parse request body")?;
    debug!("[HANDLER] request with {} vehicle specs", ext_vehicles.len());

    let vehicles = import_vehicles(&ext_vehicles).context("invalid vehicle in request")?;
    let listings = import_listings(catalogue).context("invalid listing in catalogue")?;
    let instance = Instance::new(&vehicles, &listings).context("invalid request")?;

    let solution = solve(&instance, config.search_config)?;
    info!(
        "[HANDLER] {} subsets, {} orientations and {} placements searched in {:.3}ms",
        solution.stats.n_subsets.separate_with_commas(),
        solution.stats.n_orientations.separate_with_commas(),
        solution.stats.n_nodes.separate_with_commas(),
        solution.elapsed.as_secs_f64() * 1000.0
    );

    Ok(export(&solution.location_results))
}
