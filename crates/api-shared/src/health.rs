use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the `/health` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service shared by the server and anything embedding it.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Returns a `HealthRes` indicating the service is alive.
    ///
    /// The notebook has no background dependencies to probe, so being able to
    /// answer at all is the health signal.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Notebook API is alive".into(),
        }
    }
}
