use crate::types::HealthRes;

/// Liveness check shared by every HTTP surface.
///
/// Reports process liveness only; the reports endpoint is not contacted.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is alive.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "SwasthyaSetu reports is alive".into(),
        }
    }
}
