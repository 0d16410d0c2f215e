//! Constants used throughout the core crate.
//!
//! Endpoint defaults, environment variable names and the fixed page copy shared by the HTML
//! and text renderers.

/// Reports endpoint used when `SWASTHYA_REPORTS_URL` is not set.
pub const DEFAULT_REPORTS_URL: &str = "http://13.220.174.139:5000/api/symptoms";

/// Bind address for the REST server when `SWASTHYA_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

pub const ENV_REPORTS_URL: &str = "SWASTHYA_REPORTS_URL";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "SWASTHYA_FETCH_TIMEOUT_SECS";
pub const ENV_DISPLAY_TZ: &str = "SWASTHYA_DISPLAY_TZ";
pub const ENV_REST_ADDR: &str = "SWASTHYA_REST_ADDR";

/// Page heading for the reports view.
pub const REPORTS_HEADING: &str = "Health Reports";

/// Sub-heading shown under [`REPORTS_HEADING`].
pub const REPORTS_SUBHEADING: &str =
    "Monitor health incidents and symptoms reported across villages";

/// Shown when the endpoint returned an empty list.
pub const NO_REPORTS_MESSAGE: &str = "No reports available at the moment.";

/// Prefix of the error panel text.
pub const ERROR_PREFIX: &str = "Error loading reports";

/// Text shown while the fetch is pending.
pub const LOADING_MESSAGE: &str = "Loading reports...";
