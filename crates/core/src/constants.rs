//! Constants used throughout the MOAT core crate.
//!
//! Canned values returned by the mock live here so handlers, tests and the CLI agree on them.

/// Port used when neither `MOAT_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: &str = ":8080";

/// Host used in `Location` headers when `MOAT_PUBLIC_HOST` is not set.
pub const DEFAULT_PUBLIC_HOST: &str = "api.orcid.org";

/// Host recorded in the identifiers of the demo population.
pub const REGISTRY_HOST: &str = "orcid.org";

/// Path prefix of the registry API; content negotiation only applies below it.
pub const REGISTRY_PATH_PREFIX: &str = "/v3.0/";

/// Version of the running service.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Token endpoint. The mock always authenticates the same identity.
pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token-12345";
pub const MOCK_TOKEN_TYPE: &str = "bearer";
pub const MOCK_REFRESH_TOKEN: &str = "mock-refresh-token-67890";
/// Roughly twenty years, in seconds.
pub const MOCK_EXPIRES_IN: u64 = 631_138_518;
pub const MOCK_SCOPE: &str = "/read-limited /activities/update";
pub const MOCK_AUTHENTICATED_NAME: &str = "Sofia Garcia";
pub const MOCK_AUTHENTICATED_ORCID: &str = "0000-0001-2345-6789";

/// Authorization code appended to the redirect URI by `/oauth/authorize`.
pub const MOCK_AUTH_CODE: &str = "mock-auth-code-12345";

/// Inclusive bounds for put-codes handed out on create.
pub const PUT_CODE_MIN: i64 = 100_000;
pub const PUT_CODE_MAX: i64 = 999_099;

/// Put-codes of the activity summaries in every demo record.
pub const SEEDED_WORK_PUT_CODE: i64 = 123_456;
pub const SEEDED_EMPLOYMENT_PUT_CODE: i64 = 789_012;

// Payload returned for any `GET .../work/{put-code}`.
pub const GENERIC_WORK_TITLE: &str = "Retrieved Mock Work";
pub const GENERIC_WORK_TYPE: &str = "work";
pub const GENERIC_WORK_YEAR: &str = "2023";

// Payload returned for any `GET .../employment/{put-code}`.
pub const GENERIC_DEPARTMENT: &str = "Mock Department";
pub const GENERIC_ROLE: &str = "Mock Researcher";
pub const GENERIC_ORGANIZATION: &str = "Mock Org";
pub const GENERIC_EMPLOYMENT_START_YEAR: &str = "2020";

/// Status echoed after an update.
pub const UPDATED_STATUS: &str = "updated";

/// Search queries containing this substring simulate an upstream failure.
pub const SEARCH_FAILURE_TRIGGER: &str = "error";
