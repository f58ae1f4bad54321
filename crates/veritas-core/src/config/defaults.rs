// Single source of truth for all default values.

// --- Paths (relative to the project root) ---
pub const DEFAULT_POLICY_JSON_PATH: &str = ".veritas/config/verification.json";
pub const DEFAULT_PROJECT_TOML: &str = "veritas.toml";
pub const DEFAULT_LOG_DIR: &str = ".veritas/logs";

// --- Audit ---
pub const DEFAULT_RETENTION_DAYS: u32 = 5;

// --- Registry ---
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const DEFAULT_REGISTRY_DATABASE: &str = "pubmed";
pub const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REGISTRY_CACHE_CAPACITY: u64 = 0; // disabled

// --- Environment ---
pub const ENV_ON_VIOLATION: &str = "VERITAS_ON_VIOLATION";
pub const ENV_LOG_DIR: &str = "VERITAS_LOG_DIR";
pub const ENV_REGISTRY_URL: &str = "VERITAS_REGISTRY_URL";
pub const ENV_REGISTRY_TIMEOUT_SECS: &str = "VERITAS_REGISTRY_TIMEOUT_SECS";
pub const ENV_LOG_FILTER: &str = "VERITAS_LOG";
pub const ENV_LOG_FORMAT: &str = "VERITAS_LOG_FORMAT";
