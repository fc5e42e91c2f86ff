// Single source of truth for all default values.

// --- Theme ---
pub const DEFAULT_EMOJI: bool = true;
pub const DEFAULT_COLORS: bool = true;
pub const DEFAULT_STACK_DEPTH: usize = 3;
pub const DEFAULT_SHOW_STACK: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "debuget=warn";

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "debuget.toml";
pub const LOG_ENV_VAR: &str = "DEBUGET_LOG";
