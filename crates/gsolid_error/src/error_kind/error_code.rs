// --- Aligned with esbuild plugin semantics
pub const UNRESOLVED_IMPORT: &str = "UNRESOLVED_IMPORT";
pub const COMPILER_FAILED_SILENTLY: &str = "COMPILER_FAILED_SILENTLY";
pub const PARSE_FAILED: &str = "PARSE_FAILED";
pub const INVALID_FILTER: &str = "INVALID_FILTER";

// --- gsolid specific
pub const READ_FILE_FAILED: &str = "READ_FILE_FAILED";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PANIC: &str = "PANIC";
