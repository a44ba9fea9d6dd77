//! Constants used throughout the notebook core crate.
//!
//! Path names, defaults and limits live here so the store backends, the
//! service and the configuration layer agree on them.

/// Directory name for the content collection inside the data directory.
pub const CONTENT_DIR_NAME: &str = "content";

/// Extension of a persisted content document.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Default store connection string when none is configured.
pub const DEFAULT_STORE_URL: &str = "file://notebook_data";

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Stored in place of an omitted `output` annotation.
pub const DEFAULT_OUTPUT: &str = "(no output)";

/// Page size used when a caller asks for a page without a size.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Upper bound on the page size a caller may request.
pub const MAX_PER_PAGE: usize = 100;

/// Attempts made to allocate an unused record id before giving up.
pub const ID_ALLOCATION_ATTEMPTS: usize = 5;
