// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// Environment variable holding the listening port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Interface the listener binds to by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Value of the `Server` header sent with every response.
pub const SERVER_HEADER_VALUE: &str = concat!("confluence2bookmarks/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Confluence Cloud
// ---------------------------------------------------------------------------

/// Every Confluence Cloud site lives under this host suffix.
pub const ATLASSIAN_HOST_SUFFIX: &str = ".atlassian.net";

/// A site name is a single DNS label.
pub const DNS_LABEL_MAX_LEN: usize = 63;

/// How many levels of descendants one page tree query asks for.
///
/// Matches the shape of the query the service has always sent: the root plus
/// five nested levels of children.
pub const DEFAULT_TREE_DEPTH: u8 = 5;

/// Upper bound for `--depth`. Each level nests the selection set once more,
/// and the remote rejects queries that are too deep.
pub const MAX_TREE_DEPTH: u8 = 20;

/// Remote call timeout when `--request-timeout` is not given.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum characters shown when previewing a remote response body in errors.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Bookmark file format
// ---------------------------------------------------------------------------

/// Schema version written in every bookmark file.
pub const BOOKMARK_FILE_VERSION: u32 = 1;

/// Title used when a page has none.
pub const UNTITLED_PAGE: &str = "(no title)";

/// Appended to a page title for the self-link heading its folder.
pub const HOME_SUFFIX: &str = " Home";
