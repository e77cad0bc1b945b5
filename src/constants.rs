//! Configuration keys shared between the admin extension and the importer.

// -- importer configuration keys ---------------------------------------------

/// URL of the remote module source.
pub const CONFIG_FEED: &str = "feed";

/// Module search queries to run against the feed.
pub const CONFIG_QUERIES: &str = "queries";

/// Whether modules no longer present upstream are removed on sync.
pub const CONFIG_REMOVE_MISSING: &str = "remove_missing";

// -- admin client configuration ----------------------------------------------

/// Section of the admin client config holding the Puppet settings.
pub const CLIENT_SECTION: &str = "puppet";

pub const CLIENT_UPLOAD_WORKING_DIR: &str = "upload_working_dir";
pub const CLIENT_UPLOAD_CHUNK_SIZE: &str = "upload_chunk_size";
