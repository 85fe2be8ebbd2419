/// Fixed catalog of HTTP method tokens probed against each target.
///
/// Covers the standard verbs plus the WebDAV, versioning and UPnP extension
/// verbs that misconfigured servers tend to leave enabled. The order is fixed
/// so iteration is reproducible; it carries no other meaning.
pub const METHOD_CATALOG: [&str; 26] = [
    "GET",
    "POST",
    "PUT",
    "DELETE",
    "PATCH",
    "OPTIONS",
    "HEAD",
    "TRACE",
    "CONNECT",
    "PROPFIND",
    "PROPPATCH",
    "MKCOL",
    "COPY",
    "MOVE",
    "LOCK",
    "UNLOCK",
    "CHECKOUT",
    "MERGE",
    "REPORT",
    "MKACTIVITY",
    "SEARCH",
    "PURGE",
    "M-SEARCH",
    "NOTIFY",
    "SUBSCRIBE",
    "UNSUBSCRIBE",
];
