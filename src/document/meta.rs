//! Fixed metadata placed at the top of every assembled document.

pub const OPENRPC_VERSION: &str = "1.2.4";

pub const TITLE: &str = "Portal Network JSON-RPC Specification";
pub const DESCRIPTION: &str =
    "A specification of the standard interface for Portal Network clients.";
pub const VERSION: &str = "0.0.1";

pub const LICENSE_NAME: &str = "CC0-1.0";
pub const LICENSE_URL: &str = "https://creativecommons.org/publicdomain/zero/1.0/legalcode";
