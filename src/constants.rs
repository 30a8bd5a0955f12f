/// Prefix for every service log line.
pub const API_NAME: &str = "[elevator-events]";
