// Library root: exposes the team-formation engine and its import/config
// plumbing to the binary and the integration tests.

pub mod config;
pub mod import;
pub mod rotation;
pub mod team;
