//! Front-end pipeline stages: Fetch -> Decode -> Rename -> Register-Read.

pub mod decode;
pub mod fetch;
pub mod regread;
pub mod rename;
