//! CLI command implementations

pub(crate) mod cleanup;
pub(crate) mod ensure;
pub(crate) mod ls;
pub(crate) mod status;
