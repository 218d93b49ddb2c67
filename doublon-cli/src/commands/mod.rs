//! CLI Commands

pub mod groups;
pub mod resolve;
pub mod scan;
