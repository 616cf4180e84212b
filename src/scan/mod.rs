//! Discovery of routes advertised by build artifacts.

pub mod output;
pub mod xml;
