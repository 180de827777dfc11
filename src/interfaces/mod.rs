//! Boundary adapters: CSV input of operation scripts, CSV output of
//! account summaries.

pub mod csv;
