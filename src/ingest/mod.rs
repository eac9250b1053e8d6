//! Boundary between the data source and the detection core.
//!
//! Converts what the retrieval service delivers into validated
//! [`Series`](crate::core::Series), failing fast on malformed samples.

pub mod archiver;

pub use archiver::{decode_payload, decode_reader, SignalData};
