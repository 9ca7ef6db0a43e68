//! Registry of the environment variables a benchmark was built and run with.
//!
//! Variables are seeded into a [`Store`], optionally overridden by a
//! PARAMETER file, looked up with the live process environment taking
//! precedence, and finally written out as an escaped block that result files
//! embed.

pub mod config;
pub mod error;
pub mod global;
pub mod logging;
pub mod parser;
pub mod serializer;
pub mod store;

pub use error::{BenchEnvError, Result};
pub use parser::{ingest_bytes, read_parameter_file, IngestReport};
pub use serializer::{dump_table, dump_to_buffer, escape_value};
pub use store::{Resolver, Store};
