pub mod assignment;
pub mod lines;
pub mod parameter_file;
pub mod seed;

pub use assignment::{classify, Assignment, LineRejection, QuoteFlags};
pub use lines::LineScanner;
pub use parameter_file::{ingest_bytes, read_parameter_file, IngestReport};
pub use seed::{capture_environment, seed_from_lines};
