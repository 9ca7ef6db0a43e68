//! The process-wide variable registry.
//!
//! Every operation takes the registry lock for its whole duration, so a
//! PARAMETER file is applied completely before any reader sees the table.

use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bytes::BytesMut;

use crate::error::Result;
use crate::parser::{self, IngestReport};
use crate::serializer;
use crate::store::{Resolver, Store};

static REGISTRY: Mutex<Store> = Mutex::new(Store::new());

fn lock() -> MutexGuard<'static, Store> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with exclusive access to the registry.
pub fn with_store<R>(f: impl FnOnce(&mut Store) -> R) -> R {
    f(&mut *lock())
}

/// Creates an empty table, discarding any previous contents.
pub fn init_table() {
    lock().init_table();
}

pub fn put(key: &str, value: &str) -> Option<String> {
    lock().put(key, value)
}

pub fn get(key: &str) -> Option<String> {
    lock().get(key).map(str::to_string)
}

/// Like [`get`], but a variable set in the process environment wins.
pub fn get_env(key: &str) -> Option<String> {
    let store = lock();
    Resolver::new(&store).resolve(key)
}

pub fn size() -> Option<usize> {
    lock().size()
}

pub fn read_parameter_file(path: impl AsRef<Path>) -> Result<IngestReport> {
    parser::read_parameter_file(&mut lock(), path)
}

pub fn dump_to_buffer(buf: &mut BytesMut) {
    serializer::dump_to_buffer(&lock(), buf);
}

pub fn dump_table<W: Write>(out: &mut W) -> Result<()> {
    serializer::dump_table(&lock(), out)?;
    Ok(())
}
