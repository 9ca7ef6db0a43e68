//! Rendering of a [`Store`] for output files and diagnostics.
//!
//! The block written by [`dump_to_buffer`] is embedded into result files and
//! read back as shell-style double-quoted assignments:
//!
//! ```text
//! beginofenvironmentvariables
//! BENCHIT_CC="gcc"
//! BENCHIT_KERNEL_COMMENT="say \"hi\""
//! endofenvironmentvariables
//! ```

use std::io::{self, Write};

use bytes::{BufMut, BytesMut};

use crate::store::Store;

pub const BLOCK_BEGIN: &str = "beginofenvironmentvariables";
pub const BLOCK_END: &str = "endofenvironmentvariables";

/// Escapes every `"` that is not already escaped.
///
/// A quote preceded by an even number of consecutive backslashes (zero
/// included) gets one more backslash; after an odd number it is left alone.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut backslashes = 0usize;

    for c in value.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                if backslashes % 2 == 0 {
                    escaped.push('\\');
                }
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
        escaped.push(c);
    }

    escaped
}

/// Appends the delimited variable block for `store` to `buf`.
///
/// Entries are written in key order.
pub fn dump_to_buffer(store: &Store, buf: &mut BytesMut) {
    buf.put_slice(BLOCK_BEGIN.as_bytes());
    buf.put_u8(b'\n');

    for (key, value) in store.sorted_entries() {
        buf.put_slice(key.as_bytes());
        buf.put_slice(b"=\"");
        buf.put_slice(escape_value(value).as_bytes());
        buf.put_slice(b"\"\n");
    }

    buf.put_slice(BLOCK_END.as_bytes());
    buf.put_u8(b'\n');
}

/// Human-readable listing of all entries followed by a total count.
///
/// Nothing is written for a store that was never initialized.
pub fn dump_table<W: Write>(store: &Store, out: &mut W) -> io::Result<()> {
    let Some(size) = store.size() else {
        return Ok(());
    };

    writeln!(out, "Hashtable dump of all known environment variables:")?;
    writeln!(out, " Key            | Value")?;
    writeln!(out, "----------------------------------")?;
    for (key, value) in store.sorted_entries() {
        writeln!(out, " {} | {}", key, value)?;
    }
    writeln!(out, "{} entries in total.", size)?;
    out.flush()
}
