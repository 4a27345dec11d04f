// Newline-delimited path lists on disk (root list, history).
// Lines are raw bytes so paths that are not UTF-8 survive a round trip.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read `path` line by line, trimming each line and dropping blank ones.
pub fn read_lines(path: &Path) -> io::Result<Vec<OsString>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let trimmed = trim(&line);
        if !trimmed.is_empty() {
            lines.push(os_from_bytes(trimmed));
        }
    }
    Ok(lines)
}

/// Create or truncate `path` and write each line followed by `\n`.
/// Not atomic: a failure part-way leaves a partial file.
pub fn write_lines<S: AsRef<OsStr>>(lines: &[S], path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(&os_to_bytes(line.as_ref()))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn trim(bytes: &[u8]) -> &[u8] {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.trim().as_bytes(),
        Err(_) => bytes.trim_ascii(),
    }
}

#[cfg(unix)]
fn os_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn os_from_bytes(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(unix)]
fn os_to_bytes(s: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_to_bytes(s: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    match s.to_string_lossy() {
        std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(s.as_bytes()),
        std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into_bytes()),
    }
}
