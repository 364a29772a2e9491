//! PDF header sniffing.
//!
//! Documents listed in a job spec are plain filenames; nothing guarantees
//! they are PDFs. The header check rejects obvious non-PDF files before
//! lopdf spends time trying to recover an xref table from them.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // "1.7"
const HEADER_LEN: u64 = 16;

/// Read the header of `path` and return the declared PDF version.
pub fn sniff_pdf_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    File::open(path)?.take(HEADER_LEN).read_to_end(&mut header)?;
    pdf_version(&header)
}

/// Return the PDF version declared by a header, e.g. `"1.7"` for `%PDF-1.7`.
pub fn pdf_version(header: &[u8]) -> Result<String> {
    let rest = header.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}
