use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// `receipt_table{N}_{invoice}.pdf`
pub fn receipt_file_name(table_no: i64, invoice_no: i64) -> String {
    format!("receipt_table{}_{}.pdf", table_no, invoice_no)
}

/// Create the receipt file for `table_no` in `dir`, starting from the
/// current unix time as invoice number.
///
/// The file is created with `create_new`, so two bills for the same table
/// within one second get consecutive invoice numbers instead of
/// overwriting each other.
pub fn reserve_receipt_file(dir: &Path, table_no: i64) -> io::Result<(PathBuf, File)> {
    let mut invoice_no = Local::now().timestamp();

    loop {
        let candidate = dir.join(receipt_file_name(table_no, invoice_no));
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => invoice_no += 1,
            Err(e) => return Err(e),
        }
    }
}
