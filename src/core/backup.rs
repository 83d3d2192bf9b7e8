use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or with `compress` into
    /// `dest_file` with a `.zip` extension.
    ///
    /// An existing target file is only overwritten with `force` or after
    /// confirmation. Returns the final backup path, or `None` when the
    /// user declined.
    pub fn backup(
        pool: &mut DbPool,
        db_path: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        if !db_path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )));
        }

        if compress && dest.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
            return Err(AppError::Other(format!(
                "with --compress the backup file must not end in .zip: {}",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // with --compress only the archive is written, never `dest` itself
        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path.exists()
            && !force
            && !confirm(format!(
                "The file '{}' already exists. Overwrite?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_backup(db_path, dest, &final_path)?;
        } else {
            fs::copy(db_path, &final_path)?;
            success(format!("Backup created: {}", final_path.display()));
        }

        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Write the database into the zip archive `zip_path`, stored under the
/// file name of `dest`.
fn compress_backup(db_path: &Path, dest: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "tablepos.sqlite".to_string());

    let mut f = fs::File::open(db_path)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Backup created and compressed: {}", zip_path.display()));

    Ok(())
}
