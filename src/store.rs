use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use std::{
    fs,
    path::{Path, PathBuf},
};

/// The four durable tabular resources the store manages.
///
/// Each resource maps to one CSV file whose column order is part of the
/// on-disk contract. The enum is the single place that knows a resource's
/// file name and header labels; everything else goes through [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Branches,
    Products,
    Sales,
}

impl Resource {
    /// Every resource, in initialization order.
    pub const ALL: [Resource; 4] = [
        Resource::Users,
        Resource::Branches,
        Resource::Products,
        Resource::Sales,
    ];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Users => "user.csv",
            Resource::Branches => "branch.csv",
            Resource::Products => "product.csv",
            Resource::Sales => "sale.csv",
        }
    }

    #[must_use]
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Resource::Users => &["Username", "Password"],
            Resource::Branches => &["Branch ID", "Branch Name", "Location"],
            Resource::Products => &["Product ID", "Product Name"],
            Resource::Sales => &["Branch ID", "Product ID", "Amount Sold", "Date"],
        }
    }
}

/// Owns the on-disk representation of every [`Resource`].
///
/// A `Store` is just a data directory; it keeps no cache, so every
/// [`Self::load`] re-reads the file. Callers get an in-memory snapshot and
/// write changes back wholesale with [`Self::replace`]. The store assumes it
/// is the only process touching the directory and takes no locks.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Creates a store over the CSV files in `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, resource: Resource) -> PathBuf {
        self.dir.join(resource.file_name())
    }

    /// Reads every data row of `resource`, in file order.
    ///
    /// A missing file is an empty collection, not an error. The header row is
    /// consumed by the CSV reader and never appears in the result.
    ///
    /// # Errors
    ///
    /// Returns any error from reading the file, or from decoding a row into
    /// `T` (for example, an `Amount Sold` value that is not an integer).
    pub fn load<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let path = self.path(resource);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            rows.push(result.with_context(|| format!("{}", path.display()))?);
        }
        Ok(rows)
    }

    /// Appends `rows` to the end of `resource`.
    ///
    /// If the file does not exist yet, the header row is written first.
    /// Existing content is never rewritten; use [`Self::replace`] for that.
    ///
    /// # Errors
    ///
    /// Returns any error from opening or writing the file.
    pub fn append<T: Serialize>(&self, resource: Resource, rows: &[T]) -> Result<()> {
        let path = self.path(resource);
        let new_file = !path.exists();
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if new_file {
            wtr.write_record(resource.headers())?;
        }
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Rewrites `resource` to contain exactly `rows` (plus the header row).
    ///
    /// The new content is written to a temporary file in the same directory
    /// and renamed over the original, so a crash mid-write leaves the old
    /// file intact and readers never observe a half-written one.
    ///
    /// # Errors
    ///
    /// Returns any error from writing the temporary file or renaming it.
    pub fn replace<T: Serialize>(&self, resource: Resource, rows: &[T]) -> Result<()> {
        let path = self.path(resource);
        let tmp = path.with_extension("csv.tmp");
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)
            .with_context(|| format!("writing {}", tmp.display()))?;
        wtr.write_record(resource.headers())?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        drop(wtr);
        fs::rename(&tmp, &path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }

    /// Creates `resource` with only its header row, if it does not exist.
    ///
    /// Calling this twice is a no-op the second time: the header is never
    /// duplicated and existing rows are left alone.
    ///
    /// # Errors
    ///
    /// Returns any error from creating or writing the file.
    pub fn ensure_initialized(&self, resource: Resource) -> Result<()> {
        let path = self.path(resource);
        if path.exists() {
            return Ok(());
        }
        let mut wtr = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        wtr.write_record(resource.headers())?;
        wtr.flush()?;
        Ok(())
    }

    /// Ensures all four resources exist, creating any missing ones with
    /// header-only files.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Self::ensure_initialized`].
    pub fn init_all(&self) -> Result<()> {
        for resource in Resource::ALL {
            self.ensure_initialized(resource)?;
        }
        Ok(())
    }
}
