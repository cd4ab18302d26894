use std::collections::BTreeSet;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use pdfbook_core::{Catalog, Directory, FileSize, Pdf, PdfName, Tag};

use crate::error::StorageError;
use crate::traits::CatalogStorage;

/// Convert Vec<u8> to fixed-size array with proper error handling.
fn to_array<const N: usize>(v: Vec<u8>, label: &str) -> Result<[u8; N], StorageError> {
    v.try_into()
        .map_err(|_| StorageError::Serialization(format!("invalid {label} length")))
}

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn document_count(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

struct DocumentRow {
    name: String,
    directory: String,
    size: i64,
    tags: Vec<u8>,
}

fn read_pdf(row: DocumentRow) -> Result<Pdf, StorageError> {
    let tags: Vec<String> = rmp_serde::from_slice(&row.tags)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    let tags = tags
        .into_iter()
        .map(Tag::new)
        .collect::<Result<BTreeSet<_>, _>>()?;
    let size = u64::try_from(row.size)
        .map_err(|_| StorageError::Serialization(format!("negative size {}", row.size)))?;

    Ok(Pdf::new(
        PdfName::new(row.name)?,
        Directory::new(row.directory)?,
        FileSize::from_bytes(size),
        tags,
    ))
}

impl CatalogStorage for SqliteStorage {
    fn read_catalog(&self) -> Result<Option<Catalog>, StorageError> {
        let checksum: Option<Vec<u8>> = self
            .conn
            .query_row("SELECT checksum FROM catalog_meta WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(checksum) = checksum else {
            return Ok(None);
        };
        let checksum = to_array::<32>(checksum, "checksum")?;

        let mut stmt = self.conn.prepare(
            "SELECT name, directory, size, tags FROM documents ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DocumentRow {
                    name: row.get(0)?,
                    directory: row.get(1)?,
                    size: row.get(2)?,
                    tags: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let pdfs = rows.into_iter().map(read_pdf).collect::<Result<Vec<_>, _>>()?;
        let catalog = Catalog::from_pdfs(pdfs)?;

        if catalog.fingerprint()? != checksum {
            return Err(StorageError::ChecksumMismatch);
        }
        debug!(documents = catalog.len(), "read catalog");
        Ok(Some(catalog))
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), StorageError> {
        let checksum = catalog.fingerprint()?;
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM documents", [])?;
        for (position, pdf) in catalog.iter().enumerate() {
            let tags: Vec<&str> = pdf.tags().iter().map(Tag::as_str).collect();
            let tags_bytes =
                rmp_serde::to_vec(&tags).map_err(|e| StorageError::Serialization(e.to_string()))?;
            let size = i64::try_from(pdf.size().bytes()).map_err(|_| {
                StorageError::Serialization(format!("size out of range: {}", pdf.size()))
            })?;

            tx.execute(
                "INSERT INTO documents (position, name, directory, size, tags) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    position as i64,
                    pdf.name().as_str(),
                    pdf.directory().as_str(),
                    size,
                    tags_bytes,
                ],
            )?;
        }

        tx.execute(
            "INSERT INTO catalog_meta (id, checksum, document_count) VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET checksum = excluded.checksum, document_count = excluded.document_count, saved_at = excluded.saved_at",
            rusqlite::params![&checksum[..], catalog.len() as i64],
        )?;

        tx.commit()?;
        debug!(documents = catalog.len(), "saved catalog");
        Ok(())
    }
}
