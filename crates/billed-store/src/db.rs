use crate::error::{Error, Result};
use crate::traits::{BillsResource, RemoteStore};
use async_trait::async_trait;
use billed_types::{Bill, BillStatus, DraftBill, ExpenseType, FileUpload, UploadReceipt};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

// NOTE: Database Design Rationale
//
// Why one flat table?
// - A bill is a closed record: no relations, no history, no cascade.
// - The list view always fetches everything and sorts client-side, so
//   there is nothing to index beyond the primary key.
//
// Why store dates as TEXT?
// - The backend contract is an ISO-8601 string and legacy rows may hold
//   malformed values; those must round-trip unchanged so the list view
//   can still show them. Parsing happens at the edge, never at rest.
//
// Why files on disk instead of blobs?
// - Attachments are served back by URL. A plain file under uploads/
//   keyed by uuid gives a stable URL without reading blobs through
//   SQLite.

/// SQLite-backed bill store with an uploads directory for attachments.
pub struct Database {
    conn: Mutex<Connection>,
    uploads_dir: PathBuf,
}

impl Database {
    pub fn open(db_path: &Path, uploads_dir: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        std::fs::create_dir_all(uploads_dir)?;

        let db = Self {
            conn: Mutex::new(conn),
            uploads_dir: uploads_dir.to_path_buf(),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory(uploads_dir: &Path) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        std::fs::create_dir_all(uploads_dir)?;

        let db = Self {
            conn: Mutex::new(conn),
            uploads_dir: uploads_dir.to_path_buf(),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS bills (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL,
                expense_type TEXT NOT NULL,
                name TEXT NOT NULL,
                amount INTEGER NOT NULL,
                date TEXT NOT NULL,
                vat TEXT NOT NULL,
                pct INTEGER NOT NULL,
                commentary TEXT NOT NULL DEFAULT '',
                file_url TEXT,
                file_name TEXT,
                status TEXT NOT NULL DEFAULT 'pending'
            );
            "#,
        )?;

        Ok(())
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert_bill(&self, bill: &Bill) -> Result<()> {
        self.conn().execute(
            r#"
            INSERT INTO bills
                (id, email, expense_type, name, amount, date, vat, pct,
                 commentary, file_url, file_name, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                bill.id,
                bill.email,
                bill.expense_type.as_str(),
                bill.name,
                bill.amount,
                bill.date,
                bill.vat,
                bill.pct,
                bill.commentary,
                bill.file_url,
                bill.file_name,
                bill.status.as_str(),
            ],
        )?;
        Ok(())
    }

    fn replace_bill(&self, id: &str, bill: &Bill) -> Result<usize> {
        let changed = self.conn().execute(
            r#"
            UPDATE bills SET
                email = ?2, expense_type = ?3, name = ?4, amount = ?5,
                date = ?6, vat = ?7, pct = ?8, commentary = ?9,
                file_url = ?10, file_name = ?11, status = ?12
            WHERE id = ?1
            "#,
            params![
                id,
                bill.email,
                bill.expense_type.as_str(),
                bill.name,
                bill.amount,
                bill.date,
                bill.vat,
                bill.pct,
                bill.commentary,
                bill.file_url,
                bill.file_name,
                bill.status.as_str(),
            ],
        )?;
        Ok(changed)
    }

    fn select_bills(&self) -> Result<Vec<Bill>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            r#"
            SELECT id, email, expense_type, name, amount, date, vat, pct,
                   commentary, file_url, file_name, status
            FROM bills
            "#,
        )?;

        let bills = stmt
            .query_map([], row_to_bill)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(bills)
    }
}

fn row_to_bill(row: &Row<'_>) -> rusqlite::Result<Bill> {
    let status: String = row.get(11)?;
    Ok(Bill {
        id: row.get(0)?,
        email: row.get(1)?,
        expense_type: ExpenseType::parse_or_default(&row.get::<_, String>(2)?),
        name: row.get(3)?,
        amount: row.get(4)?,
        date: row.get(5)?,
        vat: row.get(6)?,
        pct: row.get(7)?,
        commentary: row.get(8)?,
        file_url: row.get(9)?,
        file_name: row.get(10)?,
        status: parse_status(&status),
    })
}

fn parse_status(raw: &str) -> BillStatus {
    match raw {
        "accepted" => BillStatus::Accepted,
        "refused" => BillStatus::Refused,
        // Unknown review states degrade to pending rather than dropping
        // the row.
        _ => BillStatus::Pending,
    }
}

#[async_trait]
impl BillsResource for Database {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.select_bills()
    }

    async fn create(&self, draft: DraftBill) -> Result<Bill> {
        let bill = draft.into_bill(Uuid::new_v4().to_string());
        self.insert_bill(&bill)?;
        Ok(bill)
    }

    async fn update(&self, id: &str, bill: Bill) -> Result<Bill> {
        let bill = Bill {
            id: id.to_string(),
            ..bill
        };
        let changed = self.replace_bill(id, &bill)?;
        if changed == 0 {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(bill)
    }
}

#[async_trait]
impl RemoteStore for Database {
    fn bills(&self) -> &dyn BillsResource {
        self
    }

    async fn upload(&self, upload: FileUpload) -> Result<UploadReceipt> {
        let key = Uuid::new_v4().to_string();
        let stored_name = format!("{}-{}", key, upload.selection.file_name);
        let path = self.uploads_dir.join(&stored_name);
        tokio::fs::write(&path, &upload.selection.bytes).await?;

        Ok(UploadReceipt {
            file_url: format!("file://{}", path.display()),
            key,
        })
    }
}
