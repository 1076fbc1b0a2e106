//! SQLite-backed store for finalized member records.
//!
//! A record is written exactly once, at finalize, inside a single
//! transaction. Records are never updated or deleted by this service.

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::labels::Lang;
use crate::wizard::FormState;

/// Errors from the member store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Expected wire format for the A.D. date of birth.
const DOB_AD_FORMAT: &str = "%Y-%m-%d";

/// One finalized membership application.
///
/// Every field except `lang` and `name` may be empty; the wizard does
/// not enforce per-step completeness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberRecord {
    pub lang: String,
    pub name: String,
    pub full_name_en: String,
    pub dob_bs: String,
    pub dob_ad: Option<NaiveDate>,
    pub gender: String,
    pub occupation: String,
    pub perm_address: String,
    pub temp_address: String,
    pub phone: String,
    pub email: String,
    pub doc_type: String,
    pub doc_issued_date: String,
    pub doc_file: String,
    pub education: String,
    pub job_title: String,
    pub experience_years: String,
    pub skills: String,
    pub org_name: String,
    pub membership_type: String,
    pub father_name: String,
    pub mother_name: String,
    pub spouse_name: String,
    pub children: String,
    pub em_name: String,
    pub em_relation: String,
    pub em_phone: String,
    pub em_address: String,
    pub pay_method: String,
    pub transaction_id: String,
    pub payment_file: String,
    pub declaration: String,
}

impl MemberRecord {
    /// Copy every tracked field out of the accumulated form state.
    ///
    /// An unparseable `dob_ad` becomes NULL rather than rejecting the
    /// submission.
    pub fn from_form(lang: Lang, form: &FormState) -> Self {
        Self {
            lang: lang.code().to_string(),
            name: form.get("name").to_string(),
            full_name_en: form.get("full_name_en").to_string(),
            dob_bs: form.get("dob_bs").to_string(),
            dob_ad: parse_dob_ad(form.get("dob_ad")),
            gender: form.get("gender").to_string(),
            occupation: form.get("occupation").to_string(),
            perm_address: form.get("perm_address").to_string(),
            temp_address: form.get("temp_address").to_string(),
            phone: form.get("phone").to_string(),
            email: form.get("email").to_string(),
            doc_type: form.get("doc_type").to_string(),
            doc_issued_date: form.get("doc_issued_date").to_string(),
            doc_file: form.get("doc_file").to_string(),
            education: form.get("education").to_string(),
            job_title: form.get("job_title").to_string(),
            experience_years: form.get("experience_years").to_string(),
            skills: form.get("skills").to_string(),
            org_name: form.get("org_name").to_string(),
            membership_type: form.get("membership_type").to_string(),
            father_name: form.get("father_name").to_string(),
            mother_name: form.get("mother_name").to_string(),
            spouse_name: form.get("spouse_name").to_string(),
            children: form.get("children").to_string(),
            em_name: form.get("em_name").to_string(),
            em_relation: form.get("em_relation").to_string(),
            em_phone: form.get("em_phone").to_string(),
            em_address: form.get("em_address").to_string(),
            pay_method: form.get("pay_method").to_string(),
            transaction_id: form.get("transaction_id").to_string(),
            payment_file: form.get("payment_file").to_string(),
            declaration: form.get("declaration").to_string(),
        }
    }
}

/// Parse the A.D. date of birth; silently absent on failure or empty input.
fn parse_dob_ad(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DOB_AD_FORMAT).ok()
}

/// Store of member records over a single SQLite connection.
#[derive(Debug)]
pub struct MemberStore {
    conn: Mutex<Connection>,
}

impl MemberStore {
    /// Open (or create) the database at `path` and run migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS members (
              id INTEGER PRIMARY KEY,
              lang TEXT,
              name TEXT,
              full_name_en TEXT,
              dob_bs TEXT,
              dob_ad DATE,
              gender TEXT,
              occupation TEXT,
              perm_address TEXT,
              temp_address TEXT,
              phone TEXT,
              email TEXT,
              doc_type TEXT,
              doc_issued_date TEXT,
              doc_file TEXT,
              education TEXT,
              job_title TEXT,
              experience_years TEXT,
              skills TEXT,
              org_name TEXT,
              membership_type TEXT,
              father_name TEXT,
              mother_name TEXT,
              spouse_name TEXT,
              children TEXT,
              em_name TEXT,
              em_relation TEXT,
              em_phone TEXT,
              em_address TEXT,
              pay_method TEXT,
              transaction_id TEXT,
              payment_file TEXT,
              declaration TEXT
            );
            ",
        )?;
        Ok(())
    }

    /// Insert one record inside a transaction. Returns the new row id.
    pub fn insert(&self, record: &MemberRecord) -> Result<i64, StoreError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        tx.execute(
            r"
            INSERT INTO members (
              lang, name, full_name_en, dob_bs, dob_ad, gender, occupation,
              perm_address, temp_address, phone, email,
              doc_type, doc_issued_date, doc_file,
              education,
              job_title, experience_years, skills, org_name,
              membership_type,
              father_name, mother_name, spouse_name, children,
              em_name, em_relation, em_phone, em_address,
              pay_method, transaction_id, payment_file, declaration
            ) VALUES (
              ?1, ?2, ?3, ?4, ?5, ?6, ?7,
              ?8, ?9, ?10, ?11,
              ?12, ?13, ?14,
              ?15,
              ?16, ?17, ?18, ?19,
              ?20,
              ?21, ?22, ?23, ?24,
              ?25, ?26, ?27, ?28,
              ?29, ?30, ?31, ?32
            )
            ",
            params![
                record.lang,
                record.name,
                record.full_name_en,
                record.dob_bs,
                record.dob_ad,
                record.gender,
                record.occupation,
                record.perm_address,
                record.temp_address,
                record.phone,
                record.email,
                record.doc_type,
                record.doc_issued_date,
                record.doc_file,
                record.education,
                record.job_title,
                record.experience_years,
                record.skills,
                record.org_name,
                record.membership_type,
                record.father_name,
                record.mother_name,
                record.spouse_name,
                record.children,
                record.em_name,
                record.em_relation,
                record.em_phone,
                record.em_address,
                record.pay_method,
                record.transaction_id,
                record.payment_file,
                record.declaration,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<i64, StoreError> {
        let conn = self.conn.lock().unwrap();
        let count = conn.query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Fetch a record by id.
    pub fn get(&self, id: i64) -> Result<Option<MemberRecord>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r"
            SELECT lang, name, full_name_en, dob_bs, dob_ad, gender, occupation,
                   perm_address, temp_address, phone, email,
                   doc_type, doc_issued_date, doc_file,
                   education,
                   job_title, experience_years, skills, org_name,
                   membership_type,
                   father_name, mother_name, spouse_name, children,
                   em_name, em_relation, em_phone, em_address,
                   pay_method, transaction_id, payment_file, declaration
            FROM members WHERE id = ?1
            ",
        )?;
        let mut rows = stmt.query(params![id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        Ok(Some(MemberRecord {
            lang: row.get(0)?,
            name: row.get(1)?,
            full_name_en: row.get(2)?,
            dob_bs: row.get(3)?,
            dob_ad: row.get(4)?,
            gender: row.get(5)?,
            occupation: row.get(6)?,
            perm_address: row.get(7)?,
            temp_address: row.get(8)?,
            phone: row.get(9)?,
            email: row.get(10)?,
            doc_type: row.get(11)?,
            doc_issued_date: row.get(12)?,
            doc_file: row.get(13)?,
            education: row.get(14)?,
            job_title: row.get(15)?,
            experience_years: row.get(16)?,
            skills: row.get(17)?,
            org_name: row.get(18)?,
            membership_type: row.get(19)?,
            father_name: row.get(20)?,
            mother_name: row.get(21)?,
            spouse_name: row.get(22)?,
            children: row.get(23)?,
            em_name: row.get(24)?,
            em_relation: row.get(25)?,
            em_phone: row.get(26)?,
            em_address: row.get(27)?,
            pay_method: row.get(28)?,
            transaction_id: row.get(29)?,
            payment_file: row.get(30)?,
            declaration: row.get(31)?,
        }))
    }
}
