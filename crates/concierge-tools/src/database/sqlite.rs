//! SQLite-backed placement records. Only aggregates ever leave this module.

use std::path::Path;
use std::sync::{LazyLock, Mutex};

use concierge_core::errors::ToolError;
use concierge_core::text::{contains_any, contains_phrase, normalize, tokens};
use concierge_core::traits::IAggregateSource;
use regex::Regex;
use rusqlite::{params, params_from_iter, Connection, OpenFlags};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

const NOT_PLACED: &str = "Not Placed";
const SUMMARY_RECRUITERS: usize = 5;
const TOP_COMPANIES: usize = 10;

static CGPA_CONDITION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"cgpa\s*(>=|<=|>|<|=)\s*(\d+(?:\.\d+)?)").ok());

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS students (
    roll_no        TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    branch         TEXT NOT NULL,
    cgpa           REAL,
    company_placed TEXT
);
CREATE INDEX IF NOT EXISTS idx_students_branch ON students(branch);
";

fn db_err(e: impl std::fmt::Display) -> ToolError {
    ToolError::failed("query_database", e.to_string())
}

/// One row of the students table. Used to seed the store; never returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub roll_no: String,
    pub name: String,
    pub branch: String,
    pub cgpa: Option<f64>,
    /// `None` or `"Not Placed"` means unplaced.
    pub company_placed: Option<String>,
}

/// Population restriction parsed from the question.
#[derive(Debug, Clone, Default, PartialEq)]
struct Filter {
    branch: Option<String>,
    cgpa: Option<(&'static str, f64)>,
}

impl Filter {
    fn where_clause(&self) -> (String, Vec<rusqlite::types::Value>) {
        let mut conditions = Vec::new();
        let mut values = Vec::new();
        if let Some(branch) = &self.branch {
            conditions.push("UPPER(branch) = ?".to_string());
            values.push(rusqlite::types::Value::Text(branch.clone()));
        }
        if let Some((op, value)) = self.cgpa {
            conditions.push(format!("cgpa {op} ?"));
            values.push(rusqlite::types::Value::Real(value));
        }
        if conditions.is_empty() {
            ("1 = 1".to_string(), values)
        } else {
            (conditions.join(" AND "), values)
        }
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(branch) = &self.branch {
            parts.push(branch.clone());
        }
        if let Some((op, value)) = self.cgpa {
            parts.push(format!("CGPA {op} {value}"));
        }
        parts.join(", ")
    }

    fn to_json(&self) -> Value {
        json!({
            "branch": self.branch,
            "cgpa": self.cgpa.map(|(op, value)| format!("{op} {value}")),
        })
    }
}

pub struct SqliteAggregateStore {
    conn: Mutex<Connection>,
}

impl SqliteAggregateStore {
    /// Open an existing database read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(db_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open or create a writable database and ensure the schema exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let conn = Connection::open(path.as_ref()).map_err(db_err)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, ToolError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, ToolError>
    where
        F: FnOnce(&Connection) -> Result<T, ToolError>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| db_err(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }

    pub fn init_schema(&self) -> Result<(), ToolError> {
        self.with_conn(|conn| conn.execute_batch(SCHEMA).map_err(db_err))
    }

    pub fn insert_student(&self, record: &StudentRecord) -> Result<(), ToolError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO students (roll_no, name, branch, cgpa, company_placed)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.roll_no,
                    record.name,
                    record.branch,
                    record.cgpa,
                    record.company_placed
                ],
            )
            .map_err(db_err)?;
            Ok(())
        })
    }

    pub fn insert_many(&self, records: &[StudentRecord]) -> Result<usize, ToolError> {
        for record in records {
            self.insert_student(record)?;
        }
        Ok(records.len())
    }

    fn branches(conn: &Connection) -> Result<Vec<String>, ToolError> {
        let mut stmt = conn
            .prepare("SELECT DISTINCT UPPER(branch) FROM students")
            .map_err(db_err)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn parse_filter(conn: &Connection, question: &str) -> Result<Filter, ToolError> {
        let words = tokens(question);
        let branch = Self::branches(conn)?
            .into_iter()
            .find(|b| words.iter().any(|w| w.eq_ignore_ascii_case(b)));

        let cgpa = CGPA_CONDITION.as_ref().and_then(|re| {
            let caps = re.captures(question)?;
            let op = match caps.get(1)?.as_str() {
                ">=" => ">=",
                "<=" => "<=",
                ">" => ">",
                "<" => "<",
                _ => "=",
            };
            let value = caps.get(2)?.as_str().parse::<f64>().ok()?;
            Some((op, value))
        });

        Ok(Filter { branch, cgpa })
    }

    fn top_companies(
        conn: &Connection,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<(String, i64)>, ToolError> {
        let (clause, values) = filter.where_clause();
        let sql = format!(
            "SELECT company_placed, COUNT(*) AS n FROM students
             WHERE {clause} AND company_placed IS NOT NULL
               AND company_placed != '' AND company_placed != '{NOT_PLACED}'
             GROUP BY company_placed ORDER BY n DESC, company_placed ASC LIMIT {limit}"
        );
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params_from_iter(values), |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn summary(conn: &Connection, filter: &Filter) -> Result<Map<String, Value>, ToolError> {
        let (clause, values) = filter.where_clause();
        let placed_cond =
            format!("company_placed IS NOT NULL AND company_placed != '' AND company_placed != '{NOT_PLACED}'");

        let (total, placed, avg_cgpa): (i64, i64, Option<f64>) = conn
            .query_row(
                &format!(
                    "SELECT COUNT(*),
                            COALESCE(SUM(CASE WHEN {placed_cond} THEN 1 ELSE 0 END), 0),
                            AVG(CASE WHEN {placed_cond} THEN cgpa END)
                     FROM students WHERE {clause}"
                ),
                params_from_iter(values.clone()),
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .map_err(db_err)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT UPPER(branch), COUNT(*) AS n FROM students
                 WHERE {clause} AND {placed_cond}
                 GROUP BY UPPER(branch) ORDER BY n DESC, UPPER(branch) ASC"
            ))
            .map_err(db_err)?;
        let branches: Vec<(String, i64)> = stmt
            .query_map(params_from_iter(values), |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(db_err)?
            .collect::<Result<_, _>>()
            .map_err(db_err)?;

        let recruiters = Self::top_companies(conn, filter, SUMMARY_RECRUITERS)?;
        let rate = if total > 0 {
            placed as f64 * 100.0 / total as f64
        } else {
            0.0
        };

        let answer = if placed == 0 {
            "No placement data available in the database.".to_string()
        } else {
            let scope = filter.describe();
            let mut text = if scope.is_empty() {
                "Placement Statistics (from Student DB):\n\n".to_string()
            } else {
                format!("Placement Statistics for {scope} (from Student DB):\n\n")
            };
            text.push_str(&format!("• Total students placed: {placed}\n"));
            text.push_str(&format!("• Placement rate: {rate:.1}% ({placed} of {total})\n"));
            let names: Vec<&str> = recruiters.iter().map(|(c, _)| c.as_str()).collect();
            text.push_str(&format!("• Top recruiters: {}\n", names.join(", ")));
            if let Some(avg) = avg_cgpa {
                text.push_str(&format!("• Average CGPA of placed students: {avg:.2}\n"));
            }
            text.push_str("\nBranch-wise placement:\n");
            for (branch, n) in &branches {
                text.push_str(&format!("  • {branch}: {n} students\n"));
            }
            text.trim_end().to_string()
        };

        let mut payload = Map::new();
        payload.insert("answer".into(), Value::String(answer));
        payload.insert("kind".into(), json!("placement_summary"));
        payload.insert("total_students".into(), json!(total));
        payload.insert("placed".into(), json!(placed));
        payload.insert("placement_rate".into(), json!((rate * 10.0).round() / 10.0));
        payload.insert("average_cgpa".into(), json!(avg_cgpa));
        payload.insert(
            "top_recruiters".into(),
            json!(recruiters
                .iter()
                .map(|(c, n)| json!({ "company": c, "students": n }))
                .collect::<Vec<_>>()),
        );
        payload.insert(
            "branches".into(),
            json!(branches
                .iter()
                .map(|(b, n)| json!({ "branch": b, "placed": n }))
                .collect::<Vec<_>>()),
        );
        payload.insert("filter".into(), filter.to_json());
        Ok(payload)
    }

    fn companies(conn: &Connection, filter: &Filter) -> Result<Map<String, Value>, ToolError> {
        let rows = Self::top_companies(conn, filter, TOP_COMPANIES)?;
        let answer = if rows.is_empty() {
            "No placement data available in the database.".to_string()
        } else {
            let mut text = "Top Recruiting Companies:\n\n".to_string();
            for (company, n) in &rows {
                text.push_str(&format!("• {company}: {n} students\n"));
            }
            text.trim_end().to_string()
        };

        let mut payload = Map::new();
        payload.insert("answer".into(), Value::String(answer));
        payload.insert("kind".into(), json!("top_companies"));
        payload.insert(
            "top_recruiters".into(),
            json!(rows
                .iter()
                .map(|(c, n)| json!({ "company": c, "students": n }))
                .collect::<Vec<_>>()),
        );
        payload.insert("filter".into(), filter.to_json());
        Ok(payload)
    }
}

impl IAggregateSource for SqliteAggregateStore {
    fn aggregate(&self, question: &str) -> Result<Map<String, Value>, ToolError> {
        let q = normalize(question);
        self.with_conn(|conn| {
            let filter = Self::parse_filter(conn, &q)?;
            let wants_summary = contains_phrase(&q, "how many") && contains_phrase(&q, "placed");
            let wants_companies = contains_any(&q, &["compan", "recruiter"]);
            debug!(?filter, wants_summary, wants_companies, "aggregate query");

            if wants_companies && !wants_summary {
                Self::companies(conn, &filter)
            } else {
                Self::summary(conn, &filter)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(roll: &str, branch: &str, cgpa: f64, company: Option<&str>) -> StudentRecord {
        StudentRecord {
            roll_no: roll.into(),
            name: format!("Student {roll}"),
            branch: branch.into(),
            cgpa: Some(cgpa),
            company_placed: company.map(str::to_string),
        }
    }

    fn seeded() -> SqliteAggregateStore {
        let store = SqliteAggregateStore::open_in_memory().unwrap();
        store
            .insert_many(&[
                student("22K91A0501", "CSE", 9.0, Some("TCS")),
                student("22K91A0502", "CSE", 8.0, Some("Infosys")),
                student("22K91A0503", "CSE", 7.0, Some("TCS")),
                student("22K91A0401", "ECE", 8.0, Some("Wipro")),
                student("22K91A0402", "ECE", 6.5, Some(NOT_PLACED)),
                student("22K91A0403", "ECE", 6.0, None),
            ])
            .unwrap();
        store
    }

    #[test]
    fn summary_counts_only_placed() {
        let payload = seeded().aggregate("How many students placed?").unwrap();
        assert_eq!(payload["placed"], json!(4));
        assert_eq!(payload["total_students"], json!(6));
        let answer = payload["answer"].as_str().unwrap();
        assert!(answer.starts_with("Placement Statistics (from Student DB):"));
        assert!(answer.contains("• Total students placed: 4"));
        assert!(answer.contains("• Average CGPA of placed students: 8.00"));
        assert!(answer.contains("  • CSE: 3 students"));
        assert!(answer.contains("Top recruiters: TCS, Infosys, Wipro"));
    }

    #[test]
    fn branch_filter_is_taken_from_query_tokens() {
        let payload = seeded().aggregate("placement rate in ece").unwrap();
        assert_eq!(payload["placed"], json!(1));
        assert_eq!(payload["total_students"], json!(3));
        assert!(payload["answer"].as_str().unwrap().contains("for ECE"));
    }

    #[test]
    fn cgpa_condition_is_bound_as_parameter() {
        let payload = seeded().aggregate("students with cgpa > 7.5 placed").unwrap();
        assert_eq!(payload["total_students"], json!(3));
        assert_eq!(payload["placed"], json!(3));
    }

    #[test]
    fn companies_query_lists_recruiters() {
        let payload = seeded().aggregate("top companies").unwrap();
        let answer = payload["answer"].as_str().unwrap();
        assert!(answer.starts_with("Top Recruiting Companies:"));
        assert!(answer.contains("• TCS: 2 students"));
        assert!(!answer.contains(NOT_PLACED));
    }

    #[test]
    fn payload_never_contains_personal_fields() {
        let payload = seeded().aggregate("how many placed").unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("22K91A05"));
        assert!(!json.contains("Student 22K"));
    }

    #[test]
    fn empty_table_has_no_data_message() {
        let store = SqliteAggregateStore::open_in_memory().unwrap();
        let payload = store.aggregate("how many placed").unwrap();
        assert_eq!(
            payload["answer"],
            json!("No placement data available in the database.")
        );
    }
}
