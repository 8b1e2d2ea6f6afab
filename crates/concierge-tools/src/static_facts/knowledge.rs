//! Institution knowledge base.
//!
//! Built-in values describe the default institution. A TOML file can override
//! any subset of fields; everything not mentioned keeps its built-in value.

use std::collections::BTreeMap;
use std::path::Path;

use concierge_core::errors::{ConciergeResult, ConfigError};
use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Institution {
    pub short_name: String,
    pub full_name: String,
    pub website: String,
}

impl Default for Institution {
    fn default() -> Self {
        Self {
            short_name: "TKRCET".into(),
            full_name: "Teegala Krishna Reddy Engineering College".into(),
            website: "https://tkrcet.ac.in".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personnel {
    pub principal: String,
    pub vice_principal: String,
    pub secretary: String,
    pub chairman: String,
    /// Department code (lower-case) → head of department.
    pub hod: BTreeMap<String, String>,
}

impl Default for Personnel {
    fn default() -> Self {
        let hod = [
            ("cse", "Dr. A. Suresh Rao"),
            ("cse-aiml", "Dr. B. Sunil Srinivas"),
            ("csm", "Dr. B. Sunil Srinivas"),
            ("cse-ds", "Dr. V. Krishna"),
            ("csd", "Dr. V. Krishna"),
            ("ece", "Dr. D. Nageshwar Rao"),
            ("eee", "Dr. K. Raju"),
            ("it", "Dr. R. Muruanantham"),
            ("mech", "Mr. D. Rushi Kumar"),
            ("civil", "Mr. K.V.R Satya Sai"),
            ("mba", "Dr. K. Gyaneswari"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            principal: "Dr. D. V. Ravi Shankar".into(),
            vice_principal: "Dr. A. Suresh Rao (also HoD of CSE & Dean Academics)".into(),
            secretary: "Dr. T. Harinath Reddy".into(),
            chairman: "Sri. Teegala Krishna Reddy".into(),
            hod,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub working_hours: String,
    pub lunch_break: String,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            working_hours: "9:40 AM to 4:20 PM (Monday-Saturday)".into(),
            lunch_break: "12:40 PM to 1:20 PM".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    pub established: String,
    pub founder: String,
    pub affiliation: String,
    pub location: String,
    pub campus_size: String,
}

impl Default for History {
    fn default() -> Self {
        Self {
            established: "2002".into(),
            founder: "Sri. Teegala Krishna Reddy".into(),
            affiliation: "JNTUH (Jawaharlal Nehru Technological University Hyderabad)".into(),
            location: "Meerpet, Hyderabad - 500097, Telangana".into(),
            campus_size: "20 acres".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Admissions {
    pub process: String,
    pub eligibility: String,
    pub contact: String,
}

impl Default for Admissions {
    fn default() -> Self {
        Self {
            process: "Admissions are through TS EAPCET counseling for B.Tech, PGCET for M.Tech, and direct admission for MBA. Visit the admissions office or website for detailed procedure.".into(),
            eligibility: "10+2 with Physics, Chemistry, and Mathematics for B.Tech. Graduation in relevant field for M.Tech/MBA.".into(),
            contact: "Visit https://tkrcet.ac.in/admissions for admission details and fee structure.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Courses {
    pub ug: Vec<String>,
    pub pg: Vec<String>,
    pub total: String,
}

impl Default for Courses {
    fn default() -> Self {
        Self {
            ug: strings(&["CSE", "CSE-AIML", "CSE-DS", "ECE", "EEE", "IT", "Mechanical", "Civil"]),
            pg: strings(&["M.Tech in CSE", "M.Tech in Power Electronics", "MBA"]),
            total: "8 UG programs and 3 PG programs".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facilities {
    pub main: String,
    pub special: String,
    /// Full reply for food and canteen questions.
    pub canteen: String,
}

impl Default for Facilities {
    fn default() -> Self {
        Self {
            main: "State-of-the-art labs, smart classrooms, Wi-Fi campus, digital library, hostel (boys & girls), transport, sports ground, auditorium, NCC, incubation center, and medical facilities.".into(),
            special: "Virtual labs, R&D center (21,000 sq ft), industry partnerships with ECIL and others.".into(),
            canteen: "Yes, TKRCET has canteen facilities on campus providing food for students and staff. The college facilities include canteen services along with other amenities.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accreditation {
    pub naac: String,
    pub nba: String,
    pub approvals: String,
}

impl Default for Accreditation {
    fn default() -> Self {
        Self {
            naac: "A+ Grade".into(),
            nba: "NBA Accredited".into(),
            approvals: "AICTE approved, UGC recognized 2(f) & 12(B)".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scholarships {
    pub types: Vec<String>,
    pub merit: String,
    pub fee_reimbursement: String,
    pub central_schemes: String,
    pub application: String,
    pub contact: String,
}

impl Default for Scholarships {
    fn default() -> Self {
        Self {
            types: strings(&["Merit-based", "Need-based", "Sports quota", "SC/ST/OBC", "Minority scholarships"]),
            merit: "Available for students with >85% in 12th or CGPA >8.5 in college".into(),
            fee_reimbursement: "TS Government fee reimbursement scheme for eligible students (income criteria apply)".into(),
            central_schemes: "Central sector scholarship, Post-matric scholarship for SC/ST/OBC students".into(),
            application: "TS ePass portal for state scholarships".into(),
            contact: "Contact admissions office or visit https://tkrcet.ac.in/scholarships for details".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    pub btech_annual: String,
    pub mtech_annual: String,
    pub mba_annual: String,
    pub hostel: String,
    pub transport: String,
    pub note: String,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            btech_annual: "₹75,000 - ₹85,000 per year (approx, varies by category)".into(),
            mtech_annual: "₹60,000 - ₹70,000 per year (approx)".into(),
            mba_annual: "₹50,000 - ₹60,000 per year (approx)".into(),
            hostel: "₹40,000 - ₹50,000 per year (including mess)".into(),
            transport: "₹15,000 - ₹25,000 per year (route-dependent)".into(),
            note: "Fees vary by category (Management/Convener quota). Contact admissions for exact details: admissions@tkrcet.ac.in".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Events {
    pub tech_fest: String,
    pub cultural_fest: String,
    pub sports_day: String,
    pub hackathons: String,
    pub workshops: String,
    pub clubs: String,
}

impl Default for Events {
    fn default() -> Self {
        Self {
            tech_fest: "Annual tech fest 'TECHNOVA' with coding competitions, robotics, hackathons, and technical workshops".into(),
            cultural_fest: "Cultural fest 'KALANJALI' with music, dance, drama, and art competitions".into(),
            sports_day: "Annual sports meet with inter-department cricket, football, volleyball, and athletics".into(),
            hackathons: "Regular 24-hour coding hackathons and coding competitions".into(),
            workshops: "Industry expert workshops on AI/ML, Cloud Computing, IoT, and emerging technologies".into(),
            clubs: "Active IEEE, CSI, Coding Club, Robotics Club, and Literary Club".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exams {
    pub mid_term_1: String,
    pub mid_term_2: String,
    pub semester_end: String,
    pub internal_marks: String,
    pub note: String,
}

impl Default for Exams {
    fn default() -> Self {
        Self {
            mid_term_1: "Usually in September (Odd semester) / February (Even semester)".into(),
            mid_term_2: "Usually in November (Odd semester) / April (Even semester)".into(),
            semester_end: "December (Odd semester) / May (Even semester)".into(),
            internal_marks: "Based on mid-terms, assignments, and attendance".into(),
            note: "Check college website or notice board for exact dates each semester".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub name: String,
    pub collection: String,
    pub timings: String,
    pub facilities: String,
    pub membership: String,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            name: "Central Library".into(),
            collection: "50,000+ books, e-journals, IEEE digital library access".into(),
            timings: "9:00 AM to 5:00 PM (Monday-Saturday)".into(),
            facilities: "Digital library, reading rooms, e-resources, internet access".into(),
            membership: "Free for all students and faculty".into(),
        }
    }
}

/// Everything the static facts tool can answer from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub institution: Institution,
    pub personnel: Personnel,
    pub timings: Timings,
    pub history: History,
    pub admissions: Admissions,
    pub courses: Courses,
    pub facilities: Facilities,
    pub accreditation: Accreditation,
    pub scholarships: Scholarships,
    pub fees: Fees,
    pub events: Events,
    pub exams: Exams,
    pub library: Library,
}

impl KnowledgeBase {
    pub fn from_toml(s: &str) -> ConciergeResult<Self> {
        let kb = toml::from_str(s).map_err(|e| ConfigError::Parse {
            document: "knowledge base".into(),
            reason: e.to_string(),
        })?;
        Ok(kb)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConciergeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::errors::ConciergeError;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let kb = KnowledgeBase::from_toml("[personnel]\nprincipal = \"Dr. X\"\n").unwrap();
        assert_eq!(kb.personnel.principal, "Dr. X");
        assert_eq!(kb.personnel.secretary, "Dr. T. Harinath Reddy");
        assert_eq!(kb.personnel.hod.len(), 11);
        assert_eq!(kb.library, Library::default());
    }

    #[test]
    fn hod_table_override_replaces_map() {
        let kb = KnowledgeBase::from_toml("[personnel.hod]\ncse = \"Dr. New\"\n").unwrap();
        assert_eq!(kb.personnel.hod.len(), 1);
        assert_eq!(kb.personnel.hod["cse"], "Dr. New");
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            KnowledgeBase::from_toml("[personnel"),
            Err(ConciergeError::ConfigError(ConfigError::Parse { .. }))
        ));
    }
}
