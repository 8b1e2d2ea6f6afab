//! Ordered fact-rule table. The first rule whose triggers match and whose
//! answer function yields `Some` wins.

use concierge_core::text::{contains_any, tokens};

use super::knowledge::KnowledgeBase;

pub struct FactRule {
    pub name: &'static str,
    /// Word-prefix phrases; any one fires the rule.
    pub triggers: &'static [&'static str],
    /// Phrases that veto the rule even when a trigger matched.
    pub excludes: &'static [&'static str],
    pub answer: fn(&KnowledgeBase, &str) -> Option<String>,
}

impl FactRule {
    pub fn matches(&self, query: &str) -> bool {
        contains_any(query, self.triggers) && !contains_any(query, self.excludes)
    }
}

pub static FACT_RULES: &[FactRule] = &[
    FactRule {
        name: "principal",
        triggers: &["principal", "principle"],
        excludes: &["vice"],
        answer: |kb, _| {
            Some(format!(
                "The Principal of {} is {}.",
                kb.institution.short_name, kb.personnel.principal
            ))
        },
    },
    FactRule {
        name: "vice_principal",
        triggers: &["vice principal"],
        excludes: &[],
        answer: |kb, _| Some(format!("The Vice Principal is {}.", kb.personnel.vice_principal)),
    },
    FactRule {
        name: "secretary",
        triggers: &["secretary"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "The Secretary of {} is {}.",
                kb.institution.short_name, kb.personnel.secretary
            ))
        },
    },
    FactRule {
        name: "chairman",
        triggers: &["chairman"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "The Chairman of {} is {}.",
                kb.institution.short_name, kb.personnel.chairman
            ))
        },
    },
    FactRule {
        name: "founder",
        triggers: &["founder", "founded by", "who started"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} was founded by {} in {}.",
                kb.institution.short_name, kb.history.founder, kb.history.established
            ))
        },
    },
    FactRule {
        name: "hod",
        triggers: &["hod", "head of department"],
        excludes: &[],
        answer: hod_answer,
    },
    FactRule {
        name: "timings",
        triggers: &["timing", "hours", "time"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "College timings: {}. Lunch break: {}.",
                kb.timings.working_hours, kb.timings.lunch_break
            ))
        },
    },
    FactRule {
        name: "location",
        triggers: &["location", "address", "where"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} is located at {}.",
                kb.institution.short_name, kb.history.location
            ))
        },
    },
    FactRule {
        name: "established",
        triggers: &["established", "founded", "started"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} was established in {} on a {} campus.",
                kb.institution.short_name, kb.history.established, kb.history.campus_size
            ))
        },
    },
    FactRule {
        name: "courses",
        triggers: &["course", "program", "branch", "dept"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} offers {}. UG Programs: {}. PG Programs: {}.",
                kb.institution.short_name,
                kb.courses.total,
                kb.courses.ug.join(", "),
                kb.courses.pg.join(", ")
            ))
        },
    },
    FactRule {
        name: "facilities",
        triggers: &["facilit", "infrastructure", "transport", "ground", "playground", "sports"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} Special Features: {}",
                kb.facilities.main, kb.facilities.special
            ))
        },
    },
    FactRule {
        name: "accreditation",
        triggers: &["naac", "nba", "accredit"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} is {} accredited, {}, and {}.",
                kb.institution.short_name,
                kb.accreditation.naac,
                kb.accreditation.nba,
                kb.accreditation.approvals
            ))
        },
    },
    FactRule {
        name: "canteen",
        triggers: &["food", "canteen", "mess", "cafeteria"],
        excludes: &[],
        answer: |kb, _| Some(kb.facilities.canteen.clone()),
    },
    FactRule {
        name: "about",
        triggers: &["about college", "tell about", "college life", "about tkrcet"],
        excludes: &[],
        answer: |kb, _| {
            Some(format!(
                "{} ({}) was established in {} at {}. It is affiliated to {} and is {} accredited. \
                 The college offers {} with excellent facilities including {}",
                kb.institution.short_name,
                kb.institution.full_name,
                kb.history.established,
                kb.history.location,
                kb.history.affiliation,
                kb.accreditation.naac,
                kb.courses.total,
                kb.facilities.main
            ))
        },
    },
    FactRule {
        name: "scholarships",
        triggers: &["scholarship", "financial aid"],
        excludes: &[],
        answer: |kb, _| {
            let s = &kb.scholarships;
            Some(format!(
                "{} offers various scholarships: {}. Merit scholarship: {}. {}. {}. \
                 Apply through: {}. Contact: {}",
                kb.institution.short_name,
                s.types.join(", "),
                s.merit,
                s.fee_reimbursement,
                s.central_schemes,
                s.application,
                s.contact
            ))
        },
    },
    FactRule {
        name: "fees",
        triggers: &["fee", "cost", "tuition"],
        excludes: &[],
        answer: |kb, _| {
            let f = &kb.fees;
            Some(format!(
                "{} Fee Structure (approximate): B.Tech: {}, M.Tech: {}, MBA: {}. \
                 Hostel: {}, Transport: {}. Note: {}",
                kb.institution.short_name,
                f.btech_annual,
                f.mtech_annual,
                f.mba_annual,
                f.hostel,
                f.transport,
                f.note
            ))
        },
    },
    FactRule {
        name: "admissions",
        triggers: &["admission", "eligibility"],
        excludes: &[],
        answer: |kb, _| {
            let a = &kb.admissions;
            Some(format!("{} Eligibility: {} {}", a.process, a.eligibility, a.contact))
        },
    },
    FactRule {
        name: "events",
        triggers: &["event", "fest", "competition"],
        excludes: &[],
        answer: |kb, _| {
            let e = &kb.events;
            Some(format!(
                "{} Events: Tech Fest: {}. Cultural Fest: {}. Sports: {}. Also: {}, {}. Clubs: {}.",
                kb.institution.short_name,
                e.tech_fest,
                e.cultural_fest,
                e.sports_day,
                e.hackathons,
                e.workshops,
                e.clubs
            ))
        },
    },
    FactRule {
        name: "exams",
        triggers: &["exam", "test", "mid", "semester"],
        excludes: &[],
        answer: |kb, _| {
            let e = &kb.exams;
            Some(format!(
                "Exam Schedule: Mid-term 1: {}, Mid-term 2: {}, Semester End: {}. {}. {}",
                e.mid_term_1, e.mid_term_2, e.semester_end, e.internal_marks, e.note
            ))
        },
    },
    FactRule {
        name: "library",
        triggers: &["library", "book"],
        excludes: &[],
        answer: |kb, _| {
            let l = &kb.library;
            Some(format!(
                "{}: {}. Timings: {}. Facilities: {}. {}",
                l.name, l.collection, l.timings, l.facilities, l.membership
            ))
        },
    },
];

/// Lists every department named in the query. Falls through when none is.
fn hod_answer(kb: &KnowledgeBase, query: &str) -> Option<String> {
    let words = tokens(query);
    let found: Vec<String> = kb
        .personnel
        .hod
        .iter()
        .filter(|(dept, _)| words.iter().any(|w| w == *dept))
        .map(|(dept, name)| format!("The HOD of {} is {}", dept.to_uppercase(), name))
        .collect();

    if found.is_empty() {
        None
    } else {
        Some(format!("{}.", found.join(". ")))
    }
}

/// First matching rule and its answer.
pub fn lookup(kb: &KnowledgeBase, query: &str) -> Option<(&'static str, String)> {
    FACT_RULES
        .iter()
        .filter(|rule| rule.matches(query))
        .find_map(|rule| (rule.answer)(kb, query).map(|answer| (rule.name, answer)))
}
