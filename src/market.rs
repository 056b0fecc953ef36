use crate::models::MarketFit;

pub const UNKNOWN_SALARY: &str = "Data not available";
pub const UNKNOWN_DEMAND: &str = "Unknown";

const JOB_ROLES: &[(&str, &str, &str)] = &[
    ("software engineer", "₹80,000 - ₹130,000", "High"),
    ("devops engineer", "₹50,000 - ₹100,000", "High"),
    ("cloud engineer", "₹50,000 - ₹80,000", "Medium"),
    ("data scientist", "₹60,000 - ₹120,000", "High"),
    ("front-end developer", "₹30,000 - ₹80,000", "Medium"),
    ("back-end developer", "₹40,000 - ₹100,000", "High"),
    ("full-stack developer", "₹50,000 - ₹110,000", "High"),
    ("mobile app developer", "₹40,000 - ₹90,000", "Medium"),
];

/// Exact lookup on the trimmed, lower-cased title. Unknown titles get the
/// "Data not available" / "Unknown" pair.
pub fn job_market_fit(job_title: &str) -> MarketFit {
    let title = job_title.trim().to_lowercase();
    let (salary, demand) = JOB_ROLES
        .iter()
        .find(|(role, _, _)| *role == title)
        .map(|(_, salary, demand)| (*salary, *demand))
        .unwrap_or((UNKNOWN_SALARY, UNKNOWN_DEMAND));
    MarketFit {
        salary_range: salary.to_string(),
        demand: demand.to_string(),
    }
}
