//! Sample portfolio served by the mock backend.

use serde_json::{json, Value};

/// The resources behind each endpoint, as raw JSON payloads (no envelope).
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Value,
    pub experiences: Vec<Value>,
    pub education: Vec<Value>,
    pub skills: Value,
    pub projects: Vec<Value>,
}

impl Portfolio {
    pub fn empty() -> Self {
        Self {
            profile: json!({
                "name": "",
                "title": "",
                "tagline": "",
                "bio": "",
                "email": ""
            }),
            experiences: Vec::new(),
            education: Vec::new(),
            skills: json!({}),
            projects: Vec::new(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: json!({
                "name": "Jordan Reyes",
                "title": "Data Analyst",
                "tagline": "Turning messy data into decisions",
                "bio": "Analyst with a background in statistics and a habit of automating reports.",
                "email": "jordan@example.com",
                "phone": "+1 555 0100",
                "location": "Austin, TX",
                "avatar": "/images/avatar.jpg",
                "careerInterests": ["Analytics engineering", "Experimentation"],
                "social": {
                    "github": "https://github.com/jreyes",
                    "linkedin": "https://linkedin.com/in/jreyes"
                }
            }),
            experiences: vec![
                json!({
                    "id": 1,
                    "company": "Northwind Retail",
                    "position": "Data Analyst",
                    "type": "Full-time",
                    "location": "Austin, TX",
                    "startDate": "2022-03",
                    "endDate": "Present",
                    "description": "Own weekly sales reporting and demand forecasts.",
                    "technologies": ["SQL", "Python", "Power BI"],
                    "achievements": ["Cut report turnaround from two days to one hour"]
                }),
                json!({
                    "id": 2,
                    "company": "Contoso Health",
                    "position": "Analytics Intern",
                    "type": "Internship",
                    "location": "Remote",
                    "startDate": "2021-06",
                    "endDate": "2021-12",
                    "description": "Built readmission dashboards for clinical staff.",
                    "technologies": ["R", "Tableau"],
                    "learnings": ["Working with HIPAA-restricted data"]
                }),
            ],
            education: vec![json!({
                "id": 1,
                "institution": "University of Texas",
                "degree": "B.S.",
                "field": "Statistics",
                "startDate": "2017-08",
                "endDate": "2021-05",
                "status": "Graduated",
                "gpa": "3.7",
                "description": "Focus on applied regression and survey methods.",
                "courses": ["Linear Models", "Bayesian Statistics"],
                "competencies": ["Experimental design"]
            })],
            skills: json!({
                "analytical": [
                    { "name": "Statistical modeling", "level": 85 },
                    { "name": "A/B testing", "level": 80 }
                ],
                "dataSkills": [
                    { "name": "SQL", "level": 90, "icon": "database" },
                    { "name": "Data cleaning", "level": 88 }
                ],
                "programming": [
                    { "name": "Python", "level": 85, "icon": "python" },
                    { "name": "R", "level": 70 }
                ],
                "soft": ["Stakeholder communication", "Mentoring"],
                "tools": ["Power BI", "Tableau", "dbt"]
            }),
            projects: vec![
                json!({
                    "id": 1,
                    "title": "Churn Early Warning",
                    "category": "Machine Learning",
                    "description": "Gradient-boosted model flagging at-risk subscribers.",
                    "image": "/images/churn.png",
                    "technologies": ["Python", "scikit-learn"],
                    "highlights": ["0.84 AUC on holdout"],
                    "githubUrl": "https://github.com/jreyes/churn",
                    "featured": true
                }),
                json!({
                    "id": 2,
                    "title": "Sales Dashboard",
                    "category": "BI",
                    "description": "Self-serve regional sales dashboard.",
                    "technologies": ["Power BI", "SQL"],
                    "features": ["Drill-through by store", "Weekly refresh"],
                    "liveUrl": "https://example.com/sales"
                }),
            ],
        }
    }
}

/// Find the item in `items` whose `id` renders to `id`.
pub fn find_by_id<'a>(items: &'a [Value], id: &str) -> Option<&'a Value> {
    items.iter().find(|item| match &item["id"] {
        Value::Number(n) => n.to_string() == id,
        Value::String(s) => s == id,
        _ => false,
    })
}
