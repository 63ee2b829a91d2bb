use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::repositories::document_store::{Document, StoredDocument};

// ───── Document keys ─────────────────────────────────────────────────
pub const JOB_TITLE: &str = "jobTitle";
pub const JOB_DESCRIPTION: &str = "jobDescription";
pub const QUALIFICATION: &str = "qualification";
pub const SKILL_SET: &str = "skillSet";
pub const OTHER_REQUIREMENTS: &str = "otherRequirements";
pub const JOB_TYPE: &str = "jobType";
pub const SALARY_RANGE: &str = "salaryRange";
pub const ADDRESS: &str = "address";
pub const OWNER_UID: &str = "uid";

/// The kinds of engagement offered in the job type select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    Internship,
    Contract,
    PartTime,
    FullTime,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::Internship,
        JobType::Contract,
        JobType::PartTime,
        JobType::FullTime,
    ];

    /// Value written to the `jobType` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Internship => "internship",
            JobType::Contract => "contract",
            JobType::PartTime => "part time",
            JobType::FullTime => "full time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
            JobType::PartTime => "Part Time",
            JobType::FullTime => "Full Time",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job_type| job_type.as_str() == value)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One editable input of the job form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    JobTitle,
    JobDescription,
    Qualification,
    SkillSet,
    OtherRequirements,
    JobType,
    SalaryRange,
    Address,
}

impl JobField {
    pub const ALL: [JobField; 8] = [
        JobField::JobTitle,
        JobField::JobDescription,
        JobField::Qualification,
        JobField::SkillSet,
        JobField::OtherRequirements,
        JobField::JobType,
        JobField::SalaryRange,
        JobField::Address,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            JobField::JobTitle => JOB_TITLE,
            JobField::JobDescription => JOB_DESCRIPTION,
            JobField::Qualification => QUALIFICATION,
            JobField::SkillSet => SKILL_SET,
            JobField::OtherRequirements => OTHER_REQUIREMENTS,
            JobField::JobType => JOB_TYPE,
            JobField::SalaryRange => SALARY_RANGE,
            JobField::Address => ADDRESS,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            JobField::JobTitle => "Job Title",
            JobField::JobDescription => "Job Description",
            JobField::Qualification => "Qualification",
            JobField::SkillSet => "Skill Set",
            JobField::OtherRequirements => "Other Requirements",
            JobField::JobType => "Job Type",
            JobField::SalaryRange => "Salary Range",
            JobField::Address => "Address",
        }
    }
}

/// Snapshot of the creation form. Never mutated in place: every edit
/// produces a new value through [`JobForm::with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct JobForm {
    #[serde(rename = "jobTitle", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,

    #[serde(rename = "jobDescription", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Job description is required"))]
    pub job_description: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Qualification is required"))]
    pub qualification: String,

    #[serde(rename = "skillSet", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Skill set is required"))]
    pub skill_set: String,

    #[serde(rename = "otherRequirements", default, deserialize_with = "null_as_empty")]
    pub other_requirements: String,

    #[serde(rename = "jobType", default, deserialize_with = "null_as_empty")]
    pub job_type: String,

    #[serde(rename = "salaryRange", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Salary range is required"))]
    pub salary_range: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

impl JobForm {
    pub fn with(self, field: JobField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            JobField::JobTitle => JobForm { job_title: value, ..self },
            JobField::JobDescription => JobForm { job_description: value, ..self },
            JobField::Qualification => JobForm { qualification: value, ..self },
            JobField::SkillSet => JobForm { skill_set: value, ..self },
            JobField::OtherRequirements => JobForm { other_requirements: value, ..self },
            JobField::JobType => JobForm { job_type: value, ..self },
            JobField::SalaryRange => JobForm { salary_range: value, ..self },
            JobField::Address => JobForm { address: value, ..self },
        }
    }

    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::JobTitle => &self.job_title,
            JobField::JobDescription => &self.job_description,
            JobField::Qualification => &self.qualification,
            JobField::SkillSet => &self.skill_set,
            JobField::OtherRequirements => &self.other_requirements,
            JobField::JobType => &self.job_type,
            JobField::SalaryRange => &self.salary_range,
            JobField::Address => &self.address,
        }
    }

    pub fn is_empty(&self) -> bool {
        JobField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Builds the record written to the store. `uid` is left out when nobody is signed in.
    pub fn to_document(&self, owner: Option<&str>) -> Document {
        let mut document: Document = JobField::ALL
            .iter()
            .map(|field| (field.key().to_string(), Value::String(self.get(*field).to_string())))
            .collect();

        if let Some(uid) = owner {
            document.insert(OWNER_UID.to_string(), Value::String(uid.to_string()));
        }

        document
    }
}

/// An explicit `null` counts as an empty value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A posting as read back from the store. Any key may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub id: String,

    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,

    #[serde(rename = "jobDescription")]
    pub job_description: Option<String>,

    pub qualification: Option<String>,

    #[serde(rename = "skillSet")]
    pub skill_set: Option<String>,

    #[serde(rename = "otherRequirements")]
    pub other_requirements: Option<String>,

    #[serde(rename = "jobType")]
    pub job_type: Option<String>,

    #[serde(rename = "salaryRange")]
    pub salary_range: Option<String>,

    pub address: Option<String>,

    pub uid: Option<String>,
}

impl JobPosting {
    /// Display text for a field; missing values render as empty.
    pub fn text(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or_default()
    }
}

impl From<StoredDocument> for JobPosting {
    fn from(stored: StoredDocument) -> Self {
        let data = &stored.data;
        JobPosting {
            job_title: scalar_text(data, JOB_TITLE),
            job_description: scalar_text(data, JOB_DESCRIPTION),
            qualification: scalar_text(data, QUALIFICATION),
            skill_set: scalar_text(data, SKILL_SET),
            other_requirements: scalar_text(data, OTHER_REQUIREMENTS),
            job_type: scalar_text(data, JOB_TYPE),
            salary_range: scalar_text(data, SALARY_RANGE),
            address: scalar_text(data, ADDRESS),
            uid: scalar_text(data, OWNER_UID),
            id: stored.id,
        }
    }
}

fn scalar_text(document: &Document, key: &str) -> Option<String> {
    match document.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobResponse {
    pub id: String,
    pub message: String,
}
