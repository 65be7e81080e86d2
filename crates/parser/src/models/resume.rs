use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeEducation {
    pub school: String,
    pub degree: String,
    pub gpa: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeWorkExperience {
    pub company: String,
    pub job_title: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeProject {
    pub project: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeSkills {
    pub featured_skills: Vec<String>,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeCustom {
    pub descriptions: Vec<String>,
}

/// The structured record handed to the resume builder. Every list is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub profile: ResumeProfile,
    pub educations: Vec<ResumeEducation>,
    pub work_experiences: Vec<ResumeWorkExperience>,
    pub projects: Vec<ResumeProject>,
    pub skills: ResumeSkills,
    pub custom: ResumeCustom,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_resume_serializes_every_field() {
        let value = serde_json::to_value(Resume::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "profile": {
                    "name": "", "email": "", "phone": "",
                    "location": "", "url": "", "summary": ""
                },
                "educations": [],
                "workExperiences": [],
                "projects": [],
                "skills": { "featuredSkills": [], "descriptions": [] },
                "custom": { "descriptions": [] }
            })
        );
    }

    #[test]
    fn test_work_experience_uses_camel_case_keys() {
        let work = ResumeWorkExperience {
            company: "Google".to_string(),
            job_title: "Senior Engineer".to_string(),
            date: "Jan 2020 - Present".to_string(),
            descriptions: vec![],
        };
        let value = serde_json::to_value(&work).unwrap();
        assert_eq!(value["jobTitle"], "Senior Engineer");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let resume: Resume = serde_json::from_str(r#"{"profile":{"name":"Jane"}}"#).unwrap();
        assert_eq!(resume.profile.name, "Jane");
        assert!(resume.educations.is_empty());
        assert!(resume.skills.featured_skills.is_empty());
    }
}
