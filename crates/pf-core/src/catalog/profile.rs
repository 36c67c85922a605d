use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Headline figure shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub suffix: String,
}

/// Availability slot listed next to the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub day: String,
    pub time: String,
    pub status: String,
}

/// Owner profile: hero copy, socials and resume link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub resume_url: String,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<String>,
    pub stats: Vec<Stat>,
    pub availability: Vec<Availability>,
}

impl Profile {
    pub fn sample() -> Self {
        let link = |label: &str, href: &str| SocialLink {
            label: label.into(),
            href: href.into(),
        };
        let stat = |value: &str, label: &str, suffix: &str| Stat {
            value: value.into(),
            label: label.into(),
            suffix: suffix.into(),
        };
        let slot = |day: &str, time: &str, status: &str| Availability {
            day: day.into(),
            time: time.into(),
            status: status.into(),
        };

        Self {
            name: "Antara Bhavsar".into(),
            email: "antarabhavsar44@gmail.com".into(),
            resume_url:
                "https://drive.google.com/file/d/1ys0QiERRUxpTa40KFDUgZkWZH8mbzbBp/view?usp=drive_link"
                    .into(),
            socials: vec![
                link("GitHub", "https://github.com/asb404"),
                link(
                    "LinkedIn",
                    "https://www.linkedin.com/in/antara-bhavsar-74b7a4187/",
                ),
                link("Email", "mailto:antarabhavsar44@gmail.com"),
            ],
            skills: [
                "React",
                "Next.js",
                "TypeScript",
                "AI Systems",
                "LLMs / RAG",
                "FastAPI",
                "Spring Boot",
                "AWS",
                "Node.js",
                "Python",
                "Java",
                "Kotlin",
                "Docker",
                "Kubernetes",
                "SQL",
                "Android SDK",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            stats: vec![
                stat("2+", "Years Experience", "in Production"),
                stat("100K+", "Users Impacted", "Worldwide"),
                stat("15+", "Projects", "Delivered"),
                stat("99.9%", "System Uptime", "Average"),
            ],
            availability: vec![
                slot("Mon - Wed", "9:00 AM - 6:00 PM", "Available"),
                slot("Weekends", "Flexible hours", "Available"),
                slot("Response Time", "Within 24 hours", "Fast"),
            ],
        }
    }
}
