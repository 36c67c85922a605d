use std::fmt::Write;

use pf_core::catalog::{sample_timeline, Experience, Profile};
use serde::Serialize;

use super::to_json;

#[derive(Serialize)]
struct About {
    profile: Profile,
    experience: Vec<Experience>,
}

pub fn show(json: bool) -> anyhow::Result<String> {
    let about = About {
        profile: Profile::sample(),
        experience: sample_timeline(),
    };
    if json {
        to_json(&about)
    } else {
        Ok(render(&about))
    }
}

fn render(about: &About) -> String {
    let mut out = String::new();
    let profile = &about.profile;

    let _ = writeln!(out, "{} <{}>", profile.name, profile.email);
    for link in &profile.socials {
        let _ = writeln!(out, "  {}: {}", link.label, link.href);
    }
    let stats: Vec<String> = profile
        .stats
        .iter()
        .map(|s| format!("{}{} {}", s.value, s.suffix, s.label))
        .collect();
    let _ = writeln!(out, "  {}", stats.join(" | "));

    for entry in &about.experience {
        let _ = writeln!(out, "\n{} @ {} ({})", entry.role, entry.company, entry.period);
        let _ = writeln!(out, "  {}", entry.description);
        for point in &entry.points {
            let _ = writeln!(out, "  - {point}");
        }
        let _ = writeln!(out, "  tech: {}", entry.tech.join(", "));
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_every_company() {
        let text = show(false).unwrap();
        for entry in sample_timeline() {
            assert!(text.contains(&entry.company));
        }
    }

    #[test]
    fn test_json_has_profile_and_timeline() {
        let value: serde_json::Value = serde_json::from_str(&show(true).unwrap()).unwrap();
        assert_eq!(value["experience"].as_array().map(Vec::len), Some(3));
        assert!(value["profile"]["email"].is_string());
    }
}
