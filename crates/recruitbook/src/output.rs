//! Rendering of search results.

use anyhow::Result;
use console::style;
use recruitbook_seeker::Person;
use serde::Serialize;

use crate::book::Listed;

#[derive(Serialize)]
struct JsonHit<'a> {
    index: usize,
    #[serde(flatten)]
    person: &'a Person,
}

/// Numbered plain-text listing followed by a summary line.
pub fn render_text(hits: &[Listed<'_>], colored: bool) -> String {
    let mut out = String::new();
    for hit in hits {
        let person = hit.person;
        let name = if colored {
            style(&person.name).bold().to_string()
        } else {
            person.name.clone()
        };
        out.push_str(&format!("{}. {}\n", hit.index, name));
        for (label, value) in details(person) {
            if !value.is_empty() {
                out.push_str(&format!("   {label}: {value}\n"));
            }
        }
    }
    out.push_str(&summary(hits.len()));
    out.push('\n');
    out
}

/// Pretty JSON array of hits, each carrying its book index.
pub fn render_json(hits: &[Listed<'_>]) -> Result<String> {
    let rows: Vec<JsonHit<'_>> = hits
        .iter()
        .map(|hit| JsonHit {
            index: hit.index,
            person: hit.person,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn summary(count: usize) -> String {
    match count {
        1 => "1 candidate listed!".to_string(),
        n => format!("{n} candidates listed!"),
    }
}

fn details(person: &Person) -> [(&'static str, String); 8] {
    [
        ("Phone", person.phone.clone()),
        ("Email", person.email.clone()),
        ("Role", person.role.clone()),
        ("Employment type", person.employment_type.clone()),
        (
            "Expected salary",
            person
                .expected_salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        ),
        ("Education", person.level_of_education.clone()),
        (
            "Experience",
            person
                .experience
                .map(|years| format!("{years} years"))
                .unwrap_or_default(),
        ),
        ("Tags", person.tags.join(", ")),
    ]
}
