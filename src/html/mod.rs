//! # HTML Rendering
//!
//! Turns a filtered view into markup. Every piece of record text goes through
//! [`escape_html`] before it is placed in the output; record content may come
//! from untrusted reports.

use std::fmt::Write;

use crate::catalog::{FilterOptions, InterviewRecord, Query, Stats, ALL_COMPANIES, ALL_ROLES};

/// Message shown in place of cards when nothing matches.
pub const EMPTY_STATE: &str = "No interviews found matching your criteria.";

/// Escape `&`, `<`, `>`, `"` and `'` for use in text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for a single interview card.
pub fn render_card(record: &InterviewRecord) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"interview-card\">\n");
    html.push_str("  <div class=\"interview-header\">\n");
    let _ = writeln!(
        html,
        "    <div class=\"company-name\">{}</div>",
        escape_html(&record.company)
    );
    html.push_str("    <div class=\"interview-meta\">\n");
    let _ = writeln!(
        html,
        "      <span class=\"meta-badge role-badge\">{}</span>",
        escape_html(&record.role)
    );
    let _ = writeln!(
        html,
        "      <span class=\"meta-badge experience-badge\">{} experience</span>",
        escape_html(&record.experience)
    );
    let _ = writeln!(
        html,
        "      <span class=\"meta-badge date-badge\">{}</span>",
        escape_html(&record.date)
    );
    html.push_str("    </div>\n  </div>\n");

    if let Some(notes) = record.notes() {
        let _ = writeln!(html, "  <p class=\"notes\">{}</p>", escape_html(notes));
    }

    html.push_str("  <div class=\"interview-content\">\n");
    for (index, entry) in record.questions.iter().enumerate() {
        html.push_str("    <div class=\"question-item\">\n");
        let _ = writeln!(
            html,
            "      <div class=\"question-text\">{}. {}</div>",
            index + 1,
            escape_html(&entry.question)
        );
        if let Some(approach) = entry.approach.as_deref().filter(|a| !a.is_empty()) {
            let _ = writeln!(
                html,
                "      <div class=\"approach-text\"><span class=\"approach-label\">Approach:</span> {}</div>",
                escape_html(approach)
            );
        }
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>\n</div>\n");
    html
}

/// Cards for every record, or the empty-state block when there are none.
pub fn render_list(records: &[&InterviewRecord]) -> String {
    if records.is_empty() {
        return format!("<div class=\"no-results\">{EMPTY_STATE}</div>\n");
    }
    records.iter().map(|r| render_card(r)).collect()
}

fn render_select(
    html: &mut String,
    id: &str,
    all_label: &str,
    options: &[String],
    selected: &str,
) {
    let _ = writeln!(html, "<select id=\"{id}\">");
    let marker = |is_selected: bool| if is_selected { " selected" } else { "" };
    let _ = writeln!(
        html,
        "  <option value=\"\"{}>{}</option>",
        marker(selected.is_empty()),
        escape_html(all_label)
    );
    for option in options {
        let escaped = escape_html(option);
        let _ = writeln!(
            html,
            "  <option value=\"{escaped}\"{}>{escaped}</option>",
            marker(option == selected)
        );
    }
    html.push_str("</select>\n");
}

/// A standalone document: filter controls, counters, and the card list.
pub fn render_page(records: &[&InterviewRecord], options: &FilterOptions, query: &Query) -> String {
    let stats = Stats::from_records(records.iter().copied());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Interview Questions</title>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n<div class=\"filters\">\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"searchInput\" value=\"{}\" placeholder=\"Search questions, companies, roles...\">",
        escape_html(&query.search)
    );
    render_select(
        &mut html,
        "companyFilter",
        ALL_COMPANIES,
        &options.companies,
        &query.company,
    );
    render_select(&mut html, "roleFilter", ALL_ROLES, &options.roles, &query.role);
    html.push_str("</div>\n<div class=\"stats\">\n");
    let _ = writeln!(
        html,
        "<span class=\"stat\"><span id=\"totalInterviews\">{}</span> Interviews</span>",
        stats.total
    );
    let _ = writeln!(
        html,
        "<span class=\"stat\"><span id=\"totalCompanies\">{}</span> Companies</span>",
        stats.companies
    );
    html.push_str("</div>\n<div id=\"interviewsList\">\n");
    html.push_str(&render_list(records));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

const PAGE_STYLE: &str = "<style>
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; color: #1e1e2e; }
.filters, .stats { display: flex; gap: 1rem; margin-bottom: 1rem; }
.interview-card { border: 1px solid #ccd0da; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.company-name { font-size: 1.3rem; font-weight: bold; }
.meta-badge { display: inline-block; padding: 0.1rem 0.5rem; margin-right: 0.4rem; border-radius: 4px; background: #eff1f5; }
.notes { color: #6c6f85; font-style: italic; }
.question-item { margin: 0.6rem 0; }
.approach-text { margin-left: 1.5rem; color: #40a02b; }
.approach-label { font-weight: bold; }
.no-results { text-align: center; color: #6c6f85; padding: 2rem; }
</style>
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QuestionEntry;

    fn record(company: &str, notes: Option<&str>, questions: Vec<QuestionEntry>) -> InterviewRecord {
        InterviewRecord {
            id: "r1".to_string(),
            company: company.to_string(),
            role: "Data Engineer".to_string(),
            experience: "5 years".to_string(),
            date: "January 2025".to_string(),
            file: None,
            notes: notes.map(str::to_string),
            questions,
            raw_content: None,
        }
    }

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(
            escape_html(r#"a & b < c > d " e ' f"#),
            "a &amp; b &lt; c &gt; d &quot; e &#039; f"
        );
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_html_escapes_existing_entities() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_card_escapes_script_in_question() {
        let card = render_card(&record(
            "Acme",
            None,
            vec![QuestionEntry::new("<script>alert(1)</script>", None)],
        ));
        assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!card.contains("<script>"));
    }

    #[test]
    fn test_card_numbers_questions_and_omits_missing_approach() {
        let card = render_card(&record(
            "Acme",
            None,
            vec![
                QuestionEntry::new("First", Some("Do this")),
                QuestionEntry::new("Second", None),
            ],
        ));
        assert!(card.contains("1. First"));
        assert!(card.contains("2. Second"));
        assert_eq!(card.matches("approach-text").count(), 1);
        assert!(card.contains("Do this"));
        assert!(!card.contains("class=\"notes\""));
    }

    #[test]
    fn test_card_shows_notes_and_experience() {
        let card = render_card(&record("O'Reilly", Some("Mostly SQL"), Vec::new()));
        assert!(card.contains("O&#039;Reilly"));
        assert!(card.contains("<p class=\"notes\">Mostly SQL</p>"));
        assert!(card.contains("5 years experience"));
    }

    #[test]
    fn test_render_list_empty_state() {
        let html = render_list(&[]);
        assert!(html.contains(EMPTY_STATE));
        assert!(!html.contains("interview-card"));
    }

    #[test]
    fn test_render_page_counters_and_selected_option() {
        let a = record("Acme", None, Vec::new());
        let mut b = record("Acme", None, Vec::new());
        b.id = "r2".to_string();
        let options = FilterOptions {
            companies: vec!["Acme".to_string(), "Globex".to_string()],
            roles: vec!["Data Engineer".to_string()],
        };
        let query = Query::new("\"quoted\"", "Acme", "");
        let html = render_page(&[&a, &b], &options, &query);

        assert!(html.contains("<span id=\"totalInterviews\">2</span>"));
        assert!(html.contains("<span id=\"totalCompanies\">1</span>"));
        assert!(html.contains("<option value=\"Acme\" selected>Acme</option>"));
        assert!(html.contains("<option value=\"Globex\">Globex</option>"));
        assert!(html.contains("<option value=\"\" selected>All Roles</option>"));
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
        assert_eq!(html.matches("class=\"interview-card\"").count(), 2);
    }
}
