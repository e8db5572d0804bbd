//! Printable HTML member list; the browser prints it on load

use std::sync::OnceLock;

use chrono::NaiveDate;
use minijinja::{context, Environment, Value};

use crate::core::config::ExportConfig;
use crate::core::error::Result;
use crate::features::exports::models::PrintRow;

const MEMBERS_PRINT_TEMPLATE: &str = "members_print.html";

static PRINT_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Templates are compiled in; the `.html` suffix turns on auto-escaping
fn environment() -> &'static Environment<'static> {
    PRINT_ENV.get_or_init(|| {
        let mut env = Environment::new();
        if let Err(e) = env.add_template(
            MEMBERS_PRINT_TEMPLATE,
            include_str!("../../../../templates/exports/members_print.html"),
        ) {
            tracing::error!("Failed to load print template: {}", e);
        }
        env
    })
}

pub fn member_print_html(
    rows: &[PrintRow],
    config: &ExportConfig,
    today: NaiveDate,
) -> Result<String> {
    let template = environment().get_template(MEMBERS_PRINT_TEMPLATE)?;
    let html = template.render(context! {
        trust_name => config.trust_name,
        footer => config.footer,
        generated_on => Value::from_safe_string(today.format("%d/%m/%Y").to_string()),
        total => rows.len(),
        rows => rows,
    })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::members::models::Member;

    #[test]
    fn test_print_document_lists_members_and_prints_on_load() {
        let members = [
            Member {
                full_name: "Ramesh".to_string(),
                full_name_marathi: Some("रमेश".to_string()),
                ..Default::default()
            },
            Member {
                full_name: "<b>Suresh</b>".to_string(),
                ..Default::default()
            },
        ];
        let rows: Vec<PrintRow> = members.iter().map(PrintRow::from).collect();

        let html = member_print_html(
            &rows,
            &ExportConfig::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        )
        .unwrap();

        assert!(html.contains("आत्मप्रवर्तक संस्था भुगांव"));
        assert!(html.contains("Generated on: 10/05/2024 | Total Members: 2"));
        assert!(html.contains("<td>रमेश</td>"));
        assert!(html.contains("&lt;b&gt;Suresh"));
        assert!(!html.contains("<b>Suresh"));
        assert!(html.contains("window.print()"));
    }
}
