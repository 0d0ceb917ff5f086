use crate::models::{ManifestSoup, SoupEntry};

pub const TABLE_HEADER: &str = "| Package Name | Programming Languages | Website | Version | Risk Level | Verification of Reasoning |\n|---|---|---|---|---|---|\n";

/// Render one entry as a table row. Cell values are written verbatim.
pub fn render_row(entry: &SoupEntry) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} |",
        entry.name,
        entry.languages,
        entry.site,
        entry.version,
        entry.risk_level,
        entry.verification
    )
}

/// Render the table of one manifest.
///
/// Rows are ordered by a plain string sort of the rendered row, so the order is
/// case-sensitive and ties fall through to the later columns.
pub fn render_table(entries: &[SoupEntry]) -> String {
    let mut rows: Vec<String> = entries.iter().map(render_row).collect();
    rows.sort();
    format!("{}{}", TABLE_HEADER, rows.join("\n"))
}

/// Render one `## <manifest>` section including its trailing blank line.
pub fn render_section(soup: &ManifestSoup) -> String {
    format!("## {}\n\n{}\n\n", soup.manifest, render_table(&soup.entries))
}

/// Render the whole register, sections in the given order.
pub fn render(register: &[ManifestSoup]) -> String {
    register.iter().map(render_section).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Languages, Site, Unresolved};

    fn entry(name: &str, site: &str) -> SoupEntry {
        SoupEntry {
            name: name.to_string(),
            languages: Languages::Classified(vec!["JavaScript".to_string()]),
            site: Site::Homepage(site.to_string()),
            version: "^1.0.0".to_string(),
            risk_level: "Low".to_string(),
            verification: "SOUP analysed and accepted by developer".to_string(),
        }
    }

    #[test]
    fn test_render_row() {
        assert_eq!(
            render_row(&entry("express", "http://expressjs.com/")),
            "| express | JavaScript | http://expressjs.com/ | ^1.0.0 | Low | SOUP analysed and accepted by developer |"
        );
    }

    #[test]
    fn test_rows_sorted_by_rendered_text() {
        let table = render_table(&[entry("b", "x"), entry("a", "y")]);
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert!(rows[0].starts_with("| a |"));
        assert!(rows[1].starts_with("| b |"));
    }

    #[test]
    fn test_sort_is_case_sensitive_on_whole_row() {
        let table = render_table(&[entry("apple", "x"), entry("Zebra", "x"), entry("apple", "a")]);
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert!(rows[0].starts_with("| Zebra |"));
        assert!(rows[1].contains("| apple | JavaScript | a |"));
        assert!(rows[2].contains("| apple | JavaScript | x |"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        assert_eq!(render_table(&[]), TABLE_HEADER);
        let section = render_section(&ManifestSoup {
            manifest: "empty".to_string(),
            entries: vec![],
        });
        assert_eq!(section, format!("## empty\n\n{}\n\n", TABLE_HEADER));
    }

    #[test]
    fn test_render_register() {
        let unresolved = SoupEntry {
            name: "left-pad".to_string(),
            languages: Languages::Unknown(Unresolved::VersionNotPublished("1.0.0".to_string())),
            site: Site::Unknown(Unresolved::VersionNotPublished("1.0.0".to_string())),
            version: "1.0.0".to_string(),
            risk_level: "Low".to_string(),
            verification: "SOUP analysed and accepted by developer".to_string(),
        };
        let register = vec![
            ManifestSoup {
                manifest: "demo".to_string(),
                entries: vec![unresolved],
            },
            ManifestSoup {
                manifest: "web".to_string(),
                entries: vec![entry("react", "https://react.dev/")],
            },
        ];

        let out = render(&register);
        assert_eq!(
            out,
            format!(
                "## demo\n\n{}| left-pad | unknown | private repo | 1.0.0 | Low | SOUP analysed and accepted by developer |\n\n\
                 ## web\n\n{}| react | JavaScript | https://react.dev/ | ^1.0.0 | Low | SOUP analysed and accepted by developer |\n\n",
                TABLE_HEADER, TABLE_HEADER
            )
        );
    }
}
