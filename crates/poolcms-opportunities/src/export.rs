// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! CSV export of opportunity listings

use poolcms_domain_types::Opportunity;

pub const CSV_HEADER: [&str; 6] = [
    "Title",
    "Description",
    "Consultant Email",
    "Start Date",
    "End Date",
    "Status",
];

/// Render records as CSV, one line per record after the header
///
/// Lines are separated by `\n` with no trailing newline. Fields containing
/// a comma, quote or line break are quoted with inner quotes doubled.
pub fn export_csv<'a, I>(opportunities: I) -> String
where
    I: IntoIterator<Item = &'a Opportunity>,
{
    let mut lines = vec![CSV_HEADER.join(",")];
    for opportunity in opportunities {
        let fields = [
            opportunity.title.as_str(),
            opportunity.description.as_str(),
            opportunity.consultant_email.as_str(),
            opportunity.start_date.as_str(),
            opportunity.end_date.as_str(),
            opportunity.status.as_str(),
        ];
        lines.push(
            fields
                .iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
