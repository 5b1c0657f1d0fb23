use crate::domain::model::ReferralRecord;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation;
use url::Url;

/// Parse the delimited input file into referral records.
///
/// The file must carry a header row with a `link` column; a `name` column is
/// optional. Row-level problems (missing link, non-http link, no `code`
/// query parameter) skip the row and the run continues; anything wrong with
/// the file itself is fatal and propagates to the caller.
pub fn parse_records(raw: &[u8]) -> Result<Vec<ReferralRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(raw);

    let headers = reader.headers()?.clone();
    let link_idx = headers
        .iter()
        .position(|h| h.trim() == "link")
        .ok_or_else(|| CheckError::ProcessingError {
            message: "input file has no 'link' column".to_string(),
        })?;
    let name_idx = headers.iter().position(|h| h.trim() == "name");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let url = match row.get(link_idx).map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => continue,
        };

        if let Err(e) = validation::validate_url("link", url) {
            tracing::warn!("Skipping row: {}", e);
            continue;
        }

        let code = match extract_code(url) {
            Some(code) => code,
            None => {
                tracing::warn!("Could not extract code from {}", url);
                continue;
            }
        };

        let name = name_idx
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
            .to_string();

        records.push(ReferralRecord {
            url: url.to_string(),
            name,
            code,
        });
    }

    Ok(records)
}

/// First `code` query parameter of the URL, percent-decoded. None when the
/// parameter is absent or empty.
pub fn extract_code(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}
