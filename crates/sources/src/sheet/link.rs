use url::Url;

use crate::source::SourceError;

const GOOGLE_DOCS_HOST: &str = "docs.google.com";

/// Turn a sheet link into a URL that answers with CSV.
///
/// Google Sheets share links (`/spreadsheets/d/<id>/edit?usp=sharing`) are
/// rewritten to `/spreadsheets/d/<id>/export?format=csv`, keeping the tab's
/// `gid` when the link names one. Published-to-web links
/// (`/spreadsheets/d/e/<pubid>/pub?output=csv`) and any other http(s) URL are
/// assumed to serve CSV already and are returned as is.
///
/// # Errors
///
/// Returns `SourceError::InvalidUrl` for unparsable links, non-http schemes,
/// or Google Docs links without a spreadsheet id.
pub fn export_url(raw: &str) -> Result<Url, SourceError> {
    let invalid = |reason: &str| SourceError::InvalidUrl {
        raw: raw.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) link"));
    }
    if parsed.host_str() != Some(GOOGLE_DOCS_HOST) {
        return Ok(parsed);
    }

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(Iterator::collect)
        .unwrap_or_default();
    let id = match segments.as_slice() {
        ["spreadsheets", "d", "e", ..] => return Ok(parsed),
        ["spreadsheets", "d", id, ..] if !id.is_empty() => *id,
        _ => return Err(invalid("missing spreadsheet id")),
    };

    let gid = parsed
        .query_pairs()
        .find(|(key, _)| key == "gid")
        .map(|(_, value)| value.into_owned())
        .or_else(|| {
            parsed
                .fragment()
                .and_then(|f| f.strip_prefix("gid="))
                .map(str::to_owned)
        });

    let mut export = Url::parse(&format!("https://{GOOGLE_DOCS_HOST}/spreadsheets/d/{id}/export"))
        .map_err(|e| invalid(&e.to_string()))?;
    {
        let mut query = export.query_pairs_mut();
        query.append_pair("format", "csv");
        if let Some(gid) = gid.as_deref() {
            query.append_pair("gid", gid);
        }
    }
    Ok(export)
}
