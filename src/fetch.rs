//! Schema download from the schema service.
//!
//! The service serves one document per project and version at
//! `{base_url}/{project}/schema/{version}`; an empty version selects the
//! latest published revision. The service sits behind the company VPN, so
//! connectivity failures are reported separately from HTTP errors and the
//! CLI shows a VPN hint for them.

use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::Schema;

/// Default base URL of the schema service.
pub const DEFAULT_BASE_URL: &str = "https://mammoth.trafi.com";

/// Fetch and decode a schema document.
pub async fn fetch_schema(project: &str, version: &str, base_url: &str) -> Result<Schema> {
    let body = fetch_body(project, version, base_url).await?;
    let schema: Schema = serde_json::from_str(&body)
        .map_err(|e| Error::Download(format!("downloaded schema is not valid JSON: {e}")))?;
    Ok(schema)
}

/// Download a schema document and save it to disk.
///
/// Validates the response decodes as a [`Schema`] before writing.
pub async fn download_schema(
    project: &str,
    version: &str,
    base_url: &str,
    output_path: &Path,
) -> Result<()> {
    let body = fetch_body(project, version, base_url).await?;

    // Validate before writing.
    let schema: Schema = serde_json::from_str(&body)
        .map_err(|e| Error::Download(format!("downloaded schema is not valid JSON: {e}")))?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(output_path, &body).map_err(|e| Error::Write {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    eprintln!(
        "Saved {} schema v{} ({} events, {} types) to {}",
        schema.project_id,
        schema.version_number,
        schema.events.len(),
        schema.types.len(),
        output_path.display()
    );
    Ok(())
}

async fn fetch_body(project: &str, version: &str, base_url: &str) -> Result<String> {
    let url = format!("{base_url}/{project}/schema/{version}");
    eprintln!("Downloading schema from {url}");

    let response = reqwest::get(&url).await.map_err(|e| classify(&url, &e))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| classify(&url, &e))?;

    if !status.is_success() {
        return Err(Error::Download(format!("GET {url} returned {status}\n{body}")));
    }
    Ok(body)
}

/// Timeout and connection failures get their own variant so the CLI can
/// attach the VPN hint; everything else is a plain download error.
fn classify(url: &str, e: &reqwest::Error) -> Error {
    if e.is_timeout() || e.is_connect() {
        Error::Connect(format!("GET {url}: {e}"))
    } else {
        Error::Download(format!("GET {url}: {e}"))
    }
}
