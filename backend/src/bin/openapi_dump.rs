//! Print the OpenAPI document as JSON.

use std::io::Write;

use utoipa::OpenApi;
use webinars::doc::ApiDoc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
