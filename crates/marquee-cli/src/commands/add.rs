use anyhow::Result;

use marquee_api::{CatalogClient, Config};
use marquee_core::MovieDraft;

/// Submit a new movie draft to the catalog endpoint.
///
/// Fire-and-forget: the response status is not inspected and the local
/// list is not re-fetched. Transport failures are logged, not fatal.
pub async fn run_add(
    config: &Config,
    title: String,
    opening_text: String,
    release_date: String,
) -> Result<()> {
    let client = CatalogClient::new(&config.endpoint, config.timeout())?;
    let draft = MovieDraft::new(title, opening_text, release_date);

    log::info!("Submitting '{}' to {}", draft.title, config.endpoint);

    match client.submit(&draft).await {
        Ok(()) => {
            println!("✓ Submitted '{}'", draft.title);
            println!("  Run 'marquee list' to see the updated catalog");
        }
        Err(err) => {
            log::warn!("submission failed: {}", err);
        }
    }

    Ok(())
}
