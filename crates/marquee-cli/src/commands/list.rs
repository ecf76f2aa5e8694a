use anyhow::Result;

use marquee_api::{CatalogClient, Config, FetchController};
use marquee_core::{FetchState, EMPTY_MESSAGE};

/// Run one fetch cycle and print the result.
pub async fn run_list(config: &Config) -> Result<()> {
    log::info!("Fetching movies from {}", config.endpoint);

    let client = CatalogClient::new(&config.endpoint, config.timeout())?;
    let mut controller = FetchController::new(client);

    match controller.refresh().await {
        FetchState::Loaded(movies) if movies.is_empty() => {
            println!("{}", EMPTY_MESSAGE);
        }
        FetchState::Loaded(movies) => {
            println!();
            println!("  {:<8} {:<40} {:<12}", "Id", "Title", "Released");
            for movie in movies {
                println!(
                    "  {:<8} {:<40} {:<12}",
                    movie.id, movie.title, movie.release_date
                );
            }
            println!("\n  {} movies", movies.len());
        }
        FetchState::Failed(message) => {
            // The error renders in place of content, as in the list view.
            println!("{}", message);
        }
        FetchState::Idle | FetchState::Loading => {}
    }

    Ok(())
}
