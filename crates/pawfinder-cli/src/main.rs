use clap::{Parser, Subcommand};

use pawfinder_discovery::{Coordinate, DiscoveryConfig, DiscoveryService, Provider};

#[derive(Debug, Parser)]
#[command(name = "pawfinder-cli")]
#[command(about = "Pawfinder command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find veterinary providers near a coordinate.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in meters.
        #[arg(long)]
        radius_m: Option<u32>,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
        /// Emit raw JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearby {
            lat,
            lng,
            radius_m,
            limit,
            json,
        } => {
            let config = pawfinder_core::load_app_config_from_env()?;
            let radius_m = radius_m.unwrap_or(config.search_radius_m);
            let limit = limit.unwrap_or(config.result_limit);

            let service = DiscoveryService::new(DiscoveryConfig::from_app_config(&config))?;
            let providers = service
                .find_nearby_within(Coordinate::new(lat, lng), radius_m, limit)
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&providers)?);
            } else {
                print!("{}", render_table(&providers));
            }
        }
    }

    Ok(())
}

fn render_table(providers: &[Provider]) -> String {
    let mut out = String::new();
    for (rank, p) in providers.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}) [{}]\n",
            rank + 1,
            p.name,
            p.distance_label,
            p.source
        ));
        out.push_str(&format!("   {}\n", p.address));
        if let Some(phone) = &p.phone {
            out.push_str(&format!("   {phone}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawfinder_discovery::SourceTag;

    #[test]
    fn render_table_lists_rank_distance_and_provenance() {
        let providers = vec![Provider {
            id: "fallback-3".to_string(),
            name: "Animal Health Center".to_string(),
            address: "Connaught Place, New Delhi, Delhi 110001".to_string(),
            phone: Some("+91-11-2331-5678".to_string()),
            coordinates: Coordinate::new(28.6304, 77.2177),
            distance_km: 2.0,
            distance_label: "2.0 km".to_string(),
            rating: Some(4.3),
            review_count: Some(203),
            open_now: Some(false),
            is_emergency: false,
            specialties: vec!["Dental".to_string()],
            hours_text: "Mon-Fri: 10 AM - 7 PM".to_string(),
            source: SourceTag::Fallback,
        }];

        let table = render_table(&providers);
        assert!(table.starts_with("1. Animal Health Center (2.0 km) [fallback]"));
        assert!(table.contains("Connaught Place"));
        assert!(table.contains("+91-11-2331-5678"));
    }

    #[test]
    fn render_table_empty_input_is_empty_output() {
        assert!(render_table(&[]).is_empty());
    }
}
