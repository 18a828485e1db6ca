mod display;

use anyhow::Context;
use clap::Parser;
use display::output::{
    display_endpoints, display_error, display_info, display_regions, display_success,
    mask_api_key,
};
use league_endpoints::config::Config;
use league_endpoints::{ApiEndpointBuilder, RegionRegistry};

#[derive(Parser, Debug)]
#[command(name = "League Endpoints")]
#[command(about = "Build League of Legends API base URLs for a region", long_about = None)]
struct Args {
    /// Riot API key (default: RIOT_API_KEY)
    api_key: Option<String>,

    /// Region code, one of BR, EUNE, EUW, NA, TR (default: RIOT_REGION or NA)
    #[arg(short, long)]
    region: Option<String>,

    /// Print the base URLs as JSON
    #[arg(long)]
    json: bool,

    /// List the supported regions and exit
    #[arg(long)]
    list_regions: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list_regions {
        display_regions(RegionRegistry::regions());
        return Ok(());
    }

    let mut config = Config::from_env(args.api_key).context("Failed to load configuration")?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let builder = ApiEndpointBuilder::new(config.api_key, config.region.as_str())
        .with_context(|| format!("Cannot build base URLs for region {:?}", config.region))?;

    if args.json {
        let json = serde_json::to_string_pretty(&builder)
            .context("Failed to serialize base URLs")?;
        println!("{}", json);
        return Ok(());
    }

    display_info(&format!(
        "Region {} with API key {}",
        builder.region(),
        mask_api_key(builder.api_key())
    ));
    display_success("Region is valid");
    display_endpoints(&builder);

    Ok(())
}
