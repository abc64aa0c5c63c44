use clap::Subcommand;
use paulboy_core::{Config, StatsFetch, YouTubeClient};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Fetch channel statistics once and print them as JSON
    Fetch {
        /// Channel ID override (defaults to youtube.channel_id)
        #[arg(long)]
        channel: Option<String>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Fetch { channel } => {
            let config = Config::load_or_default();
            let channel_id = channel
                .or_else(|| {
                    (!config.youtube.channel_id.is_empty())
                        .then(|| config.youtube.channel_id.clone())
                })
                .ok_or("no channel id configured (set youtube.channel_id)")?;

            let client = YouTubeClient::new(config.youtube.api_key.clone());
            let stats = client.fetch_channel_stats(&channel_id)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
