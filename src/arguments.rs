use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-ingest",
  version,
  about = "Archive Hacker News updates as partitioned parquet files"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HN_API_BASE_URL",
    default_value = Client::API_BASE_URL,
    global = true,
    help = "Base URL of the Hacker News API"
  )]
  api_base_url: String,
  #[command(subcommand)]
  command: Command,
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    self
      .command
      .run(&ClientConfig::default().with_base_url(self.api_base_url))
      .await
  }
}
