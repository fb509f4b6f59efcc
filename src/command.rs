use super::*;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
  #[command(about = "Fetch the latest updates and archive them")]
  Ingest {
    #[arg(long, default_value_t = 50, help = "Lookups per chunk")]
    batch_size: usize,
    #[arg(long, help = "Write to this S3 bucket instead of the filesystem")]
    bucket: Option<String>,
    #[arg(long, default_value_t = 1, help = "Lookups in flight per chunk")]
    concurrency: usize,
    #[arg(
      long,
      default_value = "data/raw",
      help = "Archive root, or the key prefix inside the bucket"
    )]
    output_dir: PathBuf,
    #[arg(long, help = "Replace files left by an earlier run")]
    overwrite: bool,
    #[arg(long, default_value_t = 500, help = "Pause between chunks")]
    rate_limit_delay_ms: u64,
    #[arg(long, help = "Also archive the updates envelope")]
    record_updates: bool,
  },
  #[command(about = "Print the current maximum item id")]
  MaxItem,
}

impl Command {
  pub(crate) async fn run(self, config: &ClientConfig) -> Result {
    let client = Client::new(config)?;

    match self {
      Self::Ingest {
        batch_size,
        bucket,
        concurrency,
        output_dir,
        overwrite,
        rate_limit_delay_ms,
        record_updates,
      } => {
        let archive = match bucket {
          Some(bucket) => Archive::s3(&output_dir.to_string_lossy(), &bucket)?,
          None => Archive::local(&output_dir)?,
        };

        let batch = BatchConfig {
          batch_size,
          concurrency,
          delay: Duration::from_millis(rate_limit_delay_ms),
        };

        let report = Ingestion::new(&client, &archive, batch)
          .overwrite(overwrite)
          .record_updates(record_updates)
          .run()
          .await?;

        info!("items: {}", report.item_stats);
        info!("users: {}", report.user_stats);

        for (name, location) in &report.outputs {
          println!("{name}\t{location}");
        }

        if !report.failed_writes.is_empty() {
          bail!(
            "failed to write {}",
            report
              .failed_writes
              .keys()
              .map(String::as_str)
              .collect::<Vec<_>>()
              .join(", ")
          );
        }

        Ok(())
      }
      Self::MaxItem => {
        let id = client
          .fetch_max_item_id()
          .await
          .context("failed to fetch max item id")?;

        println!("{id}");

        Ok(())
      }
    }
  }
}
