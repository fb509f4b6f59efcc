use {
  anyhow::{Context, anyhow, bail},
  archive::Archive,
  archive_error::ArchiveError,
  arguments::Arguments,
  arrow::{
    array::{
      ArrayRef, BooleanArray, ListBuilder, StringArray, StringBuilder,
      TimestampSecondArray, UInt64Array, UInt64Builder,
    },
    datatypes::{DataType, Field, Schema, SchemaRef, TimeUnit},
    error::ArrowError,
    record_batch::RecordBatch,
  },
  batch_config::BatchConfig,
  batch_processor::BatchProcessor,
  chrono::{DateTime, Datelike, NaiveDateTime, Utc},
  clap::{Parser, Subcommand},
  client::Client,
  client_config::ClientConfig,
  columnar::{
    Columnar, base_columns, base_fields, counts, id_list_field, id_lists,
    optional_counts, optional_strings, timestamp_field, timestamps,
  },
  command::Command,
  comment::Comment,
  crossterm::style::Stylize,
  fetch_error::FetchError,
  futures::stream::{self, StreamExt},
  header::Header,
  ingestion::Ingestion,
  item::Item,
  item_groups::ItemGroups,
  item_kind::ItemKind,
  job::Job,
  object_store::{
    ObjectStore, PutMode, PutOptions, PutPayload, aws::AmazonS3Builder,
    local::LocalFileSystem, path::Path as ObjectPath,
  },
  parquet::{
    arrow::ArrowWriter, basic::Compression, errors::ParquetError,
    file::properties::WriterProperties,
  },
  partition::{partition_path, plural},
  poll::Poll,
  poll_option::PollOption,
  report::Report,
  reqwest::{StatusCode, Url},
  retry_policy::RetryPolicy,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  stage::Stage,
  stats::Stats,
  std::{
    backtrace::BacktraceStatus,
    borrow::Cow,
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal},
    iter,
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::Duration,
  },
  story::Story,
  thiserror::Error,
  tokio::{
    sync::Semaphore,
    time::{sleep, timeout},
  },
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  updates::Updates,
  user::User,
  utils::{deserialize_optional_string, deserialize_timestamp, is_absent},
  validation_error::ValidationError,
};

mod archive;
mod archive_error;
mod arguments;
mod batch_config;
mod batch_processor;
mod client;
mod client_config;
mod columnar;
mod command;
mod comment;
mod fetch_error;
mod header;
mod ingestion;
mod item;
mod item_groups;
mod item_kind;
mod job;
mod logging;
mod partition;
mod poll;
mod poll_option;
mod report;
mod retry_policy;
mod stage;
mod stats;
mod story;
mod updates;
mod user;
mod utils;
mod validation_error;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::init()?;

  arguments.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
