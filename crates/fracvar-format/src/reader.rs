//! Bar input readers.

use std::path::Path;

use csv_async::{AsyncReaderBuilder, Trim};
use fracvar_types::Bar;
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tracing::debug;

use crate::{FormatError, InputFormat};

/// Reads bars from `reader` in the given format.
///
/// CSV input must carry a header row naming `high` and `low` columns; a
/// `timestamp` column is optional and unknown columns are ignored.
///
/// # Errors
///
/// Returns an error if reading fails or a record cannot be parsed.
pub async fn read_bars<R>(format: InputFormat, reader: R) -> Result<Vec<Bar>, FormatError>
where
    R: AsyncRead + Unpin + Send,
{
    let bars = match format {
        InputFormat::Csv => read_csv(reader, b',').await?,
        InputFormat::Json => read_json(reader).await?,
        InputFormat::Ndjson => read_ndjson(reader).await?,
    };
    debug!(format = %format, bars = bars.len(), "read bars");
    Ok(bars)
}

/// Opens `path` and reads bars, detecting the format from its extension
/// unless `format` is given.
///
/// # Errors
///
/// Returns an error if the format is unknown, the file cannot be opened,
/// or a record cannot be parsed.
pub async fn read_bars_from_path(
    path: &Path,
    format: Option<InputFormat>,
) -> Result<Vec<Bar>, FormatError> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };
    let file = tokio::fs::File::open(path).await?;
    read_bars(format, file).await
}

/// Reads delimited bars with a header row.
async fn read_csv<R>(reader: R, delimiter: u8) -> Result<Vec<Bar>, FormatError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = AsyncReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .create_deserializer(reader);
    let mut records = deserializer.deserialize::<Bar>();

    let mut bars = Vec::new();
    while let Some(record) = records.next().await {
        bars.push(record?);
    }
    Ok(bars)
}

/// Reads a JSON array of bars.
async fn read_json<R>(mut reader: R) -> Result<Vec<Bar>, FormatError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(serde_json::from_slice(&buf)?)
}

/// Reads one bar per line, skipping blank lines.
async fn read_ndjson<R>(reader: R) -> Result<Vec<Bar>, FormatError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut lines = BufReader::new(reader).lines();
    let mut bars = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        bars.push(serde_json::from_str(line)?);
    }
    Ok(bars)
}
