//! Daily price tables with a simple CSV cache layer.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{DataError, DataResult};

/// A table of daily prices: one row per date, one column per ticker.
///
/// Rows are chronological and contain no missing values; rows that could
/// not be fully parsed are dropped at load time, the way the upstream data
/// feed drops NaN rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    /// One column per ticker, aligned with `dates`.
    columns: Vec<Vec<f64>>,
}

impl PriceTable {
    /// Builds a table from parallel columns.
    ///
    /// # Errors
    ///
    /// Fails when column lengths disagree with the date index or the
    /// table is empty.
    pub fn new(
        dates: Vec<NaiveDate>,
        tickers: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> DataResult<Self> {
        if dates.is_empty() || tickers.is_empty() {
            return Err(DataError::empty("price table has no rows or no tickers"));
        }
        if tickers.len() != columns.len() {
            return Err(DataError::invalid_input(format!(
                "{} tickers but {} columns",
                tickers.len(),
                columns.len()
            )));
        }
        for (ticker, column) in tickers.iter().zip(&columns) {
            if column.len() != dates.len() {
                return Err(DataError::invalid_input(format!(
                    "column '{ticker}' has {} rows, expected {}",
                    column.len(),
                    dates.len()
                )));
            }
        }
        Ok(Self {
            dates,
            tickers,
            columns,
        })
    }

    /// Number of dated rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Ticker column names, in file order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// The price series for one ticker.
    pub fn column(&self, ticker: &str) -> Option<&[f64]> {
        self.tickers
            .iter()
            .position(|t| t == ticker)
            .map(|i| self.columns[i].as_slice())
    }

    /// Restricts the table to the given tickers, in the given order.
    ///
    /// # Errors
    ///
    /// Fails with [`DataError::MissingTickers`] listing every requested
    /// ticker the table does not carry.
    pub fn select(&self, tickers: &[String]) -> DataResult<Self> {
        let missing: Vec<String> = tickers
            .iter()
            .filter(|t| !self.tickers.contains(t))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingTickers { tickers: missing });
        }

        let columns = tickers
            .iter()
            .map(|t| self.column(t).expect("presence checked above").to_vec())
            .collect();
        Self::new(self.dates.clone(), tickers.to_vec(), columns)
    }

    /// Reads a price table from CSV.
    ///
    /// Expected layout: a `date` header column (ISO-8601 dates) followed
    /// by one column per ticker. Rows with an unparsable date fail the
    /// load; rows with a missing or unparsable price are dropped.
    ///
    /// # Errors
    ///
    /// IO/CSV failures, a malformed header, or a table with no usable
    /// rows.
    pub fn read_csv(path: impl AsRef<Path>) -> DataResult<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.get(0) != Some("date") {
            return Err(DataError::invalid_input(
                "first CSV column must be 'date'",
            ));
        }
        let tickers: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        if tickers.is_empty() {
            return Err(DataError::empty("no ticker columns in header"));
        }

        let mut dates = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); tickers.len()];
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 2; // header is row 1

            let date_field = record.get(0).ok_or_else(|| DataError::InvalidRow {
                row,
                reason: "empty row".to_string(),
            })?;
            let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d").map_err(|e| {
                DataError::InvalidRow {
                    row,
                    reason: format!("bad date '{date_field}': {e}"),
                }
            })?;

            match parse_price_row(&record, tickers.len()) {
                Some(prices) => {
                    dates.push(date);
                    for (column, price) in columns.iter_mut().zip(prices) {
                        column.push(price);
                    }
                }
                None => debug!(row, %date, "dropping row with missing prices"),
            }
        }

        if dates.is_empty() {
            return Err(DataError::empty("no complete price rows"));
        }
        Self::new(dates, tickers, columns)
    }

    /// Writes the table as CSV in the layout [`read_csv`](Self::read_csv)
    /// expects.
    ///
    /// # Errors
    ///
    /// IO/CSV failures.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> DataResult<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        let mut header = vec!["date".to_string()];
        header.extend(self.tickers.iter().cloned());
        writer.write_record(&header)?;

        for (i, date) in self.dates.iter().enumerate() {
            let mut record = vec![date.format("%Y-%m-%d").to_string()];
            record.extend(self.columns.iter().map(|c| c[i].to_string()));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Parses the price cells of one record; `None` means the row is
/// incomplete and should be dropped.
fn parse_price_row(record: &csv::StringRecord, n_tickers: usize) -> Option<Vec<f64>> {
    let mut prices = Vec::with_capacity(n_tickers);
    for i in 0..n_tickers {
        let field = record.get(i + 1)?.trim();
        if field.is_empty() {
            return None;
        }
        let price: f64 = field.parse().ok()?;
        if !price.is_finite() {
            return None;
        }
        prices.push(price);
    }
    Some(prices)
}

/// Where fresh prices come from when the cache cannot serve a request.
///
/// Production implementations wrap a market data feed; tests use an
/// in-memory table.
pub trait PriceSource {
    /// Fetches daily prices for the given tickers.
    ///
    /// # Errors
    ///
    /// Implementation-defined; any failure propagates to the caller
    /// unchanged.
    fn fetch(&self, tickers: &[String]) -> DataResult<PriceTable>;
}

/// Loads prices from the CSV cache, falling back to a fresh fetch.
///
/// The cache is served only when it reads cleanly and covers every
/// requested ticker. On any cache failure the request falls through to
/// `source.fetch` and the cache file is rewritten. This is the only place
/// fallback behaviour lives; everything downstream sees validated data or
/// an error.
///
/// # Errors
///
/// Fails when the fetch itself fails or the fresh table cannot be
/// cached.
pub fn load_or_fetch<S: PriceSource>(
    source: &S,
    cache_path: impl AsRef<Path>,
    tickers: &[String],
) -> DataResult<PriceTable> {
    let cache_path = cache_path.as_ref();

    match PriceTable::read_csv(cache_path).and_then(|t| t.select(tickers)) {
        Ok(table) => {
            debug!(path = %cache_path.display(), rows = table.len(), "serving prices from cache");
            return Ok(table);
        }
        Err(e) => {
            warn!(path = %cache_path.display(), error = %e, "price cache unusable, fetching fresh");
        }
    }

    let table = source.fetch(tickers)?.select(tickers)?;
    table.write_csv(cache_path)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_fixture() -> PriceTable {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        ];
        PriceTable::new(
            dates,
            vec!["SPY".to_string(), "IEF".to_string()],
            vec![vec![470.0, 472.5, 471.0], vec![95.0, 95.2, 95.1]],
        )
        .unwrap()
    }

    struct FixtureSource;

    impl PriceSource for FixtureSource {
        fn fetch(&self, _tickers: &[String]) -> DataResult<PriceTable> {
            Ok(table_fixture())
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");

        let table = table_fixture();
        table.write_csv(&path).unwrap();
        let loaded = PriceTable::read_csv(&path).unwrap();

        assert_eq!(table, loaded);
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(
            &path,
            "date,SPY,IEF\n2024-01-02,470.0,95.0\n2024-01-03,,95.2\n2024-01-04,471.0,95.1\n",
        )
        .unwrap();

        let table = PriceTable::read_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("SPY").unwrap(), &[470.0, 471.0]);
    }

    #[test]
    fn test_select_reports_all_missing_tickers() {
        let table = table_fixture();
        let err = table
            .select(&["SPY".to_string(), "LQD".to_string(), "TLT".to_string()])
            .unwrap_err();
        match err {
            DataError::MissingTickers { tickers } => {
                assert_eq!(tickers, vec!["LQD".to_string(), "TLT".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_or_fetch_uses_cache_when_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.csv");
        table_fixture().write_csv(&path).unwrap();

        struct PanicSource;
        impl PriceSource for PanicSource {
            fn fetch(&self, _tickers: &[String]) -> DataResult<PriceTable> {
                panic!("cache should have been used");
            }
        }

        let tickers = vec!["SPY".to_string(), "IEF".to_string()];
        let table = load_or_fetch(&PanicSource, &path, &tickers).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_load_or_fetch_falls_back_and_rewrites_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.csv");
        // No cache file yet: must fetch and write it.
        let tickers = vec!["SPY".to_string(), "IEF".to_string()];
        let table = load_or_fetch(&FixtureSource, &path, &tickers).unwrap();
        assert_eq!(table.len(), 3);
        assert!(path.exists());

        // Cached file now serves the same data.
        let cached = PriceTable::read_csv(&path).unwrap();
        assert_eq!(cached, table);
    }

    #[test]
    fn test_load_or_fetch_refetches_on_missing_ticker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.csv");
        // Cache only covers SPY.
        PriceTable::new(
            vec![NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()],
            vec!["SPY".to_string()],
            vec![vec![470.0]],
        )
        .unwrap()
        .write_csv(&path)
        .unwrap();

        let tickers = vec!["SPY".to_string(), "IEF".to_string()];
        let table = load_or_fetch(&FixtureSource, &path, &tickers).unwrap();
        assert_eq!(table.tickers(), &["SPY".to_string(), "IEF".to_string()]);
    }

}
