pub mod errors;

use std::time::Duration;
use chrono::NaiveDate;
use reqwest::blocking::Client;
use anyhow::Result;
use crate::config::SourceParameters;
use crate::manager_wbgt::errors::WbgtError;
use crate::models::Snapshot;

/// Struct for retrieving monthly WBGT measurement files
pub struct Wbgt {
    client: Client,
    base_url: String,
    location: String,
}

impl Wbgt {
    /// Returns a Wbgt struct ready for fetching snapshots
    ///
    /// # Arguments
    ///
    /// * 'config' - source configuration, an unset timeout keeps the client default
    pub fn new(config: &SourceParameters) -> Result<Wbgt, WbgtError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| WbgtError::ClientError(e.to_string()))?;

        Ok(Wbgt {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            location: config.location.clone(),
        })
    }

    /// Returns the url of the measurement file for the month that the given date falls into
    ///
    /// # Arguments
    ///
    /// * 'date' - any date in the month to build the url for
    pub fn snapshot_url(&self, date: NaiveDate) -> String {
        // https://www.wbgt.env.go.jp/mntr/dl/Kyoto_202407.csv
        format!("{}/{}_{}.csv", self.base_url, self.location, date.format("%Y%m"))
    }

    /// Retrieves the measurement file for the month that the given date falls into
    ///
    /// # Arguments
    ///
    /// * 'date' - any date in the month to retrieve measurements for
    pub fn get_snapshot(&self, date: NaiveDate) -> Result<Snapshot, WbgtError> {
        let url = self.snapshot_url(date);

        let response = self.client
            .get(&url)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WbgtError::StatusError { status, url });
        }

        let body = response.bytes()?.to_vec();

        Ok(Snapshot { url, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wbgt() -> Wbgt {
        Wbgt::new(&SourceParameters::default()).unwrap()
    }

    #[test]
    fn url_for_mid_year_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();

        assert_eq!(wbgt().snapshot_url(date), "https://www.wbgt.env.go.jp/mntr/dl/Kyoto_202407.csv");
    }

    #[test]
    fn url_pads_single_digit_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        assert!(wbgt().snapshot_url(date).ends_with("_202401.csv"));
    }

    #[test]
    fn url_ignores_trailing_slash_and_uses_location() {
        let config = SourceParameters {
            base_url: "http://localhost:8080/dl/".to_string(),
            location: "Osaka".to_string(),
            timeout_secs: Some(5),
        };
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

        let url = Wbgt::new(&config).unwrap().snapshot_url(date);
        assert_eq!(url, "http://localhost:8080/dl/Osaka_202312.csv");
    }
}
