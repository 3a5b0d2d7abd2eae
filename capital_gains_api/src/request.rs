//! Typed builder for the multipart form the calculate endpoint accepts.
//!
//! [`Client::calculate`](crate::Client::calculate) takes any form; this
//! builder is a convenience for the field names the reference backend reads.

use reqwest::multipart::{Form, Part};

/// A file to upload: its name (the backend checks the extension) and contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: &str, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            data,
        }
    }

    fn into_part(self) -> Part {
        Part::bytes(self.data).file_name(self.file_name)
    }
}

/// Inputs and settings for one calculation.
#[derive(Clone, Debug)]
pub struct CalculateRequest {
    /// Transactions CSV. Required by the backend.
    pub transactions: Upload,
    /// Fair-market-value prices; the backend uses its bundled table when absent.
    pub fmv: Option<Upload>,
    /// Tax rates JSON.
    pub tax_rates: Option<Upload>,
    pub verbose: bool,
    /// Only match lots bought through the same source as the sale.
    pub same_source_only: bool,
    pub simple_fifo_mode: bool,
    /// Also produce a dividends report in the archive.
    pub include_dividends: bool,
    /// Holding period after which a gain counts as long-term.
    pub ltcg_threshold_days: u32,
}

impl CalculateRequest {
    pub const DEFAULT_LTCG_THRESHOLD_DAYS: u32 = 365;

    pub fn new(transactions: Upload) -> Self {
        Self {
            transactions,
            fmv: None,
            tax_rates: None,
            verbose: false,
            same_source_only: false,
            simple_fifo_mode: true,
            include_dividends: false,
            ltcg_threshold_days: Self::DEFAULT_LTCG_THRESHOLD_DAYS,
        }
    }

    pub fn with_fmv(mut self, fmv: Upload) -> Self {
        self.fmv = Some(fmv);
        self
    }

    pub fn with_tax_rates(mut self, tax_rates: Upload) -> Self {
        self.tax_rates = Some(tax_rates);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_same_source_only(mut self, same_source_only: bool) -> Self {
        self.same_source_only = same_source_only;
        self
    }

    pub fn with_simple_fifo_mode(mut self, simple_fifo_mode: bool) -> Self {
        self.simple_fifo_mode = simple_fifo_mode;
        self
    }

    pub fn with_include_dividends(mut self, include_dividends: bool) -> Self {
        self.include_dividends = include_dividends;
        self
    }

    pub fn with_ltcg_threshold_days(mut self, days: u32) -> Self {
        self.ltcg_threshold_days = days;
        self
    }

    /// Text fields in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("verbose", self.verbose.to_string()),
            ("sameSourceOnly", self.same_source_only.to_string()),
            ("simpleFifoMode", self.simple_fifo_mode.to_string()),
            ("includeDividends", self.include_dividends.to_string()),
            ("ltcgThresholdDays", self.ltcg_threshold_days.to_string()),
        ]
    }

    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value);
        }
        form = form.part("transactions_file", self.transactions.into_part());
        if let Some(fmv) = self.fmv {
            form = form.part("fmv_file", fmv.into_part());
        }
        if let Some(tax_rates) = self.tax_rates {
            form = form.part("tax_rates_file", tax_rates.into_part());
        }
        form
    }
}
