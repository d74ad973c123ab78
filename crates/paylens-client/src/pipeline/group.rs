use chrono::Datelike;

use crate::display::INVALID_DATE_LABEL;
use crate::pipeline::normalize::CanonicalTransaction;

/// Year → month → transactions drill-down index. Buckets appear in
/// first-seen order; transactions keep the order of the input sequence.
/// Sorting, when wanted, is an explicit step over the flat list before
/// grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedIndex {
    pub years: Vec<YearBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearBucket {
    pub label: String,
    pub months: Vec<MonthBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub label: String,
    pub transactions: Vec<CanonicalTransaction>,
}

impl GroupedIndex {
    pub fn year(&self, label: &str) -> Option<&YearBucket> {
        self.years
            .iter()
            .find(|bucket| bucket.label.eq_ignore_ascii_case(label))
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Year labels for display, newest first. Non-numeric labels (the
    /// "Invalid date" bucket) sort after every real year.
    pub fn year_labels_desc(&self) -> Vec<String> {
        let mut labels = self
            .years
            .iter()
            .map(|bucket| bucket.label.clone())
            .collect::<Vec<String>>();
        labels.sort_by_key(|label| std::cmp::Reverse(label.parse::<i64>().unwrap_or(i64::MIN)));
        labels
    }

    /// Flattens back to a single sequence, years and months in index order.
    pub fn flatten(&self) -> Vec<CanonicalTransaction> {
        self.years
            .iter()
            .flat_map(|year| year.months.iter())
            .flat_map(|month| month.transactions.iter().cloned())
            .collect()
    }
}

impl YearBucket {
    pub fn month(&self, label: &str) -> Option<&MonthBucket> {
        self.months
            .iter()
            .find(|bucket| bucket.label.eq_ignore_ascii_case(label))
    }
}

pub fn year_label(txn: &CanonicalTransaction) -> String {
    match txn.timestamp {
        Some(value) => value.year().to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

pub fn month_label(txn: &CanonicalTransaction) -> String {
    match txn.timestamp {
        Some(value) => value.format("%B").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Buckets transactions by calendar year and month of their timestamp.
/// Pure over its input: source records are cloned, never mutated, and empty
/// input yields an empty index.
pub fn group_by_year_month(transactions: &[CanonicalTransaction]) -> GroupedIndex {
    let mut index = GroupedIndex::default();

    for txn in transactions {
        let year = year_label(txn);
        let month = month_label(txn);

        let year_position = index
            .years
            .iter()
            .position(|bucket| bucket.label == year)
            .unwrap_or_else(|| {
                index.years.push(YearBucket {
                    label: year,
                    months: Vec::new(),
                });
                index.years.len() - 1
            });
        let year_bucket = &mut index.years[year_position];

        let month_position = year_bucket
            .months
            .iter()
            .position(|bucket| bucket.label == month)
            .unwrap_or_else(|| {
                year_bucket.months.push(MonthBucket {
                    label: month,
                    transactions: Vec::new(),
                });
                year_bucket.months.len() - 1
            });

        year_bucket.months[month_position].transactions.push(txn.clone());
    }

    index
}
