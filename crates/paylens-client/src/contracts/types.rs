use serde::Serialize;

/// One rendered transaction row. Dates and kinds are already in display
/// form; amounts stay numeric so JSON consumers can do their own math.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub mentor: String,
    pub user: String,
    pub description: String,
    pub kind: String,
    pub status: String,
    pub amount: f64,
    pub credit_amount: f64,
    pub debit_amount: f64,
    pub closing_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
}

/// Session metadata carried only by session-derived records.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub duration_minutes: Option<f64>,
    pub call_type: Option<String>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub booking_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_matches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionListData {
    pub rows: Vec<TransactionRow>,
    pub page: PageInfo,
    pub search: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub source_records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGroupRow {
    pub month: String,
    pub transaction_count: usize,
    pub credit_total: f64,
    pub debit_total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearGroupRow {
    pub year: String,
    pub transaction_count: usize,
    pub credit_total: f64,
    pub debit_total: f64,
    pub months: Vec<MonthGroupRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupIndexData {
    pub years: Vec<YearGroupRow>,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub credit_total: f64,
    pub debit_total: f64,
    pub net_change: f64,
    pub credit_count: usize,
    pub debit_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettlementRateInfo {
    pub gateway_fee_rate: f64,
    pub platform_share_rate: f64,
    pub tds_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettlementRow {
    pub id: String,
    pub date: String,
    pub mentor: String,
    pub gross_amount: f64,
    pub gateway_fee: f64,
    pub platform_net: f64,
    pub mentor_share: f64,
    pub tax_withheld: f64,
    pub mentor_payout: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettlementTotals {
    pub gross_amount: f64,
    pub gateway_fee: f64,
    pub platform_share: f64,
    pub platform_net: f64,
    pub mentor_share: f64,
    pub tax_withheld: f64,
    pub mentor_payout: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettlementData {
    pub rates: SettlementRateInfo,
    pub rows: Vec<SettlementRow>,
    pub totals: SettlementTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationAddData {
    pub notification: crate::notifications::PaymentNotification,
    pub store_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationListData {
    pub notifications: Vec<crate::notifications::PaymentNotification>,
    pub total: usize,
    pub store_path: String,
}
