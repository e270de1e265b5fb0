/// Per-user aggregate behind the analytics charts.
#[derive(Debug, Clone)]
pub struct ChartDataPoint {
    pub name: String,
    pub transaction_volume: f64,
    pub total_balance: f64,
    pub bill_payments: usize,
}

/// One day of the transaction-volume trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}
