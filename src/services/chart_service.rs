use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;

use crate::models::chart::{ChartDataPoint, TrendPoint};
use crate::models::user::ApiUser;
use crate::utils::format::{format_currency_abbrev, parse_event_date};

/// The bar chart shows the six heaviest users by transaction volume.
pub const TOP_CHART_USERS: usize = 6;
pub const TREND_DAYS: usize = 7;

/// Per-user volume/balance/bill aggregates, heaviest transaction volume
/// first, truncated for the chart.
pub fn chart_data(users: &[ApiUser]) -> Vec<ChartDataPoint> {
    let mut points: Vec<ChartDataPoint> = users
        .iter()
        .map(|user| ChartDataPoint {
            name: user.customer_name.clone(),
            transaction_volume: user.transactions.iter().map(|txn| txn.amount).sum(),
            total_balance: user.accounts.iter().map(|account| account.balance).sum(),
            bill_payments: user.bill_payments.len(),
        })
        .collect();
    points.sort_by(|a, b| {
        b.transaction_volume
            .partial_cmp(&a.transaction_volume)
            .unwrap_or(Ordering::Equal)
    });
    points.truncate(TOP_CHART_USERS);
    points
}

/// Transaction volume per calendar day over the trailing week, oldest day
/// first. Transactions without a parsable date fall out of the trend.
pub fn trend_data(users: &[ApiUser], now: DateTime<Utc>) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .map(|i| {
            let day = (now - Duration::days((TREND_DAYS - 1 - i) as i64)).date_naive();
            let value = users
                .iter()
                .flat_map(|user| user.transactions.iter())
                .filter(|txn| {
                    parse_event_date(
                        txn.transaction_date
                            .as_deref()
                            .or(txn.created_at.as_deref()),
                    )
                    .map(|date| date.date_naive() == day)
                    .unwrap_or(false)
                })
                .map(|txn| txn.amount)
                .sum();
            TrendPoint {
                label: day.format("%-d %b").to_string(),
                value,
            }
        })
        .collect()
}

/// Bar chart of the top transaction volumes as PNG bytes.
pub fn render_volume_chart(
    points: &[ChartDataPoint],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if points.is_empty() {
        return Err("No transaction data available.".to_string());
    }

    let temp_file = format!(
        "/tmp/bankdesk_chart_{}.png",
        chrono::Utc::now().timestamp_millis()
    );
    {
        let backend = BitMapBackend::new(&temp_file, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let y_max = points
            .iter()
            .map(|p| p.transaction_volume)
            .fold(0.0f64, f64::max)
            .max(1.0)
            * 1.1;
        let names: Vec<String> = points.iter().map(|p| p.name.clone()).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption("Top Transaction Volumes", ("sans-serif", 30.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d((0..points.len() as i32).into_segmented(), 0f64..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) => {
                    names.get(*i as usize).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .y_label_formatter(&|v| format_currency_abbrev(*v))
            .y_desc("Volume")
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(RED.filled())
                    .margin(10)
                    .data(
                        points
                            .iter()
                            .enumerate()
                            .map(|(i, p)| (i as i32, p.transaction_volume)),
                    ),
            )
            .map_err(|e| format!("Failed to draw bars: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    let image_data =
        std::fs::read(&temp_file).map_err(|e| format!("Failed to read chart file: {}", e))?;
    let _ = std::fs::remove_file(&temp_file);
    Ok(image_data)
}

/// Line chart of the 7-day transaction trend as PNG bytes.
pub fn render_trend_chart(
    points: &[TrendPoint],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if points.len() < 2 {
        return Err("Not enough trend data to generate chart.".to_string());
    }

    let temp_file = format!(
        "/tmp/bankdesk_trend_{}.png",
        chrono::Utc::now().timestamp_millis()
    );
    {
        let backend = BitMapBackend::new(&temp_file, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let y_max = points.iter().map(|p| p.value).fold(0.0f64, f64::max).max(1.0) * 1.1;
        let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Transaction Trends (Last 7 Days)",
                ("sans-serif", 30.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0..(points.len() as i32 - 1), 0f64..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_labels(points.len())
            .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
            .y_label_formatter(&|v| format_currency_abbrev(*v))
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i as i32, p.value)),
                &RED,
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?;

        chart
            .draw_series(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Circle::new((i as i32, p.value), 3, RED.filled())),
            )
            .map_err(|e| format!("Failed to draw points: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    let image_data =
        std::fs::read(&temp_file).map_err(|e| format!("Failed to read chart file: {}", e))?;
    let _ = std::fs::remove_file(&temp_file);
    Ok(image_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn users_fixture() -> Vec<ApiUser> {
        serde_json::from_value(json!([
            {
                "id": 1,
                "customerName": "Low Volume",
                "phoneNumber": "08011111111",
                "accounts": [{ "id": 1, "accountNumber": "1", "balance": 900.0, "currency": "NGN" }],
                "transactions": [
                    { "id": 1, "amount": 10.0, "transactionType": "debit", "transactionDate": "2025-06-15T08:00:00Z" }
                ]
            },
            {
                "id": 2,
                "customerName": "High Volume",
                "phoneNumber": "08022222222",
                "transactions": [
                    { "id": 2, "amount": 500.0, "transactionType": "credit", "transactionDate": "2025-06-14T08:00:00Z" },
                    { "id": 3, "amount": 250.0, "transactionType": "credit", "transactionDate": "2025-06-01T08:00:00Z" }
                ],
                "billPayments": [
                    { "id": 4, "paymentType": "airtime", "provider": "MTN", "amount": 5.0 }
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn chart_points_sort_by_volume_descending() {
        let points = chart_data(&users_fixture());
        assert_eq!(points[0].name, "High Volume");
        assert_eq!(points[0].transaction_volume, 750.0);
        assert_eq!(points[0].bill_payments, 1);
        assert_eq!(points[1].name, "Low Volume");
        assert_eq!(points[1].total_balance, 900.0);
    }

    #[test]
    fn chart_points_truncate_to_top_six() {
        let users: Vec<ApiUser> = (0..10)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i,
                    "customerName": format!("User {}", i),
                    "phoneNumber": "080",
                    "transactions": [{ "id": i, "amount": i as f64, "transactionType": "credit" }]
                }))
                .unwrap()
            })
            .collect();
        let points = chart_data(&users);
        assert_eq!(points.len(), TOP_CHART_USERS);
        assert_eq!(points[0].name, "User 9");
    }

    #[test]
    fn trend_buckets_by_calendar_day() {
        let trend = trend_data(&users_fixture(), fixed_now());
        assert_eq!(trend.len(), TREND_DAYS);
        // Oldest day first; 1 Jun is outside the window entirely.
        assert_eq!(trend[0].label, "9 Jun");
        assert_eq!(trend[6].label, "15 Jun");
        assert_eq!(trend[6].value, 10.0);
        assert_eq!(trend[5].value, 500.0);
        assert_eq!(trend.iter().map(|p| p.value).sum::<f64>(), 510.0);
    }

    #[test]
    fn empty_chart_data_is_an_error_not_a_blank_image() {
        assert!(render_volume_chart(&[], 800, 600).is_err());
        assert!(render_trend_chart(&[], 800, 600).is_err());
    }
}
