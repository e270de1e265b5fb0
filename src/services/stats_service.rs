use crate::models::user::ApiUser;

/// Aggregates the home page cards show, computed client-side from the full
/// user list.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_accounts: usize,
    /// Sum of every account balance across every user.
    pub total_balance: f64,
    /// Sum of all transaction amounts, not a count.
    pub total_transactions: f64,
    /// Transactions and bill payments combined.
    pub total_activities: usize,
}

pub fn dashboard_stats(users: &[ApiUser]) -> DashboardStats {
    let total_balance = users
        .iter()
        .flat_map(|user| user.accounts.iter())
        .map(|account| account.balance)
        .sum();
    let total_transactions = users
        .iter()
        .flat_map(|user| user.transactions.iter())
        .map(|txn| txn.amount)
        .sum();
    let total_accounts = users.iter().map(|user| user.accounts.len()).sum();
    let total_activities = users
        .iter()
        .map(|user| user.transactions.len() + user.bill_payments.len())
        .sum();

    DashboardStats {
        total_users: users.len(),
        total_accounts,
        total_balance,
        total_transactions,
        total_activities,
    }
}
