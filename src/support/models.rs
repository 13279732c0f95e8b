use chrono::{Duration, NaiveDate};

/// Customer row with its subscription projection left-joined on.
/// Subscription fields are `None` when the customer has no subscription.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub plan: Option<String>,
    pub seats: Option<i64>,
    pub renewal_date: Option<NaiveDate>,
    pub subscription_status: Option<String>,
    pub monthly_value: Option<f64>,
}

/// Support ticket row enriched with the reporting contact, when matched.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TicketRecord {
    pub id: String,
    pub customer_id: String,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created_date: NaiveDate,
    pub resolved_date: Option<NaiveDate>,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
}

/// Cutoff date for the caller-supplied timeframe token. Only `7days` and
/// `90days` narrow the window; any other token falls back to 180 days.
/// That includes the documented `30days` default, which has never had its
/// own branch. See the timeframe tests below before changing this.
pub fn lookback_start(timeframe: &str, today: NaiveDate) -> NaiveDate {
    let days = match timeframe {
        "7days" => 7,
        "90days" => 90,
        _ => 180,
    };
    today - Duration::days(days)
}
