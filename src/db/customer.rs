//! Customer database operations

use sqlx::Connection;

use super::{AppState, StoreError};
use crate::support::models::CustomerRecord;

impl AppState {
    /// Fetch one customer with its subscription projection left-joined on.
    /// Absence of a matching row is `Ok(None)`, not an error.
    pub async fn get_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        let mut conn = self.acquire().await?;

        let customer = sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT c.id, c.name, c.industry, c.size,
                   s.plan, s.seats, s.renewal_date,
                   s.status AS subscription_status, s.monthly_value
            FROM customers c
            LEFT JOIN subscriptions s ON c.id = s.customer_id
            WHERE c.id = ?1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&mut conn)
        .await;

        conn.close().await.ok();
        Ok(customer?)
    }
}
