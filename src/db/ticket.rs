//! Support ticket database operations

use chrono::Local;
use sqlx::Connection;

use super::{AppState, StoreError};
use crate::support::models::{lookback_start, TicketRecord};

impl AppState {
    /// Fetch tickets created on or after the timeframe cutoff, newest
    /// first, each left-joined with its reporting contact.
    pub async fn get_support_tickets(
        &self,
        customer_id: &str,
        timeframe: &str,
    ) -> Result<Vec<TicketRecord>, StoreError> {
        let start_date = lookback_start(timeframe, Local::now().date_naive());

        let mut conn = self.acquire().await?;

        let tickets = sqlx::query_as::<_, TicketRecord>(
            r#"
            SELECT t.id, t.customer_id, t.subject, t.description,
                   t.status, t.priority, t.created_date, t.resolved_date,
                   c.name AS contact_name, c.title AS contact_title
            FROM support_tickets t
            LEFT JOIN contacts c ON t.contact_id = c.id
            WHERE t.customer_id = ?1 AND t.created_date >= ?2
            ORDER BY t.created_date DESC
            "#,
        )
        .bind(customer_id)
        .bind(start_date)
        .fetch_all(&mut conn)
        .await;

        conn.close().await.ok();
        Ok(tickets?)
    }
}
