//! Summary rendering and the pipeline that produces it.

use super::models::{CustomerRecord, TicketRecord};
use super::store::SupportStore;

/// Run the pipeline for one request: look up the customer, fetch tickets
/// in the window, render the report. Every failure path comes back as a
/// human-readable string, never an `Err`.
pub async fn generate_support_summary<S>(store: &S, customer_id: &str, timeframe: &str) -> String
where
    S: SupportStore + Sync,
{
    let customer = match store.fetch_customer(customer_id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => return format!("Error: Customer with ID {} not found.", customer_id),
        Err(err) => return format!("Error generating support summary: {}", err),
    };

    let tickets = match store.fetch_tickets(customer_id, timeframe).await {
        Ok(tickets) => tickets,
        Err(err) => return format!("Error generating support summary: {}", err),
    };

    format_support_summary(Some(&customer), &tickets, timeframe)
}

/// Render the fixed-layout report. Tickets are listed in the order given,
/// which the store returns newest first. Absent optional fields print as
/// the literal `None`.
pub fn format_support_summary(
    customer: Option<&CustomerRecord>,
    tickets: &[TicketRecord],
    timeframe: &str,
) -> String {
    let Some(customer) = customer else {
        return "Customer not found.".to_string();
    };

    if tickets.is_empty() {
        return format!(
            "No support tickets found for {} in the last {}.",
            customer.name, timeframe
        );
    }

    // Bucket counts match the exact literals only; any other status or
    // priority value is listed but counted nowhere.
    let open_count = tickets.iter().filter(|t| t.status == "Open").count();
    let resolved_count = tickets.iter().filter(|t| t.status == "Resolved").count();
    let high_priority_count = tickets
        .iter()
        .filter(|t| matches!(t.priority.as_str(), "High" | "Critical"))
        .count();

    let mut summary = format!("Support Summary for {} ({}):\n\n", customer.name, timeframe);

    summary.push_str("CUSTOMER INFORMATION:\n");
    summary.push_str(&format!("Industry: {}\n", customer.industry));
    summary.push_str(&format!("Size: {}\n", customer.size));
    summary.push_str(&format!(
        "Subscription: {} ({} seats)\n",
        text_or_none(customer.plan.as_deref()),
        display_or_none(customer.seats.as_ref())
    ));
    summary.push_str(&format!(
        "Renewal Date: {}\n",
        display_or_none(customer.renewal_date.as_ref())
    ));
    summary.push_str(&format!(
        "Subscription Status: {}\n\n",
        text_or_none(customer.subscription_status.as_deref())
    ));

    summary.push_str("SUPPORT SUMMARY:\n");
    summary.push_str(&format!("- Total tickets: {}\n", tickets.len()));
    summary.push_str(&format!("- Open tickets: {}\n", open_count));
    summary.push_str(&format!("- Resolved tickets: {}\n", resolved_count));
    summary.push_str(&format!("- High/Critical priority: {}\n\n", high_priority_count));

    summary.push_str("RECENT TICKETS:\n");
    for ticket in tickets {
        let resolved_text = match &ticket.resolved_date {
            Some(date) => format!("Resolved: {}", date),
            None => "Still Open".to_string(),
        };

        summary.push_str(&format!(
            "- [{}] {} ({})\n",
            ticket.priority, ticket.subject, ticket.status
        ));
        summary.push_str(&format!(
            "  Created: {} | {}\n",
            ticket.created_date, resolved_text
        ));
        summary.push_str(&format!(
            "  Reported by: {}, {}\n",
            text_or_none(ticket.contact_name.as_deref()),
            text_or_none(ticket.contact_title.as_deref())
        ));
        summary.push_str(&format!("  Description: {}\n\n", ticket.description));
    }

    summary
}

fn text_or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

fn display_or_none<T: std::fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}
