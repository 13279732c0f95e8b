//! Support briefing prompt with server-side log injection.

use std::fs;

use super::{require_argument, PromptArgument, PromptArguments, PromptDescriptor, PromptResult};
use crate::db::AppState;

pub const PROMPT_NAME: &str = "customer_issue_summary";

const DEFAULT_TIMEFRAME: &str = "24hours";
const DESCRIPTION: &str =
    "Create a comprehensive customer issue summary from logs and support data";

pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: PROMPT_NAME.to_string(),
        description: Some(DESCRIPTION.to_string()),
        arguments: vec![
            PromptArgument {
                name: "customer_id".to_string(),
                description: Some("The unique ID of the customer".to_string()),
                required: true,
            },
            PromptArgument {
                name: "timeframe".to_string(),
                description: Some("Analysis window (default: 24hours)".to_string()),
                required: false,
            },
        ],
    }
}

/// Render the briefing prompt. Both log files are read here and injected
/// into the message; a missing file becomes an explanatory placeholder
/// rather than an error.
pub fn render(arguments: &PromptArguments, state: &AppState) -> Result<PromptResult, String> {
    let customer_id = require_argument(arguments, "customer_id", PROMPT_NAME)?;
    let timeframe = arguments
        .get("timeframe")
        .map(|value| value.as_str())
        .unwrap_or(DEFAULT_TIMEFRAME);

    let customer_log_path = state.logs_dir.join(format!("customer_{}.log", customer_id));
    let customer_logs = fs::read_to_string(&customer_log_path)
        .unwrap_or_else(|_| format!("No customer logs found for {}", customer_id));
    let app_logs = fs::read_to_string(state.logs_dir.join("app.log"))
        .unwrap_or_else(|_| "No application logs found".to_string());

    let text = format!(
        "Based on logs for customer {customer_id}, create a comprehensive issue briefing for the support team.\n\
         \n\
         === APPLICATION LOGS ===\n\
         {app_logs}\n\
         \n\
         === CUSTOMER {customer_id} LOGS ===\n\
         {customer_logs}\n\
         \n\
         === END OF LOGS ===\n\
         \n\
         Analyze the last {timeframe} and include:\n\
         \n\
         **Technical Issues:**\n\
         - Authentication and access problems\n\
         - API and integration failures\n\
         - System errors affecting this customer\n\
         - Performance or availability issues\n\
         \n\
         **Business Impact:**\n\
         - How long has the customer been affected?\n\
         - What business processes are disrupted?\n\
         - Revenue or operational impact assessment\n\
         - Customer satisfaction risk level\n\
         \n\
         **Resolution Strategy:**\n\
         - Immediate actions needed\n\
         - Escalation requirements\n\
         - Expected timeline for resolution\n\
         - Communication plan for customer\n\
         \n\
         Format as a structured briefing document that a senior support agent can quickly understand and act upon."
    );

    Ok(PromptResult::user_message(DESCRIPTION, text))
}
