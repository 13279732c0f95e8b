//! Writing prompts for the demo endpoint.

use super::{require_argument, PromptArgument, PromptArguments, PromptDescriptor, PromptResult};

pub const GREET_USER_PROMPT: &str = "greet_user_prompt";
pub const EMAIL_PROMPT: &str = "email";
pub const ANALYZE_EXCEL_PROMPT: &str = "analyze_excel";
pub const CODE_REVIEW_PROMPT: &str = "code_review";

pub fn greet_user_descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: GREET_USER_PROMPT.to_string(),
        description: Some("Generates a message asking for a greeting".to_string()),
        arguments: vec![argument("name", "The name of the person to greet")],
    }
}

pub fn email_descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: EMAIL_PROMPT.to_string(),
        description: Some("Generate an email based on the given tone and context".to_string()),
        arguments: vec![
            argument("tone", "Tone of the email (e.g., formal, friendly)"),
            argument("context", "What the email is about"),
        ],
    }
}

pub fn analyze_excel_descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: ANALYZE_EXCEL_PROMPT.to_string(),
        description: Some("Analyze the Excel file at the given file path".to_string()),
        arguments: vec![argument("file_path", "Path to the Excel file")],
    }
}

pub fn code_review_descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: CODE_REVIEW_PROMPT.to_string(),
        description: Some(
            "Analyze a code block for a given language and focus areas".to_string(),
        ),
        arguments: vec![
            argument("language", "Programming language of the code block"),
            argument("focusAreas", "Aspects to focus the review on"),
            argument("codeBlock", "The code to review"),
        ],
    }
}

fn argument(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        description: Some(description.to_string()),
        required: true,
    }
}

pub fn render_greet_user(arguments: &PromptArguments) -> Result<PromptResult, String> {
    let name = require_argument(arguments, "name", GREET_USER_PROMPT)?;
    let text = format!(
        "Return a greeting message for a user called '{}'.\nIf the user is called 'Laurent', use a formal style, else use a street style.",
        name
    );
    Ok(PromptResult::user_message(
        "Generates a message asking for a greeting",
        text,
    ))
}

pub fn render_email(arguments: &PromptArguments) -> Result<PromptResult, String> {
    let tone = require_argument(arguments, "tone", EMAIL_PROMPT)?;
    let context = require_argument(arguments, "context", EMAIL_PROMPT)?;
    Ok(PromptResult::user_message(
        "Generate an email based on the given tone and context",
        format!("Generate a {} email for {}.", tone, context),
    ))
}

pub fn render_analyze_excel(arguments: &PromptArguments) -> Result<PromptResult, String> {
    let file_path = require_argument(arguments, "file_path", ANALYZE_EXCEL_PROMPT)?;
    Ok(PromptResult::user_message(
        "Analyze the Excel file at the given file path",
        format!("Analyze the Excel file at {}.", file_path),
    ))
}

pub fn render_code_review(arguments: &PromptArguments) -> Result<PromptResult, String> {
    let language = require_argument(arguments, "language", CODE_REVIEW_PROMPT)?;
    let focus_areas = require_argument(arguments, "focusAreas", CODE_REVIEW_PROMPT)?;
    let code_block = require_argument(arguments, "codeBlock", CODE_REVIEW_PROMPT)?;

    let text = format!(
        "Please review the following {language} code focusing on {focus_areas} for the following block of code:\n```{language}\n{code_block}\n```",
    );
    Ok(PromptResult::user_message(
        "Analyze a code block for a given language and focus areas",
        text,
    ))
}
