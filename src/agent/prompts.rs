use crate::ai::message::ChatMessage;

pub const GENERATION_SYSTEM_PROMPT: &str = "\
You are an Abaqus scripting assistant.
- Convert user requests into fully functional Abaqus/CAE Python scripts.
- Every script must begin with the standard Abaqus imports (`from abaqus import *`, `from abaqusConstants import *`).
- Ensure correct syntax, imports, units, and boundary conditions.
- Do NOT assume missing details. Instead, ask for clarification.
- Return the script in a ```python code block.";

pub const REVIEW_SYSTEM_PROMPT: &str = "\
You are an Abaqus script reviewer. Audit the provided script for syntax and logic errors.

Review the script against this checklist:
1. Are the Abaqus imports present and correct?
2. Are model, part, material, section, and assembly names consistent?
3. Are boundary conditions and loads applied to regions that exist?
4. Are units consistent throughout?
5. Will the script run in Abaqus/CAE without NameErrors?

If the script is correct, respond with exactly:
APPROVED

If there are issues, list each one and then provide a fully corrected script
in a ```python block. Do not add features the user did not ask for.";

pub const DEBUG_SYSTEM_PROMPT: &str = "\
You are an Abaqus debugging assistant.
- Analyze the provided error log and script.
- Identify the specific line(s) causing issues.
- If it's a small fix, provide corrected lines only.
- If a large fix is required, provide a fully corrected script.";

pub const HELP_SYSTEM_PROMPT: &str = "\
You are an Abaqus documentation assistant. Answer questions about Abaqus/CAE
usage, keywords, and Python scripting concisely and accurately. When a script
snippet helps, include one in a ```python block.";

pub const OPTIMIZE_SYSTEM_PROMPT: &str = "\
You are an Abaqus simulation optimization assistant. Given a description of a
simulation, suggest concrete improvements: mesh refinement and element choice,
step and increment settings, contact and constraint setup, output requests,
and run-time reductions. Be specific and practical.";

pub fn generation_request(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(GENERATION_SYSTEM_PROMPT),
        ChatMessage::user(format!("Command: {}", prompt)),
    ]
}

pub fn review_request(script: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(REVIEW_SYSTEM_PROMPT),
        ChatMessage::user(format!("## Generated Script\n```python\n{}\n```", script)),
    ]
}

pub fn debug_request(error_log: &str, script: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(DEBUG_SYSTEM_PROMPT),
        ChatMessage::user(format!("Error Log:\n{}\n\nScript:\n{}", error_log, script)),
    ]
}

pub fn help_request(query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(HELP_SYSTEM_PROMPT),
        ChatMessage::user(query.to_string()),
    ]
}

pub fn optimize_request(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(OPTIMIZE_SYSTEM_PROMPT),
        ChatMessage::user(prompt.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_embeds_prompt_verbatim() {
        let messages = generation_request("Create a cube 5m x 5m");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Command: Create a cube 5m x 5m");
    }

    #[test]
    fn debug_request_embeds_both_inputs_verbatim() {
        let messages = debug_request("NameError at line 12", "from abaqus import *");
        assert!(messages[1].content.contains("NameError at line 12"));
        assert!(messages[1].content.contains("from abaqus import *"));
    }
}
