//! Input sanitization for text headed into the inference engine.
//!
//! Strips the agent's own display name and the characters used for
//! mention/markup injection (`< > & @`) before the text is wrapped into
//! a prompt.

/// Sanitize triggering text before it reaches the engine.
///
/// Removes every literal occurrence of `agent_name` (case-sensitive),
/// strips `< > & @`, and trims surrounding whitespace. Name removal and
/// character stripping run to a fixed point so the output never contains
/// the agent name even when stripping uncovers a new occurrence
/// (e.g. `"Mi<mus"` with name `"Mimus"`). Pure and idempotent.
pub fn sanitize(text: &str, agent_name: &str) -> String {
    let mut current = text.to_string();
    loop {
        let mut next = if agent_name.is_empty() {
            current.clone()
        } else {
            current.replace(agent_name, "")
        };
        next.retain(|c| !matches!(c, '<' | '>' | '&' | '@'));
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}
