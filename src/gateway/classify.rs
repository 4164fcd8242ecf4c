//! Mention classification — decides whether and how to respond.

use mimus_core::message::IncomingMessage;

/// How an inbound message should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Classification {
    /// Not addressed to the agent; no reply.
    Ignored,
    /// Agent is the first mention: run the full inference pipeline.
    Primary,
    /// Agent is mentioned, but not first: canned reply, no inference.
    Secondary,
}

/// Classify a message against the agent's identity.
///
/// Pure function of (author == self?, mention list, agent id). The first
/// mention position distinguishes "addressed directly" from "mentioned
/// incidentally in a group mention", avoiding inference cost when the
/// agent is not the primary addressee.
pub(super) fn classify(incoming: &IncomingMessage, agent_id: &str) -> Classification {
    if incoming.sender_id == agent_id {
        return Classification::Ignored;
    }
    let Some(first) = incoming.mentions.first() else {
        return Classification::Ignored;
    };
    if first == agent_id {
        Classification::Primary
    } else if incoming.mentions.iter().any(|m| m == agent_id) {
        Classification::Secondary
    } else {
        Classification::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    const AGENT: &str = "42";
    const OTHER: &str = "7";

    fn message(sender_id: &str, mentions: &[&str]) -> IncomingMessage {
        IncomingMessage {
            id: Uuid::new_v4(),
            channel: "discord".into(),
            sender_id: sender_id.into(),
            sender_name: None,
            text: "hello".into(),
            mentions: mentions.iter().map(|m| m.to_string()).collect(),
            timestamp: Utc::now(),
            reply_target: None,
            reply_to: None,
        }
    }

    #[test]
    fn test_no_mentions_is_ignored() {
        assert_eq!(classify(&message(OTHER, &[]), AGENT), Classification::Ignored);
    }

    #[test]
    fn test_agent_first_is_primary() {
        assert_eq!(
            classify(&message(OTHER, &[AGENT]), AGENT),
            Classification::Primary
        );
    }

    #[test]
    fn test_agent_first_before_others_is_primary() {
        assert_eq!(
            classify(&message(OTHER, &[AGENT, OTHER]), AGENT),
            Classification::Primary
        );
    }

    #[test]
    fn test_agent_not_first_is_secondary() {
        assert_eq!(
            classify(&message(OTHER, &[OTHER, AGENT]), AGENT),
            Classification::Secondary
        );
    }

    #[test]
    fn test_unmentioned_agent_is_ignored() {
        assert_eq!(
            classify(&message(OTHER, &[OTHER, "9"]), AGENT),
            Classification::Ignored
        );
    }

    #[test]
    fn test_own_messages_are_ignored() {
        assert_eq!(
            classify(&message(AGENT, &[AGENT]), AGENT),
            Classification::Ignored
        );
        assert_eq!(
            classify(&message(AGENT, &[OTHER, AGENT]), AGENT),
            Classification::Ignored
        );
    }
}
