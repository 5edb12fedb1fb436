//! Proposal rules.
//!
//! A proposal's support count is the size of its supporter set. Each user
//! supports a proposal at most once.

use crate::fields::require_text;

pub const MAX_PROPOSAL_TITLE_LENGTH: usize = 100;
pub const MAX_PROPOSAL_DESCRIPTION_LENGTH: usize = 20_000;

/// Proposals listed per page.
pub const PROPOSALS_PER_PAGE: i64 = 50;

pub fn validate_proposal_title(title: &str) -> Result<(), String> {
    require_text("Proposal title", title, MAX_PROPOSAL_TITLE_LENGTH)
}

pub fn validate_proposal_description(description: &str) -> Result<(), String> {
    require_text(
        "Proposal description",
        description,
        MAX_PROPOSAL_DESCRIPTION_LENGTH,
    )
}

/// Message returned when a user votes twice.
pub fn duplicate_vote_message(proposal_id: i64) -> String {
    format!("You already support proposal {proposal_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_description_are_required() {
        assert!(validate_proposal_title("Carril bici").is_ok());
        assert!(validate_proposal_title("").is_err());
        assert!(validate_proposal_title(&"p".repeat(101)).is_err());
        assert!(validate_proposal_description("Unir el centro con el puerto").is_ok());
        assert!(validate_proposal_description("\n").is_err());
    }

    #[test]
    fn duplicate_vote_message_names_proposal() {
        assert!(duplicate_vote_message(12).contains("12"));
    }
}
