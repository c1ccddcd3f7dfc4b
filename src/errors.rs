// ============================================================
// Error messages — every rejection is a user error (status 4)
// and reverts the whole call.
// ============================================================

pub const ERR_NOT_MEMBER: &str = "Only members can vote";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal is not active";
pub const ERR_DUPLICATE_VOTE: &str = "Already voted";
pub const ERR_INVALID_AMOUNT: &str = "Stake must be greater than zero";
pub const ERR_NOT_ENTITLED: &str = "No winning vote on this proposal";
pub const ERR_ALREADY_WITHDRAWN: &str = "Reward already withdrawn";

pub const ERR_INVALID_DURATION: &str = "Invalid duration";
pub const ERR_EMPTY_DESCRIPTION: &str = "Description cannot be empty";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting period has not ended";
pub const ERR_NOT_FINALIZED: &str = "Proposal is not finalized";
pub const ERR_TREASURY_EXHAUSTED: &str = "Payout exceeds collected stake";
