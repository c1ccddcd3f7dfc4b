multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

/// Encoded as 0 / 1 / 2, so a passed proposal reads back as status `1`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting stake-weighted votes.
    Active,
    /// Ended with votes for strictly above votes against. Terminal.
    Passed,
    /// Ended with votes against greater than or equal to votes for. Terminal.
    Rejected,
}

impl ProposalStatus {
    pub fn is_finalized(&self) -> bool {
        *self != ProposalStatus::Active
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub duration_days: u64,
    pub created_at: u64,
    pub status: ProposalStatus,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    /// Winning side's stake, fixed when the proposal is ended (0 while Active)
    pub reward_pool: BigUint<M>,
    /// Block timestamp of `endProposal` (0 while Active)
    pub ended_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn voting_end(&self, seconds_per_day: u64) -> u64 {
        self.created_at + self.duration_days * seconds_per_day
    }

    pub fn total_staked(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }

    /// The side whose voters share the reward pool. Ties go to "against".
    pub fn winning_support(&self) -> bool {
        self.status == ProposalStatus::Passed
    }
}

// ============================================================
// Vote Record — one per voter per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub support: bool,
    pub amount: BigUint<M>,
}
