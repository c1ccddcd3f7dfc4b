#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod investment_dao_proxy;
pub mod types;

use errors::*;
use types::{Proposal, ProposalStatus, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Voting windows are given in whole days
const SECONDS_PER_DAY: u64 = 86_400;

/// Longest voting window a proposal may request
const MAX_DURATION_DAYS: u64 = 365;

/// Share of the proposal's total stake paid back to the winning side: 20%
const REWARD_BPS: u64 = 2_000;

/// Basis points denominator
const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait InvestmentDao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, allow_early_finalization: bool) {
        self.allow_early_finalization().set(allow_early_finalization);
        self.proposal_count().set(0u64);
        self.total_collected().set(BigUint::zero());
        self.total_paid_out().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: joinDAO
    // Open membership. Joining twice is a silent success.
    // ========================================================

    #[endpoint(joinDAO)]
    fn join_dao(&self) -> bool {
        let caller = self.blockchain().get_caller();
        if self.members().insert(caller.clone()) {
            self.member_joined_event(&caller);
        }
        true
    }

    // ========================================================
    // ENDPOINT: setEarlyFinalization
    // Lets endProposal run before the voting window elapses.
    // ========================================================

    #[only_owner]
    #[endpoint(setEarlyFinalization)]
    fn set_early_finalization(&self, allowed: bool) {
        self.allow_early_finalization().set(allowed);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Anyone can propose; only members can vote.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer, duration_days: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);
        require!(
            duration_days > 0 && duration_days <= MAX_DURATION_DAYS,
            ERR_INVALID_DURATION
        );

        let proposal_id = self.proposal_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description: description.clone(),
            duration_days,
            created_at: timestamp,
            status: ProposalStatus::Active,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            reward_pool: BigUint::zero(),
            ended_at: 0u64,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.new_proposal_event(proposal_id, &caller, duration_days, &description);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight = EGLD staked with the call. One vote per member
    // per proposal, never merged or retracted. Open until
    // endProposal runs, even past the voting window.
    // ========================================================

    #[endpoint(vote)]
    #[payable("EGLD")]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        require!(self.members().contains(&caller), ERR_NOT_MEMBER);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_ALREADY_FINALIZED
        );
        require!(self.votes(proposal_id, &caller).is_empty(), ERR_DUPLICATE_VOTE);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        if support {
            proposal.votes_for += &amount;
        } else {
            proposal.votes_against += &amount;
        }

        let record = VoteRecord {
            support,
            amount: amount.clone(),
        };
        self.votes(proposal_id, &caller).set(&record);
        self.voters(proposal_id).insert(caller.clone());
        self.proposals(proposal_id).set(&proposal);
        self.total_collected().update(|total| *total += &amount);

        self.vote_event(proposal_id, &caller, support, &amount);
    }

    // ========================================================
    // ENDPOINT: endProposal
    // Active → Passed (for > against) or Rejected (otherwise).
    // Fixes the winning side's stake as the reward pool.
    // ========================================================

    #[endpoint(endProposal)]
    fn end_proposal(&self, proposal_id: u64) -> ProposalStatus {
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_ALREADY_FINALIZED
        );

        let now = self.blockchain().get_block_timestamp();
        if !self.allow_early_finalization().get() {
            require!(
                now >= proposal.voting_end(SECONDS_PER_DAY),
                ERR_VOTING_NOT_ENDED
            );
        }

        if proposal.votes_for > proposal.votes_against {
            proposal.status = ProposalStatus::Passed;
            proposal.reward_pool = proposal.votes_for.clone();
        } else {
            proposal.status = ProposalStatus::Rejected;
            proposal.reward_pool = proposal.votes_against.clone();
        }
        proposal.ended_at = now;
        self.proposals(proposal_id).set(&proposal);

        if proposal.status == ProposalStatus::Passed {
            self.proposal_passed_event(proposal_id, &proposal.votes_for, &proposal.votes_against);
        } else {
            self.proposal_rejected_event(proposal_id, &proposal.votes_for, &proposal.votes_against);
        }

        proposal.status
    }

    // ========================================================
    // ENDPOINT: withDraw
    // Pays a winning voter's reward exactly once. A zero reward
    // still settles the claim.
    // ========================================================

    #[endpoint(withDraw)]
    fn withdraw(&self, proposal_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.status.is_finalized(), ERR_NOT_FINALIZED);
        require!(self.is_winning_voter(&proposal, &caller), ERR_NOT_ENTITLED);
        require!(
            !self.withdrawn(proposal_id, &caller).get(),
            ERR_ALREADY_WITHDRAWN
        );

        let reward = self.compute_reward(&proposal, &caller);
        // Rewards sum to at most REWARD_BPS of each proposal's stake,
        // so paid out never passes collected.
        let paid_after = &self.total_paid_out().get() + &reward;
        require!(
            paid_after <= self.total_collected().get(),
            ERR_TREASURY_EXHAUSTED
        );

        self.withdrawn(proposal_id, &caller).set(true);
        self.total_paid_out().set(&paid_after);

        if reward > 0u64 {
            self.send().direct_egld(&caller, &reward);
        }
        self.withdraw_event(proposal_id, &caller, &reward);

        reward
    }

    // ========================================================
    // INTERNAL: reward accounting
    // ========================================================

    fn is_winning_voter(&self, proposal: &Proposal<Self::Api>, voter: &ManagedAddress) -> bool {
        let vote = self.votes(proposal.id, voter);
        !vote.is_empty() && vote.get().support == proposal.winning_support()
    }

    /// stake * total_staked * REWARD_BPS / (reward_pool * BPS_DENOMINATOR)
    ///
    /// The winning side holds at least half of the total stake, so a
    /// reward never exceeds 2/5 of the voter's own stake.
    fn compute_reward(&self, proposal: &Proposal<Self::Api>, voter: &ManagedAddress) -> BigUint {
        if proposal.reward_pool == 0u64 || !self.is_winning_voter(proposal, voter) {
            return BigUint::zero();
        }

        let stake = self.votes(proposal.id, voter).get().amount;
        let numerator = &(&stake * &proposal.total_staked()) * REWARD_BPS;
        let denominator = &proposal.reward_pool * BPS_DENOMINATOR;
        numerator / denominator
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(checkProposal)]
    fn check_proposal(&self, proposal_id: u64) -> ManagedBuffer {
        self.require_proposal(proposal_id).description
    }

    #[view(checkPropsalVoteFor)]
    fn check_proposal_vote_for(&self, proposal_id: u64) -> BigUint {
        self.require_proposal(proposal_id).votes_for
    }

    #[view(checkPropsalVoteAgain)]
    fn check_proposal_vote_against(&self, proposal_id: u64) -> BigUint {
        self.require_proposal(proposal_id).votes_against
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        self.require_proposal(proposal_id).status
    }

    #[view(checkReward)]
    fn check_reward(&self, proposal_id: u64, voter: &ManagedAddress) -> BigUint {
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.status.is_finalized(), ERR_NOT_FINALIZED);
        self.compute_reward(&proposal, voter)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let total = self.proposal_count().get();
        let first = from.max(1);
        let last = first.saturating_add(count).saturating_sub(1).min(total);

        let mut result = MultiValueEncoded::new();
        if count > 0 {
            for proposal in (first..=last).map(|id| self.proposals(id).get()) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();

        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if proposal.status == ProposalStatus::Active {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> Option<VoteRecord<Self::Api>> {
        self.require_proposal(proposal_id);
        let vote = self.votes(proposal_id, voter);
        if vote.is_empty() {
            None
        } else {
            Some(vote.get())
        }
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_proposal(proposal_id);
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(hasWithdrawn)]
    fn has_withdrawn(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.require_proposal(proposal_id);
        self.withdrawn(proposal_id, voter).get()
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let skip = usize::try_from(from).unwrap_or(usize::MAX);
        let take = usize::try_from(count).unwrap_or(usize::MAX);

        let mut result = MultiValueEncoded::new();
        for member in self.members().iter().skip(skip).take(take) {
            result.push(member);
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getTreasury)]
    fn get_treasury(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        (self.total_collected().get(), self.total_paid_out().get(), balance).into()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<bool, u64, u64> {
        let early = self.allow_early_finalization().get();
        (early, REWARD_BPS, MAX_DURATION_DAYS).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberJoined")]
    fn member_joined_event(&self, #[indexed] member: &ManagedAddress);

    #[event("newProposal")]
    fn new_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] duration_days: u64,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        amount: &BigUint,
    );

    #[event("proposalPassed")]
    fn proposal_passed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        votes_against: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        votes_against: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("allowEarlyFinalization")]
    fn allow_early_finalization(&self) -> SingleValueMapper<bool>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("withdrawn")]
    fn withdrawn(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Treasury ──

    #[storage_mapper("totalCollected")]
    fn total_collected(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalPaidOut")]
    fn total_paid_out(&self) -> SingleValueMapper<BigUint>;
}
