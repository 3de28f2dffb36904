use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Contribution amount must be greater than zero")]
    ZeroAmount,
    #[msg("The round is pending a winner and does not accept contributions")]
    RoundPending,
    #[msg("Forwarding funds to the recipient failed")]
    TransferFailed,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Fulfillment does not match the pending randomness request")]
    UnmatchedRequest,
    #[msg("Caller is not the raffle administrator")]
    Unauthorized,
    #[msg("The round already holds the maximum number of contributors")]
    RoundFull,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("A randomness request is already pending")]
    RequestAlreadyPending,
    #[msg("Fulfillment carried no random words")]
    NoRandomWords,
    #[msg("The round has no contributors to select from")]
    NoContributors,
    #[msg("The coordinator did not return a request id")]
    MissingRequestId,
    #[msg("Signer is not the configured oracle authority")]
    InvalidOracleAuthority,
    #[msg("Recipient account does not match the configured recipient")]
    RecipientMismatch,
    #[msg("Prize destination does not belong to the selected winner")]
    PrizeRecipientMismatch,
    #[msg("Selection interval must be positive")]
    InvalidInterval,
    #[msg("Requested word count is out of range")]
    InvalidWordCount,
    #[msg("Recipient must be a real account")]
    InvalidRecipient,
    #[msg("Coordinator program must be a real account")]
    InvalidCoordinator,
    #[msg("Oracle authority must be a real account")]
    InvalidOracleConfig,
}
