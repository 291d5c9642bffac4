use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::mem::size_of;

use crate::{
    errors::{MockOracleError, OracleResult},
    utils::{OracleClock, AGGREGATOR_DISCRIMINATOR, AGGREGATOR_DISCRIMINATOR_SIZE},
};

// Switchboard v2 aggregator layout. Packed, so fields must be copied out
// before they are borrowed. Flags are kept as raw bytes so any account data
// is a valid bit pattern.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct SwitchboardDecimal {
    pub mantissa: i128,
    pub scale: u32,
}

#[derive(Clone, Copy)]
#[repr(C, packed)]
pub struct AggregatorRound {
    pub num_success: u32,
    pub num_error: u32,
    pub is_closed: u8,
    pub round_open_slot: u64,
    pub round_open_timestamp: i64,
    pub result: SwitchboardDecimal,
    pub std_deviation: SwitchboardDecimal,
    pub min_response: SwitchboardDecimal,
    pub max_response: SwitchboardDecimal,
    pub oracle_pubkeys_data: [Pubkey; 16],
    pub medians_data: [SwitchboardDecimal; 16],
    pub current_payout: [i64; 16],
    pub medians_fulfilled: [u8; 16],
    pub errors_fulfilled: [u8; 16],
}

#[derive(Clone, Copy)]
#[repr(C, packed)]
pub struct AggregatorAccountData {
    pub name: [u8; 32],
    pub metadata: [u8; 128],
    pub _reserved1: [u8; 32],
    pub queue_pubkey: Pubkey,
    pub oracle_request_batch_size: u32,
    pub min_oracle_results: u32,
    pub min_job_results: u32,
    pub min_update_delay_seconds: u32,
    pub start_after: i64,
    pub variance_threshold: SwitchboardDecimal,
    pub force_report_period: i64,
    pub expiration: i64,
    pub consecutive_failure_count: u64,
    pub next_allowed_update_time: i64,
    pub is_locked: u8,
    pub crank_pubkey: Pubkey,
    pub latest_confirmed_round: AggregatorRound,
    pub current_round: AggregatorRound,
    pub job_pubkeys_data: [Pubkey; 16],
    pub job_hashes: [[u8; 32]; 16],
    pub job_pubkeys_size: u32,
    pub jobs_checksum: [u8; 32],
    pub authority: Pubkey,
    pub history_buffer: Pubkey,
    pub previous_confirmed_round_result: SwitchboardDecimal,
    pub previous_confirmed_round_slot: u64,
    pub disable_crank: u8,
    pub job_weights: [u8; 16],
    pub creation_timestamp: i64,
    pub resolution_mode: u8,
    pub base_priority_fee: u32,
    pub priority_fee_bump: u32,
    pub priority_fee_bump_period: u32,
    pub max_priority_fee_multiplier: u32,
    pub parent_function: Pubkey,
    pub _ebuf: [u8; 90],
}

unsafe impl Zeroable for SwitchboardDecimal {}
unsafe impl Pod for SwitchboardDecimal {}
unsafe impl Zeroable for AggregatorRound {}
unsafe impl Pod for AggregatorRound {}
unsafe impl Zeroable for AggregatorAccountData {}
unsafe impl Pod for AggregatorAccountData {}

impl SwitchboardDecimal {
    pub fn new(mantissa: i128, scale: u32) -> Self {
        SwitchboardDecimal { mantissa, scale }
    }
}

impl fmt::Display for SwitchboardDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mantissa = self.mantissa;
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{}", mantissa);
        }
        // i128 carries at most 39 digits
        if scale > 39 {
            return write!(f, "{}e-{}", mantissa, scale);
        }

        let sign = if mantissa < 0 { "-" } else { "" };
        let mut digits = mantissa.unsigned_abs().to_string();
        if digits.len() <= scale {
            digits = format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits);
        }

        let (integer, fraction) = digits.split_at(digits.len() - scale);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            write!(f, "{}{}", sign, integer)
        } else {
            write!(f, "{}{}.{}", sign, integer, fraction)
        }
    }
}

impl AggregatorAccountData {
    pub fn get_result(&self) -> SwitchboardDecimal {
        self.latest_confirmed_round.result
    }
}

fn check_aggregator(data: &[u8]) -> OracleResult {
    require!(
        data.len() >= AGGREGATOR_DISCRIMINATOR_SIZE + size_of::<AggregatorAccountData>(),
        MockOracleError::AccountTooSmall
    );
    require!(
        data[..AGGREGATOR_DISCRIMINATOR_SIZE] == AGGREGATOR_DISCRIMINATOR,
        MockOracleError::InvalidAggregatorDiscriminator
    );

    Ok(())
}

/// Decodes an initialized aggregator account, discriminator included.
///
/// Every byte pattern past the discriminator decodes; flags read back as
/// raw `u8`s, nonzero meaning set.
pub fn load_aggregator(data: &[u8]) -> OracleResult<&AggregatorAccountData> {
    check_aggregator(data)?;

    Ok(bytemuck::from_bytes(
        &data[AGGREGATOR_DISCRIMINATOR_SIZE
            ..AGGREGATOR_DISCRIMINATOR_SIZE + size_of::<AggregatorAccountData>()],
    ))
}

pub fn load_aggregator_mut(data: &mut [u8]) -> OracleResult<&mut AggregatorAccountData> {
    check_aggregator(data)?;

    Ok(bytemuck::from_bytes_mut(
        &mut data[AGGREGATOR_DISCRIMINATOR_SIZE
            ..AGGREGATOR_DISCRIMINATOR_SIZE + size_of::<AggregatorAccountData>()],
    ))
}

pub fn write_aggregator_result(
    account: &AccountInfo,
    price: i64,
    expo: i32,
    clock: OracleClock,
) -> OracleResult {
    let mut data = account.try_borrow_mut_data()?;
    let aggregator = load_aggregator_mut(&mut data[..])?;

    let previous = aggregator.latest_confirmed_round;
    aggregator.previous_confirmed_round_result = previous.result;
    aggregator.previous_confirmed_round_slot = previous.round_open_slot;

    aggregator.min_oracle_results = 1;
    aggregator.latest_confirmed_round.num_success = 1;
    aggregator.latest_confirmed_round.result = SwitchboardDecimal::new(price as i128, expo as u32);
    aggregator.latest_confirmed_round.round_open_slot = clock.slot;
    aggregator.latest_confirmed_round.round_open_timestamp = clock.unix_timestamp;

    Ok(())
}
