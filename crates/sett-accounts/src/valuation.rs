use rust_decimal::Decimal;
use sett_quoting::PriceTable;
use sett_types::{UserAccountSummary, VaultAccountView, VaultBalanceRecord, VaultConfig};

use crate::error::AccountError;

/// Symbol of the rebasing asset whose shares are valued from the sett's
/// balance/supply ratio instead of `pricePerFullShare`.
pub const DEFAULT_REBASING_ASSET: &str = "digg";

/// Fixed-point scale of the raw `pricePerFullShare`.
const PRICE_PER_FULL_SHARE_DECIMALS: u32 = 18;

/// Largest power of ten a `Decimal` can divide by exactly.
const MAX_TOKEN_DECIMALS: u32 = 28;

/// Divides `value` by `10^decimals`.
fn scale_down(value: Decimal, decimals: u32) -> Option<Decimal> {
    if decimals > MAX_TOKEN_DECIMALS {
        return None;
    }
    let divisor = Decimal::from_i128_with_scale(10_i128.pow(decimals), 0);
    value.checked_div(divisor)
}

/// Values one user position in USD.
///
/// Deposits and withdrawals are recorded in underlying units at the time of
/// the transfer. For the rebasing asset they are rescaled by the ratio
/// between the live balance/supply share value and `pricePerFullShare`.
pub fn value_sett_balance(
    record: &VaultBalanceRecord,
    sett: &VaultConfig,
    prices: &PriceTable,
    rebasing_asset: &str,
) -> Result<VaultAccountView, AccountError> {
    let snapshot = &record.sett;
    let invalid = |reason: &str| AccountError::invalid_vault_data(&sett.sett_token, reason);

    let price_per_full_share = scale_down(
        snapshot.price_per_full_share,
        PRICE_PER_FULL_SHARE_DECIMALS,
    )
    .ok_or_else(|| invalid("price per full share out of range"))?;

    let (ratio, price_per_full_share) = if sett.symbol.eq_ignore_ascii_case(rebasing_asset) {
        let share_value = snapshot
            .balance
            .checked_div(snapshot.total_supply)
            .ok_or_else(|| invalid("total supply is zero"))?;
        let ratio = share_value
            .checked_div(price_per_full_share)
            .ok_or_else(|| invalid("price per full share is zero"))?;
        (ratio, share_value)
    } else {
        (Decimal::ONE, price_per_full_share)
    };

    let overflow = || invalid("arithmetic overflow");

    let gross_deposit = record.gross_deposit.checked_mul(ratio).ok_or_else(overflow)?;
    let gross_withdraw = record
        .gross_withdraw
        .checked_mul(ratio)
        .ok_or_else(overflow)?;
    let sett_tokens = price_per_full_share
        .checked_mul(record.net_share_deposit)
        .ok_or_else(overflow)?;

    let decimals = snapshot.token.decimals;
    let earned = sett_tokens
        .checked_sub(gross_deposit)
        .and_then(|v| v.checked_add(gross_withdraw))
        .and_then(|v| scale_down(v, decimals))
        .ok_or_else(|| invalid("earned amount out of range"))?;
    let balance = scale_down(sett_tokens, decimals)
        .ok_or_else(|| invalid("balance out of range"))?;

    let token = &snapshot.token.id;
    let value = prices.usd_value(token, balance).ok_or_else(overflow)?;
    let earned_value = prices.usd_value(token, earned).ok_or_else(overflow)?;

    tracing::debug!(
        sett = %sett.sett_token,
        asset = %sett.symbol,
        %value,
        %earned_value,
        "Valued sett position"
    );

    Ok(VaultAccountView {
        id: sett.sett_token.clone(),
        name: sett.name.clone(),
        asset: sett.symbol.clone(),
        value,
        earned_value,
    })
}

/// Totals the per-sett views. An account without positions is worth zero.
pub fn summarize(
    user_id: &str,
    sett_accounts: Vec<VaultAccountView>,
) -> Result<UserAccountSummary, AccountError> {
    let mut value = Decimal::ZERO;
    let mut earned_value = Decimal::ZERO;
    for account in &sett_accounts {
        let overflow = || AccountError::invalid_vault_data(&account.id, "account total overflow");
        value = value.checked_add(account.value).ok_or_else(overflow)?;
        earned_value = earned_value
            .checked_add(account.earned_value)
            .ok_or_else(overflow)?;
    }

    Ok(UserAccountSummary {
        id: user_id.to_string(),
        value,
        earned_value,
        sett_accounts,
    })
}
