use crate::model::{Balance, MemberId, Money, Transfer};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Balances within one cent of zero count as settled.
pub const SETTLEMENT_EPSILON: Money = Money::from_decimal(Decimal::from_parts(1, 0, 0, false, 2));

/// Settlement calculation service
///
/// Pairs the largest debtor with the largest creditor until one side runs
/// out. This is a greedy heuristic: it usually needs few transfers but does
/// not guarantee the minimum.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Suggest transfers that bring every member's net balance within
    /// [`SETTLEMENT_EPSILON`] of zero.
    ///
    /// Debtors are visited most-negative first and creditors largest first.
    /// Both sorts are stable, so members with equal balances keep their input
    /// order. The returned list is in matching order, not sorted by amount.
    pub fn compute_settlements(&self, balances: &[Balance]) -> Vec<Transfer> {
        let epsilon = SETTLEMENT_EPSILON;

        let mut debtors: Vec<(MemberId, Money)> = balances
            .iter()
            .filter(|balance| balance.net_balance < -epsilon)
            .map(|balance| (balance.member_id, balance.net_balance))
            .collect();
        let mut creditors: Vec<(MemberId, Money)> = balances
            .iter()
            .filter(|balance| balance.net_balance > epsilon)
            .map(|balance| (balance.member_id, balance.net_balance))
            .collect();

        debtors.sort_by(|a, b| a.1.cmp(&b.1));
        creditors.sort_by(|a, b| b.1.cmp(&a.1));

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let (mut i, mut j) = (0, 0);

        while i < debtors.len() && j < creditors.len() {
            let (debtor, debt) = debtors[i];
            let (creditor, credit) = creditors[j];
            let amount = debt.abs().min(credit);

            if amount > epsilon {
                transfers.push(Transfer {
                    from: debtor,
                    to: creditor,
                    amount,
                });
            }

            debtors[i].1 += amount;
            creditors[j].1 -= amount;

            if debtors[i].1.abs() <= epsilon {
                i += 1;
            }
            if creditors[j].1.abs() <= epsilon {
                j += 1;
            }
        }

        let residual: Vec<(MemberId, Money)> = debtors[i..]
            .iter()
            .chain(&creditors[j..])
            .filter(|(_, remaining)| remaining.abs() > epsilon)
            .copied()
            .collect();
        if !residual.is_empty() {
            tracing::warn!(
                unsettled_member_count = residual.len(),
                unsettled = ?residual,
                "Settlement left a residual; sub-cent balances excluded from matching or unbalanced input"
            );
        }

        tracing::debug!(
            member_count = balances.len(),
            transfer_count = transfers.len(),
            "Computed settlement transfers"
        );

        transfers
    }
}

/// Net balances after every transfer has been paid, keyed in balance order.
pub fn apply_transfers(balances: &[Balance], transfers: &[Transfer]) -> IndexMap<MemberId, Money> {
    let mut remaining: IndexMap<MemberId, Money> = balances
        .iter()
        .map(|balance| (balance.member_id, balance.net_balance))
        .collect();

    // The payer's debt shrinks and the receiver's credit shrinks.
    for transfer in transfers {
        *remaining.entry(transfer.from).or_insert(Money::ZERO) += transfer.amount;
        *remaining.entry(transfer.to).or_insert(Money::ZERO) -= transfer.amount;
    }

    remaining
}
