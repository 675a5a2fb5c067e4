use hearthbook_domain::{
    BalanceCalculator, Currency, ExchangeRate, ExpenseId, Member, MemberId, Money,
    PaidExpenseRecord, RecordId, SettlementCalculator, Transfer,
};
use rstest::rstest;

const ALICE: MemberId = MemberId(1);
const BOB: MemberId = MemberId(2);
const CAROL: MemberId = MemberId(3);

fn member(id: MemberId, income: i64, currency: Currency) -> Member {
    Member::new(id, format!("member-{}", id.0)).with_income(Money::from_i64(income), currency)
}

fn paid(record: u64, payer: MemberId, amount: i64) -> PaidExpenseRecord {
    PaidExpenseRecord {
        id: RecordId(record),
        expense_id: ExpenseId(record),
        amount: Money::from_i64(amount),
        currency: Currency::Reference,
        payer,
    }
}

fn transfer(from: MemberId, to: MemberId, amount: i64) -> Transfer {
    Transfer {
        from,
        to,
        amount: Money::from_i64(amount),
    }
}

#[rstest]
#[case::one_payer_covers_everything(
    vec![
        member(ALICE, 70, Currency::Reference),
        member(BOB, 30, Currency::Reference),
    ],
    vec![paid(1, ALICE, 100)],
    vec![30, -30],
    vec![transfer(BOB, ALICE, 30)]
)]
#[case::both_pay_part(
    vec![
        member(ALICE, 50, Currency::Reference),
        member(BOB, 50, Currency::Reference),
    ],
    vec![paid(1, BOB, 40), paid(2, ALICE, 60)],
    vec![10, -10],
    vec![transfer(BOB, ALICE, 10)]
)]
#[case::smallest_earner_pays_for_all(
    vec![
        member(ALICE, 50, Currency::Reference),
        member(BOB, 30, Currency::Reference),
        member(CAROL, 20, Currency::Reference),
    ],
    vec![paid(1, CAROL, 100)],
    vec![-50, -30, 80],
    vec![transfer(ALICE, CAROL, 50), transfer(BOB, CAROL, 30)]
)]
#[case::nothing_paid_yet(
    vec![
        member(ALICE, 50, Currency::Reference),
        member(BOB, 50, Currency::Reference),
    ],
    vec![],
    vec![0, 0],
    vec![]
)]
#[case::missing_rate_leaves_secondary_unconverted(
    vec![
        member(ALICE, 50, Currency::Reference),
        member(BOB, 50, Currency::Secondary),
    ],
    vec![paid(1, ALICE, 100)],
    vec![50, -50],
    vec![transfer(BOB, ALICE, 50)]
)]
fn household_scenarios(
    #[case] members: Vec<Member>,
    #[case] records: Vec<PaidExpenseRecord>,
    #[case] expected_nets: Vec<i64>,
    #[case] expected_transfers: Vec<Transfer>,
) {
    let balances = BalanceCalculator.compute_balances(&members, &records, ExchangeRate::default());
    let nets: Vec<Money> = balances.iter().map(|b| b.net_balance).collect();
    let expected_nets: Vec<Money> = expected_nets.into_iter().map(Money::from_i64).collect();
    assert_eq!(nets, expected_nets);

    let transfers = SettlementCalculator.compute_settlements(&balances);
    assert_eq!(transfers, expected_transfers);
}
