pub const MEMBER: &str = "Member";
pub const SHARE: &str = "Share";
pub const OWED: &str = "Owed";
pub const PAID: &str = "Paid";
pub const BALANCE: &str = "Balance";
pub const FROM: &str = "From";
pub const TO: &str = "To";
pub const AMOUNT: &str = "Amount";
pub const PERIOD: &str = "Period";
pub const INCOME: &str = "Income";
pub const PAID_EXPENSES: &str = "Paid expenses";
pub const RATE: &str = "Rate";
pub const RATE_NOT_RECORDED: &str = "not recorded, amounts taken as-is";
pub const ALL_SETTLED: &str = "Everyone is settled up.";
