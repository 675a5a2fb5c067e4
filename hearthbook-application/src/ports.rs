use hearthbook_domain::{ExchangeRate, Member, MemberId, Period};
use std::collections::HashMap;

pub trait ExchangeRateProvider: Send + Sync {
    /// Rate for the period, or `None` when the household never recorded one.
    fn rate_for(&self, period: Period) -> Option<ExchangeRate>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.get(&member_id).map(String::as_str)
    }
}

impl MemberDirectory for [Member] {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.iter()
            .find(|member| member.id == member_id)
            .map(|member| member.name.as_str())
    }
}

impl MemberDirectory for Vec<Member> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.as_slice().display_name(member_id)
    }
}
