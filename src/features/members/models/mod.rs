mod member;
mod member_filter;

pub use member::Member;
pub use member_filter::MemberFilter;
