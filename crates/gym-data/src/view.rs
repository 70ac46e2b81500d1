//! Derived views over a snapshot of members.
//!
//! Everything in here is a pure function of the members and the
//! date passed in. Results keep the order of the input.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error as ThisError;

use crate::Member;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    /// Unpaid, or paid for an old cycle
    Pending,
    PaidThisMonth,
    ExpiringSoon,
}

impl StatusFilter {
    pub fn matches(&self, member: &Member, today: NaiveDate) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => member.is_pending(today),
            StatusFilter::PaidThisMonth => member.is_paid_for(today),
            StatusFilter::ExpiringSoon => member.is_expiring_soon(today),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::PaidThisMonth => "paid",
            StatusFilter::ExpiringSoon => "expiring",
        };
        write!(f, "{}", name)
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter {0:?}, expected one of: all, pending, paid, expiring")]
pub struct StatusFilterError(String);

impl FromStr for StatusFilter {
    type Err = StatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "paid" => Ok(StatusFilter::PaidThisMonth),
            "expiring" => Ok(StatusFilter::ExpiringSoon),
            _ => Err(StatusFilterError(s.to_string())),
        }
    }
}

/// Filter and search query selected by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberView {
    pub filter: StatusFilter,
    pub query: String,
}

/// Member counters for the overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub paid_this_month: usize,
    pub pending: usize,
    pub expiring_soon: usize,
}

pub fn filter_by_status<'a, I>(members: I, filter: StatusFilter, today: NaiveDate) -> Vec<&'a Member>
where
    I: IntoIterator<Item = &'a Member>,
{
    members
        .into_iter()
        .filter(|m| filter.matches(m, today))
        .collect()
}

/// Case insensitive substring search on name and email.
/// A blank query matches everyone, otherwise the query is
/// matched as given, surrounding spaces included.
pub fn search<'a, I>(members: I, query: &str) -> Vec<&'a Member>
where
    I: IntoIterator<Item = &'a Member>,
{
    if query.trim().is_empty() {
        return members.into_iter().collect();
    }
    let query = query.to_lowercase();
    members
        .into_iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query) || m.email.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn compute_stats(members: &[Member], today: NaiveDate) -> Stats {
    let count = |filter: StatusFilter| members.iter().filter(|m| filter.matches(m, today)).count();
    Stats {
        total: members.len(),
        paid_this_month: count(StatusFilter::PaidThisMonth),
        pending: count(StatusFilter::Pending),
        expiring_soon: count(StatusFilter::ExpiringSoon),
    }
}

/// Apply the status filter, then narrow down by the search query.
pub fn select<'a>(members: &'a [Member], view: &MemberView, today: NaiveDate) -> Vec<&'a Member> {
    let filtered = filter_by_status(members, view.filter, today);
    search(filtered, &view.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaymentStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member(name: &str, day: u8, status: PaymentStatus, cycle: &str) -> Member {
        Member {
            name: name.to_string(),
            email: format!("{}@gym.test", name.to_lowercase()),
            password: "pw".to_string(),
            payment_day: day,
            payment_status: status,
            current_cycle_month: cycle.parse().unwrap(),
            ..Member::default()
        }
    }

    fn names(members: &[&Member]) -> Vec<String> {
        members.iter().map(|m| m.name.clone()).collect()
    }

    fn roster() -> Vec<Member> {
        vec![
            member("Alba", 5, PaymentStatus::Unpaid, "2024-05"),
            member("Bruno", 20, PaymentStatus::Paid, "2024-06"),
            member("Celia", 4, PaymentStatus::Paid, "2024-05"),
            member("Diego", 6, PaymentStatus::Unpaid, "2024-06"),
        ]
    }

    #[test]
    fn test_filter_all_is_identity() {
        let members = roster();
        for today in [date(2024, 6, 3), date(1999, 12, 31), date(2030, 2, 28)] {
            let all = filter_by_status(&members, StatusFilter::All, today);
            assert_eq!(all.len(), members.len());
            assert_eq!(names(&all), vec!["Alba", "Bruno", "Celia", "Diego"]);
        }
    }

    #[test]
    fn test_filter_pending() {
        let members = roster();
        let pending = filter_by_status(&members, StatusFilter::Pending, date(2024, 6, 3));
        assert_eq!(names(&pending), vec!["Alba", "Celia", "Diego"]);
    }

    #[test]
    fn test_filter_paid_this_month() {
        let members = roster();
        let paid = filter_by_status(&members, StatusFilter::PaidThisMonth, date(2024, 6, 3));
        assert_eq!(names(&paid), vec!["Bruno"]);

        // Nobody paid for July yet
        let paid = filter_by_status(&members, StatusFilter::PaidThisMonth, date(2024, 7, 1));
        assert!(paid.is_empty());
    }

    #[test]
    fn test_filter_expiring_soon() {
        let members = vec![member("Alba", 5, PaymentStatus::Unpaid, "2024-05")];

        let expiring = filter_by_status(&members, StatusFilter::ExpiringSoon, date(2024, 6, 3));
        assert_eq!(names(&expiring), vec!["Alba"]);

        let expiring = filter_by_status(&members, StatusFilter::ExpiringSoon, date(2024, 6, 10));
        assert!(expiring.is_empty());
    }

    #[test]
    fn test_filter_expiring_soon_excludes_paid() {
        let members = roster();
        let expiring = filter_by_status(&members, StatusFilter::ExpiringSoon, date(2024, 6, 3));
        // Celia is due on the 4th but has paid
        assert_eq!(names(&expiring), vec!["Alba", "Diego"]);
    }

    #[test]
    fn test_search() {
        let members = roster();
        assert_eq!(names(&search(&members, "")), vec!["Alba", "Bruno", "Celia", "Diego"]);
        assert_eq!(names(&search(&members, "   ")).len(), 4);
        assert_eq!(names(&search(&members, "BRU")), vec!["Bruno"]);
        assert_eq!(names(&search(&members, "celia@gym")), vec!["Celia"]);
        assert_eq!(names(&search(&members, "gym.test")).len(), 4);
        assert!(search(&members, "nobody").is_empty());
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let members = vec![member("Ana", 1, PaymentStatus::Unpaid, "2024-06")];
        assert!(search(&members, "a ").is_empty());
        assert!(search(&members, " an").is_empty());
        assert_eq!(names(&search(&members, "AN")), vec!["Ana"]);

        let members = vec![member("Ana Maria", 1, PaymentStatus::Unpaid, "2024-06")];
        assert_eq!(names(&search(&members, "a m")), vec!["Ana Maria"]);
    }

    #[test]
    fn test_compute_stats() {
        let members = roster();
        let stats = compute_stats(&members, date(2024, 6, 3));
        assert_eq!(
            stats,
            Stats {
                total: 4,
                paid_this_month: 1,
                pending: 3,
                expiring_soon: 2,
            }
        );
        assert_eq!(compute_stats(&[], date(2024, 6, 3)), Stats::default());
    }

    #[test]
    fn test_select_filters_then_searches() {
        let members = roster();
        let view = MemberView {
            filter: StatusFilter::Pending,
            query: "o".to_string(),
        };
        // Bruno matches the query, but is not pending
        assert_eq!(names(&select(&members, &view, date(2024, 6, 3))), vec!["Diego"]);

        let view = MemberView::default();
        assert_eq!(select(&members, &view, date(2024, 6, 3)).len(), 4);
    }

    #[test]
    fn test_status_filter_parse() {
        for filter in [
            StatusFilter::All,
            StatusFilter::Pending,
            StatusFilter::PaidThisMonth,
            StatusFilter::ExpiringSoon,
        ] {
            assert_eq!(filter.to_string().parse::<StatusFilter>(), Ok(filter));
        }
        assert!("overdue".parse::<StatusFilter>().is_err());
    }
}
