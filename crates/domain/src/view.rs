use crate::reminder::Reminder;

/// Derives the list as presented to the user: reminders matching the
/// search text, unpaid ones first, and within each group the most
/// urgent due date on top. Recomputed on every call, never persisted.
///
/// The search text matches case-insensitively against the person name
/// and as a plain substring against the phone number.
pub fn display_list(reminders: &[Reminder], search: &str) -> Vec<Reminder> {
    let needle = search.to_lowercase();
    let mut matches = reminders
        .iter()
        .filter(|r| {
            r.person_name.to_lowercase().contains(&needle) || r.phone_number.contains(search)
        })
        .cloned()
        .collect::<Vec<_>>();
    matches.sort_by(|a, b| a.is_paid.cmp(&b.is_paid).then(a.due_date.cmp(&b.due_date)));
    matches
}

/// Sum of all unpaid amounts.
pub fn total_pending(reminders: &[Reminder]) -> i64 {
    reminders
        .iter()
        .filter(|r| !r.is_paid)
        .map(|r| r.amount)
        .sum()
}

pub fn pending_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| !r.is_paid).count()
}

/// Formats a whole-rupee amount with Indian digit grouping: the last
/// three digits form one group, every group before that has two.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity::ID;
    use chrono::{Duration, TimeZone, Utc};

    fn reminder(id: i32, name: &str, phone: &str, is_paid: bool, due_in_days: i64) -> Reminder {
        Reminder {
            id: ID::from(id),
            person_name: name.into(),
            phone_number: phone.into(),
            amount: 100,
            due_date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(due_in_days),
            is_paid,
        }
    }

    #[test]
    fn orders_unpaid_before_paid_then_by_due_date_ascending() {
        let reminders = vec![
            reminder(1, "Amit", "91111", true, 1),
            reminder(2, "Sneha", "92222", false, 5),
            reminder(3, "Rahul", "93333", false, 2),
            reminder(4, "Priya", "94444", true, 0),
        ];

        let ordered = display_list(&reminders, "");
        let ids: Vec<i32> = ordered.iter().map(|r| r.id.inner()).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn filters_by_name_case_insensitively() {
        let reminders = vec![
            reminder(1, "Rahul Sharma", "9876543210", false, 1),
            reminder(2, "Amit Patel", "9123456789", false, 2),
        ];

        let matches = display_list(&reminders, "rahul");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id.inner(), 1);
    }

    #[test]
    fn filters_by_phone_substring() {
        let reminders = vec![
            reminder(1, "Rahul Sharma", "9876543210", false, 1),
            reminder(2, "Amit Patel", "9123456789", false, 2),
        ];

        let matches = display_list(&reminders, "912345");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id.inner(), 2);
    }

    #[test]
    fn sums_only_unpaid_amounts() {
        let mut reminders = vec![
            reminder(1, "Amit", "91111", false, 1),
            reminder(2, "Sneha", "92222", true, 2),
        ];
        reminders[0].amount = 1200;
        reminders[1].amount = 250;

        assert_eq!(total_pending(&reminders), 1200);
        assert_eq!(pending_count(&reminders), 1);
    }

    #[test]
    fn formats_amounts_with_indian_grouping() {
        assert_eq!(format_inr(500), "₹500");
        assert_eq!(format_inr(75000), "₹75,000");
        assert_eq!(format_inr(1234567), "₹12,34,567");
        assert_eq!(format_inr(100000000), "₹10,00,00,000");
    }
}
