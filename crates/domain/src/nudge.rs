use crate::reminder::Reminder;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved characters is escaped, matching what
/// browsers produce for the text query parameter.
const WA_TEXT_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Hi,
}

/// The nudge text sent over WhatsApp, with the person's name, the
/// amount in rupees and the due date substituted in.
pub fn nudge_message(reminder: &Reminder, language: Language) -> String {
    let amount = format!("₹{}", reminder.amount);
    let date = reminder.due_date.format("%d %b %Y").to_string();
    match language {
        Language::En => format!(
            "Hi {}, friendly reminder for payment of {} due on {}.",
            reminder.person_name, amount, date
        ),
        Language::Hi => format!(
            "नमस्ते {}, {} का भुगतान {} तक बाकी है।",
            reminder.person_name, amount, date
        ),
    }
}

/// Builds the `https://wa.me/...` deep link that opens a WhatsApp
/// conversation with the nudge message prefilled. The phone number is
/// reduced to its digits; formatting characters and a leading `+` are
/// dropped.
pub fn whatsapp_link(reminder: &Reminder, language: Language) -> String {
    let digits: String = reminder
        .phone_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let message = nudge_message(reminder, language);
    let text: String = utf8_percent_encode(&message, WA_TEXT_ENCODE).collect();
    format!("https://wa.me/{}?text={}", digits, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity::ID;
    use chrono::{TimeZone, Utc};

    fn reminder(phone: &str) -> Reminder {
        Reminder {
            id: ID::from(1),
            person_name: "Rahul Sharma".into(),
            phone_number: phone.into(),
            amount: 500,
            due_date: Utc.with_ymd_and_hms(2026, 8, 9, 12, 0, 0).unwrap(),
            is_paid: false,
        }
    }

    #[test]
    fn english_message_substitutes_name_amount_and_date() {
        let msg = nudge_message(&reminder("9876543210"), Language::En);
        assert_eq!(
            msg,
            "Hi Rahul Sharma, friendly reminder for payment of ₹500 due on 09 Aug 2026."
        );
    }

    #[test]
    fn hindi_message_substitutes_name_amount_and_date() {
        let msg = nudge_message(&reminder("9876543210"), Language::Hi);
        assert!(msg.contains("Rahul Sharma"));
        assert!(msg.contains("₹500"));
        assert!(msg.contains("09 Aug 2026"));
    }

    #[test]
    fn link_strips_everything_but_digits_from_the_phone_number() {
        let link = whatsapp_link(&reminder("+91 98765-43210"), Language::En);
        assert!(link.starts_with("https://wa.me/919876543210?text="));
    }

    #[test]
    fn link_percent_encodes_the_message() {
        let link = whatsapp_link(&reminder("9876543210"), Language::En);
        let text = link.split("text=").nth(1).unwrap();
        assert!(text.contains("Hi%20Rahul%20Sharma"));
        assert!(!text.contains(' '));
    }
}
