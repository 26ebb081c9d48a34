mod nudge;
mod reminder;
mod shared;
mod view;

pub use nudge::{nudge_message, whatsapp_link, Language};
pub use reminder::{NewReminder, Reminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use view::{display_list, format_inr, pending_count, total_pending};
