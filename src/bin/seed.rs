use chrono::{Duration, Utc};
use udhaar_domain::NewReminder;
use udhaar_infra::setup_context;

/// Puts a few sample reminders into an empty store. Pointless without
/// a DATABASE_URL, since the in memory store dies with the process.
#[actix_web::main]
async fn main() {
    let ctx = setup_context().await;

    let existing = ctx.repos.reminders.find_all().await;
    if !existing.is_empty() {
        println!("Database already has data, skipping seed.");
        return;
    }

    let samples = vec![
        NewReminder {
            person_name: "Rahul Sharma".into(),
            phone_number: "9876543210".into(),
            amount: 500,
            due_date: Utc::now() + Duration::days(2),
            is_paid: false,
        },
        NewReminder {
            person_name: "Amit Patel".into(),
            phone_number: "9123456789".into(),
            amount: 1200,
            due_date: Utc::now() - Duration::days(1),
            is_paid: false,
        },
        NewReminder {
            person_name: "Sneha Gupta".into(),
            phone_number: "9988776655".into(),
            amount: 250,
            due_date: Utc::now() - Duration::days(5),
            is_paid: true,
        },
    ];

    for draft in &samples {
        ctx.repos
            .reminders
            .insert(draft)
            .await
            .expect("Expected to insert sample reminder");
    }
    println!("Seeded {} reminders.", samples.len());
}
