use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::StoreResult;
use crate::models::room::RoomStatus;

/// Headline occupancy numbers for the dashboard.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryReport {
    pub guests: i64,
    pub rooms: i64,
    pub booked_rooms: i64,
}

pub async fn summary_report(pool: &SqlitePool) -> StoreResult<SummaryReport> {
    let guests = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guest")
        .fetch_one(pool)
        .await?;
    let rooms = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM room")
        .fetch_one(pool)
        .await?;
    let booked_rooms =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM room WHERE room_status = ?")
            .bind(RoomStatus::Booked)
            .fetch_one(pool)
            .await?;
    Ok(SummaryReport {
        guests,
        rooms,
        booked_rooms,
    })
}

/// Renders the guest register as CSV, one row per guest plus a header line.
pub async fn export_guests_csv(pool: &SqlitePool) -> StoreResult<String> {
    let guests = super::guests::list_guests(pool).await?;
    let mut out = String::from("id,fullname,contact,date\n");
    for guest in guests {
        out.push_str(&format!(
            "{},{},{},{}\n",
            guest.id,
            csv_field(&guest.fullname),
            csv_field(&guest.contact),
            guest.date.format("%Y-%m-%d %H:%M:%S"),
        ));
    }
    Ok(out)
}

/// Quotes a field when it contains a comma, quote or newline, doubling
/// embedded quotes per RFC 4180.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingForm;
    use crate::models::guest::GuestForm;
    use crate::models::room::{RoomForm, RoomType};
    use crate::store::{bookings, guests, rooms};

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(csv_field("John Smith"), "John Smith");
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        assert_eq!(csv_field("Smith, John"), "\"Smith, John\"");
        assert_eq!(csv_field("the \"Duke\""), "\"the \"\"Duke\"\"\"");
    }

    #[sqlx::test]
    async fn summary_counts_match_the_tables(pool: SqlitePool) {
        let guest = guests::create_guest(
            &pool,
            &GuestForm {
                fullname: "Ada Lovelace".to_string(),
                contact: "ada@example.com".to_string(),
            },
        )
        .await
        .unwrap();
        let booked = rooms::create_room(
            &pool,
            &RoomForm {
                room_type: RoomType::Single,
            },
        )
        .await
        .unwrap();
        rooms::create_room(
            &pool,
            &RoomForm {
                room_type: RoomType::Family,
            },
        )
        .await
        .unwrap();
        bookings::create_booking(
            &pool,
            &BookingForm {
                guest_id: guest.id,
                room_id: booked.id,
            },
        )
        .await
        .unwrap();

        let report = summary_report(&pool).await.unwrap();
        assert_eq!(report.guests, 1);
        assert_eq!(report.rooms, 2);
        assert_eq!(report.booked_rooms, 1);
    }

    #[sqlx::test]
    async fn csv_has_a_header_and_one_row_per_guest(pool: SqlitePool) {
        for name in ["Ada Lovelace", "Grace Hopper"] {
            guests::create_guest(
                &pool,
                &GuestForm {
                    fullname: name.to_string(),
                    contact: format!("{}@example.com", name.split(' ').next().unwrap()),
                },
            )
            .await
            .unwrap();
        }

        let csv = export_guests_csv(&pool).await.unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,fullname,contact,date"));
        assert_eq!(lines.count(), 2);
        assert!(csv.contains("Ada Lovelace"));
        assert!(csv.contains("Grace Hopper"));
    }

    #[sqlx::test]
    async fn empty_register_exports_just_the_header(pool: SqlitePool) {
        let csv = export_guests_csv(&pool).await.unwrap();
        assert_eq!(csv, "id,fullname,contact,date\n");
    }
}
