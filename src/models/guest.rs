use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub fullname: String,
    pub contact: String,
    pub date: chrono::NaiveDateTime,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct GuestForm {
    #[validate(length(min = 1))]
    pub fullname: String,
    #[validate(length(min = 1))]
    pub contact: String,
}
