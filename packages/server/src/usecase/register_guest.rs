//! UseCase: ゲスト訪問の登録
//!
//! 入力値を全項目検証してから保存する。失敗した項目はまとめて返す。
//! 「今日」は設定された UTC オフセットでの暦日で判定する。

use std::sync::Arc;

use campus_entry_shared::time::{Clock, timestamp_to_local_date};
use chrono::FixedOffset;

use crate::domain::{
    ContactNumber, DepartmentId, EnterTime, Guest, GuestName, GuestRepository, NewGuest,
    Timestamp, ValueObjectError, VisitDate, VisitPurpose,
};

use super::error::RegisterGuestError;

/// 登録フォームの生の入力値
///
/// 学科 ID は境界（HTTP ハンドラ）で検証済みのものを受け取る。
#[derive(Debug, Clone, Default)]
pub struct RegisterGuestInput {
    pub guest_name: Option<String>,
    pub contact: Option<String>,
    pub visit_purpose: Option<String>,
    pub visit_date: Option<String>,
    pub enter_time: Option<String>,
    pub out_time: Option<String>,
}

/// ゲスト登録のユースケース
pub struct RegisterGuestUseCase {
    repository: Arc<dyn GuestRepository>,
    clock: Arc<dyn Clock>,
    utc_offset: FixedOffset,
}

impl RegisterGuestUseCase {
    pub fn new(
        repository: Arc<dyn GuestRepository>,
        clock: Arc<dyn Clock>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            repository,
            clock,
            utc_offset,
        }
    }

    /// 登録を実行
    ///
    /// 保存されたゲストは Pending かつ未読。
    pub async fn execute(
        &self,
        department_id: DepartmentId,
        input: RegisterGuestInput,
    ) -> Result<Guest, RegisterGuestError> {
        let now = self.clock.now_millis();
        let today = timestamp_to_local_date(now, self.utc_offset);
        let new_guest = validate(department_id, input, today)?;

        let guest = self.repository.insert(new_guest, Timestamp::new(now)).await;
        tracing::info!(
            "Guest {} registered for department {} (visit on {})",
            guest.id,
            guest.department_id,
            guest.visit_date.value()
        );
        Ok(guest)
    }
}

fn validate(
    department_id: DepartmentId,
    input: RegisterGuestInput,
    today: chrono::NaiveDate,
) -> Result<NewGuest, RegisterGuestError> {
    let mut errors: Vec<ValueObjectError> = Vec::new();

    let name = GuestName::new(input.guest_name.unwrap_or_default());
    let contact = ContactNumber::new(input.contact.unwrap_or_default());
    let purpose = VisitPurpose::new(input.visit_purpose.unwrap_or_default());
    let visit_date = VisitDate::parse(&input.visit_date.unwrap_or_default(), today);
    let enter_time = EnterTime::new(input.enter_time.unwrap_or_default());

    let name = name.map_err(|e| errors.push(e)).ok();
    let contact = contact.map_err(|e| errors.push(e)).ok();
    let purpose = purpose.map_err(|e| errors.push(e)).ok();
    let visit_date = visit_date.map_err(|e| errors.push(e)).ok();
    let enter_time = enter_time.map_err(|e| errors.push(e)).ok();

    match (name, contact, purpose, visit_date, enter_time) {
        (Some(name), Some(contact), Some(purpose), Some(visit_date), Some(enter_time)) => {
            Ok(NewGuest {
                department_id,
                name,
                contact,
                purpose,
                visit_date,
                enter_time,
                out_time: input.out_time.filter(|t| !t.trim().is_empty()),
            })
        }
        _ => Err(RegisterGuestError::Validation(errors)),
    }
}
