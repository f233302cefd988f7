use common::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 圆桌座位总数，座位编号 0..=9
pub const TABLE_SEAT_COUNT: u8 = 10;

/// 已校验的座位编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatIndex(u8);

impl SeatIndex {
    /// 越界返回 `AppError::Validation`
    pub fn new(index: i64) -> Result<Self, AppError> {
        if (0..TABLE_SEAT_COUNT as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(AppError::Validation(format!("seat.index.out.of.range: {}", index)))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SeatIndex> {
        (0..TABLE_SEAT_COUNT).map(SeatIndex)
    }
}

impl TryFrom<u8> for SeatIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < TABLE_SEAT_COUNT { Ok(Self(value)) } else { Err(format!("seat index {} out of range", value)) }
    }
}

impl From<SeatIndex> for u8 {
    fn from(value: SeatIndex) -> Self {
        value.0
    }
}

impl fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 成员在圆桌上的状态
///
/// 存储格式：`{"state": "seated", "index": 3}`，`Unseated` 只有 `state` 字段。
/// 旧版数据使用有符号整数 `seatPosition`：`null` 未入座，`k` 入座，`-(k+1)` 申请座位 `k`，
/// 见 [`SeatState::from_position`] / [`SeatState::to_position`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum SeatState {
    #[default]
    Unseated,
    Requesting(SeatIndex),
    Seated(SeatIndex),
}

impl SeatState {
    pub fn from_position(position: Option<i32>) -> Result<Self, AppError> {
        match position {
            None => Ok(SeatState::Unseated),
            Some(p) if p >= 0 => Ok(SeatState::Seated(SeatIndex::new(p as i64)?)),
            Some(p) => Ok(SeatState::Requesting(SeatIndex::new(-(p as i64) - 1)?)),
        }
    }

    pub fn to_position(&self) -> Option<i32> {
        match self {
            SeatState::Unseated => None,
            SeatState::Seated(index) => Some(index.get() as i32),
            SeatState::Requesting(index) => Some(-(index.get() as i32) - 1),
        }
    }

    pub fn seated_at(&self) -> Option<SeatIndex> {
        match self {
            SeatState::Seated(index) => Some(*index),
            _ => None,
        }
    }

    pub fn requested_seat(&self) -> Option<SeatIndex> {
        match self {
            SeatState::Requesting(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatState::Unseated => write!(f, "unseated"),
            SeatState::Requesting(index) => write!(f, "requesting({})", index),
            SeatState::Seated(index) => write!(f, "seated({})", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_seat_index_bounds() {
        assert!(SeatIndex::new(0).is_ok());
        assert!(SeatIndex::new(9).is_ok());
        assert!(matches!(SeatIndex::new(10), Err(AppError::Validation(_))));
        assert!(matches!(SeatIndex::new(-1), Err(AppError::Validation(_))));
        assert_eq!(SeatIndex::all().count(), TABLE_SEAT_COUNT as usize);
    }

    #[test]
    fn test_legacy_position_decoding() {
        assert_eq!(SeatState::from_position(None).unwrap(), SeatState::Unseated);
        assert_eq!(SeatState::from_position(Some(0)).unwrap(), SeatState::Seated(SeatIndex::new(0).unwrap()));
        assert_eq!(SeatState::from_position(Some(-1)).unwrap(), SeatState::Requesting(SeatIndex::new(0).unwrap()));
        assert_eq!(SeatState::from_position(Some(-10)).unwrap(), SeatState::Requesting(SeatIndex::new(9).unwrap()));
        assert!(SeatState::from_position(Some(10)).is_err());
        assert!(SeatState::from_position(Some(-11)).is_err());
    }

    #[test]
    fn test_legacy_position_encoding() {
        let three = SeatIndex::new(3).unwrap();
        assert_eq!(SeatState::Unseated.to_position(), None);
        assert_eq!(SeatState::Seated(three).to_position(), Some(3));
        assert_eq!(SeatState::Requesting(three).to_position(), Some(-4));
    }

    #[test]
    fn test_bson_shape() {
        let seated = bson::to_bson(&SeatState::Seated(SeatIndex::new(5).unwrap())).unwrap();
        assert_eq!(seated, bson::Bson::Document(doc! { "state": "seated", "index": 5_i32 }));
        let unseated = bson::to_bson(&SeatState::Unseated).unwrap();
        assert_eq!(unseated, bson::Bson::Document(doc! { "state": "unseated" }));
        let back: SeatState = bson::from_bson(seated).unwrap();
        assert_eq!(back.seated_at().map(SeatIndex::get), Some(5));
    }

    #[test]
    fn test_json_rejects_out_of_range_index() {
        let parsed = serde_json::from_str::<SeatState>(r#"{"state":"seated","index":12}"#);
        assert!(parsed.is_err());
    }
}
