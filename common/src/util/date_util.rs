/// 当前 Unix 秒时间戳
pub fn now() -> i64 {
    chrono::Local::now().timestamp()
}

/// 当前 Unix 毫秒时间戳
pub fn now_millis() -> i64 {
    chrono::Local::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_follow_seconds() {
        let secs = now();
        assert!(now_millis() / 1000 >= secs);
    }
}
