use uuid::Uuid;

pub fn build_id() -> String {
    let uuid = Uuid::new_v4().simple();
    format!("{}", uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_id_unique() {
        let a = build_id();
        let b = build_id();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
