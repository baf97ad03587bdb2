pub fn mkerr(error: &str) -> serde_json::Value {
    serde_json::json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evals_properly() {
        assert_eq!(
            mkerr("not_allowed").to_string(),
            serde_json::json!({ "error": "not_allowed" }).to_string()
        );
    }
}
