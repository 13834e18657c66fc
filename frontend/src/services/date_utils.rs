use chrono::NaiveDate;
use js_sys::Date;

/// Browser's current local date
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_recent() {
        assert!(today() > NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(now_millis() > 1_700_000_000_000);
    }
}
