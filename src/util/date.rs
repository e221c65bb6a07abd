//! Calendar date for application stamps.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// `YYYY-MM-DD` prefix of an ISO-8601 timestamp, if well formed.
pub fn iso_date_prefix(timestamp: &str) -> Option<&str> {
    let date = timestamp.get(..10)?;
    let bytes = date.as_bytes();
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shape_ok.then_some(date)
}

/// Today's date in UTC as `YYYY-MM-DD`; empty outside the browser.
pub fn today_iso_date() -> String {
    #[cfg(feature = "csr")]
    {
        let stamp: String = js_sys::Date::new_0().to_iso_string().into();
        iso_date_prefix(&stamp).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
