pub const MINUTES_PER_DAY: i32 = 24 * 60;

pub fn parse_clock_time(text: &str) -> Option<i32> {
    let (hour_text, minute_text) = text.split_once(':')?;
    let hours = hour_text.parse::<i32>().ok()?;
    let minutes = minute_text.parse::<i32>().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

pub fn parse_duration(text: &str) -> Option<i32> {
    let Some((hour_text, minute_text)) = text.split_once(':') else {
        // A bare hour count means that many whole hours.
        let hours = text.parse::<i32>().ok()?;
        if hours < 0 {
            return None;
        }
        return hours.checked_mul(60);
    };
    let hours = hour_text.parse::<i32>().ok()?;
    let minutes = minute_text.parse::<i32>().ok()?;
    if hours < 0 || !(0..=59).contains(&minutes) {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

pub fn format_clock_time(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

pub fn format_duration(minutes: i32) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;
    match (hours, remainder) {
        (0, 0) => "0 min".to_string(),
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}
