use chrono::{
  DateTime,
  Utc
};

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

#[must_use]
pub fn format_time_remaining(
  final_date: DateTime<Utc>,
  now: DateTime<Utc>
) -> String {
  let diff_ms = final_date
    .signed_duration_since(now)
    .num_milliseconds()
    as f64;

  let minutes = diff_ms / MS_PER_MINUTE;
  let hours = diff_ms / MS_PER_HOUR;
  let days = diff_ms / MS_PER_DAY;

  if days <= 0.0 {
    "0 minutos".to_string()
  } else if days > 1.0 {
    format!("{} dias", days.floor())
  } else if hours > 1.0 {
    format!("{} horas", hours.floor())
  } else {
    format!(
      "{} minutos",
      minutes.floor()
    )
  }
}
