#[must_use]
pub fn format_cost(
  amount: f64
) -> String {
  let fixed = format!("{amount:.2}");
  let (int_part, frac_part) =
    match fixed.split_once('.') {
      | Some((int_part, frac_part)) => {
        (int_part, frac_part)
      }
      | None => (fixed.as_str(), "00")
    };

  let (sign, digits) =
    match int_part.strip_prefix('-') {
      | Some(rest) => ("-", rest),
      | None => ("", int_part)
    };

  let mut grouped =
    String::with_capacity(
      digits.len() + digits.len() / 3
    );
  for (idx, digit) in
    digits.chars().enumerate()
  {
    if idx > 0
      && (digits.len() - idx) % 3 == 0
    {
      grouped.push('.');
    }
    grouped.push(digit);
  }

  format!("{sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
  use super::format_cost;

  #[test]
  fn formats_thousands_with_periods() {
    assert_eq!(
      format_cost(1234.5),
      "1.234,50"
    );
  }

  #[test]
  fn formats_zero() {
    assert_eq!(
      format_cost(0.0),
      "0,00"
    );
  }

  #[test]
  fn rounds_before_grouping() {
    assert_eq!(
      format_cost(999_999.999),
      "1.000.000,00"
    );
  }

  #[test]
  fn small_amounts_stay_ungrouped() {
    assert_eq!(
      format_cost(123.0),
      "123,00"
    );
  }

  #[test]
  fn groups_large_amounts() {
    assert_eq!(
      format_cost(12_345_678.9),
      "12.345.678,90"
    );
  }

  #[test]
  fn negative_sign_passes_through() {
    assert_eq!(
      format_cost(-1234.5),
      "-1.234,50"
    );
  }
}
