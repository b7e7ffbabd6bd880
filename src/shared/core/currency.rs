// Money labels in the site's convention: "R$ " followed by the pt-BR number format.
//
// - '.' groups thousands, ',' separates decimals.
// - At most three fraction digits, trailing zeros dropped.
//   1000 -> "R$ 1.000", 1234.5 -> "R$ 1.234,5".

pub fn format_brl(amount: f64) -> String {
    if !amount.is_finite() {
        return "R$ 0".to_string();
    }
    let thousandths = (amount.abs() * 1000.0).round() as u64;
    let integer = thousandths / 1000;
    let fraction = thousandths % 1000;
    let sign = if amount < 0.0 && thousandths > 0 { "-" } else { "" };

    let mut label = format!("R$ {sign}{}", group_thousands(integer));
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        label.push(',');
        label.push_str(digits.trim_end_matches('0'));
    }
    label
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
