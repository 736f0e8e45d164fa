// src/core/number.rs
//
// Number -> text the way the board page prints numbers: shortest round-trip
// digits, plain notation for magnitudes in [1e-6, 1e21) and `d.ddde+N`
// outside it. `fixed_2` is the two-decimal variant used for money, where an
// exact tie rounds away from zero.

/// 12.0 -> "12", 0.5 -> "0.5", 1e21 -> "1e+21", 1e-7 -> "1e-7".
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return s!("NaN");
    }
    if x == 0.0 {
        return s!("0");
    }
    if x.is_infinite() {
        return s!(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let sign = if x < 0.0 { "-" } else { "" };
    // LowerExp without precision yields the shortest round-trip digits.
    let sci = format!("{:e}", x.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return x.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return x.to_string();
    };

    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        join!(&digits, &"0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        join!(int, ".", frac)
    } else if -6 < n && n <= 0 {
        join!("0.", &"0".repeat((-n) as usize), &digits)
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { "-" } else { "+" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };
    join!(sign, &body)
}

/// Two decimals with `.` as separator. Exact binary ties (0.125, 1234.375)
/// round away from zero; |x| >= 1e21 falls back to `number_to_string`.
pub fn fixed_2(x: f64) -> String {
    if x.is_nan() {
        return s!("NaN");
    }
    let a = x.abs();
    if a >= 1e21 {
        return number_to_string(x);
    }
    let sign = if x < 0.0 { "-" } else { "" };

    // A tie at the third decimal means a == j/8 with j odd. Times 8 is exact
    // here and every integer past 2^53 is even, so the check is exact too.
    let eighths = a * 8.0;
    let body = if eighths.fract() == 0.0 && eighths < 9_007_199_254_740_992.0 && (eighths as u64) % 2 == 1 {
        let j = eighths as u64 as u128;
        // a * 100 == 25j / 2, rounded half up
        let cents = (25 * j + 1) / 2;
        format!("{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{:.2}", a)
    };
    join!(sign, &body)
}
