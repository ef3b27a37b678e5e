//! Built-in token tables.
//!
//! Replacements are written in reference-time syntax, where each field of
//! the fixed moment `Mon Jan 2 15:04:05.999999999 -0700 MST 2006` stands for
//! itself (`2006` is the four-digit year, `01` the zero-padded month, and
//! so on).

/// Small table: upper/lower case are significant and only the common
/// spellings are recognized.
pub const STRICT_TOKENS: &[(&str, &str)] = &[
    ("YY", "06"),
    ("YYYY", "2006"),
    ("M", "1"),
    ("MM", "01"),
    ("MMM", "Jan"),
    ("MMMM", "January"),
    ("D", "2"),
    ("DD", "02"),
    ("HH", "15"),
    ("hh", "03"),
    ("mm", "04"),
    ("ss", "05"),
    ("f", "9"),
    ("ff", "99"),
    ("fff", "999"),
    ("ffff", "9999"),
    ("fffff", "99999"),
    ("ffffff", "999999"),
    ("fffffff", "9999999"),
    ("ffffffff", "99999999"),
    ("fffffffff", "999999999"),
    ("A", "PM"),
    ("a", "pm"),
    ("z", "-07"),
    ("zz", "-0700"),
    ("zzz", "-7:00"),
    ("Z", "-07"),
    ("ZZ", "-0700"),
    ("ZZZ", "-7:00"),
];

/// Broad table: accepts case variants (`yyyy`, `Yyyy`, `Mmm`, `Dd`, ...),
/// fractional seconds in `f`, `F` and `Ff...` spellings, zone names, and
/// the `Day` weekday token.
pub const STANDARD_TOKENS: &[(&str, &str)] = &[
    // Year
    ("yyyy", "2006"),
    ("yy", "06"),
    ("YYYY", "2006"),
    ("YY", "06"),
    ("Yyyy", "2006"),
    ("Yy", "06"),
    // Month
    ("M", "1"),
    ("MM", "01"),
    ("MMM", "Jan"),
    ("Mmm", "Jan"),
    ("mmm", "Jan"),
    ("MMMM", "January"),
    ("Mmmm", "January"),
    ("mmmm", "January"),
    // Day of month
    ("D", "2"),
    ("DD", "02"),
    ("Dd", "02"),
    ("d", "2"),
    ("dd", "02"),
    // Hour
    ("h", "3"),
    ("H", "3"),
    ("hh", "03"),
    ("HH", "15"),
    ("Hh", "15"),
    // Minute
    ("m", "4"),
    ("mm", "04"),
    // Second
    ("s", "5"),
    ("ss", "05"),
    ("S", "5"),
    ("SS", "05"),
    ("Ss", "05"),
    // Fractional seconds
    ("f", "9"),
    ("ff", "99"),
    ("fff", "999"),
    ("ffff", "9999"),
    ("fffff", "99999"),
    ("ffffff", "999999"),
    ("fffffff", "9999999"),
    ("ffffffff", "99999999"),
    ("fffffffff", "999999999"),
    ("F", "9"),
    ("FF", "99"),
    ("FFF", "999"),
    ("FFFF", "9999"),
    ("FFFFF", "99999"),
    ("FFFFFF", "999999"),
    ("FFFFFFF", "9999999"),
    ("FFFFFFFF", "99999999"),
    ("FFFFFFFFF", "999999999"),
    ("Ff", "99"),
    ("Fff", "999"),
    ("Ffff", "9999"),
    ("Fffff", "99999"),
    ("Ffffff", "999999"),
    ("Fffffff", "9999999"),
    ("Ffffffff", "99999999"),
    ("Fffffffff", "999999999"),
    // AM/PM
    ("A", "PM"),
    ("a", "pm"),
    // Zone offset
    ("z", "-07"),
    ("zz", "-0700"),
    ("zzz", "-7:00"),
    ("Z", "-07"),
    ("ZZ", "-0700"),
    ("ZZZ", "-7:00"),
    ("Zz", "-0700"),
    ("Zzz", "-7:00"),
    // Zone name
    ("O", "MST"),
    ("o", "mst"),
    // Weekday
    ("Day", "Monday"),
];
