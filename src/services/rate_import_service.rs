use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use std::str::FromStr;

use crate::models::rate::RateRule;
use crate::models::room::RoomType;

/// Number of comma separated fields in a rate line
pub const RATE_FIELDS: usize = 8;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based, counting the header
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct RateImport {
    pub rules: Vec<RateRule>,
    pub skipped: Vec<SkippedLine>,
}

pub struct RateImportService;

impl RateImportService {
    /// Parse seasonal rates exported as
    /// `room type, date, base rate, extra adult, extra child, min stay, stop sell, available rooms`.
    /// The first line is a header.
    pub fn parse(text: &str) -> RateImport {
        let mut import = RateImport::default();

        for (index, line) in text.split('\n').enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Ok(rule) => import.rules.push(rule),
                Err(reason) => {
                    warn!("Skipping rate line {}: {}", index + 1, reason);
                    import.skipped.push(SkippedLine {
                        line: index + 1,
                        reason,
                    });
                }
            }
        }

        import
    }

    fn parse_line(line: &str) -> Result<RateRule, String> {
        let parts: Vec<&str> = line.split(',').map(|p| p.trim()).collect();
        if parts.len() < RATE_FIELDS {
            return Err(format!(
                "expected {} fields, found {}",
                RATE_FIELDS,
                parts.len()
            ));
        }

        let room_type = RoomType::from_str(parts[0]).map_err(|e| e.to_string())?;
        let date = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{}'", parts[1]))?;

        Ok(RateRule {
            date,
            room_type,
            base_rate: number(parts[2], "base rate")?,
            extra_adult: number(parts[3], "extra adult rate")?,
            extra_child: number(parts[4], "extra child rate")?,
            min_stay: number(parts[5], "min stay")?,
            stop_sell: parts[6].eq_ignore_ascii_case("yes"),
            available_rooms: number(parts[7], "available rooms")?,
        })
    }
}

fn number<T: FromStr>(value: &str, field: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {} '{}'", field, value))
}
