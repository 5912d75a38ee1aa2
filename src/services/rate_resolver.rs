use chrono::NaiveDate;

use crate::models::rate::{EffectiveRate, RateRule};
use crate::models::room::{Room, RoomType};

/// Surcharge per adult beyond the two included in the base rate, when no rule applies
pub const DEFAULT_EXTRA_ADULT: f64 = 30.0;
/// Surcharge per child, when no rule applies
pub const DEFAULT_EXTRA_CHILD: f64 = 15.0;

pub struct RateResolver;

impl RateResolver {
    /// First rule in table order matching both date and room type
    pub fn find_rule(date: NaiveDate, room_type: RoomType, rates: &[RateRule]) -> Option<&RateRule> {
        rates.iter().find(|rule| rule.matches(date, room_type))
    }

    /// Effective nightly rate for `room` on `date`. Falls back to the room's
    /// own base rate and the default surcharges when no rule matches.
    pub fn resolve(date: NaiveDate, room: &Room, rates: &[RateRule]) -> EffectiveRate {
        match Self::find_rule(date, room.room_type, rates) {
            Some(rule) => EffectiveRate {
                nightly_base: rule.base_rate,
                extra_adult_surcharge: rule.extra_adult,
                extra_child_surcharge: rule.extra_child,
            },
            None => EffectiveRate {
                nightly_base: room.base_rate,
                extra_adult_surcharge: DEFAULT_EXTRA_ADULT,
                extra_child_surcharge: DEFAULT_EXTRA_CHILD,
            },
        }
    }
}
